//! Handles for permanent (static) regions.

use std::fmt;

/// Location of a static allocation within the arena buffer.
///
/// Static regions are carved from the high end of the buffer and are never
/// moved or reclaimed, so a region stays valid for the arena's lifetime.
/// Handles are only minted by
/// [`TensorArena::allocate_static`](crate::TensorArena::allocate_static).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct StaticRegion {
    pub(crate) offset: usize,
    pub(crate) len: usize,
}

impl StaticRegion {
    pub(crate) fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// Byte offset of the region within the arena buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Length of the region in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether this is a zero-length region.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// One past the last byte of the region.
    pub fn end(&self) -> usize {
        self.offset + self.len
    }
}

impl fmt::Display for StaticRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StaticRegion(off={}, len={})", self.offset, self.len)
    }
}
