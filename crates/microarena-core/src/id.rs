//! Strongly-typed tensor identifier.

use std::fmt;

/// Identifies a tensor within the execution engine's descriptor table.
///
/// Descriptors are registered when a model is loaded and assigned
/// sequential IDs. `TensorId(n)` is the index of the n-th descriptor in
/// the slice the engine passes to the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TensorId(pub u32);

impl TensorId {
    /// The ID as a slice index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TensorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TensorId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
