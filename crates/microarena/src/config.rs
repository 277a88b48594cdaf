//! Arena configuration parameters.

/// Maximum number of concurrently live dynamic allocations, unless the
/// arena is instantiated with a different table capacity.
pub const DEFAULT_MAX_ALLOCATED_TENSORS: usize = 32;

/// Buffer base alignment that satisfies every placeable element type.
///
/// Offsets are aligned relative to the start of the buffer, so they are
/// only aligned in memory if the buffer itself starts on this boundary.
pub const BUFFER_ALIGNMENT: usize = 8;

/// Configuration for the tensor arena.
///
/// All combinations are valid; values are immutable after construction.
/// The table capacity is a const parameter of
/// [`TensorArena`](crate::TensorArena) rather than a field here, since it
/// sizes an inline array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Retract `front` immediately when the most recently placed tensor is
    /// deallocated, instead of waiting for the next compaction.
    ///
    /// Default: `true`.
    pub reclaim_trailing: bool,

    /// Zero every newly placed region, dynamic or static.
    ///
    /// Default: `false`. Kernels normally overwrite their outputs in full.
    pub zero_fill: bool,
}

impl ArenaConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self {
            reclaim_trailing: true,
            zero_fill: false,
        }
    }

    /// Set whether trailing deallocations retract `front` immediately.
    pub fn with_reclaim_trailing(mut self, reclaim: bool) -> Self {
        self.reclaim_trailing = reclaim;
        self
    }

    /// Set whether new regions are zeroed.
    pub fn with_zero_fill(mut self, zero_fill: bool) -> Self {
        self.zero_fill = zero_fill;
        self
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new()
    }
}
