//! Arena-specific error types.

use microarena_core::TensorId;
use thiserror::Error;

/// Errors that can occur during arena operations.
///
/// Every variant is reported once to the arena's
/// [`ErrorReporter`](microarena_core::ErrorReporter) before it is returned,
/// so callers may simply propagate it. None of them leave the arena in a
/// state that violates `front <= back`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArenaError {
    /// The element type has no byte width the arena can place.
    #[error("type {name} ({tag}) is not supported")]
    UnsupportedType {
        /// Runtime name of the type, or `"UNKNOWN"` for an unrecognised
        /// wire tag.
        name: &'static str,
        /// Numeric tag of the offending type.
        tag: i32,
    },
    /// The allocation table already holds the maximum number of tensors.
    #[error("exceeded the maximum number of tensors that can be allocated ({max})")]
    CapacityExceeded {
        /// Table capacity.
        max: usize,
    },
    /// The request does not fit in the free space between the cursors.
    #[error("failed to allocate memory for '{name}': wanted {requested} bytes, but only {available} were available")]
    OutOfMemory {
        /// Tensor name, or `"static"` for a permanent allocation.
        name: String,
        /// Number of bytes requested.
        requested: usize,
        /// Number of bytes available at the aligned start position.
        available: usize,
    },
    /// A static allocation of zero bytes. Static regions must be non-empty
    /// so that every one of them moves `back` down.
    #[error("static allocation of zero bytes (alignment {alignment})")]
    ZeroSizedStatic {
        /// Alignment that was requested.
        alignment: usize,
    },
    /// Deallocation target is not in the allocation table.
    #[error("failed to deallocate tensor '{name}'; it has not been allocated")]
    NotAllocated {
        /// Tensor name.
        name: String,
    },
    /// Allocation target already holds a dynamic allocation.
    #[error("tensor '{name}' is already allocated")]
    AlreadyAllocated {
        /// Tensor name.
        name: String,
    },
    /// A `TensorId` that does not index the descriptor slice.
    #[error("unknown tensor {id}: descriptor table has {len} entries")]
    UnknownTensor {
        /// The unrecognised ID.
        id: TensorId,
        /// Length of the descriptor slice that was passed in.
        len: usize,
    },
}
