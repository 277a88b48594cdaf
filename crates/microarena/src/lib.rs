//! Fixed-capacity, dual-ended tensor arena for memory-constrained inference.
//!
//! A single caller-supplied byte buffer is shared between short-lived
//! intermediate tensors and permanent data, with no heap allocation after
//! construction.
//!
//! # Architecture
//!
//! ```text
//! TensorArena (orchestrator)
//! ├── &mut [u8] buffer (caller-owned, fixed capacity)
//! │   ├── [0, front)      dynamic tensors, packed upwards
//! │   ├── [front, back)   free
//! │   └── [back, C)       static regions, packed downwards
//! ├── AllocationTable<M> (TensorId per live dynamic tensor)
//! └── ErrorReporter (one diagnostic per failure)
//! ```
//!
//! # Allocation classes
//!
//! - **Dynamic:** placed at `front`, relocatable, freed explicitly. Gaps
//!   left by out-of-order frees are closed lazily by compaction.
//! - **Static:** carved below `back`, permanent, never moved.
//!
//! # Safety
//!
//! The crate is entirely safe code. Tensor data is addressed by offset
//! into the borrowed buffer, never by raw pointer.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod align;
pub mod arena;
pub mod config;
pub mod error;
pub mod mover;
pub mod region;
pub mod reporter;
pub mod table;
pub mod type_size;

// Public re-exports for the primary API surface.
pub use arena::{ArenaStats, TensorArena};
pub use config::{ArenaConfig, DEFAULT_MAX_ALLOCATED_TENSORS};
pub use error::ArenaError;
pub use region::StaticRegion;
pub use reporter::TracingReporter;
pub use type_size::{compute_byte_size, size_of_type};
