//! Core types and traits for the microarena tensor allocator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the boundary between the allocator and the execution engine that
//! drives it: element types, tensor identifiers, the externally owned
//! tensor descriptor, and the diagnostics sink trait.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod element;
pub mod id;
pub mod reporter;
pub mod tensor;

pub use element::{ElementType, WireTensorType};
pub use id::TensorId;
pub use reporter::{ErrorReporter, NullReporter};
pub use tensor::TensorDescriptor;
