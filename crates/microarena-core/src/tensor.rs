//! The externally owned tensor descriptor.

use crate::element::ElementType;

/// Describes one tensor buffer: what it holds and where it currently lives.
///
/// Descriptors are owned by the execution engine, typically in a slice
/// indexed by [`TensorId`](crate::TensorId). The arena reads the type,
/// count, and name, and writes only `data`: it sets the byte offset of
/// the backing region on allocation, rewrites it when compaction relocates
/// the region, and clears it on deallocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TensorDescriptor {
    /// Human-readable name for diagnostics.
    pub name: String,
    /// Element type; determines byte width and alignment.
    pub element_type: ElementType,
    /// Number of elements (product of the shape's dimensions).
    pub element_count: usize,
    /// Byte offset of the backing region within the arena buffer, or
    /// `None` while the tensor is not backed.
    pub data: Option<usize>,
}

impl TensorDescriptor {
    /// Create an unbacked descriptor.
    pub fn new(name: impl Into<String>, element_type: ElementType, element_count: usize) -> Self {
        Self {
            name: name.into(),
            element_type,
            element_count,
            data: None,
        }
    }

    /// Total size in bytes, or `None` if the element type has no fixed
    /// width or the product overflows.
    pub fn byte_size(&self) -> Option<usize> {
        self.element_type.size()?.checked_mul(self.element_count)
    }

    /// Whether the tensor currently has a backing region.
    pub fn is_allocated(&self) -> bool {
        self.data.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_descriptor_is_unbacked() {
        let t = TensorDescriptor::new("input", ElementType::Float32, 10);
        assert_eq!(t.name, "input");
        assert!(!t.is_allocated());
        assert_eq!(t.data, None);
    }

    #[test]
    fn byte_size_is_count_times_width() {
        assert_eq!(
            TensorDescriptor::new("a", ElementType::Float32, 10).byte_size(),
            Some(40)
        );
        assert_eq!(
            TensorDescriptor::new("b", ElementType::Int8, 5).byte_size(),
            Some(5)
        );
        assert_eq!(
            TensorDescriptor::new("c", ElementType::Complex64, 3).byte_size(),
            Some(24)
        );
    }

    #[test]
    fn byte_size_of_unplaceable_type_is_none() {
        assert_eq!(
            TensorDescriptor::new("s", ElementType::String, 4).byte_size(),
            None
        );
    }

    #[test]
    fn byte_size_overflow_is_none() {
        assert_eq!(
            TensorDescriptor::new("huge", ElementType::Int64, usize::MAX).byte_size(),
            None
        );
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn byte_size_scales_with_count(
                count in 0usize..100_000,
                idx in 0usize..ElementType::ALL.len(),
            ) {
                let ty = ElementType::ALL[idx];
                let t = TensorDescriptor::new("t", ty, count);
                prop_assert_eq!(t.byte_size(), ty.size().map(|s| s * count));
            }
        }
    }
}
