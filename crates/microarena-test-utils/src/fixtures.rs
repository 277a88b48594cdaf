//! Reusable tensor descriptor fixtures.
//!
//! - [`scenario_tensors`]: the A/B/C graph used to walk through
//!   allocate, free, and compaction.
//! - [`uniform_tensors`]: `n` identical tensors for capacity tests.
//! - [`fill_pattern`] / [`pattern_matches`]: per-tensor byte signatures
//!   for checking that relocation preserves content.

use microarena_core::{ElementType, TensorDescriptor, TensorId};

/// Tensor A in [`scenario_tensors`]: float32 × 10, 40 bytes.
pub const A: TensorId = TensorId(0);
/// Tensor B in [`scenario_tensors`]: int8 × 5, 5 bytes.
pub const B: TensorId = TensorId(1);
/// Tensor C in [`scenario_tensors`]: int32 × 1, 4 bytes.
pub const C: TensorId = TensorId(2);

/// Three tensors of mixed width: A (float32 × 10), B (int8 × 5),
/// C (int32 × 1).
pub fn scenario_tensors() -> Vec<TensorDescriptor> {
    vec![
        TensorDescriptor::new("A", ElementType::Float32, 10),
        TensorDescriptor::new("B", ElementType::Int8, 5),
        TensorDescriptor::new("C", ElementType::Int32, 1),
    ]
}

/// `n` tensors named `t0..tn`, each `element_count` elements of
/// `element_type`.
pub fn uniform_tensors(
    n: usize,
    element_type: ElementType,
    element_count: usize,
) -> Vec<TensorDescriptor> {
    (0..n)
        .map(|i| TensorDescriptor::new(format!("t{i}"), element_type, element_count))
        .collect()
}

/// Byte `i` of the signature for tensor `id`.
pub fn pattern_byte(id: TensorId, i: usize) -> u8 {
    (id.0 as usize)
        .wrapping_mul(31)
        .wrapping_add(i.wrapping_mul(7))
        .wrapping_add(1) as u8
}

/// Overwrite `bytes` with the signature for tensor `id`.
pub fn fill_pattern(bytes: &mut [u8], id: TensorId) {
    for (i, b) in bytes.iter_mut().enumerate() {
        *b = pattern_byte(id, i);
    }
}

/// Whether `bytes` hold the signature for tensor `id`.
pub fn pattern_matches(bytes: &[u8], id: TensorId) -> bool {
    bytes
        .iter()
        .enumerate()
        .all(|(i, &b)| b == pattern_byte(id, i))
}
