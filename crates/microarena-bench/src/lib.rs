//! Benchmark workloads for the microarena tensor allocator.
//!
//! - [`mixed_width_profile`]: `n` tensors cycling through every fixed-width
//!   element type, so alignment padding shows up in the layout
//! - [`release_order`]: deterministic pseudo-random free order via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use microarena_core::{ElementType, TensorDescriptor};

const WIDTHS: [ElementType; 8] = [
    ElementType::Int8,
    ElementType::Float32,
    ElementType::Int16,
    ElementType::Int64,
    ElementType::UInt8,
    ElementType::Int32,
    ElementType::Complex64,
    ElementType::Bool,
];

/// `n` tensors of `elements` elements each, cycling through the
/// fixed-width element types.
pub fn mixed_width_profile(n: usize, elements: usize) -> Vec<TensorDescriptor> {
    (0..n)
        .map(|i| TensorDescriptor::new(format!("t{i}"), WIDTHS[i % WIDTHS.len()], elements))
        .collect()
}

/// Bytes needed to hold every tensor of `profile` back to back with
/// worst-case alignment padding.
pub fn profile_capacity(profile: &[TensorDescriptor]) -> usize {
    profile
        .iter()
        .map(|t| t.byte_size().unwrap_or(0) + t.element_type.size().unwrap_or(1))
        .sum()
}

/// A permutation of `0..n`, fixed by `seed`.
///
/// Used to free tensors out of allocation order so that the next
/// allocation has gaps to compact.
pub fn release_order(n: usize, seed: u64) -> Vec<usize> {
    let mut order: Vec<usize> = (0..n).collect();
    let mut state = seed;
    for i in (1..n).rev() {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let j = ((state >> 33) % (i as u64 + 1)) as usize;
        order.swap(i, j);
    }
    order
}
