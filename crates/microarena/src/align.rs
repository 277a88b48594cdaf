//! Address rounding to an alignment boundary.
//!
//! Alignments here are natural element widths and are not assumed to be
//! powers of two, so rounding uses division rather than bit masking. An
//! alignment of zero is treated as one.

/// Smallest multiple of `alignment` that is `>= address`.
///
/// # Panics
///
/// Panics on overflow in debug builds; use [`checked_align_up`] when
/// `address` is untrusted.
pub fn align_up(address: usize, alignment: usize) -> usize {
    let alignment = alignment.max(1);
    address.div_ceil(alignment) * alignment
}

/// Like [`align_up`], but returns `None` if the result does not fit in a
/// `usize`.
pub fn checked_align_up(address: usize, alignment: usize) -> Option<usize> {
    let alignment = alignment.max(1);
    address.div_ceil(alignment).checked_mul(alignment)
}

/// Largest multiple of `alignment` that is `<= address`.
pub fn align_down(address: usize, alignment: usize) -> usize {
    let alignment = alignment.max(1);
    (address / alignment) * alignment
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn align_up_rounds_to_next_multiple() {
        assert_eq!(align_up(5, 4), 8);
        assert_eq!(align_up(40, 1), 40);
        assert_eq!(align_up(41, 8), 48);
    }

    #[test]
    fn aligned_address_is_unchanged() {
        assert_eq!(align_up(16, 8), 16);
        assert_eq!(align_down(16, 8), 16);
        assert_eq!(align_up(0, 4), 0);
    }

    #[test]
    fn align_down_rounds_to_previous_multiple() {
        assert_eq!(align_down(924, 4), 924);
        assert_eq!(align_down(923, 4), 920);
        assert_eq!(align_down(7, 8), 0);
    }

    #[test]
    fn non_power_of_two_alignment() {
        assert_eq!(align_up(10, 3), 12);
        assert_eq!(align_down(10, 3), 9);
        assert_eq!(align_up(12, 6), 12);
    }

    #[test]
    fn zero_alignment_is_identity() {
        assert_eq!(align_up(13, 0), 13);
        assert_eq!(align_down(13, 0), 13);
    }

    #[test]
    fn checked_align_up_detects_overflow() {
        assert_eq!(checked_align_up(usize::MAX, 8), None);
        assert_eq!(checked_align_up(usize::MAX, 1), Some(usize::MAX));
        assert_eq!(checked_align_up(5, 4), Some(8));
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn align_up_is_smallest_multiple_above(
                addr in 0usize..1_000_000,
                align in 1usize..64,
            ) {
                let up = align_up(addr, align);
                prop_assert_eq!(up % align, 0);
                prop_assert!(up >= addr);
                prop_assert!(up - addr < align);
            }

            #[test]
            fn align_down_is_largest_multiple_below(
                addr in 0usize..1_000_000,
                align in 1usize..64,
            ) {
                let down = align_down(addr, align);
                prop_assert_eq!(down % align, 0);
                prop_assert!(down <= addr);
                prop_assert!(addr - down < align);
            }
        }
    }
}
