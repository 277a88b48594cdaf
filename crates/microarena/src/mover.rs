//! Overlap-safe byte relocation within the arena buffer.
//!
//! Compaction slides a tensor towards the low end of the buffer, and the
//! new region frequently overlaps the old one. The copy direction must
//! therefore follow the move direction: front-to-back when moving down,
//! back-to-front when moving up, so no source byte is overwritten before
//! it has been read.

/// Copy `len` bytes from `buffer[src..]` to `buffer[dest..]`.
///
/// Correct for any overlap between the two regions.
///
/// # Panics
///
/// Panics if either region extends past the end of `buffer`.
pub fn move_bytes(buffer: &mut [u8], dest: usize, src: usize, len: usize) {
    if len == 0 || dest == src {
        return;
    }
    // Both regions are checked before the first write.
    let _ = &buffer[src..src + len];
    let _ = &buffer[dest..dest + len];

    if dest < src {
        for i in 0..len {
            buffer[dest + i] = buffer[src + i];
        }
    } else {
        for i in (0..len).rev() {
            buffer[dest + i] = buffer[src + i];
        }
    }
}
