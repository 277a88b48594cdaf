//! Element-type byte widths and tensor byte-size computation.
//!
//! These are the only places the arena learns how large and how aligned a
//! tensor is. A tensor's alignment is its element width, so the same
//! lookup serves both purposes.

use microarena_core::{ElementType, ErrorReporter, TensorDescriptor, WireTensorType};

use crate::error::ArenaError;

/// Byte width of one element of `element_type`.
///
/// Fails with [`ArenaError::UnsupportedType`], reported to `reporter`, for
/// types with no fixed width the arena can place.
pub fn size_of_type<R: ErrorReporter + ?Sized>(
    element_type: ElementType,
    reporter: &mut R,
) -> Result<usize, ArenaError> {
    element_type.size().ok_or_else(|| {
        report(
            reporter,
            ArenaError::UnsupportedType {
                name: element_type.name(),
                tag: i32::from(element_type.tag()),
            },
        )
    })
}

/// Bytes needed for `element_count` elements of a serialized tensor type.
///
/// Returns `(bytes, type_size)`. The wire tag is first converted to the
/// runtime type; an unrecognised tag or an unplaceable type fails with
/// [`ArenaError::UnsupportedType`]. A byte count that overflows `usize`
/// can never fit in an arena and fails with [`ArenaError::OutOfMemory`].
pub fn compute_byte_size<R: ErrorReporter + ?Sized>(
    wire_type: WireTensorType,
    element_count: usize,
    reporter: &mut R,
) -> Result<(usize, usize), ArenaError> {
    let element_type = ElementType::from_wire(wire_type).ok_or_else(|| {
        report(
            reporter,
            ArenaError::UnsupportedType {
                name: "UNKNOWN",
                tag: i32::from(wire_type.0),
            },
        )
    })?;
    let type_size = size_of_type(element_type, reporter)?;
    let bytes = checked_bytes("serialized tensor", element_count, type_size, reporter)?;
    Ok((bytes, type_size))
}

/// `(bytes, type_size)` for an existing descriptor.
pub(crate) fn tensor_byte_size<R: ErrorReporter + ?Sized>(
    tensor: &TensorDescriptor,
    reporter: &mut R,
) -> Result<(usize, usize), ArenaError> {
    let type_size = size_of_type(tensor.element_type, reporter)?;
    let bytes = checked_bytes(&tensor.name, tensor.element_count, type_size, reporter)?;
    Ok((bytes, type_size))
}

fn checked_bytes<R: ErrorReporter + ?Sized>(
    name: &str,
    element_count: usize,
    type_size: usize,
    reporter: &mut R,
) -> Result<usize, ArenaError> {
    element_count.checked_mul(type_size).ok_or_else(|| {
        report(
            reporter,
            ArenaError::OutOfMemory {
                name: name.to_string(),
                requested: usize::MAX,
                available: 0,
            },
        )
    })
}

/// Send `err` to the sink and hand it back for propagation.
pub(crate) fn report<R: ErrorReporter + ?Sized>(reporter: &mut R, err: ArenaError) -> ArenaError {
    reporter.report(format_args!("{err}"));
    err
}
