//! Element types: the runtime type tag and its serialized (wire) form.

use std::fmt;

/// Runtime element type of a tensor.
///
/// The discriminants match the runtime's numeric type tags so that
/// diagnostics can name both the type and its tag. Not every type has a
/// fixed byte width the arena can place: see [`ElementType::size`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ElementType {
    /// No type assigned yet.
    NoType = 0,
    /// 32-bit IEEE float.
    Float32 = 1,
    /// 32-bit signed integer.
    Int32 = 2,
    /// 8-bit unsigned integer.
    UInt8 = 3,
    /// 64-bit signed integer.
    Int64 = 4,
    /// Variable-length string data.
    String = 5,
    /// Boolean, one byte per element.
    Bool = 6,
    /// 16-bit signed integer.
    Int16 = 7,
    /// Complex number stored as two 32-bit floats.
    Complex64 = 8,
    /// 8-bit signed integer.
    Int8 = 9,
    /// 16-bit IEEE half-precision float.
    Float16 = 10,
}

impl ElementType {
    /// Every element type, in tag order.
    pub const ALL: [ElementType; 11] = [
        Self::NoType,
        Self::Float32,
        Self::Int32,
        Self::UInt8,
        Self::Int64,
        Self::String,
        Self::Bool,
        Self::Int16,
        Self::Complex64,
        Self::Int8,
        Self::Float16,
    ];

    /// Byte width of one element, or `None` if the arena cannot place
    /// tensors of this type.
    ///
    /// `NoType` and `String` have no fixed width. `Float16` has one, but
    /// no kernel on the target consumes it, so it is rejected as well.
    pub fn size(self) -> Option<usize> {
        match self {
            Self::Float32 => Some(4),
            Self::Int16 => Some(2),
            Self::Int32 => Some(4),
            Self::Int8 | Self::UInt8 | Self::Bool => Some(1),
            Self::Int64 => Some(8),
            Self::Complex64 => Some(8),
            Self::NoType | Self::String | Self::Float16 => None,
        }
    }

    /// Numeric tag of this type.
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Upper-case runtime name, as printed in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::NoType => "NOTYPE",
            Self::Float32 => "FLOAT32",
            Self::Int32 => "INT32",
            Self::UInt8 => "UINT8",
            Self::Int64 => "INT64",
            Self::String => "STRING",
            Self::Bool => "BOOL",
            Self::Int16 => "INT16",
            Self::Complex64 => "COMPLEX64",
            Self::Int8 => "INT8",
            Self::Float16 => "FLOAT16",
        }
    }

    /// Convert a serialized tensor type to the runtime type.
    ///
    /// Returns `None` for tags the serialization format does not define.
    pub fn from_wire(wire: WireTensorType) -> Option<Self> {
        match wire {
            WireTensorType::FLOAT32 => Some(Self::Float32),
            WireTensorType::FLOAT16 => Some(Self::Float16),
            WireTensorType::INT32 => Some(Self::Int32),
            WireTensorType::UINT8 => Some(Self::UInt8),
            WireTensorType::INT64 => Some(Self::Int64),
            WireTensorType::STRING => Some(Self::String),
            WireTensorType::BOOL => Some(Self::Bool),
            WireTensorType::INT16 => Some(Self::Int16),
            WireTensorType::COMPLEX64 => Some(Self::Complex64),
            WireTensorType::INT8 => Some(Self::Int8),
            _ => None,
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.tag())
    }
}

/// Tensor type tag as stored in a serialized model.
///
/// The wire numbering differs from [`ElementType`]'s, and a model may
/// carry tags newer than this crate knows, so the raw tag is kept open
/// rather than modelled as an enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WireTensorType(pub i8);

impl WireTensorType {
    /// 32-bit float.
    pub const FLOAT32: Self = Self(0);
    /// 16-bit float.
    pub const FLOAT16: Self = Self(1);
    /// 32-bit signed integer.
    pub const INT32: Self = Self(2);
    /// 8-bit unsigned integer.
    pub const UINT8: Self = Self(3);
    /// 64-bit signed integer.
    pub const INT64: Self = Self(4);
    /// String.
    pub const STRING: Self = Self(5);
    /// Boolean.
    pub const BOOL: Self = Self(6);
    /// 16-bit signed integer.
    pub const INT16: Self = Self(7);
    /// Two 32-bit floats.
    pub const COMPLEX64: Self = Self(8);
    /// 8-bit signed integer.
    pub const INT8: Self = Self(9);
}

impl fmt::Display for WireTensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
