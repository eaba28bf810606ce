//! types for working with raw big-endian bytes

/// A trait for font scalars.
///
/// This is an internal trait for encoding and decoding big-endian bytes.
///
/// Every type that can be read from a font with
/// `ByteCursor::read` implements this trait.
pub trait Scalar: Sized {
    /// The raw byte representation of this type.
    type Raw: Copy + Default + AsRef<[u8]> + AsMut<[u8]>;

    /// The size of the raw type. Essentially an alias for `std::mem::size_of`.
    const RAW_BYTE_LEN: usize = std::mem::size_of::<Self::Raw>();

    /// Create an instance of this type from raw big-endian bytes
    fn from_raw(raw: Self::Raw) -> Self;
    /// Encode this type as raw big-endian bytes
    fn to_raw(self) -> Self::Raw;

    /// Attempt to read a scalar from a slice.
    ///
    /// This will return `None` if `slice.len() != Self::RAW_BYTE_LEN`.
    fn read(slice: &[u8]) -> Option<Self> {
        let mut raw = Self::Raw::default();
        if slice.len() != raw.as_ref().len() {
            return None;
        }
        raw.as_mut().copy_from_slice(slice);
        Some(Self::from_raw(raw))
    }
}

/// An internal macro for implementing the `Scalar` trait for newtypes.
macro_rules! newtype_scalar {
    ($name:ident, $raw:ty) => {
        impl crate::raw::Scalar for $name {
            type Raw = $raw;
            fn to_raw(self) -> $raw {
                crate::raw::Scalar::to_raw(self.0)
            }

            fn from_raw(raw: $raw) -> Self {
                Self(crate::raw::Scalar::from_raw(raw))
            }
        }
    };
}

pub(crate) use newtype_scalar;

macro_rules! int_scalar {
    ($ty:ty, $raw:ty) => {
        impl crate::raw::Scalar for $ty {
            type Raw = $raw;
            fn to_raw(self) -> $raw {
                self.to_be_bytes()
            }

            fn from_raw(raw: $raw) -> $ty {
                Self::from_be_bytes(raw)
            }
        }
    };
}

int_scalar!(u8, [u8; 1]);
int_scalar!(i8, [u8; 1]);
int_scalar!(u16, [u8; 2]);
int_scalar!(i16, [u8; 2]);
int_scalar!(u32, [u8; 4]);
int_scalar!(i32, [u8; 4]);
