//! fixed-point numerical types

/// 32-bit signed fixed point number with 16 bits of fraction.
///
/// This is the `Fixed` type from the OpenType data types, used by the `fvar`
/// table for axis ranges and instance coordinates.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Fixed(i32);

impl Fixed {
    /// Minimum value.
    pub const MIN: Self = Self(i32::MIN);

    /// Maximum value.
    pub const MAX: Self = Self(i32::MAX);

    /// This type's smallest representable value
    pub const EPSILON: Self = Self(1);

    /// Representation of 0.0.
    pub const ZERO: Self = Self(0);

    /// Representation of 1.0.
    pub const ONE: Self = Self(1 << Self::FRACT_BITS);

    const FRACT_BITS: u32 = 16;
    const ONE_F64: f64 = (1u32 << Self::FRACT_BITS) as f64;

    /// Creates a new fixed point value from the underlying bit representation.
    pub const fn from_bits(bits: i32) -> Self {
        Self(bits)
    }

    /// Returns the underlying bit representation of the value.
    pub const fn to_bits(self) -> i32 {
        self.0
    }

    /// Creates a fixed point value from an integer.
    pub const fn from_integer(i: i16) -> Self {
        Self((i as i32) << Self::FRACT_BITS)
    }

    /// Creates a fixed point value from a float, rounding to the nearest
    /// representable value.
    pub fn from_f64(x: f64) -> Self {
        Self((x * Self::ONE_F64).round() as i32)
    }

    /// Returns the value as an `f64`. This conversion is exact.
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / Self::ONE_F64
    }

    /// Returns the value as an `f32`.
    pub fn to_f32(self) -> f32 {
        self.to_f64() as f32
    }
}

crate::raw::newtype_scalar!(Fixed, [u8; 4]);

impl std::fmt::Display for Fixed {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.to_f64().fmt(f)
    }
}

impl std::fmt::Debug for Fixed {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.to_f64().fmt(f)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Fixed {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_f64())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Fixed {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Fixed::from_f64)
    }
}
