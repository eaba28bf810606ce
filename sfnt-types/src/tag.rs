use std::fmt::{Debug, Display, Formatter};

/// A four byte table or axis tag.
///
/// Tags read from a table directory or an `fvar` axis record are kept as
/// stored, printable or not, so that malformed fonts can still be described
/// and their tags used as map keys.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Tag([u8; 4]);

impl Tag {
    pub const fn new(src: &[u8; 4]) -> Tag {
        Tag(*src)
    }
}

impl crate::raw::Scalar for Tag {
    type Raw = [u8; 4];

    fn to_raw(self) -> Self::Raw {
        self.0
    }

    fn from_raw(raw: Self::Raw) -> Self {
        Tag(raw)
    }
}

// bytes outside printable ascii are written as `{0xNN}`
impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for byte in self.0 {
            if (0x20..=0x7E).contains(&byte) {
                write!(f, "{}", byte as char)?;
            } else {
                write!(f, "{{0x{byte:02X}}}")?;
            }
        }
        Ok(())
    }
}

impl Debug for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tag({self})")
    }
}

// a string for human readable formats, bytes otherwise
#[cfg(feature = "serde")]
impl serde::Serialize for Tag {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            self.0.serialize(serializer)
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Tag {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let text = String::deserialize(deserializer)?;
            <[u8; 4]>::try_from(text.as_bytes())
                .map(Tag)
                .map_err(|_| serde::de::Error::invalid_length(text.len(), &"four bytes"))
        } else {
            <[u8; 4]>::deserialize(deserializer).map(Tag)
        }
    }
}
