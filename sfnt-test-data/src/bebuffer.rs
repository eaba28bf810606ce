//! small utilities used in tests

use std::collections::HashMap;

use sfnt_types::Scalar;

/// A convenience type for generating a buffer of big-endian bytes.
#[derive(Debug, Clone, Default)]
pub struct BeBuffer {
    data: Vec<u8>,
    tagged_locations: HashMap<String, usize>,
}

impl BeBuffer {
    pub fn new() -> Self {
        Default::default()
    }

    /// The current length of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer contains zero bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Return a reference to the contents of the buffer
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer, returning the bytes written so far.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Write any scalar to this buffer.
    pub fn push(mut self, item: impl Scalar) -> Self {
        self.data.extend(item.to_raw().as_ref());
        self
    }

    pub fn push_with_tag(mut self, item: impl Scalar, tag: &str) -> Self {
        self.tagged_locations
            .insert(tag.to_string(), self.data.len());
        self.data.extend(item.to_raw().as_ref());
        self
    }

    /// Write multiple scalars into the buffer
    pub fn extend<T: Scalar>(mut self, iter: impl IntoIterator<Item = T>) -> Self {
        for item in iter {
            self.data.extend(item.to_raw().as_ref());
        }
        self
    }

    /// Append raw bytes, such as an already encoded string.
    pub fn extend_bytes(mut self, bytes: &[u8]) -> Self {
        self.data.extend_from_slice(bytes);
        self
    }

    /// Pad with zeros until the length is a multiple of `align`.
    pub fn align_to(mut self, align: usize) -> Self {
        while self.data.len() % align != 0 {
            self.data.push(0);
        }
        self
    }

    pub fn offset_for(&self, tag: &str) -> usize {
        // panic on unrecognized tags
        self.tagged_locations.get(tag).copied().unwrap()
    }

    fn data_for(&mut self, tag: &str) -> &mut [u8] {
        let offset = self.offset_for(tag);
        &mut self.data[offset..]
    }

    pub fn write_at(&mut self, tag: &str, item: impl Scalar) {
        let data = self.data_for(tag);
        let raw = item.to_raw();
        let new_data: &[u8] = raw.as_ref();

        if data.len() < new_data.len() {
            panic!("not enough room left in buffer for the requested write.");
        }

        for (left, right) in data.iter_mut().zip(new_data) {
            *left = *right
        }
    }
}

impl std::ops::Deref for BeBuffer {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl From<BeBuffer> for Vec<u8> {
    fn from(value: BeBuffer) -> Self {
        value.data
    }
}

/// Build a [`BeBuffer`] from a list of scalars.
///
/// Each item is one of:
///
/// - a literal or identifier: `1u16`, `TT_SFNT_VERSION`
/// - a parenthesized expression: `(Tag::new(b"name"))`
/// - an array, written with [`BeBuffer::extend`]: `[1u16, 2, 3]`
/// - a tagged value, whose position can later be patched with
///   [`BeBuffer::write_at`]: `{0u32: "offset"}`
#[macro_export]
macro_rules! be_buffer {
    ( $( $item:tt ),* $(,)? ) => {{
        let builder = $crate::bebuffer::BeBuffer::new();
        $(
            let builder = $crate::be_buffer_add!(builder, $item);
        )*
        builder
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! be_buffer_add {
    ($builder:ident, { $item:tt : $tag:literal }) => {
        $builder.push_with_tag($item, $tag)
    };
    ($builder:ident, [ $( $item:expr ),* $(,)? ]) => {
        $builder.extend([ $( $item ),* ])
    };
    ($builder:ident, $item:tt) => {
        $builder.push($item)
    };
}

#[cfg(test)]
mod tests {
    use sfnt_types::Tag;

    #[test]
    fn macro_items() {
        let mut buf = be_buffer! {
            1u8,
            (Tag::new(b"name")),
            [2u16, 3],
            {0u32: "offset"},
        };
        assert_eq!(buf.len(), 1 + 4 + 4 + 4);
        assert_eq!(buf.offset_for("offset"), 9);
        buf.write_at("offset", 0xAABBCCDDu32);
        assert_eq!(
            buf.as_slice(),
            &[1, b'n', b'a', b'm', b'e', 0, 2, 0, 3, 0xAA, 0xBB, 0xCC, 0xDD]
        );
    }

    #[test]
    fn align() {
        let buf = be_buffer!(1u8, 2u8, 3u8).align_to(4);
        assert_eq!(buf.as_slice(), &[1, 2, 3, 0]);
        let buf = buf.align_to(4);
        assert_eq!(buf.len(), 4);
    }
}
