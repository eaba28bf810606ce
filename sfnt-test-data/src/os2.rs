//! Building `OS/2` tables.

use crate::bebuffer::BeBuffer;

/// Length of a version 4 `OS/2` table.
pub const VERSION_4_LEN: usize = 96;

/// A version 4 `OS/2` table with the given weight and width classes.
///
/// All other fields are zero.
pub fn os2(weight_class: u16, width_class: u16) -> Vec<u8> {
    let buf = BeBuffer::new()
        .push(4u16) // version
        .push(500i16) // xAvgCharWidth
        .push(weight_class)
        .push(width_class);
    let mut data = buf.into_vec();
    data.resize(VERSION_4_LEN, 0);
    data
}

#[cfg(test)]
mod tests {
    #[test]
    fn fields_at_fixed_offsets() {
        let table = super::os2(250, 5);
        assert_eq!(table.len(), super::VERSION_4_LEN);
        assert_eq!(&table[4..8], &[0, 250, 0, 5]);
    }
}
