//! Building `fvar` tables.

use sfnt_types::{Fixed, Tag};

use crate::bebuffer::BeBuffer;

const HEADER_LEN: u16 = 16;
const AXIS_SIZE: u16 = 20;

#[derive(Clone, Debug)]
struct Axis {
    tag: Tag,
    min: f64,
    default: f64,
    max: f64,
    name_id: u16,
}

#[derive(Clone, Debug)]
struct Instance {
    name_id: u16,
    coords: Vec<f64>,
    postscript_name_id: Option<u16>,
}

/// Builds an `fvar` table.
///
/// If any instance has a PostScript name id, every instance record carries
/// one (`0xFFFF` for instances without). The header fields describing the
/// layout can be overridden to produce malformed tables.
#[derive(Clone, Debug, Default)]
pub struct FvarBuilder {
    axes: Vec<Axis>,
    instances: Vec<Instance>,
    axes_array_offset: Option<u16>,
    instance_size: Option<u16>,
}

impl FvarBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn add_axis(mut self, tag: &[u8; 4], min: f64, default: f64, max: f64, name_id: u16) -> Self {
        self.axes.push(Axis {
            tag: Tag::new(tag),
            min,
            default,
            max,
            name_id,
        });
        self
    }

    /// Add a named instance; `coords` must have one value per axis.
    pub fn add_instance(
        mut self,
        name_id: u16,
        coords: &[f64],
        postscript_name_id: Option<u16>,
    ) -> Self {
        self.instances.push(Instance {
            name_id,
            coords: coords.to_vec(),
            postscript_name_id,
        });
        self
    }

    /// Place the axis array at this offset instead of directly after the
    /// header. Offsets past the header are padded with zeros.
    pub fn axes_array_offset(mut self, offset: u16) -> Self {
        self.axes_array_offset = Some(offset);
        self
    }

    /// Write this value as the instance size, without changing how instance
    /// records are encoded.
    pub fn instance_size(mut self, size: u16) -> Self {
        self.instance_size = Some(size);
        self
    }

    fn has_postscript_names(&self) -> bool {
        self.instances
            .iter()
            .any(|inst| inst.postscript_name_id.is_some())
    }

    pub fn build(&self) -> Vec<u8> {
        let axis_count = self.axes.len() as u16;
        let with_ps = self.has_postscript_names();
        let encoded_instance_size = 4 + 4 * axis_count + if with_ps { 2 } else { 0 };
        let axes_array_offset = self.axes_array_offset.unwrap_or(HEADER_LEN);

        let mut buf = BeBuffer::new()
            .push(1u16) // majorVersion
            .push(0u16) // minorVersion
            .push(axes_array_offset)
            .push(2u16) // reserved
            .push(axis_count)
            .push(AXIS_SIZE)
            .push(self.instances.len() as u16)
            .push(self.instance_size.unwrap_or(encoded_instance_size));
        while buf.len() < axes_array_offset as usize {
            buf = buf.push(0u8);
        }
        for axis in &self.axes {
            buf = buf
                .push(axis.tag)
                .push(Fixed::from_f64(axis.min))
                .push(Fixed::from_f64(axis.default))
                .push(Fixed::from_f64(axis.max))
                .push(0u16) // flags
                .push(axis.name_id);
        }
        for instance in &self.instances {
            buf = buf
                .push(instance.name_id)
                .push(0u16) // flags
                .extend(instance.coords.iter().copied().map(Fixed::from_f64));
            if with_ps {
                buf = buf.push(instance.postscript_name_id.unwrap_or(0xFFFF));
            }
        }
        buf.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_sizes() {
        let table = FvarBuilder::new()
            .add_axis(b"wght", 100.0, 400.0, 900.0, 256)
            .add_axis(b"wdth", 75.0, 100.0, 100.0, 257)
            .add_instance(258, &[400.0, 100.0], None)
            .build();
        // axisSize, instanceCount, instanceSize
        assert_eq!(&table[10..16], &[0, 20, 0, 1, 0, 12]);
        assert_eq!(table.len(), 16 + 2 * 20 + 12);
        assert_eq!(&table[16..20], b"wght");
        assert_eq!(&table[20..24], &[0, 100, 0, 0]);
    }

    #[test]
    fn postscript_names_widen_every_instance() {
        let table = FvarBuilder::new()
            .add_axis(b"wght", 100.0, 400.0, 900.0, 256)
            .add_instance(257, &[100.0], Some(300))
            .add_instance(258, &[900.0], None)
            .build();
        assert_eq!(&table[14..16], &[0, 10]);
        assert_eq!(&table[table.len() - 2..], &[0xFF, 0xFF]);
    }

    #[test]
    fn padded_axes_array() {
        let table = FvarBuilder::new()
            .axes_array_offset(20)
            .add_axis(b"wght", 100.0, 400.0, 900.0, 256)
            .build();
        assert_eq!(&table[4..6], &[0, 20]);
        assert_eq!(&table[20..24], b"wght");
    }
}
