//! `head` — font header: units per em, global bbox, loca format.

use crate::error::{FontError, Result};
use crate::outline::BBox;
use crate::reader::Reader;

const HEAD_MAGIC: u32 = 0x5f0f_3cf5;

/// How `loca` stores glyph offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaFormat {
    /// u16 offsets, stored divided by two.
    Short,
    /// u32 offsets.
    Long,
}

#[derive(Debug, Clone, Copy)]
pub struct Head {
    pub units_per_em: u16,
    pub bbox: BBox,
    pub mac_style: u16,
    pub lowest_rec_ppem: u16,
    pub loca_format: LocaFormat,
}

impl Head {
    pub fn parse(data: &[u8]) -> Result<Head> {
        let mut r = Reader::new(data);
        r.skip(4)?; // version
        r.skip(4)?; // font revision
        r.skip(4)?; // checksum adjustment
        let magic = r.read_u32()?;
        if magic != HEAD_MAGIC {
            return Err(FontError::UnsupportedFormat("bad head table magic"));
        }
        r.skip(2)?; // flags
        let units_per_em = r.read_u16()?;
        r.skip(16)?; // created + modified timestamps
        let x_min = r.read_i16()?;
        let y_min = r.read_i16()?;
        let x_max = r.read_i16()?;
        let y_max = r.read_i16()?;
        let mac_style = r.read_u16()?;
        let lowest_rec_ppem = r.read_u16()?;
        r.skip(2)?; // font direction hint
        let loca_format = match r.read_i16()? {
            0 => LocaFormat::Short,
            1 => LocaFormat::Long,
            _ => return Err(FontError::UnsupportedFormat("indexToLocFormat")),
        };
        Ok(Head {
            units_per_em,
            bbox: BBox::new(
                x_min as f32,
                x_max as f32,
                y_min as f32,
                y_max as f32,
            ),
            mac_style,
            lowest_rec_ppem,
            loca_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn head_bytes(loca_format: i16) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&0x0001_0000u32.to_be_bytes()); // version
        out.extend_from_slice(&0u32.to_be_bytes()); // revision
        out.extend_from_slice(&0u32.to_be_bytes()); // checksum adjust
        out.extend_from_slice(&HEAD_MAGIC.to_be_bytes());
        out.extend_from_slice(&0u16.to_be_bytes()); // flags
        out.extend_from_slice(&1000u16.to_be_bytes()); // unitsPerEm
        out.extend_from_slice(&[0u8; 16]); // dates
        for v in [-50i16, -200, 900, 800] {
            out.extend_from_slice(&v.to_be_bytes());
        }
        out.extend_from_slice(&0u16.to_be_bytes()); // macStyle
        out.extend_from_slice(&8u16.to_be_bytes()); // lowestRecPPEM
        out.extend_from_slice(&2i16.to_be_bytes()); // direction hint
        out.extend_from_slice(&loca_format.to_be_bytes());
        out.extend_from_slice(&0i16.to_be_bytes()); // glyphDataFormat
        out
    }

    #[test]
    fn parses_metrics_and_loca_format() {
        let head = Head::parse(&head_bytes(1)).unwrap();
        assert_eq!(head.units_per_em, 1000);
        assert_eq!(head.loca_format, LocaFormat::Long);
        assert_eq!(head.bbox.x_min, -50.0);
        assert_eq!(head.bbox.y_max, 800.0);
    }

    #[test]
    fn bad_magic_is_rejected() {
        let mut bytes = head_bytes(0);
        bytes[12] = 0;
        assert!(matches!(
            Head::parse(&bytes),
            Err(FontError::UnsupportedFormat(_))
        ));
    }
}
