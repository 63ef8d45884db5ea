//! `maxp` — the glyph count.

use crate::error::Result;
use crate::reader::Reader;

#[derive(Debug, Clone, Copy)]
pub struct Maxp {
    pub num_glyphs: u16,
}

impl Maxp {
    pub fn parse(data: &[u8]) -> Result<Maxp> {
        let mut r = Reader::new(data);
        r.skip(4)?; // version (0.5 for CFF fonts, 1.0 for TrueType)
        let num_glyphs = r.read_u16()?;
        Ok(Maxp { num_glyphs })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_glyph_count() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&0x0000_5000u32.to_be_bytes());
        bytes.extend_from_slice(&258u16.to_be_bytes());
        assert_eq!(Maxp::parse(&bytes).unwrap().num_glyphs, 258);
    }
}
