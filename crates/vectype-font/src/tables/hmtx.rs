//! `hmtx` — per-glyph advance widths and left side bearings.

use crate::error::Result;
use crate::reader::Reader;

/// One horizontal metric pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HMetric {
    pub advance: u16,
    pub lsb: i16,
}

/// Decoded horizontal metrics.
///
/// The table stores `number_of_h_metrics` full pairs; any remaining glyphs
/// carry only a side bearing and share the last advance. That layout is
/// flattened here so lookups are a plain index.
#[derive(Debug, Clone)]
pub struct Hmtx {
    metrics: Vec<HMetric>,
}

impl Hmtx {
    pub fn parse(data: &[u8], number_of_h_metrics: u16, num_glyphs: u16) -> Result<Hmtx> {
        let mut r = Reader::new(data);
        let n_full = number_of_h_metrics.min(num_glyphs) as usize;
        let mut metrics = Vec::with_capacity(num_glyphs as usize);
        for _ in 0..n_full {
            metrics.push(HMetric {
                advance: r.read_u16()?,
                lsb: r.read_i16()?,
            });
        }
        let last_advance = metrics.last().map(|m| m.advance).unwrap_or(0);
        for _ in n_full..num_glyphs as usize {
            metrics.push(HMetric {
                advance: last_advance,
                lsb: r.read_i16()?,
            });
        }
        Ok(Hmtx { metrics })
    }

    /// Metric for a glyph; ids past the table fall back to the last entry.
    pub fn metric(&self, glyph_id: u16) -> HMetric {
        self.metrics
            .get(glyph_id as usize)
            .or_else(|| self.metrics.last())
            .copied()
            .unwrap_or(HMetric { advance: 0, lsb: 0 })
    }

    pub fn advance(&self, glyph_id: u16) -> u16 {
        self.metric(glyph_id).advance
    }

    pub fn lsb(&self, glyph_id: u16) -> i16 {
        self.metric(glyph_id).lsb
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_glyphs_share_the_last_advance() {
        // two full metrics, then two bare lsb entries
        let mut bytes = Vec::new();
        for (adv, lsb) in [(500u16, 10i16), (600, -5)] {
            bytes.extend_from_slice(&adv.to_be_bytes());
            bytes.extend_from_slice(&lsb.to_be_bytes());
        }
        for lsb in [7i16, 8] {
            bytes.extend_from_slice(&lsb.to_be_bytes());
        }

        let hmtx = Hmtx::parse(&bytes, 2, 4).unwrap();
        assert_eq!(hmtx.metric(0), HMetric { advance: 500, lsb: 10 });
        assert_eq!(hmtx.metric(1), HMetric { advance: 600, lsb: -5 });
        assert_eq!(hmtx.metric(2), HMetric { advance: 600, lsb: 7 });
        assert_eq!(hmtx.metric(3), HMetric { advance: 600, lsb: 8 });
        // out of range falls back to the final entry
        assert_eq!(hmtx.advance(99), 600);
    }
}
