// this_file: crates/vectype-font/src/font.rs

//! The immutable font model assembled at load time.

use std::sync::Arc;

use crate::cff::CffOutlines;
use crate::error::{FontError, Result, Warning};
use crate::glyf::GlyfOutlines;
use crate::layout::gpos::Gpos;
use crate::layout::gsub::Gsub;
use crate::outline::Outline;
use crate::sfnt::Sfnt;
use crate::tables::cmap::CharMap;
use crate::tables::head::Head;
use crate::tables::hhea::Hhea;
use crate::tables::hmtx::Hmtx;
use crate::tables::maxp::Maxp;
use crate::tables::name::FontNames;
use crate::tag::Tag;

pub const TAG_HEAD: Tag = Tag::new(b"head");
pub const TAG_HHEA: Tag = Tag::new(b"hhea");
pub const TAG_MAXP: Tag = Tag::new(b"maxp");
pub const TAG_HMTX: Tag = Tag::new(b"hmtx");
pub const TAG_NAME: Tag = Tag::new(b"name");
pub const TAG_CMAP: Tag = Tag::new(b"cmap");
pub const TAG_LOCA: Tag = Tag::new(b"loca");
pub const TAG_GLYF: Tag = Tag::new(b"glyf");
pub const TAG_CFF: Tag = Tag::new(b"CFF ");
pub const TAG_CFF2: Tag = Tag::new(b"CFF2");
pub const TAG_GSUB: Tag = Tag::new(b"GSUB");
pub const TAG_GPOS: Tag = Tag::new(b"GPOS");

/// The two outline formats, behind one decode capability.
#[derive(Debug, Clone)]
pub enum OutlineBackend {
    /// TrueType quadratic outlines from `loca` + `glyf`.
    Glyf(GlyfOutlines),
    /// PostScript cubic outlines from `CFF `.
    Cff(CffOutlines),
}

/// A glyph decoded to the canonical form. `cff_width` carries the width
/// the charstring declared, which may differ from the `hmtx` advance
/// layout actually uses.
#[derive(Debug, Clone, Default)]
pub struct DecodedGlyph {
    pub outline: Outline,
    pub cff_width: Option<f32>,
}

/// Everything parsed out of a font file. Immutable once loaded; glyph
/// outlines are decoded on demand by the caller (and cached above this
/// layer).
#[derive(Debug, Clone)]
pub struct FontData {
    data: Arc<[u8]>,
    sfnt: Sfnt,
    pub head: Head,
    pub hhea: Hhea,
    pub maxp: Maxp,
    pub hmtx: Hmtx,
    pub names: FontNames,
    pub charmap: CharMap,
    pub outlines: OutlineBackend,
    pub gsub: Option<Gsub>,
    pub gpos: Option<Gpos>,
}

impl FontData {
    /// Parse a font from its raw bytes. Any structural error here is
    /// fatal; no `FontData` is produced.
    pub fn load(data: Arc<[u8]>) -> Result<FontData> {
        let sfnt = Sfnt::parse(&data)?;
        let head = Head::parse(sfnt.expect_table(&data, TAG_HEAD)?)?;
        let hhea = Hhea::parse(sfnt.expect_table(&data, TAG_HHEA)?)?;
        let maxp = Maxp::parse(sfnt.expect_table(&data, TAG_MAXP)?)?;
        let hmtx = Hmtx::parse(
            sfnt.expect_table(&data, TAG_HMTX)?,
            hhea.number_of_h_metrics,
            maxp.num_glyphs,
        )?;
        let charmap = CharMap::parse(sfnt.expect_table(&data, TAG_CMAP)?)?;
        let names = match sfnt.table(&data, TAG_NAME) {
            Some(bytes) => FontNames::parse(bytes)?,
            None => FontNames::default(),
        };

        let outlines = if sfnt.record(TAG_GLYF).is_some() {
            let loca = sfnt.expect_table(&data, TAG_LOCA)?.to_vec();
            let glyf = sfnt
                .record(TAG_GLYF)
                .map(|r| r.offset as usize..(r.offset + r.length) as usize)
                .ok_or(FontError::MissingRequiredTable(TAG_GLYF))?;
            OutlineBackend::Glyf(GlyfOutlines::new(
                data.clone(),
                &loca,
                glyf,
                head.loca_format,
                maxp.num_glyphs,
            )?)
        } else if let Some(rec) = sfnt.record(TAG_CFF) {
            let range = rec.offset as usize..(rec.offset + rec.length) as usize;
            OutlineBackend::Cff(CffOutlines::new(data.clone(), range)?)
        } else if sfnt.record(TAG_CFF2).is_some() {
            // CFF2 exists solely to host variation data, which is out of
            // scope here.
            return Err(FontError::UnsupportedFormat("CFF2 outlines"));
        } else {
            return Err(FontError::MissingRequiredTable(TAG_GLYF));
        };

        let gsub = match sfnt.table(&data, TAG_GSUB) {
            Some(bytes) => Some(Gsub::parse(bytes)?),
            None => None,
        };
        let gpos = match sfnt.table(&data, TAG_GPOS) {
            Some(bytes) => Some(Gpos::parse(bytes)?),
            None => None,
        };

        Ok(FontData {
            data,
            sfnt,
            head,
            hhea,
            maxp,
            hmtx,
            names,
            charmap,
            outlines,
            gsub,
            gpos,
        })
    }

    pub fn bytes(&self) -> &Arc<[u8]> {
        &self.data
    }

    pub fn num_glyphs(&self) -> u16 {
        self.maxp.num_glyphs
    }

    pub fn units_per_em(&self) -> u16 {
        self.head.units_per_em
    }

    pub fn is_cff(&self) -> bool {
        matches!(self.outlines, OutlineBackend::Cff(_))
    }

    pub fn table_tags(&self) -> Vec<Tag> {
        self.sfnt.tags().collect()
    }

    /// Verify directory checksums of every table except `head`.
    pub fn verify_checksums(&self) -> Result<()> {
        self.sfnt.verify_checksums(&self.data)
    }

    /// Map a code point to a glyph id; `.notdef` (0) for anything the
    /// cmap does not cover or that exceeds the glyph count.
    pub fn glyph_id(&self, cp: u32) -> u16 {
        let gid = self.charmap.glyph_id(cp);
        if gid < self.maxp.num_glyphs {
            gid
        } else {
            0
        }
    }

    /// Horizontal advance in font units.
    pub fn advance(&self, glyph_id: u16) -> u16 {
        self.hmtx.advance(glyph_id)
    }

    pub fn left_side_bearing(&self, glyph_id: u16) -> i16 {
        self.hmtx.lsb(glyph_id)
    }

    /// Decode one glyph's outline from whichever backend the font carries.
    pub fn decode_glyph(&self, glyph_id: u16) -> Result<DecodedGlyph> {
        if glyph_id >= self.maxp.num_glyphs {
            return Err(FontError::BadGlyphId(glyph_id));
        }
        match &self.outlines {
            OutlineBackend::Glyf(glyf) => Ok(DecodedGlyph {
                outline: glyf.outline(glyph_id)?,
                cff_width: None,
            }),
            OutlineBackend::Cff(cff) => {
                let glyph = cff.glyph(glyph_id)?;
                Ok(DecodedGlyph {
                    outline: glyph.outline,
                    cff_width: Some(glyph.width),
                })
            }
        }
    }

    /// Warnings recorded while parsing the layout tables (unsupported
    /// lookup types that shaping will skip).
    pub fn layout_warnings(&self) -> Vec<Warning> {
        let mut out = Vec::new();
        if let Some(gsub) = &self.gsub {
            out.extend_from_slice(gsub.skipped_lookups());
        }
        if let Some(gpos) = &self.gpos {
            out.extend_from_slice(gpos.skipped_lookups());
        }
        out
    }
}
