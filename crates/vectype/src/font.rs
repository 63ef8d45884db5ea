// this_file: crates/vectype/src/font.rs

//! The public font handle: parsed tables plus the glyph cache, feature
//! flags, and the warnings channel.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use vectype_font::{BBox, FontData, FontError, Outline, Tag, Warning};

use crate::error::Result;
use crate::features::FeatureSet;
use crate::run::{TextOptions, TextRun};
use crate::shape;

/// One decoded glyph, cached by id on the owning [`Font`].
#[derive(Debug, Clone)]
pub struct Glyph {
    pub id: u16,
    pub outline: Outline,
    /// Horizontal advance from `hmtx`, font units.
    pub advance: u16,
    /// Width declared by the CFF charstring, when that backend decoded it.
    pub cff_width: Option<f32>,
}

impl Glyph {
    pub fn bbox(&self) -> BBox {
        self.outline.bbox
    }

    pub fn is_empty(&self) -> bool {
        self.outline.is_empty()
    }
}

/// A loaded font.
///
/// The parsed tables are immutable; the feature flags and the lazily
/// populated outline cache sit behind locks so a `Font` can be shared
/// across threads (call [`Font::warm_up`] first to pre-decode outlines if
/// lock contention matters).
pub struct Font {
    data: FontData,
    features: RwLock<FeatureSet>,
    glyphs: RwLock<HashMap<u16, Arc<Glyph>>>,
    warnings: Mutex<Vec<Warning>>,
}

impl Font {
    /// Parse a font from raw bytes. Structural errors are fatal here;
    /// per-glyph problems later degrade to `.notdef` instead.
    pub fn load(bytes: impl Into<Arc<[u8]>>) -> Result<Font> {
        let data = FontData::load(bytes.into())?;
        let warnings = data.layout_warnings();
        Ok(Font {
            data,
            features: RwLock::new(FeatureSet::new()),
            glyphs: RwLock::new(HashMap::new()),
            warnings: Mutex::new(warnings),
        })
    }

    /// Read and parse a font file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Font> {
        let bytes = std::fs::read(path)?;
        Font::load(bytes)
    }

    pub fn data(&self) -> &FontData {
        &self.data
    }

    /// Verify the SFNT directory checksums (all tables except `head`).
    pub fn verify_checksums(&self) -> Result<()> {
        Ok(self.data.verify_checksums()?)
    }

    pub fn family_name(&self) -> &str {
        &self.data.names.family
    }

    pub fn units_per_em(&self) -> u16 {
        self.data.units_per_em()
    }

    pub fn num_glyphs(&self) -> u16 {
        self.data.num_glyphs()
    }

    pub fn ascent(&self) -> i16 {
        self.data.hhea.ascent
    }

    pub fn descent(&self) -> i16 {
        self.data.hhea.descent
    }

    pub fn line_gap(&self) -> i16 {
        self.data.hhea.line_gap
    }

    /// Pixel scale for a text size: `size / unitsPerEm`.
    pub fn scale_for(&self, size: f32) -> f32 {
        size / self.data.units_per_em() as f32
    }

    /// Glyph id for a character; `.notdef` (0) when unmapped.
    pub fn glyph_index(&self, c: char) -> u16 {
        self.data.glyph_id(c as u32)
    }

    /// Decode (or fetch from cache) a glyph by id. A glyph that fails to
    /// decode is recovered as `.notdef` with a warning recorded.
    pub fn glyph(&self, glyph_id: u16) -> Arc<Glyph> {
        if let Some(glyph) = self.glyphs.read().get(&glyph_id) {
            return glyph.clone();
        }
        let glyph = Arc::new(self.decode(glyph_id));
        self.glyphs
            .write()
            .entry(glyph_id)
            .or_insert_with(|| glyph.clone())
            .clone()
    }

    /// Glyph for a character: cmap then decode.
    pub fn glyph_for_char(&self, c: char) -> Arc<Glyph> {
        self.glyph(self.glyph_index(c))
    }

    fn decode(&self, glyph_id: u16) -> Glyph {
        match self.data.decode_glyph(glyph_id) {
            Ok(decoded) => Glyph {
                id: glyph_id,
                outline: decoded.outline,
                advance: self.data.advance(glyph_id),
                cff_width: decoded.cff_width,
            },
            Err(err) => {
                log::warn!("glyph {glyph_id} failed to decode ({err}); substituting .notdef");
                self.push_warning(Warning::GlyphDecodeFailed {
                    glyph_id,
                    reason: err.to_string(),
                });
                let outline = match &err {
                    // .notdef itself unreadable: fall back to empty
                    FontError::BadGlyphId(0) => Outline::empty(),
                    _ if glyph_id == 0 => Outline::empty(),
                    _ => self
                        .data
                        .decode_glyph(0)
                        .map(|d| d.outline)
                        .unwrap_or_default(),
                };
                Glyph {
                    id: glyph_id,
                    outline,
                    advance: self.data.advance(glyph_id),
                    cff_width: None,
                }
            }
        }
    }

    /// Horizontal advance in font units.
    pub fn advance(&self, glyph_id: u16) -> u16 {
        self.data.advance(glyph_id)
    }

    /// Pair-kerning delta between two glyphs in font units, from the GPOS
    /// `kern` feature (0 when the font has none).
    pub fn pair_kern(&self, left: u16, right: u16) -> i32 {
        let Some(gpos) = &self.data.gpos else {
            return 0;
        };
        let kern = Tag::new(b"kern");
        let glyphs = [left, right];
        let advances = [
            self.data.advance(left) as i32,
            self.data.advance(right) as i32,
        ];
        let mut adjustments = [Default::default(); 2];
        for index in gpos.header.lookup_indices(|tag| tag == kern) {
            gpos.apply_lookup(index, &glyphs, &advances, &mut adjustments);
        }
        adjustments[0].advance_dx
    }

    /// Decode every glyph up front so the cache is complete before the
    /// font is shared across threads.
    pub fn warm_up(&self) {
        for glyph_id in 0..self.data.num_glyphs() {
            self.glyph(glyph_id);
        }
    }

    /// A per-worker copy: the byte buffer and parsed tables are shared or
    /// cloned cheaply, the outline cache starts empty, and the feature
    /// flags are snapshotted.
    pub fn duplicate(&self) -> Font {
        Font {
            data: self.data.clone(),
            features: RwLock::new(self.features.read().clone()),
            glyphs: RwLock::new(HashMap::new()),
            warnings: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of the current feature flags.
    pub fn features(&self) -> FeatureSet {
        self.features.read().clone()
    }

    /// Enable or disable a feature (e.g. `"liga"`, `"kern"`, `"dlig"`).
    pub fn set_feature(&self, tag: &str, on: bool) {
        self.features.write().set(tag, on);
    }

    /// Choose the alternate index an alternate-substitution feature picks.
    pub fn set_alternate(&self, tag: &str, index: usize) {
        self.features.write().set_alternate(tag, index);
    }

    pub(crate) fn push_warning(&self, warning: Warning) {
        self.warnings.lock().push(warning);
    }

    /// Drain warnings recorded since the last call (skipped lookups,
    /// recovered glyph decodes).
    pub fn take_warnings(&self) -> Vec<Warning> {
        std::mem::take(&mut self.warnings.lock())
    }

    /// Shape and lay out a string.
    pub fn text(&self, text: &str, options: &TextOptions) -> TextRun {
        shape::shape(self, text, options)
    }

    /// Width and height of a string's layout block in pixels.
    pub fn size_of(&self, text: &str, options: &TextOptions) -> (f32, f32) {
        self.text(text, options).size()
    }
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Font")
            .field("family", &self.data.names.family)
            .field("glyphs", &self.data.num_glyphs())
            .field("units_per_em", &self.data.units_per_em())
            .finish()
    }
}
