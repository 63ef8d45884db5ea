// this_file: crates/vectype/src/emit.rs

//! Path emission: decoded outlines to SVG path data in target (y-down)
//! coordinates.
//!
//! Two shapes of output exist, matching the `svg2` configuration switch:
//! reusable symbols referenced by position (one path per distinct glyph),
//! or fully inlined per-glyph paths for maximum renderer compatibility.
//! The XML itself is the consumer's job; this module only produces path
//! data strings, viewports, and transforms.

use std::fmt::Write;

use vectype_font::{Outline, Segment};

use crate::config::RenderConfig;
use crate::debug::{debug_geometry, DebugGeometry};
use crate::font::{Font, Glyph};
use crate::run::TextRun;

/// One reusable glyph definition, path data in font units (y flipped).
#[derive(Debug, Clone)]
pub struct SymbolDef {
    pub id: String,
    pub d: String,
    /// `(min_x, min_y, width, height)` viewport for the symbol.
    pub view_box: (f32, f32, f32, f32),
}

/// A positioned reference to a [`SymbolDef`].
#[derive(Debug, Clone)]
pub struct SymbolUse {
    pub symbol_id: String,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    /// Ready-made `transform` attribute value.
    pub transform: String,
}

/// A fully positioned, fully scaled glyph path.
#[derive(Debug, Clone)]
pub struct InlinePath {
    pub d: String,
}

/// Everything a serializer needs to draw one laid-out run.
#[derive(Debug, Clone, Default)]
pub struct RunPaths {
    pub symbols: Vec<SymbolDef>,
    pub uses: Vec<SymbolUse>,
    pub inline: Vec<InlinePath>,
    /// Group transform (rotation about the anchor), when the run is
    /// rotated.
    pub transform: Option<String>,
    pub color: Option<String>,
    /// `(min_x, min_y, width, height)` of the drawn ink.
    pub view_box: (f32, f32, f32, f32),
    pub debug: Option<DebugGeometry>,
}

/// Emit a laid-out run as path data.
pub fn emit_run(font: &Font, run: &TextRun, config: &RenderConfig) -> RunPaths {
    let precision = config.precision;
    let mut out = RunPaths {
        color: run.color.clone(),
        ..Default::default()
    };

    if config.svg2 {
        for glyph in &run.glyphs {
            let decoded = font.glyph(glyph.glyph_id);
            if decoded.is_empty() {
                continue;
            }
            let id = symbol_id(font, glyph.glyph_id);
            if !out.symbols.iter().any(|s| s.id == id) {
                out.symbols.push(symbol_def(font, &decoded, id.clone(), precision));
            }
            out.uses.push(SymbolUse {
                symbol_id: id,
                x: glyph.x,
                y: glyph.y,
                scale: run.scale,
                transform: format!(
                    "translate({} {}) scale({})",
                    fmt_number(glyph.x, precision),
                    fmt_number(glyph.y, precision),
                    fmt_number(run.scale, 6),
                ),
            });
        }
    } else {
        for glyph in &run.glyphs {
            let decoded = font.glyph(glyph.glyph_id);
            if let Some(d) =
                path_data(&decoded.outline, glyph.x, glyph.y, run.scale, precision)
            {
                out.inline.push(InlinePath { d });
            }
        }
    }

    if run.rotation != 0.0 {
        out.transform = Some(format!("rotate({})", fmt_number(run.rotation, precision)));
    }
    let bbox = run.bbox();
    out.view_box = (bbox.x_min, bbox.y_min, bbox.width(), bbox.height());
    if config.debug {
        out.debug = Some(debug_geometry(font, run));
    }
    out
}

/// A standalone single-glyph picture with its own viewport.
#[derive(Debug, Clone)]
pub struct GlyphPicture {
    pub d: String,
    pub width: f32,
    pub height: f32,
    pub view_box: (f32, f32, f32, f32),
    /// Baseline y within the viewport.
    pub baseline: f32,
}

/// Emit one glyph at a pixel size, viewport spanning the glyph box and
/// the font's vertical extents (whichever is larger).
pub fn emit_glyph(font: &Font, glyph_id: u16, size: f32, config: &RenderConfig) -> GlyphPicture {
    let glyph = font.glyph(glyph_id);
    let scale = font.scale_for(size);
    let b = glyph.bbox();
    let font_box = font.data().head.bbox;

    let x_min = (b.x_min * scale).min(0.0);
    let x_max = b.x_max * scale;
    let y_min = b.y_min.min(font_box.y_min) * scale;
    let y_max = b.y_max.max(font_box.y_max) * scale;
    let width = x_max - x_min;
    let height = y_max - y_min;

    // Draw with the baseline far enough down that the glyph's topmost
    // point lands on y = 0.
    let baseline = y_max;
    let d = path_data(&glyph.outline, 0.0, baseline, scale, config.precision)
        .unwrap_or_default();
    GlyphPicture {
        d,
        width,
        height,
        view_box: (x_min, 0.0, width, height),
        baseline,
    }
}

fn symbol_id(font: &Font, glyph_id: u16) -> String {
    let family = font.family_name();
    let slug: String = family
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    if slug.is_empty() {
        format!("glyph_{glyph_id}")
    } else {
        format!("{slug}_{glyph_id}")
    }
}

fn symbol_def(font: &Font, glyph: &Glyph, id: String, precision: u8) -> SymbolDef {
    // Symbols are emitted in font units (y flipped); uses scale them down.
    let d = path_data(&glyph.outline, 0.0, 0.0, 1.0, precision).unwrap_or_default();
    let b = glyph.bbox();
    let font_box = font.data().head.bbox;
    let x_min = b.x_min.min(0.0);
    let y_max = b.y_max.max(font_box.y_max);
    let y_min = b.y_min.min(font_box.y_min);
    SymbolDef {
        id,
        d,
        view_box: (x_min, -y_max, b.x_max.max(0.0) - x_min, y_max - y_min),
    }
}

/// Path data for an outline drawn at `(x0, y0)` with `scale`, y flipped
/// from font units into screen coordinates. `None` for empty outlines.
pub fn path_data(
    outline: &Outline,
    x0: f32,
    y0: f32,
    scale: f32,
    precision: u8,
) -> Option<String> {
    if outline.is_empty() {
        return None;
    }
    let mut d = String::new();
    let fx = |v: f32| fmt_number(x0 + v * scale, precision);
    let fy = |v: f32| fmt_number(y0 - v * scale, precision);
    for segment in &outline.segments {
        match *segment {
            Segment::MoveTo(p) => {
                let _ = write!(d, "M {} {} ", fx(p.x), fy(p.y));
            }
            Segment::LineTo(p) => {
                let _ = write!(d, "L {} {} ", fx(p.x), fy(p.y));
            }
            Segment::QuadTo(c, p) => {
                let _ = write!(d, "Q {} {} {} {} ", fx(c.x), fy(c.y), fx(p.x), fy(p.y));
            }
            Segment::CubicTo(c1, c2, p) => {
                let _ = write!(
                    d,
                    "C {} {} {} {} {} {} ",
                    fx(c1.x),
                    fy(c1.y),
                    fx(c2.x),
                    fy(c2.y),
                    fx(p.x),
                    fy(p.y)
                );
            }
            Segment::Close => d.push_str("Z "),
        }
    }
    Some(d.trim_end().to_string())
}

/// Fixed-precision number with trailing zeros stripped.
pub fn fmt_number(v: f32, precision: u8) -> String {
    let mut s = format!("{v:.p$}", p = precision as usize);
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use vectype_font::{Outline, Point};

    #[test]
    fn numbers_drop_trailing_zeros() {
        assert_eq!(fmt_number(12.0, 2), "12");
        assert_eq!(fmt_number(12.5, 2), "12.5");
        assert_eq!(fmt_number(12.345, 2), "12.35");
        assert_eq!(fmt_number(-0.0001, 2), "0");
    }

    #[test]
    fn path_data_flips_y_and_closes() {
        let outline = Outline::new(vec![
            Segment::MoveTo(Point::new(0.0, 0.0)),
            Segment::LineTo(Point::new(100.0, 200.0)),
            Segment::Close,
        ]);
        let d = path_data(&outline, 10.0, 50.0, 0.5, 2).unwrap();
        assert_eq!(d, "M 10 50 L 60 -50 Z");
    }

    #[test]
    fn empty_outline_emits_nothing() {
        assert!(path_data(&Outline::empty(), 0.0, 0.0, 1.0, 2).is_none());
    }
}
