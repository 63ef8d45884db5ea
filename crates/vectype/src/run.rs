// this_file: crates/vectype/src/run.rs

//! Text layout results: positioned glyph runs in pixel coordinates.

use kurbo::{Affine, Point as KPoint};
use vectype_font::BBox;

use crate::config::RenderConfig;

/// Horizontal alignment of lines within the block and of the block
/// against the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical alignment of the block against the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VAlign {
    Top,
    Center,
    /// First-line baseline on the anchor.
    #[default]
    Base,
    Bottom,
}

/// How rotation interacts with alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationMode {
    /// Align the unrotated block, then rotate about the anchor.
    #[default]
    Default,
    /// Rotate first and align the rotated block's bounding box.
    Anchor,
}

/// Options for one text request.
#[derive(Debug, Clone, Default)]
pub struct TextOptions {
    /// Pixel size; falls back to the configuration's `fontsize`.
    pub size: Option<f32>,
    /// CSS color the consumer should paint with.
    pub color: Option<String>,
    pub halign: HAlign,
    pub valign: VAlign,
    /// Multiplier on the font's natural baseline-to-baseline distance.
    pub linespacing: Option<f32>,
    /// Rotation in degrees, clockwise in screen coordinates.
    pub rotation: f32,
    pub rotation_mode: RotationMode,
    /// Per-call feature overrides, e.g. `[("kern", false)]`.
    pub features: Vec<(String, bool)>,
    /// Configuration override; the process default applies otherwise.
    pub config: Option<RenderConfig>,
}

impl TextOptions {
    pub fn with_size(size: f32) -> TextOptions {
        TextOptions {
            size: Some(size),
            ..Default::default()
        }
    }

    /// Convenience for the common kern on/off toggle.
    pub fn kern(mut self, on: bool) -> TextOptions {
        self.features.push(("kern".into(), on));
        self
    }
}

/// One glyph placed in the run, pixel coordinates relative to the anchor,
/// before rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionedGlyph {
    pub glyph_id: u16,
    pub x: f32,
    pub y: f32,
    /// Effective advance this glyph contributed (kerning included).
    pub advance: f32,
}

/// Per-line layout record.
#[derive(Debug, Clone)]
pub struct Line {
    /// Baseline y in aligned block coordinates.
    pub baseline_y: f32,
    /// Line start x after alignment.
    pub start_x: f32,
    /// Advance width of the line in pixels.
    pub width: f32,
    /// Index range of this line's glyphs in [`TextRun::glyphs`].
    pub glyphs: std::ops::Range<usize>,
}

/// A laid-out block of text.
///
/// Glyph positions are aligned against the anchor but stored unrotated;
/// [`TextRun::placements`] applies the rotation. A consumer drawing the
/// run as one group can instead emit the unrotated positions inside a
/// group carrying [`TextRun::rotation`] about the anchor.
#[derive(Debug, Clone)]
pub struct TextRun {
    pub glyphs: Vec<PositionedGlyph>,
    pub lines: Vec<Line>,
    /// Pixel size of the request.
    pub size: f32,
    /// `size / unitsPerEm`.
    pub scale: f32,
    /// Rotation in degrees about the anchor.
    pub rotation: f32,
    pub color: Option<String>,
    /// Block metrics box (advance widths by line heights), aligned,
    /// unrotated.
    pub block: BBox,
    /// Union of positioned glyph bounding boxes, aligned, unrotated.
    pub ink: BBox,
}

impl TextRun {
    /// Final placements: `(glyph id, x, y, scale)` with rotation applied,
    /// ready for drawing.
    pub fn placements(&self) -> impl Iterator<Item = (u16, f32, f32, f32)> + '_ {
        let transform = self.transform();
        self.glyphs.iter().map(move |g| {
            let p = transform * KPoint::new(g.x as f64, g.y as f64);
            (g.glyph_id, p.x as f32, p.y as f32, self.scale)
        })
    }

    /// The rotation transform about the anchor (identity when unrotated).
    pub fn transform(&self) -> Affine {
        if self.rotation == 0.0 {
            Affine::IDENTITY
        } else {
            Affine::rotate((self.rotation as f64).to_radians())
        }
    }

    /// Block width and height in pixels (advance-based, unrotated).
    pub fn size(&self) -> (f32, f32) {
        (self.block.width(), self.block.height())
    }

    /// Ink bounding box with rotation applied.
    pub fn bbox(&self) -> BBox {
        transform_bbox(self.ink, self.transform())
    }

    /// First-line baseline y after alignment (the `base` reference).
    pub fn baseline(&self) -> f32 {
        self.lines.first().map(|l| l.baseline_y).unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

/// Axis-aligned box of a transformed box.
pub(crate) fn transform_bbox(bbox: BBox, transform: Affine) -> BBox {
    if transform == Affine::IDENTITY {
        return bbox;
    }
    let corners = [
        (bbox.x_min, bbox.y_min),
        (bbox.x_max, bbox.y_min),
        (bbox.x_min, bbox.y_max),
        (bbox.x_max, bbox.y_max),
    ];
    let mut out: Option<BBox> = None;
    for (x, y) in corners {
        let p = transform * KPoint::new(x as f64, y as f64);
        let (px, py) = (p.x as f32, p.y as f32);
        out = Some(match out {
            None => BBox::new(px, px, py, py),
            Some(b) => BBox::new(
                b.x_min.min(px),
                b.x_max.max(px),
                b.y_min.min(py),
                b.y_max.max(py),
            ),
        });
    }
    out.unwrap_or(bbox)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotated_bbox_of_square_grows_diagonally() {
        let bbox = BBox::new(0.0, 10.0, 0.0, 10.0);
        let rotated = transform_bbox(bbox, Affine::rotate(45f64.to_radians()));
        let diag = 10.0 * 2f32.sqrt();
        assert!((rotated.width() - diag).abs() < 1e-3);
        assert!((rotated.height() - diag).abs() < 1e-3);
    }

    #[test]
    fn identity_transform_is_passthrough() {
        let bbox = BBox::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(transform_bbox(bbox, Affine::IDENTITY), bbox);
    }
}
