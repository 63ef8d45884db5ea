//! Debug geometry for layout inspection: baselines, glyph boxes, and the
//! anchor mark, in the run's aligned (unrotated) coordinates.

use vectype_font::BBox;

use crate::font::Font;
use crate::run::TextRun;

#[derive(Debug, Clone, Default)]
pub struct DebugGeometry {
    /// One segment per line: `((x0, y0), (x1, y1))` along the baseline.
    pub baselines: Vec<((f32, f32), (f32, f32))>,
    /// Positioned ink box per non-empty glyph.
    pub glyph_boxes: Vec<BBox>,
    /// The anchor point the run was aligned against.
    pub origin: (f32, f32),
}

pub fn debug_geometry(font: &Font, run: &TextRun) -> DebugGeometry {
    let baselines = run
        .lines
        .iter()
        .map(|line| {
            (
                (line.start_x, line.baseline_y),
                (line.start_x + line.width, line.baseline_y),
            )
        })
        .collect();

    let mut glyph_boxes = Vec::new();
    for glyph in &run.glyphs {
        let decoded = font.glyph(glyph.glyph_id);
        if decoded.is_empty() {
            continue;
        }
        let b = decoded.bbox();
        glyph_boxes.push(BBox::new(
            glyph.x + b.x_min * run.scale,
            glyph.x + b.x_max * run.scale,
            glyph.y - b.y_max * run.scale,
            glyph.y - b.y_min * run.scale,
        ));
    }

    DebugGeometry {
        baselines,
        glyph_boxes,
        origin: (0.0, 0.0),
    }
}
