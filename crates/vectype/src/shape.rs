// this_file: crates/vectype/src/shape.rs

//! String to positioned glyph run: cmap, GSUB, advances, GPOS, line
//! stacking, alignment, rotation.

use std::collections::HashMap;

use kurbo::{Affine, Point as KPoint};
use vectype_font::layout::gpos::Adjustment;
use vectype_font::layout::gsub::Gsub;
use vectype_font::BBox;

use crate::config;
use crate::features::FeatureSet;
use crate::font::Font;
use crate::run::{
    transform_bbox, HAlign, Line, PositionedGlyph, RotationMode, TextOptions, TextRun, VAlign,
};

pub(crate) fn shape(font: &Font, text: &str, options: &TextOptions) -> TextRun {
    let cfg = options
        .config
        .clone()
        .unwrap_or_else(config::default_config);
    let size = options.size.unwrap_or(cfg.fontsize);
    let data = font.data();
    let scale = size / data.units_per_em() as f32;
    let features = font
        .features()
        .with_overrides(options.features.iter().map(|(t, on)| (t.as_str(), *on)));

    let linespacing = options.linespacing.unwrap_or(1.0);
    let line_height = data.hhea.line_height() as f32 * linespacing * scale;
    let ascent = data.hhea.ascent as f32 * scale;
    let descent = data.hhea.descent as f32 * scale; // negative in y-up terms

    // Shape each line independently; positions start in block coordinates
    // with the first baseline on y = 0.
    let mut glyphs: Vec<PositionedGlyph> = Vec::new();
    let mut lines: Vec<Line> = Vec::new();
    let split: Vec<&str> = text
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .collect();
    for (line_index, line_text) in split.iter().enumerate() {
        let baseline_y = line_index as f32 * line_height;
        let start = glyphs.len();
        let width = shape_line(font, line_text, &features, scale, baseline_y, &mut glyphs);
        lines.push(Line {
            baseline_y,
            start_x: 0.0,
            width,
            glyphs: start..glyphs.len(),
        });
    }

    // Horizontal alignment of lines within the block.
    let block_width = lines.iter().map(|l| l.width).fold(0.0, f32::max);
    for line in &mut lines {
        let shift = match options.halign {
            HAlign::Left => 0.0,
            HAlign::Center => (block_width - line.width) / 2.0,
            HAlign::Right => block_width - line.width,
        };
        if shift != 0.0 {
            line.start_x = shift;
            for glyph in &mut glyphs[line.glyphs.clone()] {
                glyph.x += shift;
            }
        }
    }

    // Block extents before anchoring: x spans the widest line, y spans
    // first-line ascent to last-line descent.
    let block_bottom = lines.last().map(|l| l.baseline_y).unwrap_or(0.0) - descent;
    let block = BBox::new(0.0, block_width, -ascent, block_bottom);

    // Alignment offset against the anchor. In `Anchor` rotation mode the
    // offsets come from the rotated block box and are mapped back into
    // unrotated coordinates, so that rotating the final run about the
    // anchor lands the block where the alignment asked.
    let rotation = options.rotation;
    let transform = if rotation == 0.0 {
        Affine::IDENTITY
    } else {
        Affine::rotate((rotation as f64).to_radians())
    };
    let (ox, oy) = match options.rotation_mode {
        RotationMode::Default => (
            match options.halign {
                HAlign::Left => 0.0,
                HAlign::Center => -block_width / 2.0,
                HAlign::Right => -block_width,
            },
            match options.valign {
                VAlign::Base => 0.0,
                VAlign::Top => ascent,
                VAlign::Center => -(block.y_min + block.y_max) / 2.0,
                VAlign::Bottom => -block.y_max,
            },
        ),
        RotationMode::Anchor => {
            let rotated = transform_bbox(block, transform);
            let ox = match options.halign {
                HAlign::Left => -rotated.x_min,
                HAlign::Center => -(rotated.x_min + rotated.x_max) / 2.0,
                HAlign::Right => -rotated.x_max,
            };
            let oy = match options.valign {
                VAlign::Base => 0.0,
                VAlign::Top => -rotated.y_min,
                VAlign::Center => -(rotated.y_min + rotated.y_max) / 2.0,
                VAlign::Bottom => -rotated.y_max,
            };
            // map the post-rotation shift back into pre-rotation coords
            let p = transform.inverse() * KPoint::new(ox as f64, oy as f64);
            (p.x as f32, p.y as f32)
        }
    };

    if ox != 0.0 || oy != 0.0 {
        for glyph in &mut glyphs {
            glyph.x += ox;
            glyph.y += oy;
        }
        for line in &mut lines {
            line.baseline_y += oy;
            line.start_x += ox;
        }
    }
    let block = BBox::new(
        block.x_min + ox,
        block.x_max + ox,
        block.y_min + oy,
        block.y_max + oy,
    );

    // Ink box: union of positioned glyph boxes (bbox y is y-up font units).
    let mut ink: Option<BBox> = None;
    for glyph in &glyphs {
        let decoded = font.glyph(glyph.glyph_id);
        if decoded.is_empty() {
            continue;
        }
        let b = decoded.bbox();
        let positioned = BBox::new(
            glyph.x + b.x_min * scale,
            glyph.x + b.x_max * scale,
            glyph.y - b.y_max * scale,
            glyph.y - b.y_min * scale,
        );
        ink = Some(match ink {
            None => positioned,
            Some(acc) => acc.union(positioned),
        });
    }

    TextRun {
        glyphs,
        lines,
        size,
        scale,
        rotation,
        color: options.color.clone(),
        block,
        ink: ink.unwrap_or(block),
    }
}

/// Shape one line into `out`, returning its advance width in pixels.
fn shape_line(
    font: &Font,
    text: &str,
    features: &FeatureSet,
    scale: f32,
    baseline_y: f32,
    out: &mut Vec<PositionedGlyph>,
) -> f32 {
    let data = font.data();
    let mut gids: Vec<u16> = text.chars().map(|c| font.glyph_index(c)).collect();

    if let Some(gsub) = &data.gsub {
        let indices = gsub.header.lookup_indices(|tag| features.enabled(tag));
        let alternates = alternate_choices(gsub, features);
        for &index in &indices {
            let choice = alternates.get(&index).copied().unwrap_or(0);
            gsub.apply_lookup(index, &mut gids, choice);
        }
    }

    let advances: Vec<i32> = gids.iter().map(|&g| data.advance(g) as i32).collect();
    let mut adjustments = vec![Adjustment::default(); gids.len()];
    if let Some(gpos) = &data.gpos {
        for index in gpos.header.lookup_indices(|tag| features.enabled(tag)) {
            gpos.apply_lookup(index, &gids, &advances, &mut adjustments);
        }
    }

    let mut pen = 0i32;
    for i in 0..gids.len() {
        let adj = adjustments[i];
        let advance = advances[i] + adj.advance_dx;
        out.push(PositionedGlyph {
            glyph_id: gids[i],
            x: (pen + adj.dx) as f32 * scale,
            // GPOS y is y-up; run coordinates grow downward
            y: baseline_y - adj.dy as f32 * scale,
            advance: advance as f32 * scale,
        });
        pen += advance;
    }
    pen as f32 * scale
}

/// Per-lookup alternate index, derived from the features that activate
/// each lookup.
fn alternate_choices(gsub: &Gsub, features: &FeatureSet) -> HashMap<u16, usize> {
    let mut choices = HashMap::new();
    for feature in &gsub.header.features {
        let choice = features.alternate(feature.tag);
        if choice != 0 && features.enabled(feature.tag) {
            for &lookup in &feature.lookup_indices {
                choices.insert(lookup, choice);
            }
        }
    }
    choices
}
