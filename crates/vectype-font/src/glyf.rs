// this_file: crates/vectype-font/src/glyf.rs

//! TrueType outline decoding: `loca` offsets plus simple and compound
//! `glyf` entries, reconstructed into quadratic contours.

use std::ops::Range;
use std::sync::Arc;

use kurbo::Affine;

use crate::error::{FontError, Result};
use crate::outline::{BBox, Outline, Point, Segment};
use crate::reader::Reader;
use crate::tables::head::LocaFormat;

// Simple glyph flag bits.
const ON_CURVE: u8 = 0x01;
const X_SHORT: u8 = 0x02;
const Y_SHORT: u8 = 0x04;
const REPEAT: u8 = 0x08;
const X_SAME_OR_POSITIVE: u8 = 0x10;
const Y_SAME_OR_POSITIVE: u8 = 0x20;

// Compound component flag bits.
const ARG_1_AND_2_ARE_WORDS: u16 = 0x0001;
const ARGS_ARE_XY_VALUES: u16 = 0x0002;
const WE_HAVE_A_SCALE: u16 = 0x0008;
const MORE_COMPONENTS: u16 = 0x0020;
const WE_HAVE_AN_X_AND_Y_SCALE: u16 = 0x0040;
const WE_HAVE_A_TWO_BY_TWO: u16 = 0x0080;

/// Nesting limit for compound glyphs; malformed fonts can cycle.
pub const MAX_COMPONENT_DEPTH: u32 = 64;

/// Component translations beyond this are treated as corrupt and clamped.
const MAX_COMPONENT_SHIFT: f64 = 32_768.0;

/// TrueType outline backend: owns parsed `loca` offsets and locates glyph
/// records inside the shared font buffer.
#[derive(Debug, Clone)]
pub struct GlyfOutlines {
    data: Arc<[u8]>,
    glyf: Range<usize>,
    /// `num_glyphs + 1` byte offsets into the glyf table.
    loca: Vec<u32>,
}

impl GlyfOutlines {
    pub fn new(
        data: Arc<[u8]>,
        loca_table: &[u8],
        glyf: Range<usize>,
        format: LocaFormat,
        num_glyphs: u16,
    ) -> Result<GlyfOutlines> {
        let mut r = Reader::new(loca_table);
        let count = num_glyphs as usize + 1;
        let mut loca = Vec::with_capacity(count);
        for _ in 0..count {
            let offset = match format {
                LocaFormat::Short => r.read_u16()? as u32 * 2,
                LocaFormat::Long => r.read_u32()?,
            };
            loca.push(offset);
        }
        Ok(GlyfOutlines { data, glyf, loca })
    }

    pub fn num_glyphs(&self) -> u16 {
        (self.loca.len() - 1) as u16
    }

    /// Decode one glyph. Empty slots (equal loca offsets) yield an empty
    /// outline; compound glyphs recurse with a depth guard.
    pub fn outline(&self, glyph_id: u16) -> Result<Outline> {
        self.outline_at_depth(glyph_id, 0)
    }

    fn glyph_record(&self, glyph_id: u16) -> Result<Option<&[u8]>> {
        let idx = glyph_id as usize;
        if idx + 1 >= self.loca.len() {
            return Err(FontError::BadGlyphId(glyph_id));
        }
        let (start, end) = (self.loca[idx] as usize, self.loca[idx + 1] as usize);
        if start == end {
            return Ok(None);
        }
        if start > end || end > self.glyf.len() {
            return Err(FontError::TruncatedTable);
        }
        Ok(Some(
            &self.data[self.glyf.start + start..self.glyf.start + end],
        ))
    }

    fn outline_at_depth(&self, glyph_id: u16, depth: u32) -> Result<Outline> {
        if depth > MAX_COMPONENT_DEPTH {
            return Err(FontError::CompoundDepth {
                max: MAX_COMPONENT_DEPTH,
            });
        }
        let Some(record) = self.glyph_record(glyph_id)? else {
            return Ok(Outline::empty());
        };

        let mut r = Reader::new(record);
        let num_contours = r.read_i16()?;
        let x_min = r.read_i16()?;
        let y_min = r.read_i16()?;
        let x_max = r.read_i16()?;
        let y_max = r.read_i16()?;
        let declared = BBox::new(x_min as f32, x_max as f32, y_min as f32, y_max as f32);

        if num_contours >= 0 {
            decode_simple(&mut r, num_contours as usize, declared)
        } else {
            self.decode_compound(&mut r, depth)
        }
    }

    fn decode_compound(&self, r: &mut Reader, depth: u32) -> Result<Outline> {
        let mut segments = Vec::new();
        loop {
            let flags = r.read_u16()?;
            let child_id = r.read_u16()?;

            let anchored = flags & ARGS_ARE_XY_VALUES == 0;
            let (dx, dy) = if flags & ARG_1_AND_2_ARE_WORDS != 0 {
                if anchored {
                    (r.read_u16()? as f64, r.read_u16()? as f64)
                } else {
                    (r.read_i16()? as f64, r.read_i16()? as f64)
                }
            } else if anchored {
                (r.read_u8()? as f64, r.read_u8()? as f64)
            } else {
                (r.read_i8()? as f64, r.read_i8()? as f64)
            };

            let (a, b, c, d) = if flags & WE_HAVE_A_SCALE != 0 {
                let s = r.read_f2dot14()? as f64;
                (s, 0.0, 0.0, s)
            } else if flags & WE_HAVE_AN_X_AND_Y_SCALE != 0 {
                let sx = r.read_f2dot14()? as f64;
                let sy = r.read_f2dot14()? as f64;
                (sx, 0.0, 0.0, sy)
            } else if flags & WE_HAVE_A_TWO_BY_TWO != 0 {
                (
                    r.read_f2dot14()? as f64,
                    r.read_f2dot14()? as f64,
                    r.read_f2dot14()? as f64,
                    r.read_f2dot14()? as f64,
                )
            } else {
                (1.0, 0.0, 0.0, 1.0)
            };

            let (dx, dy) = if anchored {
                // Point-anchored attachment needs the assembled parent point
                // list; fonts using it are rare. Place the child unshifted.
                log::warn!("point-anchored compound component for glyph {child_id}; offset ignored");
                (0.0, 0.0)
            } else {
                (
                    dx.clamp(-MAX_COMPONENT_SHIFT, MAX_COMPONENT_SHIFT),
                    dy.clamp(-MAX_COMPONENT_SHIFT, MAX_COMPONENT_SHIFT),
                )
            };

            let child = self.outline_at_depth(child_id, depth + 1)?;
            let affine = Affine::new([a, b, c, d, dx, dy]);
            segments.extend(child.transformed(affine).segments);

            if flags & MORE_COMPONENTS == 0 {
                break;
            }
        }
        Ok(Outline::new(segments))
    }
}

fn decode_simple(r: &mut Reader, num_contours: usize, declared: BBox) -> Result<Outline> {
    if num_contours == 0 {
        return Ok(Outline::empty());
    }
    let end_pts = r.read_u16_array(num_contours)?;
    let num_points = *end_pts.iter().max().unwrap_or(&0) as usize + 1;

    let instruction_len = r.read_u16()? as usize;
    r.skip(instruction_len)?; // hinting programs are not interpreted

    // Flag stream with repeat runs.
    let mut flags = Vec::with_capacity(num_points);
    while flags.len() < num_points {
        let flag = r.read_u8()?;
        let repeats = if flag & REPEAT != 0 {
            r.read_u8()? as usize + 1
        } else {
            1
        };
        for _ in 0..repeats.min(num_points - flags.len()) {
            flags.push(flag);
        }
    }

    // Coordinates are deltas; short flags pack sign into SAME_OR_POSITIVE.
    let mut xs = Vec::with_capacity(num_points);
    let mut x = 0i32;
    for &flag in &flags {
        if flag & X_SHORT != 0 {
            let d = r.read_u8()? as i32;
            x += if flag & X_SAME_OR_POSITIVE != 0 { d } else { -d };
        } else if flag & X_SAME_OR_POSITIVE == 0 {
            x += r.read_i16()? as i32;
        }
        xs.push(x);
    }
    let mut ys = Vec::with_capacity(num_points);
    let mut y = 0i32;
    for &flag in &flags {
        if flag & Y_SHORT != 0 {
            let d = r.read_u8()? as i32;
            y += if flag & Y_SAME_OR_POSITIVE != 0 { d } else { -d };
        } else if flag & Y_SAME_OR_POSITIVE == 0 {
            y += r.read_i16()? as i32;
        }
        ys.push(y);
    }

    let mut segments = Vec::new();
    let mut start = 0usize;
    for &end in &end_pts {
        let stop = end as usize + 1;
        if stop > num_points || start >= stop {
            return Err(FontError::TruncatedTable);
        }
        let pts: Vec<Point> = (start..stop)
            .map(|i| Point::new(xs[i] as f32, ys[i] as f32))
            .collect();
        let on: Vec<bool> = (start..stop).map(|i| flags[i] & ON_CURVE != 0).collect();
        walk_contour(&pts, &on, &mut segments);
        start = stop;
    }

    let mut outline = Outline::new(segments);
    // Prefer the recorded bbox when present; it reflects the true curve
    // extents rather than the control hull.
    if declared.width() > 0.0 || declared.height() > 0.0 {
        outline.bbox = declared;
    }
    Ok(outline)
}

/// Emit segments for one contour's point/flag run.
///
/// Consecutive off-curve points imply an on-curve midpoint; a contour that
/// opens off-curve is anchored on the final point (or, when that is also
/// off-curve, on the midpoint of last and first).
fn walk_contour(pts: &[Point], on: &[bool], segments: &mut Vec<Segment>) {
    let n = pts.len();
    if n == 0 {
        return;
    }
    let (start, skip_first, drop_last) = if on[0] {
        (pts[0], true, false)
    } else if on[n - 1] {
        (pts[n - 1], false, true)
    } else {
        (pts[n - 1].midpoint(pts[0]), false, false)
    };

    segments.push(Segment::MoveTo(start));
    let mut prev_ctrl: Option<Point> = None;
    let range = (if skip_first { 1 } else { 0 })..(if drop_last { n - 1 } else { n });
    for i in range {
        let p = pts[i];
        if on[i] {
            match prev_ctrl.take() {
                Some(c) => segments.push(Segment::QuadTo(c, p)),
                None => segments.push(Segment::LineTo(p)),
            }
        } else if let Some(c) = prev_ctrl.replace(p) {
            segments.push(Segment::QuadTo(c, c.midpoint(p)));
        }
    }
    if let Some(c) = prev_ctrl {
        segments.push(Segment::QuadTo(c, start));
    }
    segments.push(Segment::Close);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn on_curve_polygon_becomes_lines() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ];
        let on = [true, true, true];
        let mut segs = Vec::new();
        walk_contour(&pts, &on, &mut segs);
        assert_eq!(
            segs,
            vec![
                Segment::MoveTo(Point::new(0.0, 0.0)),
                Segment::LineTo(Point::new(10.0, 0.0)),
                Segment::LineTo(Point::new(10.0, 10.0)),
                Segment::Close,
            ]
        );
    }

    #[test]
    fn consecutive_off_curve_points_imply_midpoint() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(20.0, 10.0),
            Point::new(30.0, 0.0),
        ];
        let on = [true, false, false, true];
        let mut segs = Vec::new();
        walk_contour(&pts, &on, &mut segs);
        assert_eq!(
            segs,
            vec![
                Segment::MoveTo(Point::new(0.0, 0.0)),
                Segment::QuadTo(Point::new(10.0, 10.0), Point::new(15.0, 10.0)),
                Segment::QuadTo(Point::new(20.0, 10.0), Point::new(30.0, 0.0)),
                Segment::Close,
            ]
        );
    }

    #[test]
    fn off_curve_start_is_anchored_on_last_point() {
        let pts = [
            Point::new(5.0, 5.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 0.0),
        ];
        let on = [false, true, true];
        let mut segs = Vec::new();
        walk_contour(&pts, &on, &mut segs);
        assert_eq!(segs[0], Segment::MoveTo(Point::new(0.0, 0.0)));
        assert_eq!(
            segs[1],
            Segment::QuadTo(Point::new(5.0, 5.0), Point::new(10.0, 0.0))
        );
    }

    #[test]
    fn all_off_curve_contour_starts_at_midpoint() {
        let pts = [
            Point::new(0.0, 10.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, -10.0),
            Point::new(0.0, -10.0),
        ];
        let on = [false, false, false, false];
        let mut segs = Vec::new();
        walk_contour(&pts, &on, &mut segs);
        assert_eq!(segs[0], Segment::MoveTo(Point::new(0.0, 0.0)));
        // every off-curve pair contributes one implied quad, plus closing
        assert_eq!(
            segs.iter()
                .filter(|s| matches!(s, Segment::QuadTo(..)))
                .count(),
            4
        );
    }
}
