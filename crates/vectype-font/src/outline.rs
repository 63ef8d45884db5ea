// this_file: crates/vectype-font/src/outline.rs

//! Canonical decoded glyph form: closed contours of line and Bézier
//! segments in font units, shared by the TrueType and CFF backends.

use kurbo::{Affine, BezPath, Point as KPoint};

/// A point in font units. Fractional values appear after compound glyph
/// transforms and CFF charstring arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }

    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    fn transformed(self, affine: Affine) -> Point {
        let p = affine * KPoint::new(self.x as f64, self.y as f64);
        Point::new(p.x as f32, p.y as f32)
    }
}

impl std::ops::Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// One drawing step of a contour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    MoveTo(Point),
    LineTo(Point),
    /// Quadratic Bézier: control, end.
    QuadTo(Point, Point),
    /// Cubic Bézier: control 1, control 2, end.
    CubicTo(Point, Point, Point),
    Close,
}

impl Segment {
    /// Points the segment carries, each flagged true when it is an
    /// off-curve control point. Used by inspection/debug views.
    pub fn points(&self) -> Vec<(Point, bool)> {
        match *self {
            Segment::MoveTo(p) | Segment::LineTo(p) => vec![(p, false)],
            Segment::QuadTo(c, p) => vec![(c, true), (p, false)],
            Segment::CubicTo(c1, c2, p) => vec![(c1, true), (c2, true), (p, false)],
            Segment::Close => Vec::new(),
        }
    }

    fn transformed(self, affine: Affine) -> Segment {
        match self {
            Segment::MoveTo(p) => Segment::MoveTo(p.transformed(affine)),
            Segment::LineTo(p) => Segment::LineTo(p.transformed(affine)),
            Segment::QuadTo(c, p) => {
                Segment::QuadTo(c.transformed(affine), p.transformed(affine))
            }
            Segment::CubicTo(c1, c2, p) => Segment::CubicTo(
                c1.transformed(affine),
                c2.transformed(affine),
                p.transformed(affine),
            ),
            Segment::Close => Segment::Close,
        }
    }
}

/// A glyph bounding box in font units, `(x_min, x_max, y_min, y_max)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BBox {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl BBox {
    pub const fn new(x_min: f32, x_max: f32, y_min: f32, y_max: f32) -> Self {
        BBox {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }

    fn extend(&mut self, p: Point) {
        self.x_min = self.x_min.min(p.x);
        self.x_max = self.x_max.max(p.x);
        self.y_min = self.y_min.min(p.y);
        self.y_max = self.y_max.max(p.y);
    }

    pub fn union(self, other: BBox) -> BBox {
        BBox {
            x_min: self.x_min.min(other.x_min),
            x_max: self.x_max.max(other.x_max),
            y_min: self.y_min.min(other.y_min),
            y_max: self.y_max.max(other.y_max),
        }
    }

    pub fn contains(&self, other: &BBox, tolerance: f32) -> bool {
        other.x_min >= self.x_min - tolerance
            && other.x_max <= self.x_max + tolerance
            && other.y_min >= self.y_min - tolerance
            && other.y_max <= self.y_max + tolerance
    }

    /// Control-point hull of a segment list; `None` when nothing is drawn.
    pub fn of_segments(segments: &[Segment]) -> Option<BBox> {
        let mut bbox: Option<BBox> = None;
        let mut push = |p: Point| match &mut bbox {
            Some(b) => b.extend(p),
            None => bbox = Some(BBox::new(p.x, p.x, p.y, p.y)),
        };
        for seg in segments {
            match *seg {
                Segment::MoveTo(p) | Segment::LineTo(p) => push(p),
                Segment::QuadTo(c, p) => {
                    push(c);
                    push(p);
                }
                Segment::CubicTo(c1, c2, p) => {
                    push(c1);
                    push(c2);
                    push(p);
                }
                Segment::Close => {}
            }
        }
        bbox
    }
}

/// A decoded glyph outline: contours in font units plus the glyph bbox.
///
/// Every contour begins with exactly one `MoveTo` and ends with `Close`;
/// an empty glyph (a space) has no segments at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outline {
    pub segments: Vec<Segment>,
    pub bbox: BBox,
}

impl Outline {
    pub fn new(segments: Vec<Segment>) -> Outline {
        let bbox = BBox::of_segments(&segments).unwrap_or_default();
        Outline { segments, bbox }
    }

    pub fn empty() -> Outline {
        Outline::default()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Apply an affine and recompute the bbox.
    pub fn transformed(&self, affine: Affine) -> Outline {
        Outline::new(
            self.segments
                .iter()
                .map(|seg| seg.transformed(affine))
                .collect(),
        )
    }

    /// Contours as sub-slices, split on `MoveTo`.
    pub fn contours(&self) -> Vec<&[Segment]> {
        let mut out = Vec::new();
        let mut start = None;
        for (i, seg) in self.segments.iter().enumerate() {
            if matches!(seg, Segment::MoveTo(_)) {
                if let Some(s) = start {
                    out.push(&self.segments[s..i]);
                }
                start = Some(i);
            }
        }
        if let Some(s) = start {
            out.push(&self.segments[s..]);
        }
        out
    }

    /// Convert to a `kurbo::BezPath` in font units (y up).
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        for seg in &self.segments {
            match *seg {
                Segment::MoveTo(p) => path.move_to(kpoint(p)),
                Segment::LineTo(p) => path.line_to(kpoint(p)),
                Segment::QuadTo(c, p) => path.quad_to(kpoint(c), kpoint(p)),
                Segment::CubicTo(c1, c2, p) => {
                    path.curve_to(kpoint(c1), kpoint(c2), kpoint(p))
                }
                Segment::Close => path.close_path(),
            }
        }
        path
    }
}

fn kpoint(p: Point) -> KPoint {
    KPoint::new(p.x as f64, p.y as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Segment> {
        vec![
            Segment::MoveTo(Point::new(0.0, 0.0)),
            Segment::LineTo(Point::new(100.0, 0.0)),
            Segment::LineTo(Point::new(100.0, 100.0)),
            Segment::LineTo(Point::new(0.0, 100.0)),
            Segment::Close,
        ]
    }

    #[test]
    fn bbox_covers_control_points() {
        let segs = vec![
            Segment::MoveTo(Point::new(0.0, 0.0)),
            Segment::QuadTo(Point::new(50.0, 120.0), Point::new(100.0, 0.0)),
            Segment::Close,
        ];
        let bbox = BBox::of_segments(&segs).unwrap();
        assert_eq!(bbox.y_max, 120.0);
        assert_eq!(bbox.x_max, 100.0);
    }

    #[test]
    fn transform_scales_and_translates() {
        let outline = Outline::new(square());
        let moved = outline.transformed(Affine::new([0.5, 0.0, 0.0, 0.5, 10.0, 20.0]));
        assert_eq!(moved.bbox, BBox::new(10.0, 60.0, 20.0, 70.0));
    }

    #[test]
    fn contours_split_on_moveto() {
        let mut segs = square();
        segs.extend(square());
        let outline = Outline::new(segs);
        let contours = outline.contours();
        assert_eq!(contours.len(), 2);
        assert!(matches!(contours[1][0], Segment::MoveTo(_)));
        assert!(matches!(contours[1].last(), Some(Segment::Close)));
    }
}
