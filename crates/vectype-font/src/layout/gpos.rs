// this_file: crates/vectype-font/src/layout/gpos.rs

//! `GPOS` — glyph positioning lookups: single and pair adjustment, plus
//! mark-to-base and mark-to-mark anchor attachment.

use crate::error::{Result, Warning};
use crate::layout::common::{
    parse_layout_header, ClassDef, Coverage, LookupSkeleton, ScriptsAndFeatures,
};
use crate::reader::Reader;

const TYPE_SINGLE: u16 = 1;
const TYPE_PAIR: u16 = 2;
const TYPE_MARK_TO_BASE: u16 = 4;
const TYPE_MARK_TO_MARK: u16 = 6;
const TYPE_EXTENSION: u16 = 9;

const VALUE_X_PLACEMENT: u16 = 0x0001;
const VALUE_Y_PLACEMENT: u16 = 0x0002;
const VALUE_X_ADVANCE: u16 = 0x0004;
const VALUE_Y_ADVANCE: u16 = 0x0008;
const VALUE_DEVICE_BITS: [u16; 4] = [0x0010, 0x0020, 0x0040, 0x0080];

/// Positioning deltas in font units. Unset ValueRecord fields stay zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValueRecord {
    pub x_placement: i16,
    pub y_placement: i16,
    pub x_advance: i16,
    pub y_advance: i16,
}

impl ValueRecord {
    fn parse(r: &mut Reader, format: u16) -> Result<ValueRecord> {
        let mut v = ValueRecord::default();
        if format & VALUE_X_PLACEMENT != 0 {
            v.x_placement = r.read_i16()?;
        }
        if format & VALUE_Y_PLACEMENT != 0 {
            v.y_placement = r.read_i16()?;
        }
        if format & VALUE_X_ADVANCE != 0 {
            v.x_advance = r.read_i16()?;
        }
        if format & VALUE_Y_ADVANCE != 0 {
            v.y_advance = r.read_i16()?;
        }
        for bit in VALUE_DEVICE_BITS {
            if format & bit != 0 {
                r.skip(2)?; // device/variation table offsets are not applied
            }
        }
        Ok(v)
    }

    pub fn is_zero(&self) -> bool {
        *self == ValueRecord::default()
    }
}

/// An attachment point. Formats 2 and 3 carry extra data (contour point,
/// device tables) that is ignored; the coordinates are always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Anchor {
    pub x: i16,
    pub y: i16,
}

impl Anchor {
    fn parse(r: &mut Reader) -> Result<Anchor> {
        r.skip(2)?; // anchor format
        Ok(Anchor {
            x: r.read_i16()?,
            y: r.read_i16()?,
        })
    }
}

/// Accumulated positioning for one glyph, in font units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Adjustment {
    pub dx: i32,
    pub dy: i32,
    pub advance_dx: i32,
    pub advance_dy: i32,
}

impl Adjustment {
    fn add_value(&mut self, v: &ValueRecord) {
        self.dx += v.x_placement as i32;
        self.dy += v.y_placement as i32;
        self.advance_dx += v.x_advance as i32;
        self.advance_dy += v.y_advance as i32;
    }
}

#[derive(Debug, Clone)]
pub enum GposSubtable {
    Single {
        coverage: Coverage,
        /// One shared record (format 1) or one per coverage index (format 2).
        values: Vec<ValueRecord>,
    },
    PairGlyphs {
        coverage: Coverage,
        /// Per first-glyph coverage index: (second glyph, value1, value2).
        sets: Vec<Vec<(u16, ValueRecord, ValueRecord)>>,
    },
    PairClasses {
        coverage: Coverage,
        class1: ClassDef,
        class2: ClassDef,
        /// `matrix[class1][class2]`.
        matrix: Vec<Vec<(ValueRecord, ValueRecord)>>,
    },
    MarkAttach {
        /// Marks being positioned.
        mark_coverage: Coverage,
        /// Attachment targets: bases (type 4) or other marks (type 6).
        base_coverage: Coverage,
        /// Per mark coverage index: (mark class, mark anchor).
        marks: Vec<(u16, Anchor)>,
        /// Per base coverage index: one optional anchor per mark class.
        bases: Vec<Vec<Option<Anchor>>>,
        /// True for mark-to-mark, which may only attach to another mark.
        to_mark: bool,
    },
}

#[derive(Debug, Clone)]
pub struct GposLookup {
    pub lookup_type: u16,
    pub subtables: Vec<GposSubtable>,
}

/// Parsed `GPOS` table.
#[derive(Debug, Clone)]
pub struct Gpos {
    pub header: ScriptsAndFeatures,
    lookups: Vec<GposLookup>,
    skipped: Vec<Warning>,
}

impl Gpos {
    pub fn parse(data: &[u8]) -> Result<Gpos> {
        let table = Reader::new(data);
        let (header, skeletons) = parse_layout_header(&table)?;
        let mut lookups = Vec::with_capacity(skeletons.len());
        let mut skipped = Vec::new();
        for (index, skeleton) in skeletons.iter().enumerate() {
            lookups.push(parse_lookup(&table, skeleton, index as u16, &mut skipped)?);
        }
        Ok(Gpos {
            header,
            lookups,
            skipped,
        })
    }

    pub fn skipped_lookups(&self) -> &[Warning] {
        &self.skipped
    }

    pub fn lookups(&self) -> &[GposLookup] {
        &self.lookups
    }

    /// Apply one lookup, accumulating into `adjustments` (parallel to
    /// `glyphs`). `advances` carries the base advance of each glyph in font
    /// units, used to measure mark-to-base pen distances.
    pub fn apply_lookup(
        &self,
        lookup_index: u16,
        glyphs: &[u16],
        advances: &[i32],
        adjustments: &mut [Adjustment],
    ) {
        let Some(lookup) = self.lookups.get(lookup_index as usize) else {
            return;
        };
        for subtable in &lookup.subtables {
            match subtable {
                GposSubtable::Single { coverage, values } => {
                    for (i, &glyph) in glyphs.iter().enumerate() {
                        let Some(idx) = coverage.index(glyph) else {
                            continue;
                        };
                        let value = if values.len() == 1 {
                            values.first()
                        } else {
                            values.get(idx as usize)
                        };
                        if let Some(v) = value {
                            adjustments[i].add_value(v);
                        }
                    }
                }
                GposSubtable::PairGlyphs { coverage, sets } => {
                    for i in 0..glyphs.len().saturating_sub(1) {
                        let Some(idx) = coverage.index(glyphs[i]) else {
                            continue;
                        };
                        let Some(pairs) = sets.get(idx as usize) else {
                            continue;
                        };
                        if let Some((_, v1, v2)) =
                            pairs.iter().find(|(second, _, _)| *second == glyphs[i + 1])
                        {
                            adjustments[i].add_value(v1);
                            adjustments[i + 1].add_value(v2);
                        }
                    }
                }
                GposSubtable::PairClasses {
                    coverage,
                    class1,
                    class2,
                    matrix,
                } => {
                    for i in 0..glyphs.len().saturating_sub(1) {
                        if coverage.index(glyphs[i]).is_none() {
                            continue;
                        }
                        let c1 = class1.class(glyphs[i]) as usize;
                        let c2 = class2.class(glyphs[i + 1]) as usize;
                        if let Some((v1, v2)) = matrix.get(c1).and_then(|row| row.get(c2)) {
                            if !v1.is_zero() || !v2.is_zero() {
                                adjustments[i].add_value(v1);
                                adjustments[i + 1].add_value(v2);
                            }
                        }
                    }
                }
                GposSubtable::MarkAttach {
                    mark_coverage,
                    base_coverage,
                    marks,
                    bases,
                    to_mark,
                } => {
                    for i in 1..glyphs.len() {
                        let Some(mark_idx) = mark_coverage.index(glyphs[i]) else {
                            continue;
                        };
                        let Some(&(class, mark_anchor)) = marks.get(mark_idx as usize) else {
                            continue;
                        };
                        let Some(base_pos) = find_attachment_base(
                            glyphs,
                            i,
                            base_coverage,
                            mark_coverage,
                            *to_mark,
                        ) else {
                            continue;
                        };
                        let Some(base_idx) = base_coverage.index(glyphs[base_pos]) else {
                            continue;
                        };
                        let anchor = bases
                            .get(base_idx as usize)
                            .and_then(|row| row.get(class as usize))
                            .copied()
                            .flatten();
                        let Some(base_anchor) = anchor else {
                            continue;
                        };
                        // Pen distance from the base origin to the mark
                        // origin, so the anchors coincide once applied.
                        let pen_distance: i32 = (base_pos..i)
                            .map(|k| advances[k] + adjustments[k].advance_dx)
                            .sum();
                        adjustments[i].dx +=
                            base_anchor.x as i32 - mark_anchor.x as i32 - pen_distance;
                        adjustments[i].dy += base_anchor.y as i32 - mark_anchor.y as i32;
                    }
                }
            }
        }
    }
}

/// Scan backwards for the glyph a mark attaches to. Mark-to-base skips
/// over intervening marks; mark-to-mark only looks at the run of marks
/// immediately before the current one.
fn find_attachment_base(
    glyphs: &[u16],
    mark_pos: usize,
    base_coverage: &Coverage,
    mark_coverage: &Coverage,
    to_mark: bool,
) -> Option<usize> {
    for j in (0..mark_pos).rev() {
        if base_coverage.contains(glyphs[j]) {
            return Some(j);
        }
        let is_mark = mark_coverage.contains(glyphs[j]);
        if to_mark && !is_mark {
            return None;
        }
        if !to_mark && !is_mark {
            // a non-mark glyph that is not a base ends the search
            return None;
        }
    }
    None
}

fn parse_lookup(
    table: &Reader,
    skeleton: &LookupSkeleton,
    index: u16,
    skipped: &mut Vec<Warning>,
) -> Result<GposLookup> {
    let mut subtables = Vec::new();
    let mut effective_type = skeleton.lookup_type;
    for &offset in &skeleton.subtable_offsets {
        let (lookup_type, offset) = resolve_extension(table, skeleton.lookup_type, offset)?;
        effective_type = lookup_type;
        match parse_subtable(table, lookup_type, offset)? {
            Some(subtable) => subtables.push(subtable),
            None => {
                log::warn!("skipping unsupported GPOS lookup type {lookup_type}");
                skipped.push(Warning::UnsupportedLookup {
                    kind: "GPOS",
                    lookup_type,
                    lookup_index: index,
                });
            }
        }
    }
    Ok(GposLookup {
        lookup_type: effective_type,
        subtables,
    })
}

fn resolve_extension(table: &Reader, lookup_type: u16, offset: usize) -> Result<(u16, usize)> {
    if lookup_type != TYPE_EXTENSION {
        return Ok((lookup_type, offset));
    }
    let mut r = table.slice_from(offset)?;
    r.skip(2)?; // format, always 1
    let wrapped_type = r.read_u16()?;
    let wrapped_offset = r.read_u32()? as usize;
    Ok((wrapped_type, offset + wrapped_offset))
}

fn parse_subtable(
    table: &Reader,
    lookup_type: u16,
    offset: usize,
) -> Result<Option<GposSubtable>> {
    let mut r = table.slice_from(offset)?;
    match lookup_type {
        TYPE_SINGLE => {
            let format = r.read_u16()?;
            let coverage_offset = r.read_u16()? as usize;
            let value_format = r.read_u16()?;
            let values = if format == 1 {
                vec![ValueRecord::parse(&mut r, value_format)?]
            } else {
                let count = r.read_u16()? as usize;
                let mut out = Vec::with_capacity(count);
                for _ in 0..count {
                    out.push(ValueRecord::parse(&mut r, value_format)?);
                }
                out
            };
            Ok(Some(GposSubtable::Single {
                coverage: Coverage::parse(&mut table.slice_from(offset + coverage_offset)?)?,
                values,
            }))
        }
        TYPE_PAIR => {
            let format = r.read_u16()?;
            let coverage_offset = r.read_u16()? as usize;
            let value_format1 = r.read_u16()?;
            let value_format2 = r.read_u16()?;
            let coverage = Coverage::parse(&mut table.slice_from(offset + coverage_offset)?)?;
            if format == 1 {
                let set_count = r.read_u16()? as usize;
                let set_offsets = r.read_u16_array(set_count)?;
                let mut sets = Vec::with_capacity(set_count);
                for set_offset in set_offsets {
                    let mut sr = table.slice_from(offset + set_offset as usize)?;
                    let pair_count = sr.read_u16()? as usize;
                    let mut pairs = Vec::with_capacity(pair_count);
                    for _ in 0..pair_count {
                        pairs.push((
                            sr.read_u16()?,
                            ValueRecord::parse(&mut sr, value_format1)?,
                            ValueRecord::parse(&mut sr, value_format2)?,
                        ));
                    }
                    sets.push(pairs);
                }
                Ok(Some(GposSubtable::PairGlyphs { coverage, sets }))
            } else {
                let class1_offset = r.read_u16()? as usize;
                let class2_offset = r.read_u16()? as usize;
                let class1_count = r.read_u16()? as usize;
                let class2_count = r.read_u16()? as usize;
                let mut matrix = Vec::with_capacity(class1_count);
                for _ in 0..class1_count {
                    let mut row = Vec::with_capacity(class2_count);
                    for _ in 0..class2_count {
                        row.push((
                            ValueRecord::parse(&mut r, value_format1)?,
                            ValueRecord::parse(&mut r, value_format2)?,
                        ));
                    }
                    matrix.push(row);
                }
                Ok(Some(GposSubtable::PairClasses {
                    coverage,
                    class1: ClassDef::parse(&mut table.slice_from(offset + class1_offset)?)?,
                    class2: ClassDef::parse(&mut table.slice_from(offset + class2_offset)?)?,
                    matrix,
                }))
            }
        }
        TYPE_MARK_TO_BASE | TYPE_MARK_TO_MARK => {
            r.skip(2)?; // format 1
            let mark_coverage_offset = r.read_u16()? as usize;
            let base_coverage_offset = r.read_u16()? as usize;
            let class_count = r.read_u16()? as usize;
            let mark_array_offset = offset + r.read_u16()? as usize;
            let base_array_offset = offset + r.read_u16()? as usize;

            // MarkArray: (class, anchor offset) per mark
            let mut mr = table.slice_from(mark_array_offset)?;
            let mark_count = mr.read_u16()? as usize;
            let mut marks = Vec::with_capacity(mark_count);
            for _ in 0..mark_count {
                let class = mr.read_u16()?;
                let anchor_offset = mr.read_u16()? as usize;
                let anchor =
                    Anchor::parse(&mut table.slice_from(mark_array_offset + anchor_offset)?)?;
                marks.push((class, anchor));
            }

            // BaseArray/Mark2Array: per target, one anchor offset per class
            let mut br = table.slice_from(base_array_offset)?;
            let base_count = br.read_u16()? as usize;
            let mut bases = Vec::with_capacity(base_count);
            for _ in 0..base_count {
                let mut row = Vec::with_capacity(class_count);
                for _ in 0..class_count {
                    let anchor_offset = br.read_u16()? as usize;
                    if anchor_offset == 0 {
                        row.push(None);
                    } else {
                        row.push(Some(Anchor::parse(
                            &mut table.slice_from(base_array_offset + anchor_offset)?,
                        )?));
                    }
                }
                bases.push(row);
            }

            Ok(Some(GposSubtable::MarkAttach {
                mark_coverage: Coverage::parse(
                    &mut table.slice_from(offset + mark_coverage_offset)?,
                )?,
                base_coverage: Coverage::parse(
                    &mut table.slice_from(offset + base_coverage_offset)?,
                )?,
                marks,
                bases,
                to_mark: lookup_type == TYPE_MARK_TO_MARK,
            }))
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::common::{Feature, Script};

    fn gpos_with(lookups: Vec<GposLookup>) -> Gpos {
        Gpos {
            header: ScriptsAndFeatures {
                scripts: Vec::<Script>::new(),
                features: Vec::<Feature>::new(),
            },
            lookups,
            skipped: Vec::new(),
        }
    }

    fn kern_value(x_advance: i16) -> ValueRecord {
        ValueRecord {
            x_advance,
            ..Default::default()
        }
    }

    #[test]
    fn pair_glyphs_kerns_first_glyph() {
        let gpos = gpos_with(vec![GposLookup {
            lookup_type: TYPE_PAIR,
            subtables: vec![GposSubtable::PairGlyphs {
                coverage: Coverage::Glyphs(vec![1]),
                sets: vec![vec![(2, kern_value(-80), ValueRecord::default())]],
            }],
        }]);
        let glyphs = [1u16, 2];
        let advances = [500i32, 500];
        let mut adj = vec![Adjustment::default(); 2];
        gpos.apply_lookup(0, &glyphs, &advances, &mut adj);
        assert_eq!(adj[0].advance_dx, -80);
        assert_eq!(adj[1], Adjustment::default());
    }

    #[test]
    fn pair_classes_use_the_matrix() {
        let gpos = gpos_with(vec![GposLookup {
            lookup_type: TYPE_PAIR,
            subtables: vec![GposSubtable::PairClasses {
                coverage: Coverage::Glyphs(vec![1, 2]),
                class1: ClassDef::Array {
                    start: 1,
                    classes: vec![1, 1],
                },
                class2: ClassDef::Array {
                    start: 3,
                    classes: vec![1],
                },
                matrix: vec![
                    vec![(ValueRecord::default(), ValueRecord::default()); 2],
                    vec![
                        (ValueRecord::default(), ValueRecord::default()),
                        (kern_value(-60), ValueRecord::default()),
                    ],
                ],
            }],
        }]);
        let glyphs = [2u16, 3];
        let advances = [500i32, 500];
        let mut adj = vec![Adjustment::default(); 2];
        gpos.apply_lookup(0, &glyphs, &advances, &mut adj);
        assert_eq!(adj[0].advance_dx, -60);
    }

    #[test]
    fn single_adjustment_applies_per_glyph() {
        let gpos = gpos_with(vec![GposLookup {
            lookup_type: TYPE_SINGLE,
            subtables: vec![GposSubtable::Single {
                coverage: Coverage::Glyphs(vec![7]),
                values: vec![ValueRecord {
                    x_placement: 15,
                    y_placement: -3,
                    ..Default::default()
                }],
            }],
        }]);
        let glyphs = [7u16, 8, 7];
        let advances = [500i32; 3];
        let mut adj = vec![Adjustment::default(); 3];
        gpos.apply_lookup(0, &glyphs, &advances, &mut adj);
        assert_eq!(adj[0].dx, 15);
        assert_eq!(adj[1], Adjustment::default());
        assert_eq!(adj[2].dy, -3);
    }

    #[test]
    fn mark_attaches_to_preceding_base() {
        // base glyph 10 with anchor (300, 550); mark glyph 20 anchored at
        // (40, 0); the mark's pen already advanced 500 past the base.
        let gpos = gpos_with(vec![GposLookup {
            lookup_type: TYPE_MARK_TO_BASE,
            subtables: vec![GposSubtable::MarkAttach {
                mark_coverage: Coverage::Glyphs(vec![20]),
                base_coverage: Coverage::Glyphs(vec![10]),
                marks: vec![(0, Anchor { x: 40, y: 0 })],
                bases: vec![vec![Some(Anchor { x: 300, y: 550 })]],
                to_mark: false,
            }],
        }]);
        let glyphs = [10u16, 20];
        let advances = [500i32, 0];
        let mut adj = vec![Adjustment::default(); 2];
        gpos.apply_lookup(0, &glyphs, &advances, &mut adj);
        assert_eq!(adj[1].dx, 300 - 40 - 500);
        assert_eq!(adj[1].dy, 550);
    }

    #[test]
    fn mark_skips_other_marks_to_find_its_base() {
        let gpos = gpos_with(vec![GposLookup {
            lookup_type: TYPE_MARK_TO_BASE,
            subtables: vec![GposSubtable::MarkAttach {
                mark_coverage: Coverage::Glyphs(vec![20, 21]),
                base_coverage: Coverage::Glyphs(vec![10]),
                marks: vec![
                    (0, Anchor { x: 0, y: 0 }),
                    (0, Anchor { x: 0, y: 0 }),
                ],
                bases: vec![vec![Some(Anchor { x: 250, y: 600 })]],
                to_mark: false,
            }],
        }]);
        let glyphs = [10u16, 20, 21];
        let advances = [500i32, 0, 0];
        let mut adj = vec![Adjustment::default(); 3];
        gpos.apply_lookup(0, &glyphs, &advances, &mut adj);
        // the second mark measures back across the first mark to the base
        assert_eq!(adj[2].dx, 250 - 500);
        assert_eq!(adj[2].dy, 600);
    }
}
