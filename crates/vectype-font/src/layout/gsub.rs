// this_file: crates/vectype-font/src/layout/gsub.rs

//! `GSUB` — glyph substitution lookups: single, multiple, alternate,
//! ligature, chaining contextual, and extension dispatch.

use crate::error::{Result, Warning};
use crate::layout::common::{
    parse_layout_header, ClassDef, Coverage, LookupSkeleton, ScriptsAndFeatures,
};
use crate::reader::Reader;

const TYPE_SINGLE: u16 = 1;
const TYPE_MULTIPLE: u16 = 2;
const TYPE_ALTERNATE: u16 = 3;
const TYPE_LIGATURE: u16 = 4;
const TYPE_CHAINED: u16 = 6;
const TYPE_EXTENSION: u16 = 7;

/// Nested contextual lookups are bounded; fonts do not legitimately chain
/// deeper than this.
const MAX_NESTING: u32 = 8;

#[derive(Debug, Clone)]
pub struct Ligature {
    /// Tail glyphs following the coverage-matched first glyph.
    pub components: Vec<u16>,
    pub glyph: u16,
}

/// One chained-context rule; glyph ids for format 1, class values for
/// format 2. Backtrack is stored nearest-first.
#[derive(Debug, Clone)]
pub struct ChainRule {
    pub backtrack: Vec<u16>,
    pub input: Vec<u16>,
    pub lookahead: Vec<u16>,
    /// (sequence index, lookup index) records applied on a match.
    pub lookups: Vec<(u16, u16)>,
}

#[derive(Debug, Clone)]
pub enum GsubSubtable {
    SingleDelta {
        coverage: Coverage,
        delta: i16,
    },
    SingleMap {
        coverage: Coverage,
        substitutes: Vec<u16>,
    },
    Multiple {
        coverage: Coverage,
        sequences: Vec<Vec<u16>>,
    },
    Alternate {
        coverage: Coverage,
        alternates: Vec<Vec<u16>>,
    },
    Ligature {
        coverage: Coverage,
        /// Per coverage index, ligatures sorted longest tail first.
        sets: Vec<Vec<Ligature>>,
    },
    ChainedGlyphs {
        coverage: Coverage,
        rule_sets: Vec<Vec<ChainRule>>,
    },
    ChainedClasses {
        coverage: Coverage,
        backtrack_classes: ClassDef,
        input_classes: ClassDef,
        lookahead_classes: ClassDef,
        rule_sets: Vec<Vec<ChainRule>>,
    },
    ChainedCoverage {
        backtrack: Vec<Coverage>,
        input: Vec<Coverage>,
        lookahead: Vec<Coverage>,
        lookups: Vec<(u16, u16)>,
    },
}

#[derive(Debug, Clone)]
pub struct GsubLookup {
    pub lookup_type: u16,
    pub subtables: Vec<GsubSubtable>,
}

/// Parsed `GSUB` table.
#[derive(Debug, Clone)]
pub struct Gsub {
    pub header: ScriptsAndFeatures,
    lookups: Vec<GsubLookup>,
    skipped: Vec<Warning>,
}

impl Gsub {
    pub fn parse(data: &[u8]) -> Result<Gsub> {
        let table = Reader::new(data);
        let (header, skeletons) = parse_layout_header(&table)?;
        let mut lookups = Vec::with_capacity(skeletons.len());
        let mut skipped = Vec::new();
        for (index, skeleton) in skeletons.iter().enumerate() {
            lookups.push(parse_lookup(&table, skeleton, index as u16, &mut skipped)?);
        }
        Ok(Gsub {
            header,
            lookups,
            skipped,
        })
    }

    /// Warnings for lookups whose types are not implemented (5 and 8).
    pub fn skipped_lookups(&self) -> &[Warning] {
        &self.skipped
    }

    pub fn lookups(&self) -> &[GsubLookup] {
        &self.lookups
    }

    /// Apply one lookup across the glyph sequence. The sequence is walked
    /// left to right; at each position the lookup's subtables are tried in
    /// order and the first match substitutes.
    pub fn apply_lookup(&self, lookup_index: u16, glyphs: &mut Vec<u16>, alternate: usize) {
        let mut pos = 0;
        while pos < glyphs.len() {
            let step = self
                .apply_at(lookup_index, glyphs, pos, alternate, 0)
                .unwrap_or(0);
            pos += step.max(1);
        }
    }

    /// Try a lookup at one position. Returns the number of glyphs the
    /// substitution produced (to advance past), or `None` on no match.
    fn apply_at(
        &self,
        lookup_index: u16,
        glyphs: &mut Vec<u16>,
        pos: usize,
        alternate: usize,
        depth: u32,
    ) -> Option<usize> {
        if depth > MAX_NESTING {
            return None;
        }
        let lookup = self.lookups.get(lookup_index as usize)?;
        for subtable in &lookup.subtables {
            if let Some(step) = self.apply_subtable(subtable, glyphs, pos, alternate, depth) {
                log::debug!(
                    "GSUB lookup {lookup_index} (type {}) substituted at {pos}",
                    lookup.lookup_type
                );
                return Some(step);
            }
        }
        None
    }

    fn apply_subtable(
        &self,
        subtable: &GsubSubtable,
        glyphs: &mut Vec<u16>,
        pos: usize,
        alternate: usize,
        depth: u32,
    ) -> Option<usize> {
        let glyph = *glyphs.get(pos)?;
        match subtable {
            GsubSubtable::SingleDelta { coverage, delta } => {
                coverage.index(glyph)?;
                glyphs[pos] = (glyph as i32 + *delta as i32) as u16;
                Some(1)
            }
            GsubSubtable::SingleMap {
                coverage,
                substitutes,
            } => {
                let idx = coverage.index(glyph)? as usize;
                glyphs[pos] = *substitutes.get(idx)?;
                Some(1)
            }
            GsubSubtable::Multiple {
                coverage,
                sequences,
            } => {
                let idx = coverage.index(glyph)? as usize;
                let seq = sequences.get(idx)?;
                if seq.is_empty() {
                    return None;
                }
                glyphs.splice(pos..pos + 1, seq.iter().copied());
                Some(seq.len())
            }
            GsubSubtable::Alternate {
                coverage,
                alternates,
            } => {
                let idx = coverage.index(glyph)? as usize;
                let set = alternates.get(idx)?;
                glyphs[pos] = *set.get(alternate).or_else(|| set.first())?;
                Some(1)
            }
            GsubSubtable::Ligature { coverage, sets } => {
                let idx = coverage.index(glyph)? as usize;
                for lig in sets.get(idx)? {
                    let end = pos + 1 + lig.components.len();
                    if glyphs.len() >= end && glyphs[pos + 1..end] == lig.components[..] {
                        glyphs.splice(pos..end, std::iter::once(lig.glyph));
                        return Some(1);
                    }
                }
                None
            }
            GsubSubtable::ChainedGlyphs {
                coverage,
                rule_sets,
            } => {
                let idx = coverage.index(glyph)? as usize;
                let rules = rule_sets.get(idx)?;
                for rule in rules {
                    if chain_matches(glyphs, pos, rule, |g| g) {
                        return Some(self.apply_chain_records(glyphs, pos, rule, depth));
                    }
                }
                None
            }
            GsubSubtable::ChainedClasses {
                coverage,
                backtrack_classes,
                input_classes,
                lookahead_classes,
                rule_sets,
            } => {
                coverage.index(glyph)?;
                let class = input_classes.class(glyph) as usize;
                let rules = rule_sets.get(class)?;
                for rule in rules {
                    let matches = chain_region_matches(
                        glyphs,
                        pos,
                        rule,
                        |g| backtrack_classes.class(g),
                        |g| input_classes.class(g),
                        |g| lookahead_classes.class(g),
                    );
                    if matches {
                        return Some(self.apply_chain_records(glyphs, pos, rule, depth));
                    }
                }
                None
            }
            GsubSubtable::ChainedCoverage {
                backtrack,
                input,
                lookahead,
                lookups,
            } => {
                if pos < backtrack.len()
                    || pos + input.len() + lookahead.len() > glyphs.len()
                    || input.is_empty()
                {
                    return None;
                }
                let input_ok = input
                    .iter()
                    .enumerate()
                    .all(|(k, cov)| cov.contains(glyphs[pos + k]));
                // backtrack coverage 0 is the glyph immediately before pos
                let back_ok = backtrack
                    .iter()
                    .enumerate()
                    .all(|(k, cov)| cov.contains(glyphs[pos - 1 - k]));
                let ahead_ok = lookahead
                    .iter()
                    .enumerate()
                    .all(|(k, cov)| cov.contains(glyphs[pos + input.len() + k]));
                if !(input_ok && back_ok && ahead_ok) {
                    return None;
                }
                let rule = ChainRule {
                    backtrack: Vec::new(),
                    input: vec![0; input.len().saturating_sub(1)],
                    lookahead: Vec::new(),
                    lookups: lookups.clone(),
                };
                Some(self.apply_chain_records(glyphs, pos, &rule, depth))
            }
        }
    }

    /// Run a matched chain rule's nested lookup records. Returns how many
    /// glyphs the input region now spans (approximated by its rule length
    /// adjusted for any length change the nested lookups caused).
    fn apply_chain_records(
        &self,
        glyphs: &mut Vec<u16>,
        pos: usize,
        rule: &ChainRule,
        depth: u32,
    ) -> usize {
        let input_len = rule.input.len() + 1;
        let before = glyphs.len();
        for &(seq_index, lookup_index) in &rule.lookups {
            let at = pos + seq_index as usize;
            if at < glyphs.len() {
                self.apply_at(lookup_index, glyphs, at, 0, depth + 1);
            }
        }
        let delta = glyphs.len() as isize - before as isize;
        usize::try_from(input_len as isize + delta).unwrap_or(1).max(1)
    }
}

/// Format-1 chain match: rule values are glyph ids.
fn chain_matches(glyphs: &[u16], pos: usize, rule: &ChainRule, id: impl Fn(u16) -> u16) -> bool {
    chain_region_matches(glyphs, pos, rule, &id, &id, &id)
}

fn chain_region_matches(
    glyphs: &[u16],
    pos: usize,
    rule: &ChainRule,
    back_key: impl Fn(u16) -> u16,
    input_key: impl Fn(u16) -> u16,
    ahead_key: impl Fn(u16) -> u16,
) -> bool {
    let input_len = rule.input.len() + 1;
    if pos < rule.backtrack.len() || pos + input_len + rule.lookahead.len() > glyphs.len() {
        return false;
    }
    // rule.input starts at the second glyph; the first matched via coverage
    let input_ok = rule
        .input
        .iter()
        .enumerate()
        .all(|(k, &v)| input_key(glyphs[pos + 1 + k]) == v);
    let back_ok = rule
        .backtrack
        .iter()
        .enumerate()
        .all(|(k, &v)| back_key(glyphs[pos - 1 - k]) == v);
    let ahead_ok = rule
        .lookahead
        .iter()
        .enumerate()
        .all(|(k, &v)| ahead_key(glyphs[pos + input_len + k]) == v);
    input_ok && back_ok && ahead_ok
}

fn parse_lookup(
    table: &Reader,
    skeleton: &LookupSkeleton,
    index: u16,
    skipped: &mut Vec<Warning>,
) -> Result<GsubLookup> {
    let mut subtables = Vec::new();
    let mut effective_type = skeleton.lookup_type;
    for &offset in &skeleton.subtable_offsets {
        let (lookup_type, offset) = resolve_extension(table, skeleton.lookup_type, offset)?;
        effective_type = lookup_type;
        match parse_subtable(table, lookup_type, offset)? {
            Some(subtable) => subtables.push(subtable),
            None => {
                log::warn!("skipping unsupported GSUB lookup type {lookup_type}");
                skipped.push(Warning::UnsupportedLookup {
                    kind: "GSUB",
                    lookup_type,
                    lookup_index: index,
                });
            }
        }
    }
    Ok(GsubLookup {
        lookup_type: effective_type,
        subtables,
    })
}

/// Unwrap extension subtables (type 7) to the wrapped lookup type/offset.
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
) -> Result<Option<GsubSubtable>> {
    let mut r = table.slice_from(offset)?;
    match lookup_type {
        TYPE_SINGLE => {
            let format = r.read_u16()?;
            let coverage_offset = r.read_u16()? as usize;
            let coverage = Coverage::parse(&mut table.slice_from(offset + coverage_offset)?)?;
            if format == 1 {
                let delta = r.read_i16()?;
                Ok(Some(GsubSubtable::SingleDelta { coverage, delta }))
            } else {
                let count = r.read_u16()? as usize;
                Ok(Some(GsubSubtable::SingleMap {
                    coverage,
                    substitutes: r.read_u16_array(count)?,
                }))
            }
        }
        TYPE_MULTIPLE => {
            r.skip(2)?; // format 1
            let coverage_offset = r.read_u16()? as usize;
            let count = r.read_u16()? as usize;
            let mut sequences = Vec::with_capacity(count);
            for _ in 0..count {
                let seq_offset = offset + r.read_u16()? as usize;
                let mut sr = table.slice_from(seq_offset)?;
                let len = sr.read_u16()? as usize;
                sequences.push(sr.read_u16_array(len)?);
            }
            Ok(Some(GsubSubtable::Multiple {
                coverage: Coverage::parse(&mut table.slice_from(offset + coverage_offset)?)?,
                sequences,
            }))
        }
        TYPE_ALTERNATE => {
            r.skip(2)?; // format 1
            let coverage_offset = r.read_u16()? as usize;
            let count = r.read_u16()? as usize;
            let mut alternates = Vec::with_capacity(count);
            for _ in 0..count {
                let set_offset = offset + r.read_u16()? as usize;
                let mut sr = table.slice_from(set_offset)?;
                let len = sr.read_u16()? as usize;
                alternates.push(sr.read_u16_array(len)?);
            }
            Ok(Some(GsubSubtable::Alternate {
                coverage: Coverage::parse(&mut table.slice_from(offset + coverage_offset)?)?,
                alternates,
            }))
        }
        TYPE_LIGATURE => {
            r.skip(2)?; // format 1
            let coverage_offset = r.read_u16()? as usize;
            let set_count = r.read_u16()? as usize;
            let mut sets = Vec::with_capacity(set_count);
            for _ in 0..set_count {
                let set_offset = offset + r.read_u16()? as usize;
                let mut sr = table.slice_from(set_offset)?;
                let lig_count = sr.read_u16()? as usize;
                let lig_offsets = sr.read_u16_array(lig_count)?;
                let mut ligatures = Vec::with_capacity(lig_count);
                for lig_offset in lig_offsets {
                    let mut lr = table.slice_from(set_offset + lig_offset as usize)?;
                    let glyph = lr.read_u16()?;
                    let component_count = lr.read_u16()? as usize;
                    ligatures.push(Ligature {
                        components: lr.read_u16_array(component_count.saturating_sub(1))?,
                        glyph,
                    });
                }
                // Longest ligatures must win over shared prefixes.
                ligatures.sort_by(|a, b| b.components.len().cmp(&a.components.len()));
                sets.push(ligatures);
            }
            Ok(Some(GsubSubtable::Ligature {
                coverage: Coverage::parse(&mut table.slice_from(offset + coverage_offset)?)?,
                sets,
            }))
        }
        TYPE_CHAINED => parse_chained(table, offset).map(Some),
        _ => Ok(None),
    }
}

fn parse_chained(table: &Reader, offset: usize) -> Result<GsubSubtable> {
    let mut r = table.slice_from(offset)?;
    let format = r.read_u16()?;
    match format {
        1 => {
            let coverage_offset = r.read_u16()? as usize;
            let set_count = r.read_u16()? as usize;
            let mut rule_sets = Vec::with_capacity(set_count);
            for _ in 0..set_count {
                let set_offset = offset + r.read_u16()? as usize;
                rule_sets.push(parse_chain_rule_set(table, set_offset)?);
            }
            Ok(GsubSubtable::ChainedGlyphs {
                coverage: Coverage::parse(&mut table.slice_from(offset + coverage_offset)?)?,
                rule_sets,
            })
        }
        2 => {
            let coverage_offset = r.read_u16()? as usize;
            let backtrack_offset = r.read_u16()? as usize;
            let input_offset = r.read_u16()? as usize;
            let lookahead_offset = r.read_u16()? as usize;
            let set_count = r.read_u16()? as usize;
            let mut rule_sets = Vec::with_capacity(set_count);
            for _ in 0..set_count {
                let set_offset = r.read_u16()? as usize;
                if set_offset == 0 {
                    rule_sets.push(Vec::new());
                } else {
                    rule_sets.push(parse_chain_rule_set(table, offset + set_offset)?);
                }
            }
            Ok(GsubSubtable::ChainedClasses {
                coverage: Coverage::parse(&mut table.slice_from(offset + coverage_offset)?)?,
                backtrack_classes: ClassDef::parse(
                    &mut table.slice_from(offset + backtrack_offset)?,
                )?,
                input_classes: ClassDef::parse(&mut table.slice_from(offset + input_offset)?)?,
                lookahead_classes: ClassDef::parse(
                    &mut table.slice_from(offset + lookahead_offset)?,
                )?,
                rule_sets,
            })
        }
        _ => {
            let backtrack_count = r.read_u16()? as usize;
            let backtrack_offsets = r.read_u16_array(backtrack_count)?;
            let input_count = r.read_u16()? as usize;
            let input_offsets = r.read_u16_array(input_count)?;
            let lookahead_count = r.read_u16()? as usize;
            let lookahead_offsets = r.read_u16_array(lookahead_count)?;
            let record_count = r.read_u16()? as usize;
            let mut lookups = Vec::with_capacity(record_count);
            for _ in 0..record_count {
                lookups.push((r.read_u16()?, r.read_u16()?));
            }
            let parse_coverages = |offsets: Vec<u16>| -> Result<Vec<Coverage>> {
                offsets
                    .into_iter()
                    .map(|o| Coverage::parse(&mut table.slice_from(offset + o as usize)?))
                    .collect()
            };
            Ok(GsubSubtable::ChainedCoverage {
                backtrack: parse_coverages(backtrack_offsets)?,
                input: parse_coverages(input_offsets)?,
                lookahead: parse_coverages(lookahead_offsets)?,
                lookups,
            })
        }
    }
}

fn parse_chain_rule_set(table: &Reader, set_offset: usize) -> Result<Vec<ChainRule>> {
    let mut sr = table.slice_from(set_offset)?;
    let rule_count = sr.read_u16()? as usize;
    let rule_offsets = sr.read_u16_array(rule_count)?;
    let mut rules = Vec::with_capacity(rule_count);
    for rule_offset in rule_offsets {
        let mut rr = table.slice_from(set_offset + rule_offset as usize)?;
        let backtrack_count = rr.read_u16()? as usize;
        let backtrack = rr.read_u16_array(backtrack_count)?;
        let input_count = rr.read_u16()? as usize;
        let input = rr.read_u16_array(input_count.saturating_sub(1))?;
        let lookahead_count = rr.read_u16()? as usize;
        let lookahead = rr.read_u16_array(lookahead_count)?;
        let record_count = rr.read_u16()? as usize;
        let mut lookups = Vec::with_capacity(record_count);
        for _ in 0..record_count {
            lookups.push((rr.read_u16()?, rr.read_u16()?));
        }
        rules.push(ChainRule {
            backtrack,
            input,
            lookahead,
            lookups,
        });
    }
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::common::{Feature, Script};

    fn gsub_with(lookups: Vec<GsubLookup>) -> Gsub {
        Gsub {
            header: ScriptsAndFeatures {
                scripts: Vec::<Script>::new(),
                features: Vec::<Feature>::new(),
            },
            lookups,
            skipped: Vec::new(),
        }
    }

    fn single_lookup(subtable: GsubSubtable, lookup_type: u16) -> GsubLookup {
        GsubLookup {
            lookup_type,
            subtables: vec![subtable],
        }
    }

    #[test]
    fn single_delta_shifts_covered_glyphs() {
        let gsub = gsub_with(vec![single_lookup(
            GsubSubtable::SingleDelta {
                coverage: Coverage::Glyphs(vec![10, 11]),
                delta: 100,
            },
            TYPE_SINGLE,
        )]);
        let mut glyphs = vec![9, 10, 11, 12];
        gsub.apply_lookup(0, &mut glyphs, 0);
        assert_eq!(glyphs, vec![9, 110, 111, 12]);
    }

    #[test]
    fn ligature_replaces_longest_match_first() {
        let gsub = gsub_with(vec![single_lookup(
            GsubSubtable::Ligature {
                coverage: Coverage::Glyphs(vec![1]),
                sets: vec![vec![
                    Ligature {
                        components: vec![2, 3],
                        glyph: 90,
                    },
                    Ligature {
                        components: vec![2],
                        glyph: 91,
                    },
                ]],
            },
            TYPE_LIGATURE,
        )]);

        let mut glyphs = vec![1, 2, 3];
        gsub.apply_lookup(0, &mut glyphs, 0);
        assert_eq!(glyphs, vec![90], "three-glyph ligature wins");

        let mut glyphs = vec![1, 2, 4];
        gsub.apply_lookup(0, &mut glyphs, 0);
        assert_eq!(glyphs, vec![91, 4], "falls back to the shorter tail");
    }

    #[test]
    fn multiple_expands_one_to_many() {
        let gsub = gsub_with(vec![single_lookup(
            GsubSubtable::Multiple {
                coverage: Coverage::Glyphs(vec![7]),
                sequences: vec![vec![70, 71]],
            },
            TYPE_MULTIPLE,
        )]);
        let mut glyphs = vec![6, 7, 8];
        gsub.apply_lookup(0, &mut glyphs, 0);
        assert_eq!(glyphs, vec![6, 70, 71, 8]);
    }

    #[test]
    fn alternate_uses_requested_index_with_fallback() {
        let gsub = gsub_with(vec![single_lookup(
            GsubSubtable::Alternate {
                coverage: Coverage::Glyphs(vec![5]),
                alternates: vec![vec![50, 51]],
            },
            TYPE_ALTERNATE,
        )]);
        let mut glyphs = vec![5];
        gsub.apply_lookup(0, &mut glyphs, 1);
        assert_eq!(glyphs, vec![51]);

        let mut glyphs = vec![5];
        gsub.apply_lookup(0, &mut glyphs, 9);
        assert_eq!(glyphs, vec![50], "out-of-range choice falls back to 0");
    }

    #[test]
    fn chained_coverage_triggers_nested_lookup() {
        // context: [A=1] [B=2] [C=3]; replace B with 20 when between A and C
        let gsub = gsub_with(vec![
            single_lookup(
                GsubSubtable::ChainedCoverage {
                    backtrack: vec![Coverage::Glyphs(vec![1])],
                    input: vec![Coverage::Glyphs(vec![2])],
                    lookahead: vec![Coverage::Glyphs(vec![3])],
                    lookups: vec![(0, 1)],
                },
                TYPE_CHAINED,
            ),
            single_lookup(
                GsubSubtable::SingleMap {
                    coverage: Coverage::Glyphs(vec![2]),
                    substitutes: vec![20],
                },
                TYPE_SINGLE,
            ),
        ]);
        let mut glyphs = vec![1, 2, 3];
        gsub.apply_lookup(0, &mut glyphs, 0);
        assert_eq!(glyphs, vec![1, 20, 3]);

        // no backtrack match, no substitution
        let mut glyphs = vec![9, 2, 3];
        gsub.apply_lookup(0, &mut glyphs, 0);
        assert_eq!(glyphs, vec![9, 2, 3]);
    }

    #[test]
    fn chained_class_rule_matches_by_class() {
        let classes = ClassDef::Array {
            start: 1,
            classes: vec![1, 1, 2],
        };
        let gsub = gsub_with(vec![
            single_lookup(
                GsubSubtable::ChainedClasses {
                    coverage: Coverage::Glyphs(vec![1, 2]),
                    backtrack_classes: ClassDef::Ranges(Vec::new()),
                    input_classes: classes.clone(),
                    lookahead_classes: classes,
                    // class-1 glyph followed by a class-2 glyph
                    rule_sets: vec![
                        Vec::new(),
                        vec![ChainRule {
                            backtrack: Vec::new(),
                            input: Vec::new(),
                            lookahead: vec![2],
                            lookups: vec![(0, 1)],
                        }],
                    ],
                },
                TYPE_CHAINED,
            ),
            single_lookup(
                GsubSubtable::SingleDelta {
                    coverage: Coverage::Glyphs(vec![1, 2]),
                    delta: 10,
                },
                TYPE_SINGLE,
            ),
        ]);
        let mut glyphs = vec![2, 3];
        gsub.apply_lookup(0, &mut glyphs, 0);
        assert_eq!(glyphs, vec![12, 3]);
    }
}
