// this_file: crates/vectype-font/src/layout/common.rs

//! Structures shared by `GSUB` and `GPOS`: Coverage and ClassDef indexing
//! plus the ScriptList/FeatureList/LookupList header all layout tables use.

use crate::error::Result;
use crate::reader::Reader;
use crate::tag::Tag;

pub const TAG_DFLT: Tag = Tag::new(b"DFLT");
pub const TAG_LATN: Tag = Tag::new(b"latn");

/// Coverage table: which glyphs participate in a subtable, and at which
/// index.
#[derive(Debug, Clone)]
pub enum Coverage {
    /// Format 1: explicit glyph list.
    Glyphs(Vec<u16>),
    /// Format 2: ranges of (start, end, startCoverageIndex).
    Ranges(Vec<(u16, u16, u16)>),
}

impl Coverage {
    pub fn parse(r: &mut Reader) -> Result<Coverage> {
        let format = r.read_u16()?;
        match format {
            1 => {
                let count = r.read_u16()? as usize;
                Ok(Coverage::Glyphs(r.read_u16_array(count)?))
            }
            2 => {
                let count = r.read_u16()? as usize;
                let mut ranges = Vec::with_capacity(count);
                for _ in 0..count {
                    ranges.push((r.read_u16()?, r.read_u16()?, r.read_u16()?));
                }
                Ok(Coverage::Ranges(ranges))
            }
            _ => Err(crate::error::FontError::UnsupportedFormat(
                "coverage table format",
            )),
        }
    }

    /// Coverage index of a glyph, `None` when the glyph is not covered.
    pub fn index(&self, glyph: u16) -> Option<u16> {
        match self {
            Coverage::Glyphs(glyphs) => glyphs
                .iter()
                .position(|&g| g == glyph)
                .map(|i| i as u16),
            Coverage::Ranges(ranges) => ranges
                .iter()
                .find(|&&(start, end, _)| start <= glyph && glyph <= end)
                .map(|&(start, _, base)| base + (glyph - start)),
        }
    }

    pub fn contains(&self, glyph: u16) -> bool {
        self.index(glyph).is_some()
    }
}

/// ClassDef table: glyph id to class value, defaulting to class 0.
#[derive(Debug, Clone)]
pub enum ClassDef {
    /// Format 1: consecutive values from a start glyph.
    Array { start: u16, classes: Vec<u16> },
    /// Format 2: ranges of (start, end, class).
    Ranges(Vec<(u16, u16, u16)>),
}

impl ClassDef {
    pub fn parse(r: &mut Reader) -> Result<ClassDef> {
        let format = r.read_u16()?;
        match format {
            1 => {
                let start = r.read_u16()?;
                let count = r.read_u16()? as usize;
                Ok(ClassDef::Array {
                    start,
                    classes: r.read_u16_array(count)?,
                })
            }
            2 => {
                let count = r.read_u16()? as usize;
                let mut ranges = Vec::with_capacity(count);
                for _ in 0..count {
                    ranges.push((r.read_u16()?, r.read_u16()?, r.read_u16()?));
                }
                Ok(ClassDef::Ranges(ranges))
            }
            _ => Err(crate::error::FontError::UnsupportedFormat(
                "class definition format",
            )),
        }
    }

    pub fn class(&self, glyph: u16) -> u16 {
        match self {
            ClassDef::Array { start, classes } => glyph
                .checked_sub(*start)
                .and_then(|rel| classes.get(rel as usize))
                .copied()
                .unwrap_or(0),
            ClassDef::Ranges(ranges) => ranges
                .iter()
                .find(|&&(start, end, _)| start <= glyph && glyph <= end)
                .map(|&(_, _, class)| class)
                .unwrap_or(0),
        }
    }
}

/// A language system: the feature indices active for one script/language.
#[derive(Debug, Clone)]
pub struct LangSys {
    pub required_feature: Option<u16>,
    pub feature_indices: Vec<u16>,
}

/// One script record with its default and tagged language systems.
#[derive(Debug, Clone)]
pub struct Script {
    pub tag: Tag,
    pub default_lang_sys: Option<LangSys>,
    pub lang_sys: Vec<(Tag, LangSys)>,
}

/// One feature record: a tag plus the lookups it activates.
#[derive(Debug, Clone)]
pub struct Feature {
    pub tag: Tag,
    pub lookup_indices: Vec<u16>,
}

/// The ScriptList/FeatureList half of a layout table header.
#[derive(Debug, Clone)]
pub struct ScriptsAndFeatures {
    pub scripts: Vec<Script>,
    pub features: Vec<Feature>,
}

/// Skeleton of one lookup before engine-specific subtable parsing:
/// `(lookup_type, lookup_flag, absolute subtable offsets)`.
#[derive(Debug, Clone)]
pub struct LookupSkeleton {
    pub lookup_type: u16,
    pub flag: u16,
    pub subtable_offsets: Vec<usize>,
}

const USE_MARK_FILTERING_SET: u16 = 0x0010;

/// Parse the common layout header. Returns script/feature lists plus the
/// lookup skeletons for the caller to flesh out.
pub fn parse_layout_header(
    table: &Reader,
) -> Result<(ScriptsAndFeatures, Vec<LookupSkeleton>)> {
    let mut r = *table;
    r.skip(2)?; // major version
    let minor = r.read_u16()?;
    let script_offset = r.read_u16()? as usize;
    let feature_offset = r.read_u16()? as usize;
    let lookup_offset = r.read_u16()? as usize;
    if minor > 0 {
        r.skip(4)?; // featureVariationsOffset
    }

    // ScriptList
    let mut s = table.slice_from(script_offset)?;
    let script_count = s.read_u16()?;
    let mut scripts = Vec::with_capacity(script_count as usize);
    for _ in 0..script_count {
        let tag = s.read_tag()?;
        let offset = s.read_u16()? as usize;
        let mut sr = table.slice_from(script_offset + offset)?;
        let default_offset = sr.read_u16()? as usize;
        let lang_count = sr.read_u16()?;
        let default_lang_sys = if default_offset != 0 {
            Some(parse_lang_sys(
                &mut table.slice_from(script_offset + offset + default_offset)?,
            )?)
        } else {
            None
        };
        let mut lang_sys = Vec::with_capacity(lang_count as usize);
        for _ in 0..lang_count {
            let lang_tag = sr.read_tag()?;
            let lang_offset = sr.read_u16()? as usize;
            lang_sys.push((
                lang_tag,
                parse_lang_sys(&mut table.slice_from(script_offset + offset + lang_offset)?)?,
            ));
        }
        scripts.push(Script {
            tag,
            default_lang_sys,
            lang_sys,
        });
    }

    // FeatureList
    let mut f = table.slice_from(feature_offset)?;
    let feature_count = f.read_u16()?;
    let mut features = Vec::with_capacity(feature_count as usize);
    for _ in 0..feature_count {
        let tag = f.read_tag()?;
        let offset = f.read_u16()? as usize;
        let mut fr = table.slice_from(feature_offset + offset)?;
        fr.skip(2)?; // featureParamsOffset
        let lookup_count = fr.read_u16()? as usize;
        features.push(Feature {
            tag,
            lookup_indices: fr.read_u16_array(lookup_count)?,
        });
    }

    // LookupList
    let mut l = table.slice_from(lookup_offset)?;
    let lookup_count = l.read_u16()?;
    let mut lookups = Vec::with_capacity(lookup_count as usize);
    for _ in 0..lookup_count {
        let offset = lookup_offset + l.read_u16()? as usize;
        let mut lr = table.slice_from(offset)?;
        let lookup_type = lr.read_u16()?;
        let flag = lr.read_u16()?;
        let subtable_count = lr.read_u16()? as usize;
        let mut subtable_offsets = Vec::with_capacity(subtable_count);
        for _ in 0..subtable_count {
            subtable_offsets.push(offset + lr.read_u16()? as usize);
        }
        if flag & USE_MARK_FILTERING_SET != 0 {
            lr.skip(2)?;
        }
        lookups.push(LookupSkeleton {
            lookup_type,
            flag,
            subtable_offsets,
        });
    }

    Ok((ScriptsAndFeatures { scripts, features }, lookups))
}

fn parse_lang_sys(r: &mut Reader) -> Result<LangSys> {
    r.skip(2)?; // lookupOrderOffset (reserved)
    let required = r.read_u16()?;
    let count = r.read_u16()? as usize;
    Ok(LangSys {
        required_feature: (required != 0xffff).then_some(required),
        feature_indices: r.read_u16_array(count)?,
    })
}

impl ScriptsAndFeatures {
    /// Select a language system, preferring `DFLT` then `latn`, and the
    /// default language slot within the script.
    pub fn lang_sys(&self, script: Option<Tag>, lang: Option<Tag>) -> Option<&LangSys> {
        let script = [script, Some(TAG_DFLT), Some(TAG_LATN)]
            .into_iter()
            .flatten()
            .find_map(|tag| self.scripts.iter().find(|s| s.tag == tag))
            .or_else(|| self.scripts.first())?;
        if let Some(tag) = lang {
            if let Some((_, ls)) = script.lang_sys.iter().find(|(t, _)| *t == tag) {
                return Some(ls);
            }
        }
        script
            .default_lang_sys
            .as_ref()
            .or_else(|| script.lang_sys.first().map(|(_, ls)| ls))
    }

    /// Lookup indices activated by the enabled features, in LookupList
    /// order, deduplicated. Required features are always included.
    pub fn lookup_indices(&self, enabled: impl Fn(Tag) -> bool) -> Vec<u16> {
        let Some(lang_sys) = self.lang_sys(None, None) else {
            return Vec::new();
        };
        let mut indices = Vec::new();
        if let Some(required) = lang_sys.required_feature {
            if let Some(feature) = self.features.get(required as usize) {
                indices.extend_from_slice(&feature.lookup_indices);
            }
        }
        for &idx in &lang_sys.feature_indices {
            if let Some(feature) = self.features.get(idx as usize) {
                if enabled(feature.tag) {
                    indices.extend_from_slice(&feature.lookup_indices);
                }
            }
        }
        indices.sort_unstable();
        indices.dedup();
        indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coverage_format1_indexes_by_position() {
        let cov = Coverage::Glyphs(vec![5, 9, 12]);
        assert_eq!(cov.index(9), Some(1));
        assert_eq!(cov.index(6), None);
    }

    #[test]
    fn coverage_format2_indexes_through_ranges() {
        let cov = Coverage::Ranges(vec![(10, 14, 0), (20, 22, 5)]);
        assert_eq!(cov.index(10), Some(0));
        assert_eq!(cov.index(14), Some(4));
        assert_eq!(cov.index(21), Some(6));
        assert_eq!(cov.index(15), None);
    }

    #[test]
    fn class_def_defaults_to_zero() {
        let classes = ClassDef::Array {
            start: 10,
            classes: vec![1, 2, 3],
        };
        assert_eq!(classes.class(11), 2);
        assert_eq!(classes.class(9), 0);
        assert_eq!(classes.class(100), 0);

        let ranges = ClassDef::Ranges(vec![(5, 8, 7)]);
        assert_eq!(ranges.class(6), 7);
        assert_eq!(ranges.class(9), 0);
    }
}
