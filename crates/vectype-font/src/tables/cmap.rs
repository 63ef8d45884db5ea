// this_file: crates/vectype-font/src/tables/cmap.rs

//! `cmap` — code point to glyph id mapping.
//!
//! Formats 0, 4, 6, and 12 are decoded. The active subtable is selected by
//! preference: format 12 on Windows/full-Unicode, then format 4 on
//! Windows/BMP, then format 6, then format 0; `select` can override that.

use std::collections::HashMap;

use once_cell::sync::OnceCell;

use crate::error::{FontError, Result};
use crate::reader::Reader;

const PLATFORM_WINDOWS: u16 = 3;
const ENCODING_WIN_BMP: u16 = 1;
const ENCODING_WIN_FULL: u16 = 10;

#[derive(Debug, Clone)]
enum SubtableData {
    /// Format 0: a dense byte-indexed array.
    ByteTable(Vec<u8>),
    /// Format 4: BMP segments. Kept in table form, looked up by binary
    /// search over the segment end codes.
    Segments {
        end_codes: Vec<u16>,
        start_codes: Vec<u16>,
        id_deltas: Vec<i16>,
        id_range_offsets: Vec<u16>,
        glyph_ids: Vec<u16>,
    },
    /// Format 6: a dense range starting at `first_code`.
    Trimmed { first_code: u16, glyph_ids: Vec<u16> },
    /// Format 12: sequential groups of (start, end, start glyph).
    Groups(Vec<(u32, u32, u32)>),
}

/// One decoded cmap subtable.
#[derive(Debug, Clone)]
pub struct CmapSubtable {
    pub platform: u16,
    pub encoding: u16,
    pub format: u16,
    data: SubtableData,
}

impl CmapSubtable {
    /// Glyph id for a code point; 0 (`.notdef`) when unmapped.
    pub fn glyph_id(&self, cp: u32) -> u16 {
        match &self.data {
            SubtableData::ByteTable(table) => {
                if cp < table.len() as u32 {
                    table[cp as usize] as u16
                } else {
                    0
                }
            }
            SubtableData::Segments {
                end_codes,
                start_codes,
                id_deltas,
                id_range_offsets,
                glyph_ids,
            } => {
                if cp > 0xffff {
                    return 0;
                }
                let cp = cp as u16;
                let seg = match end_codes.binary_search(&cp) {
                    Ok(i) => i,
                    Err(i) => i,
                };
                if seg >= end_codes.len() || cp < start_codes[seg] {
                    return 0;
                }
                if id_range_offsets[seg] == 0 {
                    (cp as i32 + id_deltas[seg] as i32) as u16
                } else {
                    // idRangeOffset counts bytes from its own slot into the
                    // glyph id array; rebase it onto our parsed vector. An
                    // offset pointing before the array is malformed and maps
                    // to .notdef rather than faulting.
                    let idx = (id_range_offsets[seg] as usize / 2
                        + (cp - start_codes[seg]) as usize)
                        .checked_sub(end_codes.len() - seg);
                    match idx.and_then(|i| glyph_ids.get(i)) {
                        Some(0) | None => 0,
                        Some(&gid) => (gid as i32 + id_deltas[seg] as i32) as u16,
                    }
                }
            }
            SubtableData::Trimmed {
                first_code,
                glyph_ids,
            } => {
                let Some(rel) = cp.checked_sub(*first_code as u32) else {
                    return 0;
                };
                glyph_ids.get(rel as usize).copied().unwrap_or(0)
            }
            SubtableData::Groups(groups) => {
                let group = match groups.binary_search_by(|&(_, end, _)| end.cmp(&cp)) {
                    Ok(i) => i,
                    Err(i) => i,
                };
                match groups.get(group) {
                    Some(&(start, _, start_gid)) if cp >= start => {
                        (start_gid + (cp - start)) as u16
                    }
                    _ => 0,
                }
            }
        }
    }

    /// All (code point, glyph id) pairs this subtable maps.
    fn mappings(&self) -> Vec<(u32, u16)> {
        let mut out = Vec::new();
        match &self.data {
            SubtableData::ByteTable(table) => {
                for (cp, &gid) in table.iter().enumerate() {
                    if gid != 0 {
                        out.push((cp as u32, gid as u16));
                    }
                }
            }
            SubtableData::Segments {
                end_codes,
                start_codes,
                ..
            } => {
                for (start, end) in start_codes.iter().zip(end_codes) {
                    for cp in *start..=*end {
                        let gid = self.glyph_id(cp as u32);
                        if gid != 0 {
                            out.push((cp as u32, gid));
                        }
                        if cp == u16::MAX {
                            break;
                        }
                    }
                }
            }
            SubtableData::Trimmed {
                first_code,
                glyph_ids,
            } => {
                for (i, &gid) in glyph_ids.iter().enumerate() {
                    if gid != 0 {
                        out.push((*first_code as u32 + i as u32, gid));
                    }
                }
            }
            SubtableData::Groups(groups) => {
                for &(start, end, start_gid) in groups {
                    for cp in start..=end {
                        out.push((cp, (start_gid + (cp - start)) as u16));
                    }
                }
            }
        }
        out
    }
}

/// The character map: every supported subtable plus the active selection.
#[derive(Debug, Clone)]
pub struct CharMap {
    subtables: Vec<CmapSubtable>,
    selected: usize,
    reverse: OnceCell<HashMap<u16, Vec<char>>>,
}

impl CharMap {
    pub fn parse(data: &[u8]) -> Result<CharMap> {
        let table = Reader::new(data);
        let mut r = table;
        r.skip(2)?; // version
        let num_records = r.read_u16()?;

        let mut subtables = Vec::new();
        for _ in 0..num_records {
            let platform = r.read_u16()?;
            let encoding = r.read_u16()?;
            let offset = r.read_u32()? as usize;
            let mut sub = table.slice_from(offset)?;
            let format = sub.read_u16()?;
            let parsed = match format {
                0 => Some(parse_format0(&mut sub)?),
                4 => Some(parse_format4(&mut sub)?),
                6 => Some(parse_format6(&mut sub)?),
                12 => Some(parse_format12(&mut sub)?),
                _ => None,
            };
            if let Some(data) = parsed {
                subtables.push(CmapSubtable {
                    platform,
                    encoding,
                    format,
                    data,
                });
            }
        }

        if subtables.is_empty() {
            return Err(FontError::BadCmapSubtable);
        }
        let selected = best_subtable(&subtables);
        Ok(CharMap {
            subtables,
            selected,
            reverse: OnceCell::new(),
        })
    }

    /// All decoded subtables, for inspection.
    pub fn subtables(&self) -> &[CmapSubtable] {
        &self.subtables
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Override the preference-order selection.
    pub fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.subtables.len() {
            return Err(FontError::BadCmapSubtable);
        }
        self.selected = index;
        self.reverse = OnceCell::new();
        Ok(())
    }

    /// Glyph id for a code point via the active subtable; 0 when unmapped.
    pub fn glyph_id(&self, cp: u32) -> u16 {
        self.subtables[self.selected].glyph_id(cp)
    }

    /// Reverse lookup: every character the active subtable maps to `gid`.
    pub fn codepoints_for(&self, gid: u16) -> &[char] {
        let reverse = self.reverse.get_or_init(|| {
            let mut map: HashMap<u16, Vec<char>> = HashMap::new();
            for (cp, gid) in self.subtables[self.selected].mappings() {
                if let Some(c) = char::from_u32(cp) {
                    map.entry(gid).or_default().push(c);
                }
            }
            for chars in map.values_mut() {
                chars.sort_unstable();
            }
            map
        });
        reverse.get(&gid).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Rank subtables per the preference order; highest score wins, earlier
/// records break ties.
fn best_subtable(subtables: &[CmapSubtable]) -> usize {
    let score = |s: &CmapSubtable| -> u32 {
        let windows = s.platform == PLATFORM_WINDOWS;
        match s.format {
            12 if windows && s.encoding == ENCODING_WIN_FULL => 7,
            12 => 6,
            4 if windows && s.encoding == ENCODING_WIN_BMP => 5,
            4 => 4,
            6 => 3,
            0 => 2,
            _ => 0,
        }
    };
    subtables
        .iter()
        .enumerate()
        .max_by_key(|(i, s)| (score(s), std::cmp::Reverse(*i)))
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn parse_format0(r: &mut Reader) -> Result<SubtableData> {
    r.skip(4)?; // length, language
    Ok(SubtableData::ByteTable(r.take(256)?.to_vec()))
}

fn parse_format4(r: &mut Reader) -> Result<SubtableData> {
    let length = r.read_u16()? as usize;
    r.skip(2)?; // language
    let seg_count = (r.read_u16()? / 2) as usize;
    r.skip(6)?; // searchRange, entrySelector, rangeShift
    let end_codes = r.read_u16_array(seg_count)?;
    r.skip(2)?; // reserved pad
    let start_codes = r.read_u16_array(seg_count)?;
    let id_deltas: Vec<i16> = r
        .read_u16_array(seg_count)?
        .into_iter()
        .map(|v| v as i16)
        .collect();
    let id_range_offsets = r.read_u16_array(seg_count)?;
    // The glyph id array fills whatever remains of the declared length.
    let remaining = length.saturating_sub(r.pos()) / 2;
    let glyph_ids = r.read_u16_array(remaining.min(r.remaining() / 2))?;
    Ok(SubtableData::Segments {
        end_codes,
        start_codes,
        id_deltas,
        id_range_offsets,
        glyph_ids,
    })
}

fn parse_format6(r: &mut Reader) -> Result<SubtableData> {
    r.skip(4)?; // length, language
    let first_code = r.read_u16()?;
    let entry_count = r.read_u16()? as usize;
    let glyph_ids = r.read_u16_array(entry_count)?;
    Ok(SubtableData::Trimmed {
        first_code,
        glyph_ids,
    })
}

fn parse_format12(r: &mut Reader) -> Result<SubtableData> {
    r.skip(2)?; // reserved
    r.skip(8)?; // length, language
    let n_groups = r.read_u32()? as usize;
    let mut groups = Vec::with_capacity(n_groups);
    for _ in 0..n_groups {
        let start = r.read_u32()?;
        let end = r.read_u32()?;
        let start_gid = r.read_u32()?;
        groups.push((start, end, start_gid));
    }
    Ok(SubtableData::Groups(groups))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Builders mirror the on-disk layout so parsing is exercised end to end.
    fn format4_subtable(segments: &[(u16, u16, i16)]) -> Vec<u8> {
        let seg_count = segments.len() + 1; // plus the required 0xffff terminator
        let mut out = Vec::new();
        out.extend_from_slice(&4u16.to_be_bytes());
        let length = 16 + 8 * seg_count;
        out.extend_from_slice(&(length as u16).to_be_bytes());
        out.extend_from_slice(&0u16.to_be_bytes()); // language
        out.extend_from_slice(&((seg_count * 2) as u16).to_be_bytes());
        out.extend_from_slice(&[0u8; 6]);
        for &(_, end, _) in segments {
            out.extend_from_slice(&end.to_be_bytes());
        }
        out.extend_from_slice(&0xffffu16.to_be_bytes());
        out.extend_from_slice(&0u16.to_be_bytes()); // pad
        for &(start, _, _) in segments {
            out.extend_from_slice(&start.to_be_bytes());
        }
        out.extend_from_slice(&0xffffu16.to_be_bytes());
        for &(_, _, delta) in segments {
            out.extend_from_slice(&delta.to_be_bytes());
        }
        out.extend_from_slice(&1i16.to_be_bytes()); // terminator delta
        for _ in 0..seg_count {
            out.extend_from_slice(&0u16.to_be_bytes()); // no range offsets
        }
        out
    }

    // One segment ['a'..='c'] resolved through the glyph id array, plus
    // the 0xffff terminator. `range_offset` = 4 points the first segment
    // at glyphIdArray[0]; smaller values land before the array.
    fn format4_range_offset_subtable(range_offset: u16) -> Vec<u8> {
        let glyph_array = [10u16, 0, 30];
        let mut out = Vec::new();
        out.extend_from_slice(&4u16.to_be_bytes());
        let length = 16 + 8 * 2 + 2 * glyph_array.len();
        out.extend_from_slice(&(length as u16).to_be_bytes());
        out.extend_from_slice(&0u16.to_be_bytes()); // language
        out.extend_from_slice(&4u16.to_be_bytes()); // segCountX2
        out.extend_from_slice(&[0u8; 6]);
        for end in [0x63u16, 0xffff] {
            out.extend_from_slice(&end.to_be_bytes());
        }
        out.extend_from_slice(&0u16.to_be_bytes()); // pad
        for start in [0x61u16, 0xffff] {
            out.extend_from_slice(&start.to_be_bytes());
        }
        for delta in [0i16, 1] {
            out.extend_from_slice(&delta.to_be_bytes());
        }
        for offset in [range_offset, 0] {
            out.extend_from_slice(&offset.to_be_bytes());
        }
        for gid in glyph_array {
            out.extend_from_slice(&gid.to_be_bytes());
        }
        out
    }

    fn cmap_with(platform: u16, encoding: u16, subtable: Vec<u8>) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&0u16.to_be_bytes());
        out.extend_from_slice(&1u16.to_be_bytes());
        out.extend_from_slice(&platform.to_be_bytes());
        out.extend_from_slice(&encoding.to_be_bytes());
        out.extend_from_slice(&12u32.to_be_bytes());
        out.extend_from_slice(&subtable);
        out
    }

    #[test]
    fn format4_delta_mapping() {
        // 'A'..'Z' map to glyph ids 1..26
        let data = cmap_with(3, 1, format4_subtable(&[(0x41, 0x5a, 1 - 0x41)]));
        let cmap = CharMap::parse(&data).unwrap();
        assert_eq!(cmap.glyph_id('A' as u32), 1);
        assert_eq!(cmap.glyph_id('Z' as u32), 26);
        assert_eq!(cmap.glyph_id('a' as u32), 0, "unmapped goes to .notdef");
    }

    #[test]
    fn format4_resolves_through_the_glyph_id_array() {
        let data = cmap_with(3, 1, format4_range_offset_subtable(4));
        let cmap = CharMap::parse(&data).unwrap();
        assert_eq!(cmap.glyph_id('a' as u32), 10);
        assert_eq!(cmap.glyph_id('b' as u32), 0, "zero array entry stays unmapped");
        assert_eq!(cmap.glyph_id('c' as u32), 30);
    }

    #[test]
    fn format4_short_range_offset_maps_to_notdef() {
        // offset 2 points one slot before the glyph id array for 'a'
        let data = cmap_with(3, 1, format4_range_offset_subtable(2));
        let cmap = CharMap::parse(&data).unwrap();
        assert_eq!(cmap.glyph_id('a' as u32), 0);
    }

    #[test]
    fn format12_groups() {
        let mut sub = Vec::new();
        sub.extend_from_slice(&12u16.to_be_bytes());
        sub.extend_from_slice(&0u16.to_be_bytes());
        sub.extend_from_slice(&(16u32 + 12).to_be_bytes());
        sub.extend_from_slice(&0u32.to_be_bytes());
        sub.extend_from_slice(&1u32.to_be_bytes());
        for v in [0x1f600u32, 0x1f602, 40] {
            sub.extend_from_slice(&v.to_be_bytes());
        }
        let cmap = CharMap::parse(&cmap_with(3, 10, sub)).unwrap();
        assert_eq!(cmap.glyph_id(0x1f600), 40);
        assert_eq!(cmap.glyph_id(0x1f602), 42);
        assert_eq!(cmap.glyph_id(0x1f603), 0);
    }

    #[test]
    fn reverse_lookup_collects_all_codepoints() {
        let data = cmap_with(3, 1, format4_subtable(&[(0x41, 0x42, 1 - 0x41)]));
        let cmap = CharMap::parse(&data).unwrap();
        assert_eq!(cmap.codepoints_for(1), &['A']);
        assert_eq!(cmap.codepoints_for(2), &['B']);
        assert!(cmap.codepoints_for(3).is_empty());
    }

    #[test]
    fn no_usable_subtable_is_an_error() {
        let mut out = Vec::new();
        out.extend_from_slice(&0u16.to_be_bytes());
        out.extend_from_slice(&0u16.to_be_bytes());
        assert!(matches!(
            CharMap::parse(&out),
            Err(FontError::BadCmapSubtable)
        ));
    }
}
