// this_file: crates/vectype-testfonts/src/lib.rs

//! Byte-exact fixture fonts assembled in code.
//!
//! Real font binaries cannot live in this repository, so the integration
//! tests build their own: a TrueType fixture with kerning pairs, an `ff`
//! ligature, and a compound glyph, plus a minimal CFF fixture. Offsets are
//! computed while assembling, never hardcoded, so the fixtures stay valid
//! as they grow.

/// Glyph ids of the TrueType fixture.
pub mod gid {
    pub const NOTDEF: u16 = 0;
    pub const A: u16 = 1;
    pub const V: u16 = 2;
    pub const L: u16 = 3;
    pub const E: u16 = 4;
    pub const S: u16 = 5;
    pub const T: u16 = 6;
    pub const W_LOW: u16 = 7;
    pub const O_LOW: u16 = 8;
    pub const I_LOW: u16 = 9;
    pub const N_LOW: u16 = 10;
    pub const E_LOW: u16 = 11;
    pub const S_LOW: u16 = 12;
    pub const F_LOW: u16 = 13;
    pub const FF_LIGA: u16 = 14;
    pub const A_RING: u16 = 15;
    pub const SPACE: u16 = 16;
    pub const AMPERSAND: u16 = 17;
    pub const COUNT: u16 = 18;
}

/// Shared fixture metrics.
pub mod metrics {
    pub const UPEM: u16 = 1000;
    pub const ASCENT: i16 = 800;
    pub const DESCENT: i16 = -200;
    pub const LINE_GAP: i16 = 90;
    pub const ADVANCE: u16 = 500;
    pub const SPACE_ADVANCE: u16 = 250;
    pub const FF_ADVANCE: u16 = 800;
    /// (first, second, x-advance delta) kerning pairs in the fixture GPOS.
    pub const KERN_PAIRS: [(u16, u16, i16); 5] = [
        (super::gid::A, super::gid::V, -80),
        (super::gid::V, super::gid::A, -80),
        (super::gid::V, super::gid::E, -60),
        (super::gid::L, super::gid::V, -70),
        (super::gid::E, super::gid::S, -50),
    ];
    /// Offset the compound glyph applies to its component.
    pub const A_RING_SHIFT: (i16, i16) = (0, 200);
    /// CFF fixture: nominal/default widths and the square glyph extents.
    pub const CFF_DEFAULT_WIDTH: i16 = 500;
    pub const CFF_NOMINAL_WIDTH: i16 = 400;
    pub const CFF_SQUARE: (i16, i16, i16, i16) = (100, 400, 100, 400);
}

fn push_u16(out: &mut Vec<u8>, v: u16) {
    out.extend_from_slice(&v.to_be_bytes());
}

fn push_i16(out: &mut Vec<u8>, v: i16) {
    out.extend_from_slice(&v.to_be_bytes());
}

fn push_u32(out: &mut Vec<u8>, v: u32) {
    out.extend_from_slice(&v.to_be_bytes());
}

fn checksum(bytes: &[u8]) -> u32 {
    let mut sum: u32 = 0;
    let mut chunks = bytes.chunks_exact(4);
    for c in &mut chunks {
        sum = sum.wrapping_add(u32::from_be_bytes([c[0], c[1], c[2], c[3]]));
    }
    let rem = chunks.remainder();
    if !rem.is_empty() {
        let mut last = [0u8; 4];
        last[..rem.len()].copy_from_slice(rem);
        sum = sum.wrapping_add(u32::from_be_bytes(last));
    }
    sum
}

/// Wrap tables in an SFNT container with a valid directory.
fn sfnt(scaler: u32, tables: &[(&[u8; 4], Vec<u8>)]) -> Vec<u8> {
    let mut out = Vec::new();
    push_u32(&mut out, scaler);
    push_u16(&mut out, tables.len() as u16);
    out.extend_from_slice(&[0u8; 6]); // search fields, unused by the parser
    let mut offset = 12 + 16 * tables.len() as u32;
    for (tag, bytes) in tables {
        out.extend_from_slice(*tag);
        push_u32(&mut out, checksum(bytes));
        push_u32(&mut out, offset);
        push_u32(&mut out, bytes.len() as u32);
        // tables are traditionally long-aligned
        offset += (bytes.len() as u32 + 3) & !3;
    }
    for (_, bytes) in tables {
        out.extend_from_slice(bytes);
        while out.len() % 4 != 0 {
            out.push(0);
        }
    }
    out
}

fn head_table(loca_long: bool) -> Vec<u8> {
    let mut out = Vec::new();
    push_u32(&mut out, 0x0001_0000); // version
    push_u32(&mut out, 0x0001_0000); // revision
    push_u32(&mut out, 0); // checksum adjustment
    push_u32(&mut out, 0x5f0f_3cf5); // magic
    push_u16(&mut out, 0); // flags
    push_u16(&mut out, metrics::UPEM);
    out.extend_from_slice(&[0u8; 16]); // created/modified
    push_i16(&mut out, 0); // xMin
    push_i16(&mut out, metrics::DESCENT); // yMin
    push_i16(&mut out, 1000); // xMax
    push_i16(&mut out, 900); // yMax
    push_u16(&mut out, 0); // macStyle
    push_u16(&mut out, 8); // lowestRecPPEM
    push_i16(&mut out, 2); // fontDirectionHint
    push_i16(&mut out, if loca_long { 1 } else { 0 });
    push_i16(&mut out, 0); // glyphDataFormat
    out
}

fn hhea_table(number_of_h_metrics: u16) -> Vec<u8> {
    let mut out = Vec::new();
    push_u32(&mut out, 0x0001_0000);
    push_i16(&mut out, metrics::ASCENT);
    push_i16(&mut out, metrics::DESCENT);
    push_i16(&mut out, metrics::LINE_GAP);
    push_u16(&mut out, metrics::FF_ADVANCE); // advanceWidthMax
    push_i16(&mut out, 0); // minLeftSideBearing
    push_i16(&mut out, 0); // minRightSideBearing
    push_i16(&mut out, 1000); // xMaxExtent
    push_i16(&mut out, 1); // caretSlopeRise
    push_i16(&mut out, 0); // caretSlopeRun
    push_i16(&mut out, 0); // caretOffset
    out.extend_from_slice(&[0u8; 8]); // reserved
    push_i16(&mut out, 0); // metricDataFormat
    push_u16(&mut out, number_of_h_metrics);
    out
}

fn maxp_table(num_glyphs: u16) -> Vec<u8> {
    let mut out = Vec::new();
    push_u32(&mut out, 0x0000_5000);
    push_u16(&mut out, num_glyphs);
    out
}

fn hmtx_table(advances: &[u16]) -> Vec<u8> {
    let mut out = Vec::new();
    for &advance in advances {
        push_u16(&mut out, advance);
        push_i16(&mut out, 50); // lsb
    }
    out
}

/// Format 4 cmap with one segment per mapping plus the 0xffff terminator.
fn cmap_table(mappings: &[(u16, u16)]) -> Vec<u8> {
    let mut sorted: Vec<(u16, u16)> = mappings.to_vec();
    sorted.sort_unstable();
    let seg_count = sorted.len() + 1;

    let mut sub = Vec::new();
    push_u16(&mut sub, 4); // format
    let length = 16 + 8 * seg_count;
    push_u16(&mut sub, length as u16);
    push_u16(&mut sub, 0); // language
    push_u16(&mut sub, (seg_count * 2) as u16);
    sub.extend_from_slice(&[0u8; 6]); // search fields
    for &(cp, _) in &sorted {
        push_u16(&mut sub, cp); // endCode
    }
    push_u16(&mut sub, 0xffff);
    push_u16(&mut sub, 0); // reservedPad
    for &(cp, _) in &sorted {
        push_u16(&mut sub, cp); // startCode
    }
    push_u16(&mut sub, 0xffff);
    for &(cp, gid) in &sorted {
        push_i16(&mut sub, gid.wrapping_sub(cp) as i16); // idDelta
    }
    push_u16(&mut sub, 1); // terminator delta
    for _ in 0..seg_count {
        push_u16(&mut sub, 0); // idRangeOffset
    }

    let mut out = Vec::new();
    push_u16(&mut out, 0); // version
    push_u16(&mut out, 1); // one encoding record
    push_u16(&mut out, 3); // Windows
    push_u16(&mut out, 1); // Unicode BMP
    push_u32(&mut out, 12);
    out.extend_from_slice(&sub);
    out
}

fn name_table() -> Vec<u8> {
    let family = "Vectype Fixture";
    let subfamily = "Regular";
    let mut strings = Vec::new();
    let mut records = Vec::new();
    for (name_id, text) in [(1u16, family), (2, subfamily)] {
        let encoded: Vec<u8> = text.encode_utf16().flat_map(|u| u.to_be_bytes()).collect();
        records.push((name_id, strings.len() as u16, encoded.len() as u16));
        strings.extend_from_slice(&encoded);
    }
    let mut out = Vec::new();
    push_u16(&mut out, 0); // format
    push_u16(&mut out, records.len() as u16);
    push_u16(&mut out, 6 + 12 * records.len() as u16);
    for (name_id, offset, length) in records {
        push_u16(&mut out, 3); // Windows
        push_u16(&mut out, 1); // Unicode BMP
        push_u16(&mut out, 0x0409); // en-US
        push_u16(&mut out, name_id);
        push_u16(&mut out, length);
        push_u16(&mut out, offset);
    }
    out.extend_from_slice(&strings);
    out
}

/// One simple glyph: a closed contour of on-curve points.
fn simple_glyph(points: &[(i16, i16)]) -> Vec<u8> {
    let x_min = points.iter().map(|p| p.0).min().unwrap();
    let x_max = points.iter().map(|p| p.0).max().unwrap();
    let y_min = points.iter().map(|p| p.1).min().unwrap();
    let y_max = points.iter().map(|p| p.1).max().unwrap();

    let mut out = Vec::new();
    push_i16(&mut out, 1); // one contour
    push_i16(&mut out, x_min);
    push_i16(&mut out, y_min);
    push_i16(&mut out, x_max);
    push_i16(&mut out, y_max);
    push_u16(&mut out, points.len() as u16 - 1); // endPtsOfContours
    push_u16(&mut out, 0); // instructionLength
    for _ in points {
        out.push(0x01); // on-curve, full-width deltas
    }
    let mut prev = 0i16;
    for &(x, _) in points {
        push_i16(&mut out, x - prev);
        prev = x;
    }
    prev = 0;
    for &(_, y) in points {
        push_i16(&mut out, y - prev);
        prev = y;
    }
    out
}

/// A compound glyph with a single x/y-offset component.
fn compound_glyph(child: u16, dx: i16, dy: i16, bbox: (i16, i16, i16, i16)) -> Vec<u8> {
    let mut out = Vec::new();
    push_i16(&mut out, -1);
    push_i16(&mut out, bbox.0);
    push_i16(&mut out, bbox.2);
    push_i16(&mut out, bbox.1);
    push_i16(&mut out, bbox.3);
    push_u16(&mut out, 0x0003); // ARG_1_AND_2_ARE_WORDS | ARGS_ARE_XY_VALUES
    push_u16(&mut out, child);
    push_i16(&mut out, dx);
    push_i16(&mut out, dy);
    out
}

/// A box contour used by most fixture glyphs.
fn box_points(x0: i16, y0: i16, x1: i16, y1: i16) -> Vec<(i16, i16)> {
    vec![(x0, y0), (x1, y0), (x1, y1), (x0, y1)]
}

fn build_glyf_and_loca() -> (Vec<u8>, Vec<u8>) {
    // glyph records by id; None is an empty glyph
    let cap = box_points(50, 0, 450, 700);
    let low = box_points(50, 0, 450, 500);
    let ff = box_points(50, 0, 750, 720);
    let ring_bbox = (50, 450, 200, 900);
    let records: Vec<Option<Vec<u8>>> = vec![
        Some(simple_glyph(&box_points(100, 0, 400, 700))), // .notdef
        Some(simple_glyph(&cap)),                          // A
        Some(simple_glyph(&cap)),                          // V
        Some(simple_glyph(&cap)),                          // L
        Some(simple_glyph(&cap)),                          // E
        Some(simple_glyph(&cap)),                          // S
        Some(simple_glyph(&cap)),                          // T
        Some(simple_glyph(&low)),                          // w
        Some(simple_glyph(&low)),                          // o
        Some(simple_glyph(&box_points(150, 0, 350, 700))), // i
        Some(simple_glyph(&low)),                          // n
        Some(simple_glyph(&low)),                          // e
        Some(simple_glyph(&low)),                          // s
        Some(simple_glyph(&box_points(50, 0, 450, 720))),  // f
        Some(simple_glyph(&ff)),                           // ff ligature
        Some(compound_glyph(
            gid::A,
            metrics::A_RING_SHIFT.0,
            metrics::A_RING_SHIFT.1,
            ring_bbox,
        )),
        None, // space
        Some(simple_glyph(&box_points(60, 0, 440, 700))), // ampersand
    ];

    let mut glyf = Vec::new();
    let mut loca = Vec::new();
    push_u32(&mut loca, 0);
    for record in &records {
        if let Some(bytes) = record {
            glyf.extend_from_slice(bytes);
            // glyph records are long-aligned
            while glyf.len() % 4 != 0 {
                glyf.push(0);
            }
        }
        push_u32(&mut loca, glyf.len() as u32);
    }
    (glyf, loca)
}

/// GSUB: `liga` activates an `ff` ligature lookup; `calt` points at a
/// deliberately unsupported type-5 lookup so skip reporting is exercised.
fn gsub_table() -> Vec<u8> {
    // Ligature subtable, offsets local to its start.
    let mut lig_sub = Vec::new();
    push_u16(&mut lig_sub, 1); // format
    push_u16(&mut lig_sub, 18); // coverage offset (after set block)
    push_u16(&mut lig_sub, 1); // ligSetCount
    push_u16(&mut lig_sub, 8); // ligatureSetOffset
    debug_assert_eq!(lig_sub.len(), 8);
    // LigatureSet at 8
    push_u16(&mut lig_sub, 1); // ligatureCount
    push_u16(&mut lig_sub, 4); // ligatureOffset
    // Ligature at 12
    push_u16(&mut lig_sub, gid::FF_LIGA);
    push_u16(&mut lig_sub, 2); // componentCount
    push_u16(&mut lig_sub, gid::F_LOW); // second component
    debug_assert_eq!(lig_sub.len(), 18);
    // Coverage at 18
    push_u16(&mut lig_sub, 1); // format
    push_u16(&mut lig_sub, 1); // glyphCount
    push_u16(&mut lig_sub, gid::F_LOW);

    layout_table(
        &[(*b"liga", vec![0]), (*b"calt", vec![1])],
        &[(4, lig_sub), (5, vec![0u8; 4])],
    )
}

/// GPOS: `kern` activates a pair-adjustment lookup with the fixture pairs.
fn gpos_table() -> Vec<u8> {
    // Group kern pairs by first glyph, coverage order = sorted first gids.
    let mut firsts: Vec<u16> = metrics::KERN_PAIRS.iter().map(|p| p.0).collect();
    firsts.sort_unstable();
    firsts.dedup();

    let mut pair_sub = Vec::new();
    push_u16(&mut pair_sub, 1); // format
    let header_len = 10 + 2 * firsts.len();
    // pair sets first, then coverage; compute sizes up front
    let set_len = |first: u16| {
        2 + metrics::KERN_PAIRS
            .iter()
            .filter(|p| p.0 == first)
            .count()
            * 4
    };
    let sets_total: usize = firsts.iter().map(|&f| set_len(f)).sum();
    push_u16(&mut pair_sub, (header_len + sets_total) as u16); // coverage offset
    push_u16(&mut pair_sub, 0x0004); // valueFormat1: xAdvance
    push_u16(&mut pair_sub, 0x0000); // valueFormat2
    push_u16(&mut pair_sub, firsts.len() as u16);
    let mut set_offset = header_len;
    for &first in &firsts {
        push_u16(&mut pair_sub, set_offset as u16);
        set_offset += set_len(first);
    }
    debug_assert_eq!(pair_sub.len(), header_len);
    for &first in &firsts {
        let pairs: Vec<_> = metrics::KERN_PAIRS
            .iter()
            .filter(|p| p.0 == first)
            .collect();
        push_u16(&mut pair_sub, pairs.len() as u16);
        let mut sorted = pairs.clone();
        sorted.sort_by_key(|p| p.1);
        for (_, second, adjust) in sorted {
            push_u16(&mut pair_sub, *second);
            push_i16(&mut pair_sub, *adjust);
        }
    }
    // Coverage
    push_u16(&mut pair_sub, 1); // format
    push_u16(&mut pair_sub, firsts.len() as u16);
    for &first in &firsts {
        push_u16(&mut pair_sub, first);
    }

    layout_table(&[(*b"kern", vec![0])], &[(2, pair_sub)])
}

/// Assemble a GSUB/GPOS-shaped table: DFLT script whose default language
/// system enables every listed feature, one lookup per subtable.
fn layout_table(features: &[([u8; 4], Vec<u16>)], lookups: &[(u16, Vec<u8>)]) -> Vec<u8> {
    // ScriptList with a single DFLT script
    let mut script_list = Vec::new();
    push_u16(&mut script_list, 1);
    script_list.extend_from_slice(b"DFLT");
    push_u16(&mut script_list, 8); // script table offset
    // Script table (at 8): defaultLangSys at 4, no tagged languages
    push_u16(&mut script_list, 4);
    push_u16(&mut script_list, 0);
    // LangSys (at 12)
    push_u16(&mut script_list, 0); // lookupOrderOffset
    push_u16(&mut script_list, 0xffff); // no required feature
    push_u16(&mut script_list, features.len() as u16);
    for i in 0..features.len() {
        push_u16(&mut script_list, i as u16);
    }

    // FeatureList
    let mut feature_list = Vec::new();
    push_u16(&mut feature_list, features.len() as u16);
    let record_block = 2 + 6 * features.len();
    let mut feature_offset = record_block;
    for (tag, lookup_ids) in features {
        feature_list.extend_from_slice(tag);
        push_u16(&mut feature_list, feature_offset as u16);
        feature_offset += 4 + 2 * lookup_ids.len();
    }
    for (_, lookup_ids) in features {
        push_u16(&mut feature_list, 0); // featureParamsOffset
        push_u16(&mut feature_list, lookup_ids.len() as u16);
        for &id in lookup_ids {
            push_u16(&mut feature_list, id);
        }
    }

    // LookupList
    let mut lookup_list = Vec::new();
    push_u16(&mut lookup_list, lookups.len() as u16);
    let lookup_block = 2 + 2 * lookups.len();
    let mut lookup_offset = lookup_block;
    for (_, subtable) in lookups {
        push_u16(&mut lookup_list, lookup_offset as u16);
        lookup_offset += 8 + subtable.len();
    }
    for (lookup_type, subtable) in lookups {
        push_u16(&mut lookup_list, *lookup_type);
        push_u16(&mut lookup_list, 0); // lookupFlag
        push_u16(&mut lookup_list, 1); // subTableCount
        push_u16(&mut lookup_list, 8); // subtable follows the lookup header
        lookup_list.extend_from_slice(subtable);
    }

    let mut out = Vec::new();
    push_u16(&mut out, 1); // major
    push_u16(&mut out, 0); // minor
    let header_len = 10;
    push_u16(&mut out, header_len as u16);
    push_u16(&mut out, (header_len + script_list.len()) as u16);
    push_u16(&mut out, (header_len + script_list.len() + feature_list.len()) as u16);
    out.extend_from_slice(&script_list);
    out.extend_from_slice(&feature_list);
    out.extend_from_slice(&lookup_list);
    out
}

/// The TrueType fixture: 18 glyphs, kerning, an `ff` ligature, a compound
/// glyph, and a format 4 cmap.
pub fn truetype() -> Vec<u8> {
    let (glyf, loca) = build_glyf_and_loca();
    let mut advances = vec![metrics::ADVANCE; gid::COUNT as usize];
    advances[gid::FF_LIGA as usize] = metrics::FF_ADVANCE;
    advances[gid::SPACE as usize] = metrics::SPACE_ADVANCE;

    let mappings = [
        ('A' as u16, gid::A),
        ('V' as u16, gid::V),
        ('L' as u16, gid::L),
        ('E' as u16, gid::E),
        ('S' as u16, gid::S),
        ('T' as u16, gid::T),
        ('w' as u16, gid::W_LOW),
        ('o' as u16, gid::O_LOW),
        ('i' as u16, gid::I_LOW),
        ('n' as u16, gid::N_LOW),
        ('e' as u16, gid::E_LOW),
        ('s' as u16, gid::S_LOW),
        ('f' as u16, gid::F_LOW),
        (0x00c5, gid::A_RING), // Å
        (' ' as u16, gid::SPACE),
        ('&' as u16, gid::AMPERSAND),
    ];

    sfnt(
        0x0001_0000,
        &[
            (b"head", head_table(true)),
            (b"hhea", hhea_table(gid::COUNT)),
            (b"maxp", maxp_table(gid::COUNT)),
            (b"hmtx", hmtx_table(&advances)),
            (b"cmap", cmap_table(&mappings)),
            (b"loca", loca),
            (b"glyf", glyf),
            (b"name", name_table()),
            (b"GSUB", gsub_table()),
            (b"GPOS", gpos_table()),
        ],
    )
}

/// CFF DICT entry with every operand in the fixed 3-byte integer form so
/// offsets can be patched in place.
fn dict_entry(out: &mut Vec<u8>, operands: &[i16], op: u16) {
    for &v in operands {
        out.push(28);
        push_i16(out, v);
    }
    if op >= 0x0c00 {
        out.push(12);
        out.push((op & 0xff) as u8);
    } else {
        out.push(op as u8);
    }
}

/// CFF INDEX with one-byte offsets.
fn cff_index(items: &[Vec<u8>]) -> Vec<u8> {
    let mut out = Vec::new();
    push_u16(&mut out, items.len() as u16);
    if items.is_empty() {
        return out;
    }
    out.push(1); // offSize
    let mut offset = 1usize;
    out.push(offset as u8);
    for item in items {
        offset += item.len();
        assert!(offset <= 255, "fixture INDEX outgrew one-byte offsets");
        out.push(offset as u8);
    }
    for item in items {
        out.extend_from_slice(item);
    }
    out
}

fn cff_table() -> Vec<u8> {
    let sq = metrics::CFF_SQUARE;
    let side = sq.1 - sq.0;

    // glyph 0: bare endchar; glyph 1: width delta then a square
    let notdef = vec![14u8];
    let mut square = Vec::new();
    for v in [
        metrics::CFF_DEFAULT_WIDTH + 100 - metrics::CFF_NOMINAL_WIDTH, // width delta
        sq.0,
        sq.2,
    ] {
        square.push(28);
        push_i16(&mut square, v);
    }
    square.push(21); // rmoveto
    for v in [side, side, -side] {
        square.push(28);
        push_i16(&mut square, v);
    }
    square.push(6); // hlineto alternating h, v, h
    square.push(14); // endchar

    let mut out = vec![1, 0, 4, 1]; // header: major, minor, hdrSize, offSize
    out.extend_from_slice(&cff_index(&[b"VectypeFixtureCFF".to_vec()]));

    // Top DICT with placeholder offsets, patched below.
    let mut top_dict = Vec::new();
    dict_entry(&mut top_dict, &[0, 0], 18); // Private: size, offset
    dict_entry(&mut top_dict, &[0], 17); // CharStrings offset
    let top_index = cff_index(&[top_dict.clone()]);
    let top_dict_pos = out.len() + (top_index.len() - top_dict.len());
    out.extend_from_slice(&top_index);

    out.extend_from_slice(&cff_index(&[])); // String INDEX
    out.extend_from_slice(&cff_index(&[])); // Global Subr INDEX

    let charstrings_offset = out.len();
    out.extend_from_slice(&cff_index(&[notdef, square]));

    let private_offset = out.len();
    let mut private = Vec::new();
    dict_entry(&mut private, &[metrics::CFF_DEFAULT_WIDTH], 20);
    dict_entry(&mut private, &[metrics::CFF_NOMINAL_WIDTH], 21);
    out.extend_from_slice(&private);

    // Patch the Top DICT: operands sit at fixed positions because every
    // operand is 3 bytes ([28, hi, lo]).
    let patch = |out: &mut Vec<u8>, at: usize, v: u16| {
        out[at + 1..at + 3].copy_from_slice(&v.to_be_bytes());
    };
    patch(&mut out, top_dict_pos, private.len() as u16);
    patch(&mut out, top_dict_pos + 3, private_offset as u16);
    patch(&mut out, top_dict_pos + 7, charstrings_offset as u16);
    out
}

/// The CFF fixture: two glyphs behind an `OTTO` container; 'O' maps to the
/// square glyph.
pub fn cff() -> Vec<u8> {
    sfnt(
        u32::from_be_bytes(*b"OTTO"),
        &[
            (b"head", head_table(false)),
            (b"hhea", hhea_table(2)),
            (b"maxp", maxp_table(2)),
            (b"hmtx", hmtx_table(&[metrics::ADVANCE, 600])),
            (b"cmap", cmap_table(&[('O' as u16, 1)])),
            (b"CFF ", cff_table()),
            (b"name", name_table()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_are_nonempty_and_tagged() {
        let ttf = truetype();
        assert_eq!(&ttf[0..4], &0x0001_0000u32.to_be_bytes());
        let otf = cff();
        assert_eq!(&otf[0..4], b"OTTO");
    }

    #[test]
    fn top_dict_patching_is_in_bounds() {
        // building must not panic and the table must parse as an index
        let table = cff_table();
        assert!(table.len() > 40);
    }
}
