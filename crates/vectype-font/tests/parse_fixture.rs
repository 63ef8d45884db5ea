//! End-to-end parsing of the assembled fixture fonts.

use std::sync::Arc;

use vectype_font::font::OutlineBackend;
use vectype_font::{BBox, FontData, Segment, Warning};
use vectype_testfonts::{cff, gid, metrics, truetype};

fn load_truetype() -> FontData {
    FontData::load(Arc::from(truetype().into_boxed_slice())).expect("fixture parses")
}

fn load_cff() -> FontData {
    FontData::load(Arc::from(cff().into_boxed_slice())).expect("CFF fixture parses")
}

#[test]
fn loads_and_exposes_metrics() {
    let font = load_truetype();
    assert_eq!(font.units_per_em(), metrics::UPEM);
    assert_eq!(font.num_glyphs(), gid::COUNT);
    assert_eq!(font.hhea.ascent, metrics::ASCENT);
    assert_eq!(font.hhea.descent, metrics::DESCENT);
    assert_eq!(font.names.family, "Vectype Fixture");
    assert_eq!(font.names.subfamily, "Regular");
    assert!(matches!(font.outlines, OutlineBackend::Glyf(_)));
}

#[test]
fn directory_checksums_verify() {
    load_truetype().verify_checksums().expect("checksums hold");
}

#[test]
fn cmap_maps_fixture_characters() {
    let font = load_truetype();
    assert_eq!(font.glyph_id('A' as u32), gid::A);
    assert_eq!(font.glyph_id('f' as u32), gid::F_LOW);
    assert_eq!(font.glyph_id('&' as u32), gid::AMPERSAND);
    assert_eq!(font.glyph_id(' ' as u32), gid::SPACE);
    assert_eq!(font.glyph_id(0x00c5), gid::A_RING);
    assert_eq!(font.glyph_id('Z' as u32), 0, "unmapped goes to .notdef");
    // reverse lookup
    assert_eq!(font.charmap.codepoints_for(gid::A), &['A']);
}

#[test]
fn every_glyph_id_from_cmap_is_in_range() {
    let font = load_truetype();
    for cp in 0u32..0x300 {
        assert!(font.glyph_id(cp) < font.num_glyphs());
    }
}

#[test]
fn every_outline_is_well_formed() {
    let font = load_truetype();
    let font_box = font.head.bbox;
    for glyph_id in 0..font.num_glyphs() {
        let decoded = font.decode_glyph(glyph_id).expect("glyph decodes");
        for contour in decoded.outline.contours() {
            assert!(
                matches!(contour.first(), Some(Segment::MoveTo(_))),
                "glyph {glyph_id}: contour must open with MoveTo"
            );
            assert!(
                matches!(contour.last(), Some(Segment::Close)),
                "glyph {glyph_id}: contour must end closed"
            );
            assert_eq!(
                contour
                    .iter()
                    .filter(|s| matches!(s, Segment::MoveTo(_)))
                    .count(),
                1,
                "glyph {glyph_id}: exactly one MoveTo per contour"
            );
        }
        if !decoded.outline.is_empty() {
            assert!(
                font_box.contains(&decoded.outline.bbox, 1.0),
                "glyph {glyph_id} bbox {:?} escapes the font bbox",
                decoded.outline.bbox
            );
        }
    }
}

#[test]
fn space_decodes_empty() {
    let font = load_truetype();
    let decoded = font.decode_glyph(gid::SPACE).unwrap();
    assert!(decoded.outline.is_empty());
    assert_eq!(font.advance(gid::SPACE), metrics::SPACE_ADVANCE);
}

#[test]
fn compound_glyph_applies_component_offset() {
    let font = load_truetype();
    let child = font.decode_glyph(gid::A).unwrap().outline;
    let compound = font.decode_glyph(gid::A_RING).unwrap().outline;
    let (dx, dy) = metrics::A_RING_SHIFT;
    assert_eq!(
        compound.bbox,
        BBox::new(
            child.bbox.x_min + dx as f32,
            child.bbox.x_max + dx as f32,
            child.bbox.y_min + dy as f32,
            child.bbox.y_max + dy as f32,
        )
    );
    assert_eq!(compound.segments.len(), child.segments.len());
}

#[test]
fn hmtx_advances_match_fixture() {
    let font = load_truetype();
    assert_eq!(font.advance(gid::A), metrics::ADVANCE);
    assert_eq!(font.advance(gid::FF_LIGA), metrics::FF_ADVANCE);
    assert_eq!(font.left_side_bearing(gid::A), 50);
}

#[test]
fn unsupported_gsub_lookup_is_reported_not_fatal() {
    let font = load_truetype();
    let warnings = font.layout_warnings();
    assert!(
        warnings.iter().any(|w| matches!(
            w,
            Warning::UnsupportedLookup {
                kind: "GSUB",
                lookup_type: 5,
                ..
            }
        )),
        "expected a skipped type-5 lookup, got {warnings:?}"
    );
}

#[test]
fn cff_fixture_decodes_square_glyph() {
    let font = load_cff();
    assert!(font.is_cff());
    assert_eq!(font.num_glyphs(), 2);
    assert_eq!(font.glyph_id('O' as u32), 1);

    let decoded = font.decode_glyph(1).expect("charstring interpreted");
    let (x_min, x_max, y_min, y_max) = metrics::CFF_SQUARE;
    let bbox = decoded.outline.bbox;
    assert!((bbox.x_min - x_min as f32).abs() <= 1.0);
    assert!((bbox.x_max - x_max as f32).abs() <= 1.0);
    assert!((bbox.y_min - y_min as f32).abs() <= 1.0);
    assert!((bbox.y_max - y_max as f32).abs() <= 1.0);

    // endchar closed the subpath
    assert!(matches!(decoded.outline.segments.last(), Some(Segment::Close)));
    // width delta resolved against nominalWidthX
    assert_eq!(decoded.cff_width, Some(600.0));
}

#[test]
fn cff_notdef_uses_default_width() {
    let font = load_cff();
    let decoded = font.decode_glyph(0).unwrap();
    assert!(decoded.outline.is_empty());
    assert_eq!(decoded.cff_width, Some(metrics::CFF_DEFAULT_WIDTH as f32));
}
