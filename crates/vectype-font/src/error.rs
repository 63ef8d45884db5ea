//! Error types for font parsing and glyph decoding.

use thiserror::Error;

use crate::tag::Tag;

pub type Result<T> = std::result::Result<T, FontError>;

/// Errors raised while parsing a font file or decoding its glyphs.
///
/// Parse errors during [`crate::FontData::load`] are fatal; decode errors
/// for an individual glyph are recovered by the caller substituting the
/// `.notdef` outline.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("not an SFNT font: bad scaler signature {0:#010x}")]
    BadSignature(u32),

    #[error("table data ends prematurely")]
    TruncatedTable,

    #[error("required table '{0}' is missing")]
    MissingRequiredTable(Tag),

    #[error("unsupported font format: {0}")]
    UnsupportedFormat(&'static str),

    #[error("unsupported {kind} lookup type {lookup_type}")]
    UnsupportedLookup { kind: &'static str, lookup_type: u16 },

    #[error("unsupported charstring operator {0:#x}")]
    UnsupportedOp(u16),

    #[error("compound glyph nesting exceeded {max} levels")]
    CompoundDepth { max: u32 },

    #[error("charstring interpreter fault: {0}")]
    CharstringVm(&'static str),

    #[error("glyph id {0} out of range")]
    BadGlyphId(u16),

    #[error("no usable cmap subtable")]
    BadCmapSubtable,

    #[error("table '{table}' checksum {computed:#010x} != directory {stored:#010x}")]
    ChecksumMismatch {
        table: Tag,
        computed: u32,
        stored: u32,
    },
}

/// Non-fatal conditions recovered from during loading or shaping, reported
/// out of band rather than aborting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A lookup of a type this engine does not implement was skipped.
    UnsupportedLookup {
        kind: &'static str,
        lookup_type: u16,
        lookup_index: u16,
    },
    /// A glyph failed to decode and `.notdef` was substituted.
    GlyphDecodeFailed { glyph_id: u16, reason: String },
}
