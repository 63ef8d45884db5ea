// this_file: crates/vectype/src/lib.rs

//! vectype: text to scalable vector paths, straight from a font file.
//!
//! Give it the bytes of a TrueType or OpenType font and a string; it maps
//! characters to glyphs, applies `GSUB` substitutions (ligatures,
//! alternates) and `GPOS` positioning (kerning, mark attachment), stacks
//! lines, and hands back positioned glyph outlines ready to serialize as
//! SVG `<path>` elements — no font installation required on the viewing
//! side.
//!
//! ```no_run
//! use vectype::{Font, TextOptions};
//!
//! let font = Font::from_file("DejaVuSans.ttf")?;
//! let run = font.text("Hello", &TextOptions::with_size(36.0));
//! for (glyph_id, x, y, scale) in run.placements() {
//!     let glyph = font.glyph(glyph_id);
//!     // hand `glyph.outline` + position to your serializer
//!     let _ = (glyph, x, y, scale);
//! }
//! # Ok::<(), vectype::TextError>(())
//! ```
//!
//! The emission helpers in [`emit`] turn a run into path-data strings
//! with either one reusable symbol per distinct glyph (`svg2` mode) or
//! everything inlined.

pub mod config;
pub mod debug;
pub mod emit;
pub mod error;
pub mod features;
pub mod font;
pub mod run;
mod shape;

pub use config::{default_config, set_default_config, RenderConfig};
pub use error::{Result, TextError};
pub use features::FeatureSet;
pub use font::{Font, Glyph};
pub use run::{HAlign, Line, PositionedGlyph, RotationMode, TextOptions, TextRun, VAlign};

// Re-export the parsing layer for callers that want table-level access.
pub use vectype_font::{self as font_data, BBox, FontError, Outline, Point, Segment, Tag, Warning};
