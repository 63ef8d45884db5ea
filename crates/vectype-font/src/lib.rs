// this_file: crates/vectype-font/src/lib.rs

//! Font-file parsing for vectype.
//!
//! This crate turns the bytes of a TrueType/OpenType file into an
//! immutable model: SFNT directory, metric tables, the character map,
//! an outline backend (quadratic `glyf` or cubic `CFF `), and the
//! `GSUB`/`GPOS` layout engines. Shaping, caching, and emission live in
//! the `vectype` crate on top of this one.

pub mod cff;
pub mod error;
pub mod font;
pub mod glyf;
pub mod layout;
pub mod outline;
pub mod reader;
pub mod sfnt;
pub mod tables;
pub mod tag;

pub use error::{FontError, Result, Warning};
pub use font::{DecodedGlyph, FontData, OutlineBackend};
pub use outline::{BBox, Outline, Point, Segment};
pub use tag::Tag;
