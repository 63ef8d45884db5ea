//! OpenType layout: the structures and engines behind `GSUB` and `GPOS`.

pub mod common;
pub mod gpos;
pub mod gsub;
