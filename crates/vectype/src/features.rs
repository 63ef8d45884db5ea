//! OpenType feature enablement.

use std::collections::HashMap;

use vectype_font::Tag;

/// Features applied whenever the font carries them, regardless of flags:
/// glyph composition, localized forms, and required ligatures.
pub const ALWAYS_ON: [Tag; 3] = [Tag::new(b"ccmp"), Tag::new(b"locl"), Tag::new(b"rlig")];

const DEFAULT_ON: [Tag; 3] = [Tag::new(b"kern"), Tag::new(b"liga"), Tag::new(b"calt")];

/// A mapping from feature tag to on/off, with per-feature alternate
/// selection for `GSUB` alternate lookups.
///
/// `kern`, `liga`, and `calt` default on; unknown tags are accepted and
/// simply have no effect if the font does not carry them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureSet {
    overrides: HashMap<Tag, bool>,
    alternates: HashMap<Tag, usize>,
}

impl FeatureSet {
    pub fn new() -> Self {
        FeatureSet::default()
    }

    /// Is a feature currently enabled?
    pub fn enabled(&self, tag: Tag) -> bool {
        if ALWAYS_ON.contains(&tag) {
            return true;
        }
        match self.overrides.get(&tag) {
            Some(&on) => on,
            None => DEFAULT_ON.contains(&tag),
        }
    }

    /// Turn a feature on or off. Tags are the 4-character OpenType names
    /// (`"liga"`, `"kern"`, ...); short names are space-padded.
    pub fn set(&mut self, tag: &str, on: bool) {
        if let Some(tag) = Tag::parse(tag) {
            self.overrides.insert(tag, on);
        }
    }

    pub fn set_tag(&mut self, tag: Tag, on: bool) {
        self.overrides.insert(tag, on);
    }

    /// Choose which alternate an `aalt`/`salt`-style lookup picks.
    pub fn set_alternate(&mut self, tag: &str, index: usize) {
        if let Some(tag) = Tag::parse(tag) {
            self.alternates.insert(tag, index);
        }
    }

    pub fn alternate(&self, tag: Tag) -> usize {
        self.alternates.get(&tag).copied().unwrap_or(0)
    }

    /// Tags with an explicit override, for inspection.
    pub fn overrides(&self) -> impl Iterator<Item = (Tag, bool)> + '_ {
        self.overrides.iter().map(|(t, on)| (*t, *on))
    }

    /// Apply per-call overrides on top of this set, returning the merged
    /// result. The base set is untouched.
    pub fn with_overrides<'a>(
        &self,
        overrides: impl IntoIterator<Item = (&'a str, bool)>,
    ) -> FeatureSet {
        let mut merged = self.clone();
        for (tag, on) in overrides {
            merged.set(tag, on);
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kern_liga_calt_default_on() {
        let features = FeatureSet::new();
        assert!(features.enabled(Tag::new(b"kern")));
        assert!(features.enabled(Tag::new(b"liga")));
        assert!(features.enabled(Tag::new(b"calt")));
        assert!(!features.enabled(Tag::new(b"dlig")));
        assert!(!features.enabled(Tag::new(b"smcp")));
    }

    #[test]
    fn always_on_features_ignore_overrides() {
        let mut features = FeatureSet::new();
        features.set("rlig", false);
        assert!(features.enabled(Tag::new(b"rlig")));
    }

    #[test]
    fn overrides_toggle_and_merge() {
        let mut features = FeatureSet::new();
        features.set("kern", false);
        assert!(!features.enabled(Tag::new(b"kern")));

        let merged = features.with_overrides([("kern", true), ("dlig", true)]);
        assert!(merged.enabled(Tag::new(b"kern")));
        assert!(merged.enabled(Tag::new(b"dlig")));
        // base untouched
        assert!(!features.enabled(Tag::new(b"kern")));
    }

    #[test]
    fn alternate_selection_defaults_to_zero() {
        let mut features = FeatureSet::new();
        assert_eq!(features.alternate(Tag::new(b"salt")), 0);
        features.set_alternate("salt", 2);
        assert_eq!(features.alternate(Tag::new(b"salt")), 2);
    }
}
