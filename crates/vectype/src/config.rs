//! Render configuration.
//!
//! Every text request takes an explicit [`RenderConfig`]; a process-wide
//! default exists for callers that do not care, but nothing reads it
//! implicitly mid-layout, so concurrent use stays predictable.

use once_cell::sync::Lazy;
use parking_lot::RwLock;

/// Options controlling emission and layout defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Default text size in pixels when a request does not specify one.
    pub fontsize: f32,
    /// Emit each distinct glyph once as a reusable symbol, referenced by
    /// position. Disable to inline every outline (larger output, better
    /// compatibility with old SVG renderers).
    pub svg2: bool,
    /// Decimal places for emitted path coordinates.
    pub precision: u8,
    /// Request debug geometry (baselines, glyph boxes, origin marks) from
    /// the layout.
    pub debug: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            fontsize: 48.0,
            svg2: true,
            precision: 2,
            debug: false,
        }
    }
}

static DEFAULT: Lazy<RwLock<RenderConfig>> = Lazy::new(|| RwLock::new(RenderConfig::default()));

/// The process-wide default configuration.
pub fn default_config() -> RenderConfig {
    DEFAULT.read().clone()
}

/// Replace the process-wide default configuration.
pub fn set_default_config(config: RenderConfig) {
    *DEFAULT.write() = config;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = RenderConfig::default();
        assert_eq!(config.fontsize, 48.0);
        assert!(config.svg2);
        assert_eq!(config.precision, 2);
        assert!(!config.debug);
    }
}
