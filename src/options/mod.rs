//! Rotator settings with TOML support.
//!
//! Timing and markup names are consolidated here. Nothing is read from the
//! host element's attributes except the word list itself; embedders that
//! need different timing or class names pass a [`RotatorOptions`] in code
//! or load one from TOML.

mod markup;
mod timing;

use std::path::Path;

pub use markup::MarkupOptions;
use serde::{Deserialize, Serialize};
pub use timing::{TimingOptions, ROTATION_INTERVAL, TRANSITION_DURATION};

use crate::error::RotatorError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[timing]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct RotatorOptions {
    /// Rotation interval and exit transition length.
    pub timing: TimingOptions,
    /// Class and attribute names in the CSS/markup contract.
    pub markup: MarkupOptions,
}

impl RotatorOptions {
    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, RotatorError> {
        toml::from_str(content)
            .map_err(|e| RotatorError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, RotatorError> {
        let content = std::fs::read_to_string(path).map_err(RotatorError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Serialize to pretty-printed TOML.
    pub fn to_toml_string(&self) -> Result<String, RotatorError> {
        toml::to_string_pretty(self)
            .map_err(|e| RotatorError::OptionsParse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn defaults_match_the_stylesheet_contract() {
        let opts = RotatorOptions::default();
        assert_eq!(opts.timing.interval(), ROTATION_INTERVAL);
        assert_eq!(opts.timing.transition(), TRANSITION_DURATION);
        assert_eq!(opts.timing.interval(), Duration::from_millis(2500));
        assert_eq!(opts.timing.transition(), Duration::from_millis(400));
        assert_eq!(opts.markup.active_selector(), ".is-active");
        assert_eq!(opts.markup.container_selector(), ".word-rotator");
        assert_eq!(opts.markup.ready_class, "is-ready");
    }

    #[test]
    fn default_round_trips_through_toml() {
        let opts = RotatorOptions::default();
        let toml_str = opts.to_toml_string().unwrap();
        let parsed = RotatorOptions::from_toml_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[timing]
interval_ms = 4000
";
        let opts = RotatorOptions::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.timing.interval_ms, 4000);
        // Everything else should be default
        assert_eq!(opts.timing.transition(), TRANSITION_DURATION);
        assert_eq!(opts.markup, MarkupOptions::default());
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = RotatorOptions::from_toml_str("timing = 3").unwrap_err();
        assert!(matches!(err, RotatorError::OptionsParse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err =
            RotatorOptions::load(Path::new("/nonexistent/rotator.toml"))
                .unwrap_err();
        assert!(matches!(err, RotatorError::Io(_)));
    }
}
