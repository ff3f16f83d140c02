//! Crate-level error types.

use std::fmt;

/// Errors produced by the word-rotator crate.
#[derive(Debug)]
pub enum RotatorError {
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// A DOM call failed (element creation, class list, timers).
    Dom(String),
    /// A browser global (`window`, `document`) was unavailable.
    MissingGlobal(&'static str),
}

impl fmt::Display for RotatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Dom(msg) => write!(f, "DOM error: {msg}"),
            Self::MissingGlobal(name) => {
                write!(f, "browser global `{name}` is unavailable")
            }
        }
    }
}

impl std::error::Error for RotatorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RotatorError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(feature = "web")]
impl From<wasm_bindgen::JsValue> for RotatorError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
