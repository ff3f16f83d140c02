use serde::{Deserialize, Serialize};

/// Class names and attribute names shared with the host page's markup and
/// stylesheet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MarkupOptions {
    /// Marker class on the host element; the first match is mounted.
    pub container_class: String,
    /// Attribute on the host holding the comma-separated words.
    pub words_attribute: String,
    /// Tag name for newly created word elements.
    pub word_tag: String,
    /// Class of the word currently displayed.
    pub active_class: String,
    /// Class of a freshly inserted word, before it is activated.
    pub entering_class: String,
    /// Class of the outgoing word until it is removed.
    pub exiting_class: String,
    /// Class added once to the document root after startup.
    pub ready_class: String,
}

impl MarkupOptions {
    /// CSS selector for the host element.
    #[must_use]
    pub fn container_selector(&self) -> String {
        format!(".{}", self.container_class)
    }

    /// CSS selector for the displayed word.
    #[must_use]
    pub fn active_selector(&self) -> String {
        format!(".{}", self.active_class)
    }
}

impl Default for MarkupOptions {
    fn default() -> Self {
        Self {
            container_class: "word-rotator".to_owned(),
            words_attribute: "data-words".to_owned(),
            word_tag: "span".to_owned(),
            active_class: "is-active".to_owned(),
            entering_class: "is-entering".to_owned(),
            exiting_class: "is-exiting".to_owned(),
            ready_class: "is-ready".to_owned(),
        }
    }
}
