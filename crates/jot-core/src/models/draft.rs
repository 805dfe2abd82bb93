//! Composer draft

use super::trim_note_text;

/// Text being composed but not yet committed as a note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    text: String,
}

impl Draft {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Replace the draft text with the latest input value.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether submitting would create nothing.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        trim_note_text(&self.text).is_empty()
    }

    /// Take the current text out, leaving the draft empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }
}
