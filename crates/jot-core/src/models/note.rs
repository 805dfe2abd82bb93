//! Note model

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::id::generate_note_id;
use crate::util::unix_millis_now;

/// Maximum number of characters kept in a note's text.
pub const MAX_NOTE_CHARS: usize = 1000;

/// An opaque, unique note identifier.
///
/// Usually a random UUID, but stored lists may carry other string ids, so
/// the value is never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Create a fresh unique note ID
    #[must_use]
    pub fn new() -> Self {
        generate_note_id()
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for NoteId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for NoteId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A note in the list.
///
/// Serialized as `{ "id": ..., "text": ..., "createdAt": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique identifier
    pub id: NoteId,
    /// Trimmed, non-empty text
    pub text: String,
    /// Creation timestamp (Unix ms)
    pub created_at: i64,
}

impl Note {
    /// Create a new note stamped with a fresh id and the current time.
    ///
    /// Returns `None` when `text` is blank after trimming.
    #[must_use]
    pub fn new(text: &str) -> Option<Self> {
        let text = normalize_note_text(text)?;
        Some(Self {
            id: NoteId::new(),
            text,
            created_at: unix_millis_now(),
        })
    }

    /// Build a note from already-known parts.
    #[must_use]
    pub fn from_parts(id: impl Into<NoteId>, text: impl Into<String>, created_at: i64) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            created_at,
        }
    }
}

/// Strip leading and trailing whitespace, including byte order marks.
pub fn trim_note_text(raw: &str) -> &str {
    raw.trim_matches(is_trimmable)
}

fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Whether stored text is already in normalized form.
pub fn is_normalized_note_text(text: &str) -> bool {
    normalize_note_text(text).as_deref() == Some(text)
}

/// Trim raw input and cap it at [`MAX_NOTE_CHARS`] characters.
///
/// Returns `None` when nothing but whitespace remains.
pub fn normalize_note_text(raw: &str) -> Option<String> {
    let trimmed = trim_note_text(raw);
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.chars().count() <= MAX_NOTE_CHARS {
        return Some(trimmed.to_string());
    }

    let capped: String = trimmed.chars().take(MAX_NOTE_CHARS).collect();
    Some(capped.trim_end_matches(is_trimmable).to_string())
}
