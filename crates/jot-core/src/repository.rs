//! Note list persistence
//!
//! The whole list is kept as one JSON array in the `notes` slot and
//! rewritten on every change. Reads never fail: anything that does not
//! decode as a list of notes is treated as an absent slot.

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::Result;
use crate::models::{is_normalized_note_text, Note};
use crate::storage::KeyValueStorage;

/// Storage key holding the serialized note list.
pub const NOTES_KEY: &str = "notes";

/// Reads and writes the note list through a key-value backend.
#[derive(Clone)]
pub struct NoteRepository {
    storage: Arc<dyn KeyValueStorage>,
}

impl NoteRepository {
    /// Create a repository over the given backend
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Load the persisted list, newest first.
    ///
    /// Returns an empty list when the slot is missing, empty, unreadable, or
    /// holds data of the wrong shape.
    pub fn load(&self) -> Vec<Note> {
        let raw = match self.storage.get(NOTES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("No stored notes found");
                return Vec::new();
            }
            Err(error) => {
                tracing::warn!("Failed to read stored notes: {}", error);
                return Vec::new();
            }
        };

        if raw.trim().is_empty() {
            return Vec::new();
        }

        match serde_json::from_str::<Vec<Note>>(&raw) {
            Ok(notes) if notes.iter().all(|note| is_normalized_note_text(&note.text)) => {
                dedupe_by_id(notes)
            }
            Ok(_) => {
                tracing::warn!("Stored notes contain blank, padded, or over-long text");
                Vec::new()
            }
            Err(error) => {
                tracing::warn!("Stored notes are not a valid note list: {}", error);
                Vec::new()
            }
        }
    }

    /// Serialize and write the full list.
    pub fn save(&self, notes: &[Note]) -> Result<()> {
        let serialized = serde_json::to_string(notes)?;
        self.storage.set(NOTES_KEY, &serialized)
    }
}

fn dedupe_by_id(notes: Vec<Note>) -> Vec<Note> {
    let total = notes.len();
    let mut seen = HashSet::with_capacity(total);
    let unique: Vec<Note> = notes
        .into_iter()
        .filter(|note| seen.insert(note.id.clone()))
        .collect();

    if unique.len() != total {
        tracing::warn!(
            "Dropped {} stored notes with duplicate ids",
            total - unique.len()
        );
    }
    unique
}
