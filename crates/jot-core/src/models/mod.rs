//! Data models for Jot

mod draft;
mod note;
mod theme;

pub use draft::Draft;
pub use note::{
    is_normalized_note_text, normalize_note_text, trim_note_text, Note, NoteId, MAX_NOTE_CHARS,
};
pub use theme::Theme;
