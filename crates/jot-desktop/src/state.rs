//! Application state management
//!
//! Owned by the root `App` component and shared through a Dioxus context
//! provider. Writing a signal schedules the redraw.

use dioxus::prelude::*;

use jot_core::{Draft, NoteId, NotesStore, Theme};

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Note list and its persistence
    pub notes: Signal<NotesStore>,
    /// Composer text not yet added
    pub draft: Signal<Draft>,
    /// Light/dark presentation mode
    pub theme: Signal<Theme>,
}

impl AppState {
    /// Add the draft as a note and clear the composer.
    pub fn submit_draft(&mut self) {
        let mut draft = self.draft.write();
        if let Some(id) = self.notes.write().submit(&mut draft) {
            tracing::debug!("Added note {} from composer", id);
        }
    }

    /// Delete a note by id
    pub fn delete_note(&mut self, id: &NoteId) {
        self.notes.write().remove(id);
    }

    /// Replace the composer text
    pub fn set_draft(&mut self, text: String) {
        self.draft.write().set(text);
    }

    /// Flip between light and dark
    pub fn toggle_theme(&mut self) {
        self.theme.write().toggle();
    }
}
