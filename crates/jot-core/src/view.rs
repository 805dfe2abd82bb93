//! View models
//!
//! Plain data derived from the store, draft and theme. The desktop shell
//! renders these directly, which keeps the display rules testable without
//! a UI runtime.

use crate::format::{format_timestamp, iso_timestamp, relative_time};
use crate::models::{Draft, Note, NoteId, Theme};

/// Composer submit button state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComposerView {
    pub submit_disabled: bool,
    pub submit_hint: &'static str,
}

impl ComposerView {
    #[must_use]
    pub fn from_draft(draft: &Draft) -> Self {
        let submit_disabled = draft.is_blank();
        Self {
            submit_disabled,
            submit_hint: if submit_disabled {
                "Enter some text to add a note"
            } else {
                "Add note"
            },
        }
    }
}

/// Placeholder shown when there are no notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyStateView {
    pub icon: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub const EMPTY_STATE: EmptyStateView = EmptyStateView {
    icon: "📝",
    title: "No notes yet",
    subtitle: "Start by writing a note above.",
};

/// One rendered note card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCardView {
    pub id: NoteId,
    pub text: String,
    /// Human-readable creation time
    pub timestamp: String,
    /// Machine-readable creation time for the `datetime` attribute
    pub timestamp_iso: String,
    /// Age shown as a tooltip
    pub age: String,
}

impl NoteCardView {
    #[must_use]
    pub fn from_note(note: &Note, now_ms: i64) -> Self {
        Self {
            id: note.id.clone(),
            text: note.text.clone(),
            timestamp: format_timestamp(note.created_at),
            timestamp_iso: iso_timestamp(note.created_at),
            age: relative_time(note.created_at, now_ms),
        }
    }
}

/// What the list section shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteListView {
    Empty(EmptyStateView),
    Cards(Vec<NoteCardView>),
}

impl NoteListView {
    #[must_use]
    pub fn from_notes(notes: &[Note], now_ms: i64) -> Self {
        if notes.is_empty() {
            Self::Empty(EMPTY_STATE)
        } else {
            Self::Cards(
                notes
                    .iter()
                    .map(|note| NoteCardView::from_note(note, now_ms))
                    .collect(),
            )
        }
    }
}

/// Theme toggle button labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeToggleView {
    pub label: &'static str,
    pub aria_label: &'static str,
}

impl ThemeToggleView {
    #[must_use]
    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                label: "🌙 Dark",
                aria_label: "Switch to dark mode",
            },
            Theme::Dark => Self {
                label: "☀️ Light",
                aria_label: "Switch to light mode",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::repository::{NoteRepository, NOTES_KEY};
    use crate::storage::{KeyValueStorage, MemoryStorage};
    use crate::store::NotesStore;
    use crate::util::unix_millis_now;

    fn empty_store() -> (Arc<MemoryStorage>, NotesStore) {
        let storage = Arc::new(MemoryStorage::new());
        let store = NotesStore::load(NoteRepository::new(storage.clone()));
        (storage, store)
    }

    fn card_texts(view: &NoteListView) -> Vec<&str> {
        match view {
            NoteListView::Empty(_) => Vec::new(),
            NoteListView::Cards(cards) => cards.iter().map(|card| card.text.as_str()).collect(),
        }
    }

    #[test]
    fn fresh_session_shows_empty_state() {
        let (_, store) = empty_store();
        let view = NoteListView::from_notes(store.notes(), unix_millis_now());
        assert_eq!(view, NoteListView::Empty(EMPTY_STATE));
    }

    #[test]
    fn submitting_buy_milk_shows_one_card_and_disables_add() {
        let (_, mut store) = empty_store();
        let mut draft = Draft::new();

        draft.set("Buy milk");
        assert!(!ComposerView::from_draft(&draft).submit_disabled);

        store.submit(&mut draft);

        let view = NoteListView::from_notes(store.notes(), unix_millis_now());
        assert_eq!(card_texts(&view), vec!["Buy milk"]);

        let composer = ComposerView::from_draft(&draft);
        assert!(composer.submit_disabled);
        assert_eq!(composer.submit_hint, "Enter some text to add a note");
    }

    #[test]
    fn deleting_a_leaves_b() {
        let (_, mut store) = empty_store();
        store.add("A");
        store.add("B");

        let NoteListView::Cards(cards) = NoteListView::from_notes(store.notes(), unix_millis_now())
        else {
            panic!("expected cards");
        };
        let a_card = cards.iter().find(|card| card.text == "A").unwrap();
        store.remove(&a_card.id);

        let view = NoteListView::from_notes(store.notes(), unix_millis_now());
        assert_eq!(card_texts(&view), vec!["B"]);
    }

    #[test]
    fn corrupted_storage_renders_empty_state() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(NOTES_KEY, "[{\"broken\":").unwrap();
        let store = NotesStore::load(NoteRepository::new(storage));

        let view = NoteListView::from_notes(store.notes(), unix_millis_now());
        assert_eq!(view, NoteListView::Empty(EMPTY_STATE));
    }

    #[test]
    fn toggling_theme_twice_leaves_notes_alone() {
        let (_, mut store) = empty_store();
        store.add("keep me");
        let before = store.notes().to_vec();

        let mut theme = Theme::default();
        let original = theme.as_attr();
        theme.toggle();
        assert_eq!(ThemeToggleView::for_theme(theme).label, "☀️ Light");
        theme.toggle();

        assert_eq!(theme.as_attr(), original);
        assert_eq!(ThemeToggleView::for_theme(theme).aria_label, "Switch to dark mode");
        assert_eq!(store.notes(), before.as_slice());
    }

    #[test]
    fn card_carries_formatted_times() {
        let note = Note::from_parts("n1", "Hello", 1_700_000_000_000);
        let card = NoteCardView::from_note(&note, 1_700_000_000_000 + 2 * 3_600_000);
        assert_eq!(card.timestamp_iso, "2023-11-14T22:13:20.000Z");
        assert_eq!(card.age, "2h ago");
        assert!(!card.timestamp.is_empty());
    }

    #[test]
    fn card_with_bad_timestamp_renders_blank_time() {
        let note = Note::from_parts("n1", "Hello", i64::MAX);
        let card = NoteCardView::from_note(&note, 0);
        assert_eq!(card.timestamp, "");
        assert_eq!(card.timestamp_iso, "");
        assert_eq!(card.text, "Hello");
    }
}
