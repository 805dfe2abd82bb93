//! Notes store
//!
//! The single source of truth for the note list. Every effective mutation
//! rewrites the persisted list; write failures are logged and otherwise
//! ignored so the in-memory list stays authoritative for the session.

use crate::models::{Draft, Note, NoteId};
use crate::repository::NoteRepository;

/// Note list plus the repository it is mirrored to.
#[derive(Clone)]
pub struct NotesStore {
    notes: Vec<Note>,
    repository: NoteRepository,
}

impl NotesStore {
    /// Load the persisted list. Never fails; bad data yields an empty store.
    pub fn load(repository: NoteRepository) -> Self {
        let notes = repository.load();
        tracing::info!("Loaded {} notes", notes.len());
        Self { notes, repository }
    }

    /// Notes, newest first.
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Look up a note by id
    #[must_use]
    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| &note.id == id)
    }

    /// Add a note from raw input and persist the list.
    ///
    /// Blank input is a no-op and writes nothing. The new note is prepended
    /// and returned.
    pub fn add(&mut self, raw: &str) -> Option<&Note> {
        let mut note = Note::new(raw)?;
        while self.get(&note.id).is_some() {
            note.id = NoteId::new();
        }

        tracing::info!("Created note {}", note.id);
        self.notes.insert(0, note);
        self.persist();
        self.notes.first()
    }

    /// Remove the note with `id` and persist the list.
    ///
    /// Returns `false` (and writes nothing) when no such note exists.
    pub fn remove(&mut self, id: &NoteId) -> bool {
        let Some(index) = self.notes.iter().position(|note| &note.id == id) else {
            tracing::debug!("Delete ignored, no note {}", id);
            return false;
        };

        self.notes.remove(index);
        tracing::info!("Deleted note {}", id);
        self.persist();
        true
    }

    /// Submit the composer draft: add its text, then clear it either way.
    pub fn submit(&mut self, draft: &mut Draft) -> Option<NoteId> {
        let text = draft.take();
        self.add(&text).map(|note| note.id.clone())
    }

    fn persist(&self) {
        if let Err(error) = self.repository.save(&self.notes) {
            tracing::warn!("Failed to persist notes, keeping in-memory list: {}", error);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::{Error, Result};
    use crate::repository::NOTES_KEY;
    use crate::storage::{KeyValueStorage, MemoryStorage};

    /// Backend that counts writes and can be told to fail them.
    #[derive(Default)]
    struct CountingStorage {
        inner: MemoryStorage,
        writes: AtomicUsize,
        fail_writes: bool,
    }

    impl KeyValueStorage for CountingStorage {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<()> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            if self.fail_writes {
                return Err(Error::Storage("quota exceeded".to_string()));
            }
            self.inner.set(key, value)
        }
    }

    fn store_with(storage: &Arc<CountingStorage>) -> NotesStore {
        NotesStore::load(NoteRepository::new(storage.clone()))
    }

    fn texts(store: &NotesStore) -> Vec<&str> {
        store.notes().iter().map(|note| note.text.as_str()).collect()
    }

    #[test]
    fn add_grows_list_by_one_with_trimmed_text() {
        let storage = Arc::new(CountingStorage::default());
        let mut store = store_with(&storage);

        let note = store.add("  Buy milk  ").cloned().unwrap();
        assert_eq!(note.text, "Buy milk");
        assert_eq!(store.len(), 1);
        assert_eq!(storage.writes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn add_blank_is_noop_without_write() {
        let storage = Arc::new(CountingStorage::default());
        let mut store = store_with(&storage);
        store.add("keep");

        for blank in ["", "   ", "\n\t "] {
            assert!(store.add(blank).is_none());
        }
        assert_eq!(texts(&store), vec!["keep"]);
        assert_eq!(storage.writes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn newest_first() {
        let storage = Arc::new(CountingStorage::default());
        let mut store = store_with(&storage);
        store.add("a");
        store.add("b");
        store.add("c");
        assert_eq!(texts(&store), vec!["c", "b", "a"]);
    }

    #[test]
    fn remove_present_id() {
        let storage = Arc::new(CountingStorage::default());
        let mut store = store_with(&storage);
        let id = store.add("A").unwrap().id.clone();
        store.add("B");

        assert!(store.remove(&id));
        assert_eq!(store.len(), 1);
        assert!(store.get(&id).is_none());
        assert_eq!(storage.writes.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn remove_absent_id_is_noop_without_write() {
        let storage = Arc::new(CountingStorage::default());
        let mut store = store_with(&storage);
        store.add("A");

        assert!(!store.remove(&NoteId::from("missing")));
        assert_eq!(texts(&store), vec!["A"]);
        assert_eq!(storage.writes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn delete_first_of_two_leaves_second() {
        let storage = Arc::new(CountingStorage::default());
        let mut store = store_with(&storage);
        store.add("A");
        store.add("B");

        let a_id = store
            .notes()
            .iter()
            .find(|note| note.text == "A")
            .map(|note| note.id.clone())
            .unwrap();
        store.remove(&a_id);

        assert_eq!(texts(&store), vec!["B"]);
    }

    #[test]
    fn mutations_survive_reload() {
        let storage = Arc::new(CountingStorage::default());
        let mut store = store_with(&storage);
        store.add("first");
        store.add("second");
        let before = store.notes().to_vec();

        let reloaded = store_with(&storage);
        assert_eq!(reloaded.notes(), before.as_slice());
    }

    #[test]
    fn write_failures_keep_memory_state() {
        let storage = Arc::new(CountingStorage {
            fail_writes: true,
            ..CountingStorage::default()
        });
        let mut store = store_with(&storage);

        assert!(store.add("still here").is_some());
        assert_eq!(texts(&store), vec!["still here"]);
        assert_eq!(storage.inner.get(NOTES_KEY).unwrap(), None);

        let id = store.notes()[0].id.clone();
        assert!(store.remove(&id));
        assert!(store.is_empty());
    }

    #[test]
    fn corrupted_storage_starts_empty() {
        let storage = Arc::new(CountingStorage::default());
        storage.inner.set(NOTES_KEY, "{{{ definitely not notes").unwrap();

        let store = store_with(&storage);
        assert!(store.is_empty());
        assert_eq!(storage.writes.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn submit_clears_draft_even_when_blank() {
        let storage = Arc::new(CountingStorage::default());
        let mut store = store_with(&storage);

        let mut draft = Draft::new();
        draft.set("   ");
        assert!(store.submit(&mut draft).is_none());
        assert_eq!(draft.as_str(), "");

        draft.set("Buy milk");
        let id = store.submit(&mut draft).unwrap();
        assert!(draft.is_blank());
        assert_eq!(store.get(&id).map(|note| note.text.as_str()), Some("Buy milk"));
    }

    #[test]
    fn loaded_ids_are_never_reused() {
        let storage = Arc::new(CountingStorage::default());
        let mut store = store_with(&storage);
        for i in 0..50 {
            store.add(&format!("note {i}"));
        }

        let mut ids: Vec<_> = store.notes().iter().map(|note| note.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }
}
