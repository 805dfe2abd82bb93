//! Note storage bootstrap

use std::path::Path;
use std::sync::Arc;

use jot_core::storage::{FileStorage, MemoryStorage};
use jot_core::NoteRepository;

/// Open the file-backed repository in `data_dir`.
///
/// Falls back to in-memory storage when the directory cannot be created, so
/// the app stays usable for the session.
pub fn open_note_repository(data_dir: &Path) -> NoteRepository {
    match FileStorage::open(data_dir) {
        Ok(storage) => NoteRepository::new(Arc::new(storage)),
        Err(error) => {
            tracing::warn!(
                "Failed to open storage at {}: {}. Notes will not persist.",
                data_dir.display(),
                error
            );
            NoteRepository::new(Arc::new(MemoryStorage::new()))
        }
    }
}
