//! jot-core - Core library for Jot
//!
//! This crate contains the note model, the persistence adapter, and the
//! state container used by the Jot desktop shell. It has no UI dependency;
//! the view models in [`view`] are plain data the shell renders.

pub mod error;
pub mod format;
pub mod id;
pub mod models;
pub mod repository;
pub mod storage;
pub mod store;
pub mod util;
pub mod view;

pub use error::{Error, Result};
pub use models::{Draft, Note, NoteId, Theme};
pub use repository::NoteRepository;
pub use store::NotesStore;
