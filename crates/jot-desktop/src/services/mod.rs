//! Application services
//!
//! Opening the note storage for the app.

mod storage;

pub use storage::open_note_repository;
