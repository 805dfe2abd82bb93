//! Key-value storage backends.
//!
//! A backend holds string values under short string keys with synchronous
//! get/set, the shape of a browser's local storage. The note list lives in
//! a single slot; see [`crate::repository`].

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::{Error, Result};

/// Trait for key-value slot storage
pub trait KeyValueStorage {
    /// Read the value stored under `key`, or `None` when the slot is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Reject keys that cannot be used as a slot name.
pub(crate) fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidInput(format!("invalid storage key '{key}'")))
    }
}
