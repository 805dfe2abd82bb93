//! File-backed key-value storage: one `<key>.json` file per slot.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::{validate_key, KeyValueStorage};
use crate::error::Result;

/// Stores each slot as a file inside a data directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open storage rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        tracing::debug!("Opened file storage at {}", dir.display());
        Ok(Self { dir })
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        match fs::read_to_string(self.slot_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        let path = self.slot_path(key);
        let tmp_path = self.dir.join(format!(".{key}.json.tmp"));

        // Write the sibling first so a failed write leaves the old slot intact.
        let written = fs::write(&tmp_path, value).and_then(|()| fs::rename(&tmp_path, &path));
        if let Err(error) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(error.into());
        }

        tracing::debug!("Wrote {} bytes to slot '{}'", value.len(), key);
        Ok(())
    }
}
