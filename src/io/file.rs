use std::fs;
use std::path::{Path, PathBuf};

use super::{StorageError, StorageKey, StoragePort};

/// On-disk adapter: one `<key>.json` file per storage key under a data
/// directory.
#[derive(Debug)]
pub struct DirStore {
    dir: PathBuf,
}

impl DirStore {
    /// Open (creating the directory if needed).
    pub fn open(dir: &Path) -> Result<Self, StorageError> {
        fs::create_dir_all(dir).map_err(StorageError::Clear)?;
        Ok(DirStore {
            dir: dir.to_path_buf(),
        })
    }

    fn path_for(&self, key: StorageKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.as_str()))
    }
}

impl StoragePort for DirStore {
    fn load(&self, key: StorageKey) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn save(&mut self, key: StorageKey, value: &str) -> Result<(), StorageError> {
        fs::write(self.path_for(key), value).map_err(|source| StorageError::Write {
            key: key.as_str(),
            source,
        })
    }

    fn remove(&mut self, key: StorageKey) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Remove {
                key: key.as_str(),
                source,
            }),
        }
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        for key in StorageKey::ALL {
            self.remove(key)?;
        }
        Ok(())
    }
}
