pub mod file;
pub mod keys;
pub mod memory;
pub mod session;

pub use file::DirStore;
pub use keys::StorageKey;
pub use memory::MemStore;
pub use session::Session;

/// Error type for storage adapters
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("could not write key {key}: {source}")]
    Write {
        key: &'static str,
        source: std::io::Error,
    },
    #[error("could not remove key {key}: {source}")]
    Remove {
        key: &'static str,
        source: std::io::Error,
    },
    #[error("could not clear storage: {0}")]
    Clear(std::io::Error),
    #[error("could not encode key {key}: {source}")]
    Encode {
        key: &'static str,
        source: serde_json::Error,
    },
}

/// Durable key-value port the store persists through. Reads never fail
/// visibly: absence and decode problems both surface as `None`, and the
/// session falls back to defaults.
pub trait StoragePort {
    fn load(&self, key: StorageKey) -> Option<String>;
    fn save(&mut self, key: StorageKey, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: StorageKey) -> Result<(), StorageError>;
    fn clear(&mut self) -> Result<(), StorageError>;
}
