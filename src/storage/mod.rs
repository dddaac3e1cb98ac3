pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::errors::AppError;

/// Local key-value persistence for the appointment log. Values are opaque
/// strings; a `set` replaces the whole value for the key in one write.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
}
