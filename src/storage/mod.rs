//! Key-value persistence layer.
//!
//! The core managers never touch SQLite directly: they get a [`KvStore`]
//! injected at construction. Production uses [`sqlite::SqliteStore`]; tests
//! and the degraded no-storage mode use [`memory::MemStore`].

pub mod memory;
pub mod sqlite;

use crate::errors::AppResult;
use crate::ui::messages;

pub use memory::MemStore;
pub use sqlite::SqliteStore;

/// String-keyed, string-valued store. Values are JSON documents; every
/// write replaces the whole value for its key, so a failed write never
/// leaves a partially updated record behind.
pub trait KvStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&mut self, key: &str) -> AppResult<()>;
    /// All keys starting with `prefix`, in ascending key order.
    fn keys_with_prefix(&self, prefix: &str) -> AppResult<Vec<String>>;
}

/// Open the SQLite store at `path`, falling back to an in-memory store
/// (with a warning) when the database cannot be opened. State then lives
/// only for the duration of the process, but no command crashes on a
/// missing or locked database.
pub fn open_default(path: &str) -> Box<dyn KvStore> {
    match SqliteStore::open(path) {
        Ok(store) => Box::new(store),
        Err(e) => {
            messages::warning(format!(
                "Cannot open database '{}' ({}); continuing in memory only",
                path, e
            ));
            Box::new(MemStore::new())
        }
    }
}
