//! Document storage subsystem.
//!
//! # Data Flow
//! ```text
//! list service
//!     → TodoStore (trait object shared via Arc)
//!     → memory.rs (collections behind an async RwLock)
//!     → optional JSON snapshot on disk after every write
//! ```
//!
//! # Design Decisions
//! - Each trait method is one atomic operation on one collection
//! - No uniqueness constraint on list names; lookups return the first match
//! - "Not found" is a normal result (`Option`/`bool`), never an error

pub mod memory;

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

use crate::model::{Item, ItemId, List};

pub use memory::MemoryStore;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the snapshot file failed.
    #[error("store I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot contents could not be encoded or decoded.
    #[error("store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backend cannot serve requests right now.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage for the flat item collection and the list collection.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// All items of the flat collection, in insertion order.
    async fn find_items(&self) -> StoreResult<Vec<Item>>;

    /// Append items to the flat collection.
    async fn insert_items(&self, items: Vec<Item>) -> StoreResult<()>;

    /// Remove an item from the flat collection. Returns whether it existed.
    async fn remove_item(&self, id: ItemId) -> StoreResult<bool>;

    /// First list whose name equals `name` exactly.
    async fn find_list(&self, name: &str) -> StoreResult<Option<List>>;

    /// Add a new list document.
    async fn insert_list(&self, list: List) -> StoreResult<()>;

    /// Replace the stored list with the same ID. Returns whether it existed.
    async fn save_list(&self, list: &List) -> StoreResult<bool>;

    /// Remove an embedded item from the first list named `name` in one step.
    ///
    /// Returns the list as it was before the update, or `None` when no list
    /// has that name.
    async fn pull_list_item(&self, name: &str, id: ItemId) -> StoreResult<Option<List>>;
}
