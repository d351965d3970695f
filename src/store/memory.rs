//! In-process document store with optional JSON snapshot persistence.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

use crate::model::{Item, ItemId, List};
use crate::store::{StoreError, StoreResult, TodoStore};

/// Everything the store holds, as written to the snapshot file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct Collections {
    items: Vec<Item>,
    lists: Vec<List>,
}

/// Document store keeping both collections in memory.
///
/// With a snapshot path configured, the full state is rewritten to disk
/// on every mutation while the write lock is still held, so snapshots land
/// in the same order as the writes they capture. A mutation becomes
/// visible only after its snapshot is written.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<Collections>,
    snapshot_path: Option<PathBuf>,
}

impl MemoryStore {
    /// Create an empty store that is never written to disk.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a store backed by a snapshot file, loading it if it exists.
    pub async fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();

        let collections = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice::<Collections>(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Collections::default(),
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        tracing::info!(
            path = %path.display(),
            items = collections.items.len(),
            lists = collections.lists.len(),
            "Loaded store snapshot"
        );

        Ok(Self {
            collections: RwLock::new(collections),
            snapshot_path: Some(path),
        })
    }

    /// Path of the snapshot file, if any.
    pub fn snapshot_path(&self) -> Option<&Path> {
        self.snapshot_path.as_deref()
    }

    async fn persist(&self, collections: &Collections) -> StoreResult<()> {
        let Some(path) = &self.snapshot_path else {
            return Ok(());
        };

        let bytes = serde_json::to_vec_pretty(collections)?;

        // Write beside the target, then rename over it.
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|source| StoreError::Io { path: tmp.clone(), source })?;
        tokio::fs::rename(&tmp, path)
            .await
            .map_err(|source| StoreError::Io { path: path.clone(), source })?;

        tracing::trace!(path = %path.display(), bytes = bytes.len(), "Store snapshot written");
        Ok(())
    }

    /// Apply `change` to a copy of the collections and keep the copy only
    /// once its snapshot is on disk.
    ///
    /// `change` returns the operation's result and whether anything changed.
    /// A failed snapshot write leaves the visible state untouched.
    async fn commit<T, F>(&self, change: F) -> StoreResult<T>
    where
        F: FnOnce(&mut Collections) -> (T, bool) + Send,
        T: Send,
    {
        let mut current = self.collections.write().await;
        let mut next = current.clone();
        let (result, changed) = change(&mut next);
        if changed {
            self.persist(&next).await?;
            *current = next;
        }
        Ok(result)
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn find_items(&self) -> StoreResult<Vec<Item>> {
        Ok(self.collections.read().await.items.clone())
    }

    async fn insert_items(&self, items: Vec<Item>) -> StoreResult<()> {
        self.commit(|next| {
            next.items.extend(items);
            ((), true)
        })
        .await
    }

    async fn remove_item(&self, id: ItemId) -> StoreResult<bool> {
        self.commit(|next| {
            let before = next.items.len();
            next.items.retain(|item| item.id != id);
            let removed = next.items.len() != before;
            (removed, removed)
        })
        .await
    }

    async fn find_list(&self, name: &str) -> StoreResult<Option<List>> {
        let collections = self.collections.read().await;
        Ok(collections.lists.iter().find(|list| list.name == name).cloned())
    }

    async fn insert_list(&self, list: List) -> StoreResult<()> {
        self.commit(|next| {
            next.lists.push(list);
            ((), true)
        })
        .await
    }

    async fn save_list(&self, list: &List) -> StoreResult<bool> {
        self.commit(|next| match next.lists.iter_mut().find(|stored| stored.id == list.id) {
            Some(stored) => {
                *stored = list.clone();
                (true, true)
            }
            None => (false, false),
        })
        .await
    }

    async fn pull_list_item(&self, name: &str, id: ItemId) -> StoreResult<Option<List>> {
        self.commit(|next| {
            let Some(list) = next.lists.iter_mut().find(|list| list.name == name) else {
                return (None, false);
            };

            let before = list.clone();
            list.items.retain(|item| item.id != id);
            let changed = list.items.len() != before.items.len();
            (Some(before), changed)
        })
        .await
    }
}
