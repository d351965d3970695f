//! List resolution, default-list bootstrap, and item mutations.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::sync::Arc;

use crate::model::{
    canonical_name, default_items, Item, ItemId, List, ListTarget, DEFAULT_LIST_KEY,
};
use crate::observability::metrics;
use crate::store::{StoreResult, TodoStore};

/// Characters escaped when a list name becomes a path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Page a mutation should redirect to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// The default list at `/`.
    Root,
    /// A named list at `/{name}`.
    List(String),
}

impl Destination {
    /// URL path of the destination.
    pub fn path(&self) -> String {
        match self {
            Self::Root => "/".to_string(),
            Self::List(name) => format!("/{}", utf8_percent_encode(name, PATH_SEGMENT)),
        }
    }
}

/// Outcome of loading the default list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultView {
    /// The flat collection was empty and has just been seeded.
    Seeded,
    /// Items to render, in insertion order.
    Items(Vec<Item>),
}

/// Outcome of resolving a list name from a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListResolution {
    /// The list already existed.
    Found(List),
    /// The list was created with the default items.
    Created(List),
    /// The name is the default list's key; no list document is involved.
    Reserved,
}

impl ListResolution {
    pub fn list(&self) -> Option<&List> {
        match self {
            Self::Found(list) | Self::Created(list) => Some(list),
            Self::Reserved => None,
        }
    }
}

/// Operations on the flat collection and named lists.
#[derive(Clone)]
pub struct ListService {
    store: Arc<dyn TodoStore>,
}

impl ListService {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    /// Load the flat collection, seeding it with the defaults when empty.
    pub async fn load_default(&self) -> StoreResult<DefaultView> {
        let items = self.store.find_items().await?;
        if !items.is_empty() {
            return Ok(DefaultView::Items(items));
        }

        self.store.insert_items(default_items()).await?;
        tracing::info!("Seeded default items into the flat collection");
        Ok(DefaultView::Seeded)
    }

    /// Find the list for a raw URL segment, creating it if absent.
    ///
    /// Lookup and creation are separate store calls, so two first visits
    /// racing on the same name can both create a list. Later lookups
    /// return whichever was stored first.
    ///
    /// The default list's key never becomes a list document, since forms
    /// on such a page would submit into the flat collection.
    pub async fn resolve(&self, raw: &str) -> StoreResult<ListResolution> {
        let name = canonical_name(raw);
        if name == DEFAULT_LIST_KEY {
            return Ok(ListResolution::Reserved);
        }

        if let Some(list) = self.store.find_list(&name).await? {
            return Ok(ListResolution::Found(list));
        }

        let list = List::seeded(name);
        self.store.insert_list(list.clone()).await?;
        metrics::record_list_created();
        tracing::info!(list = %list.name, list_id = %list.id, "Created list");
        Ok(ListResolution::Created(list))
    }

    /// Add an item to the target list.
    ///
    /// Submissions for a named list that does not exist are dropped.
    pub async fn add_item(&self, target: &ListTarget, name: String) -> StoreResult<Destination> {
        let item = Item::new(name);

        match target {
            ListTarget::Default => {
                tracing::debug!(item_id = %item.id, "Adding item to default list");
                self.store.insert_items(vec![item]).await?;
                metrics::record_item_created(target);
                Ok(Destination::Root)
            }
            ListTarget::Named(list_name) => {
                let Some(mut list) = self.store.find_list(list_name).await? else {
                    tracing::warn!(list = %list_name, "Add to unknown list dropped");
                    return Ok(Destination::Root);
                };

                tracing::debug!(item_id = %item.id, list = %list_name, "Adding item to list");
                list.items.push(item);
                if !self.store.save_list(&list).await? {
                    tracing::warn!(list = %list_name, "List vanished before save; add dropped");
                    return Ok(Destination::Root);
                }
                metrics::record_item_created(target);
                Ok(Destination::List(list_name.clone()))
            }
        }
    }

    /// Delete an item from the target list.
    ///
    /// Unknown item IDs are a no-op. Deleting from a list that does not
    /// exist lands on the default list.
    pub async fn delete_item(&self, target: &ListTarget, id: ItemId) -> StoreResult<Destination> {
        match target {
            ListTarget::Default => {
                let removed = self.store.remove_item(id).await?;
                if removed {
                    metrics::record_item_deleted(target);
                }
                tracing::debug!(item_id = %id, removed, "Deleted item from default list");
                Ok(Destination::Root)
            }
            ListTarget::Named(list_name) => match self.store.pull_list_item(list_name, id).await? {
                Some(before) => {
                    let removed = before.items.iter().any(|item| item.id == id);
                    if removed {
                        metrics::record_item_deleted(target);
                    }
                    tracing::debug!(item_id = %id, list = %list_name, removed, "Deleted item from list");
                    Ok(Destination::List(list_name.clone()))
                }
                None => {
                    tracing::warn!(list = %list_name, item_id = %id, "Delete from unknown list");
                    Ok(Destination::Root)
                }
            },
        }
    }
}
