//! Core to-do types.
//!
//! # Data Layout
//! ```text
//! flat collection:  [Item, Item, ...]            (the "Today" list)
//! list collection:  [List { name, items: [Item, ...] }, ...]
//! ```
//!
//! # Design Decisions
//! - Lists own copies of their items; nothing is shared between lists
//! - The reserved list name is parsed into `ListTarget` at the edge
//! - Default items are names only; every seeding mints fresh ids

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Reserved list key that selects the flat item collection.
pub const DEFAULT_LIST_KEY: &str = "Today";

/// Title shown above the flat item collection.
pub const DEFAULT_LIST_TITLE: &str = "To Do List";

/// Names of the items every new list starts with, in display order.
pub const DEFAULT_ITEM_NAMES: [&str; 3] = [
    "Welcome to your todolist",
    "Hit the + button to add a new item.",
    "Hit the checkbox to delete an item.",
];

/// Identifier of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Generate a new random item ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ItemId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

/// Identifier of a list document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(Uuid);

impl ListId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ListId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
}

impl Item {
    /// Create an item with a freshly generated ID.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
        }
    }
}

/// Fresh copies of the default items.
pub fn default_items() -> Vec<Item> {
    DEFAULT_ITEM_NAMES.iter().map(|name| Item::new(*name)).collect()
}

/// A named list owning its items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub id: ListId,
    pub name: String,
    pub items: Vec<Item>,
}

impl List {
    /// Create a list seeded with the default items.
    pub fn seeded(name: impl Into<String>) -> Self {
        Self {
            id: ListId::new(),
            name: name.into(),
            items: default_items(),
        }
    }
}

/// Canonical form of a user-supplied list name.
///
/// The first character is upper-cased and the rest lower-cased, so
/// `work`, `WORK` and `Work` all map to `Work`.
pub fn canonical_name(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Where an add or delete submission is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListTarget {
    /// The flat item collection.
    Default,
    /// A list document, looked up by exact name.
    Named(String),
}

impl ListTarget {
    /// Parse the list field of a submitted form.
    pub fn from_field(value: &str) -> Self {
        if value == DEFAULT_LIST_KEY {
            Self::Default
        } else {
            Self::Named(value.to_string())
        }
    }

    /// Value to put in a form field so that submission comes back here.
    pub fn as_field(&self) -> &str {
        match self {
            Self::Default => DEFAULT_LIST_KEY,
            Self::Named(name) => name,
        }
    }

    /// Heading shown above the list.
    pub fn title(&self) -> &str {
        match self {
            Self::Default => DEFAULT_LIST_TITLE,
            Self::Named(name) => name,
        }
    }

    /// Short label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Named(_) => "named",
        }
    }
}
