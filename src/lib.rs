//! Multi-list to-do service.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶  http::server  ──▶  http::handlers  ──▶  lists::service  ──▶  store
//!                       (middleware)        (forms, paths)      (resolve, seed,      (flat items,
//!                                                                add, delete)         lists)
//!     Client Response
//!     ◀──────────────  redirect (mutations)  or  views::render_list (pages)
//!
//!     Cross-cutting: config, observability (tracing + metrics), lifecycle
//! ```
//!
//! The default list ("Today") lives in the flat item collection; every
//! other list is a document that owns its items.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod lists;
pub mod model;
pub mod observability;
pub mod store;
pub mod views;

pub use config::TodoConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use store::{MemoryStore, TodoStore};
