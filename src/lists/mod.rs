//! List operations behind the HTTP handlers.
//!
//! # Data Flow
//! ```text
//! handler (parsed form / path)
//!     → service.rs (resolve, bootstrap, add, delete)
//!     → TodoStore
//!     → outcome: page to render, or Destination to redirect to
//! ```
//!
//! # Design Decisions
//! - The service never builds HTTP responses; handlers map outcomes
//! - Read-modify-write sequences are not atomic (last write wins)

pub mod service;

pub use service::{DefaultView, Destination, ListResolution, ListService};
