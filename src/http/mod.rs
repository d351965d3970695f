//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware: request ID, tracing, limits, metrics)
//!     → request.rs (form extraction)
//!     → handlers.rs (call list service)
//!     → response.rs (render page, redirect, or map store failure)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{DeleteItemForm, NewItemForm, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
