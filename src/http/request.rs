//! Request extraction.
//!
//! # Design Decisions
//! - Missing form fields deserialize as empty strings, so a malformed
//!   submission still reaches the handler and gets redirected
//! - Request ID added as early as possible for tracing

use axum::http::HeaderName;
use serde::Deserialize;

/// Header carrying the per-request correlation ID.
pub static X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Body of `POST /`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewItemForm {
    /// Text of the new item.
    #[serde(rename = "newItem")]
    pub new_item: String,

    /// Target list key (`Today` or a list name).
    pub list: String,
}

/// Body of `POST /delete`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DeleteItemForm {
    /// ID of the checked item.
    pub checkbox: String,

    /// Target list key (`Today` or a list name).
    #[serde(rename = "listName")]
    pub list_name: String,
}
