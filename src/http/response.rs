//! Response mapping.
//!
//! # Design Decisions
//! - Page loads that hit a store failure answer 500 with a generic body
//! - Form submissions that hit a store failure redirect to `/`, so the
//!   user just sees the unchanged list
//! - Redirects use 303 See Other (POST → GET)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};

use crate::lists::Destination;
use crate::store::StoreError;

/// Redirect to a list page.
pub fn redirect(destination: &Destination) -> Redirect {
    Redirect::to(&destination.path())
}

/// Store failure while loading a page.
#[derive(Debug)]
pub struct PageError(pub StoreError);

impl From<StoreError> for PageError {
    fn from(err: StoreError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "Failed to load list page");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

/// Store failure while handling a form submission.
#[derive(Debug)]
pub struct SubmitError(pub StoreError);

impl From<StoreError> for SubmitError {
    fn from(err: StoreError) -> Self {
        Self(err)
    }
}

impl IntoResponse for SubmitError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "Failed to apply submission");
        redirect(&Destination::Root).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::LOCATION;

    #[test]
    fn page_error_is_500() {
        let response = PageError(StoreError::Unavailable("down".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn submit_error_redirects_home() {
        let response = SubmitError(StoreError::Unavailable("down".into())).into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], "/");
    }

    #[test]
    fn redirect_encodes_list_name() {
        let response = redirect(&Destination::List("Home chores".into())).into_response();
        assert_eq!(response.headers()[LOCATION], "/Home%20chores");
    }
}
