//! Route handlers.
//!
//! | Method | Path        | Handler              |
//! |--------|-------------|----------------------|
//! | GET    | `/`         | `show_default_list`  |
//! | GET    | `/{name}`   | `show_list`          |
//! | POST   | `/`         | `add_item`           |
//! | POST   | `/delete`   | `delete_item`        |

use axum::{
    extract::{Form, Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::http::request::{DeleteItemForm, NewItemForm};
use crate::http::response::{redirect, PageError, SubmitError};
use crate::http::server::AppState;
use crate::lists::{DefaultView, Destination, ListResolution};
use crate::model::{ItemId, ListTarget};
use crate::views::{render_list, ListPage};

/// Render the flat collection, seeding it on first visit.
pub async fn show_default_list(State(state): State<AppState>) -> Result<Response, PageError> {
    match state.lists.load_default().await? {
        DefaultView::Seeded => Ok(redirect(&Destination::Root).into_response()),
        DefaultView::Items(items) => {
            let target = ListTarget::Default;
            let page = ListPage::new(&target, &items);
            Ok(Html(render_list(&page)).into_response())
        }
    }
}

/// Render a named list, creating it on first visit.
pub async fn show_list(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, PageError> {
    match state.lists.resolve(&name).await? {
        ListResolution::Created(list) => {
            Ok(redirect(&Destination::List(list.name)).into_response())
        }
        ListResolution::Found(list) => {
            let target = ListTarget::Named(list.name);
            let page = ListPage::new(&target, &list.items);
            Ok(Html(render_list(&page)).into_response())
        }
        ListResolution::Reserved => Ok(redirect(&Destination::Root).into_response()),
    }
}

/// Handle the "+" form.
pub async fn add_item(
    State(state): State<AppState>,
    Form(form): Form<NewItemForm>,
) -> Result<Redirect, SubmitError> {
    let target = ListTarget::from_field(&form.list);
    let destination = state.lists.add_item(&target, form.new_item).await?;
    Ok(redirect(&destination))
}

/// Handle a checked checkbox.
pub async fn delete_item(
    State(state): State<AppState>,
    Form(form): Form<DeleteItemForm>,
) -> Result<Redirect, SubmitError> {
    let target = ListTarget::from_field(&form.list_name);

    let id: ItemId = match form.checkbox.parse() {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!(checkbox = %form.checkbox, error = %e, "Invalid item ID in delete form");
            return Ok(redirect(&Destination::Root));
        }
    };

    let destination = state.lists.delete_item(&target, id).await?;
    Ok(redirect(&destination))
}
