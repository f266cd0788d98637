//! Route definitions for the author pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::author;
use crate::state::AppState;

/// Author routes, mounted under `/catalog`.
///
/// ```text
/// GET  /authors              -> list
/// GET  /author/create        -> create_form
/// POST /author/create        -> create
/// GET  /author/{id}          -> detail
/// GET  /author/{id}/delete   -> delete_form
/// POST /author/{id}/delete   -> delete
/// GET  /author/{id}/update   -> update_form
/// POST /author/{id}/update   -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/authors", get(author::list))
        .route(
            "/author/create",
            get(author::create_form).post(author::create),
        )
        .route("/author/{id}", get(author::detail))
        .route(
            "/author/{id}/delete",
            get(author::delete_form).post(author::delete),
        )
        .route(
            "/author/{id}/update",
            get(author::update_form).post(author::update),
        )
}
