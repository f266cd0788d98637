//! Route definitions for the genre pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::genre;
use crate::state::AppState;

/// Genre routes, mounted under `/catalog`.
///
/// ```text
/// GET  /genres              -> list
/// GET  /genre/create        -> create_form
/// POST /genre/create        -> create
/// GET  /genre/{id}          -> detail
/// GET  /genre/{id}/delete   -> delete_form
/// POST /genre/{id}/delete   -> delete
/// GET  /genre/{id}/update   -> update_form
/// POST /genre/{id}/update   -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/genres", get(genre::list))
        .route("/genre/create", get(genre::create_form).post(genre::create))
        .route("/genre/{id}", get(genre::detail))
        .route(
            "/genre/{id}/delete",
            get(genre::delete_form).post(genre::delete),
        )
        .route(
            "/genre/{id}/update",
            get(genre::update_form).post(genre::update),
        )
}
