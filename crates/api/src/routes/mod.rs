pub mod author;
pub mod genre;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/catalog` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /authors                  author list
/// /author/create            blank form (GET), create (POST)
/// /author/{id}              author detail
/// /author/{id}/delete       confirmation (GET), delete (POST)
/// /author/{id}/update       prefilled form (GET), update (POST)
///
/// /genres                   genre list
/// /genre/create             blank form (GET), create (POST)
/// /genre/{id}               genre detail
/// /genre/{id}/delete        confirmation (GET), delete (POST)
/// /genre/{id}/update        prefilled form (GET), update (POST)
/// ```
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .merge(author::router())
        .merge(genre::router())
}
