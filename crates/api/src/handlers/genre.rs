//! Handlers for the genre pages.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use librarium_core::error::CoreError;
use librarium_core::forms::GenreForm;
use librarium_core::types::EntityId;
use librarium_db::models::genre::Genre;
use librarium_db::stores::book_store::BookStore;
use librarium_db::stores::genre_store::GenreStore;

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views::{
    GenreDeleteView, GenreDetailView, GenreFormValues, GenreFormView, GenreListView,
};

/// GET /catalog/genres
pub async fn list(State(state): State<AppState>) -> AppResult<Json<GenreListView>> {
    let genres = GenreStore::list(&state.catalog).await?;
    Ok(Json(GenreListView {
        title: "Genre List",
        genre_list: genres,
    }))
}

/// GET /catalog/genre/{id}
///
/// The genre document and the books filed under it are fetched in
/// parallel.
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<GenreDetailView>> {
    let (genre, genre_books) = tokio::try_join!(
        GenreStore::find_by_id(&state.catalog, id),
        BookStore::find_by_genre(&state.catalog, id),
    )?;

    let genre = genre.ok_or(AppError::Core(CoreError::NotFound {
        entity: "Genre",
        id,
    }))?;

    Ok(Json(GenreDetailView {
        title: "Genre Detail",
        genre,
        genre_books,
    }))
}

/// GET /catalog/genre/create
pub async fn create_form() -> Json<GenreFormView> {
    Json(GenreFormView {
        title: "Create Genre",
        genre: None,
        errors: Vec::new(),
    })
}

/// POST /catalog/genre/create
///
/// If a genre with the same name already exists, redirects to it instead
/// of storing a duplicate. Names compare exactly, in their stored
/// (escaped) form.
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<GenreForm>,
) -> AppResult<Response> {
    let payload = match form.validate() {
        Ok(payload) => payload,
        Err(errors) => {
            let view = GenreFormView {
                title: "Create Genre",
                genre: Some(GenreFormValues::from(&form)),
                errors,
            };
            return Ok(Json(view).into_response());
        }
    };

    if let Some(existing) = GenreStore::find_by_name(&state.catalog, &payload.name).await? {
        return Ok(Redirect::to(&existing.url()).into_response());
    }

    let genre = GenreStore::insert(&state.catalog, Genre::new(payload)).await?;
    tracing::info!(genre_id = %genre.id, name = %genre, "Genre created");
    Ok(Redirect::to(&genre.url()).into_response())
}

/// GET /catalog/genre/{id}/delete
///
/// A missing genre redirects back to the list instead of erroring.
pub async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Response> {
    let (genre, genre_books) = tokio::try_join!(
        GenreStore::find_by_id(&state.catalog, id),
        BookStore::find_by_genre(&state.catalog, id),
    )?;

    let Some(genre) = genre else {
        return Ok(Redirect::to("/catalog/genres").into_response());
    };

    Ok(Json(GenreDeleteView {
        title: "Delete Genre",
        genre,
        genre_books,
    })
    .into_response())
}

/// POST /catalog/genre/{id}/delete
///
/// Refuses while any book is still filed under the genre, re-rendering
/// the confirmation page with them listed.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Response> {
    let (genre, genre_books) = tokio::try_join!(
        GenreStore::find_by_id(&state.catalog, id),
        BookStore::find_by_genre(&state.catalog, id),
    )?;

    let Some(genre) = genre else {
        return Ok(Redirect::to("/catalog/genres").into_response());
    };

    if !genre_books.is_empty() {
        let view = GenreDeleteView {
            title: "Delete Genre",
            genre,
            genre_books,
        };
        return Ok(Json(view).into_response());
    }

    GenreStore::delete(&state.catalog, id).await?;
    tracing::info!(genre_id = %id, name = %genre, "Genre deleted");
    Ok(Redirect::to("/catalog/genres").into_response())
}

/// GET /catalog/genre/{id}/update
pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<GenreFormView>> {
    let genre = GenreStore::find_by_id(&state.catalog, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Genre",
            id,
        }))?;

    Ok(Json(GenreFormView {
        title: "Update Genre",
        genre: Some(GenreFormValues::from(&genre)),
        errors: Vec::new(),
    }))
}

/// POST /catalog/genre/{id}/update
///
/// A rename that collides with an existing genre redirects to that genre
/// and leaves the stored document untouched.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Form(form): Form<GenreForm>,
) -> AppResult<Response> {
    let payload = match form.validate() {
        Ok(payload) => payload,
        Err(errors) => {
            let view = GenreFormView {
                title: "Update Genre",
                genre: Some(GenreFormValues::from(&form)),
                errors,
            };
            return Ok(Json(view).into_response());
        }
    };

    if let Some(existing) = GenreStore::find_by_name(&state.catalog, &payload.name).await? {
        return Ok(Redirect::to(&existing.url()).into_response());
    }

    let genre = GenreStore::replace(&state.catalog, Genre::with_id(id, payload))
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Genre",
            id,
        }))?;

    tracing::info!(genre_id = %genre.id, name = %genre, "Genre updated");
    Ok(Redirect::to(&genre.url()).into_response())
}
