//! Handlers for the author pages.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use librarium_core::error::CoreError;
use librarium_core::forms::AuthorForm;
use librarium_core::types::EntityId;
use librarium_db::models::author::Author;
use librarium_db::stores::author_store::AuthorStore;
use librarium_db::stores::book_store::BookStore;

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views::{
    AuthorDeleteView, AuthorDetailView, AuthorFormValues, AuthorFormView, AuthorListView,
};

/// GET /catalog/authors
pub async fn list(State(state): State<AppState>) -> AppResult<Json<AuthorListView>> {
    let authors = AuthorStore::list(&state.catalog).await?;
    Ok(Json(AuthorListView {
        title: "Author List",
        author_list: authors,
    }))
}

/// GET /catalog/author/{id}
///
/// The author document and the author's book summaries are fetched in
/// parallel.
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<AuthorDetailView>> {
    let (author, author_books) = tokio::try_join!(
        AuthorStore::find_by_id(&state.catalog, id),
        BookStore::summaries_by_author(&state.catalog, id),
    )?;

    let author = author.ok_or(AppError::Core(CoreError::NotFound {
        entity: "Author",
        id,
    }))?;

    Ok(Json(AuthorDetailView {
        title: "Author Detail",
        author,
        author_books,
    }))
}

/// GET /catalog/author/create
pub async fn create_form() -> Json<AuthorFormView> {
    Json(AuthorFormView {
        title: "Create Author",
        author: None,
        errors: Vec::new(),
    })
}

/// POST /catalog/author/create
///
/// On success redirects to the new author's detail page; on validation
/// failure re-renders the form with the sanitized values and all errors.
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<AuthorForm>,
) -> AppResult<Response> {
    let payload = match form.validate() {
        Ok(payload) => payload,
        Err(errors) => {
            let view = AuthorFormView {
                title: "Create Author",
                author: Some(AuthorFormValues::from(&form)),
                errors,
            };
            return Ok(Json(view).into_response());
        }
    };

    let author = AuthorStore::insert(&state.catalog, Author::new(payload)).await?;
    tracing::info!(author_id = %author.id, name = %author, "Author created");
    Ok(Redirect::to(&author.url()).into_response())
}

/// GET /catalog/author/{id}/delete
///
/// A missing author redirects back to the list instead of erroring.
pub async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Response> {
    let (author, author_books) = tokio::try_join!(
        AuthorStore::find_by_id(&state.catalog, id),
        BookStore::find_by_author(&state.catalog, id),
    )?;

    let Some(author) = author else {
        return Ok(Redirect::to("/catalog/authors").into_response());
    };

    Ok(Json(AuthorDeleteView {
        title: "Delete Author",
        author,
        author_books,
    })
    .into_response())
}

/// POST /catalog/author/{id}/delete
///
/// Refuses while any of the author's books remain in the catalog,
/// re-rendering the confirmation page with them listed.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Response> {
    let (author, author_books) = tokio::try_join!(
        AuthorStore::find_by_id(&state.catalog, id),
        BookStore::find_by_author(&state.catalog, id),
    )?;

    let Some(author) = author else {
        return Ok(Redirect::to("/catalog/authors").into_response());
    };

    if !author_books.is_empty() {
        let view = AuthorDeleteView {
            title: "Delete Author",
            author,
            author_books,
        };
        return Ok(Json(view).into_response());
    }

    AuthorStore::delete(&state.catalog, id).await?;
    tracing::info!(author_id = %id, name = %author, "Author deleted");
    Ok(Redirect::to("/catalog/authors").into_response())
}

/// GET /catalog/author/{id}/update
pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<AuthorFormView>> {
    let author = AuthorStore::find_by_id(&state.catalog, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Author",
            id,
        }))?;

    Ok(Json(AuthorFormView {
        title: "Update Author",
        author: Some(AuthorFormValues::from(&author)),
        errors: Vec::new(),
    }))
}

/// POST /catalog/author/{id}/update
///
/// Replaces the stored document wholesale and redirects to the detail
/// page; the id comes from the path, never the body.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Form(form): Form<AuthorForm>,
) -> AppResult<Response> {
    let payload = match form.validate() {
        Ok(payload) => payload,
        Err(errors) => {
            let view = AuthorFormView {
                title: "Update Author",
                author: Some(AuthorFormValues::from(&form)),
                errors,
            };
            return Ok(Json(view).into_response());
        }
    };

    let author = AuthorStore::replace(&state.catalog, Author::with_id(id, payload))
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Author",
            id,
        }))?;

    tracing::info!(author_id = %author.id, name = %author, "Author updated");
    Ok(Redirect::to(&author.url()).into_response())
}
