//! Store for the `authors` partition.

use librarium_core::types::EntityId;
use tokio::task;

use crate::catalog::Catalog;
use crate::error::StoreError;
use crate::models::author::Author;

/// CRUD operations for author documents.
pub struct AuthorStore;

impl AuthorStore {
    /// Insert a new author, returning the stored document.
    pub async fn insert(catalog: &Catalog, author: Author) -> Result<Author, StoreError> {
        let catalog = catalog.clone();
        task::spawn_blocking(move || {
            catalog.put(catalog.authors(), author.id, &author)?;
            Ok(author)
        })
        .await?
    }

    /// Find an author by id.
    pub async fn find_by_id(catalog: &Catalog, id: EntityId) -> Result<Option<Author>, StoreError> {
        let catalog = catalog.clone();
        task::spawn_blocking(move || catalog.get(catalog.authors(), id)).await?
    }

    /// List all authors, ordered by family name ascending.
    pub async fn list(catalog: &Catalog) -> Result<Vec<Author>, StoreError> {
        let catalog = catalog.clone();
        task::spawn_blocking(move || {
            let mut authors: Vec<Author> = catalog.scan(catalog.authors())?;
            authors.sort_by(|a, b| a.family_name.cmp(&b.family_name));
            Ok(authors)
        })
        .await?
    }

    /// Replace the document at `author.id`.
    ///
    /// Returns `None` if no document with that id exists.
    pub async fn replace(catalog: &Catalog, author: Author) -> Result<Option<Author>, StoreError> {
        let catalog = catalog.clone();
        task::spawn_blocking(move || {
            if catalog.get::<Author>(catalog.authors(), author.id)?.is_none() {
                return Ok(None);
            }
            catalog.put(catalog.authors(), author.id, &author)?;
            Ok(Some(author))
        })
        .await?
    }

    /// Delete an author by id. Returns `true` if a document was removed.
    pub async fn delete(catalog: &Catalog, id: EntityId) -> Result<bool, StoreError> {
        let catalog = catalog.clone();
        task::spawn_blocking(move || catalog.remove(catalog.authors(), id)).await?
    }
}
