//! Store for the `genres` partition.

use librarium_core::types::EntityId;
use tokio::task;

use crate::catalog::Catalog;
use crate::error::StoreError;
use crate::models::genre::Genre;

/// CRUD operations for genre documents.
pub struct GenreStore;

impl GenreStore {
    /// Insert a new genre, returning the stored document.
    pub async fn insert(catalog: &Catalog, genre: Genre) -> Result<Genre, StoreError> {
        let catalog = catalog.clone();
        task::spawn_blocking(move || {
            catalog.put(catalog.genres(), genre.id, &genre)?;
            Ok(genre)
        })
        .await?
    }

    /// Find a genre by id.
    pub async fn find_by_id(catalog: &Catalog, id: EntityId) -> Result<Option<Genre>, StoreError> {
        let catalog = catalog.clone();
        task::spawn_blocking(move || catalog.get(catalog.genres(), id)).await?
    }

    /// Find a genre by its exact (case-sensitive) name.
    ///
    /// Names are stored escaped, so the lookup value must be escaped too.
    pub async fn find_by_name(catalog: &Catalog, name: &str) -> Result<Option<Genre>, StoreError> {
        let catalog = catalog.clone();
        let name = name.to_string();
        task::spawn_blocking(move || {
            let genres: Vec<Genre> = catalog.scan(catalog.genres())?;
            Ok(genres.into_iter().find(|g| g.name == name))
        })
        .await?
    }

    /// List all genres, ordered by name ascending.
    pub async fn list(catalog: &Catalog) -> Result<Vec<Genre>, StoreError> {
        let catalog = catalog.clone();
        task::spawn_blocking(move || {
            let mut genres: Vec<Genre> = catalog.scan(catalog.genres())?;
            genres.sort_by(|a, b| a.name.cmp(&b.name));
            Ok(genres)
        })
        .await?
    }

    /// Replace the document at `genre.id`.
    ///
    /// Returns `None` if no document with that id exists.
    pub async fn replace(catalog: &Catalog, genre: Genre) -> Result<Option<Genre>, StoreError> {
        let catalog = catalog.clone();
        task::spawn_blocking(move || {
            if catalog.get::<Genre>(catalog.genres(), genre.id)?.is_none() {
                return Ok(None);
            }
            catalog.put(catalog.genres(), genre.id, &genre)?;
            Ok(Some(genre))
        })
        .await?
    }

    /// Delete a genre by id. Returns `true` if a document was removed.
    pub async fn delete(catalog: &Catalog, id: EntityId) -> Result<bool, StoreError> {
        let catalog = catalog.clone();
        task::spawn_blocking(move || catalog.remove(catalog.genres(), id)).await?
    }
}
