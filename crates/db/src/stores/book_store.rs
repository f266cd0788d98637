//! Store for the `books` partition.
//!
//! Books have no web routes; author and genre pages join against them,
//! and delete confirmations refuse while any remain attached.

use librarium_core::types::EntityId;
use tokio::task;

use crate::catalog::Catalog;
use crate::error::StoreError;
use crate::models::book::{Book, BookSummary};

/// Read operations for book documents, plus seeding.
pub struct BookStore;

impl BookStore {
    /// Insert a book document, returning the stored document.
    pub async fn insert(catalog: &Catalog, book: Book) -> Result<Book, StoreError> {
        let catalog = catalog.clone();
        task::spawn_blocking(move || {
            catalog.put(catalog.books(), book.id, &book)?;
            Ok(book)
        })
        .await?
    }

    /// All books written by the given author.
    pub async fn find_by_author(
        catalog: &Catalog,
        author_id: EntityId,
    ) -> Result<Vec<Book>, StoreError> {
        let catalog = catalog.clone();
        task::spawn_blocking(move || {
            let books: Vec<Book> = catalog.scan(catalog.books())?;
            Ok(books.into_iter().filter(|b| b.author == author_id).collect())
        })
        .await?
    }

    /// Title and summary projections of the given author's books.
    pub async fn summaries_by_author(
        catalog: &Catalog,
        author_id: EntityId,
    ) -> Result<Vec<BookSummary>, StoreError> {
        let books = Self::find_by_author(catalog, author_id).await?;
        Ok(books.into_iter().map(BookSummary::from).collect())
    }

    /// All books filed under the given genre.
    pub async fn find_by_genre(
        catalog: &Catalog,
        genre_id: EntityId,
    ) -> Result<Vec<Book>, StoreError> {
        let catalog = catalog.clone();
        task::spawn_blocking(move || {
            let books: Vec<Book> = catalog.scan(catalog.books())?;
            Ok(books
                .into_iter()
                .filter(|b| b.genre.contains(&genre_id))
                .collect())
        })
        .await?
    }
}
