//! Book entity model and projections.
//!
//! Books are referenced by author and genre pages but have no routes of
//! their own; they enter the catalog through seeding.

use librarium_core::types::EntityId;
use serde::{Deserialize, Serialize};

/// A book document from the `books` partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: EntityId,
    pub title: String,
    pub summary: String,
    /// Id of the author document this book belongs to.
    pub author: EntityId,
    /// Ids of the genre documents this book is filed under.
    pub genre: Vec<EntityId>,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        summary: impl Into<String>,
        author: EntityId,
        genre: Vec<EntityId>,
    ) -> Self {
        Self {
            id: EntityId::new_v4(),
            title: title.into(),
            summary: summary.into(),
            author,
            genre,
        }
    }
}

/// Title and summary projection of a book, as shown on author pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookSummary {
    pub id: EntityId,
    pub title: String,
    pub summary: String,
}

impl From<Book> for BookSummary {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            summary: book.summary,
        }
    }
}
