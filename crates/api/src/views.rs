//! JSON view models for the catalog pages.
//!
//! Each successful render carries the context its page is built from: a
//! `title` plus the documents the page shows. Form views additionally
//! carry the echoed field values and any validation errors.

use librarium_core::forms::{self, AuthorForm, FieldError, GenreForm};
use librarium_db::models::author::Author;
use librarium_db::models::book::{Book, BookSummary};
use librarium_db::models::genre::Genre;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Author views
// ---------------------------------------------------------------------------

/// Context for the author list page.
#[derive(Debug, Serialize)]
pub struct AuthorListView {
    pub title: &'static str,
    pub author_list: Vec<Author>,
}

/// Context for an author detail page.
#[derive(Debug, Serialize)]
pub struct AuthorDetailView {
    pub title: &'static str,
    pub author: Author,
    pub author_books: Vec<BookSummary>,
}

/// Context for the author create/update form page.
///
/// `author` is `None` on a blank create form; re-renders after a failed
/// submission echo the sanitized values back.
#[derive(Debug, Serialize)]
pub struct AuthorFormView {
    pub title: &'static str,
    pub author: Option<AuthorFormValues>,
    pub errors: Vec<FieldError>,
}

/// Context for the author delete confirmation page.
#[derive(Debug, Serialize)]
pub struct AuthorDeleteView {
    pub title: &'static str,
    pub author: Author,
    pub author_books: Vec<Book>,
}

/// Field values shown in an author form, dates in `YYYY-MM-DD` form.
#[derive(Debug, Serialize)]
pub struct AuthorFormValues {
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: String,
    pub date_of_death: String,
}

impl From<&Author> for AuthorFormValues {
    fn from(author: &Author) -> Self {
        Self {
            first_name: author.first_name.clone(),
            family_name: author.family_name.clone(),
            date_of_birth: author
                .date_of_birth
                .map(|d| d.to_string())
                .unwrap_or_default(),
            date_of_death: author
                .date_of_death
                .map(|d| d.to_string())
                .unwrap_or_default(),
        }
    }
}

impl From<&AuthorForm> for AuthorFormValues {
    /// Submitted values are echoed back trimmed and escaped.
    fn from(form: &AuthorForm) -> Self {
        Self {
            first_name: forms::sanitize(&form.first_name),
            family_name: forms::sanitize(&form.family_name),
            date_of_birth: forms::sanitize(&form.date_of_birth),
            date_of_death: forms::sanitize(&form.date_of_death),
        }
    }
}

// ---------------------------------------------------------------------------
// Genre views
// ---------------------------------------------------------------------------

/// Context for the genre list page.
#[derive(Debug, Serialize)]
pub struct GenreListView {
    pub title: &'static str,
    pub genre_list: Vec<Genre>,
}

/// Context for a genre detail page.
#[derive(Debug, Serialize)]
pub struct GenreDetailView {
    pub title: &'static str,
    pub genre: Genre,
    pub genre_books: Vec<Book>,
}

/// Context for the genre create/update form page.
#[derive(Debug, Serialize)]
pub struct GenreFormView {
    pub title: &'static str,
    pub genre: Option<GenreFormValues>,
    pub errors: Vec<FieldError>,
}

/// Context for the genre delete confirmation page.
#[derive(Debug, Serialize)]
pub struct GenreDeleteView {
    pub title: &'static str,
    pub genre: Genre,
    pub genre_books: Vec<Book>,
}

/// Field values shown in a genre form.
#[derive(Debug, Serialize)]
pub struct GenreFormValues {
    pub name: String,
}

impl From<&Genre> for GenreFormValues {
    fn from(genre: &Genre) -> Self {
        Self {
            name: genre.name.clone(),
        }
    }
}

impl From<&GenreForm> for GenreFormValues {
    /// Submitted values are echoed back trimmed and escaped.
    fn from(form: &GenreForm) -> Self {
        Self {
            name: forms::sanitize(&form.name),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use librarium_core::forms::AuthorPayload;

    #[test]
    fn author_form_values_from_stored_document() {
        let author = Author::new(AuthorPayload {
            first_name: "Ursula".to_string(),
            family_name: "LeGuin".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1929, 10, 21),
            date_of_death: None,
        });

        let values = AuthorFormValues::from(&author);
        assert_eq!(values.first_name, "Ursula");
        assert_eq!(values.date_of_birth, "1929-10-21");
        assert_eq!(values.date_of_death, "");
    }

    #[test]
    fn author_form_values_echo_is_sanitized() {
        let form = AuthorForm {
            first_name: "  Jean<Luc  ".to_string(),
            family_name: "Picard".to_string(),
            date_of_birth: String::new(),
            date_of_death: String::new(),
        };

        let values = AuthorFormValues::from(&form);
        assert_eq!(values.first_name, "Jean&lt;Luc");
        assert_eq!(values.family_name, "Picard");
    }

    #[test]
    fn genre_form_values_echo_is_sanitized() {
        let form = GenreForm {
            name: " R&B ".to_string(),
        };
        assert_eq!(GenreFormValues::from(&form).name, "R&amp;B");
    }
}
