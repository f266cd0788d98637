//! Form payloads, validation, and sanitization for catalog submissions.
//!
//! Forms arrive as raw strings from urlencoded bodies. Validation trims
//! each field, checks all of them, and collects one message per failing
//! field so a re-rendered form can report every problem at once. Values
//! that pass come back as a typed payload with text fields HTML-escaped,
//! ready for storage.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Minimum length (in characters) for a genre name.
pub const GENRE_NAME_MIN_LENGTH: usize = 3;

/// Date fields are submitted in ISO `YYYY-MM-DD` form.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ---------------------------------------------------------------------------
// Field errors
// ---------------------------------------------------------------------------

/// A single validation failure, tied to the form field that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Sanitization
// ---------------------------------------------------------------------------

/// HTML-escape a string: `&`, `<`, `>`, `"`, `'`, `/`, `\` and backtick
/// become entities, everything else passes through.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            '\\' => out.push_str("&#x5C;"),
            '`' => out.push_str("&#96;"),
            _ => out.push(c),
        }
    }
    out
}

/// Trim and HTML-escape a submitted value, as done before echoing it back
/// into a re-rendered form.
pub fn sanitize(input: &str) -> String {
    escape(input.trim())
}

// ---------------------------------------------------------------------------
// Validation helpers
// ---------------------------------------------------------------------------

/// A required name field: non-empty and ASCII alphanumeric only.
fn check_name(
    value: &str,
    field: &'static str,
    required: &'static str,
    alphanumeric: &'static str,
    errors: &mut Vec<FieldError>,
) {
    if value.is_empty() {
        errors.push(FieldError::new(field, required));
    } else if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
        errors.push(FieldError::new(field, alphanumeric));
    }
}

/// An optional date field: empty means absent, anything else must parse
/// as [`DATE_FORMAT`].
fn check_optional_date(
    value: &str,
    field: &'static str,
    invalid: &'static str,
    errors: &mut Vec<FieldError>,
) -> Option<NaiveDate> {
    if value.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(value, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(FieldError::new(field, invalid));
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Author form
// ---------------------------------------------------------------------------

/// Raw author submission, straight off the wire.
///
/// Every field defaults to empty so a partial body validates the same way
/// as one with blank inputs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub family_name: String,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub date_of_death: String,
}

/// A validated author submission with escaped name fields and parsed dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorPayload {
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

impl AuthorForm {
    /// Validate the form, collecting one message per failing field.
    ///
    /// Names must be non-empty and ASCII alphanumeric; dates are optional
    /// but must be `YYYY-MM-DD` when present.
    pub fn validate(&self) -> Result<AuthorPayload, Vec<FieldError>> {
        let first_name = self.first_name.trim();
        let family_name = self.family_name.trim();

        let mut errors = Vec::new();

        check_name(
            first_name,
            "first_name",
            "First name must be specified.",
            "First name has non-alphanumeric characters.",
            &mut errors,
        );
        check_name(
            family_name,
            "family_name",
            "Family name must be specified.",
            "Family name has non-alphanumeric characters.",
            &mut errors,
        );

        let date_of_birth = check_optional_date(
            self.date_of_birth.trim(),
            "date_of_birth",
            "Invalid date of birth",
            &mut errors,
        );
        let date_of_death = check_optional_date(
            self.date_of_death.trim(),
            "date_of_death",
            "Invalid date of death",
            &mut errors,
        );

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(AuthorPayload {
            first_name: escape(first_name),
            family_name: escape(family_name),
            date_of_birth,
            date_of_death,
        })
    }
}

// ---------------------------------------------------------------------------
// Genre form
// ---------------------------------------------------------------------------

/// Raw genre submission, straight off the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenreForm {
    #[serde(default)]
    pub name: String,
}

/// A validated genre submission with an escaped name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenrePayload {
    pub name: String,
}

impl GenreForm {
    /// Validate the form: the name must reach [`GENRE_NAME_MIN_LENGTH`]
    /// characters after trimming. Length is measured before escaping.
    pub fn validate(&self) -> Result<GenrePayload, Vec<FieldError>> {
        let name = self.name.trim();

        if name.chars().count() < GENRE_NAME_MIN_LENGTH {
            return Err(vec![FieldError::new(
                "name",
                format!("Genre name must contain at least {GENRE_NAME_MIN_LENGTH} characters"),
            )]);
        }

        Ok(GenrePayload { name: escape(name) })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn author_form(first: &str, family: &str, birth: &str, death: &str) -> AuthorForm {
        AuthorForm {
            first_name: first.to_string(),
            family_name: family.to_string(),
            date_of_birth: birth.to_string(),
            date_of_death: death.to_string(),
        }
    }

    fn messages(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.message.as_str()).collect()
    }

    // -- escape --------------------------------------------------------------

    #[test]
    fn escape_leaves_plain_text_alone() {
        assert_eq!(escape("Fantasy"), "Fantasy");
    }

    #[test]
    fn escape_replaces_markup_characters() {
        assert_eq!(
            escape("<b>\"bold\"</b>"),
            "&lt;b&gt;&quot;bold&quot;&lt;&#x2F;b&gt;"
        );
    }

    #[test]
    fn escape_replaces_ampersand_quote_backslash_backtick() {
        assert_eq!(escape("a&'\\`z"), "a&amp;&#x27;&#x5C;&#96;z");
    }

    #[test]
    fn escape_empty_string() {
        assert_eq!(escape(""), "");
    }

    #[test]
    fn sanitize_trims_then_escapes() {
        assert_eq!(sanitize("  R&B  "), "R&amp;B");
    }

    // -- author validate -----------------------------------------------------

    #[test]
    fn author_valid_full_form() {
        let form = author_form("Patrick", "Rothfuss", "1973-06-06", "");
        let payload = form.validate().unwrap();
        assert_eq!(payload.first_name, "Patrick");
        assert_eq!(payload.family_name, "Rothfuss");
        assert_eq!(
            payload.date_of_birth,
            NaiveDate::from_ymd_opt(1973, 6, 6)
        );
        assert_eq!(payload.date_of_death, None);
    }

    #[test]
    fn author_valid_with_both_dates() {
        let form = author_form("Ursula", "LeGuin", "1929-10-21", "2018-01-22");
        let payload = form.validate().unwrap();
        assert_eq!(
            payload.date_of_death,
            NaiveDate::from_ymd_opt(2018, 1, 22)
        );
    }

    #[test]
    fn author_names_are_trimmed() {
        let form = author_form("  Patrick  ", "  Rothfuss  ", "", "");
        let payload = form.validate().unwrap();
        assert_eq!(payload.first_name, "Patrick");
        assert_eq!(payload.family_name, "Rothfuss");
    }

    #[test]
    fn author_empty_first_name() {
        let form = author_form("", "Rothfuss", "", "");
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "first_name");
        assert_eq!(errors[0].message, "First name must be specified.");
    }

    #[test]
    fn author_whitespace_only_family_name() {
        let form = author_form("Patrick", "   ", "", "");
        let errors = form.validate().unwrap_err();
        assert_eq!(messages(&errors), vec!["Family name must be specified."]);
    }

    #[test]
    fn author_non_alphanumeric_first_name() {
        let form = author_form("Jean-Luc", "Picard", "", "");
        let errors = form.validate().unwrap_err();
        assert_eq!(
            messages(&errors),
            vec!["First name has non-alphanumeric characters."]
        );
    }

    #[test]
    fn author_non_alphanumeric_family_name() {
        let form = author_form("Patrick", "O'Brian", "", "");
        let errors = form.validate().unwrap_err();
        assert_eq!(
            messages(&errors),
            vec!["Family name has non-alphanumeric characters."]
        );
    }

    #[test]
    fn author_collects_all_field_errors() {
        let form = author_form("", "", "junk", "also junk");
        let errors = form.validate().unwrap_err();
        assert_eq!(
            messages(&errors),
            vec![
                "First name must be specified.",
                "Family name must be specified.",
                "Invalid date of birth",
                "Invalid date of death",
            ]
        );
    }

    #[test]
    fn author_invalid_birth_date() {
        let form = author_form("Patrick", "Rothfuss", "June 1973", "");
        let errors = form.validate().unwrap_err();
        assert_eq!(messages(&errors), vec!["Invalid date of birth"]);
    }

    #[test]
    fn author_invalid_death_date() {
        let form = author_form("Patrick", "Rothfuss", "", "2020-13-01");
        let errors = form.validate().unwrap_err();
        assert_eq!(messages(&errors), vec!["Invalid date of death"]);
    }

    #[test]
    fn author_rejects_wrong_date_separator() {
        let form = author_form("Patrick", "Rothfuss", "1973/06/06", "");
        assert!(form.validate().is_err());
    }

    #[test]
    fn author_rejects_trailing_date_garbage() {
        let form = author_form("Patrick", "Rothfuss", "1973-06-06x", "");
        assert!(form.validate().is_err());
    }

    #[test]
    fn author_accepts_leap_day() {
        let form = author_form("Ann", "Leckie", "2000-02-29", "");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn author_rejects_non_leap_day() {
        let form = author_form("Ann", "Leckie", "1900-02-29", "");
        assert!(form.validate().is_err());
    }

    #[test]
    fn author_empty_dates_are_absent() {
        let form = author_form("Patrick", "Rothfuss", "", "   ");
        let payload = form.validate().unwrap();
        assert_eq!(payload.date_of_birth, None);
        assert_eq!(payload.date_of_death, None);
    }

    // -- genre validate ------------------------------------------------------

    #[test]
    fn genre_valid_name() {
        let form = GenreForm {
            name: "Fantasy".to_string(),
        };
        let payload = form.validate().unwrap();
        assert_eq!(payload.name, "Fantasy");
    }

    #[test]
    fn genre_name_is_trimmed() {
        let form = GenreForm {
            name: "  Fantasy  ".to_string(),
        };
        assert_eq!(form.validate().unwrap().name, "Fantasy");
    }

    #[test]
    fn genre_name_at_minimum_length() {
        let form = GenreForm {
            name: "Pop".to_string(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn genre_rejects_short_name() {
        let form = GenreForm {
            name: "ab".to_string(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors[0].field, "name");
        assert_eq!(
            errors[0].message,
            "Genre name must contain at least 3 characters"
        );
    }

    #[test]
    fn genre_rejects_empty_name() {
        let form = GenreForm::default();
        assert!(form.validate().is_err());
    }

    #[test]
    fn genre_rejects_whitespace_padded_short_name() {
        let form = GenreForm {
            name: "  ab  ".to_string(),
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn genre_length_counts_characters_not_bytes() {
        let form = GenreForm {
            name: "日本語".to_string(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn genre_length_measured_before_escaping() {
        // "R&B" is three characters; the escaped form is longer but the
        // raw submission is what must clear the minimum.
        let form = GenreForm {
            name: "R&B".to_string(),
        };
        let payload = form.validate().unwrap();
        assert_eq!(payload.name, "R&amp;B");
    }

    #[test]
    fn genre_single_escapable_character_is_too_short() {
        let form = GenreForm {
            name: "&".to_string(),
        };
        assert!(form.validate().is_err());
    }
}
