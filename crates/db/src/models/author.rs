//! Author entity model.

use std::fmt;

use chrono::NaiveDate;
use librarium_core::forms::AuthorPayload;
use librarium_core::types::EntityId;
use serde::{Deserialize, Serialize};

/// An author document from the `authors` partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: EntityId,
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

impl Author {
    /// Build an author from a validated submission, with a fresh id.
    pub fn new(payload: AuthorPayload) -> Self {
        Self::with_id(EntityId::new_v4(), payload)
    }

    /// Build an author at a known id. Updates replace the whole document.
    pub fn with_id(id: EntityId, payload: AuthorPayload) -> Self {
        Self {
            id,
            first_name: payload.first_name,
            family_name: payload.family_name,
            date_of_birth: payload.date_of_birth,
            date_of_death: payload.date_of_death,
        }
    }

    /// Path of this author's detail page.
    pub fn url(&self) -> String {
        format!("/catalog/author/{}", self.id)
    }
}

impl fmt::Display for Author {
    /// Lists show authors as `family_name, first_name`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.family_name, self.first_name)
    }
}
