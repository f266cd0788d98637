//! Genre entity model.

use std::fmt;

use librarium_core::forms::GenrePayload;
use librarium_core::types::EntityId;
use serde::{Deserialize, Serialize};

/// A genre document from the `genres` partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: EntityId,
    pub name: String,
}

impl Genre {
    /// Build a genre from a validated submission, with a fresh id.
    pub fn new(payload: GenrePayload) -> Self {
        Self::with_id(EntityId::new_v4(), payload)
    }

    /// Build a genre at a known id. Updates replace the whole document.
    pub fn with_id(id: EntityId, payload: GenrePayload) -> Self {
        Self {
            id,
            name: payload.name,
        }
    }

    /// Path of this genre's detail page.
    pub fn url(&self) -> String {
        format!("/catalog/genre/{}", self.id)
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
