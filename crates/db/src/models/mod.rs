//! Catalog document models.

pub mod author;
pub mod book;
pub mod genre;
