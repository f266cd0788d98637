//! Request handlers for the catalog pages.
//!
//! Each submodule provides async handler functions (list, detail, create,
//! update, delete) for a single entity type. Handlers delegate to the
//! corresponding store in `librarium_db`, render a JSON view model or
//! redirect, and map errors via [`AppError`](crate::error::AppError).

pub mod author;
pub mod genre;
