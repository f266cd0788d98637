//! Embedded document storage for the Librarium catalog.
//!
//! A fjall keyspace holds one partition per collection (`authors`,
//! `genres`, `books`). The stores expose async CRUD over blocking tasks.

pub mod catalog;
pub mod error;
pub mod models;
pub mod stores;

use librarium_core::types::EntityId;
use tokio::task;

use crate::catalog::Catalog;
use crate::error::StoreError;

/// Verify the catalog keyspace responds to reads.
pub async fn health_check(catalog: &Catalog) -> Result<(), StoreError> {
    let catalog = catalog.clone();
    task::spawn_blocking(move || {
        catalog.authors().get(EntityId::nil().as_bytes())?;
        Ok(())
    })
    .await?
}
