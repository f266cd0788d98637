//! Embedded document catalog backed by a fjall keyspace.
//!
//! Each collection lives in its own partition. Documents are JSON-encoded
//! and keyed by their raw UUID bytes. Writes sync the journal before
//! returning, so an acknowledged mutation survives a crash.

use std::path::Path;
use std::sync::Arc;

use fjall::{Config, Keyspace, PartitionCreateOptions, PartitionHandle, PersistMode};
use librarium_core::types::EntityId;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreError;

/// Cloneable handle to the catalog keyspace and its partitions.
///
/// All methods are synchronous; the stores wrap them in blocking tasks.
#[derive(Clone)]
pub struct Catalog(Arc<CatalogInner>);

struct CatalogInner {
    keyspace: Keyspace,
    authors: PartitionHandle,
    genres: PartitionHandle,
    books: PartitionHandle,
}

impl Catalog {
    /// Open (or create) the catalog keyspace at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let keyspace = Config::new(path).open()?;
        let authors = keyspace.open_partition("authors", PartitionCreateOptions::default())?;
        let genres = keyspace.open_partition("genres", PartitionCreateOptions::default())?;
        let books = keyspace.open_partition("books", PartitionCreateOptions::default())?;
        tracing::debug!(path = %path.display(), "Catalog keyspace opened");

        Ok(Self(Arc::new(CatalogInner {
            keyspace,
            authors,
            genres,
            books,
        })))
    }

    /// Sync the keyspace journal to disk.
    pub fn persist(&self) -> Result<(), StoreError> {
        self.0.keyspace.persist(PersistMode::SyncAll)?;
        Ok(())
    }

    pub(crate) fn authors(&self) -> &PartitionHandle {
        &self.0.authors
    }

    pub(crate) fn genres(&self) -> &PartitionHandle {
        &self.0.genres
    }

    pub(crate) fn books(&self) -> &PartitionHandle {
        &self.0.books
    }

    /// Store a document under its id, then sync.
    pub(crate) fn put<T: Serialize>(
        &self,
        partition: &PartitionHandle,
        id: EntityId,
        doc: &T,
    ) -> Result<(), StoreError> {
        partition.insert(id.as_bytes(), serde_json::to_vec(doc)?)?;
        self.persist()
    }

    /// Fetch and decode a document by id.
    pub(crate) fn get<T: DeserializeOwned>(
        &self,
        partition: &PartitionHandle,
        id: EntityId,
    ) -> Result<Option<T>, StoreError> {
        match partition.get(id.as_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Remove a document by id, then sync. Returns `true` if it existed.
    pub(crate) fn remove(
        &self,
        partition: &PartitionHandle,
        id: EntityId,
    ) -> Result<bool, StoreError> {
        if partition.get(id.as_bytes())?.is_none() {
            return Ok(false);
        }
        partition.remove(id.as_bytes())?;
        self.persist()?;
        Ok(true)
    }

    /// Decode every document in a partition, in key order.
    pub(crate) fn scan<T: DeserializeOwned>(
        &self,
        partition: &PartitionHandle,
    ) -> Result<Vec<T>, StoreError> {
        let mut docs = Vec::new();
        for pair in partition.iter() {
            let (_, bytes) = pair?;
            docs.push(serde_json::from_slice(&bytes)?);
        }
        Ok(docs)
    }
}
