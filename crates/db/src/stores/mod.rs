//! Per-collection stores over the catalog partitions.
//!
//! Every operation clones the [`Catalog`](crate::catalog::Catalog) handle
//! and runs the keyspace work on a blocking task, so handlers can fan out
//! reads with `tokio::try_join!`.

pub mod author_store;
pub mod book_store;
pub mod genre_store;
