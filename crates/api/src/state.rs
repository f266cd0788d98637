use librarium_db::catalog::Catalog;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable; the catalog handle is an `Arc` internally.
#[derive(Clone)]
pub struct AppState {
    /// Embedded catalog keyspace handle.
    pub catalog: Catalog,
}
