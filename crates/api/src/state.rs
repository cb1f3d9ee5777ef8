/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted. The record store is the
/// only state shared between requests.
#[derive(Clone)]
pub struct AppState {
    /// Pet record store connection pool.
    pub pool: petcatalog_db::DbPool,
}
