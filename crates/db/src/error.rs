use petcatalog_core::error::CoreError;

/// Errors returned by store operations.
///
/// Expected outcomes (missing record, rejected fields) arrive as
/// [`CoreError`]; anything the database itself reports is kept as the
/// original [`sqlx::Error`] so callers can log it in full.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
