//! Store error types.

use thiserror::Error;

/// Errors surfaced by a [`crate::SeedStore`].
///
/// Constraint violations arrive as `Database` errors; they are not handled
/// per row. Any failure aborts the generation run and skips the terminal
/// commit.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("store used after commit")]
    AlreadyCommitted,
}
