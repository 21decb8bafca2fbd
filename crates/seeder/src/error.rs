//! Generation error types.

use persistence::StoreError;
use thiserror::Error;

/// Errors aborting a generation run.
///
/// No partial recovery is attempted: any failure skips the terminal commit
/// and surfaces here, leaving the target store without this run's rows.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    #[error("invalid status weights: {0}")]
    Weights(#[from] rand::distributions::WeightedError),

    #[error("cannot draw from empty {0} pool")]
    EmptyPool(&'static str),
}
