//! Generation error taxonomy.
//!
//! Only two things abort a run: missing scheduling settings and a
//! persistence failure while replacing the grid. An individual session
//! unit that fits nowhere is not an error — it is dropped and shows up
//! as a lower placed count in the generation report.

use thiserror::Error;

use crate::store::StoreError;

/// Errors that abort a generation run.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// No scheduling settings are configured. Fatal: no grid is written.
    #[error("scheduling settings are not configured")]
    MissingSettings,

    /// The store failed while persisting the replaced grid.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result alias for generation operations.
pub type GenerateResult<T> = Result<T, GenerateError>;
