//! Error types for merge operations.

use thiserror::Error;

/// Errors raised by the merge entry points.
#[derive(Error, Debug)]
pub enum MergeError {
    /// A positional input was neither absent nor a mergeable record.
    ///
    /// Raised before any merging work proceeds on the offending input; the
    /// call returns no partial result. Carries the compact rendering of the
    /// rejected value.
    #[error("`{0}` is not a mergeable record")]
    InvalidInput(String),
}

/// Convenience alias used throughout optmerge-core.
pub type Result<T> = std::result::Result<T, MergeError>;
