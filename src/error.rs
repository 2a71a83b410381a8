//! Error types for the recommendation core
//!
//! Both variants are recoverable: the caller surfaces them to the user and
//! skips downstream computation. Malformed reference data (non-numeric
//! cells, missing columns) is a loading concern and reported through
//! `anyhow` in the data module instead.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RecommendError {
    /// No row in the crop requirement table matches the requested crop.
    #[error("no requirement data for crop '{crop}'")]
    CropNotFound { crop: String },

    /// A required numeric field is absent or non-finite.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
}
