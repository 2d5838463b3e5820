//! Errors at the configuration boundary.
//!
//! The engine and the coordinator never fail; they repair. Only options coming
//! from outside, such as JSON, can be rejected.

/// Errors that can occur while reading slider options.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid slider options: {0}")]
    Json(#[from] serde_json::Error),

    #[error("slider value must have 1 or 2 elements, got {len}")]
    ValueArity { len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
