//! Errors raised at the crate's boundaries.
//!
//! The combinatorial core is total over [`Cube`](crate::bits::Cube) and never
//! fails; only turning user input into a configuration and writing results
//! out can go wrong.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("`{input}` is not a cube name, a decimal integer or a 0x-prefixed hex integer")]
    Unparseable { input: String },

    #[error("`{input}` is negative; cube ids must be between 0 and 2^54 - 1")]
    Negative { input: String },

    #[error("`{input}` sets a bit above bond 53; cube ids must be between 0 and 2^54 - 1")]
    OutOfRange { input: String },

    #[error("failed to write graph: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode graph: {0}")]
    Json(#[from] serde_json::Error),
}
