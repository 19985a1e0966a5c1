//! Errors surfaced by the theme storage collaborator.
//!
//! Game operations are infallible. Only storage can fail, and the catalog
//! logs and swallows those failures.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Encoding error: {0}")]
    Encode(bincode::Error),

    #[error("Decoding error: {0}")]
    Decode(bincode::Error),
}
