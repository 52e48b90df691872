//! Error types for rectab

use thiserror::Error;

/// Errors that can occur while rendering a table
#[derive(Error, Debug)]
pub enum TableError {
    /// The record collection had no elements
    #[error("collection cannot be empty")]
    EmptyCollection,

    /// The sink rejected a write; rows already emitted stay written
    #[error("failed to write to sink: {0}")]
    Write(#[from] std::io::Error),
}
