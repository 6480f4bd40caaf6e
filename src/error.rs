//! Error types shared across the crate. Every fallible operation funnels into
//! the top-level [`Error`] so callers can branch on the three failure kinds
//! (validation, lookup, persistence) while still getting a human-readable
//! message out of `Display` for direct presentation to the user.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error for all library operations. None of these are fatal to the
/// process; the session continues with best-effort state after any of them.
#[derive(Debug, Error)]
pub enum Error {
    /// A required field was missing; the mutation was rejected wholesale.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The record addressed by an edit or remove does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFound),
    /// Reading, decoding, or writing the on-disk library file failed.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Required-field failures raised before any state change happens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("a title is required")]
    EmptyTitle,
    #[error("an author is required")]
    EmptyAuthor,
    #[error("at least one genre is required")]
    NoGenres,
}

/// Lookup failures for the two addressing schemes the store supports:
/// positional index for edits and case-insensitive title for removals.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotFound {
    #[error("no book at position {0}")]
    Index(usize),
    #[error("no book titled \"{0}\"")]
    Title(String),
}

/// File-level failures. The path is carried alongside the source error so the
/// rendered message names the file that caused the problem.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{path} is not a valid library file: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode the library as JSON: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("could not locate a home directory for the library file")]
    NoHomeDirectory,
}
