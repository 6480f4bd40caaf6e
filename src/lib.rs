//! Core library for a personal book-collection tracker.
//!
//! The collection lives in memory as an ordered sequence of [`Book`] records
//! and is persisted as a flat JSON array in a single file, rewritten in full
//! after every mutation. The public modules exposed here provide an
//! intentionally small API so any presentation layer (a TUI, a web UI, a
//! script) can reuse the same pieces:
//!
//! - [`library`] — the [`Library`] store and its JSON persistence adapter.
//! - [`query`] — substring search and multi-predicate filtering.
//! - [`stats`] — totals and genre/year distributions.
//! - [`export`] — read-only CSV/TSV/JSON projections.
//!
//! The core is single-threaded and single-session by design: one process owns
//! the file, every mutating operation runs to completion before returning,
//! and concurrent external writers are unsupported.

pub mod error;
pub mod export;
pub mod library;
pub mod models;
pub mod query;
pub mod stats;

/// The error surface every fallible operation reports through.
pub use error::{Error, NotFound, PersistenceError, Result, ValidationError};

/// The store and its persistence adapter, typically created once per session.
pub use library::{JsonFile, Library};

/// The two domain types callers construct and consume.
pub use models::{Book, BookDraft, DATE_ADDED_FORMAT, GENRE_VOCABULARY};

/// Search and filter building blocks used by view features.
pub use query::{filter, search, BookFilter, SearchField};

/// Snapshot statistics for the collection overview.
pub use stats::{genre_distribution, summary, year_distribution, Summary};
