//! Domain models that mirror the persisted JSON schema and get passed between
//! the store, the query/statistics helpers, and whatever presentation layer
//! sits on top. These types stay light-weight data holders so other layers can
//! focus on querying and persistence logic.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical genre vocabulary offered to users when tagging a book. Stored
/// tags are plain strings so that files written by older versions still load;
/// the migration pass in [`crate::library::migration`] folds the one known
/// legacy spelling back into this list.
pub const GENRE_VOCABULARY: &[&str] = &[
    "Fiction",
    "Action",
    "Adventure",
    "Comedy",
    "Horror",
    "Non-Fiction",
    "Sci-Fi",
    "Fantasy",
    "Mystery",
    "Thriller",
    "Romance",
    "Biography",
    "History",
    "Science",
    "Self-Help",
    "Other",
];

/// Wall-clock format used for [`Book::date_added`], second precision.
pub const DATE_ADDED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One book record, exactly as it appears in the persisted JSON array.
///
/// Records carry no unique id: edits address a book by its position in the
/// store and removals match on title, case-insensitively. Duplicate titles
/// therefore make removal ambiguous (all matches go); callers that need
/// finer-grained removal must de-duplicate titles themselves.
pub struct Book {
    /// Title displayed in lists and search results. Required, non-empty.
    pub title: String,
    /// Author, used for display and searching. Required, non-empty.
    pub author: String,
    /// Publication year. The presentation layer constrains input to
    /// `[1000, current year]` before it reaches the store.
    pub publication_year: i32,
    /// Ordered genre tags, at least one per record. Older files may omit the
    /// key entirely, so it defaults to an empty list on load.
    #[serde(default)]
    pub genres: Vec<String>,
    /// Whether the user has read the book.
    pub read_status: bool,
    /// Creation timestamp in [`DATE_ADDED_FORMAT`]. Assigned exactly once
    /// when the book is added; edits never touch it.
    pub date_added: String,
    /// Raw cover image bytes. Serialized as base64 text (or `null`) because
    /// raw binary is not representable in JSON.
    #[serde(default, with = "cover_encoding")]
    pub cover_image: Option<Vec<u8>>,
    /// Star rating from 1 to 5, with 0 meaning unrated.
    #[serde(default)]
    pub rating: u8,
    /// Free-text review, empty when the user has not written one.
    #[serde(default)]
    pub review: String,
}

impl Book {
    /// Build a record from caller-supplied fields plus the creation timestamp
    /// the store stamps on it.
    pub(crate) fn from_draft(draft: BookDraft, date_added: String) -> Self {
        Self {
            title: draft.title,
            author: draft.author,
            publication_year: draft.publication_year,
            genres: draft.genres,
            read_status: draft.read_status,
            date_added,
            cover_image: draft.cover_image,
            rating: draft.rating,
            review: draft.review,
        }
    }

    /// Replace every mutable field with the draft's values. `date_added`
    /// stays as it was, and a draft without a cover keeps the existing blob
    /// so an edit never silently drops an uploaded image.
    pub(crate) fn apply_draft(&mut self, draft: BookDraft) {
        self.title = draft.title;
        self.author = draft.author;
        self.publication_year = draft.publication_year;
        self.genres = draft.genres;
        self.read_status = draft.read_status;
        if let Some(cover) = draft.cover_image {
            self.cover_image = Some(cover);
        }
        self.rating = draft.rating;
        self.review = draft.review;
    }
}

impl fmt::Display for Book {
    /// Write the `Title by Author` form used in messages and log lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.author)
    }
}

#[derive(Debug, Clone, Default)]
/// Caller-supplied field bundle for add and edit operations: every [`Book`]
/// field except `date_added`, which only the store assigns.
///
/// On edit, `cover_image: None` means "keep the current cover"; on add it
/// simply means the book has none.
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub genres: Vec<String>,
    pub read_status: bool,
    pub cover_image: Option<Vec<u8>>,
    pub rating: u8,
    pub review: String,
}

impl BookDraft {
    /// Check the required-field rules: title and author must be non-blank and
    /// at least one genre tag must be present. Numeric ranges (year, rating)
    /// are constrained by the presentation layer's input widgets and are not
    /// re-checked here.
    pub fn validate(&self) -> Result<(), crate::error::ValidationError> {
        use crate::error::ValidationError;

        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.author.trim().is_empty() {
            return Err(ValidationError::EmptyAuthor);
        }
        if self.genres.is_empty() {
            return Err(ValidationError::NoGenres);
        }
        Ok(())
    }
}

/// Serde adapter that maps `Option<Vec<u8>>` to base64 text in JSON. A `null`
/// or missing key round-trips to `None`.
mod cover_encoding {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match bytes {
            Some(bytes) => serializer.serialize_some(&STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(text) => STANDARD
                .decode(text.as_bytes())
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}
