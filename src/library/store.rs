//! The in-memory book store and its mutating operations. The store owns the
//! record sequence for one session: it is created empty, populated from disk
//! at startup, and written back in full after every successful mutation.

use std::collections::BTreeMap;

use chrono::Local;
use log::{info, warn};

use crate::error::{NotFound, Result};
use crate::library::migration;
use crate::library::persistence::JsonFile;
use crate::models::{Book, BookDraft, DATE_ADDED_FORMAT};
use crate::query::{self, BookFilter, SearchField};
use crate::stats::{self, Summary};

/// One session's book collection, backed by a single JSON file.
///
/// Mutations are write-through: validate, change the in-memory sequence, then
/// rewrite the file. A failed validation changes nothing and touches no file.
/// A failed save surfaces as an error but the in-memory change stays, so
/// memory and disk can diverge until the next successful save; callers decide
/// whether to tell the user that disk state is lagging.
pub struct Library {
    books: Vec<Book>,
    file: JsonFile,
}

impl Library {
    /// Create an empty store bound to the given file. Nothing is read from
    /// disk; call [`Library::load`] to populate it.
    pub fn new(file: JsonFile) -> Self {
        Self {
            books: Vec::new(),
            file,
        }
    }

    /// Create a store and try to populate it from disk. A missing file means
    /// a fresh collection; an unreadable file is logged and the session
    /// starts empty rather than failing.
    pub fn open(file: JsonFile) -> Self {
        let mut library = Self::new(file);
        if library.file.path().exists() {
            if let Err(err) = library.load() {
                warn!("starting with an empty library: {err}");
            }
        }
        library
    }

    /// The file this store reads and writes.
    pub fn file(&self) -> &JsonFile {
        &self.file
    }

    /// Every record, in insertion order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Validate the draft, stamp `date_added` with the current wall-clock
    /// time, append the new record, and save. A validation failure leaves the
    /// store unchanged and writes nothing.
    pub fn add(&mut self, draft: BookDraft) -> Result<()> {
        draft.validate()?;
        let book = Book::from_draft(draft, Local::now().format(DATE_ADDED_FORMAT).to_string());
        info!("adding {book}");
        self.books.push(book);
        self.save()
    }

    /// Replace the mutable fields of the record at `index` and save.
    ///
    /// `date_added` is never altered, and a draft without a cover keeps the
    /// record's existing cover blob. Fails with a not-found error when the
    /// index is out of bounds and a validation error when required fields are
    /// missing; the store is unchanged in both cases.
    pub fn edit(&mut self, index: usize, draft: BookDraft) -> Result<()> {
        if index >= self.books.len() {
            return Err(NotFound::Index(index).into());
        }
        draft.validate()?;
        self.books[index].apply_draft(draft);
        self.save()
    }

    /// Remove every record whose title matches `title`, ignoring case, and
    /// save. Returns how many records went away. Titles are not unique, so a
    /// duplicated title removes all of its records; a miss returns a
    /// not-found error and writes nothing.
    pub fn remove(&mut self, title: &str) -> Result<usize> {
        let needle = title.to_lowercase();
        let before = self.books.len();
        self.books.retain(|book| book.title.to_lowercase() != needle);

        let removed = before - self.books.len();
        if removed == 0 {
            return Err(NotFound::Title(title.to_string()).into());
        }
        info!("removed {removed} book(s) titled \"{title}\"");
        self.save()?;
        Ok(removed)
    }

    /// Read the file, normalize every record, and replace the in-memory
    /// sequence wholesale. On any read or decode failure the current
    /// sequence is left exactly as it was.
    pub fn load(&mut self) -> Result<usize> {
        let mut books = self.file.read()?;
        migration::normalize(&mut books);
        self.books = books;
        info!(
            "loaded {} book(s) from {}",
            self.books.len(),
            self.file.path().display()
        );
        Ok(self.books.len())
    }

    /// Serialize the full sequence and overwrite the file.
    pub fn save(&self) -> Result<()> {
        self.file.write(&self.books)?;
        info!(
            "saved {} book(s) to {}",
            self.books.len(),
            self.file.path().display()
        );
        Ok(())
    }

    /// Case-insensitive substring search over one field. See
    /// [`query::search`].
    pub fn search(&self, query: &str, field: SearchField) -> Vec<&Book> {
        query::search(&self.books, query, field)
    }

    /// Conjunctive filtering by genre, read status, and rating range. See
    /// [`query::filter`].
    pub fn filter(&self, filter: &BookFilter) -> Vec<&Book> {
        query::filter(&self.books, filter)
    }

    /// Collection totals and percent read. See [`stats::summary`].
    pub fn summary(&self) -> Summary {
        stats::summary(&self.books)
    }

    /// Tag occurrence counts across the collection. See
    /// [`stats::genre_distribution`].
    pub fn genre_distribution(&self) -> BTreeMap<String, usize> {
        stats::genre_distribution(&self.books)
    }

    /// Records per publication year, ascending. See
    /// [`stats::year_distribution`].
    pub fn year_distribution(&self) -> Vec<(i32, usize)> {
        stats::year_distribution(&self.books)
    }
}
