//! Read-only export projections of the collection. Nothing in the store
//! depends on these succeeding; they exist so the presentation layer can
//! offer downloads without reaching into persistence internals.

use crate::error::{PersistenceError, Result};
use crate::models::Book;

/// Column order shared by the CSV and TSV projections.
const COLUMNS: &[&str] = &[
    "title",
    "author",
    "publication_year",
    "genres",
    "read_status",
    "date_added",
    "cover_bytes",
    "rating",
    "review",
];

/// Pretty JSON with the same shape as the persisted file.
pub fn to_json(books: &[Book]) -> Result<String> {
    serde_json::to_string_pretty(books).map_err(|err| PersistenceError::Encode(err).into())
}

/// Comma-separated projection with a header row. Fields containing the
/// separator, quotes, or newlines are quoted with doubled inner quotes.
pub fn to_csv(books: &[Book]) -> String {
    render(books, ",")
}

/// Tab-separated variant of the same projection, importable by spreadsheet
/// applications.
pub fn to_tsv(books: &[Book]) -> String {
    render(books, "\t")
}

fn render(books: &[Book], separator: &str) -> String {
    let mut out = String::new();
    out.push_str(&COLUMNS.join(separator));
    out.push('\n');

    for book in books {
        let fields = [
            escape(&book.title, separator),
            escape(&book.author, separator),
            book.publication_year.to_string(),
            escape(&book.genres.join("; "), separator),
            book.read_status.to_string(),
            book.date_added.clone(),
            // Binary does not belong in a flat table; the blob is projected
            // as its byte count.
            book.cover_image
                .as_ref()
                .map(|bytes| bytes.len())
                .unwrap_or(0)
                .to_string(),
            book.rating.to_string(),
            escape(&book.review, separator),
        ];
        out.push_str(&fields.join(separator));
        out.push('\n');
    }
    out
}

fn escape(field: &str, separator: &str) -> String {
    if field.contains(separator)
        || field.contains('"')
        || field.contains('\n')
        || field.contains('\r')
    {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
