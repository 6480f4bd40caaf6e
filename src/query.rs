//! Search and filtering over a snapshot of the collection. Both entry points
//! borrow the record slice and return matches in store order; nothing here
//! ranks or mutates.

use crate::models::Book;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Which record field a substring search runs against.
pub enum SearchField {
    Title,
    Author,
    /// Matches when ANY of a record's genre tags contains the query.
    Genre,
}

/// Case-insensitive substring search against one field. An empty query
/// matches everything, mirroring `str::contains("")`.
pub fn search<'a>(books: &'a [Book], query: &str, field: SearchField) -> Vec<&'a Book> {
    let needle = query.to_lowercase();
    books
        .iter()
        .filter(|book| match field {
            SearchField::Title => book.title.to_lowercase().contains(&needle),
            SearchField::Author => book.author.to_lowercase().contains(&needle),
            SearchField::Genre => book
                .genres
                .iter()
                .any(|genre| genre.to_lowercase().contains(&needle)),
        })
        .collect()
}

#[derive(Debug, Clone, Default)]
/// Conjunctive record filter. Every predicate is optional; `None` skips it,
/// which is how the presentation layer's "All" sentinel reaches the core.
/// Predicates are independent per-record, so application order never changes
/// the result set.
pub struct BookFilter {
    /// Exact tag membership, not a substring match.
    pub genre: Option<String>,
    /// Exact read/unread equality.
    pub read_status: Option<bool>,
    /// Inclusive `(low, high)` bounds on the stored rating; unrated books
    /// carry 0 and compare as 0.
    pub rating_range: Option<(u8, u8)>,
}

impl BookFilter {
    fn matches(&self, book: &Book) -> bool {
        if let Some(genre) = &self.genre {
            if !book.genres.iter().any(|tag| tag == genre) {
                return false;
            }
        }
        if let Some(read) = self.read_status {
            if book.read_status != read {
                return false;
            }
        }
        if let Some((low, high)) = self.rating_range {
            if book.rating < low || book.rating > high {
                return false;
            }
        }
        true
    }
}

/// Apply every set predicate and keep the records that satisfy all of them.
pub fn filter<'a>(books: &'a [Book], filter: &BookFilter) -> Vec<&'a Book> {
    books.iter().filter(|book| filter.matches(book)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookDraft;

    fn book(title: &str, author: &str, genres: &[&str], read: bool, rating: u8) -> Book {
        let draft = BookDraft {
            title: title.to_string(),
            author: author.to_string(),
            publication_year: 2000,
            genres: genres.iter().map(|g| g.to_string()).collect(),
            read_status: read,
            cover_image: None,
            rating,
            review: String::new(),
        };
        Book::from_draft(draft, "2021-01-01 00:00:00".to_string())
    }

    fn shelf() -> Vec<Book> {
        vec![
            book("Gormenghast", "Mervyn Peake", &["Fantasy", "Fiction"], true, 4),
            book("The Martian", "Andy Weir", &["Sci-Fi"], true, 5),
            book("Sapiens", "Yuval Noah Harari", &["Non-Fiction", "History"], false, 3),
            book("Titus Groan", "Mervyn Peake", &["Fantasy"], false, 0),
        ]
    }

    #[test]
    fn title_search_is_case_insensitive() {
        let books = shelf();
        let hits = search(&books, "gOrMeN", SearchField::Title);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Gormenghast");
    }

    #[test]
    fn author_search_returns_matches_in_store_order() {
        let books = shelf();
        let hits = search(&books, "peake", SearchField::Author);
        let titles: Vec<_> = hits.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Gormenghast", "Titus Groan"]);
    }

    #[test]
    fn genre_substring_fic_excludes_sci_fi() {
        let books = shelf();
        let hits = search(&books, "fic", SearchField::Genre);
        let titles: Vec<_> = hits.iter().map(|b| b.title.as_str()).collect();
        // "Fiction" and "Non-Fiction" contain "fic"; "Sci-Fi" does not.
        assert_eq!(titles, vec!["Gormenghast", "Sapiens"]);
    }

    #[test]
    fn empty_filter_passes_everything() {
        let books = shelf();
        assert_eq!(filter(&books, &BookFilter::default()).len(), books.len());
    }

    #[test]
    fn genre_filter_requires_exact_tag_membership() {
        let books = shelf();
        let hits = filter(
            &books,
            &BookFilter {
                genre: Some("Fiction".to_string()),
                ..Default::default()
            },
        );
        // Exact membership: "Non-Fiction" does not count as "Fiction".
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Gormenghast");
    }

    #[test]
    fn rating_range_is_inclusive_and_treats_unrated_as_zero() {
        let books = shelf();
        let hits = filter(
            &books,
            &BookFilter {
                rating_range: Some((1, 5)),
                ..Default::default()
            },
        );
        // Titus Groan is unrated (0) and falls below the lower bound.
        let titles: Vec<_> = hits.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Gormenghast", "The Martian", "Sapiens"]);
    }

    #[test]
    fn predicates_intersect() {
        let books = shelf();
        let hits = filter(
            &books,
            &BookFilter {
                read_status: Some(true),
                rating_range: Some((1, 5)),
                ..Default::default()
            },
        );
        let titles: Vec<_> = hits.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Gormenghast", "The Martian"]);
    }

    #[test]
    fn read_and_rating_intersection_on_a_larger_shelf() {
        // Ten books: four read with in-range ratings, six unread.
        let mut books = Vec::new();
        for i in 0..4 {
            books.push(book(&format!("Read {i}"), "A", &["Fiction"], true, 1 + i as u8));
        }
        for i in 0..6 {
            books.push(book(&format!("Unread {i}"), "B", &["Fiction"], false, 2));
        }

        let in_range = filter(
            &books,
            &BookFilter {
                rating_range: Some((1, 5)),
                ..Default::default()
            },
        );
        assert_eq!(in_range.len(), 10);

        let read_in_range = filter(
            &books,
            &BookFilter {
                read_status: Some(true),
                rating_range: Some((1, 5)),
                ..Default::default()
            },
        );
        assert_eq!(read_in_range.len(), 4);
        assert!(read_in_range.iter().all(|b| b.read_status));
    }
}
