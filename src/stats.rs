//! Derived counts and distributions over the current collection snapshot.
//! Everything here is a pure read; the display layer does the formatting.

use std::collections::BTreeMap;

use crate::models::Book;

#[derive(Debug, Clone, PartialEq)]
/// Collection totals. `percent_read` is unrounded; the display layer decides
/// how many decimals to show.
pub struct Summary {
    pub total: usize,
    pub read: usize,
    pub percent_read: f64,
}

/// Count the collection and the read share. An empty collection reports zero
/// percent rather than dividing by zero.
pub fn summary(books: &[Book]) -> Summary {
    let total = books.len();
    let read = books.iter().filter(|book| book.read_status).count();
    let percent_read = if total == 0 {
        0.0
    } else {
        100.0 * read as f64 / total as f64
    };
    Summary {
        total,
        read,
        percent_read,
    }
}

/// Occurrences of each genre tag across the whole collection. A record with N
/// tags contributes to N buckets.
pub fn genre_distribution(books: &[Book]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for book in books {
        for genre in &book.genres {
            *counts.entry(genre.clone()).or_insert(0) += 1;
        }
    }
    counts
}

/// Records per publication year, ascending by year.
pub fn year_distribution(books: &[Book]) -> Vec<(i32, usize)> {
    let mut counts = BTreeMap::new();
    for book in books {
        *counts.entry(book.publication_year).or_insert(0) += 1;
    }
    counts.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookDraft;

    fn book(title: &str, year: i32, genres: &[&str], read: bool) -> Book {
        let draft = BookDraft {
            title: title.to_string(),
            author: "Various".to_string(),
            publication_year: year,
            genres: genres.iter().map(|g| g.to_string()).collect(),
            read_status: read,
            cover_image: None,
            rating: 3,
            review: String::new(),
        };
        Book::from_draft(draft, "2021-01-01 00:00:00".to_string())
    }

    #[test]
    fn empty_collection_summarizes_to_all_zeroes() {
        let s = summary(&[]);
        assert_eq!(s.total, 0);
        assert_eq!(s.read, 0);
        assert_eq!(s.percent_read, 0.0);
    }

    #[test]
    fn percent_read_is_unrounded() {
        let books = vec![
            book("A", 1990, &["Fiction"], true),
            book("B", 1991, &["Fiction"], false),
            book("C", 1992, &["Fiction"], false),
        ];
        let s = summary(&books);
        assert_eq!(s.total, 3);
        assert_eq!(s.read, 1);
        assert!((s.percent_read - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn multi_genre_records_count_once_per_tag() {
        let books = vec![
            book("A", 1990, &["Fiction", "Horror"], true),
            book("B", 1991, &["Horror"], false),
        ];
        let counts = genre_distribution(&books);
        assert_eq!(counts.get("Fiction"), Some(&1));
        assert_eq!(counts.get("Horror"), Some(&2));
    }

    #[test]
    fn year_distribution_is_ascending() {
        let books = vec![
            book("A", 2001, &["Fiction"], true),
            book("B", 1987, &["Fiction"], false),
            book("C", 2001, &["Fiction"], false),
        ];
        assert_eq!(year_distribution(&books), vec![(1987, 1), (2001, 2)]);
    }
}
