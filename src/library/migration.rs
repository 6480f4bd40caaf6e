//! Load-time normalization for records written by older versions of the
//! collection file. The pass runs unconditionally on every load, not only the
//! first, and applying it twice yields the same result as applying it once.

use std::collections::HashSet;

use crate::models::Book;

/// Tag spelling written by early versions of the collection file.
const LEGACY_SCIENCE_FICTION: &str = "Science Fiction";
/// Canonical replacement from [`crate::models::GENRE_VOCABULARY`].
const SCI_FI: &str = "Sci-Fi";

/// Normalize every loaded record in place:
///
/// - rewrite the legacy `"Science Fiction"` tag to `"Sci-Fi"`;
/// - collapse any duplicate tags the rewrite produces, keeping the first
///   occurrence so the user's ordering survives.
///
/// The missing-`genres` backfill happens structurally during decoding (the
/// field defaults to an empty list), so decode plus this pass together
/// guarantee every record exposes a normalized `genres` sequence.
pub fn normalize(books: &mut [Book]) {
    for book in books {
        for genre in &mut book.genres {
            if genre == LEGACY_SCIENCE_FICTION {
                *genre = SCI_FI.to_string();
            }
        }

        let mut seen = HashSet::new();
        book.genres.retain(|genre| seen.insert(genre.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookDraft;

    fn book_with_genres(genres: &[&str]) -> Book {
        let draft = BookDraft {
            title: "Solaris".to_string(),
            author: "Stanisław Lem".to_string(),
            publication_year: 1961,
            genres: genres.iter().map(|g| g.to_string()).collect(),
            read_status: false,
            cover_image: None,
            rating: 0,
            review: String::new(),
        };
        Book::from_draft(draft, "2022-08-14 10:02:33".to_string())
    }

    #[test]
    fn legacy_tag_becomes_sci_fi() {
        let mut books = vec![book_with_genres(&["Science Fiction", "Fiction"])];
        normalize(&mut books);
        assert_eq!(books[0].genres, vec!["Sci-Fi", "Fiction"]);
    }

    #[test]
    fn canonical_tags_pass_through_untouched() {
        let mut books = vec![book_with_genres(&["Sci-Fi", "Horror"])];
        normalize(&mut books);
        assert_eq!(books[0].genres, vec!["Sci-Fi", "Horror"]);
    }

    #[test]
    fn normalization_is_idempotent() {
        let mut once = vec![book_with_genres(&["Science Fiction", "Mystery"])];
        normalize(&mut once);
        let mut twice = once.clone();
        normalize(&mut twice);
        assert_eq!(once, twice);
    }

    #[test]
    fn rewrite_collapses_a_resulting_duplicate() {
        let mut books = vec![book_with_genres(&["Science Fiction", "Sci-Fi"])];
        normalize(&mut books);
        assert_eq!(books[0].genres, vec!["Sci-Fi"]);
    }

    #[test]
    fn records_without_genres_are_left_empty() {
        let mut books = vec![book_with_genres(&[])];
        normalize(&mut books);
        assert!(books[0].genres.is_empty());
    }
}
