use crate::catalog::model::Book;

/// Title filter over the fetched catalog.
///
/// Returns the indices of entries whose title contains `query` as a
/// case-insensitive substring, in the order they appear in `books`. An empty
/// query matches everything. Pure function so it can re-run on every
/// keystroke.
pub fn filter_titles(books: &[Book], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..books.len()).collect();
    }

    let query_lower = query.to_lowercase();
    books
        .iter()
        .enumerate()
        .filter(|(_, book)| book.title.to_lowercase().contains(&query_lower))
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::model::{Author, Category};

    fn book(id: &str, title: &str) -> Book {
        Book {
            id: id.to_string(),
            title: title.to_string(),
            author: Author::default(),
            category: Category::default(),
        }
    }

    fn catalog() -> Vec<Book> {
        vec![
            book("1", "Gulistan"),
            book("2", "Shahnameh"),
            book("3", "Masnavi"),
            book("4", "Gulistan"),
        ]
    }

    #[test]
    fn empty_query_is_identity() {
        let books = catalog();
        assert_eq!(filter_titles(&books, ""), vec![0, 1, 2, 3]);
    }

    #[test]
    fn substring_match_preserves_order() {
        let books = catalog();
        assert_eq!(filter_titles(&books, "an"), vec![0, 3]);
    }

    #[test]
    fn match_is_case_insensitive() {
        let books = catalog();
        let lower = filter_titles(&books, "gulistan");
        let upper = filter_titles(&books, "GULISTAN");
        let mixed = filter_titles(&books, "GuLiStAn");
        assert_eq!(lower, vec![0, 3]);
        assert_eq!(lower, upper);
        assert_eq!(lower, mixed);
    }

    #[test]
    fn no_match_returns_empty() {
        let books = catalog();
        assert!(filter_titles(&books, "xyz").is_empty());
    }

    #[test]
    fn empty_catalog_returns_empty() {
        assert!(filter_titles(&[], "anything").is_empty());
        assert!(filter_titles(&[], "").is_empty());
    }

    #[test]
    fn duplicate_titles_are_not_deduplicated() {
        let books = catalog();
        assert_eq!(filter_titles(&books, "Gulistan").len(), 2);
    }

    #[test]
    fn rerun_yields_identical_result() {
        let books = catalog();
        let first = filter_titles(&books, "sh");
        let second = filter_titles(&books, "sh");
        assert_eq!(first, second);
    }

    #[test]
    fn non_ascii_query_folds_case() {
        let books = vec![book("1", "KİTAP"), book("2", "Divan")];
        // Unicode lowercasing on both sides, not ASCII-only folding.
        assert_eq!(filter_titles(&books, "divan"), vec![1]);
    }
}
