use crate::catalog::Book;
use crate::i18n::Language;
use crate::ui::mvi::UiState;

/// Progress of the one-shot catalog load.
///
/// Transitions are `Pending → Loaded` or `Pending → Failed`; both outcomes
/// are terminal for the lifetime of the screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    #[default]
    Pending,
    Loaded { books: Vec<Book> },
    Failed { message: String },
}

impl FetchState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_pending()
    }
}

/// Everything the catalog screen needs to draw.
///
/// `filtered` holds indices into the loaded payload and is recomputed by the
/// reducer whenever the payload or the query changes; it is always an
/// order-preserving subsequence of the payload.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogState {
    pub fetch: FetchState,
    pub query: String,
    pub language: Language,
    pub filtered: Vec<usize>,
    pub selected: usize,
}

impl UiState for CatalogState {}

impl CatalogState {
    /// The loaded payload, or an empty slice before the fetch resolves.
    pub fn books(&self) -> &[Book] {
        match &self.fetch {
            FetchState::Loaded { books } => books,
            _ => &[],
        }
    }

    /// Books currently visible after filtering, in payload order.
    pub fn visible_books(&self) -> impl Iterator<Item = &Book> {
        let books = self.books();
        self.filtered.iter().filter_map(move |&idx| books.get(idx))
    }
}
