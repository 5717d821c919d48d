use crate::catalog::Book;
use crate::i18n::{Labels, Language, Translator};
use crate::ui::catalog::{CatalogIntent, CatalogReducer, CatalogState};
use crate::ui::mvi::Reducer;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Catalog screen state (MVI pattern).
    catalog: CatalogState,
    /// Title translation seam; identity in the shipping build.
    translator: Box<dyn Translator>,
}

impl App {
    pub fn new(initial_language: Language, translator: Box<dyn Translator>) -> Self {
        let catalog = CatalogState {
            language: initial_language,
            ..CatalogState::default()
        };
        Self {
            should_quit: false,
            catalog,
            translator,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    /// Label set for the active language.
    pub fn labels(&self) -> &'static Labels {
        self.catalog.language.labels()
    }

    /// Title as the list should show it.
    ///
    /// English renders the payload title as-is; Urdu routes it through the
    /// translator (a pass-through until a real engine is injected).
    pub fn display_title(&self, book: &Book) -> String {
        match self.catalog.language {
            Language::English => book.title.clone(),
            Language::Urdu => self.translator.translate(&book.title),
        }
    }

    /// Dispatch an intent to the catalog reducer.
    pub fn dispatch(&mut self, intent: CatalogIntent) {
        dispatch_mvi!(self, catalog, CatalogReducer, intent);
    }

    pub fn on_catalog_loaded(&mut self, books: Vec<Book>) {
        self.dispatch(CatalogIntent::Loaded { books });
    }

    pub fn on_catalog_failed(&mut self, message: String) {
        self.dispatch(CatalogIntent::Failed { message });
    }

    pub fn on_tick(&mut self) {}
}
