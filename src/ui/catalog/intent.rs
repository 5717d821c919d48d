use crate::catalog::Book;
use crate::ui::mvi::Intent;

/// User actions and fetch outcomes for the catalog screen.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogIntent {
    /// Fetch resolved with the payload.
    Loaded { books: Vec<Book> },
    /// Fetch rejected; carries the display message.
    Failed { message: String },
    /// Append a character to the search query.
    PushChar(char),
    /// Delete the last query character.
    PopChar,
    /// Reset the query to empty.
    ClearQuery,
    /// Flip between the English and Urdu label sets.
    ToggleLanguage,
    /// Move the list selection by `delta` rows, clamped to the visible list.
    MoveSelection(i32),
}

impl Intent for CatalogIntent {}
