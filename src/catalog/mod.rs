//! Catalog domain: the book payload shape and the title filter.

mod filter;
mod model;

pub use filter::filter_titles;
pub use model::{Author, Book, CatalogResponse, Category};
