//! Shared test utilities and mock infrastructure.

#![allow(dead_code)]

pub mod mock_api;

use kitab::catalog::{Author, Book, Category};

/// Build a catalog entry with empty author/category.
pub fn book(id: &str, title: &str) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author: Author::default(),
        category: Category::default(),
    }
}

/// The payload entry the public API examples use.
pub fn gulistan() -> Book {
    Book {
        id: "1".to_string(),
        title: "Gulistan".to_string(),
        author: Author {
            name: "Saadi".to_string(),
        },
        category: Category {
            name: "Poetry".to_string(),
        },
    }
}
