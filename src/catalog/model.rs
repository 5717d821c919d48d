use serde::Deserialize;

/// Response envelope returned by the books endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogResponse {
    #[serde(default)]
    pub data: Vec<Book>,
}

/// One catalog entry as delivered by the API.
///
/// Only the fields the screen consumes are modeled; anything else in the
/// payload is ignored. `author` and `category` are sometimes absent from
/// entries, so they default to empty-named placeholders instead of failing
/// the whole payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Book {
    /// Opaque unique identifier.
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: Author,
    #[serde(default)]
    pub category: Category,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub name: String,
}
