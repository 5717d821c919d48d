//! Terminal browser for a remote book catalog.
//!
//! Fetches the catalog once on startup, then lets the user filter it by
//! title and flip the interface between English and Urdu label sets.

pub mod catalog;
pub mod config;
pub mod fetch;
pub mod i18n;
pub mod logging;
pub mod shutdown;
pub mod ui;
