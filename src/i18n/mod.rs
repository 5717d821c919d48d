//! Interface language handling.
//!
//! Two fixed label sets, toggled at runtime. Book titles themselves go
//! through a [`Translator`] so a real engine can be dropped in later.

mod translate;

pub use translate::{IdentityTranslator, Translator};

use serde::{Deserialize, Serialize};

/// The two interface languages the screen can display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Urdu,
}

impl Language {
    /// Flip to the other language.
    pub fn toggle(self) -> Self {
        match self {
            Language::English => Language::Urdu,
            Language::Urdu => Language::English,
        }
    }

    pub fn labels(self) -> &'static Labels {
        match self {
            Language::English => &ENGLISH,
            Language::Urdu => &URDU,
        }
    }
}

/// Fixed strings for one interface language.
#[derive(Debug, PartialEq, Eq)]
pub struct Labels {
    pub screen_title: &'static str,
    pub change_language: &'static str,
    pub search_placeholder: &'static str,
    pub author: &'static str,
    pub category: &'static str,
    pub loading: &'static str,
    pub error_prefix: &'static str,
    pub no_results: &'static str,
}

static ENGLISH: Labels = Labels {
    screen_title: "Book Collection",
    change_language: "Change Language",
    search_placeholder: "Search by book name",
    author: "Author",
    category: "Category",
    loading: "Loading...",
    error_prefix: "Error",
    no_results: "No books match your search",
};

static URDU: Labels = Labels {
    screen_title: "کتابوں کا مجموعہ",
    change_language: "زبان تبدیل کریں",
    search_placeholder: "کتاب کا نام سرچ کریں",
    author: "مصنف",
    category: "زمرہ",
    loading: "لوڈ ہو رہا ہے...",
    error_prefix: "خرابی",
    no_results: "کوئی کتاب نہیں ملی",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_language_is_english() {
        assert_eq!(Language::default(), Language::English);
    }

    #[test]
    fn toggle_flips_between_languages() {
        assert_eq!(Language::English.toggle(), Language::Urdu);
        assert_eq!(Language::Urdu.toggle(), Language::English);
    }

    #[test]
    fn double_toggle_restores_label_set() {
        let original = Language::English.labels();
        let round_trip = Language::English.toggle().toggle().labels();
        assert_eq!(original, round_trip);
    }

    #[test]
    fn label_sets_differ_per_language() {
        assert_ne!(
            Language::English.labels().author,
            Language::Urdu.labels().author
        );
        assert_eq!(Language::English.labels().author, "Author");
        assert_eq!(Language::Urdu.labels().author, "مصنف");
    }

    #[test]
    fn deserializes_from_config_strings() {
        assert_eq!(
            serde_json::from_str::<Language>("\"english\"").unwrap(),
            Language::English
        );
        assert_eq!(
            serde_json::from_str::<Language>("\"urdu\"").unwrap(),
            Language::Urdu
        );
    }
}
