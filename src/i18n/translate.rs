/// Title translation seam.
///
/// The view asks the translator for a display title whenever the interface
/// language is Urdu. The only shipping implementation passes titles through
/// unchanged; swapping in a real engine is a matter of injecting another
/// implementation into `App`.
pub trait Translator: Send {
    fn translate(&self, text: &str) -> String;
}

/// Pass-through translator.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn translate(&self, text: &str) -> String {
        text.to_string()
    }
}
