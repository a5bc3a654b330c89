// Spell checking module

pub mod lexicon;

pub use lexicon::LexiconSpeller;

use pada_core::SpellResult;

/// Trait for spell checkers.
///
/// Implementations are pure: the same word always yields the same result and
/// checking never fails. Unknown input is `Misspelled`.
pub trait Speller {
    /// Check whether the given word is correct.
    fn spell(&self, word: &str) -> SpellResult;
}
