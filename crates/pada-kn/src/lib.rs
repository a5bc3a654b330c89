//! Kannada spell checking: lexicon, suffix morphology and suggestions.
//!
//! - [`lexicon`] -- Prefix tree of canonical words with category tags
//! - [`morphology`] -- Suffix catalogs, JSON configuration and the resolver
//! - [`speller`] -- The valid/misspelled decision engine
//! - [`suggestion`] -- Edit-distance suggestion ranking
//! - [`tokenizer`] -- Whitespace tokenization of running text
//! - [`wordlist`] -- Categorized word-list format and paradigm discovery
//! - [`handle`] -- [`PadaHandle`], the single entry point for applications
//!
//! ```
//! use pada_kn::PadaHandle;
//!
//! let handle = PadaHandle::from_categorized("Category 3:\nಪ್ರೀತಿಸು\n").unwrap();
//! assert!(handle.spell("ಪ್ರೀತಿಸುದ್ದಳು"));
//! ```

pub mod lexicon;
pub mod morphology;
pub mod speller;
pub mod wordlist;

#[cfg(feature = "suggest")]
pub mod suggestion;

#[cfg(feature = "tokenize")]
pub mod tokenizer;

#[cfg(feature = "handle")]
pub mod handle;

pub use lexicon::Lexicon;
pub use morphology::{ResolvedWord, SuffixCatalog, SuffixResolver};

#[cfg(feature = "handle")]
pub use handle::{Misspelling, PadaError, PadaHandle};
