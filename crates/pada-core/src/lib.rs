//! Shared vocabulary for the pada Kannada spell checker.
//!
//! This crate holds the types that the lexicon, the suffix catalog and the
//! outer surfaces (CLI, WASM) all agree on. It contains no linguistic
//! algorithms.
//!
//! - [`category`] -- The category identifier shared by lexicon and catalog
//! - [`enums`] -- Spell results and token types
//! - [`character`] -- Kannada script classification
//! - [`token`] -- Tokens produced when scanning text

pub mod category;
pub mod character;
pub mod enums;
pub mod token;

pub use category::{Category, ParseCategoryError};
pub use enums::{SpellResult, TokenType};
pub use token::Token;
