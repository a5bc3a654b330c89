// WASM bindings for the pada Kannada spell checker.
//
// Provides a `WasmPada` class exported via wasm-bindgen that wraps the
// `PadaHandle` from pada-kn. Structured return values (resolved words,
// misspellings, tokens) are serialized to JavaScript values using
// serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const pada = new WasmPada(categorizedText);
//   pada.spell("ಕನ್ನಡ");             // => true
//   pada.classify("ಭಾರತ");           // => "Misspelled"
//   pada.suggest("ಸಾಕಾಣಿಗ", 8);       // => ["ಸಾಕಾಣಿಗೆ", ...]
//   pada.resolve("ಮಾಡಲು");           // => { root: "ಮಾಡು", categories: [73], suffix: "ಲು" }
//   pada.checkText("ನಾನು ಭಾರತ");      // => [{ word: "ಭಾರತ", pos: 5, charLen: 4 }]
//   pada.ignoreWord("ಭಾರತ");

use serde::Serialize;
use wasm_bindgen::prelude::*;

use pada_core::{SpellResult, Token, TokenType};
use pada_kn::{PadaError, PadaHandle};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of a resolved word.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsResolvedWord {
    root: String,
    categories: Vec<u16>,
    suffix: String,
}

/// Serializable representation of a misspelled word in a text.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsMisspelling {
    word: String,
    pos: usize,
    char_len: usize,
}

/// Serializable representation of a token.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsToken {
    token_type: String,
    text: String,
    pos: usize,
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn token_type_to_string(tt: TokenType) -> String {
    match tt {
        TokenType::Word => "Word".to_string(),
        TokenType::Numeral => "Numeral".to_string(),
        TokenType::Foreign => "Foreign".to_string(),
    }
}

fn spell_result_to_string(result: SpellResult) -> String {
    match result {
        SpellResult::Valid => "Valid".to_string(),
        SpellResult::Misspelled => "Misspelled".to_string(),
    }
}

fn pada_error_to_js(e: PadaError) -> JsError {
    JsError::new(&e.to_string())
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

// ============================================================================
// WasmPada
// ============================================================================

/// Kannada spell checker for WebAssembly.
#[wasm_bindgen]
pub struct WasmPada {
    handle: PadaHandle,
}

#[wasm_bindgen]
impl WasmPada {
    /// Create a new instance from the text of a categorized word list.
    #[wasm_bindgen(constructor)]
    pub fn new(categorized: &str) -> Result<WasmPada, JsError> {
        let handle = PadaHandle::from_categorized(categorized).map_err(pada_error_to_js)?;
        Ok(WasmPada { handle })
    }

    /// Check whether a word is correct or ignored.
    pub fn spell(&self, word: &str) -> bool {
        self.handle.spell(word)
    }

    /// Classify a word as `"Valid"` or `"Misspelled"`.
    pub fn classify(&self, word: &str) -> String {
        spell_result_to_string(self.handle.classify(word))
    }

    /// Suggest up to `limit` corrections, best first.
    pub fn suggest(&self, word: &str, limit: usize) -> Vec<String> {
        self.handle.suggest(word, limit)
    }

    /// Resolve a word to `{ root, categories, suffix }`.
    pub fn resolve(&self, word: &str) -> Result<JsValue, JsError> {
        let resolved = self.handle.resolve(word);
        to_js(&JsResolvedWord {
            root: resolved.root,
            categories: resolved.categories.iter().filter_map(|c| c.id()).collect(),
            suffix: resolved.suffix,
        })
    }

    /// Check running text.
    ///
    /// Returns an array of `{ word, pos, charLen }` objects, positions in
    /// characters.
    #[wasm_bindgen(js_name = "checkText")]
    pub fn check_text(&self, text: &str) -> Result<JsValue, JsError> {
        let found: Vec<JsMisspelling> = self
            .handle
            .check_text(text)
            .into_iter()
            .map(|m| JsMisspelling {
                char_len: m.word.chars().count(),
                word: m.word,
                pos: m.pos,
            })
            .collect();
        to_js(&found)
    }

    /// Split text into `{ tokenType, text, pos }` objects.
    pub fn tokens(&self, text: &str) -> Result<JsValue, JsError> {
        let tokens: Vec<JsToken> = pada_kn::tokenizer::tokenize(text)
            .into_iter()
            .map(|t: Token| JsToken {
                token_type: token_type_to_string(t.token_type),
                text: t.text,
                pos: t.pos,
            })
            .collect();
        to_js(&tokens)
    }

    /// Accept `word` in all later checks.
    #[wasm_bindgen(js_name = "ignoreWord")]
    pub fn ignore_word(&mut self, word: &str) {
        self.handle.ignore_word(word);
    }

    /// Ignored words, sorted.
    #[wasm_bindgen(js_name = "ignoredWords")]
    pub fn ignored_words(&self) -> Vec<String> {
        let mut words: Vec<String> = self.handle.ignored_words().map(str::to_string).collect();
        words.sort_unstable();
        words
    }

    #[wasm_bindgen(js_name = "setMaxSuggestions")]
    pub fn set_max_suggestions(&mut self, value: usize) {
        self.handle.set_max_suggestions(value);
    }

    #[wasm_bindgen(js_name = "setPreserveCategory")]
    pub fn set_preserve_category(&mut self, value: bool) {
        self.handle.set_preserve_category(value);
    }
}
