// JSON configuration for suffix catalogs

use pada_core::character::VOWEL_SIGN_U;
use serde::Deserialize;

use super::catalog::{CatalogError, SuffixBehavior, SuffixCatalog, SuffixCategory};

/// One category as it appears in a catalog configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryConfig {
    pub id: u16,
    #[serde(default = "default_behavior")]
    pub behavior: SuffixBehavior,
    pub suffixes: Vec<String>,
}

/// Deserialized form of a suffix catalog.
///
/// ```json
/// {
///   "rewrite_marker": "ು",
///   "categories": [
///     { "id": 3, "behavior": "strip", "suffixes": ["ದ್ದನು", "ದ್ದಳು", "ದ್ದರು"] }
///   ]
/// }
/// ```
///
/// `behavior` defaults to `strip` and `rewrite_marker` to the vowel sign U.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_rewrite_marker")]
    pub rewrite_marker: String,
    pub categories: Vec<CategoryConfig>,
}

fn default_behavior() -> SuffixBehavior {
    SuffixBehavior::Strip
}

fn default_rewrite_marker() -> String {
    VOWEL_SIGN_U.to_string()
}

impl SuffixCatalog {
    /// Validate a deserialized configuration into a catalog.
    pub fn from_config(config: CatalogConfig) -> Result<Self, CatalogError> {
        let categories = config
            .categories
            .into_iter()
            .map(|c| SuffixCategory::new(c.id, c.behavior, c.suffixes))
            .collect();
        Self::new(categories, config.rewrite_marker)
    }

    /// Parse and validate a catalog from JSON text.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let config: CatalogConfig = serde_json::from_str(json)?;
        Self::from_config(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pada_core::Category;

    #[test]
    fn json_catalog_is_loaded_in_order() {
        let catalog = SuffixCatalog::from_json(
            r#"{
                "categories": [
                    { "id": 3, "suffixes": ["ದ್ದನು", "ದ್ದಳು", "ದ್ದರು"] },
                    { "id": 72, "behavior": "retain", "suffixes": ["ರದ"] },
                    { "id": 73, "behavior": "rewrite", "suffixes": ["ಡಲು"] },
                    { "id": 71, "behavior": "fallback", "suffixes": ["ದ"] }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(catalog.categories().len(), 4);
        assert_eq!(catalog.categories()[0].id(), Category::Id(3));
        assert_eq!(
            catalog.categories()[0].suffixes().collect::<Vec<_>>(),
            vec!["ದ್ದನು", "ದ್ದಳು", "ದ್ದರು"]
        );
        assert_eq!(catalog.retain().map(|c| c.id()), Some(Category::Id(72)));
        assert_eq!(catalog.rewrite_marker(), "ು");
    }

    #[test]
    fn explicit_rewrite_marker_is_kept() {
        let catalog = SuffixCatalog::from_json(
            r#"{ "rewrite_marker": "ಉ", "categories": [
                { "id": 1, "behavior": "rewrite", "suffixes": ["ಡಲು"] } ] }"#,
        )
        .unwrap();
        assert_eq!(catalog.rewrite_marker(), "ಉ");
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = SuffixCatalog::from_json(r#"{ "categories": [ { "id": "x" } ] }"#).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidJson(_)));
    }

    #[test]
    fn unknown_behavior_is_reported() {
        let err = SuffixCatalog::from_json(
            r#"{ "categories": [ { "id": 1, "behavior": "drop", "suffixes": ["ದ"] } ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidJson(_)));
    }

    #[test]
    fn validation_applies_to_json_input() {
        let err = SuffixCatalog::from_json(
            r#"{ "categories": [ { "id": 72, "behavior": "retain", "suffixes": [] } ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::EmptySpecialCategory { .. }));
    }
}
