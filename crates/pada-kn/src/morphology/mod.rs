// Suffix morphology for Kannada
//
// Architecture:
//   - `catalog`: ordered suffix categories, length guards, fast-path lookup
//   - `config`: JSON form of a catalog (serde)
//   - `resolver`: multi-layer suffix resolution with retain/rewrite rules
//   - `tables`: the two built-in suffix tables

pub mod catalog;
pub mod config;
pub mod resolver;
pub mod tables;

pub use catalog::{CatalogError, SuffixBehavior, SuffixCatalog, SuffixCategory, SuffixMatch};
pub use config::{CatalogConfig, CategoryConfig};
pub use resolver::{ResolvedWord, SuffixResolver};
