// Category identifier shared by the lexicon and the suffix catalog

use std::fmt;
use std::str::FromStr;

/// Label used for words that no suffix category produced.
const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// Identifier of a suffix category.
///
/// Word lists tag every root with the category whose suffixes it accepts,
/// and the suffix catalog keys its tables by the same identifier. Words that
/// belong to no paradigm carry the `Uncategorized` sentinel.
///
/// Numbered categories order before `Uncategorized`, so sorted output lists
/// the paradigms first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// A numbered suffix category from the catalog.
    Id(u16),
    /// The word was not produced by any suffix category.
    Uncategorized,
}

impl Category {
    /// Return the numeric id, or `None` for `Uncategorized`.
    pub fn id(self) -> Option<u16> {
        match self {
            Category::Id(n) => Some(n),
            Category::Uncategorized => None,
        }
    }

    /// Check whether this is the `Uncategorized` sentinel.
    pub fn is_uncategorized(self) -> bool {
        self == Category::Uncategorized
    }
}

impl From<u16> for Category {
    fn from(id: u16) -> Self {
        Category::Id(id)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Id(n) => write!(f, "{n}"),
            Category::Uncategorized => f.write_str(UNCATEGORIZED_LABEL),
        }
    }
}

/// Error returned when a category label cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid category label: {0:?}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    /// Parse `"3"` as `Id(3)` and `"Uncategorized"` (any case) as the sentinel.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(UNCATEGORIZED_LABEL) {
            return Ok(Category::Uncategorized);
        }
        s.parse::<u16>()
            .map(Category::Id)
            .map_err(|_| ParseCategoryError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_numbered_and_sentinel() {
        assert_eq!(Category::Id(3).to_string(), "3");
        assert_eq!(Category::Uncategorized.to_string(), "Uncategorized");
    }

    #[test]
    fn parse_numbered() {
        assert_eq!("72".parse::<Category>(), Ok(Category::Id(72)));
        assert_eq!(" 4 ".parse::<Category>(), Ok(Category::Id(4)));
    }

    #[test]
    fn parse_sentinel_ignores_case() {
        assert_eq!(
            "uncategorized".parse::<Category>(),
            Ok(Category::Uncategorized)
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("three".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
        assert!("-1".parse::<Category>().is_err());
    }

    #[test]
    fn numbered_sorts_before_sentinel() {
        let mut cats = vec![Category::Uncategorized, Category::Id(4), Category::Id(1)];
        cats.sort();
        assert_eq!(
            cats,
            vec![Category::Id(1), Category::Id(4), Category::Uncategorized]
        );
    }

    #[test]
    fn id_accessor() {
        assert_eq!(Category::Id(7).id(), Some(7));
        assert_eq!(Category::Uncategorized.id(), None);
        assert!(Category::Uncategorized.is_uncategorized());
        assert!(!Category::from(2).is_uncategorized());
    }
}
