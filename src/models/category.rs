//! Category labels
//!
//! Transactions and budgets are joined on their category label. The label is
//! trimmed once at construction so that stray whitespace in user input does
//! not split one category into two.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A category label shared by transactions and budgets
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Category(String);

impl Category {
    pub fn new(label: impl AsRef<str>) -> Self {
        Self(label.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Self::new(label)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_is_trimmed() {
        assert_eq!(Category::new("  Food "), Category::new("Food"));
        assert!(Category::new("   ").is_empty());
    }

    #[test]
    fn test_join_is_case_sensitive() {
        assert_ne!(Category::new("food"), Category::new("Food"));
    }

    #[test]
    fn test_deserialize_trims() {
        let c: Category = serde_json::from_str("\" Rent\"").unwrap();
        assert_eq!(c.as_str(), "Rent");
    }
}
