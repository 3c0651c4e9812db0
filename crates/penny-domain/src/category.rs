//! Domain types representing spending categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of the catch-all category every registry must end with.
pub const CATCH_ALL_ID: &str = "other";

/// A named spending bucket used for classification and display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    /// Lowercase substrings, matched in declaration order.
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Category {
    /// Builds a category, lower-casing every keyword.
    pub fn new<I, K>(
        id: impl Into<String>,
        name: impl Into<String>,
        icon: impl Into<String>,
        keywords: I,
    ) -> Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
            keywords: keywords
                .into_iter()
                .map(|keyword| keyword.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Builds the keyword-less fallback category.
    pub fn catch_all(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self::new(CATCH_ALL_ID, name, icon, std::iter::empty::<&str>())
    }

    pub fn is_catch_all(&self) -> bool {
        self.id == CATCH_ALL_ID
    }

    /// Returns the first keyword (in declared order) contained in `haystack`.
    ///
    /// `haystack` is expected to be lower-cased already.
    pub fn first_match(&self, haystack: &str) -> Option<&str> {
        self.keywords
            .iter()
            .find(|keyword| !keyword.is_empty() && haystack.contains(keyword.as_str()))
            .map(String::as_str)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon, self.name)
    }
}
