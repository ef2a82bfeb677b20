//! Reusable parse/render profile for pairs

use serde::{Deserialize, Serialize};

use crate::currency::CurrencyItem;
use crate::error::Result;
use crate::pair::CurrencyPair;
use crate::pairs::format_pairs;

/// How one venue writes its pairs: separator, quote token and case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairFormat {
    #[serde(default)]
    pub delimiter: String,
    #[serde(default)]
    pub index: String,
    #[serde(default = "default_uppercase")]
    pub uppercase: bool,
}

fn default_uppercase() -> bool {
    true
}

impl Default for PairFormat {
    fn default() -> Self {
        Self {
            delimiter: String::new(),
            index: String::new(),
            uppercase: default_uppercase(),
        }
    }
}

impl PairFormat {
    pub fn new(delimiter: impl Into<String>, uppercase: bool) -> Self {
        Self {
            delimiter: delimiter.into(),
            index: String::new(),
            uppercase,
        }
    }

    pub fn with_index(mut self, index: impl Into<String>) -> Self {
        self.index = index.into();
        self
    }

    /// Parse one entry with the same precedence as [`format_pairs`].
    pub fn parse(&self, raw: &str) -> Result<CurrencyPair> {
        if !self.delimiter.is_empty() {
            CurrencyPair::from_delimited(raw, &self.delimiter)
        } else if !self.index.is_empty() {
            CurrencyPair::from_index(raw, &self.index)
        } else {
            CurrencyPair::from_fixed(raw)
        }
    }

    pub fn format_pairs<S: AsRef<str>>(&self, raw: &[S]) -> Result<Vec<CurrencyPair>> {
        format_pairs(raw, &self.delimiter, &self.index)
    }

    pub fn render(&self, pair: &CurrencyPair) -> CurrencyItem {
        pair.display(&self.delimiter, self.uppercase)
    }
}
