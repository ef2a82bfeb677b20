//! Currency codes as case-insensitive tokens

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::text::eq_upper;

/// A single asset code such as `BTC` or `usd`.
///
/// The stored text keeps whatever case it was built with; comparisons that
/// should ignore case go through [`CurrencyItem::eq_ignore_case`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyItem(String);

impl CurrencyItem {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Upper-cased copy
    pub fn upper(&self) -> Self {
        Self(self.0.to_uppercase())
    }

    /// Lower-cased copy
    pub fn lower(&self) -> Self {
        Self(self.0.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn eq_ignore_case(&self, other: &str) -> bool {
        eq_upper(&self.0, other)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CurrencyItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for CurrencyItem {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for CurrencyItem {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<CurrencyItem> for String {
    fn from(value: CurrencyItem) -> Self {
        value.0
    }
}

impl AsRef<str> for CurrencyItem {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_conversion() {
        let item = CurrencyItem::new("Btc");
        assert_eq!(item.upper().as_str(), "BTC");
        assert_eq!(item.lower().as_str(), "btc");
        // receiver keeps its case
        assert_eq!(item.as_str(), "Btc");
    }

    #[test]
    fn test_eq_ignore_case() {
        let item = CurrencyItem::from("usd");
        assert!(item.eq_ignore_case("USD"));
        assert!(item.eq_ignore_case("uSd"));
        assert!(!item.eq_ignore_case("USDT"));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CurrencyItem::from("ETH")), "ETH");
        assert_eq!(String::from(CurrencyItem::from("ltc")), "ltc");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&CurrencyItem::from("XRP")).unwrap();
        assert_eq!(json, "\"XRP\"");
    }
}
