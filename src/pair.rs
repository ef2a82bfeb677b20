//! Currency pair value type

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::currency::CurrencyItem;
use crate::error::{MalformedPairError, Result};

/// Delimiters tried, in order, by [`CurrencyPair::from_string`]
pub const DEFAULT_DELIMITERS: [&str; 2] = ["_", "-"];

/// Length of the first leg when a pair carries no delimiter
pub const FIXED_FIRST_LEN: usize = 3;

/// Base/quote identifier for a tradeable instrument.
///
/// Both legs are non-empty and a non-empty delimiter never occurs inside a leg.
/// The derived `PartialEq` is structural (case and delimiter included); use
/// [`CurrencyPair::equal`] for the case-insensitive comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCurrencyPair")]
pub struct CurrencyPair {
    #[serde(rename = "first_currency")]
    first: CurrencyItem,
    #[serde(rename = "second_currency")]
    second: CurrencyItem,
    delimiter: String,
}

#[derive(Deserialize)]
struct RawCurrencyPair {
    #[serde(default)]
    delimiter: String,
    first_currency: String,
    second_currency: String,
}

impl TryFrom<RawCurrencyPair> for CurrencyPair {
    type Error = MalformedPairError;

    fn try_from(raw: RawCurrencyPair) -> Result<Self> {
        CurrencyPair::from_parts(raw.first_currency, raw.second_currency)?
            .with_delimiter(raw.delimiter)
    }
}

impl CurrencyPair {
    /// Build a pair from two legs with no delimiter.
    pub fn from_parts(first: impl Into<String>, second: impl Into<String>) -> Result<Self> {
        let first = first.into();
        let second = second.into();
        if first.is_empty() || second.is_empty() {
            return Err(MalformedPairError::EmptyCurrency {
                input: format!("{}{}", first, second),
            });
        }
        Ok(Self {
            first: first.into(),
            second: second.into(),
            delimiter: String::new(),
        })
    }

    /// Split `raw` on `delimiter`, which must occur exactly once.
    pub fn from_delimited(raw: &str, delimiter: &str) -> Result<Self> {
        if delimiter.is_empty() {
            return Err(MalformedPairError::EmptyDelimiter {
                input: raw.to_string(),
            });
        }

        let parts: Vec<&str> = raw.split(delimiter).collect();
        match parts.as_slice() {
            [_] => Err(MalformedPairError::MissingDelimiter {
                input: raw.to_string(),
                delimiter: delimiter.to_string(),
            }),
            [first, second] => {
                if first.is_empty() || second.is_empty() {
                    return Err(MalformedPairError::EmptyCurrency {
                        input: raw.to_string(),
                    });
                }
                Ok(Self {
                    first: CurrencyItem::from(*first),
                    second: CurrencyItem::from(*second),
                    delimiter: delimiter.to_string(),
                })
            }
            _ => Err(MalformedPairError::WrongPartCount {
                input: raw.to_string(),
                delimiter: delimiter.to_string(),
                parts: parts.len(),
            }),
        }
    }

    /// Split `raw` around the first occurrence of `index`.
    ///
    /// A match at position 0 makes `index` the first leg; a match anywhere
    /// else makes it the start of the second leg. So `"USDBTC"` with `"USD"`
    /// gives `USD/BTC` and `"BTCUSD"` with `"USD"` gives `BTC/USD`.
    pub fn from_index(raw: &str, index: &str) -> Result<Self> {
        if index.is_empty() {
            return Err(MalformedPairError::EmptyIndex {
                input: raw.to_string(),
            });
        }

        let position = raw
            .find(index)
            .ok_or_else(|| MalformedPairError::IndexNotFound {
                input: raw.to_string(),
                index: index.to_string(),
            })?;

        let split_at = if position == 0 { index.len() } else { position };
        let (first, second) = raw.split_at(split_at);
        Self::from_parts(first, second).map_err(|_| MalformedPairError::EmptyCurrency {
            input: raw.to_string(),
        })
    }

    /// Parse `raw` using `_`, then `-`, then a fixed three character first leg.
    pub fn from_string(raw: &str) -> Result<Self> {
        for delimiter in DEFAULT_DELIMITERS {
            if raw.contains(delimiter) {
                return Self::from_delimited(raw, delimiter);
            }
        }
        Self::from_fixed(raw)
    }

    pub(crate) fn from_fixed(raw: &str) -> Result<Self> {
        let len = raw.chars().count();
        if len < FIXED_FIRST_LEN {
            return Err(MalformedPairError::TooShort {
                input: raw.to_string(),
                len,
                min: FIXED_FIRST_LEN,
            });
        }

        let split_at = raw
            .char_indices()
            .nth(FIXED_FIRST_LEN)
            .map(|(i, _)| i)
            .unwrap_or(raw.len());
        let (first, second) = raw.split_at(split_at);
        Self::from_parts(first, second).map_err(|_| MalformedPairError::EmptyCurrency {
            input: raw.to_string(),
        })
    }

    /// Copy of this pair with a different stored delimiter.
    pub fn with_delimiter(&self, delimiter: impl Into<String>) -> Result<Self> {
        let delimiter = delimiter.into();
        if !delimiter.is_empty() {
            for leg in [&self.first, &self.second] {
                if leg.as_str().contains(delimiter.as_str()) {
                    return Err(MalformedPairError::DelimiterInCurrency {
                        delimiter,
                        currency: leg.to_string(),
                    });
                }
            }
        }
        Ok(Self {
            first: self.first.clone(),
            second: self.second.clone(),
            delimiter,
        })
    }

    pub fn first(&self) -> &CurrencyItem {
        &self.first
    }

    pub fn second(&self) -> &CurrencyItem {
        &self.second
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Stored form: first, delimiter, second with case as stored.
    pub fn pair(&self) -> CurrencyItem {
        CurrencyItem::new(format!("{}{}{}", self.first, self.delimiter, self.second))
    }

    /// Render with a caller-chosen delimiter and case.
    pub fn display(&self, delimiter: &str, uppercase: bool) -> CurrencyItem {
        let rendered = CurrencyItem::new(format!("{}{}{}", self.first, delimiter, self.second));
        if uppercase {
            rendered.upper()
        } else {
            rendered.lower()
        }
    }

    pub fn upper(&self) -> Self {
        Self {
            first: self.first.upper(),
            second: self.second.upper(),
            delimiter: self.delimiter.clone(),
        }
    }

    pub fn lower(&self) -> Self {
        Self {
            first: self.first.lower(),
            second: self.second.lower(),
            delimiter: self.delimiter.clone(),
        }
    }

    /// Case-insensitive comparison of the legs, ignoring the delimiter.
    ///
    /// When `exact` is false, `BTC/USD` also equals `USD/BTC`.
    pub fn equal(&self, other: &CurrencyPair, exact: bool) -> bool {
        let same_order = self.first.eq_ignore_case(other.first.as_str())
            && self.second.eq_ignore_case(other.second.as_str());
        if same_order || exact {
            return same_order;
        }
        self.first.eq_ignore_case(other.second.as_str())
            && self.second.eq_ignore_case(other.first.as_str())
    }

    /// Legs exchanged, delimiter kept
    pub fn swap(&self) -> Self {
        Self {
            first: self.second.clone(),
            second: self.first.clone(),
            delimiter: self.delimiter.clone(),
        }
    }

    pub fn contains_currency(&self, code: &str) -> bool {
        self.first.eq_ignore_case(code) || self.second.eq_ignore_case(code)
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.first, self.delimiter, self.second)
    }
}

impl FromStr for CurrencyPair {
    type Err = MalformedPairError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_string(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(first: &str, second: &str) -> CurrencyPair {
        CurrencyPair::from_parts(first, second).unwrap()
    }

    #[test]
    fn test_from_parts() {
        let p = pair("BTC", "USD");
        assert_eq!(p.first().as_str(), "BTC");
        assert_eq!(p.second().as_str(), "USD");
        assert_eq!(p.delimiter(), "");
        assert_eq!(p.pair().as_str(), "BTCUSD");
    }

    #[test]
    fn test_from_parts_rejects_empty_leg() {
        let err = CurrencyPair::from_parts("", "USD").unwrap_err();
        assert!(matches!(err, MalformedPairError::EmptyCurrency { .. }));
    }

    #[test]
    fn test_from_delimited() {
        let p = CurrencyPair::from_delimited("eth-btc", "-").unwrap();
        assert_eq!(p.first().as_str(), "eth");
        assert_eq!(p.second().as_str(), "btc");
        assert_eq!(p.delimiter(), "-");
        assert_eq!(p.to_string(), "eth-btc");
    }

    #[test]
    fn test_from_delimited_multichar() {
        let p = CurrencyPair::from_delimited("BTC::USD", "::").unwrap();
        assert_eq!(p.first().as_str(), "BTC");
        assert_eq!(p.second().as_str(), "USD");
    }

    #[test]
    fn test_from_delimited_errors() {
        assert!(matches!(
            CurrencyPair::from_delimited("BTCUSD", "_"),
            Err(MalformedPairError::MissingDelimiter { .. })
        ));
        assert!(matches!(
            CurrencyPair::from_delimited("BTC_USD_X", "_"),
            Err(MalformedPairError::WrongPartCount { parts: 3, .. })
        ));
        assert!(matches!(
            CurrencyPair::from_delimited("_USD", "_"),
            Err(MalformedPairError::EmptyCurrency { .. })
        ));
        assert!(matches!(
            CurrencyPair::from_delimited("BTC_USD", ""),
            Err(MalformedPairError::EmptyDelimiter { .. })
        ));
    }

    #[test]
    fn test_from_index_match_in_middle() {
        let p = CurrencyPair::from_index("BTCUSD", "USD").unwrap();
        assert_eq!(p.first().as_str(), "BTC");
        assert_eq!(p.second().as_str(), "USD");
    }

    #[test]
    fn test_from_index_match_at_start() {
        let p = CurrencyPair::from_index("USDBTC", "USD").unwrap();
        assert_eq!(p.first().as_str(), "USD");
        assert_eq!(p.second().as_str(), "BTC");
    }

    #[test]
    fn test_from_index_errors() {
        assert!(matches!(
            CurrencyPair::from_index("BTCEUR", "USD"),
            Err(MalformedPairError::IndexNotFound { .. })
        ));
        assert!(matches!(
            CurrencyPair::from_index("USD", "USD"),
            Err(MalformedPairError::EmptyCurrency { .. })
        ));
        assert!(matches!(
            CurrencyPair::from_index("BTCUSD", ""),
            Err(MalformedPairError::EmptyIndex { .. })
        ));
    }

    #[test]
    fn test_from_string() {
        let p = CurrencyPair::from_string("BTCUSD").unwrap();
        assert_eq!((p.first().as_str(), p.second().as_str(), p.delimiter()), ("BTC", "USD", ""));

        let p = CurrencyPair::from_string("btc_usd").unwrap();
        assert_eq!((p.first().as_str(), p.second().as_str(), p.delimiter()), ("btc", "usd", "_"));

        let p: CurrencyPair = "doge-usdt".parse().unwrap();
        assert_eq!((p.first().as_str(), p.second().as_str(), p.delimiter()), ("doge", "usdt", "-"));
    }

    #[test]
    fn test_from_string_underscore_wins_over_dash() {
        let p = CurrencyPair::from_string("a-b_c").unwrap();
        assert_eq!(p.first().as_str(), "a-b");
        assert_eq!(p.second().as_str(), "c");
        assert_eq!(p.delimiter(), "_");
    }

    #[test]
    fn test_from_string_errors() {
        assert!(matches!(
            CurrencyPair::from_string("BT"),
            Err(MalformedPairError::TooShort { len: 2, min: 3, .. })
        ));
        assert!(matches!(
            CurrencyPair::from_string("BTC"),
            Err(MalformedPairError::EmptyCurrency { .. })
        ));
        assert!(matches!(
            CurrencyPair::from_string(""),
            Err(MalformedPairError::TooShort { len: 0, .. })
        ));
    }

    #[test]
    fn test_from_string_multibyte() {
        let p = CurrencyPair::from_string("€€€USD").unwrap();
        assert_eq!(p.first().as_str(), "€€€");
        assert_eq!(p.second().as_str(), "USD");
    }

    #[test]
    fn test_display() {
        let p = pair("btc", "usd");
        assert_eq!(p.display("", true).as_str(), "BTCUSD");
        assert_eq!(p.display("-", false).as_str(), "btc-usd");
        // stored form untouched
        assert_eq!(p.pair().as_str(), "btcusd");
    }

    #[test]
    fn test_equal() {
        let a = pair("BTC", "USD");
        let b = CurrencyPair::from_delimited("btc_usd", "_").unwrap();
        let swapped = pair("usd", "btc");

        assert!(a.equal(&b, true));
        assert!(a.equal(&b, false));
        assert!(!a.equal(&swapped, true));
        assert!(a.equal(&swapped, false));
        assert!(!a.equal(&pair("BTC", "EUR"), false));
    }

    #[test]
    fn test_swap() {
        let p = CurrencyPair::from_delimited("BTC_USD", "_").unwrap();
        let s = p.swap();
        assert_eq!(s.to_string(), "USD_BTC");
        assert_eq!(p.to_string(), "BTC_USD");
        assert_eq!(s.swap(), p);
    }

    #[test]
    fn test_contains_currency() {
        let p = pair("BTC", "USD");
        assert!(p.contains_currency("btc"));
        assert!(p.contains_currency("USD"));
        assert!(!p.contains_currency("ETH"));
    }

    #[test]
    fn test_with_delimiter() {
        let p = pair("BTC", "USD").with_delimiter("/").unwrap();
        assert_eq!(p.to_string(), "BTC/USD");

        let err = pair("BTC", "US-D").with_delimiter("-").unwrap_err();
        assert!(matches!(err, MalformedPairError::DelimiterInCurrency { .. }));
    }

    #[test]
    fn test_case_copies() {
        let p = CurrencyPair::from_delimited("Btc-Usd", "-").unwrap();
        assert_eq!(p.upper().to_string(), "BTC-USD");
        assert_eq!(p.lower().to_string(), "btc-usd");
    }

    #[test]
    fn test_serde_field_names() {
        let p = CurrencyPair::from_delimited("BTC_USD", "_").unwrap();
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["first_currency"], "BTC");
        assert_eq!(json["second_currency"], "USD");
        assert_eq!(json["delimiter"], "_");

        let back: CurrencyPair = serde_json::from_value(json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn test_serde_rejects_malformed() {
        let json = r#"{"first_currency":"","second_currency":"USD"}"#;
        assert!(serde_json::from_str::<CurrencyPair>(json).is_err());

        let json = r#"{"first_currency":"B_TC","second_currency":"USD","delimiter":"_"}"#;
        assert!(serde_json::from_str::<CurrencyPair>(json).is_err());
    }
}
