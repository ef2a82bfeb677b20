//! # rusty-pairs
//!
//! Parsing, formatting and comparison of currency pair identifiers such as
//! `BTC_USD`, `eth-btc` or `XRPUSDT`.
//!
//! A [`CurrencyPair`](pair::CurrencyPair) is an immutable value built from
//! raw text; the [`pairs`] module works on whole lists of them.
//!
//! ## Example
//!
//! ```rust
//! use rusty_pairs::prelude::*;
//!
//! let pair = CurrencyPair::from_string("btc_usd")?;
//! assert_eq!(pair.display("-", true).as_str(), "BTC-USD");
//!
//! let listed = format_pairs(&["ETHBTC", "BTCUSD"], "", "")?;
//! assert!(contains(&listed, &pair, true));
//!
//! let diff = find_differences(&["BTC_USD", "ETH_USD"], &["btc_usd", "LTC_USD"]);
//! assert_eq!(diff.added, vec!["LTC_USD"]);
//! assert_eq!(diff.removed, vec!["ETH_USD"]);
//! # Ok::<(), rusty_pairs::error::MalformedPairError>(())
//! ```

pub mod currency;
pub mod error;
pub mod format;
pub mod pair;
pub mod pairs;
pub mod text;

pub mod prelude {
    //! Commonly used types and functions
    pub use crate::currency::CurrencyItem;
    pub use crate::error::{MalformedPairError, Result};
    pub use crate::format::PairFormat;
    pub use crate::pair::CurrencyPair;
    pub use crate::pairs::{
        contains, contains_currency, copy_format, find_differences, format_pairs,
        pairs_to_strings, remove_by_filter, remove_by_filters, PairDifferences,
    };
}
