//! Bulk operations over lists of pairs
//!
//! All functions preserve the order of their input and never mutate it.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::pair::CurrencyPair;
use crate::text::{is_present_case_insensitive, UpperSet};

/// True if any element of `pairs` equals `target` under the given mode.
pub fn contains(pairs: &[CurrencyPair], target: &CurrencyPair, exact: bool) -> bool {
    pairs.iter().any(|p| p.equal(target, exact))
}

/// True if either leg of `pair` matches `code`, ignoring case.
pub fn contains_currency(pair: &CurrencyPair, code: &str) -> bool {
    pair.contains_currency(code)
}

/// Drops every pair holding `code` on either leg.
pub fn remove_by_filter(pairs: &[CurrencyPair], code: &str) -> Vec<CurrencyPair> {
    pairs
        .iter()
        .filter(|p| !p.contains_currency(code))
        .cloned()
        .collect()
}

/// Drops every pair holding any of `codes` on either leg.
pub fn remove_by_filters<S: AsRef<str>>(pairs: &[CurrencyPair], codes: &[S]) -> Vec<CurrencyPair> {
    pairs
        .iter()
        .filter(|p| {
            !is_present_case_insensitive(codes, p.first().as_str())
                && !is_present_case_insensitive(codes, p.second().as_str())
        })
        .cloned()
        .collect()
}

/// First element of `pairs` equal to `target`, carrying the list's own
/// delimiter and case.
pub fn copy_format<'a>(
    target: &CurrencyPair,
    pairs: &'a [CurrencyPair],
    exact: bool,
) -> Option<&'a CurrencyPair> {
    pairs.iter().find(|p| target.equal(p, exact))
}

/// Parses each non-empty entry of `raw`.
///
/// A non-empty `delimiter` wins, then a non-empty `index`, then the fixed
/// three character split. The first malformed entry aborts the whole batch.
pub fn format_pairs<S: AsRef<str>>(
    raw: &[S],
    delimiter: &str,
    index: &str,
) -> Result<Vec<CurrencyPair>> {
    let mut result = Vec::with_capacity(raw.len());
    for entry in raw {
        let entry = entry.as_ref();
        if entry.is_empty() {
            log::debug!("Skipping empty pair entry");
            continue;
        }
        let pair = if !delimiter.is_empty() {
            CurrencyPair::from_delimited(entry, delimiter)
        } else if !index.is_empty() {
            CurrencyPair::from_index(entry, index)
        } else {
            CurrencyPair::from_fixed(entry)
        };
        match pair {
            Ok(pair) => {
                log::trace!("Parsed {} as {}/{}", entry, pair.first(), pair.second());
                result.push(pair);
            }
            Err(e) => {
                log::debug!("Aborting pair batch: {}", e);
                return Err(e);
            }
        }
    }
    Ok(result)
}

/// Stored string form of every pair
pub fn pairs_to_strings(pairs: &[CurrencyPair]) -> Vec<String> {
    pairs.iter().map(|p| p.pair().into_string()).collect()
}

/// Entries added to and removed from a list of raw pair strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairDifferences {
    pub added: Vec<String>,
    pub removed: Vec<String>,
}

impl PairDifferences {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Case-insensitive difference between two raw pair lists.
///
/// `added` follows the order of `new`, `removed` the order of `old`. Empty
/// entries are ignored on both sides.
pub fn find_differences<A: AsRef<str>, B: AsRef<str>>(old: &[A], new: &[B]) -> PairDifferences {
    let old_set: UpperSet = old.iter().map(AsRef::<str>::as_ref).collect();
    let new_set: UpperSet = new.iter().map(AsRef::<str>::as_ref).collect();

    let added: Vec<String> = new
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|p| !p.is_empty() && !old_set.contains(p))
        .map(str::to_string)
        .collect();
    let removed: Vec<String> = old
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|p| !p.is_empty() && !new_set.contains(p))
        .map(str::to_string)
        .collect();

    log::debug!(
        "Pair differences: {} added, {} removed",
        added.len(),
        removed.len()
    );

    PairDifferences { added, removed }
}
