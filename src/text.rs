//! Case-insensitive string helpers

use hashbrown::HashSet;

/// Compares two strings after Unicode upper-casing.
pub fn eq_upper(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    a.to_uppercase() == b.to_uppercase()
}

/// Returns true if `value` appears in `list`, ignoring case.
pub fn is_present_case_insensitive<S: AsRef<str>>(list: &[S], value: &str) -> bool {
    list.iter().any(|item| eq_upper(item.as_ref(), value))
}

/// Upper-cased lookup set for repeated membership checks over one list.
#[derive(Debug, Clone, Default)]
pub struct UpperSet {
    inner: HashSet<String>,
}

impl UpperSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, value: &str) -> bool {
        self.inner.insert(value.to_uppercase())
    }

    pub fn contains(&self, value: &str) -> bool {
        self.inner.contains(&value.to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for UpperSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = UpperSet::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}
