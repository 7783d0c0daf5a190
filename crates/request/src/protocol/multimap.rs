//! Ordered multi-map used for headers and query parameters.
//!
//! Both HTTP headers and query strings allow a name to repeat, and the order in
//! which the repeats appear is meaningful (think of several `Set-Cookie` lines).
//! [`MultiMap`] keeps every `(name, value)` pair in the order it was inserted and
//! never collapses duplicates.

use std::slice;
use std::vec;

/// An insertion-ordered sequence of `(name, value)` pairs allowing repeated names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiMap {
    entries: Vec<(String, String)>,
}

impl MultiMap {
    /// Creates an empty map.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty map with room for `capacity` pairs.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: Vec::with_capacity(capacity) }
    }

    /// Appends a pair, keeping any earlier pair with the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Returns the first value stored under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }

    /// Returns the first value whose name matches `name` ignoring ASCII case.
    ///
    /// Header names are case-insensitive on the wire, so lookups on
    /// [`Request::headers`](crate::protocol::Request::headers) usually want this.
    pub fn get_ignore_ascii_case(&self, name: &str) -> Option<&str> {
        self.entries.iter().find(|(k, _)| k.eq_ignore_ascii_case(name)).map(|(_, v)| v.as_str())
    }

    /// Iterates every value stored under `name`, in insertion order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries.iter().filter(move |(k, _)| k == name).map(|(_, v)| v.as_str())
    }

    #[inline]
    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates all pairs in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter { inner: self.entries.iter() }
    }
}

/// Borrowing iterator over the pairs of a [`MultiMap`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: slice::Iter<'a, (String, String)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a MultiMap {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for MultiMap {
    type Item = (String, String);
    type IntoIter = vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MultiMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = MultiMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for MultiMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_duplicates_in_order() {
        let mut map = MultiMap::new();
        map.insert("Set-Cookie", "a=1");
        map.insert("Host", "localhost");
        map.insert("Set-Cookie", "b=2");

        assert_eq!(map.len(), 3);
        assert_eq!(map.get("Set-Cookie"), Some("a=1"));
        assert_eq!(map.get_all("Set-Cookie").collect::<Vec<_>>(), vec!["a=1", "b=2"]);
        assert_eq!(
            map.iter().collect::<Vec<_>>(),
            vec![("Set-Cookie", "a=1"), ("Host", "localhost"), ("Set-Cookie", "b=2")]
        );
    }

    #[test]
    fn lookup_variants() {
        let map: MultiMap = [("Content-Type", "text/plain")].into_iter().collect();

        assert!(map.contains_key("Content-Type"));
        assert!(!map.contains_key("content-type"));
        assert_eq!(map.get("content-type"), None);
        assert_eq!(map.get_ignore_ascii_case("content-type"), Some("text/plain"));
        assert_eq!(map.get_all("missing").count(), 0);
    }

    #[test]
    fn empty_map() {
        let map = MultiMap::new();
        assert!(map.is_empty());
        assert_eq!(map.iter().next(), None);
    }
}
