use std::ops::Index;

/// Parameters bound by a successful [`resolve`](crate::Router::resolve).
///
/// Pairs are kept in the order the parameters appear in the route's template. Names borrow from
/// the router and values borrow from the resolved path; values are never decoded or coerced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params<'a> {
    items: Vec<(&'a str, &'a str)>,
}

impl<'a> Params<'a> {
    pub(crate) fn push(&mut self, name: &'a str, value: &'a str) {
        self.items.push((name, value));
    }

    /// Drops values bound past `len`.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.items.truncate(len);
    }

    /// Assigns names to already pushed values, in order.
    pub(crate) fn set_names<I>(&mut self, names: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for (item, name) in self.items.iter_mut().zip(names) {
            item.0 = name;
        }
    }

    /// Check if there are any bound parameters.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns number of bound parameters.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Get bound parameter value by name.
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.items
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }

    /// Return iterator over `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.items.iter().copied()
    }

    /// Returns the pairs as a slice.
    pub fn as_slice(&self) -> &[(&'a str, &'a str)] {
        &self.items
    }

    /// Copies the pairs into owned strings.
    pub fn to_owned_vec(&self) -> Vec<(String, String)> {
        self.iter()
            .map(|(name, value)| (name.to_owned(), value.to_owned()))
            .collect()
    }
}

impl<'a> IntoIterator for Params<'a> {
    type Item = (&'a str, &'a str);
    type IntoIter = std::vec::IntoIter<(&'a str, &'a str)>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> Index<&str> for Params<'a> {
    type Output = str;

    fn index(&self, name: &str) -> &str {
        self.get(name)
            .expect("Value for parameter is not available")
    }
}

impl<'a> Index<usize> for Params<'a> {
    type Output = str;

    fn index(&self, idx: usize) -> &str {
        self.items[idx].1
    }
}

impl<'a, 'b> PartialEq<[(&'b str, &'b str)]> for Params<'a> {
    fn eq(&self, other: &[(&'b str, &'b str)]) -> bool {
        self.items.as_slice() == other
    }
}

impl<'a, 'b, const N: usize> PartialEq<[(&'b str, &'b str); N]> for Params<'a> {
    fn eq(&self, other: &[(&'b str, &'b str); N]) -> bool {
        self.items.as_slice() == other.as_slice()
    }
}
