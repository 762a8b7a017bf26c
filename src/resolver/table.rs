use indexmap::map::Iter;
use indexmap::IndexMap;
use serde::Serialize;

/// Flat mapping from full path to its ordered parameter names.
///
/// Iteration order is insertion order, which the resolver keeps equal to its
/// depth-first traversal order so generated output diffs stay stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RoutesTable {
    entries: IndexMap<String, Vec<String>>,
}

impl RoutesTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `params` for `path`, returning the previous entry if one existed.
    ///
    /// An overwritten entry keeps its original position.
    pub fn insert(&mut self, path: String, params: Vec<String>) -> Option<Vec<String>> {
        self.entries.insert(path, params)
    }

    pub fn get(&self, path: &str) -> Option<&[String]> {
        self.entries.get(path).map(Vec::as_slice)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String, Vec<String>> {
        self.entries.iter()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries that capture at least one parameter.
    pub fn parameterized(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.entries.iter().filter(|(_, params)| !params.is_empty())
    }
}

impl<'a> IntoIterator for &'a RoutesTable {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<P: Into<String>> FromIterator<(P, Vec<String>)> for RoutesTable {
    fn from_iter<I: IntoIterator<Item = (P, Vec<String>)>>(iter: I) -> Self {
        let mut table = RoutesTable::new();
        for (path, params) in iter {
            table.insert(path.into(), params);
        }
        table
    }
}
