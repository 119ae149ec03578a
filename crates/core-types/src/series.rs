use indexmap::IndexMap;
use serde::Serialize;
use std::hash::Hash;

/// An ordered pair of x/y sequences ready for a line plot.
///
/// Values can only be added as pairs, so `xs().len() == ys().len()` always holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series<X, Y> {
    label: Option<String>,
    xs: Vec<X>,
    ys: Vec<Y>,
}

impl<X, Y> Series<X, Y> {
    pub fn new() -> Self {
        Self {
            label: None,
            xs: Vec::new(),
            ys: Vec::new(),
        }
    }

    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::new()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn push(&mut self, x: X, y: Y) {
        self.xs.push(x);
        self.ys.push(y);
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn xs(&self) -> &[X] {
        &self.xs
    }

    pub fn ys(&self) -> &[Y] {
        &self.ys
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (&X, &Y)> + '_ {
        self.xs.iter().zip(self.ys.iter())
    }

    /// Splits the series back into its parallel sequences.
    pub fn into_parts(self) -> (Vec<X>, Vec<Y>) {
        (self.xs, self.ys)
    }
}

impl<X, Y> Default for Series<X, Y> {
    fn default() -> Self {
        Self::new()
    }
}

impl<X, Y> FromIterator<(X, Y)> for Series<X, Y> {
    fn from_iter<I: IntoIterator<Item = (X, Y)>>(iter: I) -> Self {
        let mut series = Series::new();
        for (x, y) in iter {
            series.push(x, y);
        }
        series
    }
}

/// Series keyed by group, iterated in the order each key was first inserted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound(serialize = "K: Serialize + Hash + Eq, X: Serialize, Y: Serialize"))]
pub struct SeriesSet<K: Hash + Eq, X, Y> {
    groups: IndexMap<K, Series<X, Y>>,
}

impl<K: Hash + Eq, X, Y> SeriesSet<K, X, Y> {
    pub fn new() -> Self {
        Self {
            groups: IndexMap::new(),
        }
    }

    /// Appends `(x, y)` to the series for `key`, creating it at the end of
    /// the set if the key has not been seen yet.
    pub fn push(&mut self, key: K, x: X, y: Y) {
        self.groups.entry(key).or_default().push(x, y);
    }

    pub fn get(&self, key: &K) -> Option<&Series<X, Y>> {
        self.groups.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.groups.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &Series<X, Y>)> + '_ {
        self.groups.iter()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Sum of the lengths of every series in the set.
    pub fn total_points(&self) -> usize {
        self.groups.values().map(Series::len).sum()
    }
}

impl<K: Hash + Eq, X, Y> Default for SeriesSet<K, X, Y> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, X, Y> IntoIterator for SeriesSet<K, X, Y> {
    type Item = (K, Series<X, Y>);
    type IntoIter = indexmap::map::IntoIter<K, Series<X, Y>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}
