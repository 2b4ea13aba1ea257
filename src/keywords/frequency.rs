use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Token occurrence counts across a whole corpus.
///
/// Built once per generation pass and shared by the keyword ranker and the
/// line scorer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyMap {
    inner: BTreeMap<String, usize>,
}

impl FrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every token. Case is already folded upstream.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = Self::new();
        for token in tokens {
            map.record(token.as_ref());
        }
        map
    }

    pub fn record(&mut self, token: &str) {
        match self.inner.get_mut(token) {
            Some(count) => *count += 1,
            None => {
                self.inner.insert(token.to_string(), 1);
            }
        }
    }

    pub fn get(&self, token: &str) -> Option<usize> {
        self.inner.get(token).copied()
    }

    /// Largest count in the map, `None` when empty.
    pub fn max_count(&self) -> Option<usize> {
        self.inner.values().copied().max()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &usize)> {
        self.inner.iter()
    }
}
