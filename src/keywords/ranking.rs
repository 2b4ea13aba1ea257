use serde::{Deserialize, Serialize};

use super::frequency::FrequencyMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedKeyword {
    pub token: String,
    pub count: usize,
}

impl RankedKeyword {
    pub fn new(token: impl Into<String>, count: usize) -> Self {
        Self {
            token: token.into(),
            count,
        }
    }
}

/// Rank tokens by (count desc, token asc) and keep the first `limit`.
///
/// A `limit` of zero yields nothing; a limit beyond the map size yields the
/// whole ranked set.
pub fn top_keywords(freq: &FrequencyMap, limit: usize) -> Vec<RankedKeyword> {
    let mut ranked: Vec<RankedKeyword> = freq
        .iter()
        .map(|(token, count)| RankedKeyword::new(token.clone(), *count))
        .collect();

    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.token.cmp(&b.token)));
    ranked.truncate(limit);

    debug_assert!(ranked.windows(2).all(|w| {
        w[0].count > w[1].count || (w[0].count == w[1].count && w[0].token < w[1].token)
    }));

    ranked
}
