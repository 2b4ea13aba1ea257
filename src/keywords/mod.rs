pub mod frequency;
pub mod ranking;

pub use frequency::FrequencyMap;
pub use ranking::{top_keywords, RankedKeyword};
