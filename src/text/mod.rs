pub mod normalize;
pub mod preprocessor;
pub mod stopwords;

pub use normalize::{normalize, tokenize};
pub use preprocessor::{Preprocessor, ProcessedLine};
pub use stopwords::{StopwordSet, ENGLISH_STOPWORDS};
