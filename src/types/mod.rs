pub mod identifiers;
pub mod outcome;
pub mod paper;
pub mod scored;

pub use identifiers::{CorpusVersion, DocumentId, DocumentIdError, DocumentVersion};
pub use outcome::{GenerationMetadata, GenerationOutcome, SectionCount, SectionCounts, SourceEntry};
pub use paper::{AnswerLabel, Mcq, QuestionPaper};
pub use scored::{LineScoreDetails, ScoredLine};
