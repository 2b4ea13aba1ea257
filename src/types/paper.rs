use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of the correct option within an MCQ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AnswerLabel {
    A,
    B,
    C,
    D,
}

impl AnswerLabel {
    pub const ALL: [AnswerLabel; 4] = [AnswerLabel::A, AnswerLabel::B, AnswerLabel::C, AnswerLabel::D];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        match self {
            AnswerLabel::A => 0,
            AnswerLabel::B => 1,
            AnswerLabel::C => 2,
            AnswerLabel::D => 3,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            AnswerLabel::A => 'A',
            AnswerLabel::B => 'B',
            AnswerLabel::C => 'C',
            AnswerLabel::D => 'D',
        }
    }
}

impl fmt::Display for AnswerLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A multiple-choice question. `answer` indexes the option holding the
/// keyword that was masked out of the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mcq {
    pub prompt: String,
    pub options: [String; 4],
    pub answer: AnswerLabel,
}

impl Mcq {
    pub fn correct_option(&self) -> &str {
        &self.options[self.answer.index()]
    }
}

/// The generated paper. Each section is independent and may be shorter
/// than requested, or empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuestionPaper {
    pub mcqs: Vec<Mcq>,
    pub fill_in_blanks: Vec<String>,
    pub short_questions: Vec<String>,
    pub long_questions: Vec<String>,
}

impl QuestionPaper {
    pub fn is_empty(&self) -> bool {
        self.mcqs.is_empty()
            && self.fill_in_blanks.is_empty()
            && self.short_questions.is_empty()
            && self.long_questions.is_empty()
    }

    pub fn total_questions(&self) -> usize {
        self.mcqs.len()
            + self.fill_in_blanks.len()
            + self.short_questions.len()
            + self.long_questions.len()
    }
}
