// ============================================================
// QaExample Domain Type
// ============================================================
// Represents one bAbI example in domain terms:
//   - A story: the facts stated before the question, already
//     flattened into one contiguous token sequence
//   - A query: the tokenized question posed about the story
//   - An answer: a single word naming the correct answer
//
// This is different from extractive Q&A where the answer is a
// span inside the context. In bAbI the answer vocabulary is
// closed, so the answer is a single categorical word.
//
// Reference: Weston et al. (2015) - "Towards AI-Complete Question
//            Answering: A Set of Prerequisite Toy Tasks"
//            http://arxiv.org/abs/1502.05698

use serde::{Deserialize, Serialize};

/// A parsed (story, query, answer) triple of word tokens.
///
/// The story holds every sentence seen before the question,
/// in order, with sentence boundaries already flattened away.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaExample {
    /// Flattened story tokens, oldest fact first
    pub story: Vec<String>,

    /// Tokenized question, punctuation tokens included
    pub query: Vec<String>,

    /// The single answer word, kept verbatim from the data file
    pub answer: String,
}

impl QaExample {
    pub fn new(story: Vec<String>, query: Vec<String>, answer: impl Into<String>) -> Self {
        Self {
            story,
            query,
            answer: answer.into(),
        }
    }

    /// Number of tokens in the flattened story
    pub fn story_len(&self) -> usize {
        self.story.len()
    }

    /// Number of tokens in the query
    pub fn query_len(&self) -> usize {
        self.query.len()
    }
}
