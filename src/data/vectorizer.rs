// ============================================================
// Vectorizer
// ============================================================
// Converts parsed (story, query, answer) examples into the
// fixed-shape arrays the minibatch iterator slices:
//
//   story:  examples × story_maxlen   (integer indices)
//   query:  examples × query_maxlen   (integer indices)
//   answer: examples × vocab_size     (one-hot, f32)
//
// Stories and queries are left-padded with the reserved 0
// sentinel, so the most recent tokens sit at the end of each
// row. This padding side is a fixed convention; both splits are
// padded to the same global max lengths.

use anyhow::Result;

use crate::data::vocabulary::{Vocabulary, PAD_INDEX};
use crate::domain::example::QaExample;

// ─── VectorizedSplit ──────────────────────────────────────────────────────────
/// One fully vectorized split. Every story row has length
/// `story_maxlen`, every query row `query_maxlen`, every answer
/// row `vocab_size` with exactly one entry set to 1.0.
#[derive(Debug, Clone)]
pub struct VectorizedSplit {
    pub story: Vec<Vec<u32>>,
    pub query: Vec<Vec<u32>>,
    pub answer: Vec<Vec<f32>>,
}

impl VectorizedSplit {
    /// Number of examples in this split
    pub fn len(&self) -> usize {
        self.story.len()
    }

    pub fn is_empty(&self) -> bool {
        self.story.is_empty()
    }
}

/// Vectorize one split with the shared vocabulary and max-length
/// statistics. Both splits must be vectorized with the same
/// `Vocabulary` instance or their index spaces diverge.
pub fn vectorize_split(examples: &[QaExample], vocab: &Vocabulary) -> Result<VectorizedSplit> {
    let mut story = Vec::with_capacity(examples.len());
    let mut query = Vec::with_capacity(examples.len());
    let mut answer = Vec::with_capacity(examples.len());

    for example in examples {
        story.push(pad_left(
            words_to_indices(&example.story, vocab)?,
            vocab.story_maxlen(),
        ));
        query.push(pad_left(
            words_to_indices(&example.query, vocab)?,
            vocab.query_maxlen(),
        ));
        answer.push(one_hot(&example.answer, vocab)?);
    }

    Ok(VectorizedSplit {
        story,
        query,
        answer,
    })
}

/// Map each word to its vocabulary index, failing fast on a miss
fn words_to_indices(words: &[String], vocab: &Vocabulary) -> Result<Vec<u32>> {
    words.iter().map(|word| vocab.index_of(word)).collect()
}

/// Left-pad a sequence with the 0 sentinel to `width`, keeping
/// the original tokens at the end of the row.
fn pad_left(indices: Vec<u32>, width: usize) -> Vec<u32> {
    let pad = width.saturating_sub(indices.len());
    let mut row = vec![PAD_INDEX; pad];
    row.extend(indices);
    row
}

/// One-hot encode an answer word over the full vocabulary width
fn one_hot(answer: &str, vocab: &Vocabulary) -> Result<Vec<f32>> {
    let mut row = vec![0.0; vocab.vocab_size()];
    row[vocab.index_of(answer)? as usize] = 1.0;
    Ok(row)
}
