// ============================================================
// Vocabulary & Statistics Builder
// ============================================================
// Computes, over the union of train and test examples:
//   - the sorted global vocabulary
//   - a word → index map with index 0 reserved for padding
//   - the maximum story and query lengths
//
// Train and test must share one vocabulary and one set of max
// lengths, or their index spaces and padding widths diverge.
// That is why this runs once, over both splits combined, and
// the result is never mutated afterwards.

use std::collections::{BTreeSet, HashMap};

use anyhow::{Context, Result};

use crate::domain::example::QaExample;

/// Reserved padding index. Never assigned to a real token; real
/// word indices start at 1. Padding utilities and the embedding
/// mask both depend on this value, so it is a fixed invariant of
/// the data model, not an incidental detail.
pub const PAD_INDEX: u32 = 0;

// ─── Vocabulary ───────────────────────────────────────────────────────────────
/// The shared vocabulary and length statistics for one task.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// word → index, indices starting at 1
    word_idx: HashMap<String, u32>,

    /// Distinct words + 1 for the reserved padding slot
    vocab_size: usize,

    /// Longest flattened story across both splits
    story_maxlen: usize,

    /// Longest query across both splits
    query_maxlen: usize,
}

impl Vocabulary {
    /// Build the vocabulary and statistics from all parsed
    /// examples of both splits combined.
    ///
    /// Token ordering is a total, stable sort over token strings
    /// (BTreeSet iteration order), so index assignment is
    /// reproducible given identical input data.
    pub fn build(all_examples: &[QaExample]) -> Self {
        let mut tokens: BTreeSet<&str> = BTreeSet::new();
        let mut story_maxlen = 0;
        let mut query_maxlen = 0;

        for example in all_examples {
            tokens.extend(example.story.iter().map(String::as_str));
            tokens.extend(example.query.iter().map(String::as_str));
            tokens.insert(example.answer.as_str());

            story_maxlen = story_maxlen.max(example.story_len());
            query_maxlen = query_maxlen.max(example.query_len());
        }

        // Index 0 is reserved for masking via left padding
        let word_idx: HashMap<String, u32> = tokens
            .iter()
            .enumerate()
            .map(|(i, word)| (word.to_string(), i as u32 + 1))
            .collect();
        let vocab_size = word_idx.len() + 1;

        tracing::debug!(
            vocab_size,
            story_maxlen,
            query_maxlen,
            "computed vocabulary statistics"
        );

        Self {
            word_idx,
            vocab_size,
            story_maxlen,
            query_maxlen,
        }
    }

    /// Index of a word. A miss means the vocabulary was computed
    /// over a different dataset than the one being vectorized —
    /// an unrecoverable error, never silently defaulted.
    pub fn index_of(&self, word: &str) -> Result<u32> {
        self.word_idx
            .get(word)
            .copied()
            .with_context(|| format!("token {:?} not present in the vocabulary", word))
    }

    /// Distinct words + 1 for the reserved padding slot
    pub fn vocab_size(&self) -> usize {
        self.vocab_size
    }

    pub fn story_maxlen(&self) -> usize {
        self.story_maxlen
    }

    pub fn query_maxlen(&self) -> usize {
        self.query_maxlen
    }
}
