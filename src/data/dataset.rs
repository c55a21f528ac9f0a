// ============================================================
// BabiDataset
// ============================================================
// End-to-end dataset construction for one bAbI task:
//
//   raw train text ──parse──┐
//                           ├─→ shared Vocabulary ─→ vectorize train
//   raw test text ──parse───┘                     └→ vectorize test
//
// The vocabulary and max lengths are computed ONCE over both
// splits combined, then both splits are vectorized with them.
// Vectorizing the splits independently would give them different
// index spaces and padding widths, so a token seen only in the
// test split would either crash or silently collide. Everything
// here is built eagerly at construction and never mutated.

use anyhow::{Context, Result};

use crate::data::parser::parse_split;
use crate::data::vectorizer::{vectorize_split, VectorizedSplit};
use crate::data::vocabulary::Vocabulary;
use crate::domain::traits::CorpusSource;

// ─── BabiDataset ──────────────────────────────────────────────────────────────
/// Both vectorized splits of one task plus the vocabulary they
/// share. Hand each split to a `QaBatches` iterator per consumer.
#[derive(Debug, Clone)]
pub struct BabiDataset {
    pub vocab: Vocabulary,
    pub train: VectorizedSplit,
    pub test: VectorizedSplit,
}

impl BabiDataset {
    /// Load, parse and vectorize one task from a corpus source.
    ///
    /// Any failure — missing file, malformed line, vocabulary
    /// miss — aborts construction entirely; there is no partial
    /// dataset to recover.
    pub fn load(source: &impl CorpusSource) -> Result<Self> {
        let train_raw = source.train_text()?;
        let test_raw = source.test_text()?;

        let train_parsed = parse_split(&train_raw).context("parsing train split")?;
        let test_parsed = parse_split(&test_raw).context("parsing test split")?;

        tracing::info!(
            train_examples = train_parsed.len(),
            test_examples = test_parsed.len(),
            "parsed bAbI task"
        );

        // Statistics over the union of both splits — the shared
        // vocabulary / shared max-length invariant
        let combined: Vec<_> = train_parsed
            .iter()
            .chain(test_parsed.iter())
            .cloned()
            .collect();
        let vocab = Vocabulary::build(&combined);

        tracing::info!(
            vocab_size = vocab.vocab_size(),
            story_maxlen = vocab.story_maxlen(),
            query_maxlen = vocab.query_maxlen(),
            "vectorizing splits"
        );

        let train = vectorize_split(&train_parsed, &vocab).context("vectorizing train split")?;
        let test = vectorize_split(&test_parsed, &vocab).context("vectorizing test split")?;

        Ok(Self { vocab, train, test })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory corpus double — no files involved
    struct StaticCorpus {
        train: &'static str,
        test: &'static str,
    }

    impl CorpusSource for StaticCorpus {
        fn train_text(&self) -> Result<String> {
            Ok(self.train.to_string())
        }
        fn test_text(&self) -> Result<String> {
            Ok(self.test.to_string())
        }
    }

    const TRAIN: &str = "1 Mary moved to the bathroom.\n\
                         2 Where is Mary?\tbathroom\t1\n\
                         1 John went to the hallway.\n\
                         2 Where is John?\thallway\t1\n";

    // "garden" and "Sandra" appear only here
    const TEST: &str = "1 Sandra journeyed to the garden.\n\
                        2 Where is Sandra?\tgarden\t1\n";

    #[test]
    fn test_both_splits_are_vectorized() {
        let dataset = BabiDataset::load(&StaticCorpus {
            train: TRAIN,
            test: TEST,
        })
        .unwrap();

        assert_eq!(dataset.train.len(), 2);
        assert_eq!(dataset.test.len(), 1);
    }

    #[test]
    fn test_vocabulary_spans_both_splits() {
        let dataset = BabiDataset::load(&StaticCorpus {
            train: TRAIN,
            test: TEST,
        })
        .unwrap();

        // Test-only tokens got valid indices
        assert!(dataset.vocab.index_of("garden").unwrap() >= 1);
        assert!(dataset.vocab.index_of("Sandra").unwrap() >= 1);
    }

    #[test]
    fn test_splits_share_padding_widths() {
        let dataset = BabiDataset::load(&StaticCorpus {
            train: TRAIN,
            test: TEST,
        })
        .unwrap();

        let width = dataset.train.story[0].len();
        assert!(dataset.test.story.iter().all(|row| row.len() == width));

        let qwidth = dataset.train.query[0].len();
        assert!(dataset.test.query.iter().all(|row| row.len() == qwidth));
    }

    #[test]
    fn test_malformed_train_split_aborts_construction() {
        let result = BabiDataset::load(&StaticCorpus {
            train: "not a babi line\n",
            test: TEST,
        });
        assert!(result.is_err());
    }
}
