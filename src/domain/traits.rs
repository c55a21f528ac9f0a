// ============================================================
// Core Traits (Abstractions)
// ============================================================
// By programming against traits instead of concrete types,
// we can swap implementations without changing the code
// that uses them. For example:
//   - FileCorpus implements CorpusSource over the on-disk cache
//   - A test double can hand back in-memory strings
//   - BabiDataset only sees CorpusSource and works with both

use anyhow::Result;

// ─── CorpusSource ─────────────────────────────────────────────────────────────
/// Any component that can produce the raw text of one bAbI task,
/// train and test splits.
///
/// Downloading and caching the dataset is the collaborator's
/// concern; by the time these methods return, all I/O is resolved
/// into in-memory text.
pub trait CorpusSource {
    /// Full raw text of the training split.
    fn train_text(&self) -> Result<String>;

    /// Full raw text of the test split.
    fn test_text(&self) -> Result<String>;
}
