//! Loading, vectorization and minibatching of the Facebook bAbI
//! question-answering dataset for burn-based trainers.
//!
//! The crate does one thing: turn the raw bAbI task files into
//! fixed-shape padded index arrays plus one-hot answers, and
//! iterate them as `((story, query), answer)` tensor minibatches.
//! Single-threaded, eager, one-shot preprocessing — any failure
//! during construction is an unrecoverable startup error.
//!
//! ```no_run
//! use babi_qa::{BabiConfig, BabiDataset, FileCorpus, QaBatches};
//!
//! type B = burn::backend::NdArray;
//!
//! # fn main() -> anyhow::Result<()> {
//! let corpus = FileCorpus::new(BabiConfig::default());
//! let dataset = BabiDataset::load(&corpus)?;
//!
//! for ((_story, _query), _answer) in QaBatches::<B>::new(&dataset.train, 32, Default::default()) {
//!     // feed the trainer
//! }
//! # Ok(())
//! # }
//! ```

pub mod data;
pub mod domain;

pub use data::batcher::QaBatches;
pub use data::dataset::BabiDataset;
pub use data::loader::{BabiConfig, FileCorpus};
pub use data::vectorizer::VectorizedSplit;
pub use data::vocabulary::{Vocabulary, PAD_INDEX};
pub use domain::example::QaExample;
pub use domain::traits::CorpusSource;
