// ============================================================
// Data Pipeline
// ============================================================
// Everything from the raw bAbI task files to tensor batches.
//
// The pipeline flows in this order:
//
//   cached task files
//       │
//       ▼
//   FileCorpus        → resolves paths, reads raw split text
//       │
//       ▼
//   parser            → (story, query, answer) token triples
//       │
//       ▼
//   Vocabulary        → shared word index + length statistics
//       │
//       ▼
//   vectorizer        → padded index rows + one-hot answers
//       │
//       ▼
//   BabiDataset       → both splits, built once, never mutated
//       │
//       ▼
//   QaBatches         → transposed f32 tensor minibatches
//
// Each module is responsible for exactly one step.

/// Reads cached bAbI task files from disk
pub mod loader;

/// Strict line parser and tokenizer for the bAbI format
pub mod parser;

/// Shared vocabulary and max-length statistics
pub mod vocabulary;

/// Padding, index mapping and one-hot encoding
pub mod vectorizer;

/// End-to-end dataset construction for one task
pub mod dataset;

/// Minibatch iterator producing burn tensors
pub mod batcher;
