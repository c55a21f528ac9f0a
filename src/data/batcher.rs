// ============================================================
// Q&A Minibatch Iterator
// ============================================================
// Wraps one vectorized split and yields consecutive minibatches
// as burn tensors for the training loop.
//
// Each step takes `batch_size` consecutive rows from the story,
// query and answer arrays, transposes them so sequence-position
// (or vocabulary feature) becomes the leading axis, casts to f32
// and materializes the result on the target device:
//
//   story:  (story_maxlen, batch_size)
//   query:  (query_maxlen, batch_size)
//   answer: (vocab_size,   batch_size)
//
// The batch count is ndata / batch_size with integer truncation:
// when ndata is not evenly divisible, the trailing
// `ndata % batch_size` examples are silently dropped from
// iteration. That truncation is documented behavior inherited
// from the data contract, not a bug.
//
// B is the Burn Backend (e.g. Wgpu, NdArray) — generic so the
// same iterator works on any device.

use burn::tensor::{backend::Backend, Tensor};

use crate::data::vectorizer::VectorizedSplit;

// ─── QaBatches ────────────────────────────────────────────────────────────────
/// Minibatch iterator over one vectorized split.
///
/// Holds a read-only view of the arrays; the only mutable state
/// is the batch cursor, so it is stateful but cheap. One
/// instance is expected to be driven by exactly one consumer —
/// it is not synchronized for concurrent use.
pub struct QaBatches<'a, B: Backend> {
    split: &'a VectorizedSplit,
    device: B::Device,
    batch_size: usize,
    nbatches: usize,
    batch_index: usize,
}

impl<'a, B: Backend> QaBatches<'a, B> {
    /// Create an iterator over `split` yielding batches of
    /// `batch_size` examples on `device`.
    pub fn new(split: &'a VectorizedSplit, batch_size: usize, device: B::Device) -> Self {
        assert!(batch_size > 0, "batch_size must be at least 1");

        // Truncating division: trailing ndata % batch_size
        // examples never appear in any batch
        let nbatches = split.len() / batch_size;

        tracing::debug!(
            ndata = split.len(),
            batch_size,
            nbatches,
            dropped = split.len() % batch_size,
            "minibatch iterator ready"
        );

        Self {
            split,
            device,
            batch_size,
            nbatches,
            batch_index: 0,
        }
    }

    /// Number of full batches this iterator will yield
    pub fn nbatches(&self) -> usize {
        self.nbatches
    }

    /// Number of examples in the underlying split
    pub fn ndata(&self) -> usize {
        self.split.len()
    }

    /// Intentionally a no-op.
    ///
    /// The intended contract is to reposition the batch cursor to
    /// zero for repeated evaluation passes over the same split,
    /// but the surrounding training-loop contract never does so;
    /// a fresh pass constructs a fresh iterator instead.
    pub fn reset(&mut self) {}

    /// Slice rows [start, end) of integer index rows, transposed
    /// and cast to f32, as a (row_len, batch_size) tensor.
    fn index_batch(&self, rows: &[Vec<u32>], start: usize, end: usize) -> Tensor<B, 2> {
        let row_len = rows[start].len();
        let flat = transpose_rows(&rows[start..end], row_len, |&v| v as f32);
        Tensor::<B, 1>::from_floats(flat.as_slice(), &self.device)
            .reshape([row_len, self.batch_size])
    }

    /// Same slicing for the already-f32 one-hot answer rows
    fn answer_batch(&self, rows: &[Vec<f32>], start: usize, end: usize) -> Tensor<B, 2> {
        let row_len = rows[start].len();
        let flat = transpose_rows(&rows[start..end], row_len, |&v| v);
        Tensor::<B, 1>::from_floats(flat.as_slice(), &self.device)
            .reshape([row_len, self.batch_size])
    }
}

/// Flatten a batch of equal-length rows in transposed order, so
/// position j of every example precedes position j+1 of any.
/// The output is contiguous in the (row_len, batch_size) layout.
fn transpose_rows<T, F>(rows: &[Vec<T>], row_len: usize, to_f32: F) -> Vec<f32>
where
    F: Fn(&T) -> f32,
{
    let mut flat = Vec::with_capacity(row_len * rows.len());
    for j in 0..row_len {
        for row in rows {
            flat.push(to_f32(&row[j]));
        }
    }
    flat
}

impl<B: Backend> Iterator for QaBatches<'_, B> {
    /// ((story, query), answer) — the model input pair plus target
    type Item = ((Tensor<B, 2>, Tensor<B, 2>), Tensor<B, 2>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.batch_index >= self.nbatches {
            return None;
        }

        let start = self.batch_index * self.batch_size;
        let end = start + self.batch_size;

        let story = self.index_batch(&self.split.story, start, end);
        let query = self.index_batch(&self.split.query, start, end);
        let answer = self.answer_batch(&self.split.answer, start, end);

        self.batch_index += 1;

        Some(((story, query), answer))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.nbatches - self.batch_index;
        (remaining, Some(remaining))
    }
}

impl<B: Backend> ExactSizeIterator for QaBatches<'_, B> {}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::vectorizer::VectorizedSplit;

    type TestBackend = burn::backend::NdArray;

    /// Split with `n` examples: story rows [i, i, i], query rows
    /// [i, i], one-hot answers of width 4 hot at i % 4.
    fn split_of(n: usize) -> VectorizedSplit {
        VectorizedSplit {
            story: (0..n).map(|i| vec![i as u32; 3]).collect(),
            query: (0..n).map(|i| vec![i as u32; 2]).collect(),
            answer: (0..n)
                .map(|i| {
                    let mut row = vec![0.0; 4];
                    row[i % 4] = 1.0;
                    row
                })
                .collect(),
        }
    }

    #[test]
    fn test_truncating_batch_count() {
        let split = split_of(10);
        let batches = QaBatches::<TestBackend>::new(&split, 3, Default::default());

        // 10 / 3 truncates to 3 — never a partial 4th batch
        assert_eq!(batches.nbatches(), 3);
        assert_eq!(batches.count(), 3);
    }

    #[test]
    fn test_exact_division_covers_all_examples() {
        let split = split_of(9);
        let batches = QaBatches::<TestBackend>::new(&split, 3, Default::default());
        assert_eq!(batches.count(), 3);
    }

    #[test]
    fn test_batch_smaller_than_split_yields_nothing() {
        let split = split_of(2);
        let mut batches = QaBatches::<TestBackend>::new(&split, 3, Default::default());
        assert_eq!(batches.nbatches(), 0);
        assert!(batches.next().is_none());
    }

    #[test]
    fn test_tensor_shapes_are_transposed() {
        let split = split_of(6);
        let mut batches = QaBatches::<TestBackend>::new(&split, 2, Default::default());

        let ((story, query), answer) = batches.next().unwrap();
        assert_eq!(story.dims(), [3, 2]);
        assert_eq!(query.dims(), [2, 2]);
        assert_eq!(answer.dims(), [4, 2]);
    }

    #[test]
    fn test_batches_slice_consecutive_examples() {
        let split = split_of(4);
        let mut batches = QaBatches::<TestBackend>::new(&split, 2, Default::default());

        let ((story, _), _) = batches.next().unwrap();
        // First batch holds examples 0 and 1; transposed layout
        // interleaves them: [0, 1, 0, 1, 0, 1]
        assert_eq!(story.into_data().value, vec![0.0, 1.0, 0.0, 1.0, 0.0, 1.0]);

        let ((story, _), _) = batches.next().unwrap();
        assert_eq!(story.into_data().value, vec![2.0, 3.0, 2.0, 3.0, 2.0, 3.0]);

        assert!(batches.next().is_none());
    }

    #[test]
    fn test_answer_one_hot_survives_transposition() {
        let split = split_of(2);
        let mut batches = QaBatches::<TestBackend>::new(&split, 2, Default::default());

        let (_, answer) = batches.next().unwrap();
        // Rows hot at 0 and 1; transposed (vocab, batch) layout:
        // position 0 → [1, 0], position 1 → [0, 1], rest zero
        assert_eq!(
            answer.into_data().value,
            vec![1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0]
        );
    }

    #[test]
    fn test_reset_is_a_no_op() {
        let split = split_of(4);
        let mut batches = QaBatches::<TestBackend>::new(&split, 2, Default::default());

        batches.next().unwrap();
        batches.reset();
        // Cursor did not move back: one batch left, then done
        batches.next().unwrap();
        assert!(batches.next().is_none());
    }
}
