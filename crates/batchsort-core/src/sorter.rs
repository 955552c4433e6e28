//! Batch sorting in sequential and concurrent modes.
//!
//! Both modes leave the input untouched: every sequence is cloned before it
//! is sorted, so callers may keep referencing the original batch.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::{Error, Result};

/// Processing mode for a batch of sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// Sort sequences one after another; output order matches input order.
    Sequential,
    /// Sort each sequence in its own spawned task; output order follows
    /// completion order and is not deterministic.
    Concurrent,
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequential => write!(f, "sequential"),
            Self::Concurrent => write!(f, "concurrent"),
        }
    }
}

/// Sorts every sequence in the batch, one after another.
///
/// The output preserves input order: `out[i]` is the ascending sort of
/// `batch[i]`.
#[must_use]
pub fn sort_sequential(batch: &[Vec<i64>]) -> Vec<Vec<i64>> {
    let mut sorted_arrays = Vec::with_capacity(batch.len());

    for arr in batch {
        let mut sorted = arr.clone();
        sorted.sort_unstable();
        sorted_arrays.push(sorted);
    }

    sorted_arrays
}

/// Sorts every sequence in the batch, one spawned task per sequence.
///
/// Each task sorts its own copy and pushes the result onto a shared
/// collection; the mutex is held only for the push. The call returns once
/// every task has finished (fan-out/join), so every input sequence is
/// sorted exactly once, but the order of the output follows whichever task
/// acquired the lock first.
///
/// # Errors
///
/// Returns [`Error::TaskFailed`] if any spawned task fails to complete; the
/// first failure abandons the whole batch.
pub async fn sort_concurrent(batch: &[Vec<i64>]) -> Result<Vec<Vec<i64>>> {
    let sorted_arrays = Arc::new(Mutex::new(Vec::with_capacity(batch.len())));

    let mut handles = Vec::with_capacity(batch.len());
    for arr in batch {
        let arr = arr.clone();
        let sorted_arrays = Arc::clone(&sorted_arrays);

        handles.push(tokio::spawn(async move {
            let mut sorted = arr;
            sorted.sort_unstable();
            sorted_arrays.lock().push(sorted);
        }));
    }

    for handle in handles {
        handle
            .await
            .map_err(|e| Error::task_failed(e.to_string()))?;
    }

    Arc::try_unwrap(sorted_arrays)
        .map(Mutex::into_inner)
        .map_err(|_| Error::internal("result collection still shared after join"))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sorts the outer sequences so outputs can be compared as multisets.
    fn as_multiset(mut arrays: Vec<Vec<i64>>) -> Vec<Vec<i64>> {
        arrays.sort();
        arrays
    }

    #[test]
    fn sequential_preserves_input_order() {
        let batch = vec![vec![3, 1, 2], vec![5, 4]];
        let sorted = sort_sequential(&batch);
        assert_eq!(sorted, vec![vec![1, 2, 3], vec![4, 5]]);
    }

    #[test]
    fn sequential_handles_duplicates_and_negatives() {
        let batch = vec![vec![5, -1, 5, 0, -10]];
        let sorted = sort_sequential(&batch);
        assert_eq!(sorted, vec![vec![-10, -1, 0, 5, 5]]);
    }

    #[test]
    fn sequential_is_idempotent_on_sorted_input() {
        let batch = vec![vec![1, 2, 3, 4]];
        let once = sort_sequential(&batch);
        let twice = sort_sequential(&once);
        assert_eq!(once, twice);
        assert_eq!(once, batch);
    }

    #[test]
    fn sequential_empty_batch_yields_empty_output() {
        let sorted = sort_sequential(&[]);
        assert!(sorted.is_empty());
    }

    #[test]
    fn sequential_keeps_empty_inner_sequences() {
        let batch = vec![vec![]];
        let sorted = sort_sequential(&batch);
        assert_eq!(sorted, vec![Vec::<i64>::new()]);
    }

    #[test]
    fn sequential_does_not_mutate_input() {
        let batch = vec![vec![9, 8, 7]];
        let _ = sort_sequential(&batch);
        assert_eq!(batch, vec![vec![9, 8, 7]]);
    }

    #[tokio::test]
    async fn concurrent_matches_sequential_as_multiset() {
        let batch: Vec<Vec<i64>> = (0..32)
            .map(|i| (0..50).map(|j| ((i * 31 + j * 17) % 100) - 50).collect())
            .collect();

        let sequential = sort_sequential(&batch);
        let concurrent = sort_concurrent(&batch).await.unwrap();

        assert_eq!(concurrent.len(), batch.len());
        assert_eq!(as_multiset(concurrent), as_multiset(sequential));
    }

    #[tokio::test]
    async fn concurrent_empty_batch_yields_empty_output() {
        let sorted = sort_concurrent(&[]).await.unwrap();
        assert!(sorted.is_empty());
    }

    #[tokio::test]
    async fn concurrent_keeps_empty_inner_sequences() {
        let batch = vec![vec![]];
        let sorted = sort_concurrent(&batch).await.unwrap();
        assert_eq!(sorted, vec![Vec::<i64>::new()]);
    }

    #[tokio::test]
    async fn concurrent_does_not_mutate_input() {
        let batch = vec![vec![3, 2, 1], vec![6, 5, 4]];
        let _ = sort_concurrent(&batch).await.unwrap();
        assert_eq!(batch, vec![vec![3, 2, 1], vec![6, 5, 4]]);
    }

    #[test]
    fn sort_mode_display() {
        assert_eq!(SortMode::Sequential.to_string(), "sequential");
        assert_eq!(SortMode::Concurrent.to_string(), "concurrent");
    }
}
