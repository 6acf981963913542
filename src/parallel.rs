//! Keyed parallel fan-out over independent units of work.
//!
//! Both corpus-building phases, per-term document frequency and per-document
//! TF-IDF vectors, are embarrassingly parallel: every unit of work reads
//! shared state and writes nothing. This module dispatches the units to a
//! bounded thread pool and collects the results into a map keyed by a
//! caller-supplied key function. The collecting map is populated only here,
//! never by the workers, so no locking is involved.
//!
//! A unit that fails is logged with its key and omitted from the result map;
//! sibling units keep running. Callers must treat a missing key as
//! "computation failed for this key", not as a zero result.

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;
use std::sync::mpsc;

use log::error;
use rayon::ThreadPoolBuilder;

use crate::error::{Result, XystonError};

/// Run `op` over every item on a pool of `workers` threads and collect the
/// results into a map keyed by `key`.
///
/// Results arrive in arbitrary completion order; content is independent of
/// that order because every item's key is unique. Failed items are logged
/// and excluded rather than propagated.
pub(crate) fn compute_keyed<T, K, V, Op, Key>(
    workers: usize,
    items: Vec<T>,
    op: Op,
    key: Key,
) -> Result<HashMap<K, V>>
where
    T: Send,
    K: Eq + Hash + Display + Send,
    V: Send,
    Op: Fn(T) -> Result<V> + Sync,
    Key: Fn(&T) -> K + Sync,
{
    let pool = ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("xyston-worker-{i}"))
        .build()
        .map_err(|e| XystonError::other(format!("Failed to create thread pool: {e}")))?;

    let (tx, rx) = mpsc::channel();

    pool.scope(|scope| {
        for item in items {
            let tx = tx.clone();
            let op = &op;
            let key = &key;
            scope.spawn(move |_| {
                let item_key = key(&item);
                let _ = tx.send((item_key, op(item)));
            });
        }
    });

    // Drop the original sender so the receiver knows when all tasks are done.
    drop(tx);

    let mut results = HashMap::new();
    for (item_key, result) in rx {
        match result {
            Ok(value) => {
                results.insert(item_key, value);
            }
            Err(e) => error!("Computation for key '{item_key}' failed: {e}"),
        }
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_keyed_collects_all_results() {
        let items: Vec<usize> = (0..32).collect();
        let results = compute_keyed(4, items, |n| Ok(n * n), |n| n.to_string()).unwrap();

        assert_eq!(results.len(), 32);
        assert_eq!(results["7"], 49);
        assert_eq!(results["31"], 961);
    }

    #[test]
    fn test_failed_items_are_omitted() {
        let items: Vec<usize> = (0..8).collect();
        let results = compute_keyed(
            4,
            items,
            |n| {
                if n == 3 {
                    Err(XystonError::other("injected failure"))
                } else {
                    Ok(n)
                }
            },
            |n| n.to_string(),
        )
        .unwrap();

        assert_eq!(results.len(), 7);
        assert!(!results.contains_key("3"));
        assert_eq!(results["4"], 4);
    }

    #[test]
    fn test_single_worker_pool() {
        let items = vec!["a", "b", "c"];
        let results = compute_keyed(1, items, |s| Ok(s.len()), |s| s.to_string()).unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(results["a"], 1);
    }
}
