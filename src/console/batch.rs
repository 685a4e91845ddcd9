//! Sibling requests issued for one workflow step.
//!
//! A batch never rolls back and never cancels: it records what each request
//! did so the caller can report exactly which parts landed and retry the rest.

use std::fmt::Display;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;

use anyhow::Result;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BatchState<K> {
    Pending,
    PartiallyDone {
        succeeded: Vec<K>,
    },
    Done {
        succeeded: Vec<K>,
    },
    Failed {
        succeeded: Vec<K>,
        failed: Vec<(K, String)>,
        not_attempted: Vec<K>,
    },
}

#[derive(Clone, Debug)]
pub struct Batch<K> {
    label: String,
    total: usize,
    state: BatchState<K>,
}

impl<K: Clone + Display> Batch<K> {
    pub fn new(label: impl Into<String>, total: usize) -> Self {
        Self {
            label: label.into(),
            total,
            state: BatchState::Pending,
        }
    }

    pub fn state(&self) -> &BatchState<K> {
        &self.state
    }

    pub fn is_done(&self) -> bool {
        matches!(self.state, BatchState::Done { .. })
    }

    pub fn succeeded(&self) -> &[K] {
        match &self.state {
            BatchState::Pending => &[],
            BatchState::PartiallyDone { succeeded }
            | BatchState::Done { succeeded }
            | BatchState::Failed { succeeded, .. } => succeeded,
        }
    }

    pub fn record(&mut self, key: K, res: Result<()>) {
        let state = std::mem::replace(&mut self.state, BatchState::Pending);
        self.state = match (state, res) {
            (BatchState::Pending, Ok(())) => {
                tracing::debug!(batch = %self.label, %key, "request done");
                BatchState::PartiallyDone {
                    succeeded: vec![key],
                }
            }
            (
                BatchState::PartiallyDone { mut succeeded } | BatchState::Done { mut succeeded },
                Ok(()),
            ) => {
                tracing::debug!(batch = %self.label, %key, "request done");
                succeeded.push(key);
                BatchState::PartiallyDone { succeeded }
            }
            (BatchState::Pending, Err(err)) => {
                tracing::warn!(batch = %self.label, %key, error = %format!("{:#}", err), "request failed");
                BatchState::Failed {
                    succeeded: Vec::new(),
                    failed: vec![(key, format!("{:#}", err))],
                    not_attempted: Vec::new(),
                }
            }
            (
                BatchState::PartiallyDone { succeeded } | BatchState::Done { succeeded },
                Err(err),
            ) => {
                tracing::warn!(batch = %self.label, %key, error = %format!("{:#}", err), "request failed");
                BatchState::Failed {
                    succeeded,
                    failed: vec![(key, format!("{:#}", err))],
                    not_attempted: Vec::new(),
                }
            }
            (
                BatchState::Failed {
                    mut succeeded,
                    mut failed,
                    not_attempted,
                },
                res,
            ) => {
                match res {
                    Ok(()) => succeeded.push(key),
                    Err(err) => failed.push((key, format!("{:#}", err))),
                }
                BatchState::Failed {
                    succeeded,
                    failed,
                    not_attempted,
                }
            }
        };
    }

    fn skip(&mut self, keys: Vec<K>) {
        if keys.is_empty() {
            return;
        }
        if let BatchState::Failed { not_attempted, .. } = &mut self.state {
            not_attempted.extend(keys);
        }
    }

    fn finish(&mut self) {
        let state = std::mem::replace(&mut self.state, BatchState::Pending);
        self.state = match state {
            BatchState::Pending if self.total == 0 => BatchState::Done {
                succeeded: Vec::new(),
            },
            BatchState::PartiallyDone { succeeded } if succeeded.len() == self.total => {
                BatchState::Done { succeeded }
            }
            other => other,
        };
    }

    /// One-message summary of a batch that did not complete.
    pub fn failure_message(&self, describe: impl Fn(&K) -> String) -> Option<String> {
        let BatchState::Failed {
            succeeded,
            failed,
            not_attempted,
        } = &self.state
        else {
            return None;
        };

        let mut lines = vec![format!(
            "{}: {} of {} failed",
            self.label,
            failed.len(),
            self.total
        )];
        for (k, err) in failed {
            lines.push(format!("- {}: {}", describe(k), err));
        }
        if !succeeded.is_empty() {
            lines.push(format!(
                "succeeded: {}",
                succeeded.iter().map(&describe).collect::<Vec<_>>().join(", ")
            ));
        }
        if !not_attempted.is_empty() {
            lines.push(format!(
                "not attempted: {}",
                not_attempted
                    .iter()
                    .map(&describe)
                    .collect::<Vec<_>>()
                    .join(", ")
            ));
        }
        Some(lines.join("\n"))
    }
}

/// Upper bound on requests a concurrent batch keeps in flight.
pub const MAX_IN_FLIGHT: usize = 8;

/// Runs items on at most [`MAX_IN_FLIGHT`] scoped worker threads and waits
/// for all of them. Results are folded in completion order.
pub fn run_concurrent<K, T, F>(label: &str, items: &[(K, T)], op: F) -> Batch<K>
where
    K: Clone + Display,
    T: Sync,
    F: Fn(&T) -> Result<()> + Sync,
{
    let mut batch = Batch::new(label, items.len());
    let work: Vec<&T> = items.iter().map(|(_, item)| item).collect();
    let next = AtomicUsize::new(0);
    std::thread::scope(|s| {
        let (tx, rx) = mpsc::channel();
        for _ in 0..work.len().min(MAX_IN_FLIGHT) {
            let tx = tx.clone();
            let (op, next, work) = (&op, &next, &work);
            s.spawn(move || {
                loop {
                    let idx = next.fetch_add(1, Ordering::Relaxed);
                    let Some(&item) = work.get(idx) else { break };
                    if tx.send((idx, op(item))).is_err() {
                        break;
                    }
                }
            });
        }
        drop(tx);
        for (idx, res) in rx {
            batch.record(items[idx].0.clone(), res);
        }
    });
    batch.finish();
    batch
}

/// Runs items in order and stops at the first failure.
pub fn run_sequential<K, T, F>(label: &str, items: &[(K, T)], mut op: F) -> Batch<K>
where
    K: Clone + Display,
    F: FnMut(&T) -> Result<()>,
{
    let mut batch = Batch::new(label, items.len());
    for (idx, (key, item)) in items.iter().enumerate() {
        let res = op(item);
        let failed = res.is_err();
        batch.record(key.clone(), res);
        if failed {
            batch.skip(items[idx + 1..].iter().map(|(k, _)| k.clone()).collect());
            break;
        }
    }
    batch.finish();
    batch
}

#[cfg(test)]
#[path = "../tests/console/batch_tests.rs"]
mod tests;
