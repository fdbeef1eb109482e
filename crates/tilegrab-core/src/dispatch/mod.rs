//! Batch driver for fetch-and-materialize tasks.
//!
//! Runs a target set either sequentially (enumeration order) or on a
//! bounded worker pool pulling from a shared queue. Per-task failures are
//! collected into a report; the batch keeps going unless fail-fast was
//! requested.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc, Mutex};

use crate::fetch::{fetch_tile, FetchError, FetchOutcome};
use crate::targets::DownloadTarget;

/// How a batch is driven.
#[derive(Debug, Clone, Copy)]
pub struct DispatchOptions {
    /// Worker pool size; 1 processes targets strictly in enumeration order.
    pub workers: usize,
    /// Stop handing out new targets after the first failure. In-flight
    /// tasks still drain; tiles already written stay on disk.
    pub fail_fast: bool,
}

impl Default for DispatchOptions {
    fn default() -> Self {
        Self {
            workers: 1,
            fail_fast: false,
        }
    }
}

/// One failed target, kept for the batch summary.
#[derive(Debug)]
pub struct FailedFetch {
    pub index: usize,
    pub url: String,
    pub error: FetchError,
}

/// Aggregated outcome of one batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub fetched: usize,
    pub skipped: usize,
    pub failed: Vec<FailedFetch>,
}

impl BatchReport {
    /// True when every target materialized or was already present.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    fn record(&mut self, target: &DownloadTarget, result: Result<FetchOutcome, FetchError>) {
        match result {
            Ok(FetchOutcome::Fetched(_)) => self.fetched += 1,
            Ok(FetchOutcome::Skipped) => self.skipped += 1,
            Err(error) => {
                tracing::warn!(url = %target.url, "fetch failed: {}", error);
                self.failed.push(FailedFetch {
                    index: target.index,
                    url: target.url.clone(),
                    error,
                });
            }
        }
    }
}

/// Runs the whole target set. Every target is processed exactly once;
/// with more than one worker, completion order is meaningless. Returns
/// only after all in-flight tasks have finished.
pub fn run_batch(
    targets: Vec<DownloadTarget>,
    cookie: Option<&str>,
    options: DispatchOptions,
) -> BatchReport {
    let workers = options.workers.max(1).min(targets.len());
    let mut report = BatchReport::default();

    if workers <= 1 {
        for target in &targets {
            let result = fetch_tile(target, cookie);
            let failed = result.is_err();
            report.record(target, result);
            if failed && options.fail_fast {
                break;
            }
        }
        return report;
    }

    let stop = Arc::new(AtomicBool::new(false));
    let work: Arc<Mutex<VecDeque<DownloadTarget>>> =
        Arc::new(Mutex::new(targets.into_iter().collect()));
    let (tx, rx) = mpsc::channel();
    let cookie = cookie.map(str::to_owned);

    let mut handles = Vec::with_capacity(workers);
    for _ in 0..workers {
        let work = Arc::clone(&work);
        let stop = Arc::clone(&stop);
        let tx = tx.clone();
        let cookie = cookie.clone();
        let fail_fast = options.fail_fast;
        handles.push(std::thread::spawn(move || loop {
            if fail_fast && stop.load(Ordering::Relaxed) {
                break;
            }
            let target = match work.lock().unwrap().pop_front() {
                Some(t) => t,
                None => break,
            };
            let result = fetch_tile(&target, cookie.as_deref());
            if result.is_err() {
                stop.store(true, Ordering::Relaxed);
            }
            let _ = tx.send((target, result));
        }));
    }
    drop(tx);

    for (target, result) in rx {
        report.record(&target, result);
    }
    for handle in handles {
        handle
            .join()
            .unwrap_or_else(|e| panic!("fetch worker panicked: {:?}", e));
    }

    report
}
