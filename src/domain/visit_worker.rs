//! Background worker that applies visit counter increments.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

use crate::domain::repositories::LinkRepository;
use crate::domain::visit_event::VisitEvent;

/// Retry attempts per event before it is dropped.
const MAX_RETRIES: usize = 3;

/// Base for the exponential backoff: delays of 10ms, 100ms, 1s.
const RETRY_BASE_MILLIS: u64 = 10;

/// Drains the visit queue and increments counters in the link store.
///
/// Each event is applied with [`LinkRepository::increment_visits`], which is
/// atomic in the store, so events for the same code may be processed in any
/// order without losing updates. A failed increment is retried with jittered
/// exponential backoff up to [`MAX_RETRIES`] times, then dropped with an
/// error log; counter accuracy is best-effort and must never back-pressure
/// the redirect path.
///
/// The worker exits when all senders are dropped.
pub async fn run_visit_worker(mut rx: mpsc::Receiver<VisitEvent>, repository: Arc<dyn LinkRepository>) {
    while let Some(event) = rx.recv().await {
        let strategy = ExponentialBackoff::from_millis(RETRY_BASE_MILLIS)
            .map(jitter)
            .take(MAX_RETRIES);

        let result = Retry::spawn(strategy, || repository.increment_visits(&event.code)).await;

        match result {
            Ok(()) => {
                metrics::counter!("visits_recorded_total").increment(1);
            }
            Err(e) => {
                metrics::counter!("visits_failed_total").increment(1);
                tracing::error!(code = %event.code, error = %e, "dropping visit after retries");
            }
        }
    }

    tracing::debug!("visit queue closed, worker exiting");
}
