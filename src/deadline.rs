//! Watchdog-enforced deadlines for guarded calls
//!
//! Each guarded call gets its own watchdog timer, so independent deadlines can
//! run concurrently and nest freely; there is no process-global alarm. A call
//! that finishes in time yields `Some(value)` and its watchdog is dropped. A
//! call that overruns has its timeout callback invoked exactly once and yields
//! `None`. Panics and errors inside the guarded call propagate unguarded.

use std::future::Future;
use std::time::{Duration, Instant};

use log::{info, warn};

/// Run a future against a deadline.
///
/// Start and completion are logged regardless of which side wins the race.
/// The callback runs with no arguments on expiry and its return value is
/// discarded.
pub async fn with_deadline<F, T, C>(name: &str, limit: Duration, task: F, on_timeout: C) -> Option<T>
where
    F: Future<Output = T>,
    C: FnOnce(),
{
    info!("{} started with a {}s deadline", name, limit.as_secs());
    let started = Instant::now();

    let outcome = match tokio::time::timeout(limit, task).await {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("{} exceeded its {}s deadline", name, limit.as_secs());
            on_timeout();
            None
        }
    };

    info!("{} finished, elapsed {}", name, format_elapsed(started.elapsed()));
    outcome
}

/// Run a blocking closure against a deadline.
///
/// The closure runs on the blocking thread pool. On expiry the worker is
/// abandoned: it keeps running to completion on its own thread, but its result
/// is discarded and `None` is returned after the callback fires.
pub async fn with_deadline_blocking<T, F, C>(
    name: &str,
    limit: Duration,
    task: F,
    on_timeout: C,
) -> Option<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
    C: FnOnce(),
{
    info!("{} started with a {}s deadline", name, limit.as_secs());
    let started = Instant::now();

    let worker = tokio::task::spawn_blocking(task);
    let outcome = match tokio::time::timeout(limit, worker).await {
        Ok(Ok(value)) => Some(value),
        Ok(Err(join_err)) => {
            if join_err.is_panic() {
                std::panic::resume_unwind(join_err.into_panic());
            }
            warn!("{} worker was cancelled before completing", name);
            None
        }
        Err(_) => {
            warn!("{} exceeded its {}s deadline, abandoning the worker", name, limit.as_secs());
            on_timeout();
            None
        }
    };

    info!("{} finished, elapsed {}", name, format_elapsed(started.elapsed()));
    outcome
}

/// Default expiry callback: records the overrun at the highest severity.
pub fn log_overrun() {
    log::error!("guarded call exceeded its deadline, giving up on its result");
}

fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::format_elapsed;
    use std::time::Duration;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::from_secs(0)), "00:00:00");
        assert_eq!(format_elapsed(Duration::from_secs(59)), "00:00:59");
        assert_eq!(format_elapsed(Duration::from_secs(3725)), "01:02:05");
    }
}
