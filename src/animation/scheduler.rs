//! Cancellable timers on the tokio runtime.
//!
//! Every timer returns a [`TimerHandle`]. Dropping the handle cancels the
//! timer, so a view that owns its handles cannot leave a callback firing
//! after it is torn down.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

#[derive(Debug)]
pub struct TimerHandle {
    task: JoinHandle<()>,
    cancelled: Arc<AtomicBool>,
}

impl TimerHandle {
    /// Stop the timer. No new invocation starts after this returns, but one
    /// already running on another worker may still finish. Consumers that
    /// must not see its output gate on a generation id (see `HeroView`).
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
        self.task.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// True once the timer has stopped, either cancelled or because the
    /// callback asked to stop.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Run `callback` once after `delay`.
pub fn schedule_once<F>(delay: Duration, callback: F) -> TimerHandle
where
    F: FnOnce() + Send + 'static,
{
    let mut callback = Some(callback);
    schedule_dynamic(delay, move || {
        if let Some(f) = callback.take() {
            f();
        }
        None
    })
}

/// Variable-period timer. `callback` runs after `initial` and returns the
/// delay before its next run, or `None` to stop.
pub fn schedule_dynamic<F>(initial: Duration, mut callback: F) -> TimerHandle
where
    F: FnMut() -> Option<Duration> + Send + 'static,
{
    let cancelled = Arc::new(AtomicBool::new(false));
    let flag = cancelled.clone();
    let task = tokio::spawn(async move {
        let mut delay = initial;
        loop {
            tokio::time::sleep(delay).await;
            if flag.load(Ordering::Acquire) {
                break;
            }
            match callback() {
                Some(next) => delay = next,
                None => break,
            }
        }
    });
    TimerHandle { task, cancelled }
}

/// Fixed-period timer, first run after one `period`.
pub fn schedule_every<F>(period: Duration, mut callback: F) -> TimerHandle
where
    F: FnMut() + Send + 'static,
{
    schedule_dynamic(period, move || {
        callback();
        Some(period)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Mutex;
    use tokio::time::{sleep, Instant};

    #[tokio::test(start_paused = true)]
    async fn test_once_fires_after_delay() {
        let hits = Arc::new(AtomicUsize::new(0));
        let h = hits.clone();
        let handle = schedule_once(Duration::from_millis(100), move || {
            h.fetch_add(1, Ordering::SeqCst);
        });

        sleep(Duration::from_millis(99)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);
        sleep(Duration::from_millis(2)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        sleep(Duration::from_millis(500)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(handle.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dynamic_rearms_with_returned_delay() {
        let start = Instant::now();
        let fired = Arc::new(Mutex::new(Vec::new()));
        let log = fired.clone();
        let mut delays = vec![30u64, 20, 10].into_iter();
        let _handle = schedule_dynamic(Duration::from_millis(10), move || {
            log.lock().unwrap().push(start.elapsed().as_millis());
            delays.next().map(Duration::from_millis)
        });

        sleep(Duration::from_millis(200)).await;
        assert_eq!(*fired.lock().unwrap(), vec![10, 40, 60, 70]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_callbacks() {
        let hits = Arc::new(AtomicUsize::new(0));
        let h = hits.clone();
        let handle = schedule_every(Duration::from_millis(10), move || {
            h.fetch_add(1, Ordering::SeqCst);
        });

        sleep(Duration::from_millis(35)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 3);

        handle.cancel();
        assert!(handle.is_cancelled());
        sleep(Duration::from_secs(5)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels() {
        let hits = Arc::new(AtomicUsize::new(0));
        let h = hits.clone();
        let handle = schedule_every(Duration::from_millis(10), move || {
            h.fetch_add(1, Ordering::SeqCst);
        });
        drop(handle);
        sleep(Duration::from_secs(1)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }
}
