//! Rotation Ticker - the repeating carousel timer
//!
//! A background thread counts elapsed periods into an atomic. It never touches
//! view state: the event loop drains the count with [`RotationTicker::take_pending`]
//! and applies the ticks itself, so every tick runs on the same queue as input.
//!
//! # Pattern
//!
//! - Started once when the view mounts
//! - `stop()` (or drop) clears the running flag, discards pending ticks and
//!   wakes the thread so it can be joined without waiting out the period
//! - After stop, `take_pending()` always returns 0, so no tick lands after teardown
//! - A zero period yields a ticker that never runs
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use folio_tui::state::ticker::RotationTicker;
//!
//! let mut ticker = RotationTicker::start(Duration::from_millis(5000));
//! // ... event loop ...
//! let ticks = ticker.take_pending();
//! ticker.stop();
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

pub struct RotationTicker {
    period: Duration,
    pending: Arc<AtomicU64>,
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl RotationTicker {
    pub fn start(period: Duration) -> Self {
        let pending = Arc::new(AtomicU64::new(0));
        let running = Arc::new(AtomicBool::new(false));

        // Guard against a zero period (would spin)
        if period.is_zero() {
            tracing::warn!("rotation period is zero; ticker disabled");
            return Self {
                period,
                pending,
                running,
                handle: None,
            };
        }

        running.store(true, Ordering::SeqCst);
        let thread_pending = pending.clone();
        let thread_running = running.clone();

        let handle = thread::spawn(move || {
            let mut deadline = Instant::now() + period;
            while thread_running.load(Ordering::SeqCst) {
                let now = Instant::now();
                if now < deadline {
                    thread::park_timeout(deadline - now);
                    continue;
                }
                if thread_running.load(Ordering::SeqCst) {
                    thread_pending.fetch_add(1, Ordering::SeqCst);
                }
                deadline += period;
            }
        });

        tracing::debug!(period_ms = period.as_millis() as u64, "rotation ticker started");

        Self {
            period,
            pending,
            running,
            handle: Some(handle),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Ticks elapsed since the last call. Always 0 once stopped.
    pub fn take_pending(&self) -> u64 {
        if !self.is_running() {
            return 0;
        }
        self.pending.swap(0, Ordering::SeqCst)
    }

    /// Stop the timer. Idempotent.
    pub fn stop(&mut self) {
        if self.running.swap(false, Ordering::SeqCst) {
            tracing::debug!("rotation ticker stopped");
        }
        self.pending.store(0, Ordering::SeqCst);

        if let Some(handle) = self.handle.take() {
            handle.thread().unpark();
            if handle.join().is_err() {
                tracing::warn!("rotation ticker thread panicked");
            }
        }
    }
}

impl Drop for RotationTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_accumulate() {
        let ticker = RotationTicker::start(Duration::from_millis(10));
        assert!(ticker.is_running());

        thread::sleep(Duration::from_millis(80));
        assert!(ticker.take_pending() >= 1);
    }

    #[test]
    fn test_take_pending_drains() {
        let ticker = RotationTicker::start(Duration::from_millis(10));
        thread::sleep(Duration::from_millis(50));
        let _ = ticker.take_pending();
        // Immediately after draining, at most one new tick can have landed.
        assert!(ticker.take_pending() <= 1);
    }

    #[test]
    fn test_no_ticks_after_stop() {
        let mut ticker = RotationTicker::start(Duration::from_millis(5));
        thread::sleep(Duration::from_millis(30));
        ticker.stop();

        assert!(!ticker.is_running());
        assert_eq!(ticker.take_pending(), 0);

        thread::sleep(Duration::from_millis(30));
        assert_eq!(ticker.take_pending(), 0);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut ticker = RotationTicker::start(Duration::from_millis(5));
        ticker.stop();
        ticker.stop();
        assert!(!ticker.is_running());
    }

    #[test]
    fn test_stop_joins_without_waiting_out_period() {
        let mut ticker = RotationTicker::start(Duration::from_millis(5000));
        thread::sleep(Duration::from_millis(10));

        let started = Instant::now();
        ticker.stop();
        assert!(started.elapsed() < Duration::from_millis(1000));
        assert!(ticker.handle.is_none());
    }

    #[test]
    fn test_zero_period_never_runs() {
        let ticker = RotationTicker::start(Duration::ZERO);
        assert!(!ticker.is_running());
        thread::sleep(Duration::from_millis(10));
        assert_eq!(ticker.take_pending(), 0);
    }

    #[test]
    fn test_slow_period_has_nothing_pending_yet() {
        let ticker = RotationTicker::start(Duration::from_millis(5000));
        assert_eq!(ticker.period(), Duration::from_millis(5000));
        assert_eq!(ticker.take_pending(), 0);
    }
}
