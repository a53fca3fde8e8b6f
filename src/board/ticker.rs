use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

static LIVE_TICKERS: AtomicUsize = AtomicUsize::new(0);

/// Recurring interval schedule owned by a widget.
///
/// A ticker is data, not a thread: the frame loop polls it with the current
/// instant and the ticker reports how many whole periods elapsed since the
/// last poll. Cancellation is the drop of the owning widget, so a ticker can
/// never outlive the panel it belongs to and is released exactly once.
pub struct Ticker {
    period: Duration,
    next_due: Instant,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self::starting_at(Instant::now(), period)
    }

    /// Create a ticker whose first tick is due `period` after `now`.
    pub fn starting_at(now: Instant, period: Duration) -> Self {
        // Zero-length periods would spin the poll loop forever.
        let period = period.max(Duration::from_millis(1));
        LIVE_TICKERS.fetch_add(1, Ordering::SeqCst);
        Self {
            period,
            next_due: now + period,
        }
    }

    /// Number of whole periods elapsed up to `now`. Catches up if polling
    /// fell behind, so one late poll yields every missed tick.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let mut fired = 0;
        while now >= self.next_due {
            self.next_due += self.period;
            fired += 1;
        }
        fired
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time until the next tick is due. Zero if it is already overdue.
    pub fn time_to_due(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }

    /// Number of tickers currently alive across the process. Teardown code is
    /// correct exactly when this returns to its prior value after a widget is
    /// dropped.
    pub fn live_count() -> usize {
        LIVE_TICKERS.load(Ordering::SeqCst)
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        LIVE_TICKERS.fetch_sub(1, Ordering::SeqCst);
    }
}
