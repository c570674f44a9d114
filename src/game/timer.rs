//! Cancellable per-guess countdown
//!
//! Each `arm` spawns a scheduling thread that sleeps on a cancellation
//! channel. On expiry it re-checks, under the timer lock, that its countdown
//! is still the current one, clears the bookkeeping and hands the timeout
//! handler to a fresh thread. The handler never runs while the lock is held,
//! so it may call back into whatever owns the timer.

use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, error, trace};

/// Callback run once per expired countdown
pub type TimeoutHandler = Arc<dyn Fn() + Send + Sync + 'static>;

/// Bookkeeping shared with the scheduling thread
#[derive(Debug, Default)]
struct Countdown {
    /// Bumped on every arm; a scheduler only fires for its own generation
    generation: u64,
    armed_at: Option<Instant>,
    duration: Duration,
    /// Dropping the sender wakes the scheduler early
    cancel: Option<Sender<()>>,
}

impl Countdown {
    const fn is_active(&self) -> bool {
        self.armed_at.is_some()
    }

    fn elapsed(&self) -> Option<Duration> {
        self.armed_at.map(|at| at.elapsed())
    }

    fn reset(&mut self) {
        self.cancel = None;
        self.armed_at = None;
        self.duration = Duration::ZERO;
    }
}

/// Reusable countdown with a single timeout handler
///
/// At most one countdown is pending at a time. Re-arming replaces the
/// pending countdown; `disarm` guarantees the cancelled countdown never fires.
pub struct RoundTimer {
    countdown: Arc<Mutex<Countdown>>,
    handler: TimeoutHandler,
}

impl RoundTimer {
    #[must_use]
    pub fn new(handler: TimeoutHandler) -> Self {
        Self {
            countdown: Arc::new(Mutex::new(Countdown::default())),
            handler,
        }
    }

    /// Start a countdown, replacing any pending one
    ///
    /// Does nothing for a zero duration.
    pub fn arm(&self, duration: Duration) {
        if duration.is_zero() {
            return;
        }

        let mut countdown = self.countdown.lock();
        countdown.reset();
        countdown.generation += 1;

        let generation = countdown.generation;
        let (cancel_tx, cancel_rx) = mpsc::channel();
        countdown.armed_at = Some(Instant::now());
        countdown.duration = duration;
        countdown.cancel = Some(cancel_tx);

        let shared = Arc::clone(&self.countdown);
        let handler = Arc::clone(&self.handler);
        let spawned = thread::Builder::new()
            .name("round-timer".to_string())
            .spawn(move || {
                if cancel_rx.recv_timeout(duration) != Err(RecvTimeoutError::Timeout) {
                    // Disarmed, re-armed or dropped
                    return;
                }
                expire(&shared, generation, handler);
            });

        match spawned {
            Ok(_) => debug!(generation, ?duration, "countdown armed"),
            Err(err) => {
                error!(%err, "failed to spawn countdown thread");
                countdown.reset();
            }
        }
    }

    /// Cancel the pending countdown, if any; idempotent
    pub fn disarm(&self) {
        let mut countdown = self.countdown.lock();
        if countdown.is_active() {
            trace!(generation = countdown.generation, "countdown disarmed");
        }
        countdown.reset();
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.countdown.lock().is_active()
    }

    /// Whole seconds left, rounded down; 0 when inactive
    #[must_use]
    pub fn time_remaining(&self) -> u64 {
        let countdown = self.countdown.lock();
        countdown
            .elapsed()
            .map_or(0, |elapsed| countdown.duration.saturating_sub(elapsed).as_secs())
    }

    /// Share of the countdown already elapsed, in [0, 100]
    ///
    /// Returns 100 when inactive: there is nothing left to wait for.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        let countdown = self.countdown.lock();
        match countdown.elapsed() {
            Some(elapsed) if !countdown.duration.is_zero() => {
                (elapsed.as_secs_f64() / countdown.duration.as_secs_f64() * 100.0)
                    .clamp(0.0, 100.0)
            }
            _ => 100.0,
        }
    }
}

impl Drop for RoundTimer {
    fn drop(&mut self) {
        self.disarm();
    }
}

/// Expiry path of the scheduling thread
fn expire(countdown: &Mutex<Countdown>, generation: u64, handler: TimeoutHandler) {
    {
        let mut countdown = countdown.lock();
        if countdown.generation != generation || !countdown.is_active() {
            return;
        }
        countdown.reset();
    }

    debug!(generation, "countdown expired");
    let spawned = thread::Builder::new()
        .name("round-timeout".to_string())
        .spawn(move || handler());

    if let Err(err) = spawned {
        error!(%err, "failed to spawn timeout handler thread");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_timer() -> (RoundTimer, Arc<AtomicUsize>) {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        let timer = RoundTimer::new(Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        (timer, fired)
    }

    #[test]
    fn timer_starts_inactive() {
        let (timer, _) = counting_timer();
        assert!(!timer.is_active());
        assert_eq!(timer.time_remaining(), 0);
        assert!((timer.progress_percent() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn arm_and_disarm() {
        let (timer, fired) = counting_timer();
        timer.arm(Duration::from_secs(5));
        assert!(timer.is_active());
        assert!(timer.time_remaining() <= 5);
        assert!(timer.time_remaining() >= 4);

        timer.disarm();
        assert!(!timer.is_active());
        assert_eq!(timer.time_remaining(), 0);

        // Second disarm is a no-op
        timer.disarm();
        assert!(!timer.is_active());
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn zero_duration_is_ignored() {
        let (timer, fired) = counting_timer();
        timer.arm(Duration::ZERO);
        assert!(!timer.is_active());
        thread::sleep(Duration::from_millis(50));
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn fires_exactly_once() {
        let (timer, fired) = counting_timer();
        timer.arm(Duration::from_millis(50));
        thread::sleep(Duration::from_millis(300));

        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(!timer.is_active());
        assert_eq!(timer.time_remaining(), 0);
    }

    #[test]
    fn disarm_before_expiry_prevents_firing() {
        let (timer, fired) = counting_timer();
        timer.arm(Duration::from_millis(100));
        thread::sleep(Duration::from_millis(20));
        timer.disarm();
        thread::sleep(Duration::from_millis(250));

        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn rearm_replaces_pending_countdown() {
        let (timer, fired) = counting_timer();
        timer.arm(Duration::from_millis(100));
        timer.arm(Duration::from_millis(100));
        timer.arm(Duration::from_millis(100));
        thread::sleep(Duration::from_millis(400));

        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn rearm_after_expiry_fires_again() {
        let (timer, fired) = counting_timer();
        timer.arm(Duration::from_millis(30));
        thread::sleep(Duration::from_millis(200));
        timer.arm(Duration::from_millis(30));
        thread::sleep(Duration::from_millis(200));

        assert_eq!(fired.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn progress_moves_between_bounds() {
        let (timer, _) = counting_timer();
        timer.arm(Duration::from_secs(2));
        thread::sleep(Duration::from_millis(100));

        let progress = timer.progress_percent();
        assert!(progress > 0.0);
        assert!(progress < 100.0);
    }

    #[test]
    fn remaining_time_counts_down() {
        let (timer, _) = counting_timer();
        timer.arm(Duration::from_secs(3));
        let initial = timer.time_remaining();
        thread::sleep(Duration::from_millis(1100));
        let later = timer.time_remaining();

        assert!(later < initial);
    }

    #[test]
    fn handler_may_use_timer_owner() {
        // The handler runs outside the timer lock, so it can query the timer
        let timer = Arc::new(Mutex::new(None::<Arc<RoundTimer>>));
        let observed = Arc::new(AtomicUsize::new(0));

        let slot = Arc::clone(&timer);
        let seen = Arc::clone(&observed);
        let round_timer = Arc::new(RoundTimer::new(Arc::new(move || {
            if let Some(t) = slot.lock().as_ref() {
                if !t.is_active() {
                    seen.fetch_add(1, Ordering::SeqCst);
                }
                t.disarm();
            }
        })));
        *timer.lock() = Some(Arc::clone(&round_timer));

        round_timer.arm(Duration::from_millis(30));
        thread::sleep(Duration::from_millis(250));
        assert_eq!(observed.load(Ordering::SeqCst), 1);

        // Break the reference cycle
        timer.lock().take();
    }

    #[test]
    fn dropping_timer_cancels_countdown() {
        let (timer, fired) = counting_timer();
        timer.arm(Duration::from_millis(50));
        drop(timer);
        thread::sleep(Duration::from_millis(200));

        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
