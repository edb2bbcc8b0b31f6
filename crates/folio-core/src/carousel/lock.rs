//! Transition lock: Idle / Transitioning with a self-releasing timer.
//!
//! Acquiring the lock spawns one tokio task that sleeps for the configured
//! duration and then publishes `Idle`. Requests made while the lock is held are
//! refused, not queued. Dropping the lock aborts the pending task, so a timer can
//! never publish into a lock nobody owns anymore.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::trace;

/// Lock state as seen by subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockState {
    Idle,
    Transitioning,
}

#[derive(Debug)]
pub struct TransitionLock {
    duration: Duration,
    state: Arc<watch::Sender<LockState>>,
    /// When the current (or last) transition began
    started_at: Option<Instant>,
    /// Unlock task for the current transition
    pending: Option<JoinHandle<()>>,
}

impl TransitionLock {
    pub fn new(duration: Duration) -> Self {
        let (state, _) = watch::channel(LockState::Idle);
        Self {
            duration,
            state: Arc::new(state),
            started_at: None,
            pending: None,
        }
    }

    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[inline]
    pub fn state(&self) -> LockState {
        *self.state.borrow()
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.state() == LockState::Transitioning
    }

    /// Watch lock transitions, e.g. to redraw when navigation unlocks
    pub fn subscribe(&self) -> watch::Receiver<LockState> {
        self.state.subscribe()
    }

    /// Enter `Transitioning` and schedule the release.
    ///
    /// Returns `false` without side effects when a transition is already running.
    /// Must be called from within a tokio runtime.
    pub fn try_acquire(&mut self) -> bool {
        if self.is_locked() {
            return false;
        }

        let now = Instant::now();
        self.started_at = Some(now);

        if self.duration.is_zero() {
            // Nothing to wait for; the lock never becomes observable as held.
            return true;
        }

        self.state.send_replace(LockState::Transitioning);

        let state = Arc::clone(&self.state);
        let deadline = now + self.duration;
        // The previous task, if any, has already published Idle.
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            state.send_replace(LockState::Idle);
            trace!("transition lock released");
        }));

        true
    }

    /// Fraction of the current transition that has elapsed, `1.0` when idle
    pub fn transition_progress(&self) -> f64 {
        match self.started_at {
            Some(start) if self.is_locked() && !self.duration.is_zero() => {
                let ratio = start.elapsed().as_secs_f64() / self.duration.as_secs_f64();
                ratio.clamp(0.0, 1.0)
            }
            _ => 1.0,
        }
    }

    /// Whether an unlock task is still scheduled
    pub fn has_pending_timer(&self) -> bool {
        self.pending
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }

    /// Tear the lock down, cancelling any scheduled release
    pub fn dispose(self) {
        drop(self);
    }
}

impl Drop for TransitionLock {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
