use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, trace};

use super::index::{circular_distance, next_index, normalize_index, prev_index};
use super::lock::{LockState, TransitionLock};
use super::tier::{TierAssignment, TierPolicy};
use crate::config::CarouselConfig;
use crate::Result;

/// Navigation direction for arrow-style input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// Circular carousel over a fixed number of items.
///
/// The carousel only knows how many items there are; the items themselves stay
/// with the caller. Every accepted move locks navigation for the configured
/// transition duration, and moves requested meanwhile are dropped.
#[derive(Debug)]
pub struct Carousel {
    len: usize,
    active: usize,
    /// Signed distance of the last accepted move
    last_step: isize,
    lock: TransitionLock,
    policy: TierPolicy,
}

impl Carousel {
    /// Create a carousel over `len` items from configuration
    pub fn new(len: usize, config: &CarouselConfig) -> Result<Self> {
        Ok(Self::with_policy(
            len,
            Duration::from_millis(config.transition_ms),
            config.tier_policy()?,
        ))
    }

    pub fn with_policy(len: usize, transition: Duration, policy: TierPolicy) -> Self {
        Self {
            len,
            active: 0,
            last_step: 0,
            lock: TransitionLock::new(transition),
            policy,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Active item, `None` for an empty carousel
    #[inline]
    pub fn active_index(&self) -> Option<usize> {
        (self.len > 0).then_some(self.active)
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.lock.is_locked()
    }

    pub fn policy(&self) -> &TierPolicy {
        &self.policy
    }

    /// Eased-slide input for the renderer, `1.0` when no transition runs
    pub fn transition_progress(&self) -> f64 {
        self.lock.transition_progress()
    }

    /// Signed distance of the last accepted move, `0` before any move.
    /// The renderer slides cards in from this side.
    pub fn last_step(&self) -> isize {
        self.last_step
    }

    /// Observe lock / unlock edges
    pub fn subscribe(&self) -> watch::Receiver<LockState> {
        self.lock.subscribe()
    }

    /// Move one step. Returns whether the move was accepted.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        let target = match direction {
            Direction::Next => next_index(self.active, self.len),
            Direction::Prev => prev_index(self.active, self.len),
        };
        self.request(target)
    }

    pub fn next(&mut self) -> bool {
        self.navigate(Direction::Next)
    }

    pub fn prev(&mut self) -> bool {
        self.navigate(Direction::Prev)
    }

    /// Jump to `index`, wrapping out-of-range values into the list.
    ///
    /// Jumping to the active item does nothing, locked or not.
    pub fn go_to(&mut self, index: isize) -> bool {
        match normalize_index(index, self.len) {
            Some(target) if target != self.active => self.request(target),
            _ => false,
        }
    }

    fn request(&mut self, target: usize) -> bool {
        if self.len <= 1 {
            return false;
        }

        if !self.lock.try_acquire() {
            trace!(target, active = self.active, "carousel navigation dropped while locked");
            return false;
        }

        debug!(from = self.active, to = target, "carousel navigation");
        self.last_step = circular_distance(target, self.active, self.len);
        self.active = target;
        true
    }

    /// Placement of `index` relative to the active item
    pub fn tier_of(&self, index: usize) -> Option<TierAssignment> {
        self.policy.tier_of(index, self.active, self.len)
    }

    /// Visible items, left to right
    pub fn window(&self) -> Vec<(usize, TierAssignment)> {
        self.policy.window(self.active, self.len)
    }

    /// Cancel any pending unlock and discard the carousel
    pub fn dispose(self) {
        self.lock.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::Tier;

    const DURATION: Duration = Duration::from_millis(600);

    fn carousel(len: usize) -> Carousel {
        Carousel::with_policy(len, DURATION, TierPolicy::default())
    }

    async fn wait_out_lock() {
        tokio::time::advance(DURATION).await;
        tokio::task::yield_now().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_five_waited_steps_cycle() {
        let mut c = carousel(5);
        let mut seen = Vec::new();
        for _ in 0..5 {
            assert!(c.next());
            seen.push(c.active_index().unwrap());
            wait_out_lock().await;
            assert!(!c.is_locked());
        }
        assert_eq!(seen, vec![1, 2, 3, 4, 0]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_immediate_second_next_is_dropped() {
        let mut c = carousel(5);
        assert!(c.next());
        assert!(!c.next());
        assert_eq!(c.active_index(), Some(1));
        assert!(c.is_locked());
    }

    #[tokio::test(start_paused = true)]
    async fn test_locked_ignores_all_navigation() {
        let mut c = carousel(5);
        assert!(c.next());

        assert!(!c.prev());
        assert!(!c.go_to(3));
        assert!(!c.navigate(Direction::Next));
        assert_eq!(c.active_index(), Some(1));

        wait_out_lock().await;
        assert!(c.go_to(3));
        assert_eq!(c.active_index(), Some(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_prev_wraps_backwards() {
        let mut c = carousel(5);
        assert!(c.prev());
        assert_eq!(c.active_index(), Some(4));
        assert_eq!(c.last_step(), -1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_last_step_tracks_jump_distance() {
        let mut c = carousel(5);
        assert_eq!(c.last_step(), 0);
        c.go_to(2);
        assert_eq!(c.last_step(), 2);

        wait_out_lock().await;
        // 2 -> 0 is shorter backwards
        c.go_to(0);
        assert_eq!(c.last_step(), -2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_item_is_inert() {
        let mut c = carousel(1);
        assert!(!c.next());
        assert!(!c.prev());
        assert!(!c.go_to(0));
        assert!(!c.go_to(3));
        assert!(!c.is_locked());
        assert_eq!(c.active_index(), Some(0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_is_inert() {
        let mut c = carousel(0);
        assert!(c.is_empty());
        assert!(!c.next());
        assert!(!c.go_to(2));
        assert_eq!(c.active_index(), None);
        assert!(c.tier_of(0).is_none());
        assert!(!c.is_locked());
    }

    #[tokio::test(start_paused = true)]
    async fn test_go_to_same_index_is_noop_even_unlocked() {
        let mut c = carousel(5);
        assert!(!c.go_to(0));
        assert!(!c.is_locked());
    }

    #[tokio::test(start_paused = true)]
    async fn test_go_to_wraps_out_of_range() {
        let mut c = carousel(5);
        assert!(c.go_to(7));
        assert_eq!(c.active_index(), Some(2));

        wait_out_lock().await;
        assert!(c.go_to(-1));
        assert_eq!(c.active_index(), Some(4));

        // 9 mod 5 == 4 == active
        wait_out_lock().await;
        assert!(!c.go_to(9));
    }

    #[tokio::test(start_paused = true)]
    async fn test_tiers_follow_active_index() {
        let mut c = carousel(5);
        c.next();
        assert_eq!(c.tier_of(1).unwrap().tier, Tier::Center);
        assert_eq!(c.tier_of(0).unwrap().offset, -1);
        assert_eq!(c.tier_of(3).unwrap().offset, 2);
        assert_eq!(c.tier_of(4).unwrap().offset, -2);

        let order: Vec<usize> = c.window().into_iter().map(|(i, _)| i).collect();
        assert_eq!(order, vec![4, 0, 1, 2, 3]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_n_steps_return_to_start_from_any_index() {
        let mut c = carousel(4);
        c.go_to(2);
        wait_out_lock().await;

        for _ in 0..4 {
            assert!(c.next());
            wait_out_lock().await;
        }
        assert_eq!(c.active_index(), Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dispose_cancels_timer() {
        let mut c = carousel(3);
        let rx = c.subscribe();
        c.next();
        c.dispose();

        wait_out_lock().await;
        assert_eq!(*rx.borrow(), LockState::Transitioning);
        assert!(rx.has_changed().is_err());
    }

    #[tokio::test]
    async fn test_from_config() {
        let config = CarouselConfig {
            transition_ms: 800,
            ..Default::default()
        };
        let c = Carousel::new(5, &config).unwrap();
        assert_eq!(c.len(), 5);
        assert_eq!(c.policy().render_radius(), 2);
    }
}
