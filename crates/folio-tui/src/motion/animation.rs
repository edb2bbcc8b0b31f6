//! Smooth page scroll controller
//!
//! Combines easing and timing to animate the page offset. Key presses feed
//! deltas in; the main loop calls `update` once per frame to read the offset.

use std::time::{Duration, Instant};

use folio_core::ScrollConfig;

use super::easing::{EasingType, EasingTypeExt};
use super::timing::{lerp_u16, progress_at};

/// Active scroll animation state
#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from: u16,
    to: u16,
    duration: Duration,
    easing: EasingType,
}

/// Page scroll animator
///
/// Call `scroll_to()` / `scroll_by()` to move, then `update()` each frame to get
/// the current interpolated offset.
#[derive(Debug, Clone)]
pub struct PageScroller {
    animation: Option<ActiveAnimation>,
    config: ScrollConfig,
    /// Current scroll position (always up-to-date)
    current_scroll: u16,
    /// Pending scroll delta for batching multiple scroll events
    pending_delta: i32,
}

impl Default for PageScroller {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl PageScroller {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            animation: None,
            config,
            current_scroll: 0,
            pending_delta: 0,
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    fn duration(&self) -> Duration {
        Duration::from_millis(self.config.animation_duration_ms)
    }

    /// Smooth scrolling is on and has a non-zero duration
    #[inline]
    pub fn is_smooth(&self) -> bool {
        self.config.smooth_enabled && self.config.animation_duration_ms > 0
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Check if there's pending work (animation or pending delta)
    /// Use this to determine if we need high frame rate
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.animation.is_some() || self.pending_delta != 0
    }

    /// Get the target scroll position (final position after animation)
    pub fn target_scroll(&self) -> u16 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.current_scroll)
    }

    #[inline]
    pub fn current_scroll(&self) -> u16 {
        self.current_scroll
    }

    /// Set scroll position immediately (no animation)
    pub fn set_scroll(&mut self, scroll: u16) {
        self.animation = None;
        self.current_scroll = scroll;
        self.pending_delta = 0;
    }

    /// Animate to an absolute offset, or jump when smooth scrolling is off
    pub fn scroll_to(&mut self, target: u16, max_scroll: u16) {
        self.scroll_to_at(target, max_scroll, Instant::now());
    }

    fn scroll_to_at(&mut self, target: u16, max_scroll: u16, now: Instant) {
        let target = target.min(max_scroll);
        self.pending_delta = 0;

        if !self.is_smooth() || self.current_scroll == target {
            self.current_scroll = target;
            self.animation = None;
            return;
        }

        self.animation = Some(ActiveAnimation {
            start: now,
            from: self.current_scroll,
            to: target,
            duration: self.duration(),
            easing: self.config.easing,
        });
    }

    /// Scroll by a delta amount (positive = down, negative = up)
    ///
    /// Multiple scroll events within the same animation frame are batched
    /// together for smoother handling of rapid key presses.
    pub fn scroll_by(&mut self, delta: i32, max_scroll: u16) {
        if !self.is_smooth() {
            self.current_scroll = (self.current_scroll as i32 + delta)
                .clamp(0, max_scroll as i32) as u16;
            self.animation = None;
            return;
        }

        self.pending_delta += delta;
    }

    /// Scroll down by the configured line count
    pub fn scroll_down(&mut self, max_scroll: u16) {
        self.scroll_by(self.config.scroll_lines.max(1) as i32, max_scroll);
    }

    /// Scroll up by the configured line count
    pub fn scroll_up(&mut self, max_scroll: u16) {
        self.scroll_by(-(self.config.scroll_lines.max(1) as i32), max_scroll);
    }

    pub fn scroll_half_page_down(&mut self, viewport_height: u16, max_scroll: u16) {
        let half_page = (viewport_height / 2).max(1) as i32;
        self.scroll_by(half_page, max_scroll);
    }

    pub fn scroll_half_page_up(&mut self, viewport_height: u16, max_scroll: u16) {
        let half_page = (viewport_height / 2).max(1) as i32;
        self.scroll_by(-half_page, max_scroll);
    }

    pub fn scroll_full_page_down(&mut self, viewport_height: u16, max_scroll: u16) {
        self.scroll_by(viewport_height as i32, max_scroll);
    }

    pub fn scroll_full_page_up(&mut self, viewport_height: u16, max_scroll: u16) {
        self.scroll_by(-(viewport_height as i32), max_scroll);
    }

    /// Advance the animation and return the current offset.
    /// Call once per frame.
    pub fn update(&mut self, max_scroll: u16) -> u16 {
        self.update_at(max_scroll, Instant::now())
    }

    fn update_at(&mut self, max_scroll: u16, now: Instant) -> u16 {
        if self.pending_delta != 0 {
            let target = self.target_scroll();
            let new_target = (target as i32 + self.pending_delta)
                .clamp(0, max_scroll as i32) as u16;
            self.pending_delta = 0;

            // Retarget from the visible position
            if new_target != self.current_scroll {
                self.animation = Some(ActiveAnimation {
                    start: now,
                    from: self.current_scroll,
                    to: new_target,
                    duration: self.duration(),
                    easing: self.config.easing,
                });
            }
        }

        if let Some(ref anim) = self.animation {
            let t = progress_at(anim.start, anim.duration, now);
            if t >= 1.0 {
                self.current_scroll = anim.to.min(max_scroll);
                self.animation = None;
            } else {
                let eased_t = anim.easing.apply(t);
                self.current_scroll = lerp_u16(anim.from, anim.to, eased_t).min(max_scroll);
            }
        }

        // Layout may have shrunk underneath us
        self.current_scroll = self.current_scroll.min(max_scroll);
        self.current_scroll
    }

    /// Cancel any active animation and stop at current position
    pub fn cancel(&mut self) {
        self.animation = None;
        self.pending_delta = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smooth(duration_ms: u64) -> PageScroller {
        PageScroller::new(ScrollConfig {
            smooth_enabled: true,
            animation_duration_ms: duration_ms,
            easing: EasingType::Linear,
            ..Default::default()
        })
    }

    #[test]
    fn test_instant_scroll_when_disabled() {
        let mut scroller = PageScroller::new(ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        });

        scroller.scroll_to(100, 200);
        assert_eq!(scroller.current_scroll(), 100);
        assert!(!scroller.is_animating());

        scroller.scroll_by(-500, 200);
        assert_eq!(scroller.current_scroll(), 0);
    }

    #[test]
    fn test_animation_interpolates() {
        let mut scroller = smooth(100);
        let start = Instant::now();
        scroller.scroll_to_at(100, 200, start);
        assert!(scroller.is_animating());
        assert_eq!(scroller.target_scroll(), 100);

        assert_eq!(scroller.update_at(200, start + Duration::from_millis(50)), 50);
        assert_eq!(scroller.update_at(200, start + Duration::from_millis(150)), 100);
        assert!(!scroller.is_animating());
    }

    #[test]
    fn test_scroll_by_batching() {
        let mut scroller = smooth(100);

        scroller.scroll_by(10, 200);
        scroller.scroll_by(10, 200);
        scroller.scroll_by(10, 200);
        assert!(scroller.needs_update());

        scroller.update(200);
        assert_eq!(scroller.target_scroll(), 30);
    }

    #[test]
    fn test_scroll_clamp_max() {
        let mut scroller = smooth(100);
        scroller.set_scroll(50);
        scroller.scroll_to(300, 100);
        scroller.update(100);
        assert!(scroller.target_scroll() <= 100);
    }

    #[test]
    fn test_shrinking_max_clamps_current() {
        let mut scroller = smooth(100);
        scroller.set_scroll(80);
        assert_eq!(scroller.update(40), 40);
    }

    #[test]
    fn test_scroll_lines_respected() {
        let mut scroller = PageScroller::new(ScrollConfig {
            smooth_enabled: false,
            scroll_lines: 3,
            ..Default::default()
        });
        scroller.scroll_down(100);
        assert_eq!(scroller.current_scroll(), 3);
        scroller.scroll_up(100);
        assert_eq!(scroller.current_scroll(), 0);
    }
}
