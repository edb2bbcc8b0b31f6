//! Scroll progress tracking for vertically stacked steps.
//!
//! Maps a continuous scroll position onto a fractional progress through a
//! region and onto the index of the step currently at the reading position.
//! All measurements are in the layout layer's units (terminal rows for the TUI).

use serde::Serialize;
use tracing::debug;

use crate::config::TimelineConfig;

/// Vertical extent in document coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Region {
    pub top: f64,
    pub height: f64,
}

impl Region {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    #[inline]
    pub fn center(&self) -> f64 {
        self.top + self.height / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Raw viewport measurements for one scroll / resize signal
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_offset: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_offset: f64, viewport_height: f64) -> Self {
        Self {
            scroll_offset,
            viewport_height,
        }
    }

    #[inline]
    fn midpoint(&self) -> f64 {
        self.scroll_offset + self.viewport_height / 2.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScrollProgress {
    /// Fraction of the scroll window passed, in `[0, 1]`
    pub progress: f64,
    /// Step at the reading position, `None` when there are no steps
    pub active_step: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct ScrollProgressTracker {
    lead_ratio: f64,
    trail_ratio: f64,
    region: Region,
    anchors: Vec<Region>,
    metrics: ScrollMetrics,
    state: ScrollProgress,
}

impl ScrollProgressTracker {
    pub fn new(config: &TimelineConfig, region: Region, anchors: Vec<Region>) -> Self {
        let mut tracker = Self {
            lead_ratio: config.lead_ratio,
            trail_ratio: config.trail_ratio,
            region,
            anchors,
            metrics: ScrollMetrics::default(),
            state: ScrollProgress::default(),
        };
        tracker.recompute();
        tracker
    }

    /// Replace the tracked layout (after a resize) and recompute
    pub fn set_layout(&mut self, region: Region, anchors: Vec<Region>) {
        debug!(
            top = region.top,
            height = region.height,
            steps = anchors.len(),
            "scroll tracker layout changed"
        );
        self.region = region;
        self.anchors = anchors;
        self.recompute();
    }

    /// Feed a scroll / resize signal
    pub fn update(&mut self, metrics: ScrollMetrics) -> ScrollProgress {
        self.metrics = metrics;
        self.recompute();
        self.state
    }

    #[inline]
    pub fn progress(&self) -> f64 {
        self.state.progress
    }

    #[inline]
    pub fn active_step(&self) -> Option<usize> {
        self.state.active_step
    }

    #[inline]
    pub fn state(&self) -> ScrollProgress {
        self.state
    }

    pub fn anchors(&self) -> &[Region] {
        &self.anchors
    }

    /// Scroll window `[start, end]` for the current viewport height
    pub fn scroll_window(&self) -> (f64, f64) {
        let vh = self.metrics.viewport_height;
        let start = self.region.top - self.lead_ratio * vh;
        let end = self.region.bottom() - self.trail_ratio * vh;
        (start, end)
    }

    fn recompute(&mut self) {
        self.state = ScrollProgress {
            progress: self.compute_progress(),
            active_step: self.compute_active_step(),
        };
    }

    fn compute_progress(&self) -> f64 {
        let (start, end) = self.scroll_window();
        let scroll = self.metrics.scroll_offset;

        if end <= start {
            return if scroll >= end { 1.0 } else { 0.0 };
        }

        ((scroll - start) / (end - start)).clamp(0.0, 1.0)
    }

    fn compute_active_step(&self) -> Option<usize> {
        if self.anchors.is_empty() {
            return None;
        }

        let midpoint = self.metrics.midpoint();
        let last_passed = self
            .anchors
            .iter()
            .enumerate()
            .filter(|(_, anchor)| anchor.center() < midpoint)
            .map(|(i, _)| i)
            .last();

        Some(last_passed.unwrap_or(0))
    }
}
