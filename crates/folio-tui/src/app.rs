use std::sync::Arc;
use std::time::Instant;

use anyhow::{anyhow, Result};
use folio_core::{
    AppConfig, Carousel, Portfolio, Project, ScrollMetrics, ScrollProgressTracker, Section,
    Typewriter,
};
use tracing::{debug, info};

use crate::layout::{PageLayout, NAV_HEIGHT, STATUS_HEIGHT};
use crate::motion::PageScroller;
use crate::theme::Theme;
use crate::themes::{load_theme, theme_by_name};

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal browsing mode
    Normal,
    /// Help overlay
    Help,
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Page content
    pub portfolio: Portfolio,
    /// Project carousel over `portfolio.projects`
    pub carousel: Carousel,
    /// Page progress and active section
    pub tracker: ScrollProgressTracker,
    /// Smooth page offset
    pub scroller: PageScroller,
    /// Hero role line
    pub typewriter: Typewriter,
    pub theme: Theme,
    /// Whether the alternate theme is showing
    pub alternate_theme: bool,
    pub layout: PageLayout,
    /// Current application mode
    pub mode: Mode,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message
    pub status_message: Option<String>,
    /// Pending key for multi-key sequences (e.g., 'gg')
    pub pending_key: Option<char>,
    /// Rows available to the page between nav bar and status bar
    pub viewport_height: u16,
    /// Start of the session, drives looping effects
    pub started_at: Instant,
}

impl App {
    pub fn new(config: Arc<AppConfig>, portfolio: Portfolio) -> Result<Self> {
        let carousel = Carousel::new(portfolio.projects.len(), &config.carousel)?;
        let layout = PageLayout::compute(&portfolio, 80);
        let tracker =
            ScrollProgressTracker::new(&config.timeline, layout.document_region(), layout.anchors());
        let typewriter = Typewriter::new(portfolio.profile.roles.clone(), &config.ui.typewriter);

        let mut app = Self {
            theme: load_theme(&config.ui.theme),
            scroller: PageScroller::new(config.ui.scroll.clone()),
            config,
            portfolio,
            carousel,
            tracker,
            typewriter,
            alternate_theme: false,
            layout,
            mode: Mode::Normal,
            should_quit: false,
            status_message: None,
            pending_key: None,
            viewport_height: 24 - NAV_HEIGHT - STATUS_HEIGHT,
            started_at: Instant::now(),
        };
        app.sync_tracker();
        Ok(app)
    }

    /// Re-measure the page for a new terminal size
    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport_height = height.saturating_sub(NAV_HEIGHT + STATUS_HEIGHT).max(1);
        let layout = PageLayout::compute(&self.portfolio, width);
        if layout != self.layout {
            debug!(width, height, total = layout.total_height(), "page layout changed");
            self.tracker
                .set_layout(layout.document_region(), layout.anchors());
            self.layout = layout;
        }
        self.update_animations();
    }

    pub fn max_scroll(&self) -> u16 {
        self.layout.total_height().saturating_sub(self.viewport_height)
    }

    /// Advance the page scroll and feed the new offset to the tracker
    pub fn update_animations(&mut self) {
        self.scroller.update(self.max_scroll());
        self.sync_tracker();
    }

    fn sync_tracker(&mut self) {
        self.tracker.update(ScrollMetrics::new(
            self.scroller.current_scroll() as f64,
            self.viewport_height as f64,
        ));
    }

    /// Periodic update for time-based effects
    pub fn tick(&mut self, now: Instant) {
        self.typewriter.tick(now);
    }

    /// Whether the next frame should come at animation rate
    pub fn needs_fast_update(&self) -> bool {
        self.scroller.needs_update() || self.carousel.is_locked()
    }

    /// Section at the reading position
    pub fn active_section(&self) -> Section {
        self.tracker
            .active_step()
            .and_then(|i| Section::ALL.get(i))
            .copied()
            .unwrap_or(Section::Home)
    }

    pub fn active_project(&self) -> Option<&Project> {
        self.carousel
            .active_index()
            .and_then(|i| self.portfolio.projects.get(i))
    }

    /// Loop phase in `[0, 1)` for the name gradient
    pub fn gradient_phase(&self) -> f64 {
        (self.started_at.elapsed().as_secs_f64() / 4.0).fract()
    }

    /// Blinking typewriter cursor
    pub fn cursor_visible(&self) -> bool {
        (self.started_at.elapsed().as_millis() / 500) % 2 == 0
    }

    pub fn scroll_down(&mut self) {
        let max = self.max_scroll();
        self.scroller.scroll_down(max);
    }

    pub fn scroll_up(&mut self) {
        let max = self.max_scroll();
        self.scroller.scroll_up(max);
    }

    pub fn scroll_half_page_down(&mut self) {
        let max = self.max_scroll();
        self.scroller.scroll_half_page_down(self.viewport_height, max);
    }

    pub fn scroll_half_page_up(&mut self) {
        let max = self.max_scroll();
        self.scroller.scroll_half_page_up(self.viewport_height, max);
    }

    pub fn scroll_page_down(&mut self) {
        let max = self.max_scroll();
        self.scroller.scroll_full_page_down(self.viewport_height, max);
    }

    pub fn scroll_page_up(&mut self) {
        let max = self.max_scroll();
        self.scroller.scroll_full_page_up(self.viewport_height, max);
    }

    pub fn jump_to_top(&mut self) {
        let max = self.max_scroll();
        self.scroller.scroll_to(0, max);
    }

    pub fn jump_to_bottom(&mut self) {
        let max = self.max_scroll();
        self.scroller.scroll_to(max, max);
    }

    pub fn jump_to_section(&mut self, section: Section) {
        if let Some(top) = self.layout.slot(section).map(|s| s.top) {
            let max = self.max_scroll();
            self.scroller.scroll_to(top, max);
        }
    }

    /// Section under the scroll target, so repeated jumps chain while animating
    fn target_section(&self) -> Section {
        self.layout.section_at(self.scroller.target_scroll())
    }

    pub fn next_section(&mut self) {
        let position = self.target_section().position();
        if let Some(&next) = Section::ALL.get(position + 1) {
            self.jump_to_section(next);
        }
    }

    pub fn prev_section(&mut self) {
        let position = self.target_section().position();
        if let Some(prev) = position.checked_sub(1).and_then(|p| Section::ALL.get(p)) {
            self.jump_to_section(*prev);
        }
    }

    /// Bring the carousel into view if a project key was pressed elsewhere
    fn reveal_projects(&mut self) {
        let offset = self.scroller.target_scroll();
        if !self
            .layout
            .is_visible(Section::Projects, offset, self.viewport_height)
        {
            self.jump_to_section(Section::Projects);
        }
    }

    pub fn next_project(&mut self) {
        self.reveal_projects();
        self.carousel.next();
    }

    pub fn prev_project(&mut self) {
        self.reveal_projects();
        self.carousel.prev();
    }

    /// Jump to project `index` (zero-based)
    pub fn go_to_project(&mut self, index: usize) {
        if index >= self.carousel.len() {
            self.set_status(format!("No project {}", index + 1));
            return;
        }
        self.reveal_projects();
        self.carousel.go_to(index as isize);
    }

    /// Demo link of the active project
    pub fn active_link(&self) -> Option<&str> {
        self.active_project().map(|p| p.demo.as_str())
    }

    /// Open the active project's demo in the browser
    pub fn open_link(&mut self) -> Result<()> {
        let url = self
            .active_link()
            .map(str::to_string)
            .ok_or_else(|| anyhow!("No project to open"))?;
        info!("Opening {}", url);
        open::that(&url)?;
        self.set_status(format!("Opened {}", url));
        Ok(())
    }

    /// Switch between the configured theme and the alternate one
    pub fn toggle_theme(&mut self) {
        self.alternate_theme = !self.alternate_theme;
        let name = if self.alternate_theme {
            self.config.ui.alternate_theme.as_str()
        } else {
            self.config.ui.theme.name.as_str()
        };

        self.theme = if self.alternate_theme {
            theme_by_name(name).unwrap_or_default()
        } else {
            load_theme(&self.config.ui.theme)
        };
        let message = format!("Theme: {}", name);
        self.set_status(message);
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Clear pending key
    pub fn clear_pending_key(&mut self) {
        self.pending_key = None;
    }

    /// Tear down, cancelling any pending carousel unlock
    pub fn dispose(self) {
        self.carousel.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn app() -> App {
        let mut app = App::new(Arc::new(AppConfig::default()), Portfolio::default()).unwrap();
        app.scroller = PageScroller::new(folio_core::ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        });
        app.resize(100, 30);
        app
    }

    #[test]
    fn test_starts_at_home() {
        let app = app();
        assert_eq!(app.active_section(), Section::Home);
        assert_eq!(app.viewport_height, 27);
        assert_eq!(app.carousel.active_index(), Some(0));
    }

    #[test]
    fn test_section_jumps_update_active_section() {
        let mut app = app();
        app.next_section();
        app.update_animations();
        assert_eq!(app.scroller.current_scroll(), app.layout.slot(Section::About).unwrap().top);
        assert_eq!(app.active_section(), Section::About);

        app.jump_to_bottom();
        app.update_animations();
        assert_eq!(app.scroller.current_scroll(), app.max_scroll());

        app.jump_to_top();
        app.update_animations();
        assert_eq!(app.active_section(), Section::Home);
        app.prev_section();
        assert_eq!(app.scroller.current_scroll(), 0);
    }

    #[test]
    fn test_scroll_clamps_to_page() {
        let mut app = app();
        for _ in 0..1000 {
            app.scroll_page_down();
        }
        app.update_animations();
        assert_eq!(app.scroller.current_scroll(), app.max_scroll());
    }

    #[tokio::test(start_paused = true)]
    async fn test_project_keys_reveal_carousel() {
        let mut app = app();
        app.next_project();
        app.update_animations();
        assert_eq!(app.carousel.active_index(), Some(1));
        assert!(app.layout.is_visible(
            Section::Projects,
            app.scroller.current_scroll(),
            app.viewport_height
        ));
        assert!(app.needs_fast_update());

        // Dropped while the slide runs
        app.prev_project();
        assert_eq!(app.carousel.active_index(), Some(1));

        tokio::time::advance(Duration::from_millis(600)).await;
        tokio::task::yield_now().await;
        app.go_to_project(4);
        assert_eq!(app.active_project().unwrap().title, "Todo List Application");
    }

    #[tokio::test]
    async fn test_go_to_missing_project_sets_status() {
        let mut app = app();
        app.go_to_project(8);
        assert_eq!(app.status_message.as_deref(), Some("No project 9"));
        assert_eq!(app.carousel.active_index(), Some(0));
    }

    #[test]
    fn test_toggle_theme_round_trip() {
        let mut app = app();
        let original = app.theme.clone();
        app.toggle_theme();
        assert_ne!(app.theme, original);
        assert_eq!(app.status_message.as_deref(), Some("Theme: ember-light"));
        app.toggle_theme();
        assert_eq!(app.theme, original);
    }

    #[test]
    fn test_typewriter_ticks() {
        let mut app = app();
        let start = Instant::now();
        app.tick(start);
        app.tick(start + Duration::from_millis(300));
        assert_eq!(app.typewriter.text(), "Web");
    }
}
