use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::carousel::{TierBand, TierPolicy};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub timeline: TimelineConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Portfolio content file (TOML or JSON). Built-in content when unset.
    #[serde(default)]
    pub content_path: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            content_path: None,
        }
    }
}

/// Project carousel behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// How long navigation stays locked after an accepted move
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
    /// Items further than this from the active card are not rendered
    #[serde(default = "default_render_radius")]
    pub render_radius: usize,
    /// Visual bands by distance from the active card, nearest first
    #[serde(default = "default_tier_bands")]
    pub tiers: Vec<TierBand>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            transition_ms: default_transition_ms(),
            render_radius: default_render_radius(),
            tiers: default_tier_bands(),
        }
    }
}

impl CarouselConfig {
    /// Build a validated tier policy from the configured bands
    pub fn tier_policy(&self) -> crate::Result<TierPolicy> {
        TierPolicy::new(self.tiers.clone(), self.render_radius)
    }
}

/// Scroll-window shape for the section tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineConfig {
    /// Fraction of the viewport before the region where tracking starts
    #[serde(default = "default_lead_ratio")]
    pub lead_ratio: f64,
    /// Fraction of the viewport before the region end where tracking completes
    #[serde(default = "default_trail_ratio")]
    pub trail_ratio: f64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            lead_ratio: default_lead_ratio(),
            trail_ratio: default_trail_ratio(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while something is animating
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Theme switched to by the theme toggle
    #[serde(default = "default_alternate_theme")]
    pub alternate_theme: String,
    /// Page scrolling
    #[serde(default)]
    pub scroll: ScrollConfig,
    /// Hero typewriter speeds
    #[serde(default)]
    pub typewriter: TypewriterConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            theme: ThemeConfig::default(),
            alternate_theme: default_alternate_theme(),
            scroll: ScrollConfig::default(),
            typewriter: TypewriterConfig::default(),
        }
    }
}

/// Easing curve used by page scrolling and the carousel slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    EaseOut,
    EaseInOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    #[serde(default = "default_scroll_duration")]
    pub animation_duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
    /// Lines moved per j/k press
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u16,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_scroll_duration(),
            easing: EasingType::default(),
            scroll_lines: default_scroll_lines(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypewriterConfig {
    #[serde(default = "default_typing_ms")]
    pub typing_ms: u64,
    #[serde(default = "default_deleting_ms")]
    pub deleting_ms: u64,
    #[serde(default = "default_pause_ms")]
    pub pause_ms: u64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            typing_ms: default_typing_ms(),
            deleting_ms: default_deleting_ms(),
            pause_ms: default_pause_ms(),
        }
    }
}

/// Theme configuration
/// Can be specified as a simple string (theme name) or as a full struct with overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Theme name (e.g., "ember-dark", "nord")
    pub name: String,
    /// Optional color overrides for semantic colors
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

// Accept either `theme = "nord"` or `[ui.theme] name = ..., colors = {...}`
impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a theme name or a map with 'name' and optional 'colors'")
            }

            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                Ok(ThemeConfig {
                    name: value.to_string(),
                    colors: ThemeColorOverrides::default(),
                })
            }

            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut colors: Option<ThemeColorOverrides> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => name = Some(map.next_value()?),
                        "colors" => colors = Some(map.next_value()?),
                        _ => {
                            let _: de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(ThemeConfig {
                    name: name.unwrap_or_else(default_theme_name),
                    colors: colors.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

/// Hex color overrides ("#ff5500" or "f50")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    pub bg: Option<String>,
    pub surface: Option<String>,
    pub fg: Option<String>,
    pub muted: Option<String>,
    pub accent: Option<String>,
    pub gradient_start: Option<String>,
    pub gradient_end: Option<String>,
    pub border: Option<String>,
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "<C-d>" (Ctrl+d), "<S-Tab>", "<CR>", "<Left>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    #[serde(default = "default_key_quit")]
    pub quit: String,

    // Page scrolling
    #[serde(default = "default_key_scroll_down")]
    pub scroll_down: String,
    #[serde(default = "default_key_scroll_up")]
    pub scroll_up: String,
    #[serde(default = "default_key_scroll_half_down")]
    pub scroll_half_down: String,
    #[serde(default = "default_key_scroll_half_up")]
    pub scroll_half_up: String,
    #[serde(default = "default_key_scroll_page_down")]
    pub scroll_page_down: String,
    #[serde(default = "default_key_scroll_page_up")]
    pub scroll_page_up: String,
    #[serde(default = "default_key_jump_to_top")]
    pub jump_to_top: String,
    #[serde(default = "default_key_jump_to_bottom")]
    pub jump_to_bottom: String,

    // Sections
    #[serde(default = "default_key_next_section")]
    pub next_section: String,
    #[serde(default = "default_key_prev_section")]
    pub prev_section: String,

    // Project carousel
    #[serde(default = "default_key_next_project")]
    pub next_project: String,
    #[serde(default = "default_key_prev_project")]
    pub prev_project: String,
    /// Open the active project's demo (or the focused contact link)
    #[serde(default = "default_key_open_link")]
    pub open_link: String,

    #[serde(default = "default_key_toggle_theme")]
    pub toggle_theme: String,
    #[serde(default = "default_key_help")]
    pub help: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            scroll_down: default_key_scroll_down(),
            scroll_up: default_key_scroll_up(),
            scroll_half_down: default_key_scroll_half_down(),
            scroll_half_up: default_key_scroll_half_up(),
            scroll_page_down: default_key_scroll_page_down(),
            scroll_page_up: default_key_scroll_page_up(),
            jump_to_top: default_key_jump_to_top(),
            jump_to_bottom: default_key_jump_to_bottom(),
            next_section: default_key_next_section(),
            prev_section: default_key_prev_section(),
            next_project: default_key_next_project(),
            prev_project: default_key_prev_project(),
            open_link: default_key_open_link(),
            toggle_theme: default_key_toggle_theme(),
            help: default_key_help(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_scroll_down() -> String { "j".to_string() }
fn default_key_scroll_up() -> String { "k".to_string() }
fn default_key_scroll_half_down() -> String { "<C-d>".to_string() }
fn default_key_scroll_half_up() -> String { "<C-u>".to_string() }
fn default_key_scroll_page_down() -> String { "<C-f>".to_string() }
fn default_key_scroll_page_up() -> String { "<C-b>".to_string() }
fn default_key_jump_to_top() -> String { "gg".to_string() }
fn default_key_jump_to_bottom() -> String { "G".to_string() }
fn default_key_next_section() -> String { "<Tab>".to_string() }
fn default_key_prev_section() -> String { "<S-Tab>".to_string() }
fn default_key_next_project() -> String { "l".to_string() }
fn default_key_prev_project() -> String { "h".to_string() }
fn default_key_open_link() -> String { "o".to_string() }
fn default_key_toggle_theme() -> String { "t".to_string() }
fn default_key_help() -> String { "?".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_transition_ms() -> u64 {
    600
}

fn default_render_radius() -> usize {
    2
}

fn default_tier_bands() -> Vec<TierBand> {
    TierPolicy::default_bands()
}

fn default_lead_ratio() -> f64 {
    0.8
}

fn default_trail_ratio() -> f64 {
    0.2
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u32 {
    60
}

fn default_theme_name() -> String {
    "ember-dark".to_string()
}

fn default_alternate_theme() -> String {
    "ember-light".to_string()
}

fn default_scroll_duration() -> u64 {
    150
}

fn default_scroll_lines() -> u16 {
    1
}

fn default_typing_ms() -> u64 {
    100
}

fn default_deleting_ms() -> u64 {
    50
}

fn default_pause_ms() -> u64 {
    2000
}

/// Expand tilde (~) in path to user's home directory
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the carousel and tracker cannot work with
    pub fn validate(&self) -> crate::Result<()> {
        self.carousel.tier_policy()?;

        let ratios = [
            ("timeline.lead_ratio", self.timeline.lead_ratio),
            ("timeline.trail_ratio", self.timeline.trail_ratio),
        ];
        for (name, ratio) in ratios {
            if !ratio.is_finite() || !(0.0..=1.0).contains(&ratio) {
                return Err(crate::Error::Config(format!(
                    "{} must be within [0, 1], got {}",
                    name, ratio
                )));
            }
        }

        Ok(())
    }

    /// Save configuration to the default path
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to an explicit file
    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/folio/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("folio")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Get the log file used while the TUI owns the terminal
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("folio.log")
    }

    /// Get the portfolio content path, if one is configured
    pub fn content_path(&self) -> Option<PathBuf> {
        self.general.content_path.as_deref().map(expand_tilde)
    }
}
