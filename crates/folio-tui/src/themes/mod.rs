//! Theme registry and loader
//!
//! Provides the built-in themes with user color overrides on top.

mod dracula;
mod ember;
mod nord;

use folio_core::config::{ThemeColorOverrides, ThemeConfig};
use ratatui::style::Color;
use tracing::warn;

use crate::theme::Theme;

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        // Short form: RGB -> RRGGBB
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        // Full form: RRGGBB
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

pub fn ember_dark() -> Theme {
    ember::dark()
}

/// Built-in theme by name, `None` for unknown names
pub fn theme_by_name(name: &str) -> Option<Theme> {
    let theme = match name.to_lowercase().as_str() {
        "ember-dark" | "ember" => ember::dark(),
        "ember-light" => ember::light(),
        "nord" => nord::default(),
        "dracula" => dracula::default(),
        _ => return None,
    };
    Some(theme)
}

/// Load a theme by name from config
pub fn load_theme(config: &ThemeConfig) -> Theme {
    let base = theme_by_name(&config.name).unwrap_or_else(|| {
        warn!("Unknown theme '{}', falling back to ember-dark", config.name);
        ember::dark()
    });

    apply_overrides(base, &config.colors)
}

/// Apply user color overrides to a base theme
fn apply_overrides(mut theme: Theme, overrides: &ThemeColorOverrides) -> Theme {
    let slots: [(&Option<String>, &mut Color, &str); 8] = [
        (&overrides.bg, &mut theme.bg, "bg"),
        (&overrides.surface, &mut theme.surface, "surface"),
        (&overrides.fg, &mut theme.fg, "fg"),
        (&overrides.muted, &mut theme.muted, "muted"),
        (&overrides.accent, &mut theme.accent, "accent"),
        (&overrides.gradient_start, &mut theme.gradient_start, "gradient_start"),
        (&overrides.gradient_end, &mut theme.gradient_end, "gradient_end"),
        (&overrides.border, &mut theme.border, "border"),
    ];

    for (hex, slot, name) in slots {
        if let Some(hex) = hex {
            match parse_hex_color(hex) {
                Some(color) => *slot = color,
                None => warn!("Invalid color '{}' for theme.colors.{}, ignoring", hex, name),
            }
        }
    }

    theme
}

/// Get list of available theme names
pub fn available_themes() -> Vec<&'static str> {
    vec!["ember-dark", "ember-light", "nord", "dracula"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color_6digit() {
        let color = parse_hex_color("#ff5500").unwrap();
        assert!(matches!(color, Color::Rgb(255, 85, 0)));
    }

    #[test]
    fn test_parse_hex_color_3digit() {
        let color = parse_hex_color("#f50").unwrap();
        assert!(matches!(color, Color::Rgb(255, 85, 0)));
    }

    #[test]
    fn test_parse_hex_color_invalid() {
        assert!(parse_hex_color("invalid").is_none());
        assert!(parse_hex_color("#gg0000").is_none());
        assert!(parse_hex_color("#ééé").is_none());
    }

    #[test]
    fn test_load_theme_default() {
        let theme = load_theme(&ThemeConfig::default());
        assert_eq!(theme, ember::dark());
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let config = ThemeConfig {
            name: "solarized-plaid".to_string(),
            ..Default::default()
        };
        assert_eq!(load_theme(&config), ember::dark());
    }

    #[test]
    fn test_every_listed_theme_loads() {
        for name in available_themes() {
            assert!(theme_by_name(name).is_some(), "{}", name);
        }
    }

    #[test]
    fn test_load_theme_with_override() {
        let config = ThemeConfig {
            name: "nord".to_string(),
            colors: ThemeColorOverrides {
                accent: Some("#ff0000".to_string()),
                border: Some("nope".to_string()),
                ..Default::default()
            },
        };
        let theme = load_theme(&config);
        assert!(matches!(theme.accent, Color::Rgb(255, 0, 0)));
        assert_eq!(theme.border, nord::default().border);
    }
}
