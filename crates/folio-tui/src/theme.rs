use ratatui::style::Color;

use crate::motion::timing::lerp;

/// Runtime theme with configurable colors
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    // Backgrounds
    pub bg: Color,
    pub surface: Color,

    // Text
    pub fg: Color,
    pub muted: Color,

    // Accents
    pub accent: Color,
    pub gradient_start: Color,
    pub gradient_end: Color,
    pub border: Color,

    // Status
    pub success: Color,
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        crate::themes::ember_dark()
    }
}

impl Theme {
    /// Color at `t` along the start→end→start gradient, `t` wraps at 1.0
    pub fn gradient_at(&self, t: f64) -> Color {
        let t = t.rem_euclid(1.0);
        // Triangle wave so the gradient loops without a seam
        let mix = 1.0 - (2.0 * t - 1.0).abs();
        blend(self.gradient_start, self.gradient_end, mix)
    }
}

/// Linear blend of two RGB colors; non-RGB colors snap to the nearer end
pub fn blend(from: Color, to: Color, t: f64) -> Color {
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let channel = |a: u8, b: u8| lerp(a as f64, b as f64, t.clamp(0.0, 1.0)).round() as u8;
            Color::Rgb(channel(r1, r2), channel(g1, g2), channel(b1, b2))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}
