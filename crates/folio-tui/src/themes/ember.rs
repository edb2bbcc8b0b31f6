//! Ember themes
//! Warm orange-to-pink gradient on slate, in dark and light variants.

use ratatui::style::Color;
use crate::theme::Theme;

/// Ember dark
pub fn dark() -> Theme {
    Theme {
        bg: Color::Rgb(0x0f, 0x17, 0x2a),      // slate 900
        surface: Color::Rgb(0x1e, 0x29, 0x3b), // slate 800
        fg: Color::Rgb(0xf1, 0xf5, 0xf9),
        muted: Color::Rgb(0x94, 0xa3, 0xb8),
        accent: Color::Rgb(0xf9, 0x73, 0x16),
        gradient_start: Color::Rgb(0xf9, 0x73, 0x16), // orange
        gradient_end: Color::Rgb(0xec, 0x48, 0x99),   // pink
        border: Color::Rgb(0x33, 0x41, 0x55),
        success: Color::Rgb(0x22, 0xc5, 0x5e),
        warning: Color::Rgb(0xea, 0xb3, 0x08),
    }
}

/// Ember light
pub fn light() -> Theme {
    Theme {
        bg: Color::Rgb(0xf8, 0xfa, 0xfc),
        surface: Color::Rgb(0xff, 0xff, 0xff),
        fg: Color::Rgb(0x0f, 0x17, 0x2a),
        muted: Color::Rgb(0x64, 0x74, 0x8b),
        accent: Color::Rgb(0xea, 0x58, 0x0c),
        gradient_start: Color::Rgb(0xea, 0x58, 0x0c),
        gradient_end: Color::Rgb(0xdb, 0x27, 0x77),
        border: Color::Rgb(0xcb, 0xd5, 0xe1),
        success: Color::Rgb(0x16, 0xa3, 0x4a),
        warning: Color::Rgb(0xca, 0x8a, 0x04),
    }
}
