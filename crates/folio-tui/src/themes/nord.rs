//! Nord theme
//! https://www.nordtheme.com/

use ratatui::style::Color;
use crate::theme::Theme;

/// Nord default theme
pub fn default() -> Theme {
    Theme {
        // Polar Night
        bg: Color::Rgb(0x2e, 0x34, 0x40),      // nord0
        surface: Color::Rgb(0x3b, 0x42, 0x52), // nord1
        // Snow Storm
        fg: Color::Rgb(0xec, 0xef, 0xf4),    // nord6
        muted: Color::Rgb(0xd8, 0xde, 0xe9), // nord4
        // Frost
        accent: Color::Rgb(0x88, 0xc0, 0xd0),         // nord8
        gradient_start: Color::Rgb(0x8f, 0xbc, 0xbb), // nord7
        gradient_end: Color::Rgb(0x81, 0xa1, 0xc1),   // nord9
        border: Color::Rgb(0x4c, 0x56, 0x6a),         // nord3
        // Aurora
        success: Color::Rgb(0xa3, 0xbe, 0x8c), // nord14
        warning: Color::Rgb(0xeb, 0xcb, 0x8b), // nord13
    }
}
