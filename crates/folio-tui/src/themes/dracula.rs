//! Dracula theme
//! https://draculatheme.com/

use ratatui::style::Color;
use crate::theme::Theme;

/// Dracula default theme
pub fn default() -> Theme {
    Theme {
        bg: Color::Rgb(0x28, 0x2a, 0x36),
        surface: Color::Rgb(0x44, 0x47, 0x5a), // current line
        fg: Color::Rgb(0xf8, 0xf8, 0xf2),
        muted: Color::Rgb(0x62, 0x72, 0xa4), // comment
        accent: Color::Rgb(0xbd, 0x93, 0xf9), // purple
        gradient_start: Color::Rgb(0xbd, 0x93, 0xf9),
        gradient_end: Color::Rgb(0xff, 0x79, 0xc6), // pink
        border: Color::Rgb(0x44, 0x47, 0x5a),
        success: Color::Rgb(0x50, 0xfa, 0x7b),
        warning: Color::Rgb(0xf1, 0xfa, 0x8c),
    }
}
