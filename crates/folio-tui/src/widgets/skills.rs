use folio_core::Portfolio;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::{padded, render_heading, truncate_str, HEADING_HEIGHT};
use crate::app::App;
use crate::themes::parse_hex_color;

const CHIP_WIDTH: u16 = 20;
const CHIP_HEIGHT: u16 = 3;

/// Skills as a grid of bordered chips
pub struct SkillsWidget;

impl SkillsWidget {
    fn columns(width: u16) -> u16 {
        (width / CHIP_WIDTH).max(1)
    }

    pub fn height(portfolio: &Portfolio, width: u16) -> u16 {
        let columns = Self::columns(width) as usize;
        let rows = portfolio.skills.len().div_ceil(columns) as u16;
        HEADING_HEIGHT + rows * CHIP_HEIGHT + 1
    }

    pub fn render(buf: &mut Buffer, area: Rect, app: &App) {
        let theme = &app.theme;
        let area = render_heading(buf, padded(area), "Skills", theme);
        let columns = Self::columns(area.width);
        let chip_width = (area.width / columns).min(CHIP_WIDTH);

        for (i, skill) in app.portfolio.skills.iter().enumerate() {
            let col = i as u16 % columns;
            let row = i as u16 / columns;
            let y = area.y + row * CHIP_HEIGHT;
            if y + CHIP_HEIGHT > area.bottom() {
                break;
            }

            let chip = Rect::new(area.x + col * chip_width, y, chip_width, CHIP_HEIGHT);
            let border = skill
                .color
                .as_deref()
                .and_then(parse_hex_color)
                .unwrap_or(theme.border);

            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border))
                .style(Style::default().bg(theme.surface));
            let label = truncate_str(&skill.name, chip_width.saturating_sub(2) as usize);

            Paragraph::new(label)
                .style(Style::default().fg(theme.fg).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center)
                .block(block)
                .render(chip, buf);
        }
    }
}
