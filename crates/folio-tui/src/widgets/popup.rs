use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;

pub struct PopupWidget;

impl PopupWidget {
    /// Render the key help overlay from the configured bindings
    pub fn render_help(frame: &mut Frame, app: &App) {
        let theme = &app.theme;
        let keys = &app.config.keymap;
        let project_count = app.carousel.len().clamp(1, 9);

        let rows: Vec<(String, &str)> = vec![
            (format!("{} / {}", keys.scroll_down, keys.scroll_up), "Scroll line"),
            (
                format!("{} / {}", keys.scroll_half_down, keys.scroll_half_up),
                "Scroll half page",
            ),
            (
                format!("{} / {}", keys.scroll_page_down, keys.scroll_page_up),
                "Scroll page",
            ),
            (
                format!("{} / {}", keys.jump_to_top, keys.jump_to_bottom),
                "Top / bottom",
            ),
            (
                format!("{} / {}", keys.next_section, keys.prev_section),
                "Next / previous section",
            ),
            (
                format!("{} / {}", keys.prev_project, keys.next_project),
                "Previous / next project",
            ),
            (format!("1-{}", project_count), "Jump to project"),
            (keys.open_link.clone(), "Open demo link"),
            (keys.toggle_theme.clone(), "Toggle theme"),
            (keys.help.clone(), "This help"),
            (keys.quit.clone(), "Quit"),
        ];

        let key_width = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
        let mut lines: Vec<Line> = rows
            .iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(
                        format!("  {:<width$}  ", key, width = key_width),
                        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(desc.to_string(), Style::default().fg(theme.fg)),
                ])
            })
            .collect();
        lines.push(Line::default());
        lines.push(
            Line::from(Span::styled(
                "press any key to close",
                Style::default().fg(theme.muted),
            ))
            .alignment(Alignment::Center),
        );

        let area = frame.area();
        let popup_width = 56u16.min(area.width.saturating_sub(4));
        let popup_height = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Keys ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.surface));

        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
