use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Mode};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let mode_str = match app.mode {
            Mode::Normal => "NORMAL",
            Mode::Help => "HELP",
        };

        let project = match app.carousel.active_index() {
            Some(i) => format!("Project {}/{}", i + 1, app.carousel.len()),
            None => "No projects".to_string(),
        };
        let motion = if app.carousel.is_locked() { "sliding" } else { "ready" };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            format!(
                " {} | {} | {} | {}",
                mode_str,
                app.active_section().label(),
                project,
                motion
            )
        };

        let help_hint = " q:quit j/k:scroll h/l:projects Tab:section ?:help ";
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.fg)),
            Span::raw(" ".repeat(padding_len)),
            Span::styled(help_hint, Style::default().fg(theme.muted)),
        ]);

        frame.render_widget(
            Paragraph::new(line).style(Style::default().bg(theme.surface)),
            area,
        );
    }
}
