mod about;
mod contact;
mod hero;
mod nav_bar;
mod page;
mod popup;
mod projects;
mod skills;
mod status_bar;

pub use about::AboutWidget;
pub use contact::ContactWidget;
pub use hero::HeroWidget;
pub use nav_bar::NavBarWidget;
pub use page::PageWidget;
pub use popup::PopupWidget;
pub use projects::ProjectsWidget;
pub use skills::SkillsWidget;
pub use status_bar::StatusBarWidget;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::layout::PAD_X;
use crate::theme::Theme;

/// Title row, rule row and a spacer
pub(crate) const HEADING_HEIGHT: u16 = 3;

/// Section area minus horizontal padding
pub(crate) fn padded(area: Rect) -> Rect {
    Rect {
        x: area.x + PAD_X.min(area.width / 2),
        width: area.width.saturating_sub(PAD_X * 2),
        ..area
    }
}

/// Draw a section heading and return the area below it
pub(crate) fn render_heading(buf: &mut Buffer, area: Rect, title: &str, theme: &Theme) -> Rect {
    if area.height == 0 {
        return area;
    }

    let title_line = Line::from(gradient_spans(title, theme, 0.0, Modifier::BOLD));
    Paragraph::new(title_line).render(Rect { height: 1, ..area }, buf);

    if area.height > 1 {
        let rule_width = (title.chars().count() as u16 + 2).min(area.width) as usize;
        let rule = Line::from(Span::styled(
            "━".repeat(rule_width),
            Style::default().fg(theme.accent),
        ));
        Paragraph::new(rule).render(Rect { y: area.y + 1, height: 1, ..area }, buf);
    }

    Rect {
        y: area.y + HEADING_HEIGHT.min(area.height),
        height: area.height.saturating_sub(HEADING_HEIGHT),
        ..area
    }
}

/// One span per character, colored along the theme gradient
pub(crate) fn gradient_spans(
    text: &str,
    theme: &Theme,
    phase: f64,
    modifier: Modifier,
) -> Vec<Span<'static>> {
    let len = text.chars().count().max(1) as f64;
    text.chars()
        .enumerate()
        .map(|(i, c)| {
            let color = theme.gradient_at(i as f64 / len / 2.0 + phase);
            Span::styled(c.to_string(), Style::default().fg(color).add_modifier(modifier))
        })
        .collect()
}

/// Truncate a string to max width with ellipsis
pub(crate) fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}
