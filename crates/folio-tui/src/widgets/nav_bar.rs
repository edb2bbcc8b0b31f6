use folio_core::Section;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::gradient_spans;
use crate::app::App;

/// Top bar: name, section labels with the active one highlighted, and a
/// page progress rule underneath
pub struct NavBarWidget;

impl NavBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        if area.height == 0 {
            return;
        }
        let theme = &app.theme;
        let active = app.active_section();
        let bar = Style::default().bg(theme.surface);

        let mut labels: Vec<Span> = Vec::new();
        for section in Section::ALL {
            let style = if section == active {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(theme.muted)
            };
            labels.push(Span::styled(format!(" {} ", section.label()), style));
        }
        let labels_width: usize = labels.iter().map(|s| s.content.width()).sum();

        let brand = format!(" {} ", app.portfolio.profile.name);
        let padding = (area.width as usize).saturating_sub(brand.width() + labels_width);

        let mut spans = gradient_spans(&brand, theme, app.gradient_phase(), Modifier::BOLD);
        spans.push(Span::raw(" ".repeat(padding)));
        spans.extend(labels);

        frame.render_widget(
            Paragraph::new(Line::from(spans)).style(bar),
            Rect { height: 1, ..area },
        );

        if area.height > 1 {
            frame.render_widget(
                Paragraph::new(Self::progress_rule(app, area.width)),
                Rect { y: area.y + 1, height: 1, ..area },
            );
        }
    }

    /// Filled part of the rule follows the page progress
    fn progress_rule(app: &App, width: u16) -> Line<'static> {
        let width = width as usize;
        let filled = ((app.tracker.progress() * width as f64).round() as usize).min(width);

        let mut spans: Vec<Span> = (0..filled)
            .map(|i| {
                let color = app.theme.gradient_at(i as f64 / width.max(1) as f64 / 2.0);
                Span::styled("━", Style::default().fg(color))
            })
            .collect();
        spans.push(Span::styled(
            "─".repeat(width - filled),
            Style::default().fg(app.theme.border),
        ));
        Line::from(spans)
    }
}
