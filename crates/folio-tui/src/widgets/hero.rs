use folio_core::Portfolio;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::{gradient_spans, padded};
use crate::app::App;
use crate::layout::wrapped_height;

/// Landing section: greeting, gradient name, typewriter roles, links
pub struct HeroWidget;

impl HeroWidget {
    const TOP_PAD: u16 = 2;
    const BOTTOM_PAD: u16 = 2;

    pub fn height(portfolio: &Portfolio, width: u16) -> u16 {
        // greeting, name, gap, role, gap, tagline, gap, links
        Self::TOP_PAD + 5 + wrapped_height(&portfolio.profile.tagline, width) + 2
            + Self::BOTTOM_PAD
    }

    pub fn render(buf: &mut Buffer, area: Rect, app: &App) {
        let theme = &app.theme;
        let profile = &app.portfolio.profile;
        let area = padded(area);

        let mut role = vec![
            Span::styled("> ", Style::default().fg(theme.accent)),
            Span::styled(
                app.typewriter.text(),
                Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
            ),
        ];
        if app.cursor_visible() {
            role.push(Span::styled("▌", Style::default().fg(theme.accent)));
        }

        let links: Vec<Span> = profile
            .links
            .iter()
            .flat_map(|link| {
                [
                    Span::styled(
                        format!("{} {}", link.kind.glyph(), link.label),
                        Style::default().fg(theme.accent),
                    ),
                    Span::raw("   "),
                ]
            })
            .collect();

        let mut lines = vec![Line::default(); Self::TOP_PAD as usize];
        lines.push(Line::from(Span::styled(
            profile.greeting.clone(),
            Style::default().fg(theme.muted),
        )));
        lines.push(Line::from(gradient_spans(
            &profile.name,
            theme,
            app.gradient_phase(),
            Modifier::BOLD,
        )));
        lines.push(Line::default());
        lines.push(Line::from(role));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            profile.tagline.clone(),
            Style::default().fg(theme.muted),
        )));
        lines.push(Line::default());
        lines.push(Line::from(links));

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
