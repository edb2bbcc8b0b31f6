use folio_core::Portfolio;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::{padded, render_heading, HEADING_HEIGHT};
use crate::app::App;
use crate::layout::wrapped_height;

pub struct ContactWidget;

impl ContactWidget {
    const FOOTER_HEIGHT: u16 = 2;

    pub fn height(portfolio: &Portfolio, width: u16) -> u16 {
        let contact = &portfolio.contact;
        HEADING_HEIGHT
            + wrapped_height(&contact.intro, width)
            + 1
            + contact.channels.len() as u16 * 2
            + Self::FOOTER_HEIGHT
    }

    pub fn render(buf: &mut Buffer, area: Rect, app: &App) {
        let theme = &app.theme;
        let contact = &app.portfolio.contact;
        let area = render_heading(buf, padded(area), &contact.heading, theme);

        let intro_rows = wrapped_height(&contact.intro, area.width);
        let mut lines = Vec::with_capacity(contact.channels.len() * 2 + 2);
        for channel in &contact.channels {
            lines.push(Line::from(vec![
                Span::styled(format!("{}  ", channel.kind.glyph()), Style::default().fg(theme.accent)),
                Span::styled(
                    channel.label.clone(),
                    Style::default().fg(theme.muted).add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!("   {}", channel.value),
                Style::default().fg(theme.fg),
            )));
        }

        Paragraph::new(Span::styled(contact.intro.clone(), Style::default().fg(theme.muted)))
            .wrap(Wrap { trim: true })
            .render(Rect { height: intro_rows.min(area.height), ..area }, buf);

        let channels_top = intro_rows + 1;
        let channels = Rect {
            y: area.y + channels_top.min(area.height),
            height: area.height.saturating_sub(channels_top),
            ..area
        };
        Paragraph::new(lines).render(channels, buf);

        // Footer sits on the last row
        if area.height > 0 {
            let footer = Rect {
                y: area.bottom() - 1,
                height: 1,
                ..area
            };
            Paragraph::new(Span::styled(
                format!("© {} · built for the terminal", app.portfolio.profile.name),
                Style::default().fg(theme.muted).add_modifier(Modifier::DIM),
            ))
            .alignment(Alignment::Center)
            .render(footer, buf);
        }
    }
}
