use folio_core::Portfolio;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::{padded, render_heading, HEADING_HEIGHT};
use crate::app::App;
use crate::layout::wrapped_height;

/// Indent of feature descriptions under their title
const FEATURE_INDENT: &str = "  ";

pub struct AboutWidget;

impl AboutWidget {
    pub fn height(portfolio: &Portfolio, width: u16) -> u16 {
        let about = &portfolio.about;
        let indented = width.saturating_sub(FEATURE_INDENT.len() as u16);

        let summary = wrapped_height(&about.summary, width) + 1;
        let paragraphs: u16 = about
            .paragraphs
            .iter()
            .map(|p| wrapped_height(p, width) + 1)
            .sum();
        let features: u16 = about
            .features
            .iter()
            .map(|f| 1 + wrapped_height(&f.description, indented) + 1)
            .sum();

        HEADING_HEIGHT + summary + paragraphs + features + 1
    }

    pub fn render(buf: &mut Buffer, area: Rect, app: &App) {
        let theme = &app.theme;
        let about = &app.portfolio.about;
        let area = render_heading(buf, padded(area), &about.heading, theme);
        let width = area.width;

        // Each block wraps on its own, stacked top to bottom
        let mut y = area.y;
        let summary = Paragraph::new(Span::styled(
            about.summary.clone(),
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        ));
        place(buf, summary, area, &mut y, wrapped_height(&about.summary, width));
        y += 1;

        for paragraph in &about.paragraphs {
            let text = Paragraph::new(Span::styled(
                paragraph.clone(),
                Style::default().fg(theme.muted),
            ));
            place(buf, text, area, &mut y, wrapped_height(paragraph, width));
            y += 1;
        }

        let indent = FEATURE_INDENT.len() as u16;
        let described = Rect {
            x: area.x + indent.min(width),
            width: width.saturating_sub(indent),
            ..area
        };
        for feature in &about.features {
            let title = Paragraph::new(Line::from(vec![
                Span::styled("◆ ", Style::default().fg(theme.accent)),
                Span::styled(
                    feature.title.clone(),
                    Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
                ),
            ]));
            place(buf, title, area, &mut y, 1);

            let description = Paragraph::new(Span::styled(
                feature.description.clone(),
                Style::default().fg(theme.muted),
            ));
            let rows = wrapped_height(&feature.description, described.width);
            place(buf, description, described, &mut y, rows);
            y += 1;
        }
    }
}

/// Render `paragraph` at row `*y` of `column`, clipped to it, and advance `*y`
fn place(buf: &mut Buffer, paragraph: Paragraph, column: Rect, y: &mut u16, rows: u16) {
    let bottom = column.bottom();
    if *y < bottom && column.width > 0 {
        let rect = Rect::new(column.x, *y, column.width, rows.min(bottom - *y));
        paragraph.wrap(Wrap { trim: true }).render(rect, buf);
    }
    *y = y.saturating_add(rows);
}
