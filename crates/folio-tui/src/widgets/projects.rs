use folio_core::{Portfolio, Tier, TierAssignment};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::{padded, render_heading, truncate_str, HEADING_HEIGHT};
use crate::app::App;
use crate::motion::{EasingType, EasingTypeExt};
use crate::theme::Theme;

const CARD_HEIGHT: u16 = 12;
const MIN_CARD_WIDTH: u16 = 18;
const MAX_CARD_WIDTH: u16 = 40;
/// Columns reserved on each side of the stage for the arrows
const ARROW_GUTTER: u16 = 2;

/// Project carousel: cards placed by offset from the active project, styled by
/// tier, sliding with the transition
pub struct ProjectsWidget;

impl ProjectsWidget {
    pub fn height(portfolio: &Portfolio, _width: u16) -> u16 {
        if portfolio.projects.is_empty() {
            HEADING_HEIGHT + 2
        } else {
            // stage, gap, dots, hint, spacer
            HEADING_HEIGHT + CARD_HEIGHT + 4
        }
    }

    pub fn render(buf: &mut Buffer, area: Rect, app: &App) {
        let theme = &app.theme;
        let area = render_heading(buf, padded(area), "Projects", theme);

        if app.carousel.is_empty() {
            Paragraph::new(Span::styled("No projects yet.", Style::default().fg(theme.muted)))
                .render(area, buf);
            return;
        }

        let stage = Rect {
            height: CARD_HEIGHT.min(area.height),
            ..area
        };
        Self::render_arrows(buf, stage, app);

        let cards = Rect {
            x: stage.x + ARROW_GUTTER.min(stage.width),
            width: stage.width.saturating_sub(ARROW_GUTTER * 2),
            ..stage
        };
        Self::render_cards(buf, cards, app);

        let below = stage.bottom() + 1;
        if below < area.bottom() {
            Paragraph::new(Self::dots(app))
                .alignment(Alignment::Center)
                .render(Rect { y: below, height: 1, ..area }, buf);
        }
        if below + 1 < area.bottom() {
            let hint = format!(
                "h/l browse · 1-{} jump · o open demo",
                app.carousel.len().min(9)
            );
            Paragraph::new(Span::styled(hint, Style::default().fg(theme.muted)))
                .alignment(Alignment::Center)
                .render(Rect { y: below + 1, height: 1, ..area }, buf);
        }
    }

    fn render_arrows(buf: &mut Buffer, stage: Rect, app: &App) {
        if stage.width < 2 || stage.height == 0 || app.carousel.len() < 2 {
            return;
        }
        let color = if app.carousel.is_locked() {
            app.theme.border
        } else {
            app.theme.accent
        };
        let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
        let y = stage.y + stage.height / 2;
        buf.set_string(stage.x, y, "‹", style);
        buf.set_string(stage.right() - 1, y, "›", style);
    }

    fn render_cards(buf: &mut Buffer, cards: Rect, app: &App) {
        let eased = EasingType::EaseInOut.apply(app.carousel.transition_progress());
        let slide = (1.0 - eased) * app.carousel.last_step() as f64;

        let mut window = app.carousel.window();
        // Lower layers first so the active card ends up on top
        window.sort_by_key(|(_, assignment)| assignment.style.layer);

        for (index, assignment) in window {
            let Some(project) = app.portfolio.projects.get(index) else {
                continue;
            };
            let position = assignment.offset as f64 + slide;
            let Some(rect) = card_rect(cards, position, assignment.style.scale) else {
                continue;
            };

            Clear.render(rect, buf);
            card(project, index, app.carousel.len(), &assignment, &app.theme).render(rect, buf);
        }
    }

    fn dots(app: &App) -> Line<'static> {
        let active = app.carousel.active_index();
        let spans: Vec<Span> = (0..app.carousel.len())
            .flat_map(|i| {
                let dot = if Some(i) == active {
                    Span::styled("●", Style::default().fg(app.theme.accent))
                } else {
                    Span::styled("○", Style::default().fg(app.theme.muted))
                };
                [dot, Span::raw(" ")]
            })
            .collect();
        Line::from(spans)
    }
}

fn card_width(available: u16) -> u16 {
    (available / 2)
        .clamp(MIN_CARD_WIDTH, MAX_CARD_WIDTH)
        .min(available)
}

/// Screen rect of a card centered at `position` card-steps from the middle of
/// `cards`, clipped to it. `None` when too little of the card would show.
fn card_rect(cards: Rect, position: f64, scale: f32) -> Option<Rect> {
    let base = card_width(cards.width) as f64;
    let spacing = base * 0.8;
    let scale = scale.min(1.0) as f64;

    let width = (base * scale).round().max(3.0);
    let height = (CARD_HEIGHT as f64 * scale)
        .round()
        .clamp(3.0, cards.height as f64);

    let center = cards.x as f64 + cards.width as f64 / 2.0 + position * spacing;
    let left = (center - width / 2.0).round().max(cards.x as f64);
    let right = (center + width / 2.0).round().min(cards.right() as f64);
    if right - left < 3.0 || height < 3.0 {
        return None;
    }

    let height = height as u16;
    let top = cards.y + (cards.height - height) / 2;
    Some(Rect::new(left as u16, top, (right - left) as u16, height))
}

/// Text color for a band's opacity
fn faded(theme: &Theme, opacity: f32) -> (Color, Modifier) {
    if opacity >= 0.9 {
        (theme.fg, Modifier::empty())
    } else if opacity >= 0.5 {
        (theme.muted, Modifier::empty())
    } else {
        (theme.muted, Modifier::DIM)
    }
}

fn card<'a>(
    project: &'a folio_core::Project,
    index: usize,
    len: usize,
    assignment: &TierAssignment,
    theme: &Theme,
) -> Paragraph<'a> {
    let style = assignment.style;
    let (text_color, fade) = faded(theme, style.opacity);
    let is_center = assignment.tier == Tier::Center;

    let border_style = if is_center {
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.border).add_modifier(fade)
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(if is_center { BorderType::Thick } else { BorderType::Rounded })
        .border_style(border_style)
        .title(Span::styled(
            format!(" {:02}/{:02} ", index + 1, len),
            Style::default().fg(theme.muted),
        ))
        .style(Style::default().bg(theme.surface));
    if is_center {
        block = block.title_bottom(
            Line::from(Span::styled(" o ↗ live demo ", Style::default().fg(theme.accent)))
                .right_aligned(),
        );
    }

    let text = Style::default().fg(text_color).add_modifier(fade);
    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} {}", project.kind.glyph(), project.kind.label()),
            if is_center { Style::default().fg(theme.accent) } else { text },
        )),
        Line::from(Span::styled(
            project.title.as_str(),
            text.add_modifier(Modifier::BOLD),
        )),
    ];

    // Blur hides detail: level 1 drops the description, level 2 the stack too
    if style.blur == 0 {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(project.description.as_str(), text)));
    }
    if style.blur <= 1 {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            truncate_str(&project.technologies.join(" · "), 60),
            Style::default().fg(theme.muted).add_modifier(fade),
        )));
    }

    Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true })
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::AppConfig;
    use std::sync::Arc;
    use std::time::Duration;

    fn screen(buf: &Buffer) -> String {
        let area = buf.area;
        (area.y..area.bottom())
            .map(|y| (area.x..area.right()).map(|x| buf[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_center_card_is_centered() {
        let cards = Rect::new(0, 0, 100, CARD_HEIGHT);
        let rect = card_rect(cards, 0.0, 1.05).unwrap();
        assert_eq!(rect.width, MAX_CARD_WIDTH);
        assert_eq!(rect.height, CARD_HEIGHT);
        assert_eq!(rect.x, 30);
    }

    #[test]
    fn test_side_cards_are_smaller_and_ordered() {
        let cards = Rect::new(0, 0, 100, CARD_HEIGHT);
        let left = card_rect(cards, -1.0, 0.9).unwrap();
        let center = card_rect(cards, 0.0, 1.0).unwrap();
        let right = card_rect(cards, 1.0, 0.9).unwrap();
        assert!(left.x < center.x && center.x < right.x);
        assert!(right.height < center.height);
    }

    #[test]
    fn test_offscreen_card_is_skipped() {
        let cards = Rect::new(0, 0, 40, CARD_HEIGHT);
        assert!(card_rect(cards, 5.0, 0.75).is_none());
        assert!(card_rect(cards, -5.0, 0.75).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_renders_active_project_after_slide() {
        let mut app = App::new(Arc::new(AppConfig::default()), Portfolio::default()).unwrap();
        let area = Rect::new(0, 0, 104, ProjectsWidget::height(&app.portfolio, 100));

        let mut buf = Buffer::empty(area);
        ProjectsWidget::render(&mut buf, area, &app);
        let before = screen(&buf);
        assert!(before.contains("Currency Converter"));
        assert!(before.contains("live demo"));
        assert!(before.contains("● ○ ○ ○ ○"));

        assert!(app.carousel.next());
        tokio::time::advance(Duration::from_millis(600)).await;
        tokio::task::yield_now().await;

        let mut buf = Buffer::empty(area);
        ProjectsWidget::render(&mut buf, area, &app);
        let after = screen(&buf);
        assert!(after.contains("TechFlow Landing Page"));
        assert!(after.contains("○ ● ○ ○ ○"));
    }

    #[test]
    fn test_empty_portfolio_message() {
        let mut portfolio = Portfolio::default();
        portfolio.projects.clear();
        let app = App::new(Arc::new(AppConfig::default()), portfolio).unwrap();
        let area = Rect::new(0, 0, 60, ProjectsWidget::height(&app.portfolio, 56));
        let mut buf = Buffer::empty(area);
        ProjectsWidget::render(&mut buf, area, &app);
        assert!(screen(&buf).contains("No projects yet."));
    }
}
