use folio_core::Section;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    Frame,
};

use super::{AboutWidget, ContactWidget, HeroWidget, ProjectsWidget, SkillsWidget};
use crate::app::App;

/// The scrolling document. Each visible section is drawn into its own
/// off-screen buffer and the rows inside the viewport are copied out.
pub struct PageWidget;

impl PageWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        Self::render_to_buffer(frame.buffer_mut(), area, app);
    }

    pub fn render_to_buffer(buf: &mut Buffer, area: Rect, app: &App) {
        let theme = &app.theme;
        let base = Style::default().bg(theme.bg).fg(theme.fg);
        buf.set_style(area, base);

        let content_width = app.layout.content_width().min(area.width);
        if content_width == 0 || area.height == 0 {
            return;
        }
        let column_x = area.x + (area.width - content_width) / 2;

        let offset = app.scroller.current_scroll();
        let view_end = offset.saturating_add(area.height);

        for slot in app.layout.slots() {
            if slot.height == 0 || slot.bottom() <= offset || slot.top >= view_end {
                continue;
            }

            let local = Rect::new(0, 0, content_width, slot.height);
            let mut section_buf = Buffer::empty(local);
            section_buf.set_style(local, base);
            render_section(slot.section, &mut section_buf, local, app);

            let first = offset.max(slot.top);
            let last = view_end.min(slot.bottom());
            for doc_row in first..last {
                let src_y = doc_row - slot.top;
                let dst_y = area.y + (doc_row - offset);
                for col in 0..content_width {
                    if let Some(cell) = section_buf.cell((col, src_y)) {
                        if let Some(target) = buf.cell_mut((column_x + col, dst_y)) {
                            *target = cell.clone();
                        }
                    }
                }
            }
        }
    }
}

fn render_section(section: Section, buf: &mut Buffer, area: Rect, app: &App) {
    match section {
        Section::Home => HeroWidget::render(buf, area, app),
        Section::About => AboutWidget::render(buf, area, app),
        Section::Skills => SkillsWidget::render(buf, area, app),
        Section::Projects => ProjectsWidget::render(buf, area, app),
        Section::Contact => ContactWidget::render(buf, area, app),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use folio_core::{AppConfig, Portfolio, ScrollConfig};

    use super::*;
    use crate::motion::PageScroller;

    fn app(width: u16) -> App {
        let mut app = App::new(Arc::new(AppConfig::default()), Portfolio::default()).unwrap();
        app.scroller = PageScroller::new(ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        });
        app.resize(width, 30);
        app
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
            .collect()
    }

    fn find_row(buf: &Buffer, needle: &str) -> Option<u16> {
        (0..buf.area.height).find(|&y| row_text(buf, y).contains(needle))
    }

    #[test]
    fn test_top_of_page_shows_hero() {
        let app = app(100);

        let area = Rect::new(0, 0, 100, app.viewport_height);
        let mut buf = Buffer::empty(area);
        PageWidget::render_to_buffer(&mut buf, area, &app);

        assert!(find_row(&buf, "Your Name").is_some());
        assert!(find_row(&buf, "Let's Work Together").is_none());
    }

    #[test]
    fn test_scrolled_section_lands_at_top() {
        let mut app = app(100);
        app.jump_to_section(Section::About);
        app.update_animations();

        let area = Rect::new(0, 0, 100, app.viewport_height);
        let mut buf = Buffer::empty(area);
        PageWidget::render_to_buffer(&mut buf, area, &app);

        assert_eq!(find_row(&buf, "About Me"), Some(0));
    }

    #[test]
    fn test_wide_terminal_centers_column() {
        let app = app(200);

        let area = Rect::new(0, 0, 200, app.viewport_height);
        let mut buf = Buffer::empty(area);
        PageWidget::render_to_buffer(&mut buf, area, &app);

        // 110 wide column starts at 45, text is padded by 2 more
        let y = find_row(&buf, "Your Name").unwrap();
        let first_text = (0..200)
            .find(|&x| buf.cell((x, y)).map(|c| c.symbol() != " ").unwrap_or(false))
            .unwrap();
        assert!(first_text >= 47);
    }
}
