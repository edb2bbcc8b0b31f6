//! Document layout for the scrolling page.
//!
//! Sections are stacked top to bottom in a content column of at most
//! `MAX_CONTENT_WIDTH` cells. Heights come from each section widget so the
//! measured layout and the rendered page always agree.

use folio_core::{Portfolio, Region, Section};
use unicode_width::UnicodeWidthStr;

use crate::widgets::{AboutWidget, ContactWidget, HeroWidget, ProjectsWidget, SkillsWidget};

pub const MAX_CONTENT_WIDTH: u16 = 110;
/// Horizontal padding inside the content column
pub const PAD_X: u16 = 2;
/// Rows above the page: section labels and progress rule
pub const NAV_HEIGHT: u16 = 2;
pub const STATUS_HEIGHT: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSlot {
    pub section: Section,
    pub top: u16,
    pub height: u16,
}

impl SectionSlot {
    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }

    pub fn region(&self) -> Region {
        Region::new(self.top as f64, self.height as f64)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    content_width: u16,
    slots: Vec<SectionSlot>,
    total_height: u16,
}

impl PageLayout {
    /// Measure every section for a terminal `width`
    pub fn compute(portfolio: &Portfolio, width: u16) -> Self {
        let content_width = width.min(MAX_CONTENT_WIDTH);
        let inner = content_width.saturating_sub(PAD_X * 2).max(1);

        let mut top = 0u16;
        let slots = Section::ALL
            .iter()
            .map(|&section| {
                let height = match section {
                    Section::Home => HeroWidget::height(portfolio, inner),
                    Section::About => AboutWidget::height(portfolio, inner),
                    Section::Skills => SkillsWidget::height(portfolio, inner),
                    Section::Projects => ProjectsWidget::height(portfolio, inner),
                    Section::Contact => ContactWidget::height(portfolio, inner),
                };
                let slot = SectionSlot { section, top, height };
                top = top.saturating_add(height);
                slot
            })
            .collect();

        Self {
            content_width,
            slots,
            total_height: top,
        }
    }

    pub fn content_width(&self) -> u16 {
        self.content_width
    }

    pub fn total_height(&self) -> u16 {
        self.total_height
    }

    pub fn slots(&self) -> &[SectionSlot] {
        &self.slots
    }

    pub fn slot(&self, section: Section) -> Option<&SectionSlot> {
        self.slots.iter().find(|s| s.section == section)
    }

    /// Whole document, the region the page progress tracks
    pub fn document_region(&self) -> Region {
        Region::new(0.0, self.total_height as f64)
    }

    /// One anchor per section, in display order
    pub fn anchors(&self) -> Vec<Region> {
        self.slots.iter().map(SectionSlot::region).collect()
    }

    /// Section containing document row `row`
    pub fn section_at(&self, row: u16) -> Section {
        self.slots
            .iter()
            .rev()
            .find(|s| s.top <= row)
            .map(|s| s.section)
            .unwrap_or(Section::Home)
    }

    /// Whether any row of `section` is inside `[offset, offset + height)`
    pub fn is_visible(&self, section: Section, offset: u16, height: u16) -> bool {
        self.slot(section)
            .map(|s| s.top < offset.saturating_add(height) && s.bottom() > offset)
            .unwrap_or(false)
    }
}

/// Rows `text` takes when word-wrapped to `width` columns
pub fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = width.max(1) as usize;
    let mut rows = 0usize;

    for line in text.lines() {
        let mut line_width = 0usize;
        let mut line_rows = 1usize;
        for word in line.split_whitespace() {
            let w = word.width();
            if line_width == 0 {
                line_width = w;
            } else if line_width + 1 + w <= width {
                line_width += 1 + w;
                continue;
            } else {
                line_rows += 1;
                line_width = w;
            }
            // Words longer than a row are broken across rows
            if w > width {
                line_rows += (w - 1) / width;
                line_width = w % width;
            }
        }
        rows += line_rows;
    }

    rows.max(1) as u16
}
