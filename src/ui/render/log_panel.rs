use ratatui::{
    layout::Rect,
    prelude::{Backend, Frame, text},
    text::Span,
    widgets::Paragraph,
};

use crate::ui::model::DashboardData;

use super::theme::{ACCENT_ERROR_RGB, PANEL_TEXT_RGB, muted_style, rgb, style_color};
use super::topology::panel;

/// Log lines that start with this prefix render in the error accent.
const ERROR_PREFIX: &str = "Error:";
const PAGE_LINES: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollStep {
    Up,
    Down,
    PageUp,
    PageDown,
    Oldest,
    Newest,
}

/// Distance from the newest log line, in lines. Zero follows the tail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogScroll {
    offset: usize,
}

impl LogScroll {
    #[must_use]
    pub const fn offset(self) -> usize {
        self.offset
    }

    #[must_use]
    pub const fn is_following(self) -> bool {
        self.offset == 0
    }

    /// Moves the window; `available` is the number of lines that can be shown.
    pub fn apply(&mut self, step: ScrollStep, available: usize) {
        let max = available.saturating_sub(1);
        self.offset = match step {
            ScrollStep::Up => self.offset.saturating_add(1),
            ScrollStep::Down => self.offset.saturating_sub(1),
            ScrollStep::PageUp => self.offset.saturating_add(PAGE_LINES),
            ScrollStep::PageDown => self.offset.saturating_sub(PAGE_LINES),
            ScrollStep::Oldest => max,
            ScrollStep::Newest => 0,
        }
        .min(max);
    }
}

/// Slice of `lines` that fits `height` rows, ending `scroll.offset()` lines before the tail.
pub(crate) fn visible_lines(lines: &[String], height: usize, scroll: LogScroll) -> &[String] {
    let offset = scroll.offset().min(lines.len().saturating_sub(1));
    let end = lines.len().saturating_sub(offset);
    let start = end.saturating_sub(height);
    lines.get(start..end).unwrap_or(&[])
}

pub(crate) fn log_line(line: &str, no_color: bool) -> text::Line<'static> {
    let style = if line.starts_with(ERROR_PREFIX) {
        style_color(no_color, rgb(ACCENT_ERROR_RGB))
    } else {
        style_color(no_color, rgb(PANEL_TEXT_RGB))
    };
    text::Line::from(Span::styled(line.to_owned(), style))
}

pub(super) fn render_log<B: Backend>(
    f: &mut Frame<'_, B>,
    data: &DashboardData,
    scroll: LogScroll,
    area: Rect,
) {
    let block = panel("Results", data.no_color);
    let inner = block.inner(area);
    let height = usize::from(inner.height);

    let lines: Vec<text::Line<'static>> = if data.log_tail.is_empty() {
        vec![text::Line::from(Span::styled(
            "No results yet. Press s to send a request or l to start a load test.",
            muted_style(data.no_color),
        ))]
    } else {
        visible_lines(&data.log_tail, height, scroll)
            .iter()
            .map(|line| log_line(line, data.no_color))
            .collect()
    };

    f.render_widget(Paragraph::new(lines).block(block), area);
}
