use ratatui::{
    layout::Rect,
    prelude::{Backend, Frame, text},
    text::Span,
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::model::{DashboardData, TargetView};

use super::progress::progress_bar_line;
use super::theme::{
    ACCENT_DELTA_RGB, ACCENT_PROGRESS_RGB, ACCENT_SELECTED_RGB, PANEL_TEXT_RGB, emphasis,
    muted_style, panel_block_style, panel_border_style, panel_title_style, rgb, style_color,
};

/// Widest dotted quad.
const ID_WIDTH: usize = 15;
const ID_COLUMN: u16 = 16;

pub(super) fn panel(title: &'static str, no_color: bool) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(panel_block_style(no_color))
        .border_style(panel_border_style(no_color))
        .title_style(panel_title_style(no_color))
}

/// `Entry ─▶ id  count ─▶ Service` for every target, last selected highlighted.
pub(crate) fn topology_lines(data: &DashboardData) -> Vec<text::Line<'static>> {
    if data.targets.is_empty() {
        return vec![text::Line::from(Span::styled(
            "No targets",
            muted_style(data.no_color),
        ))];
    }
    data.targets
        .iter()
        .map(|target| topology_line(target, data.no_color))
        .collect()
}

fn topology_line(target: &TargetView, no_color: bool) -> text::Line<'static> {
    let id_style = if target.is_last_selected {
        emphasis(no_color, rgb(ACCENT_SELECTED_RGB))
    } else {
        style_color(no_color, rgb(PANEL_TEXT_RGB))
    };
    let mut spans = vec![
        Span::styled("Entry ─▶ ", muted_style(no_color)),
        Span::styled(format!("{:<width$}", target.id, width = ID_WIDTH), id_style),
        Span::raw(format!(" {:>6}", target.request_count)),
    ];
    if target.delta > 0 {
        spans.push(Span::styled(
            format!(" +{}", target.delta),
            style_color(no_color, rgb(ACCENT_DELTA_RGB)),
        ));
    }
    spans.push(Span::styled(" ─▶ Service", muted_style(no_color)));
    if target.is_last_selected {
        spans.push(Span::styled(
            "  ◀ last",
            emphasis(no_color, rgb(ACCENT_SELECTED_RGB)),
        ));
    }
    text::Line::from(spans)
}

pub(super) fn render_topology<B: Backend>(
    f: &mut Frame<'_, B>,
    data: &DashboardData,
    area: Rect,
) {
    let block = panel("Topology", data.no_color);
    let paragraph = Paragraph::new(topology_lines(data)).block(block);
    f.render_widget(paragraph, area);
}

pub(super) fn render_distribution<B: Backend>(
    f: &mut Frame<'_, B>,
    data: &DashboardData,
    area: Rect,
) {
    let block = panel("Distribution", data.no_color);
    let inner = block.inner(area);
    let bar_width = inner.width.saturating_sub(ID_COLUMN);
    let lines: Vec<text::Line<'static>> = data
        .targets
        .iter()
        .map(|target| {
            let share = data.share_percent(target);
            let mut spans = vec![Span::raw(format!(
                "{:<width$} ",
                target.id,
                width = ID_WIDTH
            ))];
            spans.extend(
                progress_bar_line(
                    u64::from(share),
                    100,
                    bar_width,
                    data.no_color,
                    &format!("{}%", share),
                    rgb(ACCENT_PROGRESS_RGB),
                )
                .spans,
            );
            text::Line::from(spans)
        })
        .collect();
    f.render_widget(Paragraph::new(lines).block(block), area);
}
