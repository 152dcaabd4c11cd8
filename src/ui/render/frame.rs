use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    prelude::{Backend, Frame, text},
    text::Span,
    widgets::{Block, Paragraph},
};

use crate::domain::Algorithm;
use crate::driver::RunState;
use crate::ui::model::DashboardData;

use super::log_panel::{LogScroll, render_log};
use super::progress::progress_bar_line;
use super::theme::{
    ACCENT_ALGORITHM_RGB, ACCENT_PROGRESS_RGB, ACCENT_RATE_RGB, FLEET_COL_SHARE,
    FLEET_COL_TOPOLOGY, FLEET_MIN_HEIGHT, HEADER_HEIGHT, HELP_HEIGHT, LOG_MIN_HEIGHT, UI_MARGIN,
    app_background_style, emphasis, muted_style, rgb, style_color,
};
use super::topology::{panel, render_distribution, render_topology};

const HELP_TEXT: &str = "s send | 1/2/3 algorithm | a add target | +/- rate | l load test | x cancel | c clear | ↑/↓ scroll | q quit";

pub fn draw_frame<B: Backend>(f: &mut Frame<'_, B>, data: &DashboardData, scroll: LogScroll) {
    let size = f.size();
    f.render_widget(
        Block::default().style(app_background_style(data.no_color)),
        size,
    );

    let fleet_height = u16::try_from(data.targets.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .max(FLEET_MIN_HEIGHT);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(UI_MARGIN)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(fleet_height),
            Constraint::Min(LOG_MIN_HEIGHT),
            Constraint::Length(HELP_HEIGHT),
        ])
        .split(size);

    let (header_chunk, fleet_chunk, log_chunk, help_chunk) = match chunks.as_ref() {
        [a, b, c, d] => (*a, *b, *c, *d),
        _ => return,
    };

    render_header(f, data, header_chunk);
    render_fleet(f, data, fleet_chunk);
    render_log(f, data, scroll, log_chunk);
    f.render_widget(
        Paragraph::new(text::Line::from(Span::styled(
            HELP_TEXT,
            muted_style(data.no_color),
        ))),
        help_chunk,
    );
}

fn render_fleet<B: Backend>(f: &mut Frame<'_, B>, data: &DashboardData, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(FLEET_COL_TOPOLOGY),
            Constraint::Percentage(FLEET_COL_SHARE),
        ])
        .split(area);
    if let [left, right] = columns.as_ref() {
        render_topology(f, data, *left);
        render_distribution(f, data, *right);
    }
}

fn render_header<B: Backend>(f: &mut Frame<'_, B>, data: &DashboardData, area: Rect) {
    let block = panel("circulate", data.no_color);
    let inner = block.inner(area);
    let lines = vec![
        text::Line::from(vec![
            Span::styled("Balancer: ", muted_style(data.no_color)),
            Span::raw(data.balancer_url.clone()),
            Span::styled("   Requests: ", muted_style(data.no_color)),
            Span::raw(data.total_requests.to_string()),
        ]),
        algorithm_line(data),
        run_line(data, inner.width),
    ];
    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// Algorithm choices with the active one emphasized, then pacing.
pub(crate) fn algorithm_line(data: &DashboardData) -> text::Line<'static> {
    let mut spans = vec![Span::styled("Algorithm: ", muted_style(data.no_color))];
    for algorithm in Algorithm::ALL {
        let label = format!("[{}] {}", algorithm.hotkey(), algorithm.label());
        if algorithm == data.algorithm {
            spans.push(Span::styled(
                label,
                emphasis(data.no_color, rgb(ACCENT_ALGORITHM_RGB)),
            ));
        } else {
            spans.push(Span::styled(label, muted_style(data.no_color)));
        }
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled("  Rate: ", muted_style(data.no_color)));
    spans.push(Span::styled(
        format!("{} req/s", data.rate),
        style_color(data.no_color, rgb(ACCENT_RATE_RGB)),
    ));
    spans.push(Span::styled("  Duration: ", muted_style(data.no_color)));
    spans.push(Span::raw(data.duration.to_string()));
    text::Line::from(spans)
}

fn run_line(data: &DashboardData, width: u16) -> text::Line<'static> {
    let status = data.status.clone().unwrap_or_default();
    match data.run_state {
        RunState::Running(run) => {
            let label = format!("{}/{}", run.issued(), run.target_count());
            let bar_width = width.saturating_sub(2) / 2;
            let mut spans = progress_bar_line(
                run.issued(),
                run.target_count(),
                bar_width,
                data.no_color,
                &label,
                rgb(ACCENT_PROGRESS_RGB),
            )
            .spans;
            spans.push(Span::raw(format!(" {}", status)));
            text::Line::from(spans)
        }
        RunState::Idle | RunState::Completed(_) | RunState::Cancelled(_) => {
            text::Line::from(Span::raw(status))
        }
    }
}
