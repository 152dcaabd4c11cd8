use ratatui::prelude::text;
use ratatui::style::Color;
use ratatui::text::Span;

use super::theme::{PANEL_TEXT_RGB, rgb, style_color};

const PARTIAL_BLOCKS: [&str; 8] = ["", "▏", "▎", "▍", "▌", "▋", "▊", "▉"];

/// Eighth-block bar of `done / total` with a centered label.
pub(super) fn progress_bar_line(
    done: u64,
    total: u64,
    width: u16,
    no_color: bool,
    label: &str,
    color: Color,
) -> text::Line<'static> {
    let bar_width = usize::from(width.saturating_sub(2)).max(1);
    let total_eighths = u128::try_from(bar_width)
        .unwrap_or(u128::MAX)
        .saturating_mul(8);
    let filled_eighths = u128::from(done.min(total))
        .saturating_mul(total_eighths)
        .checked_div(u128::from(total))
        .unwrap_or(0);
    let full_count = usize::try_from(filled_eighths / 8)
        .unwrap_or(bar_width)
        .min(bar_width);
    let rem = usize::try_from(filled_eighths % 8).unwrap_or(0);
    let partial = PARTIAL_BLOCKS.get(rem).copied().unwrap_or("");

    let label_chars: Vec<char> = label.chars().take(bar_width).collect();
    let label_start = bar_width.saturating_sub(label_chars.len()) / 2;
    let label_at = |idx: usize| {
        idx.checked_sub(label_start)
            .and_then(|offset| label_chars.get(offset).copied())
    };

    let fill_style = style_color(no_color, color);
    let mut spans = Vec::with_capacity(bar_width.saturating_add(2));
    spans.push(Span::raw("["));
    for idx in 0..bar_width {
        if let Some(ch) = label_at(idx) {
            spans.push(Span::styled(
                ch.to_string(),
                style_color(no_color, rgb(PANEL_TEXT_RGB)),
            ));
        } else if idx < full_count {
            spans.push(Span::styled("█", fill_style));
        } else if idx == full_count && !partial.is_empty() {
            spans.push(Span::styled(partial, fill_style));
        } else {
            spans.push(Span::raw(" "));
        }
    }
    spans.push(Span::raw("]"));
    text::Line::from(spans)
}
