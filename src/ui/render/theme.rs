use ratatui::style::{Color, Modifier, Style};

pub(super) const UI_MARGIN: u16 = 1;
pub(super) const HEADER_HEIGHT: u16 = 5;
pub(super) const HELP_HEIGHT: u16 = 1;
pub(super) const FLEET_MIN_HEIGHT: u16 = 7;
pub(super) const LOG_MIN_HEIGHT: u16 = 6;
pub(super) const FLEET_COL_TOPOLOGY: u16 = 60;
pub(super) const FLEET_COL_SHARE: u16 = 40;
pub(super) const APP_BG_RGB: (u8, u8, u8) = (0x0a, 0x0a, 0x0a);
pub(super) const PANEL_BORDER_RGB: (u8, u8, u8) = (0xe5, 0xe7, 0xeb);
pub(super) const PANEL_TEXT_RGB: (u8, u8, u8) = (0xff, 0xff, 0xff);
pub(super) const PANEL_MUTED_RGB: (u8, u8, u8) = (0xd1, 0xd5, 0xdb);
pub(super) const ACCENT_PROGRESS_RGB: (u8, u8, u8) = (0x22, 0xd3, 0xee);
pub(super) const ACCENT_RATE_RGB: (u8, u8, u8) = (0x60, 0xa5, 0xfa);
pub(super) const ACCENT_ALGORITHM_RGB: (u8, u8, u8) = (0xa7, 0x8b, 0xfa);
pub(super) const ACCENT_SELECTED_RGB: (u8, u8, u8) = (0x22, 0xc5, 0x5e);
pub(super) const ACCENT_DELTA_RGB: (u8, u8, u8) = (0xf5, 0x9e, 0x0b);
pub(super) const ACCENT_ERROR_RGB: (u8, u8, u8) = (0xef, 0x44, 0x44);

pub(super) fn style_color(no_color: bool, color: Color) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default().fg(color)
    }
}

/// Highlight that survives `--no-color`.
pub(super) fn emphasis(no_color: bool, color: Color) -> Style {
    style_color(no_color, color).add_modifier(Modifier::BOLD)
}

pub(super) const fn rgb(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

pub(super) fn panel_block_style(no_color: bool) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default()
            .bg(rgb(APP_BG_RGB))
            .fg(rgb(PANEL_TEXT_RGB))
    }
}

pub(super) fn panel_border_style(no_color: bool) -> Style {
    style_color(no_color, rgb(PANEL_BORDER_RGB))
}

pub(super) fn panel_title_style(no_color: bool) -> Style {
    style_color(no_color, rgb(PANEL_TEXT_RGB))
}

pub(super) fn muted_style(no_color: bool) -> Style {
    style_color(no_color, rgb(PANEL_MUTED_RGB))
}

pub(super) fn app_background_style(no_color: bool) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default().bg(rgb(APP_BG_RGB))
    }
}
