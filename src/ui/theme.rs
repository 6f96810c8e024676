use gpui::{Hsla, Pixels, hsla, px};

use crate::adapter::RowBackground;

/// Centralized theme configuration for the settings UI.
/// All colors, sizes, and spacing are defined here for consistency.
pub struct SettingsTheme {
    // Window
    pub window_background: Hsla,

    // Page header
    pub header_padding_x: Pixels,
    pub header_padding_y: Pixels,
    pub header_title_color: Hsla,
    pub header_back_color: Hsla,

    // List
    pub list_padding_x: Pixels,
    pub list_padding_y: Pixels,

    // Rows
    pub row_padding_x: Pixels,
    pub row_padding_y: Pixels,
    pub row_border_radius: Pixels,
    pub row_background: Hsla,
    pub row_background_selected: Hsla,
    pub row_divider: Hsla,
    pub row_content_height: Pixels,

    // Row content
    pub title_color: Hsla,
    pub description_color: Hsla,
    pub title_line_height: Pixels,
    pub description_height: Pixels,

    // Icons
    pub icon_size: Pixels,
    pub icon_color: Hsla,
    pub icon_placeholder_background: Hsla,
    pub icon_placeholder_color: Hsla,
    pub trailing_icon_size: Pixels,

    // Switch
    pub switch_width: Pixels,
    pub switch_height: Pixels,
    pub switch_knob_size: Pixels,
    pub switch_track_on: Hsla,
    pub switch_track_off: Hsla,
    pub switch_knob: Hsla,

    // Notice
    pub notice_background: Hsla,
    pub notice_border: Hsla,
    pub notice_color: Hsla,
    pub notice_radius: Pixels,
    pub notice_margin: Pixels,

    // Empty state
    pub empty_state_height: Pixels,
    pub empty_state_color: Hsla,
}

impl Default for SettingsTheme {
    fn default() -> Self {
        Self {
            window_background: hsla(0.0, 0.0, 0.08, 1.0),

            header_padding_x: px(16.0),
            header_padding_y: px(12.0),
            header_title_color: hsla(0.0, 0.0, 1.0, 0.9),
            header_back_color: hsla(0.0, 0.0, 1.0, 0.6),

            list_padding_x: px(12.0),
            list_padding_y: px(8.0),

            row_padding_x: px(12.0),
            row_padding_y: px(10.0),
            row_border_radius: px(12.0),
            row_background: hsla(0.0, 0.0, 1.0, 0.05),
            row_background_selected: hsla(0.0, 0.0, 1.0, 0.1),
            row_divider: hsla(0.0, 0.0, 1.0, 0.06),
            row_content_height: px(36.0),

            title_color: hsla(0.0, 0.0, 1.0, 0.9),
            description_color: hsla(0.0, 0.0, 1.0, 0.45),
            title_line_height: px(18.0),
            description_height: px(16.0),

            icon_size: px(24.0),
            icon_color: hsla(0.0, 0.0, 1.0, 0.75),
            icon_placeholder_background: hsla(0.0, 0.0, 1.0, 0.04),
            icon_placeholder_color: hsla(0.0, 0.0, 1.0, 0.25),
            trailing_icon_size: px(16.0),

            switch_width: px(40.0),
            switch_height: px(22.0),
            switch_knob_size: px(18.0),
            switch_track_on: hsla(0.58, 0.7, 0.5, 1.0),
            switch_track_off: hsla(0.0, 0.0, 1.0, 0.15),
            switch_knob: hsla(0.0, 0.0, 1.0, 1.0),

            notice_background: hsla(0.0, 0.0, 0.16, 0.95),
            notice_border: hsla(0.0, 0.0, 1.0, 0.12),
            notice_color: hsla(0.0, 0.0, 1.0, 0.85),
            notice_radius: px(8.0),
            notice_margin: px(16.0),

            empty_state_height: px(200.0),
            empty_state_color: hsla(0.0, 0.0, 1.0, 0.25),
        }
    }
}

/// Radii of the four corners of a row, in top-left, top-right,
/// bottom-right, bottom-left order.
pub fn corner_radii(background: RowBackground, radius: Pixels) -> [Pixels; 4] {
    let top = if background.rounds_top() { radius } else { px(0.0) };
    let bottom = if background.rounds_bottom() {
        radius
    } else {
        px(0.0)
    };
    [top, top, bottom, bottom]
}

/// Global theme instance.
static THEME: std::sync::OnceLock<SettingsTheme> = std::sync::OnceLock::new();

/// Get the global settings theme.
pub fn theme() -> &'static SettingsTheme {
    THEME.get_or_init(SettingsTheme::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_radii_follow_background() {
        let r = px(12.0);
        let zero = px(0.0);
        assert_eq!(corner_radii(RowBackground::AllCorners, r), [r, r, r, r]);
        assert_eq!(corner_radii(RowBackground::Top, r), [r, r, zero, zero]);
        assert_eq!(corner_radii(RowBackground::Middle, r), [zero; 4]);
        assert_eq!(corner_radii(RowBackground::Bottom, r), [zero, zero, r, r]);
    }
}
