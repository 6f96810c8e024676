use crate::ui::theme::theme;
use gpui::{Div, SharedString, div, prelude::*};

/// A transient message shown at the bottom of the settings window.
///
/// # Example
/// ```ignore
/// NoticeBanner::new("No action configured for this item").render()
/// ```
pub struct NoticeBanner {
    message: SharedString,
}

impl NoticeBanner {
    pub fn new(message: impl Into<SharedString>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn render(self) -> Div {
        let theme = theme();

        div()
            .absolute()
            .bottom(theme.notice_margin)
            .left(theme.notice_margin)
            .right(theme.notice_margin)
            .flex()
            .justify_center()
            .child(
                div()
                    .px_4()
                    .py_2()
                    .bg(theme.notice_background)
                    .border_1()
                    .border_color(theme.notice_border)
                    .rounded(theme.notice_radius)
                    .text_sm()
                    .text_color(theme.notice_color)
                    .child(self.message),
            )
    }
}
