use crate::ui::theme::theme;
use gpui::{AnyElement, Div, SharedString, div, prelude::*};

/// Header row with the page title and an optional leading element
/// (the back button on nested pages).
pub struct PageHeader {
    title: SharedString,
    leading: Option<AnyElement>,
}

impl PageHeader {
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            leading: None,
        }
    }

    pub fn with_leading(mut self, element: AnyElement) -> Self {
        self.leading = Some(element);
        self
    }

    pub fn render(self) -> Div {
        let theme = theme();

        div()
            .w_full()
            .px(theme.header_padding_x)
            .py(theme.header_padding_y)
            .flex()
            .flex_row()
            .items_center()
            .gap_2()
            .children(self.leading)
            .child(
                div()
                    .text_base()
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(theme.header_title_color)
                    .child(self.title),
            )
    }
}
