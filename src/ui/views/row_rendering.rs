//! Rendering functions for bound presentation slots.

use crate::adapter::{ImageSlot, PresentationSlot, RowBackground, SwitchSlot, TextElement, TextSlot};
use crate::assets::SettingsIcon;
use crate::entries::ImageRes;
use crate::ui::theme::{corner_radii, theme};
use gpui::{Div, ElementId, Pixels, SharedString, Stateful, div, img, prelude::*, px, svg};

/// Render any bound slot based on its shape.
/// This is the main dispatch function for row rendering.
pub fn render_slot(slot: &PresentationSlot, row: usize, selected: bool) -> Stateful<Div> {
    match slot {
        PresentationSlot::Image(image) => render_image_row(image, row, selected),
        PresentationSlot::Switch(switch) => render_switch_row(switch, row, selected),
        PresentationSlot::Text(text) => render_text_row(text, row, selected),
    }
}

/// Leading image, formatted label, trailing image.
fn render_image_row(slot: &ImageSlot, row: usize, selected: bool) -> Stateful<Div> {
    let theme = theme();
    row_container(row, selected, slot.background)
        .child(render_image(slot.image.as_ref(), theme.icon_size))
        .child(render_text_content(&slot.label, None))
        .child(render_image(slot.trailing_image.as_ref(), theme.trailing_icon_size))
}

/// Title, optional description and the toggle control.
fn render_switch_row(slot: &SwitchSlot, row: usize, selected: bool) -> Stateful<Div> {
    row_container(row, selected, slot.background)
        .child(render_text_content(&slot.title, Some(&slot.description)))
        .child(render_switch_control(slot.is_checked()))
}

/// Icon, label and optional description.
fn render_text_row(slot: &TextSlot, row: usize, selected: bool) -> Stateful<Div> {
    let theme = theme();
    row_container(row, selected, slot.background)
        .child(render_image(slot.image.as_ref(), theme.icon_size))
        .child(render_text_content(&slot.label, Some(&slot.description)))
}

/// Create the base container for a row with selection and corner styling.
pub fn row_container(row: usize, selected: bool, background: RowBackground) -> Stateful<Div> {
    let theme = theme();

    let bg_color = if selected {
        theme.row_background_selected
    } else {
        theme.row_background
    };

    let mut container = div()
        .id(ElementId::NamedInteger("settings-row".into(), row as u64))
        .px(theme.row_padding_x)
        .py(theme.row_padding_y)
        .bg(bg_color)
        .overflow_hidden()
        .relative()
        .flex()
        .flex_row()
        .items_center()
        .gap_3();

    // Rows below the first one are separated by a hairline
    if !background.rounds_top() {
        container = container.border_t_1().border_color(theme.row_divider);
    }

    let [top_left, top_right, bottom_right, bottom_left] =
        corner_radii(background, theme.row_border_radius);
    let radii = &mut container.style().corner_radii;
    radii.top_left = Some(top_left.into());
    radii.top_right = Some(top_right.into());
    radii.bottom_right = Some(bottom_right.into());
    radii.bottom_left = Some(bottom_left.into());

    container
}

/// Render a named icon or an image file, with fallback placeholder.
pub fn render_image(image: Option<&ImageRes>, size: Pixels) -> Div {
    let theme = theme();

    let container = div()
        .w(size)
        .h(size)
        .flex_shrink_0()
        .flex()
        .items_center()
        .justify_center();

    match image {
        Some(ImageRes::Named(name)) => {
            if let Some(icon) = SettingsIcon::from_name(name) {
                return container.child(
                    svg()
                        .path(icon.path())
                        .w(size)
                        .h(size)
                        .text_color(theme.icon_color),
                );
            }
        }
        Some(ImageRes::File(path)) => {
            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            if matches!(ext, "png" | "jpg" | "jpeg" | "svg") {
                return container.child(img(path.clone()).w(size).h(size).rounded_sm());
            }
        }
        None => {}
    }

    container
        .bg(theme.icon_placeholder_background)
        .rounded_sm()
        .child(
            div()
                .text_sm()
                .text_color(theme.icon_placeholder_color)
                .child(SharedString::from("?")),
        )
}

/// Render the title and, when visible, the description.
pub fn render_text_content(title: &TextElement, description: Option<&TextElement>) -> Div {
    let theme = theme();

    let title_element = div()
        .w_full()
        .text_sm()
        .line_height(theme.title_line_height)
        .text_color(theme.title_color)
        .whitespace_nowrap()
        .overflow_hidden()
        .text_ellipsis()
        .child(SharedString::from(title.text.clone()));

    let mut content = div()
        .flex_1()
        .min_h(theme.row_content_height)
        .flex()
        .flex_col()
        .justify_center()
        .overflow_hidden()
        .child(title_element);

    if let Some(desc) = description.and_then(TextElement::shown) {
        content = content.child(
            div()
                .w_full()
                .text_xs()
                .h(theme.description_height)
                .text_color(theme.description_color)
                .whitespace_nowrap()
                .overflow_hidden()
                .text_ellipsis()
                .child(SharedString::from(desc.to_string())),
        );
    }

    content
}

/// Render the toggle track and knob.
pub fn render_switch_control(checked: bool) -> Div {
    let theme = theme();

    let track = div()
        .flex_shrink_0()
        .w(theme.switch_width)
        .h(theme.switch_height)
        .px(px(2.0))
        .rounded_full()
        .flex()
        .items_center()
        .bg(if checked {
            theme.switch_track_on
        } else {
            theme.switch_track_off
        });

    let track = if checked {
        track.justify_end()
    } else {
        track.justify_start()
    };

    track.child(
        div()
            .w(theme.switch_knob_size)
            .h(theme.switch_knob_size)
            .rounded_full()
            .bg(theme.switch_knob),
    )
}
