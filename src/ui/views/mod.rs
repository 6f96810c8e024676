mod row_rendering;

pub use row_rendering::{
    render_image, render_slot, render_switch_control, render_text_content, row_container,
};
