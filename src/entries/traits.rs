use crate::adapter::ViewType;

/// Basic display properties shared by every entry variant.
pub trait DisplayEntry {
    /// Stable identifier, unique within a page
    fn id(&self) -> &str;

    /// The view-type tag rows of this variant are rendered with
    fn view_type(&self) -> ViewType;

    /// Secondary text, if any
    fn description(&self) -> Option<&str> {
        None
    }
}
