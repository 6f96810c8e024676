use super::action::Callback;
use super::traits::DisplayEntry;
use crate::adapter::ViewType;

/// A toggle row. `checked` is the only field the renderer ever writes.
#[derive(Clone, Debug)]
pub struct SwitchEntry {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub checked: bool,
    /// Fired on the transition to checked
    pub on_checked: Option<Callback>,
    /// Fired on the transition to unchecked
    pub on_unchecked: Option<Callback>,
}

impl SwitchEntry {
    pub fn new(id: impl Into<String>, title: impl Into<String>, checked: bool) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            checked,
            on_checked: None,
            on_unchecked: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_on_checked(mut self, callback: Callback) -> Self {
        self.on_checked = Some(callback);
        self
    }

    pub fn with_on_unchecked(mut self, callback: Callback) -> Self {
        self.on_unchecked = Some(callback);
        self
    }

    /// The callback matching a transition into `checked`.
    pub fn callback_for(&self, checked: bool) -> Option<&Callback> {
        if checked {
            self.on_checked.as_ref()
        } else {
            self.on_unchecked.as_ref()
        }
    }
}

impl DisplayEntry for SwitchEntry {
    fn id(&self) -> &str {
        &self.id
    }

    fn view_type(&self) -> ViewType {
        ViewType::Switch
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
