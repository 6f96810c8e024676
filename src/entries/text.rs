use super::action::Callback;
use super::resource::ImageRes;
use super::traits::DisplayEntry;
use crate::adapter::ViewType;

/// A plain text row with an icon and an optional callback.
#[derive(Clone, Debug)]
pub struct TextEntry {
    pub id: String,
    pub label: String,
    pub description: Option<String>,
    pub image: ImageRes,
    pub callback: Option<Callback>,
}

impl TextEntry {
    pub fn new(id: impl Into<String>, label: impl Into<String>, image: ImageRes) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: None,
            image,
            callback: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_callback(mut self, callback: Callback) -> Self {
        self.callback = Some(callback);
        self
    }
}

impl DisplayEntry for TextEntry {
    fn id(&self) -> &str {
        &self.id
    }

    fn view_type(&self) -> ViewType {
        ViewType::Text
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
