use super::action::{Callback, EntryAction, NavTarget};
use super::label::FormattedLabel;
use super::resource::ImageRes;
use super::traits::DisplayEntry;
use crate::adapter::ViewType;

/// An image-card row: leading image, formatted label, trailing image.
#[derive(Clone, Debug)]
pub struct ImageEntry {
    pub id: String,
    pub image: ImageRes,
    pub label: FormattedLabel,
    pub trailing_image: ImageRes,
    pub action: Option<EntryAction>,
}

impl ImageEntry {
    pub fn new(
        id: impl Into<String>,
        image: ImageRes,
        label: FormattedLabel,
        trailing_image: ImageRes,
    ) -> Self {
        Self {
            id: id.into(),
            image,
            label,
            trailing_image,
            action: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.action = Some(EntryAction::Url(url.into()));
        self
    }

    pub fn with_target(mut self, target: NavTarget) -> Self {
        self.action = Some(EntryAction::Navigate(target));
        self
    }

    pub fn with_callback(mut self, callback: Callback) -> Self {
        self.action = Some(EntryAction::Invoke(callback));
        self
    }

    pub fn with_action(mut self, action: Option<EntryAction>) -> Self {
        self.action = action;
        self
    }
}

impl DisplayEntry for ImageEntry {
    fn id(&self) -> &str {
        &self.id
    }

    fn view_type(&self) -> ViewType {
        ViewType::Image
    }
}
