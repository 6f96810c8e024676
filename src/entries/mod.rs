//! Display-model entries rendered by the settings list.

mod action;
mod dispatch;
mod image;
mod label;
mod resource;
mod switch;
mod text;
mod traits;

pub use action::{Callback, EntryAction, NavTarget};
pub use image::ImageEntry;
pub use label::{FormattedLabel, LabelArg};
pub use resource::ImageRes;
pub use switch::SwitchEntry;
pub use text::TextEntry;
pub use traits::DisplayEntry;

use crate::adapter::ViewType;
use dispatch::dispatch_entry;

/// A row in the settings list.
///
/// The set of variants is closed; every dispatch point matches exhaustively.
#[derive(Clone, Debug)]
pub enum SettingsEntry {
    /// An image card with a formatted label
    Image(ImageEntry),
    /// A toggle with optional description
    Switch(SwitchEntry),
    /// A text row with icon and optional description
    Text(TextEntry),
}

impl SettingsEntry {
    pub fn id(&self) -> &str {
        dispatch_entry!(self, id)
    }

    pub fn view_type(&self) -> ViewType {
        dispatch_entry!(self, view_type)
    }

    pub fn description(&self) -> Option<&str> {
        dispatch_entry!(self, description)
    }

    pub fn is_switch(&self) -> bool {
        matches!(self, Self::Switch(_))
    }

    pub fn as_switch(&self) -> Option<&SwitchEntry> {
        match self {
            Self::Switch(entry) => Some(entry),
            _ => None,
        }
    }
}

impl From<ImageEntry> for SettingsEntry {
    fn from(entry: ImageEntry) -> Self {
        Self::Image(entry)
    }
}

impl From<SwitchEntry> for SettingsEntry {
    fn from(entry: SwitchEntry) -> Self {
        Self::Switch(entry)
    }
}

impl From<TextEntry> for SettingsEntry {
    fn from(entry: TextEntry) -> Self {
        Self::Text(entry)
    }
}
