//! Presentation slots: the bindable view templates, one shape per view type.

use serde::Serialize;

use super::background::RowBackground;
use super::sink::{ActionSink, NO_ACTION_NOTICE};
use super::view_type::ViewType;
use crate::entries::{Callback, EntryAction, ImageRes, NavTarget};

/// A text element that can be hidden.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TextElement {
    pub text: String,
    pub visible: bool,
}

impl TextElement {
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.visible = true;
    }

    /// Show `text`, or hide the element when it is absent or empty.
    pub fn set_optional(&mut self, text: Option<&str>) {
        match text.filter(|t| !t.is_empty()) {
            Some(text) => self.set_text(text),
            None => {
                self.text.clear();
                self.visible = false;
            }
        }
    }

    /// The text if the element is shown.
    pub fn shown(&self) -> Option<&str> {
        self.visible.then_some(self.text.as_str())
    }
}

/// The click behavior attached to a slot during bind.
#[derive(Clone, Debug, Default)]
pub enum ClickHandler {
    /// The slot has not been bound yet
    #[default]
    Unbound,
    OpenUrl(String),
    Navigate(NavTarget),
    Invoke(Callback),
    /// Nothing configured: tell the user so
    Notice,
}

impl ClickHandler {
    pub fn for_action(action: Option<&EntryAction>) -> Self {
        match action {
            Some(EntryAction::Url(url)) => Self::OpenUrl(url.clone()),
            Some(EntryAction::Navigate(target)) => Self::Navigate(target.clone()),
            Some(EntryAction::Invoke(callback)) => Self::Invoke(callback.clone()),
            None => Self::Notice,
        }
    }

    pub fn for_callback(callback: Option<&Callback>) -> Self {
        callback.map_or(Self::Notice, |cb| Self::Invoke(cb.clone()))
    }

    /// Run the handler, routing side effects through `sink`.
    pub fn fire(&self, sink: &mut dyn ActionSink) {
        match self {
            Self::Unbound => tracing::debug!("Click on unbound slot ignored"),
            Self::OpenUrl(url) => sink.open_url(url),
            Self::Navigate(target) => sink.navigate(target),
            Self::Invoke(callback) => callback.invoke(),
            Self::Notice => sink.notice(NO_ACTION_NOTICE),
        }
    }

    /// Short human-readable description, used by snapshots.
    pub fn describe(&self) -> String {
        match self {
            Self::Unbound => "unbound".to_string(),
            Self::OpenUrl(url) => format!("open {}", url),
            Self::Navigate(target) => format!("navigate {}", target),
            Self::Invoke(callback) => match callback.name() {
                Some(name) => format!("invoke {}", name),
                None => "invoke".to_string(),
            },
            Self::Notice => "notice".to_string(),
        }
    }
}

/// A user-driven change of a switch slot, reported to the adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleChange {
    pub index: usize,
    pub checked: bool,
}

#[derive(Clone, Debug, Default)]
pub struct ImageSlot {
    pub image: Option<ImageRes>,
    pub label: TextElement,
    pub trailing_image: Option<ImageRes>,
    pub click: ClickHandler,
    pub background: RowBackground,
}

/// Slot of a toggle row.
///
/// The toggle reports changes only while a listener is attached, so state
/// assigned during bind never loops back into the adapter.
#[derive(Clone, Debug, Default)]
pub struct SwitchSlot {
    pub title: TextElement,
    pub description: TextElement,
    pub background: RowBackground,
    checked: bool,
    listener: Option<usize>,
}

impl SwitchSlot {
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Index of the entry the change listener reports to.
    pub fn listener(&self) -> Option<usize> {
        self.listener
    }

    pub(crate) fn attach_listener(&mut self, index: usize) {
        self.listener = Some(index);
    }

    pub(crate) fn detach_listener(&mut self) {
        self.listener = None;
    }

    /// Assign the toggle state without reporting anything. Used while binding.
    pub(crate) fn assign_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    /// Assign the toggle state, reporting a change if a listener is attached.
    pub fn set_checked(&mut self, checked: bool) -> Option<ToggleChange> {
        if self.checked == checked {
            return None;
        }
        self.checked = checked;
        self.listener.map(|index| ToggleChange { index, checked })
    }

    /// Flip the toggle as a user would.
    pub fn toggle(&mut self) -> Option<ToggleChange> {
        self.set_checked(!self.checked)
    }
}

#[derive(Clone, Debug, Default)]
pub struct TextSlot {
    pub label: TextElement,
    pub description: TextElement,
    pub image: Option<ImageRes>,
    pub click: ClickHandler,
    pub background: RowBackground,
}

/// An instantiated view template for one of the view types.
#[derive(Clone, Debug)]
pub enum PresentationSlot {
    Image(ImageSlot),
    Switch(SwitchSlot),
    Text(TextSlot),
}

impl PresentationSlot {
    pub fn new(view_type: ViewType) -> Self {
        match view_type {
            ViewType::Image => Self::Image(ImageSlot::default()),
            ViewType::Switch => Self::Switch(SwitchSlot::default()),
            ViewType::Text => Self::Text(TextSlot::default()),
        }
    }

    pub fn view_type(&self) -> ViewType {
        match self {
            Self::Image(_) => ViewType::Image,
            Self::Switch(_) => ViewType::Switch,
            Self::Text(_) => ViewType::Text,
        }
    }

    pub fn background(&self) -> RowBackground {
        match self {
            Self::Image(slot) => slot.background,
            Self::Switch(slot) => slot.background,
            Self::Text(slot) => slot.background,
        }
    }

    pub(crate) fn set_background(&mut self, background: RowBackground) {
        match self {
            Self::Image(slot) => slot.background = background,
            Self::Switch(slot) => slot.background = background,
            Self::Text(slot) => slot.background = background,
        }
    }

    /// The click handler, for slots that have one.
    pub fn click(&self) -> Option<&ClickHandler> {
        match self {
            Self::Image(slot) => Some(&slot.click),
            Self::Text(slot) => Some(&slot.click),
            Self::Switch(_) => None,
        }
    }

    pub fn snapshot(&self) -> SlotSnapshot {
        match self {
            Self::Image(slot) => SlotSnapshot {
                view_type: ViewType::Image,
                background: slot.background,
                title: slot.label.text.clone(),
                description: None,
                images: [&slot.image, &slot.trailing_image]
                    .into_iter()
                    .flatten()
                    .map(ToString::to_string)
                    .collect(),
                checked: None,
                on_click: Some(slot.click.describe()),
            },
            Self::Switch(slot) => SlotSnapshot {
                view_type: ViewType::Switch,
                background: slot.background,
                title: slot.title.text.clone(),
                description: slot.description.shown().map(str::to_string),
                images: Vec::new(),
                checked: Some(slot.checked),
                on_click: None,
            },
            Self::Text(slot) => SlotSnapshot {
                view_type: ViewType::Text,
                background: slot.background,
                title: slot.label.text.clone(),
                description: slot.description.shown().map(str::to_string),
                images: slot.image.iter().map(ToString::to_string).collect(),
                checked: None,
                on_click: Some(slot.click.describe()),
            },
        }
    }
}

/// Serializable view of a bound slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SlotSnapshot {
    pub view_type: ViewType,
    pub background: RowBackground,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_click: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::HostRequest;

    #[test]
    fn test_text_element_hides_empty() {
        let mut element = TextElement::default();
        element.set_optional(Some("Shown"));
        assert_eq!(element.shown(), Some("Shown"));

        element.set_optional(Some(""));
        assert!(!element.visible);
        assert_eq!(element.shown(), None);

        element.set_optional(None);
        assert!(!element.visible);
    }

    #[test]
    fn test_switch_without_listener_reports_nothing() {
        let mut slot = SwitchSlot::default();
        assert_eq!(slot.set_checked(true), None);
        assert!(slot.is_checked());
    }

    #[test]
    fn test_switch_with_listener_reports_change() {
        let mut slot = SwitchSlot::default();
        slot.attach_listener(4);
        assert_eq!(
            slot.toggle(),
            Some(ToggleChange {
                index: 4,
                checked: true
            })
        );
        // Assigning the current state is not a change
        assert_eq!(slot.set_checked(true), None);
    }

    #[test]
    fn test_assign_checked_is_silent_with_listener() {
        let mut slot = SwitchSlot::default();
        slot.attach_listener(2);
        slot.assign_checked(true);
        assert!(slot.is_checked());

        // Only user toggles report, starting from the assigned state
        assert_eq!(
            slot.toggle(),
            Some(ToggleChange {
                index: 2,
                checked: false
            })
        );
    }

    #[test]
    fn test_notice_handler() {
        let mut requests: Vec<HostRequest> = Vec::new();
        ClickHandler::for_action(None).fire(&mut requests);
        assert_eq!(
            requests,
            vec![HostRequest::Notice(NO_ACTION_NOTICE.to_string())]
        );
    }

    #[test]
    fn test_unbound_handler_does_nothing() {
        let mut requests: Vec<HostRequest> = Vec::new();
        ClickHandler::default().fire(&mut requests);
        assert!(requests.is_empty());
    }

    #[test]
    fn test_new_slot_matches_view_type() {
        for view_type in ViewType::ALL {
            assert_eq!(PresentationSlot::new(view_type).view_type(), view_type);
        }
    }
}
