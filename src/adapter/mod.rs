//! The heterogeneous list renderer.
//!
//! [`SettingsAdapter`] exposes the four operations a virtualizing list host
//! needs: [`count`](SettingsAdapter::count), [`view_type`](SettingsAdapter::view_type),
//! [`create_slot`](SettingsAdapter::create_slot) and [`bind`](SettingsAdapter::bind).
//! Interaction goes back through [`apply_toggle`](SettingsAdapter::apply_toggle)
//! for switches and [`ClickHandler::fire`] for everything else.

mod background;
mod sink;
mod slot;
mod view_type;

pub use background::RowBackground;
pub use sink::{ActionSink, HostRequest, NO_ACTION_NOTICE};
pub use slot::{
    ClickHandler, ImageSlot, PresentationSlot, SlotSnapshot, SwitchSlot, TextElement, TextSlot,
    ToggleChange,
};
pub use view_type::ViewType;

use tracing::debug;

use crate::entries::{ImageEntry, SettingsEntry, SwitchEntry, TextEntry};
use crate::error::RenderError;

/// Maps an ordered sequence of entries onto presentation slots.
///
/// The adapter holds the entries for as long as the owning screen shows
/// them. Only `SwitchEntry::checked` is ever written, and only through
/// [`apply_toggle`](Self::apply_toggle).
#[derive(Debug, Default)]
pub struct SettingsAdapter {
    entries: Vec<SettingsEntry>,
}

impl SettingsAdapter {
    pub fn new(entries: Vec<SettingsEntry>) -> Self {
        Self { entries }
    }

    /// Replace the entry sequence. Equivalent to attaching a new adapter.
    pub fn attach(&mut self, entries: Vec<SettingsEntry>) {
        debug!(count = entries.len(), "Attaching entries");
        self.entries = entries;
    }

    /// Hand the entries back to their owner, leaving the adapter empty.
    pub fn detach(&mut self) -> Vec<SettingsEntry> {
        std::mem::take(&mut self.entries)
    }

    pub fn entries(&self) -> &[SettingsEntry] {
        &self.entries
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn entry(&self, index: usize) -> Result<&SettingsEntry, RenderError> {
        self.entries.get(index).ok_or(RenderError::IndexOutOfRange {
            index,
            count: self.entries.len(),
        })
    }

    pub fn view_type(&self, index: usize) -> Result<ViewType, RenderError> {
        self.entry(index).map(SettingsEntry::view_type)
    }

    pub fn create_slot(&self, view_type: ViewType) -> PresentationSlot {
        PresentationSlot::new(view_type)
    }

    /// Create a slot from a raw host tag.
    pub fn create_slot_for_tag(&self, tag: u32) -> Result<PresentationSlot, RenderError> {
        ViewType::try_from(tag).map(|view_type| self.create_slot(view_type))
    }

    /// Write the entry at `index` into `slot` and attach its handlers.
    pub fn bind(&self, slot: &mut PresentationSlot, index: usize) -> Result<(), RenderError> {
        let entry = self.entry(index)?;

        match (&mut *slot, entry) {
            (PresentationSlot::Image(slot), SettingsEntry::Image(entry)) => {
                bind_image(slot, entry)
            }
            (PresentationSlot::Switch(slot), SettingsEntry::Switch(entry)) => {
                bind_switch(slot, entry, index)
            }
            (PresentationSlot::Text(slot), SettingsEntry::Text(entry)) => bind_text(slot, entry),
            (slot, entry) => {
                return Err(RenderError::SlotMismatch {
                    expected: slot.view_type(),
                    found: entry.view_type(),
                });
            }
        }

        slot.set_background(RowBackground::for_position(index, self.count()));
        debug!(index, id = entry.id(), view_type = ?entry.view_type(), "Bound slot");
        Ok(())
    }

    /// Create a slot of the right shape for `index` and bind it.
    pub fn bind_new(&self, index: usize) -> Result<PresentationSlot, RenderError> {
        let mut slot = self.create_slot(self.view_type(index)?);
        self.bind(&mut slot, index)?;
        Ok(slot)
    }

    /// The state-change handler of switch slots.
    ///
    /// Records the new state on the entry, then fires the primary callback
    /// when it became checked or the secondary one when it became unchecked.
    pub fn apply_toggle(&mut self, change: ToggleChange) -> Result<(), RenderError> {
        let count = self.count();
        match self.entries.get_mut(change.index) {
            Some(SettingsEntry::Switch(entry)) => {
                entry.checked = change.checked;
                debug!(id = %entry.id, checked = change.checked, "Switch toggled");
                if let Some(callback) = entry.callback_for(change.checked) {
                    callback.invoke();
                }
                Ok(())
            }
            Some(other) => Err(RenderError::SlotMismatch {
                expected: ViewType::Switch,
                found: other.view_type(),
            }),
            None => Err(RenderError::IndexOutOfRange {
                index: change.index,
                count,
            }),
        }
    }

    /// Flip the switch at `index` through a bound slot, as a user toggle would.
    ///
    /// Returns the new state.
    pub fn toggle(&mut self, index: usize) -> Result<bool, RenderError> {
        let mut slot = self.create_slot(ViewType::Switch);
        self.bind(&mut slot, index)?;
        match slot {
            PresentationSlot::Switch(mut switch) => {
                if let Some(change) = switch.toggle() {
                    self.apply_toggle(change)?;
                }
                Ok(switch.is_checked())
            }
            other => Err(RenderError::SlotMismatch {
                expected: ViewType::Switch,
                found: other.view_type(),
            }),
        }
    }

    /// Activate the row at `index`: toggle switches, click everything else.
    pub fn activate(&mut self, index: usize, sink: &mut dyn ActionSink) -> Result<(), RenderError> {
        match self.view_type(index)? {
            ViewType::Switch => {
                self.toggle(index)?;
            }
            ViewType::Image | ViewType::Text => {
                let slot = self.bind_new(index)?;
                if let Some(click) = slot.click() {
                    click.fire(sink);
                }
            }
        }
        Ok(())
    }
}

fn bind_image(slot: &mut ImageSlot, entry: &ImageEntry) {
    slot.image = Some(entry.image.clone());
    slot.trailing_image = Some(entry.trailing_image.clone());
    slot.label.set_text(&entry.label.render());
    slot.click = ClickHandler::for_action(entry.action.as_ref());
}

fn bind_switch(slot: &mut SwitchSlot, entry: &SwitchEntry, index: usize) {
    // Recycled slots may still listen for a previous entry
    slot.detach_listener();
    slot.assign_checked(entry.checked);
    slot.title.set_text(&entry.title);
    slot.description.set_optional(entry.description.as_deref());
    slot.attach_listener(index);
}

fn bind_text(slot: &mut TextSlot, entry: &TextEntry) {
    slot.label.set_text(&entry.label);
    slot.image = Some(entry.image.clone());
    slot.description.set_optional(entry.description.as_deref());
    slot.click = ClickHandler::for_callback(entry.callback.as_ref());
}
