use crate::adapter::{HostRequest, SettingsAdapter};
use crate::entries::SettingsEntry;
use crate::ui::theme::theme;
use crate::ui::views::render_slot;
use gpui::{App, Context, SharedString, Window, div, prelude::*};
use gpui_component::IndexPath;
use gpui_component::list::{ListDelegate, ListItem as GpuiListItem, ListState};
use std::sync::Arc;
use tracing::{error, warn};

/// Type alias for request callbacks to reduce complexity
type RequestCallback = Arc<dyn Fn(HostRequest) + Send + Sync>;

/// Bridges the settings adapter to gpui-component's virtualized list.
///
/// The list asks for the item count and renders rows on demand; every
/// rendered row is a fresh slot bound through the adapter.
pub struct SettingsListDelegate {
    adapter: SettingsAdapter,
    selected_index: Option<usize>,
    on_request: Option<RequestCallback>,
    on_cancel: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl SettingsListDelegate {
    pub fn new(entries: Vec<SettingsEntry>) -> Self {
        let selected_index = if entries.is_empty() { None } else { Some(0) };
        Self {
            adapter: SettingsAdapter::new(entries),
            selected_index,
            on_request: None,
            on_cancel: None,
        }
    }

    /// Set the callback receiving side effects of activated rows.
    pub fn set_on_request(&mut self, callback: impl Fn(HostRequest) + Send + Sync + 'static) {
        self.on_request = Some(Arc::new(callback));
    }

    /// Set the callback for when the list is cancelled (Escape pressed).
    pub fn set_on_cancel(&mut self, callback: impl Fn() + Send + Sync + 'static) {
        self.on_cancel = Some(Arc::new(callback));
    }

    pub fn adapter(&self) -> &SettingsAdapter {
        &self.adapter
    }

    /// Attach a new page's entries and return the previous ones.
    pub fn replace_entries(&mut self, entries: Vec<SettingsEntry>) -> Vec<SettingsEntry> {
        let previous = self.adapter.detach();
        self.selected_index = if entries.is_empty() { None } else { Some(0) };
        self.adapter.attach(entries);
        previous
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    /// Activate the selected row and forward what it requested.
    pub fn do_confirm(&mut self) {
        let Some(index) = self.selected_index else {
            return;
        };

        let mut requests: Vec<HostRequest> = Vec::new();
        if let Err(e) = self.adapter.activate(index, &mut requests) {
            error!(%e, index, "Failed to activate row");
            return;
        }

        if let Some(ref on_request) = self.on_request {
            for request in requests {
                on_request(request);
            }
        }
    }

    pub fn do_cancel(&self) {
        if let Some(ref on_cancel) = self.on_cancel {
            on_cancel();
        }
    }
}

impl ListDelegate for SettingsListDelegate {
    type Item = GpuiListItem;

    fn items_count(&self, _section: usize, _cx: &App) -> usize {
        self.adapter.count()
    }

    fn render_item(
        &mut self,
        ix: IndexPath,
        _window: &mut Window,
        _cx: &mut Context<'_, ListState<Self>>,
    ) -> Option<Self::Item> {
        let slot = match self.adapter.bind_new(ix.row) {
            Ok(slot) => slot,
            Err(e) => {
                warn!(%e, row = ix.row, "Failed to bind row");
                return None;
            }
        };
        let selected = self.selected_index == Some(ix.row);

        // Reset ListItem default padding - rows handle all styling themselves
        Some(
            GpuiListItem::new(("settings-row", ix.row))
                .py_0()
                .px_0()
                .child(render_slot(&slot, ix.row, selected)),
        )
    }

    fn set_selected_index(
        &mut self,
        ix: Option<IndexPath>,
        _window: &mut Window,
        _cx: &mut Context<ListState<Self>>,
    ) {
        self.selected_index = ix.map(|i| i.row);
    }

    fn confirm(&mut self, _secondary: bool, _window: &mut Window, cx: &mut Context<ListState<Self>>) {
        self.do_confirm();
        cx.notify();
    }

    fn cancel(&mut self, _window: &mut Window, _cx: &mut Context<ListState<Self>>) {
        self.do_cancel();
    }

    fn render_empty(
        &mut self,
        _window: &mut Window,
        _cx: &mut Context<'_, ListState<Self>>,
    ) -> impl IntoElement {
        let t = theme();
        div()
            .w_full()
            .h(t.empty_state_height)
            .flex()
            .items_center()
            .justify_center()
            .child(
                div()
                    .text_sm()
                    .text_color(t.empty_state_color)
                    .child(SharedString::from("Nothing to configure here")),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::NO_ACTION_NOTICE;
    use crate::test_utils::{mock_image, mock_page, mock_switch};
    use std::sync::Mutex;

    fn recording(delegate: &mut SettingsListDelegate) -> Arc<Mutex<Vec<HostRequest>>> {
        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = received.clone();
        delegate.set_on_request(move |request| sink.lock().unwrap().push(request));
        received
    }

    #[test]
    fn test_confirm_forwards_requests() {
        let mut delegate = SettingsListDelegate::new(vec![mock_image("Nothing").into()]);
        let received = recording(&mut delegate);

        delegate.do_confirm();

        assert_eq!(
            *received.lock().unwrap(),
            vec![HostRequest::Notice(NO_ACTION_NOTICE.to_string())]
        );
    }

    #[test]
    fn test_confirm_toggles_switch() {
        let mut delegate = SettingsListDelegate::new(vec![mock_switch("Wi-Fi", false).into()]);
        let received = recording(&mut delegate);

        delegate.do_confirm();

        assert!(received.lock().unwrap().is_empty());
        assert_eq!(
            delegate.adapter().entries()[0].as_switch().map(|s| s.checked),
            Some(true)
        );
    }

    #[test]
    fn test_replace_entries_returns_previous() {
        let mut delegate = SettingsListDelegate::new(mock_page());
        let previous = delegate.replace_entries(Vec::new());

        assert_eq!(previous.len(), 3);
        assert_eq!(delegate.adapter().count(), 0);
        assert_eq!(delegate.selected_index(), None);

        // Nothing selected: confirm is a no-op
        delegate.do_confirm();
    }
}
