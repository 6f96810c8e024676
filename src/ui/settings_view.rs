//! Settings view - the window content of zsettings.
//!
//! [`SettingsView`] shows one page of the page set at a time. Rows that
//! navigate push a page onto the stack, or return to it when it is already
//! open. Escape or the back button pops it, and closes the app on the root
//! page.

use std::time::Duration;

use gpui::{
    App, AppContext, Context, Entity, FocusHandle, Focusable, KeyBinding, SharedString, Window,
    actions, div, prelude::*,
};
use gpui_component::list::{List, ListState};
use gpui_component::{Icon, IconName};
use tracing::{debug, warn};

use crate::adapter::HostRequest;
use crate::config::{PageSet, config};
use crate::entries::NavTarget;
use crate::process;
use crate::ui::components::{NoticeBanner, PageHeader};
use crate::ui::delegates::SettingsListDelegate;
use crate::ui::page_stack::{PageStack, StackMove};
use crate::ui::theme::theme;

actions!(settings, [Back]);

/// Initialize key bindings for the settings view.
pub fn init(cx: &mut App) {
    cx.bind_keys([KeyBinding::new("escape", Back, Some("SettingsView"))]);
}

/// Events delivered from the list delegate to the view.
enum ViewEvent {
    Host(HostRequest),
    Back,
}

/// The settings window content.
pub struct SettingsView {
    pages: PageSet,
    stack: PageStack,
    list_state: Entity<ListState<SettingsListDelegate>>,
    notice: Option<SharedString>,
    notice_generation: u64,
    focus_handle: FocusHandle,
}

impl SettingsView {
    pub fn new(mut pages: PageSet, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let root_id = pages.root().id.clone();
        let entries = pages.take_entries(&root_id).unwrap_or_default();

        let (event_tx, event_rx) = flume::unbounded::<ViewEvent>();

        let mut delegate = SettingsListDelegate::new(entries);
        let request_tx = event_tx.clone();
        delegate.set_on_request(move |request| {
            let _ = request_tx.send(ViewEvent::Host(request));
        });
        delegate.set_on_cancel(move || {
            let _ = event_tx.send(ViewEvent::Back);
        });

        let list_state = cx.new(|cx| ListState::new(delegate, window, cx));

        // Requests are handled outside the list's update so the view can
        // swap the list's entries
        cx.spawn(async move |this, cx| {
            while let Ok(event) = event_rx.recv_async().await {
                if this
                    .update(cx, |view, cx| view.handle_event(event, cx))
                    .is_err()
                {
                    break;
                }
            }
        })
        .detach();

        Self {
            pages,
            stack: PageStack::new(root_id),
            list_state,
            notice: None,
            notice_generation: 0,
            focus_handle: cx.focus_handle(),
        }
    }

    /// Focus the list so keyboard navigation works immediately.
    pub fn focus(&self, window: &mut Window, cx: &mut Context<Self>) {
        let handle = self.list_state.read(cx).focus_handle(cx);
        window.focus(&handle, cx);
    }

    fn handle_event(&mut self, event: ViewEvent, cx: &mut Context<Self>) {
        match event {
            ViewEvent::Host(HostRequest::OpenUrl(url)) => {
                if let Err(e) = process::open_url(&url) {
                    warn!(%e, url = %url, "Failed to open URL");
                    self.show_notice(format!("Could not open {}", url), cx);
                }
            }
            ViewEvent::Host(HostRequest::Navigate(target)) => self.navigate(&target, cx),
            ViewEvent::Host(HostRequest::Notice(message)) => self.show_notice(message, cx),
            ViewEvent::Back => self.go_back(cx),
        }
    }

    /// Open the page named by `target`, or return to it if it is already open.
    fn navigate(&mut self, target: &NavTarget, cx: &mut Context<Self>) {
        if self.pages.get(target.as_str()).is_none() {
            warn!(target = %target, "Navigation to unknown page");
            self.show_notice(format!("Unknown page: {}", target), cx);
            return;
        }

        let step = self.stack.navigate(target.as_str());
        self.apply_move(step, cx);
    }

    /// Return to the previous page, or quit on the root page.
    fn go_back(&mut self, cx: &mut Context<Self>) {
        let step = self.stack.back();
        self.apply_move(step, cx);
    }

    fn apply_move(&mut self, step: StackMove, cx: &mut Context<Self>) {
        match step {
            StackMove::Switch { from, to } => self.swap_page(&from, &to, cx),
            StackMove::Stay => self.show_notice("Already on this page", cx),
            StackMove::Quit => {
                debug!("Back on root page, quitting");
                cx.quit();
            }
        }
    }

    /// Move `to`'s entries into the list and hand `from`'s back to the page set.
    fn swap_page(&mut self, from: &str, to: &str, cx: &mut Context<Self>) {
        let entries = self.pages.take_entries(to).unwrap_or_default();
        let previous = self.list_state.update(cx, |state, cx| {
            let previous = state.delegate_mut().replace_entries(entries);
            cx.notify();
            previous
        });
        self.pages.restore_entries(from, previous);
        debug!(from, to, "Switched page");
        cx.notify();
    }

    fn show_notice(&mut self, message: impl Into<SharedString>, cx: &mut Context<Self>) {
        self.notice = Some(message.into());
        self.notice_generation += 1;
        let generation = self.notice_generation;
        let duration = Duration::from_millis(config().notice_duration_ms);

        cx.spawn(async move |this, cx| {
            cx.background_executor().timer(duration).await;
            let _ = this.update(cx, |view, cx| {
                // A newer notice replaced this one
                if view.notice_generation == generation {
                    view.notice = None;
                    cx.notify();
                }
            });
        })
        .detach();

        cx.notify();
    }

    fn back(&mut self, _: &Back, _window: &mut Window, cx: &mut Context<Self>) {
        self.go_back(cx);
    }

    fn render_header(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let t = theme();
        let title = self
            .pages
            .get(self.stack.current())
            .map(|page| page.title.clone())
            .unwrap_or_default();

        let header = PageHeader::new(title);
        if self.stack.depth() > 1 {
            header
                .with_leading(
                    div()
                        .id("back")
                        .cursor_pointer()
                        .on_click(cx.listener(|this, _, _window, cx| {
                            this.go_back(cx);
                        }))
                        .child(Icon::new(IconName::ArrowLeft).text_color(t.header_back_color))
                        .into_any_element(),
                )
                .render()
        } else {
            header.render()
        }
    }
}

impl Focusable for SettingsView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl gpui::Render for SettingsView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let t = theme();
        let header = self.render_header(cx);

        div()
            .track_focus(&self.focus_handle)
            .key_context("SettingsView")
            .on_action(cx.listener(Self::back))
            .size_full()
            .relative()
            .flex()
            .flex_col()
            .bg(t.window_background)
            .child(header)
            .child(
                div()
                    .flex_1()
                    .overflow_hidden()
                    .px(t.list_padding_x)
                    .py(t.list_padding_y)
                    .child(List::new(&self.list_state)),
            )
            .children(self.notice.clone().map(|message| NoticeBanner::new(message).render()))
    }
}
