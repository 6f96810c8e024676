use crate::config::{PageSet, config};
use crate::ui::SettingsView;
use gpui::{
    App, AppContext, Bounds, TitlebarOptions, WindowBounds, WindowHandle, WindowOptions, px, size,
};
use gpui_component::Root;

/// Open the settings window showing the root page of `pages`.
pub fn open_settings_window(pages: PageSet, cx: &mut App) -> anyhow::Result<WindowHandle<Root>> {
    let config = config();
    let bounds = Bounds::centered(
        None,
        size(px(config.window_width), px(config.window_height)),
        cx,
    );

    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        titlebar: Some(TitlebarOptions {
            title: Some(pages.root().title.clone().into()),
            ..Default::default()
        }),
        focus: true,
        show: true,
        app_id: Some("zsettings".to_string()),
        ..Default::default()
    };

    let window_handle = cx.open_window(options, |window, cx| {
        let view = cx.new(|cx| SettingsView::new(pages, window, cx));

        view.update(cx, |settings: &mut SettingsView, cx| {
            settings.focus(window, cx);
        });

        // Closing the only window ends the app
        window.on_window_should_close(cx, |_window, cx| {
            cx.quit();
            true
        });

        cx.new(|cx| Root::new(view, window, cx))
    })?;

    window_handle.update(cx, |_root, window, _cx| {
        window.activate_window();
    })?;

    Ok(window_handle)
}
