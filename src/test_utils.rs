//! Test utilities and mock factories.
//!
//! Only compiled in test builds.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::entries::{
    Callback, FormattedLabel, ImageEntry, ImageRes, SettingsEntry, SwitchEntry, TextEntry,
};

/// Counts how often the callbacks it hands out were invoked.
#[derive(Clone, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    pub fn callback(&self) -> Callback {
        let hits = self.0.clone();
        Callback::new(move || {
            hits.fetch_add(1, Ordering::SeqCst);
        })
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

fn slug(text: &str) -> String {
    text.to_lowercase().replace(' ', "-")
}

/// Create a mock ImageEntry whose label template gets a single "Dark" argument.
pub fn mock_image(template: &str) -> ImageEntry {
    ImageEntry::new(
        format!("image-{}", slug(template)),
        ImageRes::named("palette"),
        FormattedLabel::new(template, vec!["Dark".into()]),
        ImageRes::named("caret-right"),
    )
}

/// Create a mock SwitchEntry without callbacks.
pub fn mock_switch(title: &str, checked: bool) -> SwitchEntry {
    SwitchEntry::new(format!("switch-{}", slug(title)), title, checked)
}

/// Create a mock TextEntry.
pub fn mock_text(label: &str, description: Option<&str>) -> TextEntry {
    let entry = TextEntry::new(format!("text-{}", slug(label)), label, ImageRes::named("info"));
    match description {
        Some(desc) => entry.with_description(desc),
        None => entry,
    }
}

/// One entry of each variant, in image, switch, text order.
pub fn mock_page() -> Vec<SettingsEntry> {
    vec![
        mock_image("Theme: %s").into(),
        mock_switch("Wi-Fi", false).into(),
        mock_text("About", Some("Version 1.0")).into(),
    ]
}
