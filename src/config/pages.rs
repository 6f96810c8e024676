//! Settings pages loaded from TOML page files.
//!
//! ```toml
//! [[page]]
//! id = "main"
//! title = "Settings"
//!
//! [[page.row]]
//! kind = "switch"
//! title = "Wi-Fi"
//! checked = true
//! on_unchecked = "nmcli radio wifi off"
//! ```

use rust_embed::RustEmbed;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::service::{config, config_dir};
use super::validation::validate_page_file;
use crate::entries::{
    Callback, EntryAction, FormattedLabel, ImageEntry, ImageRes, LabelArg, NavTarget,
    SettingsEntry, SwitchEntry, TextEntry,
};
use crate::error::ConfigError;
use crate::process;

/// Embedded bundled pages.
#[derive(RustEmbed)]
#[folder = "assets/pages"]
#[include = "*.toml"]
struct BundledPages;

const BUNDLED_PAGES_FILE: &str = "default.toml";
const DEFAULT_TRAILING_ICON: &str = "caret-right";

/// Raw contents of a page file.
#[derive(Debug, Deserialize)]
pub struct PageFile {
    #[serde(rename = "page", default)]
    pub pages: Vec<PageSpec>,
}

#[derive(Debug, Deserialize)]
pub struct PageSpec {
    pub id: String,
    pub title: String,
    #[serde(rename = "row", default)]
    pub rows: Vec<RowSpec>,
}

/// One row of a page, tagged by `kind`.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RowSpec {
    Image {
        id: Option<String>,
        icon: ImageRes,
        trailing_icon: Option<ImageRes>,
        label: String,
        #[serde(default)]
        args: Vec<LabelArg>,
        url: Option<String>,
        target: Option<String>,
        command: Option<String>,
    },
    Switch {
        id: Option<String>,
        title: String,
        description: Option<String>,
        #[serde(default)]
        checked: bool,
        on_checked: Option<String>,
        on_unchecked: Option<String>,
    },
    Text {
        id: Option<String>,
        label: String,
        description: Option<String>,
        icon: ImageRes,
        command: Option<String>,
    },
}

impl RowSpec {
    fn into_entry(self, page_id: &str, index: usize) -> SettingsEntry {
        let default_id = || format!("{}-{}", page_id, index);
        match self {
            Self::Image {
                id,
                icon,
                trailing_icon,
                label,
                args,
                url,
                target,
                command,
            } => {
                let id = id.unwrap_or_else(default_id);
                let action = EntryAction::first_of(
                    url,
                    target.map(NavTarget::new),
                    command.map(|c| command_callback(&id, c)),
                );
                ImageEntry::new(
                    id,
                    icon,
                    FormattedLabel::new(label, args),
                    trailing_icon.unwrap_or_else(|| ImageRes::named(DEFAULT_TRAILING_ICON)),
                )
                .with_action(action)
                .into()
            }
            Self::Switch {
                id,
                title,
                description,
                checked,
                on_checked,
                on_unchecked,
            } => {
                let id = id.unwrap_or_else(default_id);
                SwitchEntry {
                    on_checked: on_checked.map(|c| command_callback(&id, c)),
                    on_unchecked: on_unchecked.map(|c| command_callback(&id, c)),
                    id,
                    title,
                    description,
                    checked,
                }
                .into()
            }
            Self::Text {
                id,
                label,
                description,
                icon,
                command,
            } => {
                let id = id.unwrap_or_else(default_id);
                TextEntry {
                    callback: command.map(|c| command_callback(&id, c)),
                    id,
                    label,
                    description,
                    image: icon,
                }
                .into()
            }
        }
    }
}

/// A callback that runs `command` in a detached shell on behalf of row `row_id`.
fn command_callback(row_id: &str, command: String) -> Callback {
    let row_id = row_id.to_string();
    Callback::named(command.clone(), move || {
        if let Err(e) = process::run_shell_command(&command, &row_id) {
            tracing::warn!(%e, command = %command, "Failed to run command");
        }
    })
}

/// A titled sequence of entries.
#[derive(Debug)]
pub struct SettingsPage {
    pub id: String,
    pub title: String,
    pub entries: Vec<SettingsEntry>,
}

/// All pages of a page file, in file order. The first page is the root.
#[derive(Debug)]
pub struct PageSet {
    pages: Vec<SettingsPage>,
}

impl PageSet {
    /// Parse and validate page file contents.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let file: PageFile = toml::from_str(content).map_err(ConfigError::ParseFailed)?;

        if file.pages.is_empty() {
            return Err(ConfigError::NoPages);
        }

        let mut seen = HashSet::new();
        for page in &file.pages {
            if !seen.insert(page.id.as_str()) {
                return Err(ConfigError::DuplicatePage(page.id.clone()));
            }
        }

        for warning in validate_page_file(&file) {
            tracing::warn!("Page validation: {} - {}", warning.field, warning.message);
        }

        let pages = file
            .pages
            .into_iter()
            .map(|spec| {
                let entries = spec
                    .rows
                    .into_iter()
                    .enumerate()
                    .map(|(ix, row)| row.into_entry(&spec.id, ix))
                    .collect();
                SettingsPage {
                    id: spec.id,
                    title: spec.title,
                    entries,
                }
            })
            .collect();

        Ok(Self { pages })
    }

    /// Load a page file from disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        let pages = Self::parse(&content)?;
        tracing::info!(count = pages.len(), "Loaded pages from {:?}", path);
        Ok(pages)
    }

    /// The pages shipped with the binary.
    pub fn bundled() -> Result<Self, ConfigError> {
        let file = BundledPages::get(BUNDLED_PAGES_FILE).ok_or(ConfigError::NoPages)?;
        Self::parse(&String::from_utf8_lossy(&file.data))
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn pages(&self) -> &[SettingsPage] {
        &self.pages
    }

    pub fn root(&self) -> &SettingsPage {
        &self.pages[0]
    }

    pub fn get(&self, id: &str) -> Option<&SettingsPage> {
        self.pages.iter().find(|p| p.id == id)
    }

    /// Move a page's entries out, for attaching them to a list.
    pub fn take_entries(&mut self, id: &str) -> Option<Vec<SettingsEntry>> {
        self.pages
            .iter_mut()
            .find(|p| p.id == id)
            .map(|p| std::mem::take(&mut p.entries))
    }

    /// Give a page its entries back once the list lets go of them.
    pub fn restore_entries(&mut self, id: &str, entries: Vec<SettingsEntry>) {
        if let Some(page) = self.pages.iter_mut().find(|p| p.id == id) {
            page.entries = entries;
        }
    }
}

/// Resolve and load the page set.
///
/// Priority: explicit path > `pages` in config.toml > `~/.config/zsettings/pages.toml`
/// > bundled pages.
pub fn resolve_pages(explicit: Option<&Path>) -> Result<PageSet, ConfigError> {
    if let Some(path) = explicit {
        return PageSet::load(path);
    }

    if let Some(path) = config().pages {
        return PageSet::load(&path);
    }

    let user_pages: Option<PathBuf> = config_dir()
        .map(|dir| dir.join("pages.toml"))
        .filter(|path| path.exists());
    if let Some(path) = user_pages {
        return PageSet::load(&path);
    }

    tracing::debug!("No page file found, using bundled pages");
    PageSet::bundled()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::ViewType;

    const SAMPLE: &str = r#"
        [[page]]
        id = "main"
        title = "Settings"

        [[page.row]]
        kind = "image"
        icon = "palette"
        label = "Theme: %1$s"
        args = ["Dark"]
        target = "appearance"

        [[page.row]]
        kind = "switch"
        id = "wifi"
        title = "Wi-Fi"
        description = "Connect automatically"
        checked = true

        [[page.row]]
        kind = "text"
        label = "About"
        icon = "/usr/share/pixmaps/logo.png"

        [[page]]
        id = "appearance"
        title = "Appearance"
    "#;

    #[test]
    fn test_parse_rows_in_order() {
        let pages = PageSet::parse(SAMPLE).unwrap();
        assert_eq!(pages.len(), 2);

        let root = pages.root();
        assert_eq!(root.id, "main");
        let types: Vec<ViewType> = root.entries.iter().map(SettingsEntry::view_type).collect();
        assert_eq!(types, vec![ViewType::Image, ViewType::Switch, ViewType::Text]);
    }

    #[test]
    fn test_row_fields() {
        let pages = PageSet::parse(SAMPLE).unwrap();
        let root = pages.root();

        let SettingsEntry::Image(image) = &root.entries[0] else {
            panic!("expected image entry");
        };
        assert_eq!(image.id, "main-0");
        assert_eq!(image.label.render(), "Theme: Dark");
        assert_eq!(image.trailing_image, ImageRes::named("caret-right"));
        assert!(matches!(&image.action, Some(EntryAction::Navigate(t)) if t.as_str() == "appearance"));

        let switch = root.entries[1].as_switch().unwrap();
        assert_eq!(switch.id, "wifi");
        assert!(switch.checked);
        assert!(switch.on_checked.is_none());

        let SettingsEntry::Text(text) = &root.entries[2] else {
            panic!("expected text entry");
        };
        assert_eq!(text.image, ImageRes::file("/usr/share/pixmaps/logo.png"));
        assert!(text.callback.is_none());
    }

    #[test]
    fn test_url_wins_over_target() {
        let pages = PageSet::parse(
            r#"
            [[page]]
            id = "main"
            title = "Main"

            [[page.row]]
            kind = "image"
            icon = "globe"
            label = "Website"
            url = "https://example.com"
            target = "main"
            "#,
        )
        .unwrap();
        let SettingsEntry::Image(image) = &pages.root().entries[0] else {
            panic!("expected image entry");
        };
        assert!(matches!(&image.action, Some(EntryAction::Url(_))));
    }

    #[test]
    fn test_command_becomes_named_callback() {
        let pages = PageSet::parse(
            r#"
            [[page]]
            id = "main"
            title = "Main"

            [[page.row]]
            kind = "switch"
            title = "Night light"
            on_checked = "gammastep -O 4000"
            "#,
        )
        .unwrap();
        let switch = pages.root().entries[0].as_switch().unwrap();
        assert_eq!(
            switch.on_checked.as_ref().and_then(Callback::name),
            Some("gammastep -O 4000")
        );
        assert!(!switch.checked);
    }

    #[test]
    fn test_unknown_kind_fails() {
        let result = PageSet::parse(
            r#"
            [[page]]
            id = "main"
            title = "Main"

            [[page.row]]
            kind = "slider"
            label = "Volume"
            "#,
        );
        assert!(matches!(result, Err(ConfigError::ParseFailed(_))));
    }

    #[test]
    fn test_duplicate_page_fails() {
        let result = PageSet::parse(
            r#"
            [[page]]
            id = "main"
            title = "One"

            [[page]]
            id = "main"
            title = "Two"
            "#,
        );
        assert!(matches!(result, Err(ConfigError::DuplicatePage(id)) if id == "main"));
    }

    #[test]
    fn test_empty_file_fails() {
        assert!(matches!(PageSet::parse(""), Err(ConfigError::NoPages)));
    }

    #[test]
    fn test_take_and_restore_entries() {
        let mut pages = PageSet::parse(SAMPLE).unwrap();
        let entries = pages.take_entries("main").unwrap();
        assert_eq!(entries.len(), 3);
        assert!(pages.root().entries.is_empty());

        pages.restore_entries("main", entries);
        assert_eq!(pages.root().entries.len(), 3);
        assert!(pages.take_entries("missing").is_none());
    }

    #[test]
    fn test_bundled_pages_parse() {
        let pages = PageSet::bundled().unwrap();
        assert!(!pages.is_empty());
        assert!(!pages.root().entries.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let result = PageSet::load(Path::new("/nonexistent/zsettings/pages.toml"));
        assert!(matches!(result, Err(ConfigError::ReadFailed { .. })));
    }
}
