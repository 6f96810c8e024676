//! Embedded assets for zsettings.
//!
//! Row icons live in `assets/icons` and are served alongside the
//! gpui-component icon set.

use gpui::{AssetSource, Result, SharedString};
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Embedded row icons.
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "icons/*.svg"]
struct IconAssets;

/// Asset source serving both the row icons and gpui-component's UI icons.
pub struct CombinedAssets;

impl AssetSource for CombinedAssets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }

        if let Some(file) = IconAssets::get(path) {
            return Ok(Some(file.data));
        }

        gpui_component_assets::Assets.load(path)
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut result: Vec<SharedString> = IconAssets::iter()
            .filter_map(|p| {
                p.starts_with(path)
                    .then(|| SharedString::from(p.to_string()))
            })
            .collect();

        if let Ok(component_assets) = gpui_component_assets::Assets.list(path) {
            result.extend(component_assets);
        }

        Ok(result)
    }
}

/// Icons available to rows by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsIcon {
    Palette,
    CaretRight,
    Info,
    Wifi,
    Bluetooth,
    Moon,
    Bell,
    Globe,
    Lock,
    Speaker,
    Monitor,
    Power,
    Gear,
}

impl SettingsIcon {
    /// Get the asset path for this icon.
    pub fn path(self) -> &'static str {
        match self {
            Self::Palette => "icons/palette.svg",
            Self::CaretRight => "icons/caret-right.svg",
            Self::Info => "icons/info.svg",
            Self::Wifi => "icons/wifi.svg",
            Self::Bluetooth => "icons/bluetooth.svg",
            Self::Moon => "icons/moon.svg",
            Self::Bell => "icons/bell.svg",
            Self::Globe => "icons/globe.svg",
            Self::Lock => "icons/lock.svg",
            Self::Speaker => "icons/speaker.svg",
            Self::Monitor => "icons/monitor.svg",
            Self::Power => "icons/power.svg",
            Self::Gear => "icons/gear.svg",
        }
    }

    /// Try to get a SettingsIcon from an icon name string.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "palette" => Some(Self::Palette),
            "caret-right" => Some(Self::CaretRight),
            "info" => Some(Self::Info),
            "wifi" => Some(Self::Wifi),
            "bluetooth" => Some(Self::Bluetooth),
            "moon" => Some(Self::Moon),
            "bell" => Some(Self::Bell),
            "globe" => Some(Self::Globe),
            "lock" => Some(Self::Lock),
            "speaker" => Some(Self::Speaker),
            "monitor" => Some(Self::Monitor),
            "power" => Some(Self::Power),
            "gear" => Some(Self::Gear),
            _ => None,
        }
    }
}
