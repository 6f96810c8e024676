pub mod components;
pub mod delegates;
pub mod page_stack;
pub mod settings_view;
pub mod theme;
pub mod views;

// Re-export main types for convenience
pub use settings_view::{SettingsView, init};
pub use theme::{SettingsTheme, theme};
