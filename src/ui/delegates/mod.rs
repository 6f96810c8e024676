mod settings_delegate;

pub use settings_delegate::SettingsListDelegate;
