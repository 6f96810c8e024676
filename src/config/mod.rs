//! Configuration: app settings and the page files that feed the list.

mod pages;
mod service;
mod types;
mod validation;

pub use pages::{PageFile, PageSet, PageSpec, RowSpec, SettingsPage, resolve_pages};
pub use service::{config, config_dir, config_file, init_config, load_config_file};
pub use types::AppConfig;
pub use validation::{ValidationWarning, validate_config, validate_page_file};
