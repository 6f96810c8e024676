//! Configuration validation utilities.
//!
//! Provides validation for configuration values, returning warnings for
//! non-fatal issues that should be logged but don't prevent startup.

use std::collections::HashSet;

use super::pages::{PageFile, RowSpec};
use super::types::AppConfig;

/// Non-fatal validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    /// The field that has an issue.
    pub field: String,
    /// A description of the issue.
    pub message: String,
}

impl ValidationWarning {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validate the app config.
pub fn validate_config(config: &AppConfig) -> Vec<ValidationWarning> {
    let mut warnings = vec![];

    if config.window_width < 300.0 {
        warnings.push(ValidationWarning::new(
            "window_width",
            format!(
                "Width {} is below minimum (300). Consider increasing for usability.",
                config.window_width
            ),
        ));
    }

    if config.window_height < 200.0 {
        warnings.push(ValidationWarning::new(
            "window_height",
            format!(
                "Height {} is below minimum (200). Consider increasing for usability.",
                config.window_height
            ),
        ));
    }

    if config.notice_duration_ms == 0 {
        warnings.push(ValidationWarning::new(
            "notice_duration_ms",
            "Notices will disappear immediately.",
        ));
    }

    warnings
}

/// Validate a parsed page file.
///
/// Checks for image rows with more than one action (only the first by
/// priority url > target > command is used), navigation targets that name
/// no page, and rows with empty labels.
pub fn validate_page_file(file: &PageFile) -> Vec<ValidationWarning> {
    let mut warnings = vec![];
    let page_ids: HashSet<&str> = file.pages.iter().map(|p| p.id.as_str()).collect();

    for page in &file.pages {
        for (ix, row) in page.rows.iter().enumerate() {
            let field = format!("{}.row[{}]", page.id, ix);
            match row {
                RowSpec::Image {
                    label,
                    url,
                    target,
                    command,
                    ..
                } => {
                    let actions = [url.is_some(), target.is_some(), command.is_some()]
                        .into_iter()
                        .filter(|set| *set)
                        .count();
                    if actions > 1 {
                        warnings.push(ValidationWarning::new(
                            &field,
                            "More than one action set; only the first of url, target, command is used.",
                        ));
                    }
                    if let Some(target) = target
                        && !page_ids.contains(target.as_str())
                    {
                        warnings.push(ValidationWarning::new(
                            &field,
                            format!("Target page '{}' does not exist.", target),
                        ));
                    }
                    if label.trim().is_empty() {
                        warnings.push(ValidationWarning::new(&field, "Label is empty."));
                    }
                }
                RowSpec::Switch { title, .. } if title.trim().is_empty() => {
                    warnings.push(ValidationWarning::new(&field, "Title is empty."));
                }
                RowSpec::Text { label, .. } if label.trim().is_empty() => {
                    warnings.push(ValidationWarning::new(&field, "Label is empty."));
                }
                RowSpec::Switch { .. } | RowSpec::Text { .. } => {}
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&AppConfig::default()).is_empty());
    }

    #[test]
    fn test_small_window_warns() {
        let config = AppConfig {
            window_width: 100.0,
            window_height: 100.0,
            ..AppConfig::default()
        };
        let fields: Vec<String> = validate_config(&config)
            .into_iter()
            .map(|w| w.field)
            .collect();
        assert_eq!(fields, vec!["window_width", "window_height"]);
    }

    #[test]
    fn test_page_file_warnings() {
        let file: PageFile = toml::from_str(
            r#"
            [[page]]
            id = "main"
            title = "Settings"

            [[page.row]]
            kind = "image"
            icon = "palette"
            label = "Theme"
            url = "https://example.com"
            target = "appearance"

            [[page.row]]
            kind = "text"
            label = " "
            icon = "info"
            "#,
        )
        .unwrap();

        let warnings = validate_page_file(&file);
        assert_eq!(warnings.len(), 3);
        assert!(warnings.iter().all(|w| w.field.starts_with("main.row[")));
        assert!(warnings[1].message.contains("appearance"));
    }
}
