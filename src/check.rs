//! Headless rendering: bind every row of a page set without a window.
//!
//! Used by `zsettings check` to validate page files and inspect what the
//! list would show.

use anyhow::{Result, bail};
use serde::Serialize;
use std::fmt::Write;
use std::path::Path;

use crate::adapter::{SettingsAdapter, SlotSnapshot};
use crate::config::{PageSet, SettingsPage, resolve_pages};

/// Bound rows of one page.
#[derive(Debug, Serialize)]
pub struct PageReport {
    pub id: String,
    pub title: String,
    pub rows: Vec<SlotSnapshot>,
}

/// Bind all rows of `page`.
pub fn report_page(page: &SettingsPage) -> Result<PageReport> {
    let adapter = SettingsAdapter::new(page.entries.clone());
    let rows = (0..adapter.count())
        .map(|ix| adapter.bind_new(ix).map(|slot| slot.snapshot()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PageReport {
        id: page.id.clone(),
        title: page.title.clone(),
        rows,
    })
}

/// Bind the rows of one page, or of every page when `only` is `None`.
pub fn build_reports(pages: &PageSet, only: Option<&str>) -> Result<Vec<PageReport>> {
    match only {
        Some(id) => match pages.get(id) {
            Some(page) => Ok(vec![report_page(page)?]),
            None => bail!("Page '{}' not found", id),
        },
        None => pages.pages().iter().map(report_page).collect(),
    }
}

/// Human-readable listing of the reports.
pub fn format_reports(reports: &[PageReport]) -> String {
    let mut out = String::new();
    for report in reports {
        let _ = writeln!(out, "[{}] {}", report.id, report.title);
        for (ix, row) in report.rows.iter().enumerate() {
            let view_type = format!("{:?}", row.view_type).to_lowercase();
            let background = format!("{:?}", row.background);
            let _ = write!(out, "  {:>2} {:<6} {:<10} ", ix, view_type, background);
            if let Some(checked) = row.checked {
                let _ = write!(out, "[{}] ", if checked { "x" } else { " " });
            }
            let _ = write!(out, "{}", row.title);
            if let Some(description) = &row.description {
                let _ = write!(out, " ({})", description);
            }
            if let Some(on_click) = &row.on_click {
                let _ = write!(out, " -> {}", on_click);
            }
            out.push('\n');
        }
    }
    out
}

/// Entry point of `zsettings check`.
pub fn run_check(pages_path: Option<&Path>, only: Option<&str>, json: bool) -> Result<String> {
    let pages = resolve_pages(pages_path)?;
    let reports = build_reports(&pages, only)?;
    tracing::debug!(pages = reports.len(), "Bound all rows");

    if json {
        Ok(serde_json::to_string_pretty(&reports)?)
    } else {
        Ok(format_reports(&reports))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGES: &str = r#"
        [[page]]
        id = "main"
        title = "Settings"

        [[page.row]]
        kind = "switch"
        title = "Wi-Fi"
        checked = true

        [[page.row]]
        kind = "text"
        label = "About"
        description = "Version 1.0"
        icon = "info"

        [[page]]
        id = "empty"
        title = "Empty"
    "#;

    #[test]
    fn test_build_reports_all_pages() {
        let pages = PageSet::parse(PAGES).unwrap();
        let reports = build_reports(&pages, None).unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].rows.len(), 2);
        assert!(reports[1].rows.is_empty());
    }

    #[test]
    fn test_build_reports_unknown_page() {
        let pages = PageSet::parse(PAGES).unwrap();
        assert!(build_reports(&pages, Some("missing")).is_err());
    }

    #[test]
    fn test_format_reports() {
        let pages = PageSet::parse(PAGES).unwrap();
        let reports = build_reports(&pages, Some("main")).unwrap();
        let text = format_reports(&reports);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "[main] Settings");
        assert!(lines[1].contains("switch"));
        assert!(lines[1].contains("Top"));
        assert!(lines[1].contains("[x] Wi-Fi"));
        assert!(lines[2].contains("About (Version 1.0) -> notice"));
        assert!(lines[2].contains("Bottom"));
    }

    #[test]
    fn test_json_report_shape() {
        let pages = PageSet::parse(PAGES).unwrap();
        let reports = build_reports(&pages, Some("main")).unwrap();
        let value = serde_json::to_value(&reports).unwrap();

        let first = &value[0]["rows"][0];
        assert_eq!(first["view_type"], "switch");
        assert_eq!(first["background"], "top");
        assert_eq!(first["checked"], true);
        assert!(first.get("description").is_none());

        let second = &value[0]["rows"][1];
        assert_eq!(second["background"], "bottom");
        assert_eq!(second["images"][0], "info");
        assert_eq!(second["on_click"], "notice");
    }
}
