//! printf-style label templates with positional arguments.
//!
//! Supported placeholders are `%s` and `%d` (consume the next argument),
//! `%1$s` / `%2$d` (1-based explicit positions) and `%%` (a literal percent).

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::fmt;

lazy_static::lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"%(?:(\d+)\$)?([sd%])").expect("valid regex");
}

/// A single positional argument of a label template.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabelArg {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for LabelArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{}", n),
            Self::Float(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for LabelArg {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for LabelArg {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for LabelArg {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

/// A label template plus the arguments it is rendered with.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormattedLabel {
    pub template: String,
    pub args: Vec<LabelArg>,
}

impl FormattedLabel {
    pub fn new(template: impl Into<String>, args: Vec<LabelArg>) -> Self {
        Self {
            template: template.into(),
            args,
        }
    }

    /// A label without placeholders.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Vec::new())
    }

    /// Render the template.
    ///
    /// Placeholders without a matching argument are kept verbatim.
    pub fn render(&self) -> String {
        let mut next = 0;
        PLACEHOLDER
            .replace_all(&self.template, |caps: &Captures| {
                if &caps[2] == "%" {
                    return "%".to_string();
                }

                let position = match caps.get(1) {
                    Some(explicit) => explicit
                        .as_str()
                        .parse::<usize>()
                        .ok()
                        .and_then(|n| n.checked_sub(1)),
                    None => {
                        next += 1;
                        Some(next - 1)
                    }
                };

                match position.and_then(|ix| self.args.get(ix)) {
                    Some(arg) => arg.to_string(),
                    None => {
                        tracing::warn!(
                            template = %self.template,
                            placeholder = &caps[0],
                            "Label placeholder has no matching argument"
                        );
                        caps[0].to_string()
                    }
                }
            })
            .into_owned()
    }
}

impl From<&str> for FormattedLabel {
    fn from(s: &str) -> Self {
        Self::plain(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_label() {
        assert_eq!(FormattedLabel::plain("Display").render(), "Display");
    }

    #[test]
    fn test_implicit_placeholders_in_order() {
        let label = FormattedLabel::new("%s of %d", vec!["Page".into(), 3.into()]);
        assert_eq!(label.render(), "Page of 3");
    }

    #[test]
    fn test_explicit_positions() {
        let label = FormattedLabel::new(
            "Version %2$s (build %1$d)",
            vec![LabelArg::Int(42), "1.4.0".into()],
        );
        assert_eq!(label.render(), "Version 1.4.0 (build 42)");
    }

    #[test]
    fn test_escaped_percent() {
        let label = FormattedLabel::new("Battery %d%%", vec![80.into()]);
        assert_eq!(label.render(), "Battery 80%");
    }

    #[test]
    fn test_missing_argument_kept_verbatim() {
        let label = FormattedLabel::new("%s and %s", vec!["one".into()]);
        assert_eq!(label.render(), "one and %s");
    }

    #[test]
    fn test_position_zero_is_invalid() {
        let label = FormattedLabel::new("%0$s", vec!["x".into()]);
        assert_eq!(label.render(), "%0$s");
    }

    #[test]
    fn test_args_deserialize_untagged() {
        #[derive(Deserialize)]
        struct Wrapper {
            args: Vec<LabelArg>,
        }
        let parsed: Wrapper = toml::from_str(r#"args = ["Dark", 3, 1.5]"#).unwrap();
        assert_eq!(
            parsed.args,
            vec![LabelArg::Text("Dark".into()), LabelArg::Int(3), LabelArg::Float(1.5)]
        );
    }
}
