use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "svg"];

/// Reference to an image shown in a row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ImageRes {
    /// An icon from the embedded icon set, by name
    Named(String),
    /// An image file on disk
    File(PathBuf),
}

impl ImageRes {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    /// Parse a resource string: anything that looks like a path is a file.
    pub fn parse(value: &str) -> Self {
        let path = Path::new(value);
        let has_image_ext = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()));

        if value.contains(std::path::MAIN_SEPARATOR) || has_image_ext {
            Self::File(path.to_path_buf())
        } else {
            Self::Named(value.to_string())
        }
    }
}

impl fmt::Display for ImageRes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl From<String> for ImageRes {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<ImageRes> for String {
    fn from(res: ImageRes) -> Self {
        res.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named() {
        assert_eq!(ImageRes::parse("wifi"), ImageRes::Named("wifi".to_string()));
        assert_eq!(
            ImageRes::parse("caret-right"),
            ImageRes::Named("caret-right".to_string())
        );
    }

    #[test]
    fn test_parse_paths() {
        assert_eq!(
            ImageRes::parse("/usr/share/pixmaps/logo.png"),
            ImageRes::File(PathBuf::from("/usr/share/pixmaps/logo.png"))
        );
        assert_eq!(
            ImageRes::parse("banner.SVG"),
            ImageRes::File(PathBuf::from("banner.SVG"))
        );
    }
}
