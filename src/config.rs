use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub html: HtmlConfig,
    pub page: PageConfig,
    pub layout: LayoutConfig,
}

/// CSS classes attached to rendered HTML elements. Unset means no attribute.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct HtmlConfig {
    pub h2_class: Option<String>,
    pub h3_class: Option<String>,
    pub paragraph_class: Option<String>,
    pub list_class: Option<String>,
    pub list_item_class: Option<String>,
    pub code_block_class: Option<String>,
    pub inline_code_class: Option<String>,
    pub bold_class: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct PageConfig {
    pub numbers: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Keep each heading on the same page as the block after it.
    pub keep_heading_with_next: bool,
    /// Lists with at most this many items are never split across pages.
    pub unbreakable_list_max_items: usize,
    pub unbreakable_code: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            keep_heading_with_next: true,
            unbreakable_list_max_items: 5,
            unbreakable_code: true,
        }
    }
}

impl Config {
    /// Parse config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load config from a TOML file, or return defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        Self::from_toml(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.layout.keep_heading_with_next);
        assert_eq!(config.layout.unbreakable_list_max_items, 5);
    }

    #[test]
    fn partial_sections() {
        let config = Config::from_toml(
            "[html]\nh2_class = \"title\"\n\n[page]\nnumbers = true\n\n[layout]\nunbreakable_list_max_items = 2\n",
        )
        .unwrap();
        assert_eq!(config.html.h2_class.as_deref(), Some("title"));
        assert_eq!(config.html.h3_class, None);
        assert!(config.page.numbers);
        assert_eq!(config.layout.unbreakable_list_max_items, 2);
        assert!(config.layout.unbreakable_code);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let config = Config::load(Path::new("does/not/exist/postdoc.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Config::from_toml("[page]\nnumbers = \"yes\"").is_err());
    }
}
