//! Configuration schema for netrec.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Dataset location used when neither `dataset.path` nor `dataset.url` is set.
pub const DEFAULT_DATASET_PATH: &str = "data/networking_data.json";
/// Default heading shown by the terminal UI.
pub const DEFAULT_TITLE: &str = "Networking Recommendations";
/// Default placeholder shown in an empty search box.
pub const DEFAULT_PLACEHOLDER: &str = "Enter a name...";

/// File extensions read through the spreadsheet source.
const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Root config for netrec.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct NetrecConfig {
    #[serde(default, rename = "$schema")]
    pub schema: Option<String>,
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl NetrecConfig {
    /// Start building a config programmatically with defaults applied.
    pub fn builder() -> NetrecConfigBuilder {
        NetrecConfigBuilder::new()
    }
}

/// Builder for assembling a `NetrecConfig` in code.
#[derive(Debug, Default, Clone)]
pub struct NetrecConfigBuilder {
    config: NetrecConfig,
}

impl NetrecConfigBuilder {
    /// Create a new builder seeded with default config values.
    pub fn new() -> Self {
        Self {
            config: NetrecConfig::default(),
        }
    }

    /// Read the dataset from a local file.
    pub fn dataset_path(mut self, path: impl Into<String>) -> Self {
        self.config.dataset.path = Some(path.into());
        self.config.dataset.url = None;
        self
    }

    /// Read the dataset from an HTTP(S) URL.
    pub fn dataset_url(mut self, url: impl Into<String>) -> Self {
        self.config.dataset.url = Some(url.into());
        self.config.dataset.path = None;
        self
    }

    /// Force the dataset format instead of inferring it from the location.
    pub fn dataset_format(mut self, format: DatasetFormat) -> Self {
        self.config.dataset.format = Some(format);
        self
    }

    /// Replace the UI labels.
    pub fn ui(mut self, ui: UiConfig) -> Self {
        self.config.ui = ui;
        self
    }

    /// Finish building the config.
    pub fn build(self) -> NetrecConfig {
        self.config
    }
}

/// Shape of the dataset resource.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DatasetFormat {
    /// A JSON array of row objects.
    Json,
    /// A workbook; only the first sheet is read.
    #[serde(alias = "xlsx")]
    Spreadsheet,
}

impl DatasetFormat {
    /// Guess the format from a path or URL by its extension.
    pub fn infer(location: &str) -> Self {
        let trimmed = location
            .split(['?', '#'])
            .next()
            .unwrap_or(location);
        let extension = Path::new(trimmed)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        match extension {
            Some(ext) if SPREADSHEET_EXTENSIONS.contains(&ext.as_str()) => Self::Spreadsheet,
            _ => Self::Json,
        }
    }
}

/// Where the dataset lives and how to parse it.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DatasetConfig {
    /// Local file path.
    #[serde(default)]
    pub path: Option<String>,
    /// HTTP(S) URL fetched once at startup.
    #[serde(default)]
    pub url: Option<String>,
    /// Explicit format; inferred from the location when absent.
    #[serde(default)]
    pub format: Option<DatasetFormat>,
}

impl DatasetConfig {
    /// Effective location, preferring the URL when one is configured.
    pub fn location(&self) -> &str {
        self.url
            .as_deref()
            .or(self.path.as_deref())
            .unwrap_or(DEFAULT_DATASET_PATH)
    }

    /// Whether the effective location is remote.
    pub fn is_remote(&self) -> bool {
        self.url.is_some()
    }

    /// Effective format for the configured location.
    pub fn resolved_format(&self) -> DatasetFormat {
        self.format
            .unwrap_or_else(|| DatasetFormat::infer(self.location()))
    }

    /// Point the dataset at a new location, treating `http://` and
    /// `https://` prefixes as URLs.
    pub fn set_location(&mut self, location: impl Into<String>) {
        let location = location.into();
        if location.starts_with("http://") || location.starts_with("https://") {
            self.url = Some(location);
            self.path = None;
        } else {
            self.path = Some(location);
            self.url = None;
        }
    }
}

/// Labels shown by the terminal UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            placeholder: default_placeholder(),
        }
    }
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn infers_spreadsheet_from_extension() {
        assert_eq!(
            DatasetFormat::infer("networking_recommendations2.xlsx"),
            DatasetFormat::Spreadsheet
        );
        assert_eq!(
            DatasetFormat::infer("https://host/data/book.XLS?dl=1"),
            DatasetFormat::Spreadsheet
        );
        assert_eq!(
            DatasetFormat::infer("/data/networking_data.json"),
            DatasetFormat::Json
        );
        assert_eq!(DatasetFormat::infer("no-extension"), DatasetFormat::Json);
    }

    #[test]
    fn location_defaults_to_bundled_json_path() {
        let config = DatasetConfig::default();
        assert_eq!(config.location(), DEFAULT_DATASET_PATH);
        assert_eq!(config.resolved_format(), DatasetFormat::Json);
        assert!(!config.is_remote());
    }

    #[test]
    fn set_location_switches_between_path_and_url() {
        let mut config = DatasetConfig::default();
        config.set_location("https://example.com/networking_data.json");
        assert_eq!(config.path, None);
        assert!(config.is_remote());

        config.set_location("book.xlsx");
        assert_eq!(config.url, None);
        assert_eq!(config.location(), "book.xlsx");
        assert_eq!(config.resolved_format(), DatasetFormat::Spreadsheet);
    }

    #[test]
    fn explicit_format_wins_over_extension() {
        let config = NetrecConfig::builder()
            .dataset_path("export.dat")
            .dataset_format(DatasetFormat::Spreadsheet)
            .build();
        assert_eq!(config.dataset.resolved_format(), DatasetFormat::Spreadsheet);
    }
}
