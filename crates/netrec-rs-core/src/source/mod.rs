//! Record sources: where a dataset comes from and how it is parsed.
//!
//! Both the JSON export and the spreadsheet are normalized into the same
//! row-object shape before decoding, so callers never see which one was used.

mod json;
mod location;
pub mod spreadsheet;

pub use json::JsonSource;
pub use location::ResourceLocation;
pub use spreadsheet::SpreadsheetSource;

use crate::LoadError;
use crate::record::Dataset;
use async_trait::async_trait;
use log::debug;
use netrec_rs_config::{DatasetConfig, DatasetFormat};
use std::sync::Arc;

/// Capability that yields an ordered dataset.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Short human label used in advisories ("JSON file", "Spreadsheet").
    fn label(&self) -> &str;

    /// Where the data is read from, for logs and the UI header.
    fn describe(&self) -> String;

    /// Read and parse the whole dataset once.
    async fn fetch(&self) -> Result<Dataset, LoadError>;
}

/// Build the source selected by the dataset config.
pub fn source_from_config(config: &DatasetConfig) -> Arc<dyn RecordSource> {
    let location = ResourceLocation::parse(config.location());
    let format = config.resolved_format();
    debug!(
        "selected record source (format={:?}, location={}, remote={})",
        format,
        location,
        config.is_remote()
    );
    match format {
        DatasetFormat::Json => Arc::new(JsonSource::new(location)),
        DatasetFormat::Spreadsheet => Arc::new(SpreadsheetSource::new(location)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netrec_rs_config::NetrecConfig;
    use pretty_assertions::assert_eq;

    #[test]
    fn config_selects_spreadsheet_by_extension() {
        let config = NetrecConfig::builder()
            .dataset_path("networking_recommendations2.xlsx")
            .build();
        let source = source_from_config(&config.dataset);
        assert_eq!(source.label(), "Spreadsheet");
        assert_eq!(
            source.describe(),
            "spreadsheet networking_recommendations2.xlsx"
        );
    }

    #[test]
    fn config_defaults_to_json_file() {
        let source = source_from_config(&NetrecConfig::default().dataset);
        assert_eq!(source.label(), "JSON file");
    }

    #[test]
    fn explicit_format_overrides_url_extension() {
        let config = NetrecConfig::builder()
            .dataset_url("https://example.com/export")
            .dataset_format(DatasetFormat::Spreadsheet)
            .build();
        let source = source_from_config(&config.dataset);
        assert_eq!(source.describe(), "spreadsheet https://example.com/export");
    }

    #[test]
    fn url_config_selects_remote_json_source() {
        let config = NetrecConfig::builder()
            .dataset_url("https://example.com/data/networking_data.json")
            .build();
        assert!(config.dataset.is_remote());
        let source = source_from_config(&config.dataset);
        assert_eq!(source.label(), "JSON file");
        assert_eq!(
            source.describe(),
            "json https://example.com/data/networking_data.json"
        );
    }
}
