//! JSON export source: a root array of row objects.

use super::{RecordSource, ResourceLocation};
use crate::LoadError;
use crate::record::Dataset;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;

/// Reads the JSON export produced by `netrec convert` (or any array of
/// objects keyed by the source column names).
#[derive(Debug, Clone)]
pub struct JsonSource {
    location: ResourceLocation,
    client: Client,
}

impl JsonSource {
    pub fn new(location: ResourceLocation) -> Self {
        Self {
            location,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl RecordSource for JsonSource {
    fn label(&self) -> &str {
        "JSON file"
    }

    fn describe(&self) -> String {
        format!("json {}", self.location)
    }

    async fn fetch(&self) -> Result<Dataset, LoadError> {
        let bytes = self.location.read(&self.client).await?;
        let dataset = Dataset::from_json_slice(&bytes)?;
        debug!(
            "parsed json dataset (location={}, records={})",
            self.location,
            dataset.len()
        );
        Ok(dataset)
    }
}
