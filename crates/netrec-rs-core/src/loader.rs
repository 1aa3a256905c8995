//! One-shot dataset loading with fallback to sample data.

use crate::fallback;
use crate::record::Dataset;
use crate::source::RecordSource;
use log::{info, warn};
use std::sync::Arc;

/// Where the session's dataset came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetOrigin {
    /// The configured resource was read and parsed.
    Primary,
    /// The configured resource failed; embedded samples are in use.
    Fallback,
}

/// Result of [`DatasetLoader::load`]; always carries a usable dataset.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub dataset: Arc<Dataset>,
    pub origin: DatasetOrigin,
    /// User-visible note, set only when fallback data is in use.
    pub advisory: Option<String>,
    /// Description of the configured source.
    pub source: String,
}

impl LoadOutcome {
    pub fn is_fallback(&self) -> bool {
        self.origin == DatasetOrigin::Fallback
    }
}

/// Loads the session dataset from a record source.
#[derive(Clone)]
pub struct DatasetLoader {
    source: Arc<dyn RecordSource>,
    fallback: Arc<Dataset>,
}

impl DatasetLoader {
    /// Create a loader that falls back to the embedded sample dataset.
    pub fn new(source: Arc<dyn RecordSource>) -> Self {
        Self {
            source,
            fallback: Arc::new(fallback::sample_dataset()),
        }
    }

    /// Replace the fallback dataset.
    pub fn with_fallback(mut self, fallback: Dataset) -> Self {
        self.fallback = Arc::new(fallback);
        self
    }

    /// Description of the underlying source.
    pub fn describe(&self) -> String {
        self.source.describe()
    }

    /// Read the source once. Any failure is logged and replaced by the
    /// fallback dataset plus an advisory; this never returns an error.
    pub async fn load(&self) -> LoadOutcome {
        let source = self.source.describe();
        info!("loading dataset (source={})", source);
        match self.source.fetch().await {
            Ok(dataset) => {
                if dataset.is_empty() {
                    warn!("dataset loaded but contains no records (source={})", source);
                }
                info!(
                    "dataset loaded (source={}, records={})",
                    source,
                    dataset.len()
                );
                LoadOutcome {
                    dataset: Arc::new(dataset),
                    origin: DatasetOrigin::Primary,
                    advisory: None,
                    source,
                }
            }
            Err(err) => {
                warn!("error loading data (source={}): {}", source, err);
                LoadOutcome {
                    dataset: self.fallback.clone(),
                    origin: DatasetOrigin::Fallback,
                    advisory: Some(format!(
                        "Using sample data. {} could not be loaded.",
                        self.source.label()
                    )),
                    source,
                }
            }
        }
    }
}
