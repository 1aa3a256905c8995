use async_trait::async_trait;
use netrec_rs_core::{Dataset, LoadError, RecordSource};
use parking_lot::Mutex;

/// Source that returns a fixed dataset and counts fetches.
pub struct StubSource {
    dataset: Dataset,
    fetches: Mutex<usize>,
}

impl StubSource {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            fetches: Mutex::new(0),
        }
    }

    pub fn fetches(&self) -> usize {
        *self.fetches.lock()
    }
}

#[async_trait]
impl RecordSource for StubSource {
    fn label(&self) -> &str {
        "Stub"
    }

    fn describe(&self) -> String {
        "stub".to_string()
    }

    async fn fetch(&self) -> Result<Dataset, LoadError> {
        *self.fetches.lock() += 1;
        Ok(self.dataset.clone())
    }
}

/// Source whose resource is always missing.
#[derive(Debug, Default)]
pub struct FailingSource;

#[async_trait]
impl RecordSource for FailingSource {
    fn label(&self) -> &str {
        "JSON file"
    }

    fn describe(&self) -> String {
        "json missing.json".to_string()
    }

    async fn fetch(&self) -> Result<Dataset, LoadError> {
        Err(LoadError::Missing("missing.json".to_string()))
    }
}
