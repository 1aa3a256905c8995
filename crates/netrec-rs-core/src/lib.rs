//! Record model, dataset loading, and lookup for netrec.
//!
//! The loader reads one configured resource (JSON or spreadsheet, by path or
//! URL) and falls back to an embedded sample dataset when that fails. The
//! lookup engine answers "first record whose full name contains the query".

pub mod convert;
mod error;
pub mod fallback;
pub mod loader;
pub mod lookup;
pub mod record;
pub mod source;

pub use error::LoadError;
pub use loader::{DatasetLoader, DatasetOrigin, LoadOutcome};
pub use lookup::{Recommendation, RecommendationResult, find};
pub use record::{Dataset, Record};
pub use source::{JsonSource, RecordSource, ResourceLocation, SpreadsheetSource, source_from_config};
