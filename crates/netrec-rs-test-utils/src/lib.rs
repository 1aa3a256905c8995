//! Test helpers shared across netrec crates.

pub mod records;
pub mod source;
pub mod workbook;

pub use records::{emily_dataset, overlapping_dataset};
pub use source::{FailingSource, StubSource};
pub use workbook::workbook_bytes;
