//! Spreadsheet source: the first sheet of a workbook, header row first.

use super::{RecordSource, ResourceLocation};
use crate::LoadError;
use crate::record::{Dataset, FULL_NAME};
use async_trait::async_trait;
use calamine::{Data, Reader, open_workbook_auto_from_rs};
use log::{debug, warn};
use reqwest::Client;
use serde_json::{Map, Number, Value};
use std::collections::HashSet;
use std::io::Cursor;

/// Reads records from the first worksheet of an xlsx/xls/xlsb/ods workbook.
#[derive(Debug, Clone)]
pub struct SpreadsheetSource {
    location: ResourceLocation,
    client: Client,
}

impl SpreadsheetSource {
    pub fn new(location: ResourceLocation) -> Self {
        Self {
            location,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl RecordSource for SpreadsheetSource {
    fn label(&self) -> &str {
        "Spreadsheet"
    }

    fn describe(&self) -> String {
        format!("spreadsheet {}", self.location)
    }

    async fn fetch(&self) -> Result<Dataset, LoadError> {
        let bytes = self.location.read(&self.client).await?;
        let dataset = parse_dataset(&bytes)?;
        debug!(
            "parsed spreadsheet dataset (location={}, records={})",
            self.location,
            dataset.len()
        );
        Ok(dataset)
    }
}

/// Decode workbook bytes into records.
pub fn parse_dataset(bytes: &[u8]) -> Result<Dataset, LoadError> {
    let rows = sheet_rows(bytes)?;
    Ok(Dataset::from_rows(rows.into_iter().map(Value::Object).collect())?)
}

/// Turn the first sheet into row objects keyed by the header row.
///
/// Empty cells are omitted, rows without any value are dropped, columns with a
/// blank header are ignored, and a repeated header keeps its first column.
pub fn sheet_rows(bytes: &[u8]) -> Result<Vec<Map<String, Value>>, LoadError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(LoadError::EmptyWorkbook)??;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        debug!("first sheet is empty");
        return Ok(Vec::new());
    };

    let mut seen = HashSet::new();
    let headers: Vec<Option<String>> = header_row
        .iter()
        .map(|cell| header_text(cell).filter(|name| seen.insert(name.clone())))
        .collect();
    if !seen.contains(FULL_NAME) {
        warn!("sheet header has no '{FULL_NAME}' column; no record will match");
    }

    let objects: Vec<Map<String, Value>> = rows
        .filter_map(|row| {
            let object: Map<String, Value> = headers
                .iter()
                .zip(row)
                .filter_map(|(header, cell)| Some((header.clone()?, cell_value(cell)?)))
                .collect();
            (!object.is_empty()).then_some(object)
        })
        .collect();
    debug!(
        "read sheet rows (columns={}, rows={})",
        seen.len(),
        objects.len()
    );
    Ok(objects)
}

fn header_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(text) if text.is_empty() => None,
        Data::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

fn cell_value(cell: &Data) -> Option<Value> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(text) if text.is_empty() => None,
        Data::String(text) => Some(Value::String(text.clone())),
        Data::Int(int) => Some(Value::from(*int)),
        Data::Float(float) => Number::from_f64(*float).map(Value::Number),
        Data::Bool(flag) => Some(Value::Bool(*flag)),
        other => Some(Value::String(other.to_string())),
    }
}
