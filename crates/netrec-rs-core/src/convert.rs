//! Offline conversion of a workbook into the JSON export read by [`JsonSource`].
//!
//! [`JsonSource`]: crate::JsonSource

use crate::LoadError;
use crate::source::spreadsheet::sheet_rows;
use log::info;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Convert the first sheet of `input` into a pretty-printed JSON array at
/// `output`, creating parent directories. Every column is kept, not just the
/// ones a record uses. Returns the number of rows written.
pub fn spreadsheet_to_json(input: &Path, output: &Path) -> Result<usize, LoadError> {
    let bytes = fs::read(input).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => LoadError::Missing(input.display().to_string()),
        _ => LoadError::Io(err),
    })?;
    let rows = sheet_rows(&bytes)?;
    let count = rows.len();

    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let array = Value::Array(rows.into_iter().map(Value::Object).collect());
    fs::write(output, serde_json::to_string_pretty(&array)?)?;
    info!(
        "conversion complete (input={}, output={}, rows={})",
        input.display(),
        output.display(),
        count
    );
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Dataset;
    use pretty_assertions::assert_eq;
    use rust_xlsxwriter::Workbook;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn writes_all_columns_and_round_trips_into_records() {
        let temp = tempdir().expect("tempdir");
        let input = temp.path().join("networking_recommendations.xlsx");
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        for (col, header) in ["Full Name", "cluster", "recommended_name_1"].iter().enumerate() {
            sheet.write_string(0, col as u16, *header).expect("header");
        }
        sheet.write_string(1, 0, "Emily Daly").expect("cell");
        sheet.write_number(1, 1, 3.0).expect("cell");
        sheet.write_string(1, 2, "Jennifer Cogliano").expect("cell");
        workbook.save(&input).expect("save");

        let output = temp.path().join("public/data/networking_data.json");
        let rows = spreadsheet_to_json(&input, &output).expect("convert");
        assert_eq!(rows, 1);

        let written = fs::read(&output).expect("output");
        let value: Value = serde_json::from_slice(&written).expect("json");
        assert_eq!(
            value,
            json!([{ "Full Name": "Emily Daly", "cluster": 3.0, "recommended_name_1": "Jennifer Cogliano" }])
        );
        let dataset = Dataset::from_json_slice(&written).expect("dataset");
        assert_eq!(
            dataset.records()[0].recommended_name_1.as_deref(),
            Some("Jennifer Cogliano")
        );
    }

    #[test]
    fn missing_input_is_reported() {
        let temp = tempdir().expect("tempdir");
        let err = spreadsheet_to_json(&temp.path().join("absent.xlsx"), &temp.path().join("out.json"))
            .expect_err("missing");
        assert!(matches!(err, LoadError::Missing(_)));
    }
}
