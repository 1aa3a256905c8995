//! Person records and the ordered dataset they live in.

use crate::lookup;
use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Source column used as the lookup key.
pub const FULL_NAME: &str = "Full Name";

/// One person plus their two precomputed recommendations.
///
/// Every field is optional because rows come from hand-edited spreadsheets;
/// a record without a full name simply never matches a lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(
        rename = "First Name",
        default,
        deserialize_with = "cell_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub first_name: Option<String>,
    #[serde(
        rename = "Last Name",
        default,
        deserialize_with = "cell_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_name: Option<String>,
    #[serde(
        rename = "Full Name",
        default,
        deserialize_with = "cell_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub full_name: Option<String>,
    #[serde(
        rename = "email",
        default,
        deserialize_with = "cell_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<String>,
    #[serde(
        rename = "recommended_name_1",
        default,
        deserialize_with = "cell_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub recommended_name_1: Option<String>,
    #[serde(
        rename = "rationale_1",
        default,
        deserialize_with = "cell_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub rationale_1: Option<String>,
    #[serde(
        rename = "recommended_name_2",
        default,
        deserialize_with = "cell_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub recommended_name_2: Option<String>,
    #[serde(
        rename = "rationale_2",
        default,
        deserialize_with = "cell_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub rationale_2: Option<String>,
}

impl Record {
    /// Build a record from a full name, splitting first/last on the first space.
    pub fn named(full_name: impl Into<String>) -> Self {
        let full_name = full_name.into();
        let (first, last) = match full_name.split_once(' ') {
            Some((first, last)) => (Some(first.to_string()), Some(last.to_string())),
            None => (Some(full_name.clone()), None),
        };
        Self {
            first_name: first,
            last_name: last,
            full_name: Some(full_name),
            ..Self::default()
        }
    }

    /// Set the contact address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the first recommendation slot.
    pub fn with_first(mut self, name: impl Into<String>, rationale: impl Into<String>) -> Self {
        self.recommended_name_1 = Some(name.into());
        self.rationale_1 = Some(rationale.into());
        self
    }

    /// Set the second recommendation slot.
    pub fn with_second(mut self, name: impl Into<String>, rationale: impl Into<String>) -> Self {
        self.recommended_name_2 = Some(name.into());
        self.rationale_2 = Some(rationale.into());
        self
    }

    /// Whether the full name contains an already-lowercased needle.
    pub(crate) fn name_contains(&self, needle: &str) -> bool {
        self.full_name
            .as_deref()
            .is_some_and(|name| name.to_lowercase().contains(needle))
    }
}

/// Ordered, read-only collection of records for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Wrap records, keeping their order.
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Parse a JSON array of row objects.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Decode row objects that have already been normalized to JSON values.
    pub fn from_rows(rows: Vec<Value>) -> Result<Self, serde_json::Error> {
        serde_json::from_value(Value::Array(rows))
    }

    /// Records in source order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Iterate records in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record whose full name contains `query`, ignoring case.
    pub fn find(&self, query: &str) -> Option<&Record> {
        lookup::find(self, query)
    }
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Accept any scalar cell as text; integral numbers drop their fraction.
///
/// Arrays and objects are dropped with a warning so one malformed cell only
/// blanks that field instead of rejecting the whole export.
fn cell_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Bool(flag)) => Ok(Some(flag.to_string())),
        Some(Value::Number(number)) => Ok(Some(number_text(&number))),
        Some(other) => {
            warn!("ignoring non-scalar cell value: {other}");
            Ok(None)
        }
    }
}

fn number_text(number: &serde_json::Number) -> String {
    if let Some(int) = number.as_i64() {
        return int.to_string();
    }
    match number.as_f64() {
        Some(float) if float.fract() == 0.0 && float.abs() < 1e15 => format!("{float:.0}"),
        _ => number.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn decodes_exact_column_names() {
        let record: Record = serde_json::from_value(json!({
            "First Name": "Emily",
            "Last Name": "Daly",
            "Full Name": "Emily Daly",
            "email": "eagostino@gmail.com",
            "recommended_name_1": "Jennifer Cogliano",
            "rationale_1": "shared cluster",
            "recommended_name_2": "Rashmi Kapur",
            "rationale_2": "shared cluster 2",
        }))
        .expect("record");
        assert_eq!(
            record,
            Record::named("Emily Daly")
                .with_email("eagostino@gmail.com")
                .with_first("Jennifer Cogliano", "shared cluster")
                .with_second("Rashmi Kapur", "shared cluster 2")
        );
    }

    #[test]
    fn column_names_are_case_sensitive() {
        let record: Record =
            serde_json::from_value(json!({ "full name": "Emily Daly" })).expect("record");
        assert_eq!(record.full_name, None);
    }

    #[test]
    fn numeric_and_null_cells_become_text_or_absent() {
        let record: Record = serde_json::from_value(json!({
            "Full Name": 42.0,
            "email": null,
            "rationale_1": 1.5,
            "rationale_2": true,
        }))
        .expect("record");
        assert_eq!(record.full_name.as_deref(), Some("42"));
        assert_eq!(record.email, None);
        assert_eq!(record.rationale_1.as_deref(), Some("1.5"));
        assert_eq!(record.rationale_2.as_deref(), Some("true"));
    }

    #[test]
    fn nested_values_blank_only_their_field() {
        let record: Record = serde_json::from_value(json!({
            "Full Name": ["Emily"],
            "email": { "work": "eagostino@gmail.com" },
            "recommended_name_1": "Jennifer Cogliano",
        }))
        .expect("record");
        assert_eq!(record.full_name, None);
        assert_eq!(record.email, None);
        assert_eq!(record.recommended_name_1.as_deref(), Some("Jennifer Cogliano"));
    }

    #[test]
    fn malformed_cell_keeps_the_other_rows() {
        let dataset = Dataset::from_json_slice(
            br#"[
                {"Full Name":"Emily Daly","rationale_1":{"nested":true}},
                {"Full Name":"Matt Landers","recommended_name_1":"Rob Winikates"}
            ]"#,
        )
        .expect("dataset");
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[0].full_name.as_deref(), Some("Emily Daly"));
        assert_eq!(dataset.records()[0].rationale_1, None);
        assert_eq!(
            dataset.find("landers").and_then(|r| r.recommended_name_1.as_deref()),
            Some("Rob Winikates")
        );
    }

    #[test]
    fn dataset_keeps_row_order_and_skips_unknown_columns() {
        let dataset = Dataset::from_json_slice(
            br#"[{"Full Name":"B","cluster":7},{"Full Name":"A"}]"#,
        )
        .expect("dataset");
        let names: Vec<_> = dataset
            .iter()
            .map(|record| record.full_name.as_deref().unwrap_or_default())
            .collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn dataset_requires_root_array() {
        assert!(Dataset::from_json_slice(br#"{"Full Name":"Emily"}"#).is_err());
    }

    #[test]
    fn serializes_back_with_source_column_names() {
        let value = serde_json::to_value(Record::named("Matt Landers")).expect("json");
        assert_eq!(
            value,
            json!({ "First Name": "Matt", "Last Name": "Landers", "Full Name": "Matt Landers" })
        );
    }
}
