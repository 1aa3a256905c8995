//! Case-insensitive partial-name lookup over a dataset.

use crate::record::{Dataset, Record};
use serde::Serialize;
use std::fmt;

/// Message shown when a non-empty query matches nobody.
pub const NO_MATCH_MESSAGE: &str = "No matches found. Please try another name.";

/// Return the first record whose full name contains `query`.
///
/// The query is trimmed and compared case-insensitively. An empty query never
/// matches, and records without a full name are skipped. Dataset order breaks
/// ties: the earliest containing record wins, regardless of match quality.
pub fn find<'a>(dataset: &'a Dataset, query: &str) -> Option<&'a Record> {
    let needle = normalize_query(query)?;
    dataset.iter().find(|record| record.name_contains(&needle))
}

/// Trim and lowercase a query; `None` when nothing is left to search for.
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// One recommended peer and why.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub name: String,
    pub rationale: String,
}

/// The matched person and both recommendation slots, in slot order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationResult {
    pub name: String,
    pub recommendations: [Recommendation; 2],
}

impl RecommendationResult {
    /// Project a record into its display form.
    ///
    /// Missing fields become empty strings; both slots are always present.
    pub fn from_record(record: &Record) -> Self {
        let text = |field: &Option<String>| field.clone().unwrap_or_default();
        Self {
            name: text(&record.full_name),
            recommendations: [
                Recommendation {
                    name: text(&record.recommended_name_1),
                    rationale: text(&record.rationale_1),
                },
                Recommendation {
                    name: text(&record.recommended_name_2),
                    rationale: text(&record.rationale_2),
                },
            ],
        }
    }

    /// Look up `query` and project the match, if any.
    pub fn search(dataset: &Dataset, query: &str) -> Option<Self> {
        find(dataset, query).map(Self::from_record)
    }
}

impl fmt::Display for RecommendationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Recommendations for {}", self.name)?;
        for (idx, recommendation) in self.recommendations.iter().enumerate() {
            write!(f, "\n\n{}. {}", idx + 1, recommendation.name)?;
            if !recommendation.rationale.is_empty() {
                write!(f, "\n   {}", recommendation.rationale)?;
            }
        }
        Ok(())
    }
}
