// ABOUTME: Threshold classification of metric values into health categories
// ABOUTME: Ascending half-open bands from the metric descriptor, first match wins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitals Engine Contributors

//! # Classifier
//!
//! Blood sugar has no bands and is surfaced unclassified.

use chrono::NaiveDate;
use serde::Serialize;
use vitals_core::models::{Category, MetricKind, MetricRecord};

/// A charted point with its label
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassifiedPoint {
    /// Day of the reading
    pub day: NaiveDate,
    /// Display value (BMI for BMI records, primary value otherwise)
    pub value: f64,
    /// Category, `None` for unclassified metrics
    pub category: Option<Category>,
}

/// Classify a value for a metric
///
/// Bands are evaluated top-down and the last band is open-ended, so every
/// classified metric yields a category.
#[must_use]
pub fn classify(kind: MetricKind, value: f64) -> Option<Category> {
    let bands = kind.descriptor().bands?;
    bands
        .iter()
        .find(|band| band.admits(value))
        .map(|band| band.category)
}

/// Classify a record's display value
#[must_use]
pub fn classify_record(record: &MetricRecord) -> Option<Category> {
    classify(record.kind(), record.display_value())
}

/// Classify every record of a series
#[must_use]
pub fn classify_series(records: &[MetricRecord]) -> Vec<ClassifiedPoint> {
    records
        .iter()
        .map(|record| ClassifiedPoint {
            day: record.day(),
            value: record.display_value(),
            category: classify_record(record),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nan_lands_in_open_band() {
        assert_eq!(
            classify(MetricKind::BloodLipids, f64::NAN),
            Some(Category::High)
        );
    }

    #[test]
    fn test_blood_sugar_is_unclassified() {
        assert_eq!(classify(MetricKind::BloodSugar, 12.0), None);
    }
}
