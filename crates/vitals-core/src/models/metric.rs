// ABOUTME: Metric kinds, merge policies, and the MetricRecord reading type
// ABOUTME: Records recompute their derived value at construction and are never partially mutated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitals Engine Contributors

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The four tracked metric families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Body-mass index (weight + height)
    Bmi,
    /// Blood pressure
    BloodPressure,
    /// Blood sugar
    BloodSugar,
    /// Blood lipids
    BloodLipids,
}

impl MetricKind {
    /// Every metric kind, in display order
    pub const ALL: [Self; 4] = [
        Self::Bmi,
        Self::BloodPressure,
        Self::BloodSugar,
        Self::BloodLipids,
    ];

    /// Stable snake-case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bmi => "bmi",
            Self::BloodPressure => "blood_pressure",
            Self::BloodSugar => "blood_sugar",
            Self::BloodLipids => "blood_lipids",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rule deciding which of two same-day records survives an upsert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergePolicy {
    /// Incoming replaces existing only with a strictly later capture timestamp
    TimestampWins,
    /// The most recently applied record always replaces the existing one
    LastWriteWins,
}

impl MergePolicy {
    /// Whether `incoming` should replace `existing` in its day slot
    #[must_use]
    pub fn incoming_wins(self, existing: &MetricRecord, incoming: &MetricRecord) -> bool {
        match self {
            Self::TimestampWins => incoming.captured_at > existing.captured_at,
            Self::LastWriteWins => true,
        }
    }
}

/// A single health-metric reading
///
/// Fields are read-only: `derived_value` is always recomputed from the
/// primary and secondary values, so a record can only be rebuilt, not edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RecordFields")]
pub struct MetricRecord {
    id: String,
    kind: MetricKind,
    recorded_at: NaiveDateTime,
    primary_value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    secondary_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    derived_value: Option<f64>,
    captured_at: DateTime<Utc>,
}

/// Serialized shape accepted on deserialization; `derived_value` is ignored
/// and recomputed.
#[derive(Deserialize)]
struct RecordFields {
    id: String,
    kind: MetricKind,
    recorded_at: NaiveDateTime,
    primary_value: f64,
    #[serde(default)]
    secondary_value: Option<f64>,
    captured_at: DateTime<Utc>,
}

impl From<RecordFields> for MetricRecord {
    fn from(fields: RecordFields) -> Self {
        Self::from_parts(
            fields.id,
            fields.kind,
            fields.recorded_at,
            fields.primary_value,
            fields.secondary_value,
            fields.captured_at,
        )
    }
}

impl MetricRecord {
    /// Build a record from all of its inputs, computing the derived value
    #[must_use]
    pub fn from_parts(
        id: impl Into<String>,
        kind: MetricKind,
        recorded_at: NaiveDateTime,
        primary_value: f64,
        secondary_value: Option<f64>,
        captured_at: DateTime<Utc>,
    ) -> Self {
        let derived_value = kind.descriptor().derive_value(primary_value, secondary_value);
        Self {
            id: id.into(),
            kind,
            recorded_at,
            primary_value,
            secondary_value,
            derived_value,
            captured_at,
        }
    }

    /// A fresh local reading: new id, captured now
    #[must_use]
    pub fn new_reading(
        kind: MetricKind,
        recorded_at: NaiveDateTime,
        primary_value: f64,
        secondary_value: Option<f64>,
    ) -> Self {
        Self::from_parts(
            Uuid::new_v4().to_string(),
            kind,
            recorded_at,
            primary_value,
            secondary_value,
            Utc::now(),
        )
    }

    /// Same identity and capture instant with different measurement inputs
    #[must_use]
    pub fn with_values(
        &self,
        recorded_at: NaiveDateTime,
        primary_value: f64,
        secondary_value: Option<f64>,
    ) -> Self {
        Self::from_parts(
            self.id.clone(),
            self.kind,
            recorded_at,
            primary_value,
            secondary_value,
            self.captured_at,
        )
    }

    /// Record identifier (backend-supplied or locally generated)
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Metric family of this record
    #[must_use]
    pub const fn kind(&self) -> MetricKind {
        self.kind
    }

    /// Measurement date and time as delivered (midnight for day-only formats)
    #[must_use]
    pub const fn recorded_at(&self) -> NaiveDateTime {
        self.recorded_at
    }

    /// Calendar day used for same-day comparison
    #[must_use]
    pub fn day(&self) -> NaiveDate {
        self.recorded_at.date()
    }

    /// Measured quantity (weight, pressure, sugar or lipid level)
    #[must_use]
    pub const fn primary_value(&self) -> f64 {
        self.primary_value
    }

    /// Secondary input (BMI height in centimeters)
    #[must_use]
    pub const fn secondary_value(&self) -> Option<f64> {
        self.secondary_value
    }

    /// Value computed from primary and secondary inputs (BMI)
    #[must_use]
    pub const fn derived_value(&self) -> Option<f64> {
        self.derived_value
    }

    /// Instant the reading was produced; merge tie-break under `TimestampWins`
    #[must_use]
    pub const fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    /// The value charted and classified: derived when present, else primary
    #[must_use]
    pub fn display_value(&self) -> f64 {
        self.derived_value.unwrap_or(self.primary_value)
    }

    /// Whether both records fall on the same calendar day
    #[must_use]
    pub fn same_day(&self, other: &Self) -> bool {
        self.day() == other.day()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn at(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap()
    }

    #[test]
    fn test_bmi_record_derives_value() {
        let record = MetricRecord::new_reading(MetricKind::Bmi, at(1), 72.25, Some(170.0));
        let bmi = record.derived_value().unwrap();
        assert!((bmi - 25.0).abs() < 1e-9, "got {bmi}");
        assert!((record.display_value() - bmi).abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_bmi_record_has_no_derived_value() {
        let record = MetricRecord::new_reading(MetricKind::BloodSugar, at(1), 5.4, None);
        assert_eq!(record.derived_value(), None);
        assert!((record.display_value() - 5.4).abs() < f64::EPSILON);
    }

    #[test]
    fn test_timestamp_wins_requires_strictly_later_capture() {
        let existing = MetricRecord::new_reading(MetricKind::Bmi, at(1), 70.0, Some(170.0));
        let same_instant = MetricRecord::from_parts(
            "other",
            MetricKind::Bmi,
            at(1),
            72.0,
            Some(170.0),
            existing.captured_at(),
        );
        let later = MetricRecord::from_parts(
            "later",
            MetricKind::Bmi,
            at(1),
            72.0,
            Some(170.0),
            existing.captured_at() + Duration::seconds(1),
        );

        assert!(!MergePolicy::TimestampWins.incoming_wins(&existing, &same_instant));
        assert!(MergePolicy::TimestampWins.incoming_wins(&existing, &later));
        assert!(MergePolicy::LastWriteWins.incoming_wins(&later, &existing));
    }

    #[test]
    fn test_deserialize_recomputes_derived_value() {
        let json = serde_json::json!({
            "id": "r1",
            "kind": "bmi",
            "recorded_at": "2024-01-01T00:00:00",
            "primary_value": 72.25,
            "secondary_value": 170.0,
            "derived_value": 999.0,
            "captured_at": "2024-01-01T08:00:00Z"
        });
        let record: MetricRecord = serde_json::from_value(json).unwrap();
        assert!((record.derived_value().unwrap() - 25.0).abs() < 1e-9);
    }
}
