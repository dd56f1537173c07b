// ABOUTME: Per-metric descriptor table driving decode, merge, derive, and classification
// ABOUTME: One static entry per MetricKind replaces four near-identical implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitals Engine Contributors

//! Metric descriptors
//!
//! Every behavior that differs between metric families is data in this table:
//! backend field names, the date format, an optional derived-value function,
//! the merge policy and the classification bands.

use super::{Category, MergePolicy, MetricKind};
use crate::constants::thresholds::{blood_lipids, blood_pressure, bmi};
use crate::constants::{date_formats, fields, units::CENTIMETERS_PER_METER};
use chrono::{NaiveDate, NaiveDateTime};

/// Computes a derived value from `(primary, secondary)`
pub type DeriveFn = fn(f64, f64) -> Option<f64>;

/// Backend date encoding for a metric
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `yyyy-MM-dd`
    Date,
    /// `yyyy-MM-dd HH:mm:ss`
    DateTime,
}

impl DateFormat {
    /// `chrono` format string
    #[must_use]
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::Date => date_formats::DATE,
            Self::DateTime => date_formats::DATE_TIME,
        }
    }

    /// Parse a backend date string; day-only dates land on midnight
    #[must_use]
    pub fn parse(self, raw: &str) -> Option<NaiveDateTime> {
        let raw = raw.trim();
        match self {
            Self::Date => NaiveDate::parse_from_str(raw, self.pattern())
                .ok()
                .and_then(|day| day.and_hms_opt(0, 0, 0)),
            Self::DateTime => NaiveDateTime::parse_from_str(raw, self.pattern()).ok(),
        }
    }

    /// Render a timestamp in backend format
    #[must_use]
    pub fn format(self, value: NaiveDateTime) -> String {
        value.format(self.pattern()).to_string()
    }
}

/// Half-open classification band `[previous upper, upper)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    /// Exclusive upper bound; `None` for the final open-ended band
    pub upper: Option<f64>,
    /// Label for values in this band
    pub category: Category,
}

impl Band {
    const fn below(upper: f64, category: Category) -> Self {
        Self {
            upper: Some(upper),
            category,
        }
    }

    const fn open(category: Category) -> Self {
        Self {
            upper: None,
            category,
        }
    }

    /// Whether `value` falls in this band, given that earlier bands did not match
    #[must_use]
    pub fn admits(&self, value: f64) -> bool {
        self.upper.is_none_or(|upper| value < upper)
    }
}

/// Everything that varies between metric families
#[derive(Debug, Clone, Copy)]
pub struct MetricDescriptor {
    /// Metric this descriptor belongs to
    pub kind: MetricKind,
    /// Backend field holding the primary value
    pub value_field: &'static str,
    /// Backend field holding the secondary value, if the metric has one
    pub secondary_field: Option<&'static str>,
    /// Backend field holding the measurement date
    pub date_field: &'static str,
    /// Encoding of `date_field`
    pub date_format: DateFormat,
    /// Derived value from `(primary, secondary)`
    pub derive: Option<DeriveFn>,
    /// Same-day conflict resolution
    pub merge_policy: MergePolicy,
    /// Ascending classification bands; `None` means unclassified
    pub bands: Option<&'static [Band]>,
}

impl MetricDescriptor {
    /// Compute the derived value, if this metric has one and the inputs allow it
    #[must_use]
    pub fn derive_value(&self, primary: f64, secondary: Option<f64>) -> Option<f64> {
        let derive = self.derive?;
        derive(primary, secondary?)
    }
}

/// BMI from weight (kg) and height (cm); undefined for non-positive height
fn body_mass_index(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return None;
    }
    let height_m = height_cm / CENTIMETERS_PER_METER;
    Some(weight_kg / (height_m * height_m))
}

const BMI_BANDS: &[Band] = &[
    Band::below(bmi::UNDERWEIGHT_BELOW, Category::Underweight),
    Band::below(bmi::NORMAL_BELOW, Category::Normal),
    Band::below(bmi::OVERWEIGHT_BELOW, Category::Overweight),
    Band::below(bmi::MILD_OBESITY_BELOW, Category::MildObesity),
    Band::below(bmi::MODERATE_OBESITY_BELOW, Category::ModerateObesity),
    Band::open(Category::SevereObesity),
];

// The top two bands share a label.
const BLOOD_PRESSURE_BANDS: &[Band] = &[
    Band::below(blood_pressure::LOW_BELOW, Category::Low),
    Band::below(blood_pressure::NORMAL_BELOW, Category::Normal),
    Band::below(blood_pressure::ELEVATED_BELOW, Category::Elevated),
    Band::below(blood_pressure::HIGH_BELOW, Category::High),
    Band::open(Category::High),
];

const BLOOD_LIPIDS_BANDS: &[Band] = &[
    Band::below(blood_lipids::NORMAL_BELOW, Category::Normal),
    Band::below(blood_lipids::ELEVATED_BELOW, Category::Elevated),
    Band::open(Category::High),
];

static BMI: MetricDescriptor = MetricDescriptor {
    kind: MetricKind::Bmi,
    value_field: fields::BMI_WEIGHT,
    secondary_field: Some(fields::BMI_HEIGHT),
    date_field: fields::BMI_DATE,
    date_format: DateFormat::Date,
    derive: Some(body_mass_index),
    merge_policy: MergePolicy::TimestampWins,
    bands: Some(BMI_BANDS),
};

static BLOOD_PRESSURE: MetricDescriptor = MetricDescriptor {
    kind: MetricKind::BloodPressure,
    value_field: fields::BLOOD_PRESSURE,
    secondary_field: None,
    date_field: fields::BLOOD_PRESSURE_DATE,
    date_format: DateFormat::DateTime,
    derive: None,
    merge_policy: MergePolicy::LastWriteWins,
    bands: Some(BLOOD_PRESSURE_BANDS),
};

static BLOOD_SUGAR: MetricDescriptor = MetricDescriptor {
    kind: MetricKind::BloodSugar,
    value_field: fields::BLOOD_SUGAR,
    secondary_field: None,
    date_field: fields::BLOOD_SUGAR_DATE,
    date_format: DateFormat::Date,
    derive: None,
    merge_policy: MergePolicy::LastWriteWins,
    bands: None,
};

static BLOOD_LIPIDS: MetricDescriptor = MetricDescriptor {
    kind: MetricKind::BloodLipids,
    value_field: fields::BLOOD_LIPIDS,
    secondary_field: None,
    date_field: fields::BLOOD_LIPIDS_DATE,
    date_format: DateFormat::Date,
    derive: None,
    merge_policy: MergePolicy::LastWriteWins,
    bands: Some(BLOOD_LIPIDS_BANDS),
};

impl MetricKind {
    /// Static descriptor for this metric
    #[must_use]
    pub fn descriptor(self) -> &'static MetricDescriptor {
        match self {
            Self::Bmi => &BMI,
            Self::BloodPressure => &BLOOD_PRESSURE,
            Self::BloodSugar => &BLOOD_SUGAR,
            Self::BloodLipids => &BLOOD_LIPIDS,
        }
    }
}
