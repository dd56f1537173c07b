// ABOUTME: Benchmark fixtures generating realistic daily health-metric series
// ABOUTME: Deterministic values so measurements are reproducible across runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitals Engine Contributors

//! Benchmark fixtures for daily metric series.

use chrono::{Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use vitals_engine::{MetricKind, MetricRecord};

/// Predefined series lengths for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum SeriesLength {
    /// One month of daily readings
    Month,
    /// One year of daily readings
    Year,
    /// Five years of daily readings
    FiveYears,
}

impl SeriesLength {
    /// Every length, shortest first
    pub const ALL: [Self; 3] = [Self::Month, Self::Year, Self::FiveYears];

    #[must_use]
    pub const fn days(self) -> usize {
        match self {
            Self::Month => 30,
            Self::Year => 365,
            Self::FiveYears => 1825,
        }
    }
}

fn start_of_series() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2020, 1, 1)
        .and_then(|date| date.and_hms_opt(7, 30, 0))
        .unwrap_or_default()
}

/// Daily readings of `kind` with plausible, deterministic values
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
#[must_use]
pub fn daily_series(kind: MetricKind, length: SeriesLength) -> Vec<MetricRecord> {
    let start = start_of_series();
    let captured = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).single().unwrap_or_default();
    (0..length.days())
        .map(|index| {
            let wobble = ((index * 37) % 21) as f64 - 10.0;
            let (primary, secondary) = match kind {
                MetricKind::Bmi => (72.0 + wobble / 4.0, Some(172.0)),
                MetricKind::BloodPressure => (120.0 + wobble, None),
                MetricKind::BloodSugar => (5.5 + wobble / 20.0, None),
                MetricKind::BloodLipids => (195.0 + wobble * 2.0, None),
            };
            MetricRecord::from_parts(
                format!("bench-{kind}-{index}"),
                kind,
                start + Duration::days(index as i64),
                primary,
                secondary,
                captured + Duration::seconds(index as i64),
            )
        })
        .collect()
}
