// ABOUTME: Named look-back windows and the range filter over a series
// ABOUTME: Calendar-month arithmetic clamps to the last valid day of the month
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitals Engine Contributors

use chrono::{Duration, Months, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use vitals_core::models::MetricRecord;

/// Named look-back window ending now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeWindow {
    /// One week
    Week,
    /// One calendar month
    Month,
    /// Three calendar months
    ThreeMonths,
    /// Six calendar months
    SixMonths,
    /// One calendar year
    Year,
}

impl RangeWindow {
    /// Every window, shortest first
    pub const ALL: [Self; 5] = [
        Self::Week,
        Self::Month,
        Self::ThreeMonths,
        Self::SixMonths,
        Self::Year,
    ];

    /// Stable snake-case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::ThreeMonths => "three_months",
            Self::SixMonths => "six_months",
            Self::Year => "year",
        }
    }

    /// Parse a window name; accepts snake case and camel case
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            "three_months" | "threemonths" => Some(Self::ThreeMonths),
            "six_months" | "sixmonths" => Some(Self::SixMonths),
            "year" => Some(Self::Year),
            _ => None,
        }
    }

    /// First instant inside the window
    #[must_use]
    pub fn start(self, now: NaiveDateTime) -> NaiveDateTime {
        let start = match self {
            Self::Week => now.checked_sub_signed(Duration::weeks(1)),
            Self::Month => now.checked_sub_months(Months::new(1)),
            Self::ThreeMonths => now.checked_sub_months(Months::new(3)),
            Self::SixMonths => now.checked_sub_months(Months::new(6)),
            Self::Year => now.checked_sub_months(Months::new(12)),
        };
        start.unwrap_or(NaiveDateTime::MIN)
    }
}

impl fmt::Display for RangeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Records dated on or after the window's first day; no upper bound is applied
///
/// Comparison is by calendar day, so day-only metrics (stored at midnight)
/// and blood pressure (stored with its time of day) keep the same records.
#[must_use]
pub fn filter_range(
    records: &[MetricRecord],
    window: RangeWindow,
    now: NaiveDateTime,
) -> Vec<MetricRecord> {
    let first_day = window.start(now).date();
    records
        .iter()
        .filter(|record| record.day() >= first_day)
        .cloned()
        .collect()
}
