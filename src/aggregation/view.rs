// ABOUTME: Chart view assembly combining a range window with an aggregation resolution
// ABOUTME: Tags each view with the resolution that produced it and builds list-header summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitals Engine Contributors

use super::batch::{batch_average, weekly_average};
use super::window::{filter_range, RangeWindow};
use crate::classifier::classify_record;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use vitals_core::constants::batching::{LONG_BATCH_SIZE, SHORT_BATCH_SIZE};
use vitals_core::models::{Category, MetricRecord};

/// How records are aggregated for a chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartResolution {
    /// Every record as stored
    #[default]
    Raw,
    /// Positional batches of 7 records
    Every7,
    /// Positional batches of 30 records
    Every30,
    /// One point per ISO calendar week
    CalendarWeek,
}

impl ChartResolution {
    /// Positional batch size, for the batching resolutions
    #[must_use]
    pub const fn batch_size(self) -> Option<usize> {
        match self {
            Self::Every7 => Some(SHORT_BATCH_SIZE),
            Self::Every30 => Some(LONG_BATCH_SIZE),
            Self::Raw | Self::CalendarWeek => None,
        }
    }

    /// Stable snake-case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::Every7 => "every7",
            Self::Every30 => "every30",
            Self::CalendarWeek => "calendar_week",
        }
    }

    /// Parse a resolution name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "raw" => Some(Self::Raw),
            "every7" | "every_7" => Some(Self::Every7),
            "every30" | "every_30" => Some(Self::Every30),
            "calendar_week" | "calendarweek" | "weekly" => Some(Self::CalendarWeek),
            _ => None,
        }
    }

    /// Aggregate a series at this resolution
    #[must_use]
    pub fn apply(self, records: &[MetricRecord]) -> Vec<MetricRecord> {
        match self {
            Self::Raw => {
                let mut raw = records.to_vec();
                raw.sort_by_key(MetricRecord::recorded_at);
                raw
            }
            Self::Every7 => batch_average(records, SHORT_BATCH_SIZE),
            Self::Every30 => batch_average(records, LONG_BATCH_SIZE),
            Self::CalendarWeek => weekly_average(records),
        }
    }
}

impl fmt::Display for ChartResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a chart asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewRequest {
    /// Look-back window; `None` keeps the whole series
    pub window: Option<RangeWindow>,
    /// Aggregation applied after windowing
    pub resolution: ChartResolution,
}

impl ViewRequest {
    /// A request for a window at a resolution
    #[must_use]
    pub const fn new(window: Option<RangeWindow>, resolution: ChartResolution) -> Self {
        Self { window, resolution }
    }
}

/// Aggregated records together with how they were produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesView {
    /// Window applied before aggregation
    pub window: Option<RangeWindow>,
    /// Aggregation that produced `records`
    pub resolution: ChartResolution,
    /// Resulting points, ascending by date
    pub records: Vec<MetricRecord>,
}

/// Filter by window, then aggregate by resolution
#[must_use]
pub fn build_view(
    records: &[MetricRecord],
    request: &ViewRequest,
    now: NaiveDateTime,
) -> SeriesView {
    let records = match request.window {
        Some(window) => request
            .resolution
            .apply(&filter_range(records, window, now)),
        None => request.resolution.apply(records),
    };
    SeriesView {
        window: request.window,
        resolution: request.resolution,
        records,
    }
}

/// Headline figures for a series, over display values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSummary {
    /// Number of readings
    pub count: usize,
    /// Earliest day
    pub first_day: NaiveDate,
    /// Latest day
    pub last_day: NaiveDate,
    /// Smallest display value
    pub min: f64,
    /// Largest display value
    pub max: f64,
    /// Mean display value
    pub mean: f64,
    /// Display value of the latest reading
    pub latest: f64,
    /// Category of the latest reading, if the metric is classified
    pub latest_category: Option<Category>,
}

/// Summarize a series; `None` when it is empty
#[must_use]
pub fn summarize(records: &[MetricRecord]) -> Option<SeriesSummary> {
    let first = records.iter().min_by_key(|record| record.recorded_at())?;
    let last = records.iter().max_by_key(|record| record.recorded_at())?;

    let values = records.iter().map(MetricRecord::display_value);
    let min = values.clone().fold(f64::INFINITY, f64::min);
    let max = values.clone().fold(f64::NEG_INFINITY, f64::max);
    let mean = values.sum::<f64>() / records.len() as f64;

    Some(SeriesSummary {
        count: records.len(),
        first_day: first.day(),
        last_day: last.day(),
        min,
        max,
        mean,
        latest: last.display_value(),
        latest_category: classify_record(last),
    })
}
