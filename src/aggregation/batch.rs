// ABOUTME: Positional batch averaging and ISO calendar-week averaging of a series
// ABOUTME: Averages inputs first and recomputes derived values from the averaged inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitals Engine Contributors

use chrono::Datelike;
use vitals_core::models::MetricRecord;

/// Average a run of records into one representative record
///
/// Primary and secondary values are averaged and the derived value is then
/// recomputed from those averages; per-record derived values are never
/// averaged. The representative date, id and capture instant are those of
/// the first member. Returns `None` for an empty run.
#[must_use]
pub fn average_run(run: &[MetricRecord]) -> Option<MetricRecord> {
    let first = run.first()?;
    let primary = mean(run.iter().map(MetricRecord::primary_value))?;
    let secondary = mean(run.iter().filter_map(MetricRecord::secondary_value));
    Some(first.with_values(first.recorded_at(), primary, secondary))
}

/// Partition into contiguous runs of `size` records by position and average each
///
/// The series is sorted ascending first. The last run may be shorter than
/// `size`. Runs follow sequence position, not calendar span, so a sparse
/// series can put far more than `size` days into one run. A `size` of zero
/// is treated as one.
#[must_use]
pub fn batch_average(records: &[MetricRecord], size: usize) -> Vec<MetricRecord> {
    sorted(records)
        .chunks(size.max(1))
        .filter_map(average_run)
        .collect()
}

/// One averaged record per ISO week (weeks start on Monday), ascending by date
#[must_use]
pub fn weekly_average(records: &[MetricRecord]) -> Vec<MetricRecord> {
    // Sorted input keeps each ISO week contiguous.
    sorted(records)
        .chunk_by(|a, b| iso_week_key(a) == iso_week_key(b))
        .filter_map(average_run)
        .collect()
}

fn sorted(records: &[MetricRecord]) -> Vec<MetricRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(MetricRecord::recorded_at);
    sorted
}

fn iso_week_key(record: &MetricRecord) -> (i32, u32) {
    let week = record.day().iso_week();
    (week.year(), week.week())
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0_usize), |(sum, count), value| {
        (sum + value, count + 1)
    });
    (count > 0).then(|| sum / count as f64)
}
