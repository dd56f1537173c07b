// ABOUTME: Integration tests for range windows, batch averages, and calendar-week averages
// ABOUTME: Checks batch sizing, representative dates, derived-value recomputation, and views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitals Engine Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{NaiveDate, NaiveDateTime};
use common::{approx, bmi, daily_series, day, init_test_logging, midnight, reading};
use uuid::Uuid;
use vitals_engine::aggregation::{
    average_run, batch_average, build_view, filter_range, summarize, weekly_average,
};
use vitals_engine::{
    Category, ChartResolution, MetricKind, MetricRecord, RangeWindow, SeriesStore, ViewRequest,
};

fn noon(year: i32, month: u32, day_of_month: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day_of_month)
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .unwrap()
}

fn values(records: &[MetricRecord]) -> Vec<f64> {
    records.iter().map(MetricRecord::primary_value).collect()
}

fn days(records: &[MetricRecord]) -> Vec<NaiveDate> {
    records.iter().map(MetricRecord::day).collect()
}

#[test]
fn test_batches_of_seven_over_ten_days() {
    init_test_logging();
    let series = daily_series(MetricKind::BloodPressure, day(1, 1), 10);

    let batches = batch_average(&series, 7);

    assert_eq!(batches.len(), 2);
    assert_eq!(days(&batches), vec![day(1, 1), day(1, 8)]);
    assert!(approx(batches[0].primary_value(), 4.0));
    assert!(approx(batches[1].primary_value(), 9.0));
    assert_eq!(batches[0].kind(), MetricKind::BloodPressure);
    assert_eq!(batches[0].secondary_value(), None);
}

#[test]
fn test_batch_count_is_ceiling_of_length_over_size() {
    for size in [1, 7, 30] {
        for length in 0..=65 {
            let series = daily_series(MetricKind::BloodSugar, day(1, 1), length);
            assert_eq!(
                batch_average(&series, size).len(),
                length.div_ceil(size),
                "length {length}, size {size}"
            );
        }
    }
}

#[test]
fn test_batches_follow_position_not_calendar() {
    let sparse: Vec<MetricRecord> = (1..=7)
        .map(|month| reading(MetricKind::BloodLipids, "m", month, 1, f64::from(month)))
        .collect();

    let batches = batch_average(&sparse, 7);

    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].day(), day(1, 1));
    assert!(approx(batches[0].primary_value(), 4.0));
}

#[test]
fn test_batches_sort_unordered_input() {
    let mut series = daily_series(MetricKind::BloodPressure, day(1, 1), 9);
    series.reverse();

    let batches = batch_average(&series, 7);

    assert_eq!(days(&batches), vec![day(1, 1), day(1, 8)]);
    assert!(approx(batches[1].primary_value(), 8.5));
}

#[test]
fn test_batch_bmi_is_recomputed_from_averaged_inputs() {
    let run = [
        bmi("a", 1, 1, 60.0, 150.0, 0),
        bmi("b", 1, 2, 80.0, 190.0, 0),
    ];
    let mean_of_bmis =
        (run[0].derived_value().unwrap() + run[1].derived_value().unwrap()) / 2.0;

    let averaged = average_run(&run).unwrap();

    assert!(approx(averaged.primary_value(), 70.0));
    assert_eq!(averaged.secondary_value(), Some(170.0));
    let expected = 70.0 / (1.7 * 1.7);
    assert!(approx(averaged.derived_value().unwrap(), expected));
    assert!(!approx(averaged.derived_value().unwrap(), mean_of_bmis));
    assert_eq!(averaged.id(), "a");
    assert_eq!(averaged.day(), day(1, 1));
}

#[test]
fn test_average_of_empty_run_is_none() {
    assert!(average_run(&[]).is_none());
}

#[test]
fn test_weekly_average_groups_by_iso_week() {
    // 2024-01-01 is a Monday.
    let series = daily_series(MetricKind::BloodSugar, day(1, 1), 10);

    let weeks = weekly_average(&series);

    assert_eq!(values(&weeks), vec![4.0, 9.0]);
    assert_eq!(days(&weeks), vec![day(1, 1), day(1, 8)]);
}

#[test]
fn test_weekly_average_crosses_year_boundary_by_iso_week() {
    // Dec 28-29 2024 fall in ISO week 2024-W52; Dec 30 onwards in 2025-W01.
    let series = daily_series(MetricKind::BloodPressure, day(12, 28), 7);

    let weeks = weekly_average(&series);

    assert_eq!(weeks.len(), 2);
    assert!(approx(weeks[0].primary_value(), 1.5));
    assert!(approx(weeks[1].primary_value(), 5.0));
    assert_eq!(weeks[1].day(), day(12, 30));
}

#[test]
fn test_range_filter_has_no_upper_bound() {
    let series = vec![
        reading(MetricKind::BloodLipids, "old", 2, 28, 170.0),
        reading(MetricKind::BloodLipids, "first", 2, 29, 180.0),
        reading(MetricKind::BloodLipids, "in", 3, 1, 190.0),
        reading(MetricKind::BloodLipids, "future", 4, 10, 200.0),
    ];

    // One month back from Mar 31 clamps to Feb 29.
    let kept = filter_range(&series, RangeWindow::Month, noon(2024, 3, 31));

    assert_eq!(days(&kept), vec![day(2, 29), day(3, 1), day(4, 10)]);
}

#[test]
fn test_range_filter_keeps_first_day_for_every_kind() {
    let now = noon(2024, 3, 8);
    let early_pressure = MetricRecord::from_parts(
        "bp-early",
        MetricKind::BloodPressure,
        day(3, 1).and_hms_opt(6, 15, 0).unwrap(),
        120.0,
        None,
        common::captured(0),
    );
    let late_pressure = MetricRecord::from_parts(
        "bp-late",
        MetricKind::BloodPressure,
        day(3, 1).and_hms_opt(21, 0, 0).unwrap(),
        125.0,
        None,
        common::captured(0),
    );

    for record in [
        bmi("bmi", 3, 1, 70.0, 170.0, 0),
        reading(MetricKind::BloodSugar, "bs", 3, 1, 5.5),
        reading(MetricKind::BloodLipids, "bl", 3, 1, 190.0),
        early_pressure,
        late_pressure,
    ] {
        let kept = filter_range(&[record.clone()], RangeWindow::Week, now);
        assert_eq!(kept, vec![record], "first day of the week window dropped");
    }

    let day_before = bmi("bmi", 2, 29, 70.0, 170.0, 0);
    assert!(filter_range(&[day_before], RangeWindow::Week, now).is_empty());
}

#[test]
fn test_longer_windows_keep_more() {
    let series = daily_series(MetricKind::BloodSugar, day(1, 1), 366);
    let now = noon(2024, 12, 31);

    let counts: Vec<usize> = RangeWindow::ALL
        .iter()
        .map(|window| filter_range(&series, *window, now).len())
        .collect();

    assert!(counts.windows(2).all(|pair| pair[0] <= pair[1]), "{counts:?}");
    // Dec 24 through Dec 31 inclusive.
    assert_eq!(counts[0], 8);
}

#[test]
fn test_view_filters_then_aggregates() {
    let store = SeriesStore::from_records(
        Uuid::new_v4(),
        MetricKind::BloodPressure,
        8,
        daily_series(MetricKind::BloodPressure, day(1, 1), 30),
    );
    let request = ViewRequest::new(Some(RangeWindow::Week), ChartResolution::Every7);

    let view = store.view(&request, noon(2024, 1, 30));

    assert_eq!(view.resolution, ChartResolution::Every7);
    assert_eq!(view.window, Some(RangeWindow::Week));
    // Jan 23 through Jan 30: one full batch of seven and a single trailing day.
    assert_eq!(view.records.len(), 2);
    assert_eq!(days(&view.records), vec![day(1, 23), day(1, 30)]);
    assert!(approx(view.records[0].primary_value(), 26.0));
    assert!(approx(view.records[1].primary_value(), 30.0));
}

#[test]
fn test_view_without_window_keeps_whole_series() {
    let series = daily_series(MetricKind::BloodLipids, day(1, 1), 65);

    let raw = build_view(
        &series,
        &ViewRequest::default(),
        midnight(1, 1),
    );
    let monthly = build_view(
        &series,
        &ViewRequest::new(None, ChartResolution::Every30),
        midnight(1, 1),
    );

    assert_eq!(raw.records.len(), 65);
    assert_eq!(raw.resolution, ChartResolution::Raw);
    assert_eq!(monthly.records.len(), 3);
}

#[test]
fn test_summary_over_display_values() {
    let series = daily_series(MetricKind::BloodPressure, day(1, 1), 5);

    let summary = summarize(&series).unwrap();

    assert_eq!(summary.count, 5);
    assert_eq!(summary.first_day, day(1, 1));
    assert_eq!(summary.last_day, day(1, 5));
    assert!(approx(summary.min, 1.0));
    assert!(approx(summary.max, 5.0));
    assert!(approx(summary.mean, 3.0));
    assert!(approx(summary.latest, 5.0));
    assert_eq!(summary.latest_category, Some(Category::Low));
}
