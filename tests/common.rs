// ABOUTME: Shared test utilities and record builders for integration tests
// ABOUTME: Provides quiet logging setup and helpers for dated metric records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitals Engine Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::cast_possible_wrap
)]
//! Shared test utilities for `vitals_engine`

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;
use std::env;
use std::sync::Once;
use tracing::Level;
use vitals_engine::{MetricKind, MetricRecord};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Calendar day in 2024
pub fn day(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap()
}

/// Midnight of a calendar day in 2024
pub fn midnight(month: u32, day_of_month: u32) -> NaiveDateTime {
    day(month, day_of_month).and_hms_opt(0, 0, 0).unwrap()
}

/// Fixed capture instant, offset by `seconds`
pub fn captured(seconds: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap() + Duration::seconds(seconds)
}

/// BMI record (weight kg, height cm) on a 2024 day
pub fn bmi(
    id: &str,
    month: u32,
    day_of_month: u32,
    weight: f64,
    height: f64,
    capture: i64,
) -> MetricRecord {
    MetricRecord::from_parts(
        id,
        MetricKind::Bmi,
        midnight(month, day_of_month),
        weight,
        Some(height),
        captured(capture),
    )
}

/// Single-valued record of `kind` on a 2024 day
pub fn reading(kind: MetricKind, id: &str, month: u32, day_of_month: u32, value: f64) -> MetricRecord {
    MetricRecord::from_parts(
        id,
        kind,
        midnight(month, day_of_month),
        value,
        None,
        captured(0),
    )
}

/// `count` consecutive daily records starting at `start`, valued 1, 2, 3, ...
pub fn daily_series(kind: MetricKind, start: NaiveDate, count: usize) -> Vec<MetricRecord> {
    (0..count)
        .map(|offset| {
            let date = start + Duration::days(offset as i64);
            MetricRecord::from_parts(
                format!("{kind}-{offset}"),
                kind,
                date.and_hms_opt(8, 30, 0).unwrap(),
                (offset + 1) as f64,
                None,
                captured(0),
            )
        })
        .collect()
}

/// Encode a JSON value into payload bytes
pub fn payload(value: &Value) -> Vec<u8> {
    serde_json::to_vec(value).unwrap()
}

/// Approximate float equality for averaged values
pub fn approx(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}
