// ABOUTME: Aggregation module root for read-only views over a metric series
// ABOUTME: Range windows, positional batch averages, calendar-week averages, and summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitals Engine Contributors

//! # Aggregator
//!
//! Stateless queries over a series; none of them mutate the store.
//!
//! - [`filter_range`]: records dated on or after the window's first day, no
//!   upper bound
//! - [`batch_average`]: contiguous runs of N records by position, not by
//!   calendar span
//! - [`weekly_average`]: one averaged record per ISO week
//!
//! Positional batching and calendar-week averaging answer different
//! questions and are not interchangeable; [`SeriesView`] carries the
//! [`ChartResolution`] that produced it.

mod batch;
mod view;
mod window;

pub use batch::{average_run, batch_average, weekly_average};
pub use view::{build_view, summarize, ChartResolution, SeriesSummary, SeriesView, ViewRequest};
pub use window::{filter_range, RangeWindow};
