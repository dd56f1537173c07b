// ABOUTME: Core data models for the vitals health-metric engine
// ABOUTME: Re-exports MetricKind, MetricRecord, MetricDescriptor and Category
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitals Engine Contributors

//! # Data Models
//!
//! - `MetricKind`: the four metric families (BMI, blood pressure, blood sugar, blood lipids)
//! - `MetricRecord`: one reading, with its derived value recomputed at construction
//! - `MetricDescriptor`: per-kind field names, date format, derive function,
//!   merge policy and classification bands
//! - `Category`: classification labels

mod category;
mod descriptor;
mod metric;

pub use category::Category;
pub use descriptor::{Band, DateFormat, DeriveFn, MetricDescriptor};
pub use metric::{MergePolicy, MetricKind, MetricRecord};
