// ABOUTME: Main library entry point for the vitals health-metric engine
// ABOUTME: Decodes backend payloads, merges per-day series, aggregates views, and classifies values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitals Engine Contributors

#![deny(unsafe_code)]

//! # Vitals Engine
//!
//! Time-series engine behind the health-metric screens of a diet tracking
//! client. Four metric families share one implementation driven by a
//! per-metric descriptor table (see [`vitals_core::models::MetricDescriptor`]).
//!
//! ## Data flow
//!
//! raw payload → [`decoder`] → [`store::SeriesStore`] → [`aggregation`] /
//! [`classifier`] → presentation collaborator
//!
//! The series store is the only mutable component; everything else is a
//! pure function over `MetricRecord` slices.
//!
//! ## Architecture
//!
//! - **decoder**: loosely-typed backend records into typed `MetricRecord`s
//! - **encoder**: `MetricRecord` back into the backend field-map shape
//! - **store**: per-user, per-metric series with day-granularity upsert and
//!   change notifications
//! - **aggregation**: range windows, positional batch averages, calendar-week
//!   averages and summaries
//! - **classifier**: threshold bands to health categories
//! - **config** / **logging**: environment-driven configuration and tracing setup

/// Decoding of backend metric payloads
pub mod decoder;

/// Encoding of records into backend payload shape
pub mod encoder;

/// Series store, per-user health book, and change events
pub mod store;

/// Read-only aggregated views over a series
pub mod aggregation;

/// Threshold classification of metric values
pub mod classifier;

/// Environment-based engine configuration
pub mod config;

/// Structured logging setup
pub mod logging;

pub use vitals_core::constants;
pub use vitals_core::errors;
pub use vitals_core::models;

pub use aggregation::{ChartResolution, RangeWindow, SeriesSummary, SeriesView, ViewRequest};
pub use classifier::{classify, classify_record, classify_series, ClassifiedPoint};
pub use decoder::{
    decode_batch, decode_batch_at, decode_payload, decode_payload_at, decode_record, RawRecord,
};
pub use encoder::{encode_batch, encode_record};
pub use errors::{BatchDecodeError, DecodeError, ErrorCode};
pub use models::{Category, MergePolicy, MetricKind, MetricRecord};
pub use store::{HealthBook, MergeSummary, SeriesChange, SeriesEvent, SeriesStore, UpsertOutcome};
