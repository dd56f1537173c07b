// ABOUTME: Core types and constants for the vitals health-metric engine
// ABOUTME: Foundation crate with decode errors, metric records, descriptors, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitals Engine Contributors

#![deny(unsafe_code)]

//! # Vitals Core
//!
//! Foundation crate providing shared types and constants for the health-metric
//! time-series engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Structured decode errors and the serializable `ErrorCode`
//! - **constants**: Backend field names, date formats, batch sizes and thresholds
//! - **models**: `MetricKind`, `MetricRecord`, `MetricDescriptor` and `Category`

/// Structured error types for payload decoding
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (records, metric kinds, descriptors, categories)
pub mod models;
