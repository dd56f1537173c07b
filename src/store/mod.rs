// ABOUTME: Series store module root with per-user book and change events
// ABOUTME: Re-exports SeriesStore, HealthBook, and the notification types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitals Engine Contributors

//! # Series Store
//!
//! The only mutable component of the engine. A [`SeriesStore`] holds one
//! user's readings for one metric: at most one record per calendar day,
//! always date-ascending. A [`HealthBook`] owns every store for every user
//! and is the single writer all mutations go through.
//!
//! Presentation layers observe changes through [`SeriesStore::subscribe`]
//! without the store knowing anything about them.

mod book;
mod events;
mod series;

pub use book::HealthBook;
pub use events::{SeriesChange, SeriesEvent};
pub use series::{MergeSummary, SeriesStore, UpsertOutcome};
