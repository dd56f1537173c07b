// ABOUTME: Change notification events emitted by series stores
// ABOUTME: Serializable so subscribers can forward them without knowing the store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitals Engine Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vitals_core::models::MetricKind;

/// A change to one user's series for one metric
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesEvent {
    /// Owner of the series
    pub user_id: Uuid,
    /// Metric of the series
    pub kind: MetricKind,
    /// What changed
    pub change: SeriesChange,
}

/// What happened to the series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SeriesChange {
    /// A record was added for a day that had none
    Inserted {
        /// Day of the new record
        day: NaiveDate,
    },
    /// The record of an existing day was replaced
    Replaced {
        /// Day whose record changed
        day: NaiveDate,
    },
    /// A day's record was deleted
    Removed {
        /// Day whose record was deleted
        day: NaiveDate,
    },
    /// A refetched batch was merged record by record
    Refreshed {
        /// Records added for new days
        inserted: usize,
        /// Existing days replaced
        replaced: usize,
    },
}
