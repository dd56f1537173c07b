// ABOUTME: Health book owning every user's series stores, one per metric
// ABOUTME: The single logical writer through which all series mutations are serialized
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitals Engine Contributors

use super::series::SeriesStore;
use crate::config::VitalsConfig;
use std::collections::{BTreeSet, HashMap};
use tracing::info;
use uuid::Uuid;
use vitals_core::models::MetricKind;

/// Every series of every user, keyed by `(user, metric)`
#[derive(Debug)]
pub struct HealthBook {
    series: HashMap<(Uuid, MetricKind), SeriesStore>,
    notify_buffer: usize,
}

impl HealthBook {
    /// Create an empty book whose stores use the given notification capacity
    #[must_use]
    pub fn new(notify_buffer: usize) -> Self {
        Self {
            series: HashMap::new(),
            notify_buffer,
        }
    }

    /// Create an empty book from engine configuration
    #[must_use]
    pub fn from_config(config: &VitalsConfig) -> Self {
        Self::new(config.notify_buffer_size)
    }

    /// A user's series for a metric, if it exists
    #[must_use]
    pub fn series(&self, user_id: Uuid, kind: MetricKind) -> Option<&SeriesStore> {
        self.series.get(&(user_id, kind))
    }

    /// A user's series for a metric, created empty on first access
    pub fn series_mut(&mut self, user_id: Uuid, kind: MetricKind) -> &mut SeriesStore {
        let notify_buffer = self.notify_buffer;
        self.series
            .entry((user_id, kind))
            .or_insert_with(|| SeriesStore::new(user_id, kind, notify_buffer))
    }

    /// Drop every series of a user (session end); returns how many were dropped
    pub fn remove_user(&mut self, user_id: Uuid) -> usize {
        let before = self.series.len();
        self.series.retain(|(owner, _), _| *owner != user_id);
        let removed = before - self.series.len();
        info!(user.id = %user_id, series.removed = removed, "Dropped user series");
        removed
    }

    /// Users with at least one series, in stable order
    #[must_use]
    pub fn users(&self) -> Vec<Uuid> {
        self.series
            .keys()
            .map(|(user_id, _)| *user_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Metrics a user has a series for
    #[must_use]
    pub fn kinds_for(&self, user_id: Uuid) -> Vec<MetricKind> {
        MetricKind::ALL
            .into_iter()
            .filter(|kind| self.series.contains_key(&(user_id, *kind)))
            .collect()
    }

    /// Number of series held
    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Whether the book holds no series
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
