// ABOUTME: Per-user, per-metric series store with day-granularity upsert
// ABOUTME: Applies the metric's merge policy, keeps date order, and broadcasts changes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitals Engine Contributors

use super::events::{SeriesChange, SeriesEvent};
use crate::aggregation::{self, SeriesSummary, SeriesView, ViewRequest};
use crate::classifier::{self, ClassifiedPoint};
use crate::decoder;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};
use uuid::Uuid;
use vitals_core::errors::BatchDecodeError;
use vitals_core::models::{MergePolicy, MetricKind, MetricRecord};

/// Result of a single upsert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpsertOutcome {
    /// No record existed for the day; the incoming one was added
    Inserted,
    /// The day's record was replaced by the incoming one
    Replaced,
    /// The incoming record won but is identical to the stored one
    Unchanged,
    /// The merge policy kept the existing record
    Discarded,
    /// The record belongs to another metric and was ignored
    WrongKind,
}

impl UpsertOutcome {
    /// Whether the series changed
    #[must_use]
    pub const fn changed(self) -> bool {
        matches!(self, Self::Inserted | Self::Replaced)
    }
}

/// Tally of a record-by-record merge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeSummary {
    /// Records added for new days
    pub inserted: usize,
    /// Existing days replaced
    pub replaced: usize,
    /// Records identical to what was stored
    pub unchanged: usize,
    /// Records the merge policy rejected
    pub discarded: usize,
    /// Records of the wrong metric
    pub wrong_kind: usize,
}

impl MergeSummary {
    fn record(&mut self, outcome: UpsertOutcome) {
        match outcome {
            UpsertOutcome::Inserted => self.inserted += 1,
            UpsertOutcome::Replaced => self.replaced += 1,
            UpsertOutcome::Unchanged => self.unchanged += 1,
            UpsertOutcome::Discarded => self.discarded += 1,
            UpsertOutcome::WrongKind => self.wrong_kind += 1,
        }
    }

    /// Whether the merge changed the series
    #[must_use]
    pub const fn changed(&self) -> bool {
        self.inserted + self.replaced > 0
    }

    /// Number of records considered
    #[must_use]
    pub const fn total(&self) -> usize {
        self.inserted + self.replaced + self.unchanged + self.discarded + self.wrong_kind
    }
}

/// Ordered readings of one metric for one user
///
/// Invariants after every mutation: at most one record per calendar day,
/// records ascending by date. Mutation requires `&mut self`, so a store has
/// exactly one writer.
#[derive(Debug)]
pub struct SeriesStore {
    user_id: Uuid,
    kind: MetricKind,
    policy: MergePolicy,
    records: Vec<MetricRecord>,
    events: broadcast::Sender<SeriesEvent>,
}

impl SeriesStore {
    /// Create an empty series
    ///
    /// `notify_buffer` is the change channel capacity; slow subscribers that
    /// fall further behind observe a lag instead of blocking the store.
    #[must_use]
    pub fn new(user_id: Uuid, kind: MetricKind, notify_buffer: usize) -> Self {
        let (events, _) = broadcast::channel(notify_buffer.max(1));
        Self {
            user_id,
            kind,
            policy: kind.descriptor().merge_policy,
            records: Vec::new(),
            events,
        }
    }

    /// Create a series seeded from existing records, merged through upsert
    #[must_use]
    pub fn from_records(
        user_id: Uuid,
        kind: MetricKind,
        notify_buffer: usize,
        records: impl IntoIterator<Item = MetricRecord>,
    ) -> Self {
        let mut store = Self::new(user_id, kind, notify_buffer);
        for record in records {
            store.apply(record);
        }
        store
    }

    /// Owner of this series
    #[must_use]
    pub const fn user_id(&self) -> Uuid {
        self.user_id
    }

    /// Metric of this series
    #[must_use]
    pub const fn kind(&self) -> MetricKind {
        self.kind
    }

    /// Merge policy applied to same-day conflicts
    #[must_use]
    pub const fn merge_policy(&self) -> MergePolicy {
        self.policy
    }

    /// Subscribe to change notifications
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SeriesEvent> {
        self.events.subscribe()
    }

    /// Insert or merge one record into its calendar-day slot
    ///
    /// Re-applying a record that was already applied leaves the series as it was.
    pub fn upsert(&mut self, record: MetricRecord) -> UpsertOutcome {
        let day = record.day();
        let outcome = self.apply(record);
        debug!(
            user.id = %self.user_id,
            metric.kind = %self.kind,
            record.day = %day,
            outcome = ?outcome,
            "Upserted metric record"
        );
        match outcome {
            UpsertOutcome::Inserted => self.notify(SeriesChange::Inserted { day }),
            UpsertOutcome::Replaced => self.notify(SeriesChange::Replaced { day }),
            UpsertOutcome::Unchanged | UpsertOutcome::Discarded | UpsertOutcome::WrongKind => {}
        }
        outcome
    }

    /// Merge a refetched batch record by record through the upsert path
    ///
    /// The series is never replaced wholesale, so a stale response cannot
    /// clobber a newer local write under `TimestampWins`.
    pub fn merge_all(&mut self, records: impl IntoIterator<Item = MetricRecord>) -> MergeSummary {
        let mut summary = MergeSummary::default();
        for record in records {
            summary.record(self.apply(record));
        }

        info!(
            user.id = %self.user_id,
            metric.kind = %self.kind,
            merge.inserted = summary.inserted,
            merge.replaced = summary.replaced,
            merge.discarded = summary.discarded,
            series.len = self.records.len(),
            "Merged metric batch"
        );
        if summary.changed() {
            self.notify(SeriesChange::Refreshed {
                inserted: summary.inserted,
                replaced: summary.replaced,
            });
        }
        summary
    }

    /// Decode a fetch response and merge it
    ///
    /// `requested_at` is when the fetch was issued. Records without their own
    /// capture instant are stamped with it, so under `TimestampWins` local
    /// writes made while the response was in flight survive the merge.
    ///
    /// # Errors
    ///
    /// Returns the batch error if any member fails to decode; the series is
    /// left exactly as it was.
    pub fn apply_payload(
        &mut self,
        bytes: &[u8],
        requested_at: DateTime<Utc>,
    ) -> Result<MergeSummary, BatchDecodeError> {
        match decoder::decode_payload_at(self.kind, bytes, requested_at) {
            Ok(records) => Ok(self.merge_all(records)),
            Err(error) => {
                warn!(
                    user.id = %self.user_id,
                    metric.kind = %self.kind,
                    error = %error,
                    "Rejected metric batch; keeping previous series"
                );
                Err(error)
            }
        }
    }

    /// Delete the record of a calendar day
    pub fn remove_day(&mut self, day: NaiveDate) -> Option<MetricRecord> {
        let index = self.records.iter().position(|record| record.day() == day)?;
        Some(self.remove_at(index))
    }

    /// Delete a record by identifier
    pub fn remove_id(&mut self, id: &str) -> Option<MetricRecord> {
        let index = self.records.iter().position(|record| record.id() == id)?;
        Some(self.remove_at(index))
    }

    /// Records in ascending date order
    #[must_use]
    pub fn records(&self) -> &[MetricRecord] {
        &self.records
    }

    /// Number of days with a reading
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the series has no readings
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Most recent reading
    #[must_use]
    pub fn latest(&self) -> Option<&MetricRecord> {
        self.records.last()
    }

    /// Reading of a given calendar day
    #[must_use]
    pub fn get(&self, day: NaiveDate) -> Option<&MetricRecord> {
        self.records.iter().find(|record| record.day() == day)
    }

    /// Windowed, aggregated view for charting
    #[must_use]
    pub fn view(&self, request: &ViewRequest, now: NaiveDateTime) -> SeriesView {
        aggregation::build_view(&self.records, request, now)
    }

    /// Summary of the whole series
    #[must_use]
    pub fn summary(&self) -> Option<SeriesSummary> {
        aggregation::summarize(&self.records)
    }

    /// `(day, value, category)` for every reading
    #[must_use]
    pub fn classified(&self) -> Vec<ClassifiedPoint> {
        classifier::classify_series(&self.records)
    }

    fn apply(&mut self, record: MetricRecord) -> UpsertOutcome {
        if record.kind() != self.kind {
            warn!(
                user.id = %self.user_id,
                metric.kind = %self.kind,
                record.kind = %record.kind(),
                "Ignoring record of another metric"
            );
            return UpsertOutcome::WrongKind;
        }

        let existing = self
            .records
            .iter()
            .position(|stored| stored.same_day(&record));
        let outcome = match existing {
            None => {
                self.records.push(record);
                UpsertOutcome::Inserted
            }
            Some(index) if !self.policy.incoming_wins(&self.records[index], &record) => {
                return UpsertOutcome::Discarded;
            }
            Some(index) if self.records[index] == record => return UpsertOutcome::Unchanged,
            Some(index) => {
                self.records[index] = record;
                UpsertOutcome::Replaced
            }
        };

        self.records.sort_by_key(MetricRecord::recorded_at);
        outcome
    }

    fn remove_at(&mut self, index: usize) -> MetricRecord {
        let removed = self.records.remove(index);
        debug!(
            user.id = %self.user_id,
            metric.kind = %self.kind,
            record.day = %removed.day(),
            "Removed metric record"
        );
        self.notify(SeriesChange::Removed {
            day: removed.day(),
        });
        removed
    }

    fn notify(&self, change: SeriesChange) {
        // No subscribers is fine.
        let _ = self.events.send(SeriesEvent {
            user_id: self.user_id,
            kind: self.kind,
            change,
        });
    }
}
