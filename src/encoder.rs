// ABOUTME: Encoder turning MetricRecords back into backend field-map payloads
// ABOUTME: Used by the transport collaborator when posting a new local reading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitals Engine Contributors

use crate::decoder::RawRecord;
use serde_json::Value;
use vitals_core::constants::fields;
use vitals_core::models::MetricRecord;

/// Encode a record into the backend's field map (string-encoded numbers)
#[must_use]
pub fn encode_record(record: &MetricRecord) -> RawRecord {
    let descriptor = record.kind().descriptor();
    let mut raw = RawRecord::new();

    raw.insert(fields::RECORD_ID.to_owned(), Value::from(record.id()));
    raw.insert(
        descriptor.value_field.to_owned(),
        Value::from(record.primary_value().to_string()),
    );
    if let (Some(field), Some(secondary)) = (descriptor.secondary_field, record.secondary_value())
    {
        raw.insert(field.to_owned(), Value::from(secondary.to_string()));
    }
    raw.insert(
        descriptor.date_field.to_owned(),
        Value::from(descriptor.date_format.format(record.recorded_at())),
    );
    raw.insert(
        fields::CAPTURED_AT.to_owned(),
        Value::from(record.captured_at().to_rfc3339()),
    );
    raw
}

/// Encode a slice of records into a JSON array payload
#[must_use]
pub fn encode_batch(records: &[MetricRecord]) -> Value {
    Value::Array(
        records
            .iter()
            .map(|record| Value::Object(encode_record(record)))
            .collect(),
    )
}
