// ABOUTME: Decoder for loosely-typed backend metric records into typed MetricRecords
// ABOUTME: String-encoded numbers and fixed-format dates; batches decode all-or-nothing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitals Engine Contributors

//! # Record Decoder
//!
//! The backend delivers each record as a field map whose numbers are usually
//! strings (`{"H": "170.5", "W": "68", "BMI_DT": "2024-01-01"}`). Field names
//! and date formats come from the metric's descriptor.
//!
//! A record decodes atomically. A batch decodes all-or-nothing: the first
//! failing member voids the batch and the caller keeps its previous state.
//!
//! Backend records rarely carry `CAPTURED_AT`. Records without one are
//! stamped with a default capture instant; for refetches that must be the
//! instant the fetch was issued (see [`decode_batch_at`]), otherwise a stale
//! response would outrank local writes made while it was in flight.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::{Map, Value};
use tracing::debug;
use uuid::Uuid;
use vitals_core::constants::fields;
use vitals_core::errors::{BatchDecodeError, DecodeError};
use vitals_core::models::{DateFormat, MetricKind, MetricRecord};

/// One raw backend record
pub type RawRecord = Map<String, Value>;

/// Decode one backend record
///
/// # Errors
///
/// Returns [`DecodeError`] naming the first field that is missing or unparseable
pub fn decode_record(kind: MetricKind, raw: &RawRecord) -> Result<MetricRecord, DecodeError> {
    decode_with_default_capture(kind, raw, Utc::now())
}

/// Decode a batch of backend records stamped with the current instant
///
/// # Errors
///
/// Returns [`BatchDecodeError::Record`] with the zero-based index of the first failure
pub fn decode_batch(
    kind: MetricKind,
    raws: &[Value],
) -> Result<Vec<MetricRecord>, BatchDecodeError> {
    decode_batch_at(kind, raws, Utc::now())
}

/// Decode a batch of backend records, failing the whole batch on the first bad member
///
/// Records without `CAPTURED_AT` are stamped with `default_captured_at`,
/// normally the instant the fetch was requested.
///
/// # Errors
///
/// Returns [`BatchDecodeError::Record`] with the zero-based index of the first failure
pub fn decode_batch_at(
    kind: MetricKind,
    raws: &[Value],
    default_captured_at: DateTime<Utc>,
) -> Result<Vec<MetricRecord>, BatchDecodeError> {
    let records = raws
        .iter()
        .enumerate()
        .map(|(index, value)| {
            as_record(value)
                .and_then(|raw| decode_with_default_capture(kind, raw, default_captured_at))
                .map_err(|source| BatchDecodeError::Record { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        metric.kind = %kind,
        batch.size = records.len(),
        "Decoded metric batch"
    );
    Ok(records)
}

/// Decode the raw bytes of a fetch response (a JSON array of records)
///
/// # Errors
///
/// Returns [`BatchDecodeError::Malformed`] if the bytes are not a JSON array,
/// or [`BatchDecodeError::Record`] if any member fails to decode
pub fn decode_payload(
    kind: MetricKind,
    bytes: &[u8],
) -> Result<Vec<MetricRecord>, BatchDecodeError> {
    decode_payload_at(kind, bytes, Utc::now())
}

/// Decode the raw bytes of a fetch response issued at `requested_at`
///
/// # Errors
///
/// Same as [`decode_payload`]
pub fn decode_payload_at(
    kind: MetricKind,
    bytes: &[u8],
    requested_at: DateTime<Utc>,
) -> Result<Vec<MetricRecord>, BatchDecodeError> {
    let raws: Vec<Value> = serde_json::from_slice(bytes)?;
    decode_batch_at(kind, &raws, requested_at)
}

fn as_record(value: &Value) -> Result<&RawRecord, DecodeError> {
    value.as_object().ok_or_else(|| DecodeError::NotAnObject {
        found: json_type_name(value),
    })
}

fn decode_with_default_capture(
    kind: MetricKind,
    raw: &RawRecord,
    default_captured_at: DateTime<Utc>,
) -> Result<MetricRecord, DecodeError> {
    let descriptor = kind.descriptor();

    let primary = required_number(raw, descriptor.value_field)?;
    let secondary = descriptor
        .secondary_field
        .map(|field| required_number(raw, field))
        .transpose()?;
    let recorded_at = required_date(raw, descriptor.date_field, descriptor.date_format)?;
    let captured_at = optional_capture_instant(raw)?.unwrap_or(default_captured_at);
    let id = optional_id(raw).unwrap_or_else(|| Uuid::new_v4().to_string());

    Ok(MetricRecord::from_parts(
        id,
        kind,
        recorded_at,
        primary,
        secondary,
        captured_at,
    ))
}

fn present<'a>(raw: &'a RawRecord, field: &'static str) -> Option<&'a Value> {
    raw.get(field).filter(|value| !value.is_null())
}

fn required_number(raw: &RawRecord, field: &'static str) -> Result<f64, DecodeError> {
    let value = present(raw, field).ok_or_else(|| DecodeError::missing_field(field))?;
    let parsed = match value {
        Value::String(text) => text.trim().parse::<f64>().ok(),
        Value::Number(number) => number.as_f64(),
        _ => None,
    };
    parsed
        .filter(|number| number.is_finite())
        .ok_or_else(|| DecodeError::field_parse(field, raw_text(value)))
}

fn required_date(
    raw: &RawRecord,
    field: &'static str,
    format: DateFormat,
) -> Result<NaiveDateTime, DecodeError> {
    let value = present(raw, field).ok_or_else(|| DecodeError::missing_field(field))?;
    value
        .as_str()
        .and_then(|text| format.parse(text))
        .ok_or_else(|| DecodeError::field_parse(field, raw_text(value)))
}

fn optional_capture_instant(raw: &RawRecord) -> Result<Option<DateTime<Utc>>, DecodeError> {
    let Some(value) = present(raw, fields::CAPTURED_AT) else {
        return Ok(None);
    };
    value
        .as_str()
        .and_then(|text| DateTime::parse_from_rfc3339(text.trim()).ok())
        .map(|instant| Some(instant.with_timezone(&Utc)))
        .ok_or_else(|| DecodeError::field_parse(fields::CAPTURED_AT, raw_text(value)))
}

fn optional_id(raw: &RawRecord) -> Option<String> {
    match present(raw, fields::RECORD_ID)? {
        Value::String(text) if !text.trim().is_empty() => Some(text.trim().to_owned()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Raw value as the user would recognise it: strings without JSON quotes
fn raw_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> RawRecord {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_numeric_fields_accept_strings_and_numbers() {
        let raw = object(json!({"BS": " 5.6 ", "BS_DT": "2024-02-01"}));
        let record = decode_record(MetricKind::BloodSugar, &raw).unwrap();
        assert!((record.primary_value() - 5.6).abs() < f64::EPSILON);

        let raw = object(json!({"BS": 6, "BS_DT": "2024-02-01"}));
        let record = decode_record(MetricKind::BloodSugar, &raw).unwrap();
        assert!((record.primary_value() - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_finite_numbers_are_rejected() {
        let raw = object(json!({"BL": "NaN", "BL_DT": "2024-02-01"}));
        assert_eq!(
            decode_record(MetricKind::BloodLipids, &raw),
            Err(DecodeError::field_parse("BL", "NaN"))
        );
    }

    #[test]
    fn test_null_field_counts_as_missing() {
        let raw = object(json!({"BP": null, "BP_DT": "2024-02-01 08:00:00"}));
        assert_eq!(
            decode_record(MetricKind::BloodPressure, &raw),
            Err(DecodeError::missing_field("BP"))
        );
    }

    #[test]
    fn test_non_object_member_voids_batch() {
        let batch = vec![json!({"BS": "5.0", "BS_DT": "2024-02-01"}), json!("oops")];
        let error = decode_batch(MetricKind::BloodSugar, &batch).unwrap_err();
        assert!(matches!(
            error,
            BatchDecodeError::Record {
                index: 1,
                source: DecodeError::NotAnObject { found: "string" }
            }
        ));
    }
}
