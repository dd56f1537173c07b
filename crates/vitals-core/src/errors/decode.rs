// ABOUTME: Decode error types for loosely-typed backend metric payloads
// ABOUTME: Names the offending field and raw value, and wraps the first failure of a batch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitals Engine Contributors

use super::ErrorCode;
use thiserror::Error;

/// Failure to decode a single backend record.
///
/// Decoding is atomic: any of these voids the whole record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A numeric or date field held a value that could not be parsed
    #[error("field `{field}` has unparseable value {raw_value:?}")]
    FieldParse {
        /// Backend field name (e.g. `H`, `BP_DT`)
        field: &'static str,
        /// The raw value as delivered, rendered as text
        raw_value: String,
    },
    /// A required field is absent or null
    #[error("required field `{field}` is missing")]
    MissingField {
        /// Backend field name
        field: &'static str,
    },
    /// The batch member is not a field map
    #[error("expected a record object, found {found}")]
    NotAnObject {
        /// JSON type that was found instead
        found: &'static str,
    },
}

impl DecodeError {
    /// Create a field parse error
    #[must_use]
    pub fn field_parse(field: &'static str, raw_value: impl Into<String>) -> Self {
        Self::FieldParse {
            field,
            raw_value: raw_value.into(),
        }
    }

    /// Create a missing field error
    #[must_use]
    pub const fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Name of the field that failed, if the error is field-specific
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::FieldParse { field, .. } | Self::MissingField { field } => Some(*field),
            Self::NotAnObject { .. } => None,
        }
    }

    /// Error code for presentation layers
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::FieldParse { .. } | Self::NotAnObject { .. } => ErrorCode::InvalidFormat,
            Self::MissingField { .. } => ErrorCode::MissingRequiredField,
        }
    }
}

/// Failure to decode a batch of backend records.
///
/// A batch is all-or-nothing: one bad member voids the whole batch and the
/// caller keeps its previous series.
#[derive(Debug, Error)]
pub enum BatchDecodeError {
    /// The first member that failed to decode
    #[error("record {index} of batch failed to decode: {source}")]
    Record {
        /// Zero-based position of the failing record in the batch
        index: usize,
        /// Underlying record error
        #[source]
        source: DecodeError,
    },
    /// The payload is not a JSON array of records
    #[error("payload is not a JSON array of records: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl BatchDecodeError {
    /// The record-level error that voided the batch, if any
    #[must_use]
    pub const fn record_error(&self) -> Option<&DecodeError> {
        match self {
            Self::Record { source, .. } => Some(source),
            Self::Malformed(_) => None,
        }
    }

    /// Error code for presentation layers
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Record { source, .. } => source.code(),
            Self::Malformed(_) => ErrorCode::InvalidFormat,
        }
    }
}
