// ABOUTME: Error codes and error module root for the vitals engine
// ABOUTME: Re-exports decode errors and defines the serializable ErrorCode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitals Engine Contributors

//! # Error Types
//!
//! Decode failures are the only fallible operations in the engine: upsert,
//! aggregation and classification are total over well-formed records.
//! Every error maps to an [`ErrorCode`] so presentation layers can react
//! without matching on individual variants.

mod decode;

pub use decode::{BatchDecodeError, DecodeError};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Standard error codes surfaced to presentation collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// A numeric or date field could not be parsed
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat,
    /// A required field is absent from the record
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField,
    /// Engine configuration is invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidFormat => "The data format is invalid",
            Self::MissingRequiredField => "A required field is missing from the record",
            Self::ConfigInvalid => "Configuration is invalid",
        }
    }

    /// Wire name of this code
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidFormat => "INVALID_FORMAT",
            Self::MissingRequiredField => "MISSING_REQUIRED_FIELD",
            Self::ConfigInvalid => "CONFIG_INVALID",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
