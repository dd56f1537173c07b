// ABOUTME: Configuration error types for engine environment settings
// ABOUTME: Defines error variants for unparseable and out-of-range values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitals Engine Contributors

//! Configuration error types.

use thiserror::Error;
use vitals_core::errors::ErrorCode;

/// Configuration-related errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Environment variable held a value that could not be parsed
    #[error("Parse error: {var} = {value:?}")]
    Parse {
        /// Environment variable name
        var: &'static str,
        /// Value found
        value: String,
    },

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl ConfigError {
    /// Error code for presentation layers
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        ErrorCode::ConfigInvalid
    }
}
