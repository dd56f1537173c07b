// ABOUTME: Environment-based configuration for the vitals engine
// ABOUTME: Notification buffer size and default chart window and resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitals Engine Contributors

//! Engine configuration
//!
//! Environment-only: there are no configuration files. Unset variables fall
//! back to defaults; set but invalid variables are errors.

mod error;

pub use error::ConfigError;

use crate::aggregation::{ChartResolution, RangeWindow, ViewRequest};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::info;
use vitals_core::constants::notifications::DEFAULT_NOTIFY_BUFFER;

/// Change-notification channel capacity
pub const NOTIFY_BUFFER_VAR: &str = "VITALS_NOTIFY_BUFFER";
/// Default range window for views
pub const DEFAULT_WINDOW_VAR: &str = "VITALS_DEFAULT_WINDOW";
/// Default chart resolution for views
pub const DEFAULT_RESOLUTION_VAR: &str = "VITALS_DEFAULT_RESOLUTION";

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VitalsConfig {
    /// Capacity of each series' change channel
    pub notify_buffer_size: usize,
    /// Window applied when a chart does not ask for one
    pub default_window: RangeWindow,
    /// Resolution applied when a chart does not ask for one
    pub default_resolution: ChartResolution,
}

impl Default for VitalsConfig {
    fn default() -> Self {
        Self {
            notify_buffer_size: DEFAULT_NOTIFY_BUFFER,
            default_window: RangeWindow::Month,
            default_resolution: ChartResolution::Raw,
        }
    }
}

impl VitalsConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set to an unparseable or
    /// out-of-range value
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let notify_buffer_size = match env::var(NOTIFY_BUFFER_VAR) {
            Ok(value) => parse_buffer_size(&value)?,
            Err(_) => defaults.notify_buffer_size,
        };
        let default_window = match env::var(DEFAULT_WINDOW_VAR) {
            Ok(value) => RangeWindow::from_name(&value).ok_or(ConfigError::Parse {
                var: DEFAULT_WINDOW_VAR,
                value,
            })?,
            Err(_) => defaults.default_window,
        };
        let default_resolution = match env::var(DEFAULT_RESOLUTION_VAR) {
            Ok(value) => ChartResolution::from_name(&value).ok_or(ConfigError::Parse {
                var: DEFAULT_RESOLUTION_VAR,
                value,
            })?,
            Err(_) => defaults.default_resolution,
        };

        let config = Self {
            notify_buffer_size,
            default_window,
            default_resolution,
        };
        info!(
            config.notify_buffer = config.notify_buffer_size,
            config.window = %config.default_window,
            config.resolution = %config.default_resolution,
            "Loaded vitals configuration"
        );
        Ok(config)
    }

    /// View request built from the configured defaults
    #[must_use]
    pub const fn default_view(&self) -> ViewRequest {
        ViewRequest::new(Some(self.default_window), self.default_resolution)
    }
}

fn parse_buffer_size(value: &str) -> Result<usize, ConfigError> {
    let size: usize = value.trim().parse().map_err(|_| ConfigError::Parse {
        var: NOTIFY_BUFFER_VAR,
        value: value.to_owned(),
    })?;
    if size == 0 {
        return Err(ConfigError::ValueOutOfRange(
            "VITALS_NOTIFY_BUFFER must be greater than zero",
        ));
    }
    Ok(size)
}
