// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Backend field names, date formats, batch sizes, and classification thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitals Engine Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Service identifiers for structured logging
pub mod service_names {
    /// Default service name attached to log output
    pub const VITALS_ENGINE: &str = "vitals-engine";
}

/// Backend payload field names
pub mod fields {
    /// BMI record: height in centimeters
    pub const BMI_HEIGHT: &str = "H";
    /// BMI record: weight in kilograms
    pub const BMI_WEIGHT: &str = "W";
    /// BMI record: measurement date
    pub const BMI_DATE: &str = "BMI_DT";
    /// Blood pressure record: pressure value
    pub const BLOOD_PRESSURE: &str = "BP";
    /// Blood pressure record: measurement date and time
    pub const BLOOD_PRESSURE_DATE: &str = "BP_DT";
    /// Blood sugar record: sugar level
    pub const BLOOD_SUGAR: &str = "BS";
    /// Blood sugar record: measurement date
    pub const BLOOD_SUGAR_DATE: &str = "BS_DT";
    /// Blood lipids record: lipid level
    pub const BLOOD_LIPIDS: &str = "BL";
    /// Blood lipids record: measurement date
    pub const BLOOD_LIPIDS_DATE: &str = "BL_DT";
    /// Optional backend record identifier (any metric)
    pub const RECORD_ID: &str = "ID";
    /// Optional RFC 3339 capture instant (any metric)
    pub const CAPTURED_AT: &str = "CAPTURED_AT";
}

/// `chrono` format strings for backend date fields
pub mod date_formats {
    /// Day-only dates (BMI, blood sugar, blood lipids)
    pub const DATE: &str = "%Y-%m-%d";
    /// Dates with time of day (blood pressure)
    pub const DATE_TIME: &str = "%Y-%m-%d %H:%M:%S";
}

/// Positional batch sizes for chart resolutions
pub mod batching {
    /// "Every 7" chart resolution
    pub const SHORT_BATCH_SIZE: usize = 7;
    /// "Every 30" chart resolution
    pub const LONG_BATCH_SIZE: usize = 30;
}

/// Unit conversion constants
pub mod units {
    /// Centimeters in one meter (BMI height conversion)
    pub const CENTIMETERS_PER_METER: f64 = 100.0;
}

/// Change notification defaults
pub mod notifications {
    /// Default broadcast channel capacity for series change events
    pub const DEFAULT_NOTIFY_BUFFER: usize = 64;
}

/// Upper bounds (exclusive) of the classification bands
pub mod thresholds {
    /// Body-mass index bands (kg/m²)
    pub mod bmi {
        /// Below this: underweight
        pub const UNDERWEIGHT_BELOW: f64 = 18.5;
        /// Below this: normal
        pub const NORMAL_BELOW: f64 = 24.0;
        /// Below this: overweight
        pub const OVERWEIGHT_BELOW: f64 = 27.0;
        /// Below this: mild obesity
        pub const MILD_OBESITY_BELOW: f64 = 30.0;
        /// Below this: moderate obesity, at or above: severe obesity
        pub const MODERATE_OBESITY_BELOW: f64 = 35.0;
    }

    /// Blood pressure bands (mmHg)
    pub mod blood_pressure {
        /// Below this: low
        pub const LOW_BELOW: f64 = 90.0;
        /// Below this: normal
        pub const NORMAL_BELOW: f64 = 121.0;
        /// Below this: elevated
        pub const ELEVATED_BELOW: f64 = 139.0;
        /// Below this: high, at or above: also high
        pub const HIGH_BELOW: f64 = 159.0;
    }

    /// Blood lipid bands (mg/dL)
    pub mod blood_lipids {
        /// Below this: normal
        pub const NORMAL_BELOW: f64 = 200.0;
        /// Below this: elevated, at or above: high
        pub const ELEVATED_BELOW: f64 = 241.0;
    }
}
