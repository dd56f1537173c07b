// ABOUTME: Health category labels produced by threshold classification
// ABOUTME: Declaration order follows severity so each metric's bands are monotonic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitals Engine Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification label for a metric value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// BMI below the normal band
    Underweight,
    /// Blood pressure below the normal band
    Low,
    /// Within the healthy band
    Normal,
    /// Blood pressure or lipids above normal
    Elevated,
    /// BMI above normal
    Overweight,
    /// BMI in the first obesity band
    MildObesity,
    /// BMI in the second obesity band
    ModerateObesity,
    /// Blood pressure or lipids in the top band
    High,
    /// BMI in the top band
    SevereObesity,
}

impl Category {
    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Underweight => "underweight",
            Self::Low => "low",
            Self::Normal => "normal",
            Self::Elevated => "elevated",
            Self::Overweight => "overweight",
            Self::MildObesity => "mild obesity",
            Self::ModerateObesity => "moderate obesity",
            Self::High => "high",
            Self::SevereObesity => "severe obesity",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
