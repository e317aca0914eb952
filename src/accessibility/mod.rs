// SPDX-License-Identifier: MPL-2.0
//! Accessibility signals and the configuration resolver.
//!
//! Signals are read-only snapshots of OS preferences. The host forwards a new
//! [`AccessibilitySignals`] whenever the platform reports a change and the
//! bar recomputes its [`EffectiveConfiguration`].

pub mod resolver;

pub use resolver::{resolve_accessibility, EffectiveConfiguration};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered user text size preference.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum DynamicTextScale {
    XSmall,
    Small,
    Medium,
    #[default]
    Large,
    XLarge,
    XxLarge,
    XxxLarge,
    Accessibility1,
    Accessibility2,
    Accessibility3,
    Accessibility4,
    Accessibility5,
}

impl DynamicTextScale {
    pub const ALL: [DynamicTextScale; 12] = [
        DynamicTextScale::XSmall,
        DynamicTextScale::Small,
        DynamicTextScale::Medium,
        DynamicTextScale::Large,
        DynamicTextScale::XLarge,
        DynamicTextScale::XxLarge,
        DynamicTextScale::XxxLarge,
        DynamicTextScale::Accessibility1,
        DynamicTextScale::Accessibility2,
        DynamicTextScale::Accessibility3,
        DynamicTextScale::Accessibility4,
        DynamicTextScale::Accessibility5,
    ];

    /// Returns true for the accessibility buckets, which trigger layout changes.
    #[must_use]
    pub fn is_large_accessibility_size(self) -> bool {
        self >= DynamicTextScale::Accessibility1
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            DynamicTextScale::XSmall => "x-small",
            DynamicTextScale::Small => "small",
            DynamicTextScale::Medium => "medium",
            DynamicTextScale::Large => "large",
            DynamicTextScale::XLarge => "x-large",
            DynamicTextScale::XxLarge => "xx-large",
            DynamicTextScale::XxxLarge => "xxx-large",
            DynamicTextScale::Accessibility1 => "accessibility1",
            DynamicTextScale::Accessibility2 => "accessibility2",
            DynamicTextScale::Accessibility3 => "accessibility3",
            DynamicTextScale::Accessibility4 => "accessibility4",
            DynamicTextScale::Accessibility5 => "accessibility5",
        }
    }
}

impl fmt::Display for DynamicTextScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DynamicTextScale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        DynamicTextScale::ALL
            .into_iter()
            .find(|scale| scale.name() == wanted)
            .ok_or_else(|| format!("unknown text size '{s}'"))
    }
}

/// Snapshot of the OS accessibility preferences.
///
/// `increased_contrast` is the system setting only; the host override lives
/// on [`Configuration`](crate::config::Configuration) and the two are OR-ed
/// by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccessibilitySignals {
    pub text_scale: DynamicTextScale,
    pub reduce_motion: bool,
    pub reduce_transparency: bool,
    pub increased_contrast: bool,
}

impl AccessibilitySignals {
    /// Returns true if no signal asks for an adjustment.
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        !self.text_scale.is_large_accessibility_size()
            && !self.reduce_motion
            && !self.reduce_transparency
            && !self.increased_contrast
    }
}
