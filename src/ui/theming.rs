// SPDX-License-Identifier: MPL-2.0
//! Light/dark scheme selection.
//!
//! Styles are evaluated against a [`ColorScheme`]. Hosts either pass the
//! scheme they already track or let [`ThemeMode::System`] ask the OS.

use serde::{Deserialize, Serialize};

/// The concrete scheme a style is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    #[must_use]
    pub fn is_dark(self) -> bool {
        self == ColorScheme::Dark
    }

    /// Detects the system scheme, defaulting to dark on detection error.
    #[must_use]
    pub fn from_system() -> Self {
        if let Ok(dark_light::Mode::Light) = dark_light::detect() {
            ColorScheme::Light
        } else {
            ColorScheme::Dark
        }
    }
}

/// Host preference for the scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Resolves the preference to a concrete scheme.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn resolve(self) -> ColorScheme {
        match self {
            ThemeMode::Light => ColorScheme::Light,
            ThemeMode::Dark => ColorScheme::Dark,
            ThemeMode::System => ColorScheme::from_system(),
        }
    }

    /// Returns true if the effective theme is dark.
    #[must_use]
    pub fn is_dark(self) -> bool {
        self.resolve().is_dark()
    }
}
