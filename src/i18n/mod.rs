// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the bar's accessibility strings.
//!
//! This module provides localization using the Fluent localization system.
//! It handles locale selection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Locale selection from configuration, then system settings
//! - `.ftl` translation files embedded at compile time
//! - Runtime language switching
//! - `MISSING: key` placeholders when translations are missing

pub mod fluent;

pub use fluent::I18n;
