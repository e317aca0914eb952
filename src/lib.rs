// SPDX-License-Identifier: MPL-2.0
//! `bubble_bar` is the state and logic core of an accessibility-aware bubble
//! tab bar for touch interfaces.
//!
//! It resolves a declared bar configuration against live OS accessibility
//! signals, drives swipeable paging with edge-qualified drags, and computes
//! the geometry of the moving selection indicator. Drawing is left to the
//! host's renderer.

#![doc(html_root_url = "https://docs.rs/bubble_bar/0.3.0")]

pub mod accessibility;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;

pub use accessibility::{AccessibilitySignals, DynamicTextScale, EffectiveConfiguration};
pub use config::Configuration;
pub use error::{Error, Result};
pub use ui::bar::{BubbleBar, Event, Message};
pub use ui::tab_item::TabItem;

#[cfg(test)]
pub(crate) mod test_utils;
