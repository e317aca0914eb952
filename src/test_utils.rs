// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and other common test helpers.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

// Re-export approx macros for convenient use in tests
pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use crate::ui::tab_item::TabItem;

/// Default epsilon for f32 comparisons.
pub const F32_EPSILON: f32 = 1e-6;

/// Builds `count` items labelled "Tab 0", "Tab 1", ...
pub fn numbered_items(count: usize) -> Vec<TabItem> {
    (0..count)
        .map(|i| TabItem::new(format!("icon-{i}"), format!("Tab {i}")))
        .collect()
}
