// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Layout**: Paddings, spacing and sizes of the bar and its items
//! - **Accessibility**: Floors applied for large text sizes
//! - **Glass**: Blur material defaults
//! - **Paging**: Swipe gesture thresholds

use crate::ui::design_tokens::{opacity, radius, sizing, spacing};

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Padding around the bar container, on every side.
pub const DEFAULT_CONTAINER_PADDING: f32 = spacing::CONTAINER;

/// Padding between the container edge and the items, on every side.
pub const DEFAULT_INNER_PADDING: f32 = spacing::INNER;

/// Vertical padding inside each item.
pub const DEFAULT_ITEM_PADDING_VERTICAL: f32 = spacing::ITEM_VERTICAL;

/// Horizontal padding inside each item.
pub const DEFAULT_ITEM_PADDING_HORIZONTAL: f32 = spacing::ITEM_HORIZONTAL;

/// Spacing between items at regular text sizes.
pub const DEFAULT_ITEM_SPACING: f32 = spacing::ITEM_REGULAR;

/// Spacing between items at accessibility text sizes.
pub const DEFAULT_ITEM_SPACING_ACCESSIBILITY: f32 = spacing::ITEM_ACCESSIBILITY;

/// Corner radius of the bar container.
pub const DEFAULT_CONTAINER_RADIUS: f32 = radius::CONTAINER;

/// Corner radius of each item and of the bubble.
pub const DEFAULT_ITEM_RADIUS: f32 = radius::ITEM;

/// Minimum bar height before accessibility adjustments.
pub const DEFAULT_MIN_BAR_HEIGHT: f32 = sizing::BAR_MIN_HEIGHT;

/// Shadow blur radius under the bar.
pub const DEFAULT_SHADOW_RADIUS: f32 = 1.0;

/// Minimum touch target edge length.
pub const DEFAULT_TOUCH_TARGET: f32 = sizing::TOUCH_TARGET;

// ==========================================================================
// Accessibility Defaults
// ==========================================================================

/// Bar height used for accessibility text sizes.
pub const ACCESSIBILITY_BAR_HEIGHT: f32 = sizing::ACCESSIBILITY_BAR_HEIGHT;

/// Floor for the container's leading/trailing padding at accessibility sizes.
pub const ACCESSIBILITY_MIN_CONTAINER_PADDING: f32 = spacing::CONTAINER;

/// Floor for the item's top/bottom padding at accessibility sizes.
pub const ACCESSIBILITY_MIN_ITEM_PADDING_VERTICAL: f32 = spacing::ITEM_VERTICAL;

/// Floor for the item's leading/trailing padding at accessibility sizes.
pub const ACCESSIBILITY_MIN_ITEM_PADDING_HORIZONTAL: f32 = spacing::ITEM_HORIZONTAL_ACCESSIBLE;

/// Leading/trailing inset reserved for accessibility layouts.
pub const DEFAULT_ACCESSIBILITY_EDGE_SPACING: f32 = spacing::ACCESSIBILITY_EDGE;

/// Bubble fill opacity forced when transparency is reduced.
pub const REDUCED_TRANSPARENCY_BUBBLE_OPACITY: f32 = opacity::SOLID_BUBBLE;

// ==========================================================================
// Glass Defaults
// ==========================================================================

/// Blur radius of the glass background.
pub const DEFAULT_GLASS_BLUR_RADIUS: f32 = 10.0;

/// Opacity of the glass tint.
pub const DEFAULT_GLASS_OPACITY: f32 = opacity::GLASS_TINT;

// ==========================================================================
// Paging Defaults
// ==========================================================================

/// Width of the band along each side where edge swipes may start, in points.
pub const EDGE_BAND_WIDTH: f32 = 50.0;

/// Fraction of the page width a drag must exceed to change page.
pub const COMMIT_THRESHOLD_FRACTION: f32 = 0.3;

/// Multiplier applied to drags past the first or last page.
pub const BOUNDARY_RESISTANCE: f32 = 0.3;

// ==========================================================================
// Validation
// ==========================================================================

const _: () = {
    assert!(ACCESSIBILITY_BAR_HEIGHT > DEFAULT_MIN_BAR_HEIGHT);
    assert!(REDUCED_TRANSPARENCY_BUBBLE_OPACITY >= 0.9);
    assert!(COMMIT_THRESHOLD_FRACTION > 0.0 && COMMIT_THRESHOLD_FRACTION < 1.0);
    assert!(BOUNDARY_RESISTANCE > 0.0 && BOUNDARY_RESISTANCE < 1.0);
    assert!(DEFAULT_ITEM_SPACING_ACCESSIBILITY >= DEFAULT_ITEM_SPACING);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessibility_floors_do_not_exceed_defaults() {
        // Applying the floors to a default configuration must be a no-op
        // for the item's vertical padding.
        assert!(ACCESSIBILITY_MIN_ITEM_PADDING_VERTICAL <= DEFAULT_ITEM_PADDING_VERTICAL);
        assert!(ACCESSIBILITY_MIN_CONTAINER_PADDING <= DEFAULT_CONTAINER_PADDING);
    }

    #[test]
    fn edge_band_fits_on_small_screens() {
        assert!(EDGE_BAND_WIDTH * 2.0 < 320.0);
    }
}
