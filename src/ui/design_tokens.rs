// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the bar's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors of the style presets
- **Opacity**: Standardized opacity levels
- **Spacing**: Paddings and item spacing
- **Sizing**: Bar, indicator and touch target sizes
- **Radius**: Container and item corner radii

## Examples

```
use bubble_bar::ui::design_tokens::{opacity, palette, spacing};
use iced_core::Color;

// Bubble fill for a preset primary color
let bubble = palette::FOREST.scale_alpha(opacity::BUBBLE_FILL);
assert!(bubble.a < 0.2);

// Use the spacing scale
let padding = spacing::CONTAINER; // 6px
assert!(padding > 0.0);
```
"#]

use iced_core::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const CLEAR: Color = Color::TRANSPARENT;
    pub const GRAY_500: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_SYSTEM: Color = Color::from_rgb(0.56, 0.56, 0.58);

    // Preset primaries
    pub const FOREST: Color = Color::from_rgb(0.2, 0.6, 0.3);
    pub const DESERT: Color = Color::from_rgb(0.8, 0.4, 0.2);
    pub const NIGHT_OWL: Color = Color::from_rgb(0.2, 0.4, 0.8);
    pub const OCEAN: Color = Color::from_rgb(0.0, 0.5, 0.8);
    pub const SYSTEM_BLUE: Color = Color::from_rgb(0.0, 0.478, 1.0);

    // Preset secondaries (unselected items, light scheme)
    pub const FOREST_MUTED: Color = Color::from_rgb(0.4, 0.5, 0.4);
    pub const DESERT_MUTED: Color = Color::from_rgb(0.5, 0.4, 0.3);
    pub const NIGHT_OWL_MUTED: Color = Color::from_rgb(0.7, 0.7, 0.8);
    pub const OCEAN_MUTED: Color = Color::from_rgb(0.3, 0.4, 0.5);

    // Bar surfaces
    pub const FOREST_SURFACE_LIGHT: Color = Color::from_rgb(0.9, 0.95, 0.9);
    pub const FOREST_SURFACE_DARK: Color = Color::from_rgb(0.1, 0.15, 0.1);
    pub const DESERT_SURFACE_LIGHT: Color = Color::from_rgb(0.95, 0.9, 0.85);
    pub const DESERT_SURFACE_DARK: Color = Color::from_rgb(0.2, 0.15, 0.1);
    pub const NIGHT_OWL_SURFACE_LIGHT: Color = Color::from_rgb(0.95, 0.95, 1.0);
    pub const NIGHT_SURFACE_DARK: Color = Color::from_rgb(0.1, 0.1, 0.15);
    pub const OCEAN_SURFACE_DARK: Color = Color::from_rgb(0.1, 0.15, 0.2);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const BUBBLE_FILL: f32 = 0.15;
    pub const BAR_STROKE: f32 = 0.2;
    pub const GLASS_TINT: f32 = 0.2;
    pub const SHADOW_SOFT: f32 = 0.3;
    pub const BUBBLE_STROKE: f32 = 0.4;
    pub const UNSELECTED_ON_DARK: f32 = 0.6;
    pub const GLASS_UNSELECTED: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Bubble fill when the OS asks for reduced transparency.
    pub const SOLID_BUBBLE: f32 = 0.9;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const INNER: f32 = 4.0;
    pub const CONTAINER: f32 = 6.0;
    pub const ITEM_REGULAR: f32 = 4.0;
    pub const ITEM_ACCESSIBILITY: f32 = 8.0;
    pub const ITEM_VERTICAL: f32 = 10.0;
    pub const ITEM_HORIZONTAL: f32 = 14.0;

    /// Horizontal item padding floor for accessibility text sizes.
    pub const ITEM_HORIZONTAL_ACCESSIBLE: f32 = 8.0;

    /// Leading/trailing inset reserved for accessibility layouts.
    pub const ACCESSIBILITY_EDGE: f32 = 24.0;

    /// Margin subtracted from the screen width when the bar has no explicit width.
    pub const SCREEN_MARGIN: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON: f32 = 24.0;

    /// Minimum tappable size - WCAG 2.5.5 compliant (44x44 minimum)
    pub const TOUCH_TARGET: f32 = 44.0;

    pub const BAR_MIN_HEIGHT: f32 = 54.0;
    pub const ACCESSIBILITY_BAR_HEIGHT: f32 = 64.0;
    pub const DEFAULT_ITEM_HEIGHT: f32 = 80.0;

    pub const INDICATOR_BUBBLE: f32 = 24.0;
    pub const INDICATOR_BUBBLE_LARGE: f32 = 36.0;
    pub const INDICATOR_LINE: f32 = 4.0;

    /// Vertical distance the bar slides when hidden.
    pub const HIDDEN_OFFSET: f32 = 100.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const ITEM: f32 = 24.0;
    pub const CONTAINER: f32 = 28.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SOLID_BUBBLE >= 0.9 && opacity::SOLID_BUBBLE <= 1.0);
    assert!(opacity::BUBBLE_FILL < opacity::BUBBLE_STROKE);

    assert!(spacing::ITEM_ACCESSIBILITY > spacing::ITEM_REGULAR);
    assert!(sizing::ACCESSIBILITY_BAR_HEIGHT > sizing::BAR_MIN_HEIGHT);
    assert!(sizing::INDICATOR_BUBBLE_LARGE > sizing::INDICATOR_BUBBLE);
    assert!(radius::CONTAINER > radius::ITEM);

    assert!(palette::FOREST.g >= 0.0 && palette::FOREST.g <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_primaries_are_not_grayscale() {
        for color in [palette::FOREST, palette::DESERT, palette::NIGHT_OWL, palette::OCEAN] {
            assert!(color.r != color.g || color.g != color.b);
        }
    }

    #[test]
    fn accessibility_bar_height_is_the_clamp_target() {
        assert_eq!(
            sizing::ACCESSIBILITY_BAR_HEIGHT.max(sizing::BAR_MIN_HEIGHT),
            64.0
        );
    }
}
