// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use bubble_bar::config::{
        ACCESSIBILITY_BAR_HEIGHT, DEFAULT_MIN_BAR_HEIGHT, REDUCED_TRANSPARENCY_BUBBLE_OPACITY,
    };
    use bubble_bar::ui::design_tokens::{opacity, palette, sizing, spacing};
    use bubble_bar::ui::style::{Preset, Style};
    use bubble_bar::ui::theming::{ColorScheme, ThemeMode};

    #[test]
    fn design_tokens_are_accessible() {
        // Palette
        let _ = palette::FOREST;
        let _ = palette::WHITE;

        // Spacing
        let _ = spacing::CONTAINER;

        // Opacity
        let _ = opacity::BUBBLE_FILL;

        // Sizing
        let _ = sizing::TOUCH_TARGET;
    }

    #[test]
    fn config_defaults_come_from_tokens() {
        assert_eq!(DEFAULT_MIN_BAR_HEIGHT, sizing::BAR_MIN_HEIGHT);
        assert_eq!(ACCESSIBILITY_BAR_HEIGHT, sizing::ACCESSIBILITY_BAR_HEIGHT);
        assert_eq!(REDUCED_TRANSPARENCY_BUBBLE_OPACITY, opacity::SOLID_BUBBLE);
    }

    #[test]
    fn theming_switches_correctly() {
        for preset in [Preset::Forest, Preset::Desert, Preset::NightOwl, Preset::Ocean] {
            let light = preset.colors(ThemeMode::Light.resolve());
            let dark = preset.colors(ThemeMode::Dark.resolve());

            // Bar surfaces should be visually opposite between light and dark
            assert!(light.bar_background.r > dark.bar_background.r, "{preset}");
            // The accent does not change
            assert_eq!(light.selected_item, dark.selected_item, "{preset}");
        }
    }

    #[test]
    fn high_contrast_selected_item_is_pure_ink() {
        let light = Style::HIGH_CONTRAST.colors(ColorScheme::Light);
        let dark = Style::HIGH_CONTRAST.colors(ColorScheme::Dark);
        assert_eq!(light.selected_item, palette::BLACK);
        assert_eq!(dark.selected_item, palette::WHITE);
    }

    #[test]
    fn bubbles_are_lighter_than_their_stroke() {
        for preset in Preset::ALL {
            let colors = preset.colors(ColorScheme::Light);
            assert!(colors.bubble_fill.a < colors.bubble_border.a, "{preset}");
        }
    }
}
