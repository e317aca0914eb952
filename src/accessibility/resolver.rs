// SPDX-License-Identifier: MPL-2.0
//! Accessibility resolution.
//!
//! [`resolve_accessibility`] applies the OS signals to a configuration in a
//! fixed order:
//!
//! 1. contrast (high contrast style, or the host's style restored),
//! 2. large text (bar height and padding floors),
//! 3. reduced motion (non-spring curves, cross-fade transitions),
//! 4. reduced transparency (no glass, solid bubble).
//!
//! Every rule either overwrites a field or raises it to a floor, and rule 1
//! rebuilds the style from `original_style` before rule 4 derives from it.
//! Applying the resolver twice with the same signals therefore yields the
//! same configuration as applying it once.

use super::AccessibilitySignals;
use crate::config::{
    Configuration, Glass, IndicatorPosition, ShadowGeometry, ACCESSIBILITY_BAR_HEIGHT,
    ACCESSIBILITY_MIN_CONTAINER_PADDING, ACCESSIBILITY_MIN_ITEM_PADDING_HORIZONTAL,
    ACCESSIBILITY_MIN_ITEM_PADDING_VERTICAL, REDUCED_TRANSPARENCY_BUBBLE_OPACITY,
};
use crate::ui::animation::{AnimationCurve, ContentTransition};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::style::{Colors, Style};
use crate::ui::theming::ColorScheme;

/// Applies the accessibility rules to `config` in place.
///
/// The host's declared style is never lost: `original_style` is read here but
/// only written by [`Configuration::set_style`].
pub fn resolve_accessibility(config: &mut Configuration, signals: &AccessibilitySignals) {
    let high_contrast = signals.increased_contrast || config.force_high_contrast;
    tracing::trace!(
        high_contrast,
        text_scale = %signals.text_scale,
        reduce_motion = signals.reduce_motion,
        reduce_transparency = signals.reduce_transparency,
        "resolving accessibility"
    );

    // 1. Contrast
    config.style = if high_contrast {
        Style::HIGH_CONTRAST
    } else {
        config.original_style.clone()
    };

    // 2. Text scale
    if signals.text_scale.is_large_accessibility_size() {
        if let Some(size) = config.size.as_mut() {
            size.height = ACCESSIBILITY_BAR_HEIGHT;
        }
        config.min_bar_height = config.min_bar_height.max(ACCESSIBILITY_BAR_HEIGHT);

        let padding = &mut config.padding;
        padding.left = padding.left.max(ACCESSIBILITY_MIN_CONTAINER_PADDING);
        padding.right = padding.right.max(ACCESSIBILITY_MIN_CONTAINER_PADDING);

        let item = &mut config.item_padding;
        item.top = item.top.max(ACCESSIBILITY_MIN_ITEM_PADDING_VERTICAL);
        item.bottom = item.bottom.max(ACCESSIBILITY_MIN_ITEM_PADDING_VERTICAL);
        item.left = item.left.max(ACCESSIBILITY_MIN_ITEM_PADDING_HORIZONTAL);
        item.right = item.right.max(ACCESSIBILITY_MIN_ITEM_PADDING_HORIZONTAL);
    }

    // 3. Reduced motion
    if signals.reduce_motion {
        config.animation = AnimationCurve::Default;
        config.view_transition_animation = AnimationCurve::Default;
        config.view_transition = config.view_transition.without_motion();
    }

    // 4. Reduced transparency
    if signals.reduce_transparency {
        config.glass.enabled = false;
        config.style = config.style.copy_with_modified_colors(|mut colors| {
            colors.bubble_fill.a = REDUCED_TRANSPARENCY_BUBBLE_OPACITY;
            colors
        });
    }
}

impl Configuration {
    /// Derives the render-ready configuration for the given signals.
    ///
    /// The declared configuration is left untouched, so a signal that clears
    /// later simply stops contributing to the next snapshot.
    #[must_use]
    pub fn effective(&self, signals: &AccessibilitySignals) -> EffectiveConfiguration {
        let mut resolved = self.clone();
        resolved.clear_changes();
        resolve_accessibility(&mut resolved, signals);
        EffectiveConfiguration {
            resolved,
            signals: *signals,
        }
    }
}

/// Accessibility-resolved configuration snapshot.
///
/// Immutable once built; the bar rebuilds it after every setter call and
/// signal change and hands it to the pager and the indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveConfiguration {
    resolved: Configuration,
    signals: AccessibilitySignals,
}

impl Default for EffectiveConfiguration {
    fn default() -> Self {
        Configuration::default().effective(&AccessibilitySignals::default())
    }
}

impl EffectiveConfiguration {
    /// The resolved configuration.
    #[must_use]
    pub fn config(&self) -> &Configuration {
        &self.resolved
    }

    /// Signals this snapshot was resolved against.
    #[must_use]
    pub fn signals(&self) -> &AccessibilitySignals {
        &self.signals
    }

    #[must_use]
    pub fn reduce_motion(&self) -> bool {
        self.signals.reduce_motion
    }

    #[must_use]
    pub fn is_large_text(&self) -> bool {
        self.signals.text_scale.is_large_accessibility_size()
    }

    #[must_use]
    pub fn style(&self) -> &Style {
        &self.resolved.style
    }

    /// Concrete colors for the current scheme.
    #[must_use]
    pub fn colors(&self, scheme: ColorScheme) -> Colors {
        self.resolved.style.colors(scheme)
    }

    #[must_use]
    pub fn glass(&self) -> Glass {
        self.resolved.glass
    }

    #[must_use]
    pub fn shadow(&self) -> ShadowGeometry {
        self.resolved.shadow
    }

    #[must_use]
    pub fn view_transition(&self) -> ContentTransition {
        self.resolved.view_transition
    }

    /// Spacing between items for the current text size.
    #[must_use]
    pub fn item_spacing(&self) -> f32 {
        let spacing = self.resolved.item_spacing;
        if self.is_large_text() {
            spacing.accessibility
        } else {
            spacing.regular
        }
    }

    /// Height of a centered bubble, or thickness of a top/bottom line.
    #[must_use]
    pub fn indicator_thickness(&self) -> f32 {
        if let Some(height) = self.resolved.indicator_height {
            return height;
        }
        match self.resolved.indicator_position {
            IndicatorPosition::Center if self.is_large_text() => sizing::INDICATOR_BUBBLE_LARGE,
            IndicatorPosition::Center => sizing::INDICATOR_BUBBLE,
            IndicatorPosition::Top | IndicatorPosition::Bottom => sizing::INDICATOR_LINE,
        }
    }

    /// Bar width: the explicit width, else the screen width minus margins.
    #[must_use]
    pub fn bar_width(&self, screen_width: f32) -> f32 {
        match self.resolved.size {
            Some(size) => size.width,
            None => (screen_width - spacing::SCREEN_MARGIN).max(0.0),
        }
    }

    /// Bar height including the container's vertical padding.
    #[must_use]
    pub fn bar_height(&self) -> f32 {
        let padding = self.resolved.padding;
        let content = match self.resolved.size {
            Some(size) => size.height,
            None => self
                .resolved
                .min_bar_height
                .max(self.resolved.item_height.unwrap_or(0.0)),
        };
        content.max(self.resolved.min_bar_height) + padding.top + padding.bottom
    }

    /// Vertical slide applied to the bar: zero when visible.
    #[must_use]
    pub fn hidden_offset(&self) -> f32 {
        if self.resolved.visible {
            0.0
        } else {
            sizing::HIDDEN_OFFSET
        }
    }

    /// Curve used for selection changes and page settles.
    #[must_use]
    pub fn settle_curve(&self) -> AnimationCurve {
        if self.reduce_motion() {
            AnimationCurve::Default
        } else {
            self.resolved.animation
        }
    }
}
