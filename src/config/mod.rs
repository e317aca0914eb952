// SPDX-License-Identifier: MPL-2.0
//! The configuration store: every visual and behavioral knob a host declares.
//!
//! [`Configuration`] is a plain record with validated setters. It performs no
//! layout math and knows nothing about accessibility; the resolver in
//! [`crate::accessibility`] derives the render-ready
//! [`EffectiveConfiguration`](crate::accessibility::EffectiveConfiguration)
//! from it.
//!
//! Each setter records which field changed so a renderer can re-render
//! minimally (see [`Configuration::take_changes`]).
//!
//! # Examples
//!
//! ```
//! use bubble_bar::config::{Configuration, ConfigField, SwipeBehavior};
//! use bubble_bar::ui::style::Preset;
//!
//! let mut config = Configuration::default();
//! config.set_style(Preset::Desert);
//! config.set_swipe_behavior(SwipeBehavior::Full);
//! config.set_item_spacing(6.0, 10.0).expect("valid spacing");
//!
//! assert!(config.set_item_spacing(-1.0, 10.0).is_err());
//! assert_eq!(
//!     config.take_changes(),
//!     vec![ConfigField::Style, ConfigField::ItemSpacing, ConfigField::SwipeBehavior]
//! );
//! ```

pub mod defaults;
pub mod file;

// Re-export all default constants for convenience
pub use defaults::*;

use crate::domain::ui::{finite, Length, Opacity};
use crate::error::{Error, Result};
use crate::ui::animation::{AnimationCurve, ContentTransition, MAX_CURVE_SECONDS};
use crate::ui::style::Style;
use iced_core::{Color, Padding, Size, Vector};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// =============================================================================
// Enums
// =============================================================================

/// When item labels are drawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LabelVisibility {
    Always,
    #[default]
    WhenSelected,
    Never,
}

impl LabelVisibility {
    /// Returns true if the label of an item with the given selection state is drawn.
    #[must_use]
    pub fn shows_label(self, is_selected: bool) -> bool {
        match self {
            LabelVisibility::Always => true,
            LabelVisibility::WhenSelected => is_selected,
            LabelVisibility::Never => false,
        }
    }
}

/// Where the label sits relative to the icon.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LabelPosition {
    Top,
    Bottom,
    Left,
    #[default]
    Right,
}

impl LabelPosition {
    /// Top and bottom labels stack vertically and may need to shrink.
    #[must_use]
    pub fn is_stacked(self) -> bool {
        matches!(self, LabelPosition::Top | LabelPosition::Bottom)
    }
}

/// Where the selection indicator is drawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum IndicatorPosition {
    /// A bubble behind the item.
    #[default]
    Center,
    /// A line above the item.
    Top,
    /// A line below the item.
    Bottom,
}

/// Whether the paged content may be swiped.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SwipeBehavior {
    #[default]
    Disabled,
    /// Only drags starting near the left or right edge.
    EdgesOnly,
    Full,
}

/// Outline of the container, the items and the bubble.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Shape {
    Rectangle,
    RoundedRectangle { corner_radius: f32 },
    Capsule,
    Circle,
}

impl Shape {
    /// Corner radius of the shape drawn inside `bounds`.
    #[must_use]
    pub fn corner_radius(self, bounds: Size) -> f32 {
        let half_short = bounds.width.min(bounds.height) / 2.0;
        match self {
            Shape::Rectangle => 0.0,
            Shape::RoundedRectangle { corner_radius } => corner_radius.min(half_short),
            Shape::Capsule | Shape::Circle => half_short,
        }
    }

    fn validate(self, field: &'static str) -> Result<Self> {
        if let Shape::RoundedRectangle { corner_radius } = self {
            Length::new(field, corner_radius)?;
        }
        Ok(self)
    }
}

/// Blur material behind a glass bar.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Material {
    UltraThin,
    Thin,
    Regular,
    Thick,
    UltraThick,
}

/// Semantic text style, scaled by the renderer with the dynamic text size.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TextStyle {
    LargeTitle,
    Title,
    Title2,
    Title3,
    Headline,
    Body,
    Callout,
    Subheadline,
    Footnote,
    Caption,
    Caption2,
}

/// Spacing between items, chosen by text size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemSpacing {
    pub regular: f32,
    pub accessibility: f32,
}

/// Shadow geometry. The shadow color belongs to the style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowGeometry {
    pub radius: f32,
    pub offset: Vector,
}

/// Glass (blurred, tinted) background settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glass {
    pub enabled: bool,
    pub blur_radius: f32,
    pub opacity: Opacity,
    pub tint: Color,
    pub material: Option<Material>,
}

/// Identifies the field touched by a setter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfigField {
    Style,
    Animation,
    ViewTransitionAnimation,
    ViewTransition,
    LabelVisibility,
    LabelPosition,
    IndicatorPosition,
    Shape,
    ItemShape,
    Padding,
    InnerPadding,
    ItemPadding,
    ItemSpacing,
    EqualItemSizing,
    AdaptiveItemsWidth,
    Size,
    MinBarHeight,
    ItemSize,
    IndicatorSize,
    Shadow,
    Glass,
    Visibility,
    ContentBottomPadding,
    MinimumTouchTarget,
    AccessibilitySpacing,
    TextStyles,
    ConsistentSizing,
    SwipeBehavior,
    ForceHighContrast,
    Locale,
}

// =============================================================================
// Configuration
// =============================================================================

/// User-declared bar configuration.
///
/// `original_style` mirrors the last style set by the host and is the value
/// restored when increased contrast turns off. Only [`Configuration::set_style`]
/// and [`Configuration::set_shadow`] write it.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub(crate) style: Style,
    pub(crate) original_style: Style,
    pub(crate) animation: AnimationCurve,
    pub(crate) view_transition_animation: AnimationCurve,
    pub(crate) view_transition: ContentTransition,
    pub(crate) label_visibility: LabelVisibility,
    pub(crate) label_position: LabelPosition,
    pub(crate) indicator_position: IndicatorPosition,
    pub(crate) shape: Shape,
    pub(crate) item_shape: Shape,
    pub(crate) padding: Padding,
    pub(crate) inner_padding: Padding,
    pub(crate) item_padding: Padding,
    pub(crate) item_spacing: ItemSpacing,
    pub(crate) equal_item_sizing: bool,
    pub(crate) adaptive_items_width: bool,
    pub(crate) size: Option<Size>,
    pub(crate) min_bar_height: f32,
    pub(crate) item_width: Option<f32>,
    pub(crate) item_height: Option<f32>,
    pub(crate) indicator_width: Option<f32>,
    pub(crate) indicator_height: Option<f32>,
    pub(crate) shadow: ShadowGeometry,
    pub(crate) glass: Glass,
    pub(crate) visible: bool,
    pub(crate) content_bottom_padding: f32,
    pub(crate) minimum_touch_target: Size,
    pub(crate) accessibility_spacing: Padding,
    pub(crate) icon_text_style: TextStyle,
    pub(crate) label_text_style: TextStyle,
    pub(crate) use_consistent_sizing: bool,
    pub(crate) swipe_behavior: SwipeBehavior,
    pub(crate) force_high_contrast: bool,
    pub(crate) locale: Option<String>,
    changes: BTreeSet<ConfigField>,
}

impl Default for Configuration {
    fn default() -> Self {
        let style = Style::default();
        Self {
            original_style: style.clone(),
            style,
            animation: AnimationCurve::default(),
            view_transition_animation: AnimationCurve::Smooth,
            view_transition: ContentTransition::Opacity,
            label_visibility: LabelVisibility::default(),
            label_position: LabelPosition::default(),
            indicator_position: IndicatorPosition::default(),
            shape: Shape::RoundedRectangle {
                corner_radius: DEFAULT_CONTAINER_RADIUS,
            },
            item_shape: Shape::RoundedRectangle {
                corner_radius: DEFAULT_ITEM_RADIUS,
            },
            padding: Padding::new(DEFAULT_CONTAINER_PADDING),
            inner_padding: Padding::new(DEFAULT_INNER_PADDING),
            item_padding: Padding {
                top: DEFAULT_ITEM_PADDING_VERTICAL,
                right: DEFAULT_ITEM_PADDING_HORIZONTAL,
                bottom: DEFAULT_ITEM_PADDING_VERTICAL,
                left: DEFAULT_ITEM_PADDING_HORIZONTAL,
            },
            item_spacing: ItemSpacing {
                regular: DEFAULT_ITEM_SPACING,
                accessibility: DEFAULT_ITEM_SPACING_ACCESSIBILITY,
            },
            equal_item_sizing: false,
            adaptive_items_width: false,
            size: None,
            min_bar_height: DEFAULT_MIN_BAR_HEIGHT,
            item_width: None,
            item_height: None,
            indicator_width: None,
            indicator_height: None,
            shadow: ShadowGeometry {
                radius: DEFAULT_SHADOW_RADIUS,
                offset: Vector::new(0.0, 0.0),
            },
            glass: Glass {
                enabled: false,
                blur_radius: DEFAULT_GLASS_BLUR_RADIUS,
                opacity: Opacity::new(DEFAULT_GLASS_OPACITY),
                tint: Color::WHITE,
                material: None,
            },
            visible: true,
            content_bottom_padding: 0.0,
            minimum_touch_target: Size::new(DEFAULT_TOUCH_TARGET, DEFAULT_TOUCH_TARGET),
            accessibility_spacing: Padding {
                top: 0.0,
                right: DEFAULT_ACCESSIBILITY_EDGE_SPACING,
                bottom: 0.0,
                left: DEFAULT_ACCESSIBILITY_EDGE_SPACING,
            },
            icon_text_style: TextStyle::Title2,
            label_text_style: TextStyle::Caption,
            use_consistent_sizing: true,
            swipe_behavior: SwipeBehavior::default(),
            force_high_contrast: false,
            locale: None,
            changes: BTreeSet::new(),
        }
    }
}

fn validate_padding(field: &'static str, padding: Padding) -> Result<Padding> {
    for side in [padding.top, padding.right, padding.bottom, padding.left] {
        Length::new(field, side)?;
    }
    Ok(padding)
}

fn validate_optional(field: &'static str, value: Option<f32>) -> Result<Option<f32>> {
    value
        .map(|v| Length::new(field, v).map(Length::value))
        .transpose()
}

fn validate_curve_seconds(field: &'static str, secs: f32) -> Result<()> {
    let secs = Length::new(field, secs)?.value();
    if secs > MAX_CURVE_SECONDS {
        return Err(Error::invalid(
            field,
            format!("{secs} exceeds {MAX_CURVE_SECONDS} seconds"),
        ));
    }
    Ok(())
}

fn validate_curve(field: &'static str, curve: AnimationCurve) -> Result<AnimationCurve> {
    match curve {
        AnimationCurve::Spring {
            response,
            damping_fraction,
        } => {
            validate_curve_seconds(field, response)?;
            Length::new(field, damping_fraction)?;
        }
        AnimationCurve::EaseOut { duration }
        | AnimationCurve::EaseInOut { duration }
        | AnimationCurve::Linear { duration } => {
            validate_curve_seconds(field, duration)?;
        }
        AnimationCurve::Smooth | AnimationCurve::Default => {}
    }
    Ok(curve)
}

impl Configuration {
    /// Creates a default configuration with the given style.
    #[must_use]
    pub fn with_style(style: impl Into<Style>) -> Self {
        let mut config = Self::default();
        config.set_style(style);
        config.changes.clear();
        config
    }

    fn mark(&mut self, field: ConfigField) {
        self.changes.insert(field);
    }

    /// Drains the set of fields changed since the last call, in field order.
    pub fn take_changes(&mut self) -> Vec<ConfigField> {
        std::mem::take(&mut self.changes).into_iter().collect()
    }

    /// Returns true if any setter ran since the last [`Self::take_changes`].
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    pub(crate) fn clear_changes(&mut self) {
        self.changes.clear();
    }

    // -------------------------------------------------------------------------
    // Style
    // -------------------------------------------------------------------------

    /// Sets the style the host wants. This is the only way, besides
    /// [`Self::set_shadow`], to change the style restored after high contrast.
    pub fn set_style(&mut self, style: impl Into<Style>) {
        let style = style.into();
        self.original_style = style.clone();
        self.style = style;
        self.mark(ConfigField::Style);
    }

    #[must_use]
    pub fn style(&self) -> &Style {
        &self.style
    }

    #[must_use]
    pub fn original_style(&self) -> &Style {
        &self.original_style
    }

    /// Sets shadow geometry and color. The color is folded into a copy of the
    /// declared style, which therefore stops following light/dark changes.
    ///
    /// # Errors
    ///
    /// Rejects a negative or non-finite radius and a non-finite offset.
    pub fn set_shadow(&mut self, radius: f32, color: Color, offset: Vector) -> Result<()> {
        let radius = Length::new("shadow_radius", radius)?.value();
        let offset = Vector::new(
            finite("shadow_offset", offset.x)?,
            finite("shadow_offset", offset.y)?,
        );
        self.shadow = ShadowGeometry { radius, offset };
        let style = self.original_style.copy_with_modified_colors(|mut colors| {
            colors.bar_shadow = color;
            colors
        });
        self.set_style(style);
        self.mark(ConfigField::Shadow);
        Ok(())
    }

    #[must_use]
    pub fn shadow(&self) -> ShadowGeometry {
        self.shadow
    }

    /// Forces the high contrast style regardless of the OS setting.
    pub fn set_force_high_contrast(&mut self, enabled: bool) {
        self.force_high_contrast = enabled;
        self.mark(ConfigField::ForceHighContrast);
    }

    #[must_use]
    pub fn force_high_contrast(&self) -> bool {
        self.force_high_contrast
    }

    // -------------------------------------------------------------------------
    // Motion
    // -------------------------------------------------------------------------

    /// # Errors
    ///
    /// Rejects curves with negative or non-finite parameters, or durations
    /// above [`MAX_CURVE_SECONDS`].
    pub fn set_animation(&mut self, curve: AnimationCurve) -> Result<()> {
        self.animation = validate_curve("animation", curve)?;
        self.mark(ConfigField::Animation);
        Ok(())
    }

    #[must_use]
    pub fn animation(&self) -> AnimationCurve {
        self.animation
    }

    /// # Errors
    ///
    /// Rejects curves with negative or non-finite parameters, or durations
    /// above [`MAX_CURVE_SECONDS`].
    pub fn set_view_transition_animation(&mut self, curve: AnimationCurve) -> Result<()> {
        self.view_transition_animation = validate_curve("view_transition_animation", curve)?;
        self.mark(ConfigField::ViewTransitionAnimation);
        Ok(())
    }

    #[must_use]
    pub fn view_transition_animation(&self) -> AnimationCurve {
        self.view_transition_animation
    }

    pub fn set_view_transition(&mut self, transition: ContentTransition) {
        self.view_transition = transition;
        self.mark(ConfigField::ViewTransition);
    }

    #[must_use]
    pub fn view_transition(&self) -> ContentTransition {
        self.view_transition
    }

    // -------------------------------------------------------------------------
    // Labels and indicator
    // -------------------------------------------------------------------------

    pub fn set_label_visibility(&mut self, visibility: LabelVisibility) {
        self.label_visibility = visibility;
        self.mark(ConfigField::LabelVisibility);
    }

    #[must_use]
    pub fn label_visibility(&self) -> LabelVisibility {
        self.label_visibility
    }

    pub fn set_label_position(&mut self, position: LabelPosition) {
        self.label_position = position;
        self.mark(ConfigField::LabelPosition);
    }

    #[must_use]
    pub fn label_position(&self) -> LabelPosition {
        self.label_position
    }

    pub fn set_indicator_position(&mut self, position: IndicatorPosition) {
        self.indicator_position = position;
        self.mark(ConfigField::IndicatorPosition);
    }

    #[must_use]
    pub fn indicator_position(&self) -> IndicatorPosition {
        self.indicator_position
    }

    /// Sets explicit indicator dimensions; `None` keeps the automatic value.
    ///
    /// # Errors
    ///
    /// Rejects negative or non-finite dimensions.
    pub fn set_indicator_size(&mut self, width: Option<f32>, height: Option<f32>) -> Result<()> {
        let width = validate_optional("indicator_width", width)?;
        let height = validate_optional("indicator_height", height)?;
        self.indicator_width = width;
        self.indicator_height = height;
        self.mark(ConfigField::IndicatorSize);
        Ok(())
    }

    #[must_use]
    pub fn indicator_width(&self) -> Option<f32> {
        self.indicator_width
    }

    #[must_use]
    pub fn indicator_height(&self) -> Option<f32> {
        self.indicator_height
    }

    pub fn set_text_styles(&mut self, icon: TextStyle, label: TextStyle) {
        self.icon_text_style = icon;
        self.label_text_style = label;
        self.mark(ConfigField::TextStyles);
    }

    #[must_use]
    pub fn icon_text_style(&self) -> TextStyle {
        self.icon_text_style
    }

    #[must_use]
    pub fn label_text_style(&self) -> TextStyle {
        self.label_text_style
    }

    pub fn set_consistent_sizing(&mut self, enabled: bool) {
        self.use_consistent_sizing = enabled;
        self.mark(ConfigField::ConsistentSizing);
    }

    #[must_use]
    pub fn use_consistent_sizing(&self) -> bool {
        self.use_consistent_sizing
    }

    // -------------------------------------------------------------------------
    // Shapes
    // -------------------------------------------------------------------------

    /// # Errors
    ///
    /// Rejects a negative or non-finite corner radius.
    pub fn set_shape(&mut self, shape: Shape) -> Result<()> {
        self.shape = shape.validate("shape")?;
        self.mark(ConfigField::Shape);
        Ok(())
    }

    #[must_use]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// # Errors
    ///
    /// Rejects a negative or non-finite corner radius.
    pub fn set_item_shape(&mut self, shape: Shape) -> Result<()> {
        self.item_shape = shape.validate("item_shape")?;
        self.mark(ConfigField::ItemShape);
        Ok(())
    }

    #[must_use]
    pub fn item_shape(&self) -> Shape {
        self.item_shape
    }

    // -------------------------------------------------------------------------
    // Padding and spacing
    // -------------------------------------------------------------------------

    /// Padding around the container.
    ///
    /// # Errors
    ///
    /// Rejects negative or non-finite sides.
    pub fn set_padding(&mut self, padding: Padding) -> Result<()> {
        self.padding = validate_padding("padding", padding)?;
        self.mark(ConfigField::Padding);
        Ok(())
    }

    #[must_use]
    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// # Errors
    ///
    /// Rejects negative or non-finite sides.
    pub fn set_inner_padding(&mut self, padding: Padding) -> Result<()> {
        self.inner_padding = validate_padding("inner_padding", padding)?;
        self.mark(ConfigField::InnerPadding);
        Ok(())
    }

    #[must_use]
    pub fn inner_padding(&self) -> Padding {
        self.inner_padding
    }

    /// # Errors
    ///
    /// Rejects negative or non-finite sides.
    pub fn set_item_padding(&mut self, padding: Padding) -> Result<()> {
        self.item_padding = validate_padding("item_padding", padding)?;
        self.mark(ConfigField::ItemPadding);
        Ok(())
    }

    #[must_use]
    pub fn item_padding(&self) -> Padding {
        self.item_padding
    }

    /// # Errors
    ///
    /// Rejects negative or non-finite spacing.
    pub fn set_item_spacing(&mut self, regular: f32, accessibility: f32) -> Result<()> {
        let regular = Length::new("item_spacing", regular)?.value();
        let accessibility = Length::new("item_spacing", accessibility)?.value();
        self.item_spacing = ItemSpacing {
            regular,
            accessibility,
        };
        self.mark(ConfigField::ItemSpacing);
        Ok(())
    }

    #[must_use]
    pub fn item_spacing(&self) -> ItemSpacing {
        self.item_spacing
    }

    /// # Errors
    ///
    /// Rejects negative or non-finite sides.
    pub fn set_accessibility_spacing(&mut self, spacing: Padding) -> Result<()> {
        self.accessibility_spacing = validate_padding("accessibility_spacing", spacing)?;
        self.mark(ConfigField::AccessibilitySpacing);
        Ok(())
    }

    #[must_use]
    pub fn accessibility_spacing(&self) -> Padding {
        self.accessibility_spacing
    }

    /// # Errors
    ///
    /// Rejects negative or non-finite padding.
    pub fn set_content_bottom_padding(&mut self, padding: f32) -> Result<()> {
        self.content_bottom_padding = Length::new("content_bottom_padding", padding)?.value();
        self.mark(ConfigField::ContentBottomPadding);
        Ok(())
    }

    #[must_use]
    pub fn content_bottom_padding(&self) -> f32 {
        self.content_bottom_padding
    }

    // -------------------------------------------------------------------------
    // Sizes
    // -------------------------------------------------------------------------

    pub fn set_equal_item_sizing(&mut self, enabled: bool) {
        self.equal_item_sizing = enabled;
        self.mark(ConfigField::EqualItemSizing);
    }

    #[must_use]
    pub fn equal_item_sizing(&self) -> bool {
        self.equal_item_sizing
    }

    pub fn set_adaptive_items_width(&mut self, enabled: bool) {
        self.adaptive_items_width = enabled;
        self.mark(ConfigField::AdaptiveItemsWidth);
    }

    #[must_use]
    pub fn adaptive_items_width(&self) -> bool {
        self.adaptive_items_width
    }

    /// Explicit bar size; `None` sizes the bar from the screen width.
    ///
    /// # Errors
    ///
    /// Rejects negative or non-finite dimensions.
    pub fn set_size(&mut self, size: Option<Size>) -> Result<()> {
        if let Some(size) = size {
            Length::new("size", size.width)?;
            Length::new("size", size.height)?;
        }
        self.size = size;
        self.mark(ConfigField::Size);
        Ok(())
    }

    #[must_use]
    pub fn size(&self) -> Option<Size> {
        self.size
    }

    /// # Errors
    ///
    /// Rejects negative or non-finite heights.
    pub fn set_min_bar_height(&mut self, height: f32) -> Result<()> {
        self.min_bar_height = Length::new("min_bar_height", height)?.value();
        self.mark(ConfigField::MinBarHeight);
        Ok(())
    }

    #[must_use]
    pub fn min_bar_height(&self) -> f32 {
        self.min_bar_height
    }

    /// # Errors
    ///
    /// Rejects negative or non-finite dimensions.
    pub fn set_item_size(&mut self, width: Option<f32>, height: Option<f32>) -> Result<()> {
        let width = validate_optional("item_width", width)?;
        let height = validate_optional("item_height", height)?;
        self.item_width = width;
        self.item_height = height;
        self.mark(ConfigField::ItemSize);
        Ok(())
    }

    #[must_use]
    pub fn item_width(&self) -> Option<f32> {
        self.item_width
    }

    #[must_use]
    pub fn item_height(&self) -> Option<f32> {
        self.item_height
    }

    /// # Errors
    ///
    /// Rejects negative or non-finite dimensions.
    pub fn set_minimum_touch_target(&mut self, size: Size) -> Result<()> {
        Length::new("minimum_touch_target", size.width)?;
        Length::new("minimum_touch_target", size.height)?;
        self.minimum_touch_target = size;
        self.mark(ConfigField::MinimumTouchTarget);
        Ok(())
    }

    #[must_use]
    pub fn minimum_touch_target(&self) -> Size {
        self.minimum_touch_target
    }

    // -------------------------------------------------------------------------
    // Glass
    // -------------------------------------------------------------------------

    pub fn set_glass(&mut self, enabled: bool, material: Option<Material>) {
        self.glass.enabled = enabled;
        self.glass.material = material;
        self.mark(ConfigField::Glass);
    }

    /// Sets the glass tint. The opacity is clamped to `[0, 1]`.
    pub fn set_glass_tint(&mut self, tint: Color, opacity: f32) {
        self.glass.tint = tint;
        self.glass.opacity = Opacity::new(opacity);
        self.mark(ConfigField::Glass);
    }

    /// # Errors
    ///
    /// Rejects negative or non-finite radii.
    pub fn set_glass_blur_radius(&mut self, radius: f32) -> Result<()> {
        self.glass.blur_radius = Length::new("glass_blur_radius", radius)?.value();
        self.mark(ConfigField::Glass);
        Ok(())
    }

    #[must_use]
    pub fn glass(&self) -> Glass {
        self.glass
    }

    // -------------------------------------------------------------------------
    // Behavior
    // -------------------------------------------------------------------------

    /// Shows or hides the bar.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.mark(ConfigField::Visibility);
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_swipe_behavior(&mut self, behavior: SwipeBehavior) {
        self.swipe_behavior = behavior;
        self.mark(ConfigField::SwipeBehavior);
    }

    #[must_use]
    pub fn swipe_behavior(&self) -> SwipeBehavior {
        self.swipe_behavior
    }

    /// Preferred locale for announcements and hints (e.g. "fr").
    ///
    /// # Errors
    ///
    /// Rejects an empty locale string.
    pub fn set_locale(&mut self, locale: Option<String>) -> Result<()> {
        if locale.as_deref().is_some_and(|l| l.trim().is_empty()) {
            return Err(Error::invalid("locale", "must not be empty"));
        }
        self.locale = locale;
        self.mark(ConfigField::Locale);
        Ok(())
    }

    #[must_use]
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::style::Preset;
    use crate::ui::theming::ColorScheme;

    #[test]
    fn default_style_is_forest() {
        let config = Configuration::default();
        assert_eq!(config.style(), &Style::Preset(Preset::Forest));
        assert_eq!(config.original_style(), config.style());
    }

    #[test]
    fn set_style_updates_original() {
        let mut config = Configuration::default();
        config.set_style(Preset::Ocean);
        assert_eq!(config.original_style(), &Style::Preset(Preset::Ocean));
        assert_eq!(config.style(), &Style::Preset(Preset::Ocean));
    }

    #[test]
    fn with_style_starts_clean() {
        let config = Configuration::with_style(Preset::Glass);
        assert!(!config.has_changes());
    }

    #[test]
    fn negative_spacing_is_rejected_without_mutation() {
        let mut config = Configuration::default();
        let before = config.item_spacing();
        let err = config.set_item_spacing(-2.0, 8.0).unwrap_err();
        assert!(matches!(err, Error::InvalidValue { field: "item_spacing", .. }));
        assert_eq!(config.item_spacing(), before);
        assert!(!config.has_changes());
    }

    #[test]
    fn non_finite_sizes_are_rejected() {
        let mut config = Configuration::default();
        assert!(config.set_size(Some(Size::new(f32::NAN, 60.0))).is_err());
        assert!(config.set_item_size(Some(f32::INFINITY), None).is_err());
        assert!(config.set_indicator_size(None, Some(-4.0)).is_err());
        assert_eq!(config.size(), None);
    }

    #[test]
    fn negative_padding_side_is_rejected() {
        let mut config = Configuration::default();
        let padding = Padding {
            top: 0.0,
            right: -1.0,
            bottom: 0.0,
            left: 0.0,
        };
        assert!(config.set_padding(padding).is_err());
        assert_eq!(config.padding(), Padding::new(DEFAULT_CONTAINER_PADDING));
    }

    #[test]
    fn glass_opacity_is_clamped() {
        let mut config = Configuration::default();
        config.set_glass_tint(Color::BLACK, 3.0);
        assert!(config.glass().opacity.is_opaque());
    }

    #[test]
    fn invalid_curve_is_rejected() {
        let mut config = Configuration::default();
        let curve = AnimationCurve::Linear { duration: -0.1 };
        assert!(config.set_animation(curve).is_err());
        assert_eq!(config.animation(), AnimationCurve::default());
    }

    #[test]
    fn overlong_curves_are_rejected() {
        let mut config = Configuration::default();
        let err = config
            .set_animation(AnimationCurve::EaseOut { duration: 1e20 })
            .unwrap_err();
        assert!(matches!(err, Error::InvalidValue { field: "animation", .. }));
        assert!(config
            .set_view_transition_animation(AnimationCurve::Spring {
                response: MAX_CURVE_SECONDS + 1.0,
                damping_fraction: 0.7,
            })
            .is_err());
        assert_eq!(config.animation(), AnimationCurve::default());

        let longest = AnimationCurve::Linear {
            duration: MAX_CURVE_SECONDS,
        };
        assert!(config.set_animation(longest).is_ok());
    }

    #[test]
    fn changes_are_drained_once() {
        let mut config = Configuration::default();
        config.set_visible(false);
        config.set_visible(true);
        config.set_label_position(LabelPosition::Bottom);
        assert_eq!(
            config.take_changes(),
            vec![ConfigField::LabelPosition, ConfigField::Visibility]
        );
        assert!(config.take_changes().is_empty());
    }

    #[test]
    fn shadow_color_is_folded_into_style() {
        let mut config = Configuration::default();
        config
            .set_shadow(6.0, Color::BLACK, Vector::new(0.0, 2.0))
            .expect("valid shadow");
        assert_eq!(config.shadow().radius, 6.0);
        let colors = config.style().colors(ColorScheme::Dark);
        assert_eq!(colors.bar_shadow, Color::BLACK);
        assert_eq!(config.original_style(), config.style());
    }

    #[test]
    fn label_visibility_policies() {
        assert!(LabelVisibility::Always.shows_label(false));
        assert!(LabelVisibility::WhenSelected.shows_label(true));
        assert!(!LabelVisibility::WhenSelected.shows_label(false));
        assert!(!LabelVisibility::Never.shows_label(true));
    }

    #[test]
    fn capsule_radius_is_half_the_short_side() {
        let size = Size::new(120.0, 40.0);
        assert_eq!(Shape::Capsule.corner_radius(size), 20.0);
        assert_eq!(
            Shape::RoundedRectangle { corner_radius: 28.0 }.corner_radius(size),
            20.0
        );
        assert_eq!(Shape::Rectangle.corner_radius(size), 0.0);
    }

    #[test]
    fn empty_locale_is_rejected() {
        let mut config = Configuration::default();
        assert!(config.set_locale(Some("  ".into())).is_err());
        assert!(config.set_locale(Some("fr".into())).is_ok());
        assert_eq!(config.locale(), Some("fr"));
    }
}
