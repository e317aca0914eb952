// SPDX-License-Identifier: MPL-2.0
//! Declarative bar settings read from a TOML document.
//!
//! Every value is optional; missing values keep the configuration's defaults.
//! Values go through the validated [`Configuration`] setters, so a settings
//! file can never produce a configuration a host could not.
//!
//! # Examples
//!
//! ```
//! use bubble_bar::config::{file::BarSettings, Configuration, SwipeBehavior};
//!
//! let settings = BarSettings::from_toml_str(
//!     r##"
//!     [style]
//!     preset = "ocean"
//!
//!     [layout]
//!     item_spacing = 6
//!
//!     [behavior]
//!     swipe = "edges-only"
//!     "##,
//! )
//! .expect("valid settings");
//!
//! let mut config = Configuration::default();
//! settings.apply_to(&mut config).expect("values in range");
//! assert_eq!(config.swipe_behavior(), SwipeBehavior::EdgesOnly);
//! ```

use super::{
    Configuration, IndicatorPosition, LabelPosition, LabelVisibility, Material, Shape,
    SwipeBehavior, TextStyle,
};
use crate::error::{Error, Result};
use crate::ui::animation::{AnimationCurve, ContentTransition};
use crate::ui::style::{Colors, Preset};
use crate::ui::theming::ThemeMode;
use iced_core::{Color, Padding, Size, Vector};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarSettings {
    pub style: StyleSettings,
    pub layout: LayoutSettings,
    pub motion: MotionSettings,
    pub glass: GlassSettings,
    pub behavior: BehaviorSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSettings {
    pub preset: Option<Preset>,
    /// Replaces the preset with a fixed palette.
    pub custom: Option<PaletteSettings>,
    pub shadow: Option<ShadowSettings>,
    pub force_high_contrast: Option<bool>,
}

/// Hex colors (`#RRGGBB` or `#RRGGBBAA`) of a custom palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteSettings {
    pub bar_background: String,
    pub bar_border: String,
    pub bar_shadow: String,
    pub selected_item: String,
    pub unselected_item: String,
    pub bubble_fill: String,
    pub bubble_border: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadowSettings {
    pub color: String,
    #[serde(default = "default_shadow_radius")]
    pub radius: f32,
    #[serde(default)]
    pub offset_x: f32,
    #[serde(default)]
    pub offset_y: f32,
}

fn default_shadow_radius() -> f32 {
    super::DEFAULT_SHADOW_RADIUS
}

/// Either one value for all sides or each side explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EdgeSettings {
    Uniform(f32),
    Sides {
        top: f32,
        right: f32,
        bottom: f32,
        left: f32,
    },
}

impl From<EdgeSettings> for Padding {
    fn from(edges: EdgeSettings) -> Self {
        match edges {
            EdgeSettings::Uniform(value) => Padding::new(value),
            EdgeSettings::Sides {
                top,
                right,
                bottom,
                left,
            } => Padding {
                top,
                right,
                bottom,
                left,
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    pub label_visibility: Option<LabelVisibility>,
    pub label_position: Option<LabelPosition>,
    pub indicator_position: Option<IndicatorPosition>,
    pub shape: Option<Shape>,
    pub item_shape: Option<Shape>,
    pub padding: Option<EdgeSettings>,
    pub inner_padding: Option<EdgeSettings>,
    pub item_padding: Option<EdgeSettings>,
    pub item_spacing: Option<f32>,
    pub item_spacing_accessibility: Option<f32>,
    pub equal_item_sizing: Option<bool>,
    pub adaptive_items_width: Option<bool>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub min_bar_height: Option<f32>,
    pub item_width: Option<f32>,
    pub item_height: Option<f32>,
    pub indicator_width: Option<f32>,
    pub indicator_height: Option<f32>,
    pub content_bottom_padding: Option<f32>,
    pub icon_text_style: Option<TextStyle>,
    pub label_text_style: Option<TextStyle>,
    pub consistent_sizing: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionSettings {
    pub animation: Option<AnimationCurve>,
    pub view_transition_animation: Option<AnimationCurve>,
    pub view_transition: Option<ContentTransition>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlassSettings {
    pub enabled: Option<bool>,
    pub material: Option<Material>,
    pub blur_radius: Option<f32>,
    pub tint: Option<String>,
    pub opacity: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorSettings {
    pub swipe: Option<SwipeBehavior>,
    pub visible: Option<bool>,
    pub locale: Option<String>,
    pub theme: Option<ThemeMode>,
}

impl BarSettings {
    /// Parses a settings document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for malformed TOML or unknown enum values.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Color scheme preference, `System` when unset.
    #[must_use]
    pub fn theme(&self) -> ThemeMode {
        self.behavior.theme.unwrap_or_default()
    }

    /// Applies every present value through the validated setters.
    ///
    /// # Errors
    ///
    /// Returns the first [`Error::InvalidValue`]; values applied before it stay applied.
    pub fn apply_to(&self, config: &mut Configuration) -> Result<()> {
        self.apply_style(config)?;
        self.apply_layout(config)?;

        let motion = &self.motion;
        if let Some(curve) = motion.animation {
            config.set_animation(curve)?;
        }
        if let Some(curve) = motion.view_transition_animation {
            config.set_view_transition_animation(curve)?;
        }
        if let Some(transition) = motion.view_transition {
            config.set_view_transition(transition);
        }

        let glass = &self.glass;
        if glass.enabled.is_some() || glass.material.is_some() {
            let current = config.glass();
            config.set_glass(
                glass.enabled.unwrap_or(current.enabled),
                glass.material.or(current.material),
            );
        }
        if let Some(radius) = glass.blur_radius {
            config.set_glass_blur_radius(radius)?;
        }
        if glass.tint.is_some() || glass.opacity.is_some() {
            let current = config.glass();
            let tint = match &glass.tint {
                Some(hex) => parse_hex_color("glass.tint", hex)?,
                None => current.tint,
            };
            config.set_glass_tint(tint, glass.opacity.unwrap_or(current.opacity.value()));
        }

        let behavior = &self.behavior;
        if let Some(swipe) = behavior.swipe {
            config.set_swipe_behavior(swipe);
        }
        if let Some(visible) = behavior.visible {
            config.set_visible(visible);
        }
        if let Some(locale) = &behavior.locale {
            config.set_locale(Some(locale.clone()))?;
        }
        Ok(())
    }

    fn apply_style(&self, config: &mut Configuration) -> Result<()> {
        let style = &self.style;
        if let Some(preset) = style.preset {
            config.set_style(preset);
        }
        if let Some(palette) = &style.custom {
            config.set_style(palette.to_colors()?);
        }
        if let Some(shadow) = &style.shadow {
            let color = parse_hex_color("style.shadow.color", &shadow.color)?;
            config.set_shadow(
                shadow.radius,
                color,
                Vector::new(shadow.offset_x, shadow.offset_y),
            )?;
        }
        if let Some(force) = style.force_high_contrast {
            config.set_force_high_contrast(force);
        }
        Ok(())
    }

    fn apply_layout(&self, config: &mut Configuration) -> Result<()> {
        let layout = &self.layout;
        if let Some(visibility) = layout.label_visibility {
            config.set_label_visibility(visibility);
        }
        if let Some(position) = layout.label_position {
            config.set_label_position(position);
        }
        if let Some(position) = layout.indicator_position {
            config.set_indicator_position(position);
        }
        if let Some(shape) = layout.shape {
            config.set_shape(shape)?;
        }
        if let Some(shape) = layout.item_shape {
            config.set_item_shape(shape)?;
        }
        if let Some(padding) = layout.padding {
            config.set_padding(padding.into())?;
        }
        if let Some(padding) = layout.inner_padding {
            config.set_inner_padding(padding.into())?;
        }
        if let Some(padding) = layout.item_padding {
            config.set_item_padding(padding.into())?;
        }
        if layout.item_spacing.is_some() || layout.item_spacing_accessibility.is_some() {
            let current = config.item_spacing();
            config.set_item_spacing(
                layout.item_spacing.unwrap_or(current.regular),
                layout
                    .item_spacing_accessibility
                    .unwrap_or(current.accessibility),
            )?;
        }
        if let Some(equal) = layout.equal_item_sizing {
            config.set_equal_item_sizing(equal);
        }
        if let Some(adaptive) = layout.adaptive_items_width {
            config.set_adaptive_items_width(adaptive);
        }
        match (layout.width, layout.height) {
            (Some(width), Some(height)) => config.set_size(Some(Size::new(width, height)))?,
            (None, None) => {}
            _ => {
                tracing::warn!("layout.width and layout.height must be set together, ignoring");
            }
        }
        if let Some(height) = layout.min_bar_height {
            config.set_min_bar_height(height)?;
        }
        if layout.item_width.is_some() || layout.item_height.is_some() {
            config.set_item_size(layout.item_width, layout.item_height)?;
        }
        if layout.indicator_width.is_some() || layout.indicator_height.is_some() {
            config.set_indicator_size(layout.indicator_width, layout.indicator_height)?;
        }
        if let Some(padding) = layout.content_bottom_padding {
            config.set_content_bottom_padding(padding)?;
        }
        if layout.icon_text_style.is_some() || layout.label_text_style.is_some() {
            config.set_text_styles(
                layout.icon_text_style.unwrap_or(config.icon_text_style()),
                layout.label_text_style.unwrap_or(config.label_text_style()),
            );
        }
        if let Some(consistent) = layout.consistent_sizing {
            config.set_consistent_sizing(consistent);
        }
        Ok(())
    }
}

impl PaletteSettings {
    /// Parses every color of the palette.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] naming the first malformed color.
    pub fn to_colors(&self) -> Result<Colors> {
        Ok(Colors {
            bar_background: parse_hex_color("style.custom.bar_background", &self.bar_background)?,
            bar_border: parse_hex_color("style.custom.bar_border", &self.bar_border)?,
            bar_shadow: parse_hex_color("style.custom.bar_shadow", &self.bar_shadow)?,
            selected_item: parse_hex_color("style.custom.selected_item", &self.selected_item)?,
            unselected_item: parse_hex_color(
                "style.custom.unselected_item",
                &self.unselected_item,
            )?,
            bubble_fill: parse_hex_color("style.custom.bubble_fill", &self.bubble_fill)?,
            bubble_border: parse_hex_color("style.custom.bubble_border", &self.bubble_border)?,
        })
    }
}

/// Parses `#RRGGBB` or `#RRGGBBAA`.
///
/// # Errors
///
/// Returns [`Error::InvalidValue`] for any other format.
pub fn parse_hex_color(field: &'static str, hex: &str) -> Result<Color> {
    let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
    if !matches!(digits.len(), 6 | 8) || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::invalid(field, format!("'{hex}' is not #RRGGBB or #RRGGBBAA")));
    }
    let mut channels = [u8::MAX; 4];
    for (i, channel) in channels.iter_mut().enumerate().take(digits.len() / 2) {
        *channel = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16)
            .map_err(|err| Error::invalid(field, format!("'{hex}': {err}")))?;
    }
    let [r, g, b, a] = channels;
    Ok(Color::from_rgba8(r, g, b, f32::from(a) / 255.0))
}

/// Loads settings from a file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`] if
/// it is not a valid settings document.
pub fn load_from_path(path: &Path) -> Result<BarSettings> {
    let content = fs::read_to_string(path)?;
    BarSettings::from_toml_str(&content).inspect_err(|err| {
        tracing::warn!(path = %path.display(), %err, "rejected settings file");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use crate::ui::style::Style;
    use crate::ui::theming::ColorScheme;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn empty_document_changes_nothing() {
        let settings = BarSettings::from_toml_str("").expect("empty is valid");
        let mut config = Configuration::default();
        settings.apply_to(&mut config).expect("nothing to reject");
        assert_eq!(config, Configuration::default());
    }

    #[test]
    fn full_document_applies_every_section() {
        let settings = BarSettings::from_toml_str(
            r##"
            [style]
            preset = "night-owl"
            force_high_contrast = true

            [layout]
            label_visibility = "always"
            indicator_position = "bottom"
            shape = { kind = "capsule" }
            padding = 8
            item_padding = { top = 12, right = 16, bottom = 12, left = 16 }
            width = 320
            height = 60

            [motion]
            animation = { kind = "ease-out", duration = 0.2 }
            view_transition = "slide"

            [glass]
            enabled = true
            material = "thin"
            tint = "#336699"
            opacity = 0.5

            [behavior]
            swipe = "full"
            visible = false
            locale = "fr"
            theme = "dark"
            "##,
        )
        .expect("valid settings");

        let mut config = Configuration::default();
        settings.apply_to(&mut config).expect("values in range");

        assert_eq!(config.style(), &Style::Preset(Preset::NightOwl));
        assert!(config.force_high_contrast());
        assert_eq!(config.label_visibility(), LabelVisibility::Always);
        assert_eq!(config.indicator_position(), IndicatorPosition::Bottom);
        assert_eq!(config.shape(), Shape::Capsule);
        assert_eq!(config.padding(), Padding::new(8.0));
        assert_abs_diff_eq!(config.item_padding().left, 16.0);
        assert_eq!(config.size(), Some(Size::new(320.0, 60.0)));
        assert_eq!(config.animation(), AnimationCurve::EaseOut { duration: 0.2 });
        assert_eq!(config.view_transition(), ContentTransition::Slide);
        assert!(config.glass().enabled);
        assert_eq!(config.glass().material, Some(Material::Thin));
        assert_abs_diff_eq!(config.glass().opacity.value(), 0.5);
        assert_eq!(config.swipe_behavior(), SwipeBehavior::Full);
        assert!(!config.is_visible());
        assert_eq!(config.locale(), Some("fr"));
        assert_eq!(settings.theme(), ThemeMode::Dark);
    }

    #[test]
    fn custom_palette_replaces_preset() {
        let settings = BarSettings::from_toml_str(
            r##"
            [style]
            preset = "desert"

            [style.custom]
            bar_background = "#FFFFFF"
            bar_border = "#00000033"
            bar_shadow = "#000000"
            selected_item = "#FF0000"
            unselected_item = "#808080"
            bubble_fill = "#FF000026"
            bubble_border = "#FF000066"
            "##,
        )
        .expect("valid settings");

        let mut config = Configuration::default();
        settings.apply_to(&mut config).expect("values in range");
        let colors = config.style().colors(ColorScheme::Dark);
        assert_eq!(colors.selected_item, Color::from_rgb8(255, 0, 0));
        assert_eq!(config.original_style(), config.style());
    }

    #[test]
    fn negative_spacing_is_rejected() {
        let settings =
            BarSettings::from_toml_str("[layout]\nitem_spacing = -4").expect("valid toml");
        let mut config = Configuration::default();
        let err = settings.apply_to(&mut config).unwrap_err();
        assert!(matches!(err, Error::InvalidValue { field: "item_spacing", .. }));
    }

    #[test]
    fn unknown_preset_is_a_config_error() {
        let err = BarSettings::from_toml_str("[style]\npreset = \"lava\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn shadow_section_sets_color() {
        let settings = BarSettings::from_toml_str(
            "[style.shadow]\ncolor = \"#112233\"\nradius = 4\noffset_y = 2",
        )
        .expect("valid settings");
        let mut config = Configuration::default();
        settings.apply_to(&mut config).expect("values in range");
        assert_abs_diff_eq!(config.shadow().radius, 4.0);
        assert_abs_diff_eq!(config.shadow().offset.y, 2.0);
        assert_eq!(
            config.style().colors(ColorScheme::Light).bar_shadow,
            Color::from_rgb8(0x11, 0x22, 0x33)
        );
    }

    #[test]
    fn hex_colors_parse() {
        assert_eq!(parse_hex_color("c", "#000000"), Ok(Color::BLACK));
        let translucent = parse_hex_color("c", "#FFFFFF80").expect("valid hex");
        assert_abs_diff_eq!(translucent.a, 128.0 / 255.0);
        assert!(parse_hex_color("c", "#FFF").is_err());
        assert!(parse_hex_color("c", "#GGGGGG").is_err());
        assert!(parse_hex_color("c", "#ÿÿÿ").is_err());
    }

    #[test]
    fn hex_colors_reject_signs() {
        assert!(parse_hex_color("c", "#+F+F+F").is_err());
        assert!(parse_hex_color("c", "-F0F0F0").is_err());
        assert!(parse_hex_color("c", "#0F0F0F+F").is_err());
    }

    #[test]
    fn load_from_path_reads_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("bar.toml");
        let mut file = fs::File::create(&path).expect("failed to create file");
        writeln!(file, "[behavior]\nswipe = \"edges-only\"").expect("failed to write");

        let settings = load_from_path(&path).expect("failed to load settings");
        assert_eq!(settings.behavior.swipe, Some(SwipeBehavior::EdgesOnly));
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let err = load_from_path(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn malformed_file_is_config_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[layout\nwidth = ").expect("failed to write");
        assert!(matches!(load_from_path(&path), Err(Error::Config(_))));
    }
}
