// SPDX-License-Identifier: MPL-2.0
//! Bar styles: named presets and custom palettes.
//!
//! A [`Style`] is a function from [`ColorScheme`] to [`Colors`]. Presets vary
//! by scheme; custom palettes answer every scheme with the same record.

use crate::ui::design_tokens::{opacity, palette};
use crate::ui::theming::ColorScheme;
use iced_core::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Scheme used by [`Style::copy_with_modified_colors`] to flatten a style.
pub const COPY_REFERENCE_SCHEME: ColorScheme = ColorScheme::Light;

/// Concrete colors for every painted part of the bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Colors {
    // Bar colors
    pub bar_background: Color,
    pub bar_border: Color,
    pub bar_shadow: Color,

    // Item colors
    pub selected_item: Color,
    pub unselected_item: Color,

    // Bubble colors
    pub bubble_fill: Color,
    pub bubble_border: Color,
}

impl Colors {
    /// Builds the usual palette around a single accent color.
    ///
    /// The bubble and bar border are translucent tints of `primary`.
    #[must_use]
    pub fn from_primary(
        primary: Color,
        unselected_item: Color,
        bar_background: Color,
        bar_shadow: Color,
    ) -> Self {
        Self {
            bar_background,
            bar_border: primary.scale_alpha(opacity::BAR_STROKE),
            bar_shadow,
            selected_item: primary,
            unselected_item,
            bubble_fill: primary.scale_alpha(opacity::BUBBLE_FILL),
            bubble_border: primary.scale_alpha(opacity::BUBBLE_STROKE),
        }
    }
}

/// Named style presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    #[default]
    Forest,
    Desert,
    NightOwl,
    Ocean,
    Glass,
    Dark,
    HighContrast,
}

impl Preset {
    pub const ALL: [Preset; 7] = [
        Preset::Forest,
        Preset::Desert,
        Preset::NightOwl,
        Preset::Ocean,
        Preset::Glass,
        Preset::Dark,
        Preset::HighContrast,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Preset::Forest => "forest",
            Preset::Desert => "desert",
            Preset::NightOwl => "night-owl",
            Preset::Ocean => "ocean",
            Preset::Glass => "glass",
            Preset::Dark => "dark",
            Preset::HighContrast => "high-contrast",
        }
    }

    /// Evaluates the preset for a scheme.
    #[must_use]
    pub fn colors(self, scheme: ColorScheme) -> Colors {
        let is_dark = scheme.is_dark();
        let dimmed_white = palette::WHITE.scale_alpha(opacity::UNSELECTED_ON_DARK);
        match self {
            Preset::Forest => Colors::from_primary(
                palette::FOREST,
                if is_dark { dimmed_white } else { palette::FOREST_MUTED },
                if is_dark {
                    palette::FOREST_SURFACE_DARK
                } else {
                    palette::FOREST_SURFACE_LIGHT
                },
                palette::FOREST,
            ),
            Preset::Desert => Colors::from_primary(
                palette::DESERT,
                if is_dark { dimmed_white } else { palette::DESERT_MUTED },
                if is_dark {
                    palette::DESERT_SURFACE_DARK
                } else {
                    palette::DESERT_SURFACE_LIGHT
                },
                palette::DESERT,
            ),
            Preset::NightOwl => Colors::from_primary(
                palette::NIGHT_OWL,
                if is_dark { dimmed_white } else { palette::NIGHT_OWL_MUTED },
                if is_dark {
                    palette::NIGHT_SURFACE_DARK
                } else {
                    palette::NIGHT_OWL_SURFACE_LIGHT
                },
                palette::BLACK,
            ),
            Preset::Ocean => Colors::from_primary(
                palette::OCEAN,
                if is_dark { dimmed_white } else { palette::OCEAN_MUTED },
                if is_dark { palette::OCEAN_SURFACE_DARK } else { palette::WHITE },
                palette::OCEAN,
            ),
            Preset::Glass => {
                let ink = if is_dark { palette::WHITE } else { palette::BLACK };
                Colors {
                    bar_background: ink.scale_alpha(opacity::GLASS_TINT),
                    bar_border: ink.scale_alpha(opacity::BAR_STROKE),
                    bar_shadow: if is_dark {
                        palette::BLACK
                    } else {
                        palette::BLACK.scale_alpha(opacity::SHADOW_SOFT)
                    },
                    selected_item: ink,
                    unselected_item: ink.scale_alpha(opacity::GLASS_UNSELECTED),
                    bubble_fill: ink.scale_alpha(opacity::BUBBLE_FILL),
                    bubble_border: ink.scale_alpha(opacity::BUBBLE_STROKE),
                }
            }
            // The dark preset ignores the scheme.
            Preset::Dark => Colors::from_primary(
                palette::SYSTEM_BLUE,
                palette::GRAY_SYSTEM,
                palette::NIGHT_SURFACE_DARK,
                palette::BLACK,
            ),
            Preset::HighContrast => {
                let ink = if is_dark { palette::WHITE } else { palette::BLACK };
                Colors {
                    bar_background: if is_dark { palette::BLACK } else { palette::WHITE },
                    bar_border: ink.scale_alpha(opacity::BAR_STROKE),
                    bar_shadow: palette::CLEAR,
                    selected_item: ink,
                    unselected_item: if is_dark { dimmed_white } else { palette::GRAY_500 },
                    bubble_fill: ink.scale_alpha(opacity::BUBBLE_FILL),
                    bubble_border: ink.scale_alpha(opacity::BUBBLE_STROKE),
                }
            }
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a preset name is unknown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown style preset '{0}'")]
pub struct UnknownPreset(pub String);

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name() == wanted)
            .ok_or_else(|| UnknownPreset(s.to_string()))
    }
}

/// Visual style of the bar.
#[derive(Debug, Clone, PartialEq)]
pub enum Style {
    /// A named preset.
    Preset(Preset),
    /// A fixed palette used for every scheme.
    Custom(Colors),
    /// A palette per scheme.
    Adaptive { light: Colors, dark: Colors },
}

impl Style {
    /// The style the accessibility resolver switches to for increased contrast.
    pub const HIGH_CONTRAST: Style = Style::Preset(Preset::HighContrast);

    /// Resolves the concrete colors for a scheme.
    #[must_use]
    pub fn colors(&self, scheme: ColorScheme) -> Colors {
        match self {
            Style::Preset(preset) => preset.colors(scheme),
            Style::Custom(colors) => *colors,
            Style::Adaptive { light, dark } => match scheme {
                ColorScheme::Light => *light,
                ColorScheme::Dark => *dark,
            },
        }
    }

    /// Derives a new style by transforming this style's colors.
    ///
    /// The colors are read at [`COPY_REFERENCE_SCHEME`] and the result is
    /// scheme-invariant: a derived style no longer follows light/dark changes.
    #[must_use]
    pub fn copy_with_modified_colors(&self, transform: impl FnOnce(Colors) -> Colors) -> Style {
        Style::Custom(transform(self.colors(COPY_REFERENCE_SCHEME)))
    }

    /// Returns true if both schemes produce the same palette.
    #[must_use]
    pub fn is_scheme_invariant(&self) -> bool {
        self.colors(ColorScheme::Light) == self.colors(ColorScheme::Dark)
    }
}

impl Default for Style {
    fn default() -> Self {
        Style::Preset(Preset::default())
    }
}

impl From<Preset> for Style {
    fn from(preset: Preset) -> Self {
        Style::Preset(preset)
    }
}

impl From<Colors> for Style {
    fn from(colors: Colors) -> Self {
        Style::Custom(colors)
    }
}
