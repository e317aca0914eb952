// SPDX-License-Identifier: MPL-2.0
//! Selection indicator geometry.
//!
//! The indicator moves between two named rectangles: the bounds it has under
//! the previously selected item and the bounds under the new one. Item
//! rectangles come from the renderer; this module only interpolates.

use crate::accessibility::EffectiveConfiguration;
use crate::config::IndicatorPosition;
use crate::ui::animation::AnimationCurve;
use iced_core::Rectangle;
use std::time::Duration;

/// Rectangles of one laid-out item, in bar coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemLayout {
    /// Whole item including its padding.
    pub frame: Rectangle,
    pub icon: Rectangle,
    /// `None` when the label is hidden.
    pub label: Option<Rectangle>,
}

impl ItemLayout {
    #[must_use]
    pub fn new(frame: Rectangle, icon: Rectangle, label: Option<Rectangle>) -> Self {
        Self { frame, icon, label }
    }
}

/// Widens every item frame to the widest one, keeping each centered.
///
/// Used for equal item sizing before any indicator geometry is computed.
pub fn equalize_item_widths(layouts: &mut [ItemLayout]) {
    let widest = layouts
        .iter()
        .map(|layout| layout.frame.width)
        .fold(0.0_f32, f32::max);
    for layout in layouts {
        let grow = widest - layout.frame.width;
        layout.frame.x -= grow / 2.0;
        layout.frame.width = widest;
    }
}

/// Bounds of the indicator when `layout` is selected.
#[must_use]
pub fn indicator_bounds(layout: &ItemLayout, effective: &EffectiveConfiguration) -> Rectangle {
    let frame = layout.frame;
    let config = effective.config();
    let width = config.indicator_width().unwrap_or(frame.width);
    let x = frame.x + (frame.width - width) / 2.0;

    match config.indicator_position() {
        IndicatorPosition::Center => Rectangle {
            x,
            y: frame.y,
            width,
            height: config.indicator_height().unwrap_or(frame.height),
        },
        IndicatorPosition::Top => Rectangle {
            x,
            y: frame.y,
            width,
            height: effective.indicator_thickness(),
        },
        IndicatorPosition::Bottom => {
            let thickness = effective.indicator_thickness();
            Rectangle {
                x,
                y: frame.y + frame.height - thickness,
                width,
                height: thickness,
            }
        }
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn lerp_rect(from: Rectangle, to: Rectangle, t: f32) -> Rectangle {
    Rectangle {
        x: lerp(from.x, to.x, t),
        y: lerp(from.y, to.y, t),
        width: lerp(from.width, to.width, t).max(0.0),
        height: lerp(from.height, to.height, t).max(0.0),
    }
}

/// Indicator movement from one item to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorTransition {
    pub from: Rectangle,
    pub to: Rectangle,
    pub curve: AnimationCurve,
    /// Jump without intermediate frames (reduced motion).
    pub instant: bool,
}

impl IndicatorTransition {
    /// Builds the transition between two selected indices.
    ///
    /// Returns `None` if either index has no layout.
    #[must_use]
    pub fn between(
        previous: usize,
        next: usize,
        layouts: &[ItemLayout],
        effective: &EffectiveConfiguration,
    ) -> Option<Self> {
        let from = indicator_bounds(layouts.get(previous)?, effective);
        let to = indicator_bounds(layouts.get(next)?, effective);
        Some(Self {
            from,
            to,
            curve: effective.settle_curve(),
            instant: effective.reduce_motion(),
        })
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        if self.instant {
            Duration::ZERO
        } else {
            self.curve.settle_duration()
        }
    }

    /// Indicator bounds `elapsed` after the selection changed.
    #[must_use]
    pub fn bounds_at(&self, elapsed: Duration) -> Rectangle {
        if self.instant {
            return self.to;
        }
        lerp_rect(self.from, self.to, self.curve.progress(elapsed))
    }

    #[must_use]
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration()
    }

    /// Intermediate frames sampled at `fps`, ending on the target bounds.
    ///
    /// Empty when the transition is instant.
    #[must_use]
    pub fn frames(&self, fps: u32) -> Vec<Rectangle> {
        if self.instant || fps == 0 {
            return Vec::new();
        }
        let step = Duration::from_secs_f64(1.0 / f64::from(fps));
        let total = self.duration();
        let mut frames = Vec::new();
        let mut elapsed = step;
        while elapsed < total {
            frames.push(self.bounds_at(elapsed));
            elapsed += step;
        }
        frames.push(self.to);
        frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessibility::AccessibilitySignals;
    use crate::config::Configuration;
    use crate::test_utils::assert_abs_diff_eq;

    fn layouts() -> Vec<ItemLayout> {
        (0..3)
            .map(|i| {
                let x = i as f32 * 100.0;
                ItemLayout::new(
                    Rectangle::new(iced_core::Point::new(x, 0.0), iced_core::Size::new(80.0, 44.0)),
                    Rectangle::new(iced_core::Point::new(x + 10.0, 10.0), iced_core::Size::new(24.0, 24.0)),
                    None,
                )
            })
            .collect()
    }

    fn effective(signals: AccessibilitySignals) -> EffectiveConfiguration {
        Configuration::default().effective(&signals)
    }

    #[test]
    fn center_bubble_covers_frame() {
        let layouts = layouts();
        let bounds = indicator_bounds(&layouts[1], &effective(AccessibilitySignals::default()));
        assert_eq!(bounds, layouts[1].frame);
    }

    #[test]
    fn bottom_line_sits_under_item() {
        let mut config = Configuration::default();
        config.set_indicator_position(IndicatorPosition::Bottom);
        config
            .set_indicator_size(Some(40.0), None)
            .expect("valid size");
        let effective = config.effective(&AccessibilitySignals::default());

        let bounds = indicator_bounds(&layouts()[0], &effective);
        assert_abs_diff_eq!(bounds.height, 4.0);
        assert_abs_diff_eq!(bounds.y, 40.0);
        assert_abs_diff_eq!(bounds.width, 40.0);
        assert_abs_diff_eq!(bounds.x, 20.0);
    }

    #[test]
    fn transition_interpolates_between_items() {
        let layouts = layouts();
        let effective = effective(AccessibilitySignals::default());
        let transition =
            IndicatorTransition::between(0, 2, &layouts, &effective).expect("indices exist");

        assert_eq!(transition.bounds_at(Duration::ZERO), layouts[0].frame);
        assert_eq!(transition.bounds_at(transition.duration()), layouts[2].frame);
        let mid = transition.bounds_at(transition.duration() / 4);
        assert!(mid.x > 0.0 && mid.x < 200.0);

        let frames = transition.frames(60);
        assert!(frames.len() > 1);
        assert_eq!(frames.last(), Some(&layouts[2].frame));
    }

    #[test]
    fn reduced_motion_jumps() {
        let layouts = layouts();
        let effective = effective(AccessibilitySignals {
            reduce_motion: true,
            ..AccessibilitySignals::default()
        });
        let transition =
            IndicatorTransition::between(0, 1, &layouts, &effective).expect("indices exist");

        assert!(transition.instant);
        assert!(transition.frames(60).is_empty());
        assert_eq!(transition.duration(), Duration::ZERO);
        assert_eq!(transition.bounds_at(Duration::ZERO), layouts[1].frame);
    }

    #[test]
    fn missing_layout_yields_no_transition() {
        let effective = effective(AccessibilitySignals::default());
        assert!(IndicatorTransition::between(0, 7, &layouts(), &effective).is_none());
    }

    #[test]
    fn equalize_widens_to_widest_and_keeps_center() {
        let mut layouts = layouts();
        layouts[1].frame.width = 120.0;
        equalize_item_widths(&mut layouts);

        for layout in &layouts {
            assert_abs_diff_eq!(layout.frame.width, 120.0);
        }
        assert_abs_diff_eq!(layouts[0].frame.x, -20.0);
        assert_abs_diff_eq!(layouts[1].frame.x, 100.0);
    }
}
