// SPDX-License-Identifier: MPL-2.0
//! Swipeable paging sub-component.
//!
//! Drives [`GestureState`] from drag, tap and frame events:
//!
//! - a drag may only start inside the edge bands under
//!   [`SwipeBehavior::EdgesOnly`], anywhere under [`SwipeBehavior::Full`];
//! - dragging past the first or last page is damped by
//!   [`BOUNDARY_RESISTANCE`];
//! - crossing [`COMMIT_THRESHOLD_FRACTION`] of the page width commits the
//!   neighbouring page while the finger is still down;
//! - a release re-evaluates the translation and either keeps the page or
//!   settles back to the page the drag started on.

use crate::accessibility::EffectiveConfiguration;
use crate::config::{
    SwipeBehavior, BOUNDARY_RESISTANCE, COMMIT_THRESHOLD_FRACTION, EDGE_BAND_WIDTH,
};
use crate::ui::animation::AnimationCurve;
use crate::ui::state::GestureState;
use iced_core::Vector;
use std::time::Duration;

/// An offset animating back to zero after a rejected drag.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Settle {
    from: f32,
    curve: AnimationCurve,
    elapsed: Duration,
}

impl Settle {
    fn offset(&self) -> f32 {
        self.from * (1.0 - self.curve.progress(self.elapsed))
    }
}

/// Pager sub-component state.
#[derive(Debug, Clone, PartialEq)]
pub struct Pager {
    gesture: GestureState,
    item_count: usize,
    page_width: f32,
    swipe_behavior: SwipeBehavior,
    settle_curve: AnimationCurve,
    settle: Option<Settle>,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            gesture: GestureState::default(),
            item_count: 0,
            page_width: 0.0,
            swipe_behavior: SwipeBehavior::default(),
            settle_curve: AnimationCurve::default(),
            settle: None,
        }
    }
}

/// Messages for the pager sub-component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// A drag began at horizontal coordinate `x` within the page.
    DragStarted { x: f32 },
    /// Total translation since the drag began.
    DragChanged { translation: Vector },
    /// Final translation at release.
    DragEnded { translation: Vector },
    /// Direct selection (tap or host navigation). Out-of-range values are clamped.
    Select(isize),
    /// Animation frame.
    Tick(Duration),
}

/// Effects produced by pager operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// The committed index changed.
    Committed { from: usize, to: usize },
}

impl Pager {
    #[must_use]
    pub fn new(item_count: usize, page_width: f32) -> Self {
        let mut pager = Self::default();
        pager.set_item_count(item_count);
        pager.set_page_width(page_width);
        pager
    }

    /// Applies the swipe policy and settle curve of a new snapshot.
    pub fn configure(&mut self, effective: &EffectiveConfiguration) {
        self.swipe_behavior = effective.config().swipe_behavior();
        self.settle_curve = effective.settle_curve();
        if self.swipe_behavior == SwipeBehavior::Disabled && self.gesture.is_dragging() {
            self.cancel_drag();
        }
    }

    /// Replaces the number of pages, clamping the selection into range.
    pub fn set_item_count(&mut self, count: usize) -> Effect {
        self.item_count = count;
        if count == 0 {
            self.cancel_drag();
        }
        let to = self.clamp_index(self.gesture.committed_index as isize);
        self.commit(to).unwrap_or(Effect::None)
    }

    /// Sets the page width used for thresholds and edge bands.
    pub fn set_page_width(&mut self, width: f32) {
        self.page_width = if width.is_finite() { width.max(0.0) } else { 0.0 };
    }

    /// Handle a pager message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::DragStarted { x } => {
                self.start_drag(x);
                Effect::None
            }
            Message::DragChanged { translation } => self.update_drag(translation.x),
            Message::DragEnded { translation } => self.end_drag(translation),
            Message::Select(index) => {
                self.cancel_drag();
                if self.item_count == 0 {
                    return Effect::None;
                }
                let to = self.clamp_index(index);
                self.commit(to).unwrap_or(Effect::None)
            }
            Message::Tick(delta) => {
                if let Some(settle) = self.settle.as_mut() {
                    settle.elapsed += delta;
                    if settle.curve.is_finished(settle.elapsed) {
                        tracing::trace!("settle finished");
                        self.settle = None;
                    }
                }
                Effect::None
            }
        }
    }

    fn start_drag(&mut self, x: f32) {
        if self.item_count == 0 || !x.is_finite() || self.gesture.is_dragging() {
            return;
        }
        let at_edge = x < EDGE_BAND_WIDTH || x > self.page_width - EDGE_BAND_WIDTH;
        let allowed = match self.swipe_behavior {
            SwipeBehavior::Disabled => false,
            SwipeBehavior::EdgesOnly => at_edge,
            SwipeBehavior::Full => true,
        };
        if !allowed {
            tracing::trace!(x, at_edge, policy = ?self.swipe_behavior, "drag ignored");
            return;
        }
        self.settle = None;
        self.gesture.start(at_edge);
        tracing::trace!(x, at_edge, start = self.gesture.drag_start_index, "drag started");
    }

    fn update_drag(&mut self, t: f32) -> Effect {
        if !self.gesture.is_dragging() || !t.is_finite() {
            return Effect::None;
        }
        match self.threshold_target(t) {
            Some(to) if to != self.gesture.drag_start_index => {
                if to == self.gesture.committed_index {
                    return Effect::None;
                }
                tracing::trace!(to, "live commit");
                self.commit(to).unwrap_or(Effect::None)
            }
            _ => {
                self.gesture.provisional_offset = self.resisted(t);
                Effect::None
            }
        }
    }

    fn end_drag(&mut self, translation: Vector) -> Effect {
        if !self.gesture.is_dragging() {
            return Effect::None;
        }
        let released_offset = self.gesture.provisional_offset;
        let horizontal = translation.x.abs() > translation.y.abs();
        let target = if horizontal && translation.x.is_finite() {
            self.threshold_target(translation.x)
        } else {
            None
        };
        self.gesture.stop();

        match target {
            Some(to) => {
                tracing::trace!(to, "drag released past threshold");
                let effect = self.commit(to).unwrap_or(Effect::None);
                // Pulled past the first or last page: spring back.
                if to == self.gesture.drag_start_index {
                    self.start_settle(released_offset);
                }
                effect
            }
            None => {
                tracing::trace!(
                    restore = self.gesture.drag_start_index,
                    horizontal,
                    "drag rejected"
                );
                let effect = self
                    .commit(self.gesture.drag_start_index)
                    .unwrap_or(Effect::None);
                self.start_settle(released_offset);
                effect
            }
        }
    }

    fn cancel_drag(&mut self) {
        self.gesture.stop();
        self.settle = None;
    }

    fn start_settle(&mut self, from: f32) {
        if from == 0.0 {
            return;
        }
        tracing::debug!(from, curve = ?self.settle_curve, "settling page offset");
        self.settle = Some(Settle {
            from,
            curve: self.settle_curve,
            elapsed: Duration::ZERO,
        });
    }

    /// Sets the committed index. Any settle in flight is superseded.
    fn commit(&mut self, to: usize) -> Option<Effect> {
        let from = self.gesture.committed_index;
        self.gesture.committed_index = to;
        self.gesture.provisional_offset = 0.0;
        self.settle = None;
        if from == to {
            return None;
        }
        tracing::debug!(from, to, "page committed");
        Some(Effect::Committed { from, to })
    }

    fn resisted(&self, t: f32) -> f32 {
        let start = self.gesture.drag_start_index;
        let at_first = start == 0 && t > 0.0;
        let at_last = Some(start) == self.last_index() && t < 0.0;
        if at_first || at_last {
            t * BOUNDARY_RESISTANCE
        } else {
            t
        }
    }

    /// Index a translation commits to, or `None` when below the threshold.
    fn threshold_target(&self, t: f32) -> Option<usize> {
        if t.abs() <= self.page_width * COMMIT_THRESHOLD_FRACTION {
            return None;
        }
        let start = self.gesture.drag_start_index as isize;
        Some(self.clamp_index(start - t.signum() as isize))
    }

    fn clamp_index(&self, index: isize) -> usize {
        match self.last_index() {
            Some(last) => index.clamp(0, last as isize) as usize,
            None => 0,
        }
    }

    fn last_index(&self) -> Option<usize> {
        self.item_count.checked_sub(1)
    }

    /// The selected tab.
    #[must_use]
    pub fn committed_index(&self) -> usize {
        self.gesture.committed_index
    }

    /// Live drag offset, zero when idle.
    #[must_use]
    pub fn provisional_offset(&self) -> f32 {
        self.gesture.provisional_offset
    }

    /// Offset the renderer should draw: the drag offset, or the settle in flight.
    #[must_use]
    pub fn display_offset(&self) -> f32 {
        if self.gesture.is_dragging() {
            self.gesture.provisional_offset
        } else {
            self.settle.map_or(0.0, |settle| settle.offset())
        }
    }

    /// Horizontal position of the page strip.
    ///
    /// While dragging, the offset is relative to the page the drag started on.
    #[must_use]
    pub fn content_offset(&self) -> f32 {
        let page = if self.gesture.is_dragging() {
            self.gesture.drag_start_index
        } else {
            self.gesture.committed_index
        };
        -(page as f32) * self.page_width + self.display_offset()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.settle.is_some()
    }

    /// Paging is disabled until at least one item exists.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.item_count > 0 && self.swipe_behavior != SwipeBehavior::Disabled
    }

    #[must_use]
    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    #[must_use]
    pub fn page_width(&self) -> f32 {
        self.page_width
    }
}
