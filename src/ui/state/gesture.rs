// SPDX-License-Identifier: MPL-2.0
//! Paging gesture state
//!
//! Plain data mutated by the [`Pager`](crate::ui::pager::Pager). It holds the
//! authoritative selected index and the live drag offset.

/// Whether a drag is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Dragging,
}

/// Gesture state of the paged content.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GestureState {
    pub phase: Phase,

    /// The selected tab.
    pub committed_index: usize,

    /// Signed horizontal offset of the content while dragging, after resistance.
    pub provisional_offset: f32,

    /// Index selected when the current drag started
    pub drag_start_index: usize,

    /// Whether the current drag began inside an edge band
    pub drag_started_at_edge: bool,
}

impl GestureState {
    /// Starts a drag from the committed index
    pub fn start(&mut self, at_edge: bool) {
        self.phase = Phase::Dragging;
        self.drag_start_index = self.committed_index;
        self.drag_started_at_edge = at_edge;
        self.provisional_offset = 0.0;
    }

    /// Stops the drag and zeroes the offset
    pub fn stop(&mut self) {
        self.phase = Phase::Idle;
        self.drag_started_at_edge = false;
        self.provisional_offset = 0.0;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase == Phase::Dragging
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_gesture_state_is_idle() {
        let state = GestureState::default();
        assert!(!state.is_dragging());
        assert_eq!(state.committed_index, 0);
        assert_eq!(state.provisional_offset, 0.0);
    }

    #[test]
    fn start_captures_committed_index() {
        let mut state = GestureState {
            committed_index: 2,
            ..GestureState::default()
        };
        state.start(true);

        assert!(state.is_dragging());
        assert_eq!(state.drag_start_index, 2);
        assert!(state.drag_started_at_edge);
    }

    #[test]
    fn stop_clears_offset() {
        let mut state = GestureState::default();
        state.start(false);
        state.provisional_offset = 42.0;
        state.stop();

        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.provisional_offset, 0.0);
    }
}
