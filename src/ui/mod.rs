// SPDX-License-Identifier: MPL-2.0
//! Bar components and state management.
//!
//! This module follows the Elm-style "state down, messages up" pattern: the
//! [`bar`] orchestrator owns the state and forwards messages to its
//! sub-components, which answer with effects.
//!
//! # Components
//!
//! - [`bar`] - The bubble bar orchestrator
//! - [`pager`] - Swipeable paging state machine
//! - [`indicator`] - Selection indicator geometry and interpolation
//! - [`tab_item`] - Items and their accessibility strings
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Gesture state records
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`style`] - Style presets and custom palettes
//! - [`theming`] - Light/Dark/System scheme selection
//! - [`animation`] - Animation curves and content transitions

pub mod animation;
pub mod bar;
pub mod design_tokens;
pub mod indicator;
pub mod pager;
pub mod state;
pub mod style;
pub mod tab_item;
pub mod theming;
