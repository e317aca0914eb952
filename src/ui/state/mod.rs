// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! State records kept apart from the components that drive them.

pub mod gesture;

pub use gesture::{GestureState, Phase};
