// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects with no rendering dependencies.
//!
//! # Modules
//!
//! - [`ui`]: UI value objects ([`Opacity`](ui::Opacity), [`Length`](ui::Length))

pub mod ui;
