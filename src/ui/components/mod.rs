// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across multiple screens.
//!
//! # Components
//!
//! - [`header`] - Inverted title badge with a subtitle, section titles
//! - [`tile`] - Statistic tiles and outlined cards
//! - [`slide`] - Renders one layer of a slide transition

pub mod header;
pub mod slide;
pub mod tile;
