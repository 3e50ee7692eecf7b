// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for every screen.
//!
//! The look is flat and high-contrast: thick outlines in the theme's border
//! color, hard offset shadows and saturated accent fills.

pub mod button;
pub mod container;
