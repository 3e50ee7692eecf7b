// SPDX-License-Identifier: MPL-2.0
//! User interface screens and shared presentation code.
//!
//! This module organizes all UI-related code following the Elm-style
//! "state down, messages up" pattern: each screen exposes its `Message`,
//! the `Event`s it reports to the application root, an `update` function and
//! a `view` function taking a `ViewContext`.
//!
//! # Screens
//!
//! - [`splash`] - Startup logo with pulsing loading dots
//! - [`onboarding`] - Three-slide introduction carousel
//! - [`login`] - Sign-in / sign-up form
//! - [`home`] - Dashboard with statistics and shortcuts
//! - [`camera`] - Simulated real-time recognition
//! - [`library`] - A–Z gesture browser with search and detail modal
//! - [`training`] - Simulated model training dashboard
//! - [`settings`] - Preferences, language, sign out
//! - [`profile`] - Statistics and achievements
//!
//! # Shared Infrastructure
//!
//! - [`bottom_nav`] - Persistent bottom navigation bar
//! - [`components`] - Reusable UI components (headers, tiles, slide layers)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/dark colors and theme mode resolution

pub mod bottom_nav;
pub mod camera;
pub mod components;
pub mod design_tokens;
pub mod home;
pub mod library;
pub mod login;
pub mod onboarding;
pub mod profile;
pub mod settings;
pub mod splash;
pub mod styles;
pub mod theming;
pub mod training;
