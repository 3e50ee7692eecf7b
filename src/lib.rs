// SPDX-License-Identifier: MPL-2.0
//! `signspeak` is the front-end shell of a sign-language recognition demo,
//! built with the Iced GUI framework.
//!
//! It provides a splash screen, an onboarding carousel, a login form and the
//! main screens (home, camera, gesture library, training, settings, profile)
//! connected by a navigator with directional slide transitions and a shared
//! light/dark theme. Recognition and training are simulated.

pub mod app;
pub mod deferred;
pub mod error;
pub mod i18n;
pub mod navigation;
pub mod ui;
