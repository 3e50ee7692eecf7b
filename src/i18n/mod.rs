// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! Translation files are embedded into the binary from `assets/i18n/`.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Runtime language switching from the settings screen
//! - `MISSING: <key>` placeholder for untranslated keys

pub mod fluent;
