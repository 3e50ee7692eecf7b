// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Timing**: Splash dwell and screen transition durations
//! - **Camera**: Simulated recognizer delays and confidence floor
//! - **Training**: Simulated epoch pacing and progress counter

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// How long the splash screen stays before advancing to onboarding.
pub const DEFAULT_SPLASH_DWELL_MS: u64 = 2500;

/// Shortest accepted splash dwell.
pub const MIN_SPLASH_DWELL_MS: u64 = 500;

/// Longest accepted splash dwell.
pub const MAX_SPLASH_DWELL_MS: u64 = 10_000;

/// Duration of the slide between screens.
pub const DEFAULT_TRANSITION_MS: u64 = 300;

/// Zero disables the slide animation.
pub const MIN_TRANSITION_MS: u64 = 0;

pub const MAX_TRANSITION_MS: u64 = 2000;

/// Fraction of the width a full-screen slide travels.
pub const SCREEN_SLIDE_DISTANCE: f32 = 1.0;

/// Fraction of the width an onboarding slide travels.
pub const CAROUSEL_SLIDE_DISTANCE: f32 = 0.5;

// ==========================================================================
// Camera Defaults
// ==========================================================================

/// Delay before the mock recognizer "detects" a letter.
pub const DEFAULT_DETECTION_DELAY_MS: u64 = 2000;

/// Delay before a displayed letter is appended to the output.
pub const DEFAULT_COMMIT_DELAY_MS: u64 = 1500;

pub const MIN_CAMERA_DELAY_MS: u64 = 100;
pub const MAX_CAMERA_DELAY_MS: u64 = 10_000;

/// Lowest confidence the mock recognizer reports (percent).
pub const MIN_CONFIDENCE_PERCENT: f32 = 85.0;

/// Width of the confidence range above the floor (percent).
pub const CONFIDENCE_SPREAD_PERCENT: f32 = 15.0;

// ==========================================================================
// Training Defaults
// ==========================================================================

/// Time between simulated epochs while training runs.
pub const DEFAULT_EPOCH_INTERVAL_MS: u64 = 1000;

pub const MIN_EPOCH_INTERVAL_MS: u64 = 50;
pub const MAX_EPOCH_INTERVAL_MS: u64 = 60_000;

/// Epochs already completed when the dashboard opens.
pub const INITIAL_TRAINING_EPOCH: u32 = 107;

/// Total epochs of the simulated run.
pub const TOTAL_TRAINING_EPOCHS: u32 = 200;
