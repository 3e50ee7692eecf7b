// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming.
//!
//! [`AppTheme`] is derived purely from the dark-mode flag and handed by value
//! to every screen. [`ThemeMode`] only matters at startup, where it decides
//! the initial value of that flag.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use std::str::FromStr;

/// Colors shared by every screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppTheme {
    pub background: Color,
    pub text: Color,
    pub card: Color,
    pub border: Color,
}

impl AppTheme {
    /// Light theme (cream background, black ink).
    pub const LIGHT: AppTheme = AppTheme {
        background: palette::CREAM,
        text: palette::BLACK,
        card: palette::WHITE,
        border: palette::BLACK,
    };

    /// Dark theme (charcoal background, cream ink).
    pub const DARK: AppTheme = AppTheme {
        background: palette::CHARCOAL,
        text: palette::CREAM,
        card: palette::GRAPHITE,
        border: palette::CREAM,
    };

    #[must_use]
    pub fn from_dark_mode(dark: bool) -> Self {
        if dark {
            Self::DARK
        } else {
            Self::LIGHT
        }
    }

    /// Built-in iced theme used by stock widgets (text inputs, togglers).
    #[must_use]
    pub fn iced_theme(dark: bool) -> Theme {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Default to light on detection error, like the app's cream look
                matches!(dark_light::detect(), Ok(dark_light::Mode::Dark))
            }
        }
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(format!("unknown theme mode: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let theme = AppTheme::from_dark_mode(false);
        assert!(theme.background.r > 0.9);
        assert_eq!(theme.text, palette::BLACK);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let theme = AppTheme::from_dark_mode(true);
        assert!(theme.background.r < 0.2);
        assert_eq!(theme.border, palette::CREAM);
    }

    #[test]
    fn theme_is_a_pure_function_of_the_flag() {
        assert_eq!(AppTheme::from_dark_mode(false), AppTheme::from_dark_mode(false));
        assert_eq!(AppTheme::from_dark_mode(true), AppTheme::from_dark_mode(true));

        let original = AppTheme::from_dark_mode(false);
        let toggled = AppTheme::from_dark_mode(true);
        let restored = AppTheme::from_dark_mode(false);
        assert_ne!(original, toggled);
        assert_eq!(original, restored);
    }

    #[test]
    fn theme_mode_parses_case_insensitively() {
        assert_eq!("Light".parse(), Ok(ThemeMode::Light));
        assert_eq!("DARK".parse(), Ok(ThemeMode::Dark));
        assert_eq!("system".parse(), Ok(ThemeMode::System));
        assert!("sepia".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // System mode depends on actual system theme, so we just verify it doesn't panic
        let _ = ThemeMode::System.is_dark();
    }
}
