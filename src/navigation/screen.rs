// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use std::fmt;

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Splash,
    Onboarding,
    Login,
    Home,
    Camera,
    Library,
    Training,
    Settings,
    Profile,
}

impl Screen {
    /// Every screen, in declaration order.
    pub const ALL: [Screen; 9] = [
        Screen::Splash,
        Screen::Onboarding,
        Screen::Login,
        Screen::Home,
        Screen::Camera,
        Screen::Library,
        Screen::Training,
        Screen::Settings,
        Screen::Profile,
    ];

    /// Screens reachable from the bottom navigation bar, in display order.
    pub const BOTTOM_NAV: [Screen; 5] = [
        Screen::Home,
        Screen::Camera,
        Screen::Library,
        Screen::Training,
        Screen::Settings,
    ];

    /// Returns `true` if the bottom navigation bar is shown on this screen.
    #[must_use]
    pub fn shows_bottom_nav(self) -> bool {
        matches!(
            self,
            Screen::Home | Screen::Camera | Screen::Library | Screen::Training | Screen::Settings
        )
    }

    /// Stable lowercase identifier, also used to build i18n keys.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Screen::Splash => "splash",
            Screen::Onboarding => "onboarding",
            Screen::Login => "login",
            Screen::Home => "home",
            Screen::Camera => "camera",
            Screen::Library => "library",
            Screen::Training => "training",
            Screen::Settings => "settings",
            Screen::Profile => "profile",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
