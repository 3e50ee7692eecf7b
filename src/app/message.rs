// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::bottom_nav;
use crate::ui::camera;
use crate::ui::home;
use crate::ui::library;
use crate::ui::login;
use crate::ui::onboarding;
use crate::ui::profile;
use crate::ui::settings;
use crate::ui::theming::ThemeMode;
use crate::ui::training;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// screen messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Onboarding(onboarding::Message),
    Login(login::Message),
    Home(home::Message),
    Camera(camera::Message),
    Library(library::Message),
    Training(training::Message),
    Settings(settings::Message),
    Profile(profile::Message),
    BottomNav(bottom_nav::Message),
    /// Periodic tick driving deferred tasks and animations.
    Tick(Instant),
    /// New logical window width, used to size slide offsets.
    WindowResized(f32),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SIGNSPEAK_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional theme override for this session.
    pub theme: Option<ThemeMode>,
}
