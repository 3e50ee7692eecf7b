// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct owns the navigator, the per-screen states, the dark-mode
//! flag and localization. Screens report [`Event`](crate::ui::home::Event)s
//! which are translated here into navigation requests or root state changes.
//! Screen-local state is recreated each time a screen is entered, and its
//! timers are cancelled when it is left.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::i18n::fluent::I18n;
use crate::navigation::{Navigator, Screen, SlideTransition};
use crate::ui::design_tokens::sizing;
use crate::ui::theming::AppTheme;
use crate::ui::{camera, library, login, onboarding, settings, training};
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Local state of every screen that has some.
///
/// Only the state of the current screen is meaningful; the others hold
/// whatever they had when they were last left.
#[derive(Debug, Clone)]
pub struct ScreenStates {
    pub splash_entered_at: Instant,
    pub onboarding: onboarding::State,
    pub login: login::State,
    pub camera: camera::State,
    pub library: library::State,
    pub training: training::State,
    pub settings: settings::State,
}

impl ScreenStates {
    fn new(now: Instant) -> Self {
        Self {
            splash_entered_at: now,
            onboarding: onboarding::State::default(),
            login: login::State::default(),
            camera: camera::State::default(),
            library: library::State::default(),
            training: training::State::default(),
            settings: settings::State::default(),
        }
    }

    /// Fresh local state for `screen`.
    pub fn mount(&mut self, screen: Screen, now: Instant) {
        match screen {
            Screen::Splash => self.splash_entered_at = now,
            Screen::Onboarding => self.onboarding = onboarding::State::default(),
            Screen::Login => self.login = login::State::default(),
            Screen::Camera => self.camera = camera::State::default(),
            Screen::Library => self.library = library::State::default(),
            Screen::Training => self.training = training::State::default(),
            Screen::Settings => self.settings = settings::State::default(),
            Screen::Home | Screen::Profile => {}
        }
    }

    /// Cancels the timers owned by `screen`.
    pub fn unmount(&mut self, screen: Screen) {
        match screen {
            Screen::Camera => self.camera.teardown(),
            Screen::Training => self.training.teardown(),
            _ => {}
        }
    }
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    /// i18n key describing a configuration loading problem, if any.
    config_warning: Option<String>,
    navigator: Navigator,
    /// Top-level slide between the previous and the current screen.
    transition: Option<SlideTransition<Screen>>,
    screens: ScreenStates,
    dark_mode: bool,
    window_width: f32,
    /// Time of the last processed message; drives animation frames.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.navigator.current())
            .field("dark_mode", &self.dark_mode)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(sizing::WINDOW_WIDTH, sizing::WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(
            sizing::WINDOW_WIDTH * 0.75,
            sizing::WINDOW_HEIGHT * 0.6,
        )),
        // Close requests go through `Message::WindowCloseRequested` for cleanup
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_else(|| {
            tracing::warn!("boot called more than once; starting with default flags");
            Flags::default()
        });
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration and localization, then starts on the splash screen.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);
        let theme_mode = flags.theme.unwrap_or(config.general.theme_mode);
        let dark_mode = theme_mode.is_dark();
        tracing::info!(?theme_mode, dark_mode, locale = %i18n.current_locale(), "starting");

        let mut app = Self::with_config(config, i18n, dark_mode, Instant::now());
        app.config_warning = config_warning;
        (app, Task::none())
    }

    fn with_config(config: Config, i18n: I18n, dark_mode: bool, now: Instant) -> Self {
        Self {
            i18n,
            navigator: Navigator::new(now, config.timing.splash_dwell()),
            config,
            config_warning: None,
            transition: None,
            screens: ScreenStates::new(now),
            dark_mode,
            window_width: sizing::WINDOW_WIDTH,
            now,
        }
    }

    #[must_use]
    pub fn current_screen(&self) -> Screen {
        self.navigator.current()
    }

    #[must_use]
    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    #[must_use]
    pub fn app_theme(&self) -> AppTheme {
        AppTheme::from_dark_mode(self.dark_mode)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        AppTheme::iced_theme(self.dark_mode)
    }

    fn subscription(&self) -> Subscription<Message> {
        let current = self.navigator.current();
        let animating = current == Screen::Splash
            || self
                .transition
                .is_some_and(|transition| !transition.is_finished(self.now))
            || (current == Screen::Onboarding && self.screens.onboarding.is_animating(self.now));
        let timers_pending = self.navigator.has_pending_dwell()
            || (current == Screen::Camera && self.screens.camera.has_pending_work())
            || (current == Screen::Training && self.screens.training.has_pending_work());

        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(animating, timers_pending),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = match &message {
            Message::Tick(instant) => *instant,
            _ => Instant::now(),
        };
        self.update_at(message, now)
    }

    /// Processes `message` as if it arrived at `now`.
    fn update_at(&mut self, message: Message, now: Instant) -> Task<Message> {
        self.now = now;

        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            config: &self.config,
            navigator: &mut self.navigator,
            transition: &mut self.transition,
            screens: &mut self.screens,
            dark_mode: &mut self.dark_mode,
            now,
        };

        match message {
            Message::Onboarding(message) => update::handle_onboarding_message(&mut ctx, message),
            Message::Login(message) => update::handle_login_message(&mut ctx, message),
            Message::Home(message) => update::handle_home_message(&mut ctx, &message),
            Message::Camera(message) => update::handle_camera_message(&mut ctx, message),
            Message::Library(message) => update::handle_library_message(&mut ctx, message),
            Message::Training(message) => update::handle_training_message(&mut ctx, message),
            Message::Settings(message) => update::handle_settings_message(&mut ctx, message),
            Message::Profile(message) => update::handle_profile_message(&mut ctx, &message),
            Message::BottomNav(message) => update::handle_bottom_nav_message(&mut ctx, &message),
            Message::Tick(_) => update::handle_tick(&mut ctx),
            Message::WindowResized(width) => {
                self.window_width = width;
                Task::none()
            }
            Message::WindowCloseRequested(id) => update::handle_close_request(&mut ctx, id),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            config_warning: self.config_warning.as_deref(),
            navigator: &self.navigator,
            transition: self.transition,
            screens: &self.screens,
            dark_mode: self.dark_mode,
            now: self.now,
            width: self.window_width,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{bottom_nav, home, profile};
    use std::time::Duration;

    fn app_at(now: Instant) -> App {
        App::with_config(Config::default(), I18n::default(), false, now)
    }

    fn tick(app: &mut App, now: Instant) {
        let _ = app.update_at(Message::Tick(now), now);
    }

    fn send(app: &mut App, message: Message, now: Instant) {
        let _ = app.update_at(message, now);
    }

    /// App on the home screen; the returned instant is when login happened.
    fn logged_in() -> (App, Instant) {
        let t0 = Instant::now();
        let mut app = app_at(t0);
        let t = t0 + Duration::from_secs(3);
        tick(&mut app, t);
        send(&mut app, Message::Onboarding(onboarding::Message::Skip), t);
        send(&mut app, Message::Login(login::Message::EmailChanged("a".into())), t);
        send(&mut app, Message::Login(login::Message::PasswordChanged("b".into())), t);
        send(&mut app, Message::Login(login::Message::Submit), t);
        (app, t)
    }

    #[test]
    fn splash_advances_to_onboarding_after_dwell() {
        let t0 = Instant::now();
        let mut app = app_at(t0);
        assert_eq!(app.current_screen(), Screen::Splash);

        tick(&mut app, t0 + Duration::from_millis(2499));
        assert_eq!(app.current_screen(), Screen::Splash);

        tick(&mut app, t0 + Duration::from_millis(2500));
        assert_eq!(app.current_screen(), Screen::Onboarding);
        assert!(app.transition.is_some());
    }

    #[test]
    fn onboarding_completion_then_login_reaches_home() {
        let (app, _) = logged_in();
        assert_eq!(app.current_screen(), Screen::Home);
        assert!(app.navigator.shows_bottom_nav());
    }

    #[test]
    fn messages_for_other_screens_are_dropped() {
        let t0 = Instant::now();
        let mut app = app_at(t0);
        send(&mut app, Message::Home(home::Message::Open(Screen::Camera)), t0);
        send(
            &mut app,
            Message::BottomNav(bottom_nav::Message::Select(Screen::Library)),
            t0,
        );
        assert_eq!(app.current_screen(), Screen::Splash);
    }

    #[test]
    fn navigation_during_a_slide_restarts_it_from_the_rendered_screen() {
        let (mut app, t0) = logged_in();
        let start = t0 + Duration::from_secs(1);
        send(&mut app, Message::Home(home::Message::Open(Screen::Camera)), start);

        let midway = start + Duration::from_millis(100);
        send(
            &mut app,
            Message::BottomNav(bottom_nav::Message::Select(Screen::Library)),
            midway,
        );

        assert_eq!(app.current_screen(), Screen::Library);
        let transition = app.transition.expect("slide after navigation");
        assert_eq!(transition.from, Screen::Camera);
        assert_eq!(transition.to, app.current_screen());
        assert!(!transition.is_finished(midway + Duration::from_millis(250)));
        assert!(transition.is_finished(midway + Duration::from_millis(300)));
    }

    #[test]
    fn dark_mode_toggle_flips_theme() {
        let (mut app, t0) = logged_in();
        send(
            &mut app,
            Message::BottomNav(bottom_nav::Message::Select(Screen::Settings)),
            t0,
        );
        send(
            &mut app,
            Message::Settings(settings::Message::DarkModeToggled(true)),
            t0,
        );
        assert!(app.is_dark_mode());
        assert_eq!(app.app_theme(), AppTheme::DARK);
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn sign_out_returns_to_login_with_a_fresh_form() {
        let (mut app, t0) = logged_in();
        send(
            &mut app,
            Message::BottomNav(bottom_nav::Message::Select(Screen::Settings)),
            t0,
        );
        send(&mut app, Message::Settings(settings::Message::SignOut), t0);
        assert_eq!(app.current_screen(), Screen::Login);
        assert_eq!(app.screens.login.email(), "");
        assert!(!app.navigator.shows_bottom_nav());
    }

    #[test]
    fn leaving_camera_stops_recognition() {
        let (mut app, t0) = logged_in();
        send(&mut app, Message::Home(home::Message::Open(Screen::Camera)), t0);
        send(
            &mut app,
            Message::Camera(camera::Message::ToggleRecognition),
            t0,
        );
        assert!(app.screens.camera.is_recognizing());

        send(
            &mut app,
            Message::BottomNav(bottom_nav::Message::Select(Screen::Home)),
            t0,
        );
        assert!(!app.screens.camera.is_recognizing());
        assert!(!app.screens.camera.has_pending_work());
    }

    #[test]
    fn profile_back_goes_home() {
        let (mut app, t0) = logged_in();
        send(&mut app, Message::Home(home::Message::OpenProfile), t0);
        assert_eq!(app.current_screen(), Screen::Profile);
        send(&mut app, Message::Profile(profile::Message::Back), t0);
        assert_eq!(app.current_screen(), Screen::Home);
    }

    #[test]
    fn finished_transition_is_dropped_on_tick() {
        let (mut app, t0) = logged_in();
        assert!(app.transition.is_some());
        tick(&mut app, t0 + Duration::from_secs(1));
        assert!(app.transition.is_none());
    }
}
