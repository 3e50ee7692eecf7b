// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Each handler forwards a screen message to its screen, then acts on the
//! returned event. Messages addressed to a screen that is not current (for
//! example from the outgoing layer of a slide) are dropped.

use super::config::{Config, SCREEN_SLIDE_DISTANCE};
use super::{Message, ScreenStates};
use crate::i18n::fluent::I18n;
use crate::navigation::{NavigationOutcome, Navigator, Screen, SlideTransition};
use crate::ui::bottom_nav::{self, Event as BottomNavEvent};
use crate::ui::camera::{self, Event as CameraEvent};
use crate::ui::home::{self, Event as HomeEvent};
use crate::ui::library::{self, Event as LibraryEvent};
use crate::ui::login::{self, Event as LoginEvent};
use crate::ui::onboarding::{self, Event as OnboardingEvent};
use crate::ui::profile::{self, Event as ProfileEvent};
use crate::ui::settings::{self, Event as SettingsEvent};
use crate::ui::training;
use iced::{clipboard, window, Task};
use std::time::Instant;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub config: &'a Config,
    pub navigator: &'a mut Navigator,
    pub transition: &'a mut Option<SlideTransition<Screen>>,
    pub screens: &'a mut ScreenStates,
    pub dark_mode: &'a mut bool,
    pub now: Instant,
}

impl UpdateContext<'_> {
    fn is_current(&self, screen: Screen) -> bool {
        let current = self.navigator.current();
        if current != screen {
            tracing::trace!(%screen, %current, "dropping message for inactive screen");
        }
        current == screen
    }
}

/// Navigates forward to `target` and updates mounted state.
pub fn navigate(ctx: &mut UpdateContext<'_>, target: Screen) {
    let outcome = ctx.navigator.navigate(target, ctx.now);
    apply_outcome(ctx, outcome);
}

fn apply_outcome(ctx: &mut UpdateContext<'_>, outcome: NavigationOutcome) {
    if !outcome.changed() {
        return;
    }

    ctx.screens.unmount(outcome.previous);
    ctx.screens.mount(outcome.state.current, ctx.now);

    // A change during a running slide starts over from the keyed screen
    *ctx.transition = Some(SlideTransition::begin(
        outcome.previous,
        outcome.state.current,
        outcome.state.direction,
        ctx.now,
        ctx.config.timing.transition(),
        SCREEN_SLIDE_DISTANCE,
    ));
}

pub fn handle_onboarding_message(
    ctx: &mut UpdateContext<'_>,
    message: onboarding::Message,
) -> Task<Message> {
    if !ctx.is_current(Screen::Onboarding) {
        return Task::none();
    }
    let event = onboarding::update(
        &mut ctx.screens.onboarding,
        message,
        ctx.now,
        ctx.config.timing.transition(),
    );
    if event == OnboardingEvent::Complete {
        navigate(ctx, Screen::Login);
    }
    Task::none()
}

pub fn handle_login_message(ctx: &mut UpdateContext<'_>, message: login::Message) -> Task<Message> {
    if !ctx.is_current(Screen::Login) {
        return Task::none();
    }
    if login::update(&mut ctx.screens.login, message) == LoginEvent::LoggedIn {
        navigate(ctx, Screen::Home);
    }
    Task::none()
}

pub fn handle_home_message(ctx: &mut UpdateContext<'_>, message: &home::Message) -> Task<Message> {
    if !ctx.is_current(Screen::Home) {
        return Task::none();
    }
    let HomeEvent::Navigate(target) = home::update(message);
    navigate(ctx, target);
    Task::none()
}

pub fn handle_camera_message(
    ctx: &mut UpdateContext<'_>,
    message: camera::Message,
) -> Task<Message> {
    if !ctx.is_current(Screen::Camera) {
        return Task::none();
    }
    match camera::update(&mut ctx.screens.camera, message, ctx.now, &ctx.config.camera) {
        CameraEvent::None => Task::none(),
        CameraEvent::CopyToClipboard(contents) => {
            tracing::debug!(chars = contents.chars().count(), "copying recognized text");
            clipboard::write(contents)
        }
    }
}

pub fn handle_library_message(
    ctx: &mut UpdateContext<'_>,
    message: library::Message,
) -> Task<Message> {
    if !ctx.is_current(Screen::Library) {
        return Task::none();
    }
    if let LibraryEvent::Navigate(target) = library::update(&mut ctx.screens.library, message) {
        navigate(ctx, target);
    }
    Task::none()
}

pub fn handle_training_message(
    ctx: &mut UpdateContext<'_>,
    message: training::Message,
) -> Task<Message> {
    if ctx.is_current(Screen::Training) {
        training::update(
            &mut ctx.screens.training,
            message,
            ctx.now,
            &ctx.config.training,
        );
    }
    Task::none()
}

pub fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: settings::Message,
) -> Task<Message> {
    if !ctx.is_current(Screen::Settings) {
        return Task::none();
    }
    match settings::update(&mut ctx.screens.settings, message) {
        SettingsEvent::None => {}
        SettingsEvent::DarkModeChanged(enabled) => {
            *ctx.dark_mode = enabled;
            tracing::debug!(dark_mode = enabled, "theme changed");
        }
        SettingsEvent::LanguageSelected(locale) => {
            ctx.i18n.set_locale(locale);
            tracing::debug!(locale = %ctx.i18n.current_locale(), "language changed");
        }
        SettingsEvent::Navigate(target) => navigate(ctx, target),
        SettingsEvent::SignOut => {
            tracing::info!("signed out");
            navigate(ctx, Screen::Login);
        }
    }
    Task::none()
}

pub fn handle_profile_message(
    ctx: &mut UpdateContext<'_>,
    message: &profile::Message,
) -> Task<Message> {
    if !ctx.is_current(Screen::Profile) {
        return Task::none();
    }
    if let ProfileEvent::Navigate(target) = profile::update(message) {
        navigate(ctx, target);
    }
    Task::none()
}

pub fn handle_bottom_nav_message(
    ctx: &mut UpdateContext<'_>,
    message: &bottom_nav::Message,
) -> Task<Message> {
    if !ctx.navigator.shows_bottom_nav() {
        tracing::trace!("bottom bar hidden; dropping selection");
        return Task::none();
    }
    let BottomNavEvent::Navigate(target) = bottom_nav::update(message);
    navigate(ctx, target);
    Task::none()
}

/// Advances every deferred task and animation to `ctx.now`.
pub fn handle_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if let Some(outcome) = ctx.navigator.tick(ctx.now) {
        apply_outcome(ctx, outcome);
    }

    match ctx.navigator.current() {
        Screen::Camera => camera::tick(
            &mut ctx.screens.camera,
            ctx.now,
            &ctx.config.camera,
            &mut rand::thread_rng(),
        ),
        Screen::Training => training::tick(&mut ctx.screens.training, ctx.now, &ctx.config.training),
        _ => {}
    }

    // The outgoing layer is unmounted once the slide completes
    if ctx
        .transition
        .is_some_and(|transition| transition.is_finished(ctx.now))
    {
        *ctx.transition = None;
    }

    Task::none()
}

/// Cancels all pending work, then closes the window.
pub fn handle_close_request(ctx: &mut UpdateContext<'_>, id: window::Id) -> Task<Message> {
    ctx.navigator.teardown();
    ctx.screens.unmount(ctx.navigator.current());
    *ctx.transition = None;
    tracing::info!("shutting down");
    window::close(id)
}
