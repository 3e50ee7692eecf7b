// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the current screen, the outgoing one while a slide is running,
//! and the bottom navigation bar on the screens that show it.

use super::{Message, ScreenStates};
use crate::i18n::fluent::I18n;
use crate::navigation::{Navigator, Screen, SlideTransition};
use crate::ui::components::slide;
use crate::ui::theming::AppTheme;
use crate::ui::{
    bottom_nav, camera, home, library, login, onboarding, profile, settings, splash, training,
};
use iced::{
    widget::{Column, Container},
    Element, Length,
};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub config_warning: Option<&'a str>,
    pub navigator: &'a Navigator,
    pub transition: Option<SlideTransition<Screen>>,
    pub screens: &'a ScreenStates,
    pub dark_mode: bool,
    pub now: Instant,
    pub width: f32,
}

/// Renders the current application view.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let app_theme = AppTheme::from_dark_mode(ctx.dark_mode);
    let current = ctx.navigator.current();

    let incoming = view_screen(&ctx, current, app_theme);
    let body = match ctx
        .transition
        .filter(|transition| !transition.is_finished(ctx.now))
    {
        Some(transition) => slide::stack(
            transition.frame(ctx.now),
            Some(view_screen(&ctx, transition.from, app_theme)),
            incoming,
            ctx.width,
            app_theme,
        ),
        None => incoming,
    };

    let mut column = Column::new().push(
        Container::new(body)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    if ctx.navigator.shows_bottom_nav() {
        column = column.push(
            bottom_nav::view(bottom_nav::ViewContext {
                i18n: ctx.i18n,
                theme: app_theme,
                active: current,
            })
            .map(Message::BottomNav),
        );
    }

    Container::new(column.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_screen<'a>(
    ctx: &ViewContext<'a>,
    screen: Screen,
    app_theme: AppTheme,
) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let screens = ctx.screens;

    match screen {
        Screen::Splash => splash::view(splash::ViewContext {
            i18n,
            elapsed: ctx.now.saturating_duration_since(screens.splash_entered_at),
        }),
        Screen::Onboarding => onboarding::view(onboarding::ViewContext {
            i18n,
            theme: app_theme,
            state: &screens.onboarding,
            now: ctx.now,
            width: ctx.width,
        })
        .map(Message::Onboarding),
        Screen::Login => login::view(login::ViewContext {
            i18n,
            theme: app_theme,
            state: &screens.login,
        })
        .map(Message::Login),
        Screen::Home => home::view(home::ViewContext {
            i18n,
            theme: app_theme,
        })
        .map(Message::Home),
        Screen::Camera => camera::view(camera::ViewContext {
            i18n,
            theme: app_theme,
            state: &screens.camera,
        })
        .map(Message::Camera),
        Screen::Library => library::view(library::ViewContext {
            i18n,
            theme: app_theme,
            state: &screens.library,
            gestures: library::catalog(),
        })
        .map(Message::Library),
        Screen::Training => training::view(training::ViewContext {
            i18n,
            theme: app_theme,
            state: &screens.training,
        })
        .map(Message::Training),
        Screen::Settings => settings::view(settings::ViewContext {
            i18n,
            theme: app_theme,
            state: &screens.settings,
            dark_mode: ctx.dark_mode,
            config_warning: ctx.config_warning,
        })
        .map(Message::Settings),
        Screen::Profile => profile::view(profile::ViewContext {
            i18n,
            theme: app_theme,
        })
        .map(Message::Profile),
    }
}
