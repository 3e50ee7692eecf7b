// SPDX-License-Identifier: MPL-2.0
//! Settings screen: profile card, preference toggles, language selection,
//! app info and sign out.
//!
//! Preference toggles other than dark mode are local to the screen and reset
//! each time it is entered. Dark mode and language live at the application
//! root and are changed through [`Event`]s.

use crate::i18n::fluent::I18n;
use crate::navigation::Screen;
use crate::ui::components::{header, tile};
use crate::ui::design_tokens::{font, palette, sizing, spacing, typography};
use crate::ui::home::USER_NAME;
use crate::ui::styles;
use crate::ui::theming::AppTheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    button, container, rule::horizontal as horizontal_rule, scrollable, text, toggler, Column, Row, Space,
};
use iced::{Color, Element, Length};
use unic_langid::LanguageIdentifier;

pub const USER_EMAIL: &str = "om@example.com";

const TOGGLE_SIZE: f32 = 20.0;

/// Preferences held by the settings screen itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    VoiceOutput,
    RealtimePreview,
    Notifications,
    HapticFeedback,
    OfflineMode,
}

impl Preference {
    fn keys(self) -> (&'static str, &'static str) {
        match self {
            Preference::VoiceOutput => ("settings-voice-output", "settings-voice-output-description"),
            Preference::RealtimePreview => {
                ("settings-realtime-preview", "settings-realtime-preview-description")
            }
            Preference::Notifications => {
                ("settings-notifications", "settings-notifications-description")
            }
            Preference::HapticFeedback => ("settings-haptic", "settings-haptic-description"),
            Preference::OfflineMode => ("settings-offline", "settings-offline-description"),
        }
    }

    fn accent(self) -> Color {
        match self {
            Preference::VoiceOutput => palette::PINK,
            Preference::RealtimePreview => palette::YELLOW,
            Preference::Notifications => palette::BLUE,
            Preference::HapticFeedback => palette::GREEN,
            Preference::OfflineMode => palette::AMBER,
        }
    }
}

/// Local state, recreated each time the screen is entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    voice_output: bool,
    realtime_preview: bool,
    notifications: bool,
    haptic_feedback: bool,
    offline_mode: bool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            voice_output: true,
            realtime_preview: true,
            notifications: false,
            haptic_feedback: true,
            offline_mode: false,
        }
    }
}

impl State {
    #[must_use]
    pub fn is_enabled(&self, preference: Preference) -> bool {
        match preference {
            Preference::VoiceOutput => self.voice_output,
            Preference::RealtimePreview => self.realtime_preview,
            Preference::Notifications => self.notifications,
            Preference::HapticFeedback => self.haptic_feedback,
            Preference::OfflineMode => self.offline_mode,
        }
    }

    fn set(&mut self, preference: Preference, enabled: bool) {
        let slot = match preference {
            Preference::VoiceOutput => &mut self.voice_output,
            Preference::RealtimePreview => &mut self.realtime_preview,
            Preference::Notifications => &mut self.notifications,
            Preference::HapticFeedback => &mut self.haptic_feedback,
            Preference::OfflineMode => &mut self.offline_mode,
        };
        *slot = enabled;
    }
}

/// Messages emitted by the settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    PreferenceToggled(Preference, bool),
    DarkModeToggled(bool),
    LanguageSelected(LanguageIdentifier),
    OpenProfile,
    OpenHelp,
    SignOut,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    DarkModeChanged(bool),
    LanguageSelected(LanguageIdentifier),
    Navigate(Screen),
    SignOut,
}

/// Process a settings message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::PreferenceToggled(preference, enabled) => {
            state.set(preference, enabled);
            Event::None
        }
        Message::DarkModeToggled(enabled) => Event::DarkModeChanged(enabled),
        Message::LanguageSelected(locale) => Event::LanguageSelected(locale),
        Message::OpenProfile => Event::Navigate(Screen::Profile),
        Message::OpenHelp => {
            tracing::debug!("no help center; ignoring");
            Event::None
        }
        Message::SignOut => Event::SignOut,
    }
}

/// Contextual data needed to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme: AppTheme,
    pub state: &'a State,
    pub dark_mode: bool,
    /// i18n key of a problem met while loading the configuration.
    pub config_warning: Option<&'a str>,
}

/// Render the settings screen.
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'static, Message> {
    let app_theme = ctx.theme;
    let i18n = ctx.i18n;

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(header::screen_header(
            i18n.tr("settings-title"),
            i18n.tr("settings-subtitle"),
            app_theme,
        ))
        .push(view_profile_card(i18n, app_theme))
        .push(view_preferences(&ctx))
        .push(view_general(i18n, app_theme))
        .push(view_app_info(i18n, ctx.config_warning, app_theme))
        .push(
            button(
                text(format!("⏻ {}", i18n.tr("settings-sign-out").to_uppercase()))
                    .font(font::HEAVY)
                    .width(Length::Fill)
                    .align_x(Horizontal::Center),
            )
            .width(Length::Fill)
            .padding(spacing::MD)
            .on_press(Message::SignOut)
            .style(styles::button::accent(app_theme, palette::RED)),
        );

    container(scrollable(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::screen(app_theme))
        .into()
}

fn view_profile_card(i18n: &I18n, app_theme: AppTheme) -> Element<'static, Message> {
    let avatar = container(
        text(USER_NAME.chars().next().map(String::from).unwrap_or_default())
            .size(typography::TITLE_LG)
            .font(font::HEAVY),
    )
    .width(Length::Fixed(sizing::ICON_XL + spacing::MD))
    .height(Length::Fixed(sizing::ICON_XL + spacing::MD))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(styles::container::accent_card(app_theme, palette::PINK));

    let identity = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(
            text(USER_NAME.to_uppercase())
                .size(typography::TITLE_MD)
                .font(font::HEAVY),
        )
        .push(header::muted(
            USER_EMAIL.to_string(),
            typography::BODY,
            app_theme,
        ));

    button(
        Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(avatar)
            .push(identity)
            .push(text(i18n.tr("settings-edit-profile").to_uppercase()).font(font::HEAVY)),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .on_press(Message::OpenProfile)
    .style(styles::button::accent(app_theme, palette::PURPLE))
    .into()
}

fn view_preferences(ctx: &ViewContext<'_>) -> Element<'static, Message> {
    let app_theme = ctx.theme;
    let i18n = ctx.i18n;

    let voice = preference_row(i18n, Preference::VoiceOutput, ctx.state, app_theme);
    let dark_mode = toggle_row(
        "🌙",
        i18n.tr("settings-dark-mode"),
        i18n.tr("settings-dark-mode-description"),
        palette::PURPLE,
        toggler(ctx.dark_mode)
            .on_toggle(Message::DarkModeToggled)
            .size(TOGGLE_SIZE),
        app_theme,
    );

    let rows = [
        Preference::RealtimePreview,
        Preference::Notifications,
        Preference::HapticFeedback,
        Preference::OfflineMode,
    ]
    .into_iter()
    .fold(
        Column::new().spacing(spacing::MD).push(voice).push(dark_mode),
        |column, preference| column.push(preference_row(i18n, preference, ctx.state, app_theme)),
    );

    Column::new()
        .spacing(spacing::MD)
        .push(header::section_title(i18n.tr("settings-preferences"), app_theme))
        .push(tile::card(rows.into(), app_theme))
        .into()
}

fn preference_row(
    i18n: &I18n,
    preference: Preference,
    state: &State,
    app_theme: AppTheme,
) -> Element<'static, Message> {
    let (title_key, description_key) = preference.keys();
    let icon = match preference {
        Preference::VoiceOutput => "🔊",
        Preference::RealtimePreview => "👁",
        Preference::Notifications => "🔔",
        Preference::HapticFeedback => "📳",
        Preference::OfflineMode => "📡",
    };
    toggle_row(
        icon,
        i18n.tr(title_key),
        i18n.tr(description_key),
        preference.accent(),
        toggler(state.is_enabled(preference))
            .on_toggle(move |enabled| Message::PreferenceToggled(preference, enabled))
            .size(TOGGLE_SIZE),
        app_theme,
    )
}

fn toggle_row(
    icon: &'static str,
    title: String,
    description: String,
    accent: Color,
    control: impl Into<Element<'static, Message>>,
    app_theme: AppTheme,
) -> Element<'static, Message> {
    Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(
            container(text(icon).size(typography::TITLE_SM))
                .padding(spacing::XS)
                .style(styles::container::pill(app_theme, accent)),
        )
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .width(Length::Fill)
                .push(text(title.to_uppercase()).font(font::HEAVY))
                .push(header::muted(description, typography::CAPTION, app_theme)),
        )
        .push(control)
        .into()
}

fn view_general(i18n: &I18n, app_theme: AppTheme) -> Element<'static, Message> {
    let mut languages = Row::new().spacing(spacing::XS);
    for locale in &i18n.available_locales {
        // Prefer a translated language name, fall back to the raw identifier
        let translated = i18n.tr(&format!("language-name-{}", locale));
        let label = if translated.starts_with("MISSING:") {
            locale.to_string()
        } else {
            translated
        };

        let is_current = i18n.current_locale() == locale;
        let style = if is_current {
            styles::button::accent(app_theme, palette::YELLOW)
        } else {
            styles::button::accent(app_theme, app_theme.card)
        };
        languages = languages.push(
            button(text(label).font(font::HEAVY))
                .padding([spacing::XS, spacing::MD])
                .on_press(Message::LanguageSelected(locale.clone()))
                .style(style),
        );
    }

    let language = Column::new()
        .spacing(spacing::SM)
        .push(
            Row::new()
                .spacing(spacing::MD)
                .align_y(Vertical::Center)
                .push(
                    container(text("🌐").size(typography::TITLE_SM))
                        .padding(spacing::XS)
                        .style(styles::container::pill(app_theme, palette::BLUE)),
                )
                .push(text(i18n.tr("settings-language").to_uppercase()).font(font::HEAVY)),
        )
        .push(languages);

    let help = button(
        Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(
                container(text("?").size(typography::TITLE_SM).font(font::HEAVY))
                    .padding([spacing::XS, spacing::SM])
                    .style(styles::container::pill(app_theme, palette::GREEN)),
            )
            .push(text(i18n.tr("settings-help").to_uppercase()).font(font::HEAVY))
            .push(Space::new().width(Length::Fill))
            .push(text("→").font(font::HEAVY)),
    )
    .width(Length::Fill)
    .padding(0)
    .on_press(Message::OpenHelp)
    .style(styles::button::text(app_theme));

    Column::new()
        .spacing(spacing::MD)
        .push(header::section_title(i18n.tr("settings-general"), app_theme))
        .push(tile::card(
            Column::new()
                .spacing(spacing::MD)
                .push(language)
                .push(horizontal_rule(2))
                .push(help)
                .into(),
            app_theme,
        ))
        .into()
}

fn view_app_info(
    i18n: &I18n,
    config_warning: Option<&str>,
    app_theme: AppTheme,
) -> Element<'static, Message> {
    let mut info = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(
            text(i18n.tr("app-name").to_uppercase())
                .size(typography::TITLE_MD)
                .font(font::HEAVY),
        )
        .push(text(i18n.tr_with_args(
            "settings-version",
            &[("version", env!("CARGO_PKG_VERSION"))],
        )))
        .push(header::muted(
            i18n.tr("settings-copyright"),
            typography::CAPTION,
            app_theme,
        ));

    if let Some(key) = config_warning {
        info = info.push(
            text(i18n.tr(key))
                .size(typography::CAPTION)
                .font(font::BOLD)
                .color(palette::RED)
                .align_x(Horizontal::Center),
        );
    }

    tile::accent_card(info.into(), palette::YELLOW, app_theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preference_defaults() {
        let state = State::default();
        assert!(state.is_enabled(Preference::VoiceOutput));
        assert!(state.is_enabled(Preference::RealtimePreview));
        assert!(!state.is_enabled(Preference::Notifications));
        assert!(state.is_enabled(Preference::HapticFeedback));
        assert!(!state.is_enabled(Preference::OfflineMode));
    }

    #[test]
    fn local_toggles_stay_local() {
        let mut state = State::default();
        let event = update(
            &mut state,
            Message::PreferenceToggled(Preference::Notifications, true),
        );
        assert_eq!(event, Event::None);
        assert!(state.is_enabled(Preference::Notifications));
    }

    #[test]
    fn dark_mode_toggle_is_reported_to_the_root() {
        let mut state = State::default();
        assert_eq!(
            update(&mut state, Message::DarkModeToggled(true)),
            Event::DarkModeChanged(true)
        );
        assert_eq!(state, State::default());
    }

    #[test]
    fn language_and_sign_out_events() {
        let mut state = State::default();
        let fr: LanguageIdentifier = "fr".parse().expect("valid locale");
        assert_eq!(
            update(&mut state, Message::LanguageSelected(fr.clone())),
            Event::LanguageSelected(fr)
        );
        assert_eq!(update(&mut state, Message::SignOut), Event::SignOut);
        assert_eq!(
            update(&mut state, Message::OpenProfile),
            Event::Navigate(Screen::Profile)
        );
        assert_eq!(update(&mut state, Message::OpenHelp), Event::None);
    }
}
