// SPDX-License-Identifier: MPL-2.0
//! Sign-in / sign-up form.
//!
//! No authentication happens: any submission with a non-empty email and
//! password counts as a successful login.

use crate::i18n::fluent::I18n;
use crate::ui::components::header;
use crate::ui::design_tokens::{font, palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::AppTheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    button, container, rule::horizontal as horizontal_rule, scrollable, text, text_input, Column, Row, Space,
};
use iced::{Element, Length};

/// Which form is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    SignIn,
    SignUp,
}

/// Local form state, recreated each time the screen is entered.
#[derive(Debug, Clone, Default)]
pub struct State {
    mode: Mode,
    email: String,
    password: String,
    show_password: bool,
    /// Set after a submit with an empty field, cleared on the next edit.
    missing_input: bool,
}

impl State {
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    #[must_use]
    pub fn is_password_visible(&self) -> bool {
        self.show_password
    }

    #[must_use]
    pub fn has_missing_input(&self) -> bool {
        self.missing_input
    }

    /// Whether the form would be accepted as is.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }
}

/// Messages emitted by the login screen.
#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    PasswordChanged(String),
    TogglePasswordVisibility,
    ToggleMode,
    Submit,
    ForgotPassword,
    SocialLogin(SocialProvider),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialProvider {
    Google,
    GitHub,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    LoggedIn,
}

/// Process a login message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::EmailChanged(email) => {
            state.email = email;
            state.missing_input = false;
            Event::None
        }
        Message::PasswordChanged(password) => {
            state.password = password;
            state.missing_input = false;
            Event::None
        }
        Message::TogglePasswordVisibility => {
            state.show_password = !state.show_password;
            Event::None
        }
        Message::ToggleMode => {
            state.mode = match state.mode {
                Mode::SignIn => Mode::SignUp,
                Mode::SignUp => Mode::SignIn,
            };
            Event::None
        }
        Message::Submit => {
            if state.can_submit() {
                tracing::info!(mode = ?state.mode, "login accepted");
                Event::LoggedIn
            } else {
                state.missing_input = true;
                Event::None
            }
        }
        Message::ForgotPassword | Message::SocialLogin(_) => {
            tracing::debug!("no account backend; ignoring");
            Event::None
        }
    }
}

/// Contextual data needed to render the login screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme: AppTheme,
    pub state: &'a State,
}

/// Render the login screen.
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let app_theme = ctx.theme;
    let i18n = ctx.i18n;
    let state = ctx.state;
    let signing_in = state.mode == Mode::SignIn;

    let (title_key, subtitle_key, submit_label) = if signing_in {
        (
            "login-title-sign-in",
            "login-subtitle-sign-in",
            format!("→ {}", i18n.tr("login-submit-sign-in")),
        )
    } else {
        (
            "login-title-sign-up",
            "login-subtitle-sign-up",
            format!("✓ {}", i18n.tr("login-submit-sign-up")),
        )
    };

    let heading = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(header::badge(
            i18n.tr(title_key).to_uppercase(),
            typography::TITLE_LG,
            app_theme,
        ))
        .push(header::muted(i18n.tr(subtitle_key), typography::BODY_LG, app_theme));

    let email = text_input(&i18n.tr("login-email-placeholder").to_uppercase(), &state.email)
        .on_input(Message::EmailChanged)
        .on_submit(Message::Submit)
        .padding(spacing::MD)
        .size(typography::BODY_LG);

    let password = text_input(
        &i18n.tr("login-password-placeholder").to_uppercase(),
        &state.password,
    )
    .secure(!state.show_password)
    .on_input(Message::PasswordChanged)
    .on_submit(Message::Submit)
    .padding(spacing::MD)
    .size(typography::BODY_LG);

    let visibility_icon = if state.show_password { "🙈" } else { "👁" };
    let password_row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(password)
        .push(
            button(text(visibility_icon).size(typography::TITLE_SM))
                .on_press(Message::TogglePasswordVisibility)
                .padding(spacing::SM)
                .style(styles::button::outlined(app_theme)),
        );

    let forgot = Row::new().push(Space::new().width(Length::Fill)).push(
        button(
            text(i18n.tr("login-forgot-password"))
                .size(typography::CAPTION)
                .font(font::HEAVY),
        )
        .on_press(Message::ForgotPassword)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::accent(app_theme, palette::YELLOW)),
    );

    let mut form = Column::new()
        .spacing(spacing::MD)
        .push(email)
        .push(password_row);
    if signing_in {
        form = form.push(forgot);
    }
    if state.missing_input {
        form = form.push(
            text(i18n.tr("login-missing-input"))
                .size(typography::BODY)
                .font(font::BOLD)
                .color(palette::RED),
        );
    }
    form = form.push(
        button(
            text(submit_label.to_uppercase())
                .font(font::HEAVY)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .width(Length::Fill)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT + spacing::MD))
        .padding(spacing::MD)
        .on_press(Message::Submit)
        .style(styles::button::accent(app_theme, palette::PINK)),
    );

    let divider = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(horizontal_rule(2))
        .push(text(i18n.tr("login-divider").to_uppercase()).font(font::HEAVY))
        .push(horizontal_rule(2));

    let social = Row::new()
        .spacing(spacing::MD)
        .push(social_button("G  GOOGLE", SocialProvider::Google, app_theme))
        .push(social_button("⌥  GITHUB", SocialProvider::GitHub, app_theme));

    let switch_prompt = if signing_in {
        ("login-no-account", "login-switch-sign-up")
    } else {
        ("login-have-account", "login-switch-sign-in")
    };
    let switch = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(text(i18n.tr(switch_prompt.0)).font(font::BOLD))
        .push(
            button(text(i18n.tr(switch_prompt.1).to_uppercase()).font(font::HEAVY))
                .on_press(Message::ToggleMode)
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::accent(app_theme, palette::PINK)),
        );

    let content = Column::new()
        .spacing(spacing::XL)
        .padding(spacing::XL)
        .max_width(sizing::MODAL_WIDTH + spacing::XXL * 2.0)
        .push(heading)
        .push(form)
        .push(divider)
        .push(social)
        .push(container(switch).width(Length::Fill).align_x(Horizontal::Center));

    container(scrollable(
        container(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .align_y(Vertical::Center)
    .style(styles::container::screen(AppTheme {
        background: palette::PURPLE,
        ..app_theme
    }))
    .into()
}

fn social_button(
    label: &'static str,
    provider: SocialProvider,
    app_theme: AppTheme,
) -> Element<'static, Message> {
    button(
        text(label)
            .font(font::HEAVY)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .on_press(Message::SocialLogin(provider))
    .style(styles::button::outlined(app_theme))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_submission_is_rejected_and_flagged() {
        let mut state = State::default();
        assert_eq!(update(&mut state, Message::Submit), Event::None);
        assert!(state.has_missing_input());

        update(&mut state, Message::EmailChanged("a@b.c".into()));
        assert!(!state.has_missing_input());
        assert_eq!(update(&mut state, Message::Submit), Event::None);
    }

    #[test]
    fn any_non_empty_credentials_log_in() {
        let mut state = State::default();
        update(&mut state, Message::EmailChanged("not-an-email".into()));
        update(&mut state, Message::PasswordChanged("x".into()));
        assert_eq!(update(&mut state, Message::Submit), Event::LoggedIn);
    }

    #[test]
    fn whitespace_email_does_not_count() {
        let mut state = State::default();
        update(&mut state, Message::EmailChanged("   ".into()));
        update(&mut state, Message::PasswordChanged("secret".into()));
        assert!(!state.can_submit());
    }

    #[test]
    fn sign_up_mode_also_logs_in() {
        let mut state = State::default();
        update(&mut state, Message::ToggleMode);
        assert_eq!(state.mode(), Mode::SignUp);
        update(&mut state, Message::EmailChanged("om@example.com".into()));
        update(&mut state, Message::PasswordChanged("pw".into()));
        assert_eq!(update(&mut state, Message::Submit), Event::LoggedIn);
    }

    #[test]
    fn toggles_and_inert_buttons_keep_the_form() {
        let mut state = State::default();
        update(&mut state, Message::TogglePasswordVisibility);
        assert!(state.is_password_visible());
        assert_eq!(update(&mut state, Message::ForgotPassword), Event::None);
        assert_eq!(
            update(&mut state, Message::SocialLogin(SocialProvider::GitHub)),
            Event::None
        );
        assert_eq!(state.email(), "");
        assert_eq!(state.password(), "");
    }
}
