// SPDX-License-Identifier: MPL-2.0
//! Simulated gesture recognition.
//!
//! There is no camera. While recognition runs and no letter is shown, a
//! detection task fires after the detection delay and shows a random letter
//! with a random confidence. A commit task then appends that letter to the
//! output text after the commit delay and clears it, which lets the next
//! detection start.

use crate::app::config::{CameraConfig, CONFIDENCE_SPREAD_PERCENT, MIN_CONFIDENCE_PERCENT};
use crate::deferred::Deferred;
use crate::i18n::fluent::I18n;
use crate::ui::components::{header, tile};
use crate::ui::design_tokens::{font, opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::AppTheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, scrollable, text, Column, Row, Space, Stack};
use iced::{Background, Color, Element, Length, Theme};
use rand::Rng;
use std::time::Instant;

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A letter reported by the mock recognizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detection {
    pub letter: char,
    /// Percent, in `[85, 100)`.
    pub confidence: f32,
}

impl Detection {
    /// Draws a random letter and confidence.
    pub fn random(rng: &mut impl Rng) -> Self {
        let letter = char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())]);
        let confidence = MIN_CONFIDENCE_PERCENT + rng.gen::<f32>() * CONFIDENCE_SPREAD_PERCENT;
        // f32 rounding can land exactly on the upper bound
        Self {
            letter,
            confidence: confidence.min(MIN_CONFIDENCE_PERCENT + CONFIDENCE_SPREAD_PERCENT - 0.01),
        }
    }
}

/// Local state, recreated each time the screen is entered.
#[derive(Debug, Clone, Default)]
pub struct State {
    recognizing: bool,
    output: String,
    current: Option<Detection>,
    detection: Deferred<()>,
    commit: Deferred<char>,
}

impl State {
    #[must_use]
    pub fn is_recognizing(&self) -> bool {
        self.recognizing
    }

    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    #[must_use]
    pub fn current(&self) -> Option<Detection> {
        self.current
    }

    /// Whether any deferred work is waiting and the screen needs ticks.
    #[must_use]
    pub fn has_pending_work(&self) -> bool {
        self.detection.is_pending() || self.commit.is_pending()
    }

    /// Stops recognition and cancels both tasks. Called when leaving the screen.
    pub fn teardown(&mut self) {
        self.recognizing = false;
        let cancelled = self.detection.cancel() | self.commit.cancel();
        if cancelled {
            tracing::trace!("camera tasks cancelled");
        }
    }

    fn schedule_detection(&mut self, now: Instant, config: &CameraConfig) {
        if self.recognizing && self.current.is_none() {
            self.detection.schedule(now, config.detection_delay(), ());
        }
    }
}

/// Messages emitted by the camera screen.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleRecognition,
    ClearText,
    CopyText,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Write the text to the system clipboard.
    CopyToClipboard(String),
}

/// Process a camera message and return the corresponding event.
pub fn update(state: &mut State, message: Message, now: Instant, config: &CameraConfig) -> Event {
    match message {
        Message::ToggleRecognition => {
            state.recognizing = !state.recognizing;
            if state.recognizing {
                // A fresh run starts from an empty viewfinder
                state.commit.cancel();
                state.current = None;
                state.schedule_detection(now, config);
                tracing::debug!("recognition started");
            } else {
                // A letter already on screen still commits
                state.detection.cancel();
                tracing::debug!("recognition paused");
            }
            Event::None
        }
        Message::ClearText => {
            state.output.clear();
            Event::None
        }
        Message::CopyText => {
            if state.output.is_empty() {
                Event::None
            } else {
                Event::CopyToClipboard(state.output.clone())
            }
        }
    }
}

/// Advances the mock recognizer to `now`.
pub fn tick(state: &mut State, now: Instant, config: &CameraConfig, rng: &mut impl Rng) {
    if let Some(letter) = state.commit.poll(now) {
        state.output.push(letter);
        state.current = None;
        tracing::trace!(%letter, "letter committed");
        state.schedule_detection(now, config);
    }

    if state.detection.poll(now).is_some() {
        let detection = Detection::random(rng);
        tracing::debug!(
            letter = %detection.letter,
            confidence = detection.confidence,
            "letter detected"
        );
        state.current = Some(detection);
        state
            .commit
            .schedule(now, config.commit_delay(), detection.letter);
    }
}

/// Contextual data needed to render the camera screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme: AppTheme,
    pub state: &'a State,
}

/// Render the camera screen.
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'static, Message> {
    let app_theme = ctx.theme;
    let i18n = ctx.i18n;
    let state = ctx.state;

    let title = header::screen_header(
        i18n.tr("camera-title"),
        i18n.tr("camera-subtitle"),
        app_theme,
    );

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(title)
        .push(view_viewfinder(i18n, state, app_theme))
        .push(view_output(i18n, state, app_theme))
        .push(view_toggle(i18n, state, app_theme));

    container(scrollable(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::screen(app_theme))
        .into()
}

fn view_viewfinder(i18n: &I18n, state: &State, app_theme: AppTheme) -> Element<'static, Message> {
    let feed = container(text("✋").size(typography::DISPLAY_LG).color(Color {
        a: 0.25,
        ..palette::WHITE
    }))
    .width(Length::Fill)
    .height(Length::Fixed(sizing::HERO * 2.5))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(move |theme: &Theme| container::Style {
        background: Some(Background::Color(palette::CHARCOAL)),
        ..styles::container::card(app_theme)(theme)
    });

    let mut badges = Row::new().spacing(spacing::XS).padding(spacing::MD);
    if state.recognizing {
        badges = badges.push(
            container(text(format!("● {}", i18n.tr("camera-recording"))).font(font::HEAVY))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::container::pill(app_theme, palette::RED)),
        );
    }

    let overlay: Element<'static, Message> = match state.current {
        Some(detection) => container(
            Column::new()
                .spacing(spacing::XS)
                .align_x(Horizontal::Center)
                .push(
                    container(text(i18n.tr("camera-detecting").to_uppercase()).font(font::HEAVY))
                        .padding([spacing::XXS, spacing::SM])
                        .style(styles::container::pill(app_theme, palette::GREEN)),
                )
                .push(
                    container(
                        text(detection.letter.to_string())
                            .size(typography::DISPLAY_LG)
                            .font(font::HEAVY),
                    )
                    .padding([spacing::XS, spacing::XL])
                    .style(styles::container::accent_card(app_theme, palette::YELLOW)),
                )
                .push(
                    container(
                        text(i18n.tr_with_args(
                            "camera-confidence",
                            &[("percent", &format!("{:.0}", detection.confidence))],
                        ))
                        .font(font::HEAVY),
                    )
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::container::pill(app_theme, palette::WHITE)),
                ),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into(),
        None => container(
            container(text(i18n.tr("camera-position-hint")).font(font::BOLD))
                .padding([spacing::XS, spacing::MD])
                .style(styles::container::pill(app_theme, palette::WHITE)),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Bottom)
        .padding(spacing::MD)
        .into(),
    };

    Stack::new()
        .width(Length::Fill)
        .push(feed)
        .push(badges)
        .push(overlay)
        .into()
}

fn view_output(i18n: &I18n, state: &State, app_theme: AppTheme) -> Element<'static, Message> {
    let heading = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(header::section_title(i18n.tr("camera-output-title"), app_theme))
        .push(Space::new().width(Length::Fill))
        .push(
            button(text("📋").size(typography::BODY_LG))
                .on_press(Message::CopyText)
                .style(styles::button::outlined(app_theme)),
        )
        .push(
            button(text("↺").size(typography::BODY_LG).font(font::HEAVY))
                .on_press(Message::ClearText)
                .style(styles::button::outlined(app_theme)),
        );

    let body: Element<'static, Message> = if state.output.is_empty() {
        text(i18n.tr("camera-output-placeholder"))
            .size(typography::TITLE_SM)
            .color(Color {
                a: opacity::BACKDROP,
                ..app_theme.text
            })
            .into()
    } else {
        text(state.output.clone())
            .size(typography::TITLE_LG)
            .font(font::HEAVY)
            .into()
    };

    tile::card(
        Column::new()
            .spacing(spacing::MD)
            .push(heading)
            .push(body)
            .into(),
        app_theme,
    )
}

fn view_toggle(i18n: &I18n, state: &State, app_theme: AppTheme) -> Element<'static, Message> {
    let (label, fill) = if state.recognizing {
        (format!("⏸ {}", i18n.tr("camera-pause")), palette::RED)
    } else {
        (format!("▶ {}", i18n.tr("camera-start")), palette::GREEN)
    };

    button(
        text(label.to_uppercase())
            .size(typography::BODY_LG)
            .font(font::HEAVY)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .on_press(Message::ToggleRecognition)
    .style(styles::button::accent(app_theme, fill))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn started(now: Instant, config: &CameraConfig) -> State {
        let mut state = State::default();
        update(&mut state, Message::ToggleRecognition, now, config);
        state
    }

    #[test]
    fn random_detection_stays_in_range() {
        let mut rng = rng();
        for _ in 0..500 {
            let detection = Detection::random(&mut rng);
            assert!(detection.letter.is_ascii_uppercase());
            assert!(detection.confidence >= 85.0);
            assert!(detection.confidence < 100.0);
        }
    }

    #[test]
    fn letter_appears_after_detection_delay_then_commits() {
        let config = CameraConfig::default();
        let t0 = Instant::now();
        let mut state = started(t0, &config);
        let mut rng = rng();

        tick(&mut state, t0 + Duration::from_millis(1999), &config, &mut rng);
        assert!(state.current().is_none());

        let shown_at = t0 + Duration::from_secs(2);
        tick(&mut state, shown_at, &config, &mut rng);
        let detection = state.current().expect("letter shown");
        assert_eq!(state.output(), "");

        tick(&mut state, shown_at + Duration::from_millis(1500), &config, &mut rng);
        assert!(state.current().is_none());
        assert_eq!(state.output(), detection.letter.to_string());
        assert!(state.has_pending_work(), "next detection scheduled");
    }

    #[test]
    fn pausing_cancels_detection_but_shown_letter_commits() {
        let config = CameraConfig::default();
        let t0 = Instant::now();
        let mut rng = rng();

        // Pause before anything is detected
        let mut state = started(t0, &config);
        update(&mut state, Message::ToggleRecognition, t0 + Duration::from_secs(1), &config);
        tick(&mut state, t0 + Duration::from_secs(10), &config, &mut rng);
        assert!(state.current().is_none());
        assert!(!state.has_pending_work());

        // Pause while a letter is displayed
        let mut state = started(t0, &config);
        tick(&mut state, t0 + Duration::from_secs(2), &config, &mut rng);
        update(&mut state, Message::ToggleRecognition, t0 + Duration::from_secs(3), &config);
        tick(&mut state, t0 + Duration::from_secs(4), &config, &mut rng);
        assert_eq!(state.output().len(), 1);
        assert!(!state.has_pending_work(), "no detection while paused");
    }

    #[test]
    fn restarting_clears_displayed_letter() {
        let config = CameraConfig::default();
        let t0 = Instant::now();
        let mut rng = rng();
        let mut state = started(t0, &config);
        tick(&mut state, t0 + Duration::from_secs(2), &config, &mut rng);

        let pause = t0 + Duration::from_millis(2100);
        update(&mut state, Message::ToggleRecognition, pause, &config);
        update(&mut state, Message::ToggleRecognition, pause, &config);
        assert!(state.current().is_none());

        tick(&mut state, pause + Duration::from_secs(1), &config, &mut rng);
        assert_eq!(state.output(), "", "cancelled letter never commits");
    }

    #[test]
    fn teardown_stops_everything() {
        let config = CameraConfig::default();
        let t0 = Instant::now();
        let mut state = started(t0, &config);
        state.teardown();
        assert!(!state.is_recognizing());
        assert!(!state.has_pending_work());
    }

    #[test]
    fn copy_and_clear() {
        let config = CameraConfig::default();
        let now = Instant::now();
        let mut state = State::default();
        assert_eq!(update(&mut state, Message::CopyText, now, &config), Event::None);

        state.output.push_str("HI");
        assert_eq!(
            update(&mut state, Message::CopyText, now, &config),
            Event::CopyToClipboard("HI".to_string())
        );
        update(&mut state, Message::ClearText, now, &config);
        assert_eq!(state.output(), "");
    }
}
