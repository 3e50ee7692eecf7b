// SPDX-License-Identifier: MPL-2.0
//! Onboarding carousel.
//!
//! Three slides introduce the app. The slide index lives in a [`Carousel`];
//! every index change starts a half-width [`SlideTransition`] in the
//! carousel's direction. Finishing the last slide or skipping emits
//! [`Event::Complete`].

use crate::app::config::CAROUSEL_SLIDE_DISTANCE;
use crate::i18n::fluent::I18n;
use crate::navigation::{Carousel, CarouselStep, SlideTransition};
use crate::ui::components::{slide, tile};
use crate::ui::design_tokens::{border, font, palette, radius, shadow, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::AppTheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, text, Column, Row, Space};
use iced::{Background, Border, Color, Element, Length, Theme};
use std::time::{Duration, Instant};

/// One onboarding slide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slide {
    pub icon: &'static str,
    pub title_key: &'static str,
    pub description_key: &'static str,
    pub accent: Color,
}

pub const SLIDES: [Slide; 3] = [
    Slide {
        icon: "✋",
        title_key: "onboarding-slide-understand-title",
        description_key: "onboarding-slide-understand-description",
        accent: palette::PINK,
    },
    Slide {
        icon: "📷",
        title_key: "onboarding-slide-realtime-title",
        description_key: "onboarding-slide-realtime-description",
        accent: palette::PURPLE,
    },
    Slide {
        icon: "🔊",
        title_key: "onboarding-slide-speech-title",
        description_key: "onboarding-slide-speech-description",
        accent: palette::YELLOW,
    },
];

/// Local state, recreated each time the screen is entered.
#[derive(Debug, Clone)]
pub struct State {
    carousel: Carousel,
    transition: Option<SlideTransition<usize>>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            carousel: Carousel::new(SLIDES.len()),
            transition: None,
        }
    }
}

impl State {
    #[must_use]
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    /// Whether a slide animation still needs frames at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.transition
            .is_some_and(|transition| !transition.is_finished(now))
    }

    fn animate_from(&mut self, from: usize, now: Instant, duration: Duration) {
        self.transition = Some(SlideTransition::begin(
            from,
            self.carousel.index(),
            self.carousel.direction(),
            now,
            duration,
            CAROUSEL_SLIDE_DISTANCE,
        ));
    }
}

/// Messages emitted by the onboarding screen.
#[derive(Debug, Clone)]
pub enum Message {
    Next,
    Previous,
    JumpTo(usize),
    Skip,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Complete,
}

/// Process an onboarding message and return the corresponding event.
pub fn update(state: &mut State, message: Message, now: Instant, duration: Duration) -> Event {
    let from = state.carousel.index();
    match message {
        Message::Next => match state.carousel.next() {
            CarouselStep::Moved => {
                state.animate_from(from, now, duration);
                Event::None
            }
            CarouselStep::Completed => Event::Complete,
        },
        Message::Previous => {
            if state.carousel.previous() {
                state.animate_from(from, now, duration);
            }
            Event::None
        }
        Message::JumpTo(index) => {
            if index != from && state.carousel.jump_to(index) {
                state.animate_from(from, now, duration);
            }
            Event::None
        }
        Message::Skip => Event::Complete,
    }
}

/// Contextual data needed to render the onboarding screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme: AppTheme,
    pub state: &'a State,
    pub now: Instant,
    pub width: f32,
}

/// Render the onboarding screen.
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'static, Message> {
    let app_theme = ctx.theme;
    let carousel = ctx.state.carousel();

    let skip = button(
        text(format!("{} →", ctx.i18n.tr("onboarding-skip").to_uppercase())).font(font::HEAVY),
    )
    .on_press(Message::Skip)
    .padding([spacing::XS, spacing::MD])
    .style(styles::button::outlined(app_theme));

    let current = view_slide(ctx.i18n, SLIDES[carousel.index()], app_theme);
    let slides = match ctx.state.transition {
        Some(transition) if !transition.is_finished(ctx.now) => {
            let outgoing = view_slide(ctx.i18n, SLIDES[transition.from], app_theme);
            slide::stack(
                transition.frame(ctx.now),
                Some(outgoing),
                current,
                ctx.width,
                app_theme,
            )
        }
        _ => current,
    };

    let controls = view_controls(ctx.i18n, carousel, app_theme);

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .push(
            Row::new()
                .push(Space::new().width(Length::Fill))
                .push(skip),
        )
        .push(container(slides).width(Length::Fill).height(Length::Fill))
        .push(view_dots(carousel, app_theme))
        .push(controls);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::screen(app_theme))
        .into()
}

fn view_slide(i18n: &I18n, slide: Slide, app_theme: AppTheme) -> Element<'static, Message> {
    let illustration = container(text(slide.icon).size(typography::DISPLAY_LG))
        .width(Length::Fixed(sizing::HERO + spacing::XXL))
        .height(Length::Fixed(sizing::HERO + spacing::XXL))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::accent_card(app_theme, slide.accent));

    let title = text(i18n.tr(slide.title_key).to_uppercase())
        .size(typography::TITLE_MD)
        .font(font::HEAVY)
        .align_x(Horizontal::Center);

    let description = tile::card(
        text(i18n.tr(slide.description_key))
            .size(typography::BODY_LG)
            .font(font::BOLD)
            .align_x(Horizontal::Center)
            .width(Length::Fill)
            .into(),
        app_theme,
    );

    container(
        Column::new()
            .spacing(spacing::XL)
            .align_x(Horizontal::Center)
            .push(illustration)
            .push(title)
            .push(description),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .into()
}

fn view_dots(carousel: &Carousel, app_theme: AppTheme) -> Element<'static, Message> {
    let dots = (0..carousel.len()).fold(Row::new().spacing(spacing::SM), |row, index| {
        let active = index == carousel.index();
        let width = if active {
            sizing::PROGRESS_DOT_ACTIVE
        } else {
            sizing::PROGRESS_DOT
        };
        let fill = if active {
            SLIDES[index].accent
        } else {
            app_theme.card
        };
        row.push(
            button(Space::new())
                .width(Length::Fixed(width))
                .height(Length::Fixed(sizing::PROGRESS_DOT))
                .padding(0)
                .on_press(Message::JumpTo(index))
                .style(move |_theme: &Theme, _status| button::Style {
                    background: Some(Background::Color(fill)),
                    border: Border {
                        color: app_theme.border,
                        width: border::WIDTH_SM,
                        radius: radius::NONE.into(),
                    },
                    shadow: shadow::NONE,
                    ..Default::default()
                }),
        )
    });

    container(dots)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

fn view_controls(i18n: &I18n, carousel: &Carousel, app_theme: AppTheme) -> Element<'static, Message> {
    let next_label = if carousel.is_last() {
        format!("✓ {}", i18n.tr("onboarding-get-started").to_uppercase())
    } else {
        format!("{} →", i18n.tr("onboarding-next").to_uppercase())
    };
    let next = button(
        text(next_label)
            .font(font::HEAVY)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::BUTTON_HEIGHT + spacing::MD))
    .padding(spacing::MD)
    .on_press(Message::Next)
    .style(styles::button::accent(app_theme, SLIDES[carousel.index()].accent));

    let mut row = Row::new().spacing(spacing::MD);
    if carousel.can_go_back() {
        row = row.push(
            button(
                text(format!("← {}", i18n.tr("onboarding-back").to_uppercase()))
                    .font(font::HEAVY)
                    .width(Length::Fill)
                    .align_x(Horizontal::Center),
            )
            .width(Length::Fill)
            .height(Length::Fixed(sizing::BUTTON_HEIGHT + spacing::MD))
            .padding(spacing::MD)
            .on_press(Message::Previous)
            .style(styles::button::outlined(app_theme)),
        );
    }
    row.push(next).into()
}
