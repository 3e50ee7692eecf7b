// SPDX-License-Identifier: MPL-2.0
//! Simulated model training dashboard.
//!
//! While running, one epoch is added per epoch interval until the total is
//! reached. Metrics, loss history and dataset tiles are static.

use crate::app::config::{TrainingConfig, INITIAL_TRAINING_EPOCH, TOTAL_TRAINING_EPOCHS};
use crate::deferred::Deferred;
use crate::i18n::fluent::I18n;
use crate::ui::components::{header, tile};
use crate::ui::design_tokens::{border, font, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::AppTheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, progress_bar, scrollable, text, Column, Row, Space};
use iced::{Background, Border, Color, Element, Length, Theme};
use std::time::Instant;

/// (icon, value, label key, accent)
const METRICS: [(&str, &str, &str, Color); 4] = [
    ("🎯", "94.2%", "training-metric-accuracy", palette::GREEN),
    ("📉", "0.082", "training-metric-loss", palette::PINK),
    ("⚡", "32ms", "training-metric-speed", palette::YELLOW),
    ("⏱", "2h 14m", "training-metric-time-left", palette::BLUE),
];

/// Loss history bars, as fractions of the chart height.
const LOSS_HISTORY: [f32; 5] = [0.9, 0.65, 0.45, 0.3, 0.2];

const DATASET_SAMPLES: usize = 8;

const CHART_HEIGHT: f32 = 120.0;

/// Local state, recreated each time the screen is entered.
#[derive(Debug, Clone)]
pub struct State {
    epoch: u32,
    total: u32,
    running: bool,
    next_epoch: Deferred<()>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            epoch: INITIAL_TRAINING_EPOCH,
            total: TOTAL_TRAINING_EPOCHS,
            running: false,
            next_epoch: Deferred::new(),
        }
    }
}

impl State {
    #[must_use]
    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.epoch >= self.total
    }

    /// Completed share of the run, in `[0, 1]`.
    #[must_use]
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            return 1.0;
        }
        (self.epoch as f32 / self.total as f32).min(1.0)
    }

    /// Rounded completion percentage.
    #[must_use]
    pub fn percent(&self) -> u32 {
        (self.fraction() * 100.0).round() as u32
    }

    #[must_use]
    pub fn has_pending_work(&self) -> bool {
        self.next_epoch.is_pending()
    }

    /// Pauses training and drops the pending epoch.
    pub fn teardown(&mut self) {
        self.running = false;
        self.next_epoch.cancel();
    }
}

/// Messages emitted by the training screen.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleTraining,
    UploadSamples,
}

/// Process a training message.
pub fn update(state: &mut State, message: Message, now: Instant, config: &TrainingConfig) {
    match message {
        Message::ToggleTraining => {
            if state.running {
                state.teardown();
                tracing::debug!(epoch = state.epoch, "training paused");
            } else if state.is_complete() {
                tracing::debug!("training already complete");
            } else {
                state.running = true;
                state.next_epoch.schedule(now, config.epoch_interval(), ());
                tracing::debug!(epoch = state.epoch, "training started");
            }
        }
        Message::UploadSamples => {
            tracing::debug!("no dataset backend; ignoring upload");
        }
    }
}

/// Advances the simulated run to `now`.
pub fn tick(state: &mut State, now: Instant, config: &TrainingConfig) {
    if state.next_epoch.poll(now).is_none() {
        return;
    }

    state.epoch = (state.epoch + 1).min(state.total);
    if state.is_complete() {
        state.running = false;
        tracing::info!(total = state.total, "training finished");
    } else if state.running {
        state.next_epoch.schedule(now, config.epoch_interval(), ());
    }
}

/// Contextual data needed to render the training screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme: AppTheme,
    pub state: &'a State,
}

/// Render the training screen.
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'static, Message> {
    let app_theme = ctx.theme;
    let i18n = ctx.i18n;
    let state = ctx.state;

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(header::screen_header(
            i18n.tr("training-title"),
            i18n.tr("training-subtitle"),
            app_theme,
        ))
        .push(view_progress(i18n, state, app_theme))
        .push(view_metrics(i18n, app_theme))
        .push(view_loss_chart(i18n, app_theme))
        .push(view_dataset(i18n, app_theme));

    container(scrollable(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::screen(app_theme))
        .into()
}

fn view_progress(i18n: &I18n, state: &State, app_theme: AppTheme) -> Element<'static, Message> {
    let summary = Row::new()
        .align_y(Vertical::Bottom)
        .push(
            text(format!("{}%", state.percent()))
                .size(typography::DISPLAY)
                .font(font::HEAVY),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            Column::new()
                .align_x(Horizontal::Right)
                .push(
                    text(format!("{}/{}", state.epoch, state.total))
                        .size(typography::TITLE_MD)
                        .font(font::HEAVY),
                )
                .push(text(i18n.tr("training-epochs").to_uppercase()).font(font::BOLD)),
        );

    let bar = progress_bar(0.0..=1.0, state.fraction())
        .girth(Length::Fixed(sizing::PROGRESS_BAR_HEIGHT))
        .style(styles::container::progress(app_theme, palette::BLACK));

    let (label, fill) = if state.running {
        (format!("⏸ {}", i18n.tr("training-pause")), palette::RED)
    } else {
        (format!("▶ {}", i18n.tr("training-start")), palette::GREEN)
    };
    let mut toggle = button(
        text(label.to_uppercase())
            .font(font::HEAVY)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::button::accent(app_theme, fill));
    if state.running || !state.is_complete() {
        toggle = toggle.on_press(Message::ToggleTraining);
    }

    tile::accent_card(
        Column::new()
            .spacing(spacing::MD)
            .push(text(i18n.tr("training-progress").to_uppercase()).font(font::HEAVY))
            .push(summary)
            .push(bar)
            .push(toggle)
            .into(),
        palette::YELLOW,
        app_theme,
    )
}

fn view_metrics(i18n: &I18n, app_theme: AppTheme) -> Element<'static, Message> {
    let grid = METRICS
        .chunks(2)
        .fold(Column::new().spacing(spacing::SM), |column, pair| {
            column.push(pair.iter().fold(
                Row::new().spacing(spacing::SM),
                |row, (icon, value, label_key, accent)| {
                    row.push(tile::stat(
                        *icon,
                        (*value).to_string(),
                        i18n.tr(label_key),
                        *accent,
                        app_theme,
                    ))
                },
            ))
        });

    Column::new()
        .spacing(spacing::MD)
        .push(header::section_title(i18n.tr("training-metrics"), app_theme))
        .push(grid)
        .into()
}

fn view_loss_chart(i18n: &I18n, app_theme: AppTheme) -> Element<'static, Message> {
    let bars = LOSS_HISTORY.iter().enumerate().fold(
        Row::new().spacing(spacing::SM).height(Length::Fixed(CHART_HEIGHT)).align_y(Vertical::Bottom),
        |row, (index, height)| {
            let fill = palette::ACCENTS[index % palette::ACCENTS.len()];
            row.push(
                container(Space::new())
                    .width(Length::Fill)
                    .height(Length::Fixed(CHART_HEIGHT * height))
                    .style(move |_theme: &Theme| container::Style {
                        background: Some(Background::Color(fill)),
                        border: Border {
                            color: app_theme.border,
                            width: border::WIDTH_SM,
                            radius: radius::SM.into(),
                        },
                        ..Default::default()
                    }),
            )
        },
    );

    tile::card(
        Column::new()
            .spacing(spacing::MD)
            .push(text(i18n.tr("training-loss-title").to_uppercase()).font(font::HEAVY))
            .push(bars)
            .into(),
        app_theme,
    )
}

fn view_dataset(i18n: &I18n, app_theme: AppTheme) -> Element<'static, Message> {
    let upload = button(
        Column::new()
            .spacing(spacing::XXS)
            .align_x(Horizontal::Center)
            .width(Length::Fill)
            .push(text("⬆").size(typography::TITLE_LG))
            .push(text(i18n.tr("training-upload-title").to_uppercase()).font(font::HEAVY))
            .push(header::muted(
                i18n.tr("training-upload-description"),
                typography::BODY,
                app_theme,
            )),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .on_press(Message::UploadSamples)
    .style(styles::button::outlined(app_theme));

    let samples = (0..DATASET_SAMPLES)
        .collect::<Vec<_>>()
        .chunks(4)
        .fold(Column::new().spacing(spacing::XS), |column, chunk| {
            column.push(chunk.iter().fold(Row::new().spacing(spacing::XS), |row, index| {
                row.push(
                    container(text("✋").size(typography::TITLE_MD))
                        .width(Length::Fill)
                        .height(Length::Fixed(sizing::ICON_XL + spacing::MD))
                        .align_x(Horizontal::Center)
                        .align_y(Vertical::Center)
                        .style(styles::container::accent_card(
                            app_theme,
                            palette::ACCENTS[index % palette::ACCENTS.len()],
                        )),
                )
            }))
        });

    Column::new()
        .spacing(spacing::MD)
        .push(header::section_title(i18n.tr("training-dataset"), app_theme))
        .push(upload)
        .push(samples)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn starts_paused_at_initial_epoch() {
        let state = State::default();
        assert_eq!((state.epoch(), state.total()), (107, 200));
        assert_eq!(state.percent(), 54);
        assert!(!state.is_running());
    }

    #[test]
    fn adds_one_epoch_per_interval_while_running() {
        let config = TrainingConfig::default();
        let t0 = Instant::now();
        let mut state = State::default();
        update(&mut state, Message::ToggleTraining, t0, &config);

        tick(&mut state, t0 + Duration::from_millis(999), &config);
        assert_eq!(state.epoch(), 107);
        tick(&mut state, t0 + SECOND, &config);
        assert_eq!(state.epoch(), 108);
        tick(&mut state, t0 + SECOND * 2, &config);
        assert_eq!(state.epoch(), 109);
    }

    #[test]
    fn pausing_stops_progress() {
        let config = TrainingConfig::default();
        let t0 = Instant::now();
        let mut state = State::default();
        update(&mut state, Message::ToggleTraining, t0, &config);
        update(&mut state, Message::ToggleTraining, t0 + SECOND / 2, &config);

        tick(&mut state, t0 + SECOND * 5, &config);
        assert_eq!(state.epoch(), 107);
        assert!(!state.has_pending_work());
    }

    #[test]
    fn stops_at_total_and_cannot_restart() {
        let config = TrainingConfig::default();
        let t0 = Instant::now();
        let mut state = State::default();
        update(&mut state, Message::ToggleTraining, t0, &config);

        for step in 1..=150 {
            tick(&mut state, t0 + SECOND * step, &config);
        }
        assert_eq!(state.epoch(), 200);
        assert!(!state.is_running());
        assert_eq!(state.percent(), 100);

        update(&mut state, Message::ToggleTraining, t0 + SECOND * 151, &config);
        assert!(!state.is_running());
        assert!(!state.has_pending_work());
    }

    #[test]
    fn teardown_drops_pending_epoch() {
        let config = TrainingConfig::default();
        let t0 = Instant::now();
        let mut state = State::default();
        update(&mut state, Message::ToggleTraining, t0, &config);
        state.teardown();
        tick(&mut state, t0 + SECOND, &config);
        assert_eq!(state.epoch(), 107);
    }
}
