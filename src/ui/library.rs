// SPDX-License-Identifier: MPL-2.0
//! Gesture library: the 26 alphabet signs with a search filter and a detail
//! modal.

use crate::i18n::fluent::I18n;
use crate::navigation::Screen;
use crate::ui::components::{header, tile};
use crate::ui::design_tokens::{font, palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::AppTheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, opaque, scrollable, text, text_input, Column, Row, Space, Stack};
use iced::{Color, Element, Length};
use rand::Rng;
use std::sync::OnceLock;

/// Tiles per row in the gesture grid.
const GRID_COLUMNS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Difficulty::Easy => palette::GREEN,
            Difficulty::Medium => palette::YELLOW,
            Difficulty::Hard => palette::RED,
        }
    }

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Difficulty::Easy => "library-difficulty-easy",
            Difficulty::Medium => "library-difficulty-medium",
            Difficulty::Hard => "library-difficulty-hard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gesture {
    pub letter: char,
    pub difficulty: Difficulty,
}

/// Builds the A–Z catalog with a difficulty drawn for each letter.
pub fn generate_catalog(rng: &mut impl Rng) -> Vec<Gesture> {
    ('A'..='Z')
        .map(|letter| Gesture {
            letter,
            difficulty: Difficulty::random(rng),
        })
        .collect()
}

/// The process-wide catalog. Difficulties are drawn on first access and
/// stay fixed afterwards.
pub fn catalog() -> &'static [Gesture] {
    static CATALOG: OnceLock<Vec<Gesture>> = OnceLock::new();
    CATALOG.get_or_init(|| generate_catalog(&mut rand::thread_rng()))
}

/// Gestures whose letter contains `query`, ignoring case.
pub fn filter<'a>(gestures: &'a [Gesture], query: &str) -> Vec<&'a Gesture> {
    let needle = query.to_lowercase();
    gestures
        .iter()
        .filter(|gesture| gesture.letter.to_lowercase().to_string().contains(&needle))
        .collect()
}

/// Local state, recreated each time the screen is entered.
#[derive(Debug, Clone, Default)]
pub struct State {
    query: String,
    selected: Option<Gesture>,
}

impl State {
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn selected(&self) -> Option<Gesture> {
        self.selected
    }
}

/// Messages emitted by the library screen.
#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    ClearSearch,
    Select(Gesture),
    CloseDetail,
    Practice,
    AddCustom,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Screen),
}

/// Process a library message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::SearchChanged(query) => {
            state.query = query;
            Event::None
        }
        Message::ClearSearch => {
            state.query.clear();
            Event::None
        }
        Message::Select(gesture) => {
            state.selected = Some(gesture);
            Event::None
        }
        Message::CloseDetail => {
            state.selected = None;
            Event::None
        }
        Message::Practice => {
            state.selected = None;
            Event::Navigate(Screen::Camera)
        }
        Message::AddCustom => Event::Navigate(Screen::Training),
    }
}

/// Contextual data needed to render the library screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme: AppTheme,
    pub state: &'a State,
    pub gestures: &'a [Gesture],
}

/// Render the library screen.
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let app_theme = ctx.theme;
    let i18n = ctx.i18n;
    let state = ctx.state;

    let search = {
        let mut row = Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(
                text_input(&i18n.tr("library-search-placeholder").to_uppercase(), &state.query)
                    .on_input(Message::SearchChanged)
                    .padding(spacing::MD)
                    .size(typography::BODY_LG),
            );
        if !state.query.is_empty() {
            row = row.push(
                button(text("✕").font(font::HEAVY))
                    .on_press(Message::ClearSearch)
                    .padding(spacing::SM)
                    .style(styles::button::outlined(app_theme)),
            );
        }
        row
    };

    let add_custom = button(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(text("＋").size(typography::TITLE_MD).font(font::HEAVY))
            .push(text(i18n.tr("library-add-custom").to_uppercase()).font(font::HEAVY)),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .on_press(Message::AddCustom)
    .style(styles::button::accent(app_theme, palette::PURPLE));

    let matches = filter(ctx.gestures, &state.query);
    let grid: Element<'_, Message> = if matches.is_empty() {
        tile::card(
            container(header::muted(
                i18n.tr("library-empty"),
                typography::BODY_LG,
                app_theme,
            ))
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .into(),
            app_theme,
        )
    } else {
        matches
            .chunks(GRID_COLUMNS)
            .fold(Column::new().spacing(spacing::SM), |column, chunk| {
                let row = chunk.iter().fold(Row::new().spacing(spacing::SM), |row, gesture| {
                    row.push(gesture_tile(i18n, **gesture, app_theme))
                });
                // Pad the last row so tiles keep their width
                let row = (chunk.len()..GRID_COLUMNS)
                    .fold(row, |row, _| row.push(Space::new().width(Length::Fill)));
                column.push(row)
            })
            .into()
    };

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(header::screen_header(
            i18n.tr("library-title"),
            i18n.tr("library-subtitle"),
            app_theme,
        ))
        .push(search)
        .push(add_custom)
        .push(grid);

    let base = container(scrollable(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::screen(app_theme));

    match state.selected {
        Some(gesture) => Stack::new()
            .push(base)
            .push(opaque(view_detail(i18n, gesture, app_theme)))
            .into(),
        None => base.into(),
    }
}

fn gesture_tile(i18n: &I18n, gesture: Gesture, app_theme: AppTheme) -> Element<'static, Message> {
    let difficulty = i18n.tr(gesture.difficulty.label_key());
    let initial = difficulty.chars().next().map(String::from).unwrap_or_default();

    let badge = container(text(initial).size(typography::CAPTION).font(font::HEAVY))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::pill(app_theme, gesture.difficulty.color()));

    button(
        Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .push(
                Row::new()
                    .push(Space::new().width(Length::Fill))
                    .push(badge),
            )
            .push(
                text(gesture.letter.to_string())
                    .size(typography::DISPLAY)
                    .font(font::HEAVY),
            ),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::GESTURE_TILE))
    .padding(spacing::XS)
    .on_press(Message::Select(gesture))
    .style(styles::button::outlined(app_theme))
    .into()
}

fn view_detail(i18n: &I18n, gesture: Gesture, app_theme: AppTheme) -> Element<'static, Message> {
    let letter = gesture.letter.to_string();

    let close_icon = button(text("✕").font(font::HEAVY))
        .on_press(Message::CloseDetail)
        .padding(spacing::XS)
        .style(styles::button::outlined(app_theme));

    let heading = Row::new()
        .align_y(Vertical::Center)
        .push(
            text(i18n.tr_with_args("library-detail-title", &[("letter", &letter)]).to_uppercase())
                .size(typography::TITLE_MD)
                .font(font::HEAVY),
        )
        .push(Space::new().width(Length::Fill))
        .push(close_icon);

    let illustration = container(text(letter.clone()).size(typography::DISPLAY_LG).font(font::HEAVY))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HERO))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::accent_card(app_theme, gesture.difficulty.color()));

    let actions = Column::new()
        .spacing(spacing::SM)
        .push(modal_button(
            i18n.tr("library-practice"),
            Message::Practice,
            styles::button::accent(app_theme, palette::PINK),
        ))
        .push(modal_button(
            i18n.tr("library-close"),
            Message::CloseDetail,
            styles::button::outlined(app_theme),
        ));

    let card = container(
        Column::new()
            .spacing(spacing::MD)
            .push(heading)
            .push(illustration)
            .push(
                text(i18n.tr_with_args("library-detail-description", &[("letter", &letter)]))
                    .size(typography::BODY_LG)
                    .font(font::BOLD),
            )
            .push(header::muted(
                i18n.tr("library-detail-hint"),
                typography::BODY,
                app_theme,
            ))
            .push(actions),
    )
    .width(Length::Fixed(sizing::MODAL_WIDTH))
    .padding(spacing::LG)
    .style(styles::container::card(app_theme));

    container(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::backdrop)
        .into()
}

fn modal_button(
    label: String,
    message: Message,
    style: impl Fn(&iced::Theme, button::Status) -> button::Style + 'static,
) -> Element<'static, Message> {
    button(
        text(label.to_uppercase())
            .font(font::HEAVY)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .on_press(message)
    .style(style)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample() -> Vec<Gesture> {
        generate_catalog(&mut StdRng::seed_from_u64(42))
    }

    #[test]
    fn catalog_covers_the_alphabet_in_order() {
        let gestures = sample();
        assert_eq!(gestures.len(), 26);
        assert_eq!(gestures.first().map(|g| g.letter), Some('A'));
        assert_eq!(gestures.last().map(|g| g.letter), Some('Z'));
    }

    #[test]
    fn process_catalog_is_stable() {
        assert_eq!(catalog(), catalog());
        assert!(std::ptr::eq(catalog(), catalog()));
    }

    #[test]
    fn search_is_case_insensitive() {
        let gestures = sample();
        let lower = filter(&gestures, "q");
        let upper = filter(&gestures, "Q");
        assert_eq!(lower.len(), 1);
        assert_eq!(lower, upper);
        assert_eq!(lower[0].letter, 'Q');
    }

    #[test]
    fn empty_query_shows_everything_and_unknown_shows_nothing() {
        let gestures = sample();
        assert_eq!(filter(&gestures, "").len(), 26);
        assert!(filter(&gestures, "7").is_empty());
        assert!(filter(&gestures, "ab").is_empty());
    }

    #[test]
    fn whitespace_query_matches_nothing() {
        let gestures = sample();
        assert!(filter(&gestures, " ").is_empty());
        assert!(filter(&gestures, " a").is_empty());
    }

    #[test]
    fn clear_search_resets_query() {
        let mut state = State::default();
        update(&mut state, Message::SearchChanged("m".into()));
        assert_eq!(state.query(), "m");
        update(&mut state, Message::ClearSearch);
        assert_eq!(state.query(), "");
    }

    #[test]
    fn detail_modal_opens_and_closes() {
        let mut state = State::default();
        let gesture = sample()[1];
        update(&mut state, Message::Select(gesture));
        assert_eq!(state.selected(), Some(gesture));
        assert_eq!(update(&mut state, Message::CloseDetail), Event::None);
        assert!(state.selected().is_none());
    }

    #[test]
    fn practice_and_add_custom_navigate() {
        let mut state = State::default();
        update(&mut state, Message::Select(sample()[0]));
        assert_eq!(
            update(&mut state, Message::Practice),
            Event::Navigate(Screen::Camera)
        );
        assert!(state.selected().is_none());
        assert_eq!(
            update(&mut state, Message::AddCustom),
            Event::Navigate(Screen::Training)
        );
    }
}
