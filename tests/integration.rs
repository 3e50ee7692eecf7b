// SPDX-License-Identifier: MPL-2.0
use signspeak::app::config::{self, Config, DEFAULT_SPLASH_DWELL_MS};
use signspeak::i18n::fluent::I18n;
use signspeak::navigation::{
    Carousel, CarouselStep, Direction, NavigationRequest, Navigator, Screen,
};
use signspeak::ui::theming::{AppTheme, ThemeMode};
use std::fs;
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn dwell() -> Duration {
    Duration::from_millis(DEFAULT_SPLASH_DWELL_MS)
}

#[test]
fn test_splash_to_home_walkthrough() {
    let t0 = Instant::now();
    let mut navigator = Navigator::new(t0, dwell());
    assert_eq!(navigator.current(), Screen::Splash);

    let outcome = navigator
        .tick(t0 + dwell())
        .expect("dwell should fire after 2.5s");
    assert_eq!(outcome.previous, Screen::Splash);
    assert_eq!(navigator.current(), Screen::Onboarding);

    navigator.navigate(Screen::Login, t0 + Duration::from_secs(4));
    assert_eq!(navigator.current(), Screen::Login);
    assert!(!navigator.shows_bottom_nav());

    navigator.navigate(Screen::Home, t0 + Duration::from_secs(5));
    assert_eq!(navigator.current(), Screen::Home);
    assert!(navigator.shows_bottom_nav());

    let mut dark_mode = false;
    let light = AppTheme::from_dark_mode(dark_mode);
    dark_mode = true;
    let dark = AppTheme::from_dark_mode(dark_mode);
    assert_ne!(light.background, dark.background);
    assert_eq!(dark, AppTheme::DARK);
    assert_eq!(navigator.current(), Screen::Home);
}

#[test]
fn test_splash_dwell_fires_exactly_once() {
    let t0 = Instant::now();
    let mut navigator = Navigator::new(t0, dwell());

    assert!(navigator.tick(t0 + dwell() - Duration::from_millis(1)).is_none());
    assert!(navigator.tick(t0 + dwell()).is_some());
    assert!(navigator.tick(t0 + dwell() * 2).is_none());
    assert!(navigator.tick(t0 + dwell() * 10).is_none());
    assert_eq!(navigator.current(), Screen::Onboarding);
}

#[test]
fn test_manual_navigation_cancels_splash_dwell() {
    let t0 = Instant::now();
    let mut navigator = Navigator::new(t0, dwell());

    navigator.navigate(Screen::Login, t0 + Duration::from_millis(500));
    assert!(!navigator.has_pending_dwell());

    assert!(navigator.tick(t0 + dwell() * 2).is_none());
    assert_eq!(navigator.current(), Screen::Login);
}

#[test]
fn test_every_screen_reaches_every_screen() {
    let t0 = Instant::now();
    for from in Screen::ALL {
        for to in Screen::ALL {
            let mut navigator = Navigator::new(t0, dwell());
            navigator.navigate(from, t0);
            let outcome = navigator.navigate(to, t0);
            assert_eq!(navigator.current(), to, "{from} -> {to}");
            assert_eq!(outcome.changed(), from != to);
        }
    }
}

#[test]
fn test_backward_request_keeps_caller_direction() {
    let t0 = Instant::now();
    let mut navigator = Navigator::new(t0, dwell());
    navigator.navigate(Screen::Settings, t0);
    navigator.apply(
        NavigationRequest {
            target: Screen::Home,
            direction: Direction::Backward,
        },
        t0,
    );
    assert_eq!(navigator.direction(), Direction::Backward);
    assert_eq!(navigator.direction().sign(), -1);
}

#[test]
fn test_bottom_nav_visibility_predicate() {
    let visible: Vec<Screen> = Screen::ALL
        .into_iter()
        .filter(|screen| screen.shows_bottom_nav())
        .collect();
    assert_eq!(visible, Screen::BOTTOM_NAV.to_vec());
}

#[test]
fn test_onboarding_carousel_bounds() {
    let mut carousel = Carousel::new(3);
    assert!(!carousel.previous());
    assert_eq!(carousel.index(), 0);

    assert_eq!(carousel.next(), CarouselStep::Moved);
    assert_eq!(carousel.next(), CarouselStep::Moved);
    assert!(carousel.is_last());
    assert_eq!(carousel.next(), CarouselStep::Completed);
    assert_eq!(carousel.index(), 2);

    assert!(carousel.jump_to(0));
    assert_eq!(carousel.direction(), Direction::Backward);
}

#[test]
fn test_theme_purity() {
    let original = AppTheme::from_dark_mode(false);
    let toggled = AppTheme::from_dark_mode(true);
    assert_ne!(original, toggled);
    assert_eq!(AppTheme::from_dark_mode(false), original);
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    fs::write(&path, "[general]\nlanguage = \"en-US\"\n").expect("Failed to write config");
    let english = config::load_from_path(&path).expect("Failed to load config");
    let i18n_en = I18n::new(None, &english);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    fs::write(&path, "[general]\nlanguage = \"fr\"\n").expect("Failed to write config");
    let french = config::load_from_path(&path).expect("Failed to load config");
    let i18n_fr = I18n::new(None, &french);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("nav-home"), "Accueil");

    // CLI language wins over the file
    let i18n_cli = I18n::new(Some("en-US".to_string()), &french);
    assert_eq!(i18n_cli.current_locale().to_string(), "en-US");
}

#[test]
fn test_config_directory_override() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        "[general]\ntheme_mode = \"dark\"\n\n[timing]\nsplash_dwell_ms = 1000\n",
    )
    .expect("Failed to write config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    assert_eq!(loaded.timing.splash_dwell(), Duration::from_millis(1000));
    assert_ne!(loaded, Config::default());
}
