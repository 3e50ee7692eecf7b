// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::button::Status;
    use iced::{Background, Theme};
    use signspeak::navigation::Screen;
    use signspeak::ui::design_tokens::{opacity, palette, sizing, spacing};
    use signspeak::ui::styles::{button, container};
    use signspeak::ui::theming::AppTheme;

    #[test]
    fn all_styles_are_callable_in_both_themes() {
        for dark in [false, true] {
            let app_theme = AppTheme::from_dark_mode(dark);
            let theme = AppTheme::iced_theme(dark);

            let _ = button::accent(app_theme, palette::PINK)(&theme, Status::Active);
            let _ = button::outlined(app_theme)(&theme, Status::Hovered);
            let _ = button::text(app_theme)(&theme, Status::Pressed);
            let _ = button::nav_item(app_theme, true, palette::YELLOW)(&theme, Status::Active);

            let _ = container::screen(app_theme)(&theme);
            let _ = container::veil(app_theme, 0.5)(&theme);
            let _ = container::card(app_theme)(&theme);
            let _ = container::accent_card(app_theme, palette::BLUE)(&theme);
            let _ = container::pill(app_theme, palette::RED)(&theme);
            let _ = container::bottom_bar(app_theme)(&theme);
            let _ = container::backdrop(&theme);
            let _ = container::progress(app_theme, palette::GREEN)(&theme);
        }
    }

    #[test]
    fn outlined_button_uses_theme_ink() {
        let dark = AppTheme::from_dark_mode(true);
        let style = button::outlined(dark)(&Theme::Dark, Status::Active);
        assert_eq!(style.text_color, dark.text);
        assert_eq!(style.background, Some(Background::Color(dark.card)));
    }

    #[test]
    fn design_tokens_are_accessible() {
        // One accent per bottom navigation entry
        assert_eq!(palette::ACCENTS.len(), Screen::BOTTOM_NAV.len());
        assert!(opacity::BACKDROP < opacity::MUTED);
        assert!(spacing::XXS < spacing::XXL);
        assert!(sizing::PROGRESS_DOT_ACTIVE > sizing::PROGRESS_DOT);
        assert!(sizing::WINDOW_HEIGHT > sizing::WINDOW_WIDTH);
    }

    #[test]
    fn theming_switches_correctly() {
        let light = AppTheme::from_dark_mode(false);
        let dark = AppTheme::from_dark_mode(true);

        // Surface colors should be visually opposite between light and dark
        assert!(light.background.r > dark.background.r);

        // Text colors should also be opposite between light and dark
        assert!(light.text.r < dark.text.r);
    }
}
