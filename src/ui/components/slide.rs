// SPDX-License-Identifier: MPL-2.0
//! Rendering of slide transitions.
//!
//! A layer is shifted by padding it on the side it moves away from, inside a
//! clipped container. Screens paint their own opaque background, so a layer
//! is faded by covering it with a veil in the theme background color whose
//! alpha is the complement of the layer opacity.

use crate::navigation::{LayerFrame, SlideFrame};
use crate::ui::styles;
use crate::ui::theming::AppTheme;
use iced::widget::{container, Row, Space, Stack};
use iced::{Element, Length};

/// Horizontal shift in logical pixels for `offset` (fraction of `width`).
#[must_use]
pub fn shift_px(offset: f32, width: f32) -> f32 {
    (offset.clamp(-1.0, 1.0) * width).round()
}

/// Alpha of the veil drawn over a layer at `opacity`.
///
/// The layer's effective alpha against the background is `1.0 - veil_alpha`.
#[must_use]
pub fn veil_alpha(frame: LayerFrame) -> f32 {
    1.0 - frame.opacity.clamp(0.0, 1.0)
}

/// Places `content` according to `frame`.
pub fn layer<'a, M: 'a>(
    content: Element<'a, M>,
    frame: LayerFrame,
    width: f32,
    app_theme: AppTheme,
) -> Element<'a, M> {
    if frame == LayerFrame::SETTLED {
        return content;
    }

    let veil = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::veil(app_theme, veil_alpha(frame)));
    let body = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(content)
        .push(veil);

    let shift = shift_px(frame.offset, width);
    let row = if shift >= 0.0 {
        Row::new()
            .push(Space::new().width(Length::Fixed(shift)))
            .push(body)
    } else {
        Row::new()
            .push(body)
            .push(Space::new().width(Length::Fixed(-shift)))
    };

    container(row.height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .clip(true)
        .into()
}

/// Stacks the incoming layer above the outgoing one, if any, on the theme
/// background.
pub fn stack<'a, M: 'a>(
    frame: SlideFrame,
    outgoing: Option<Element<'a, M>>,
    incoming: Element<'a, M>,
    width: f32,
    app_theme: AppTheme,
) -> Element<'a, M> {
    let layers = match (frame.outgoing, outgoing) {
        (Some(outgoing_frame), Some(outgoing)) => Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(layer(outgoing, outgoing_frame, width, app_theme))
            .push(layer(incoming, frame.incoming, width, app_theme))
            .into(),
        _ => layer(incoming, frame.incoming, width, app_theme),
    };

    container(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::screen(app_theme))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{Direction, SlideTransition};
    use std::time::{Duration, Instant};

    fn slide_at_start() -> (SlideTransition<u8>, Instant) {
        let t0 = Instant::now();
        let slide =
            SlideTransition::begin(0, 1, Direction::Forward, t0, Duration::from_millis(300), 1.0);
        (slide, t0)
    }

    #[test]
    fn shift_scales_with_width() {
        assert_eq!(shift_px(1.0, 400.0), 400.0);
        assert_eq!(shift_px(-0.5, 400.0), -200.0);
        assert_eq!(shift_px(0.0, 400.0), 0.0);
    }

    #[test]
    fn shift_is_clamped_to_one_width() {
        assert_eq!(shift_px(3.0, 100.0), 100.0);
        assert_eq!(shift_px(-3.0, 100.0), -100.0);
    }

    #[test]
    fn incoming_layer_is_fully_veiled_on_the_first_frame() {
        let (slide, t0) = slide_at_start();
        let frame = slide.frame(t0);

        assert_eq!(veil_alpha(frame.incoming), 1.0);
        let outgoing = frame.outgoing.expect("outgoing layer while running");
        assert_eq!(veil_alpha(outgoing), 0.0);
    }

    #[test]
    fn outgoing_layer_is_veiled_near_the_end() {
        let (slide, t0) = slide_at_start();
        let frame = slide.frame(t0 + Duration::from_millis(290));

        let outgoing = frame.outgoing.expect("outgoing layer while running");
        assert!(veil_alpha(outgoing) > 0.99);
        assert!(veil_alpha(frame.incoming) < 0.01);
    }

    #[test]
    fn settled_layer_has_no_veil() {
        let (slide, t0) = slide_at_start();
        let frame = slide.frame(t0 + Duration::from_millis(300));
        assert_eq!(frame.incoming, LayerFrame::SETTLED);
        assert_eq!(veil_alpha(frame.incoming), 0.0);
    }
}
