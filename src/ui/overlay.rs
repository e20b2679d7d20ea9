// SPDX-License-Identifier: MPL-2.0
//! Toast overlay widget.
//!
//! Toasts appear as small cards stacked in the bottom-right corner, newest
//! at the top, with a variant-colored border, an optional action button
//! and a dismiss button. Closed toasts stay visible, faded, until the
//! store removes them.

use super::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use crate::toast::{Store, Toast, ToastId, Variant};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Subscription, Theme};
use std::time::Duration;

/// How often the overlay redraws to pick up timer-driven removals.
const REFRESH_INTERVAL: Duration = Duration::from_millis(250);

/// Messages emitted by the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The dismiss button of a toast was pressed.
    Dismiss(ToastId),
    /// The action button of a toast was pressed.
    Action { id: ToastId, key: String },
    /// Periodic redraw.
    Tick,
}

/// Toast overlay rendering.
pub struct ToastOverlay;

impl ToastOverlay {
    /// Renders a single toast.
    pub fn view_toast(toast: &Toast) -> Element<'_, Message> {
        let fade = if toast.is_open() {
            opacity::OPAQUE
        } else {
            opacity::CLOSING
        };
        let accent = faded(accent_color(toast.variant()), fade);

        let glyph = Text::new(variant_glyph(toast.variant()))
            .size(sizing::GLYPH)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent),
            });

        let mut body = Column::new().spacing(spacing::XXS);
        if let Some(title) = toast.title() {
            body = body.push(
                Text::new(title)
                    .size(typography::TITLE)
                    .style(move |theme: &Theme| faded_text(theme, fade)),
            );
        }
        if let Some(description) = toast.description() {
            body = body.push(
                Text::new(description)
                    .size(typography::BODY)
                    .style(move |theme: &Theme| faded_text(theme, fade)),
            );
        }

        let id = toast.id();
        let mut content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(glyph).padding(spacing::XXS))
            .push(
                Container::new(body)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            );

        if let Some(action) = toast.action() {
            let label = Text::new(action.label.as_str()).size(typography::CAPTION);
            let mut action_button = button(label)
                .padding(spacing::XXS)
                .style(ghost_button_style);
            if toast.is_open() {
                action_button = action_button.on_press(Message::Action {
                    id,
                    key: action.key.clone(),
                });
            }
            content = content.push(action_button);
        }

        let mut dismiss_button = button(Text::new("\u{2715}").size(typography::CAPTION))
            .padding(spacing::XXS)
            .style(ghost_button_style);
        if toast.is_open() {
            dismiss_button = dismiss_button.on_press(Message::Dismiss(id));
        }
        content = content.push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent))
            .into()
    }

    /// Renders every toast in `toasts`, positioned in the bottom-right corner.
    pub fn view(toasts: &[Toast]) -> Element<'_, Message> {
        if toasts.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let column = Column::with_children(toasts.iter().map(Self::view_toast))
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }

    /// Periodic tick so removals made by timers show up without user input.
    pub fn subscription() -> Subscription<Message> {
        iced::time::every(REFRESH_INTERVAL).map(|_| Message::Tick)
    }

    /// Applies an overlay message to `store`.
    ///
    /// Returns the action key when an action button was pressed. Triggering
    /// an action also dismisses its toast.
    pub fn update(store: &Store, message: Message) -> Option<String> {
        match message {
            Message::Dismiss(id) => {
                store.dismiss(id);
                None
            }
            Message::Action { id, key } => {
                store.dismiss(id);
                Some(key)
            }
            Message::Tick => None,
        }
    }
}

/// Border and glyph color for a variant.
#[must_use]
pub fn accent_color(variant: Variant) -> Color {
    match variant {
        Variant::Default => palette::PRIMARY_500,
        Variant::Destructive => palette::ERROR_500,
        Variant::Success => palette::SUCCESS_500,
        Variant::Warning => palette::WARNING_500,
    }
}

fn variant_glyph(variant: Variant) -> &'static str {
    match variant {
        Variant::Default => "\u{2139}",
        Variant::Destructive => "\u{2716}",
        Variant::Success => "\u{2714}",
        Variant::Warning => "\u{26A0}",
    }
}

fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

fn faded_text(theme: &Theme, alpha: f32) -> text::Style {
    text::Style {
        color: Some(faded(theme.palette().text, alpha)),
    }
}

fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Transparent button that only shows a background on hover/press.
fn ghost_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover_background = |alpha: f32| {
        Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };

    let (background, text_color) = match status {
        button::Status::Active => (None, base.text),
        button::Status::Hovered => (hover_background(opacity::OVERLAY_SUBTLE), base.text),
        button::Status::Pressed => (hover_background(opacity::OVERLAY_MEDIUM), base.text),
        button::Status::Disabled => (None, faded(base.text, opacity::OVERLAY_MEDIUM)),
    };

    button::Style {
        background,
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::toast::{ManualScheduler, ToastOptions};
    use std::sync::Arc;

    fn store() -> Store {
        Store::new(Settings::default(), Arc::new(ManualScheduler::new()))
    }

    #[test]
    fn accent_colors_are_distinct() {
        for (i, a) in Variant::ALL.iter().enumerate() {
            for b in &Variant::ALL[i + 1..] {
                assert_ne!(accent_color(*a), accent_color(*b));
            }
        }
    }

    #[test]
    fn toast_container_style_uses_accent_color() {
        let style = toast_container_style(&Theme::Dark, palette::SUCCESS_500);

        assert_eq!(style.border.color, palette::SUCCESS_500);
        assert!(style.background.is_some());
    }

    #[test]
    fn faded_scales_alpha_only() {
        let color = faded(palette::ERROR_500, 0.5);
        assert_eq!(color.r, palette::ERROR_500.r);
        assert_eq!(color.a, palette::ERROR_500.a * 0.5);
    }

    #[test]
    fn ghost_button_is_transparent_when_idle() {
        let style = ghost_button_style(&Theme::Light, button::Status::Active);
        assert!(style.background.is_none());

        let hovered = ghost_button_style(&Theme::Light, button::Status::Hovered);
        assert!(hovered.background.is_some());
    }

    #[test]
    fn update_dismiss_closes_toast() {
        let store = store();
        let handle = store.toast(ToastOptions::new().title("Saved"));

        let key = ToastOverlay::update(&store, Message::Dismiss(handle.id()));

        assert!(key.is_none());
        assert!(!store.get(handle.id()).unwrap().is_open());
    }

    #[test]
    fn update_action_returns_key_and_dismisses() {
        let store = store();
        let handle = store.toast(
            ToastOptions::destructive("Recipe deleted")
                .action(crate::toast::ToastAction::new("Undo", "undo-delete")),
        );

        let key = ToastOverlay::update(
            &store,
            Message::Action {
                id: handle.id(),
                key: "undo-delete".to_string(),
            },
        );

        assert_eq!(key.as_deref(), Some("undo-delete"));
        assert!(!store.get(handle.id()).unwrap().is_open());
    }

    #[test]
    fn update_tick_changes_nothing() {
        let store = store();
        store.toast(ToastOptions::new());
        let before = store.toasts();

        assert!(ToastOverlay::update(&store, Message::Tick).is_none());
        assert_eq!(store.toasts(), before);
    }

    #[test]
    fn view_builds_for_every_variant() {
        let store = store();
        for variant in Variant::ALL {
            store.toast(ToastOptions::new().title(variant.as_str()).variant(variant));
        }
        let toasts = store.toasts();

        let _ = ToastOverlay::view(&toasts);
        let _ = ToastOverlay::view(&[]);
    }
}
