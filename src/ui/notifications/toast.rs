// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of notifications, appearing as
//! small cards with severity-colored accents and a dismiss button.

use super::manager::{Manager, Message};
use super::notification::{Content, Notification};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Resolves the text shown for a notification.
    #[must_use]
    pub fn resolve_message(notification: &Notification, i18n: &I18n) -> String {
        match notification.content() {
            Content::Text(text) => text.clone(),
            Content::Key { key, args } if args.is_empty() => i18n.tr(key),
            Content::Key { key, args } => {
                let args: Vec<(&str, &str)> = args
                    .iter()
                    .map(|(k, v)| (k.as_str(), v.as_str()))
                    .collect();
                i18n.tr_with_args(key, &args)
            }
        }
    }

    /// Renders a single toast notification.
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let accent_color = notification.severity().color();

        let icon_widget = Text::new(notification.display_icon()).size(sizing::ICON_MD);

        let message_widget = Text::new(Self::resolve_message(notification, i18n))
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });

        let notification_id = notification.id();
        let dismiss_button = button(Text::new("✕").size(sizing::ICON_SM))
            .on_press(Message::Dismiss(notification_id))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        // Layout: [icon] [message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon_widget).padding(spacing::XXS))
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders the toast overlay with all visible notifications.
    ///
    /// Positions toasts in the bottom-right corner, stacked vertically.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = manager
            .visible()
            .map(|notification| Self::view(notification, i18n))
            .collect();

        if toasts.is_empty() {
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right);

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Bottom)
                .padding(spacing::MD)
                .into()
        }
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

fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let hover_background = |alpha: f32| {
        Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };
    let rounded = iced::Border {
        radius: radius::SM.into(),
        ..Default::default()
    };

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: hover_background(opacity::OVERLAY_SUBTLE),
            text_color: base.text,
            border: rounded,
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: hover_background(opacity::OVERLAY_MEDIUM),
            text_color: base.text,
            border: rounded,
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Severity;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = palette::SUCCESS_500;
        let style = toast_container_style(&theme, accent);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn literal_text_is_shown_verbatim() {
        let i18n = I18n::default();
        let notification = Notification::text(Severity::Info, "app-title");
        assert_eq!(Toast::resolve_message(&notification, &i18n), "app-title");
    }

    #[test]
    fn keyed_message_is_translated() {
        let i18n = I18n::new(Some("en-US".to_string()), &crate::config::Config::default());
        let notification = Notification::warning("notification-config-load-error");
        let resolved = Toast::resolve_message(&notification, &i18n);
        assert!(!resolved.starts_with("MISSING"));
    }

    #[test]
    fn overlay_renders_without_notifications() {
        let manager = Manager::new();
        let i18n = I18n::default();
        let _ = Toast::view_overlay(&manager, &i18n);
    }
}
