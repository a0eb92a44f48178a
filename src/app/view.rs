// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::message::Feedback;
use super::Message;
use crate::diagnostics::DiagnosticsCollector;
use crate::features::{Feature, Features};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::{self, Toast};
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub features: &'a Features,
    pub notifications: &'a notifications::Manager,
    pub diagnostics: &'a DiagnosticsCollector,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill)
        .push(Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_MD))
        .push(view_features(ctx.i18n, ctx.features));

    if ctx.features.is_enabled(Feature::Meetings) {
        content = content.push(view_meetings(ctx.i18n));
    }

    content = content
        .push(view_feedback(ctx.i18n))
        .push(view_language(ctx.i18n))
        .push(view_diagnostics(ctx.i18n, ctx.diagnostics));

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(toasts)
        .into()
}

fn section_title<'a>(i18n: &I18n, key: &str) -> Text<'a> {
    Text::new(i18n.tr(key)).size(typography::TITLE_SM)
}

fn view_features<'a>(i18n: &I18n, features: &Features) -> Element<'a, Message> {
    features
        .iter()
        .fold(
            Column::new()
                .spacing(spacing::XXS)
                .push(section_title(i18n, "features-title")),
            |column, (name, capability)| {
                let state = if capability.enabled {
                    i18n.tr("feature-enabled")
                } else {
                    i18n.tr("feature-disabled")
                };
                let line = i18n.tr_with_args(
                    "feature-state",
                    &[("name", name), ("state", state.as_str())],
                );
                column.push(Text::new(line).size(typography::CAPTION))
            },
        )
        .into()
}

fn view_meetings<'a>(i18n: &I18n) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .push(section_title(i18n, "meetings-title"))
        .push(Text::new(i18n.tr("meetings-description")).size(typography::BODY))
        .push(Text::new(i18n.tr("meetings-empty")).size(typography::CAPTION))
        .into()
}

fn view_feedback<'a>(i18n: &I18n) -> Element<'a, Message> {
    let buttons = Feedback::ALL.into_iter().fold(
        Row::new().spacing(spacing::SM),
        |row, feedback| {
            row.push(
                button(Text::new(i18n.tr(feedback.label_key())).size(typography::BODY))
                    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                    .on_press(Message::ShowFeedback(feedback)),
            )
        },
    );

    Column::new()
        .spacing(spacing::XS)
        .push(section_title(i18n, "feedback-title"))
        .push(buttons)
        .into()
}

fn view_language<'a>(i18n: &I18n) -> Element<'a, Message> {
    let current = i18n.current_locale();
    let buttons = i18n.available_locales.iter().fold(
        Row::new().spacing(spacing::SM),
        |row, locale| {
            row.push(
                button(Text::new(locale.to_string()).size(typography::BODY))
                    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                    .on_press_maybe(
                        (locale != current).then(|| Message::LanguageSelected(locale.clone())),
                    ),
            )
        },
    );

    Column::new()
        .spacing(spacing::XS)
        .push(section_title(i18n, "language-title"))
        .push(buttons)
        .into()
}

fn view_diagnostics<'a>(i18n: &I18n, diagnostics: &DiagnosticsCollector) -> Element<'a, Message> {
    let warnings = diagnostics.warning_count().to_string();
    let errors = diagnostics.error_count().to_string();
    let summary = i18n.tr_with_args(
        "diagnostics-summary",
        &[("warnings", warnings.as_str()), ("errors", errors.as_str())],
    );

    let clear = button(Text::new(i18n.tr("diagnostics-clear")).size(typography::BODY))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .on_press_maybe((!diagnostics.is_empty()).then_some(Message::ClearDiagnostics));

    Column::new()
        .spacing(spacing::XS)
        .push(section_title(i18n, "diagnostics-title"))
        .push(
            Row::new()
                .spacing(spacing::SM)
                .push(Text::new(summary).size(typography::CAPTION))
                .push(clear),
        )
        .into()
}
