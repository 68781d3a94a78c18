//! View / UI rendering.
//!
//! Page wrapper (heading + tagline), the display card and the keypad grid.
//! Every keypad control sends `Message::Input` with its bound command.

use crate::app::CalculatorApp;
use crate::messages::Message;
use crate::renderer::{palette_for, shade, variant_colors, ThemeName};

use abacus_core::keypad::KeypadButton;

use iced::alignment::Horizontal;
use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Background, Border, Color, Element, Font, Length, Theme};

// ────────────────────────────────────────────────────────────────
// Title & Theme
// ────────────────────────────────────────────────────────────────

pub fn title(app: &CalculatorApp) -> String {
    match app.engine.operation() {
        Some(op) => format!(
            "Calculator /// {} {}",
            app.engine.previous_value().unwrap_or_default(),
            op
        ),
        None => "Calculator".into(),
    }
}

pub fn theme(_: &CalculatorApp) -> Theme {
    Theme::Dark
}

// ────────────────────────────────────────────────────────────────
// View
// ────────────────────────────────────────────────────────────────

pub fn view(app: &CalculatorApp) -> Element<'_, Message> {
    let palette = palette_for(app.theme_name);

    // ── Header ──
    let header = column![
        text("Calculator").size(36).color(palette.display_fg),
        text("Simple & elegant calculations")
            .size(14)
            .color(palette.muted_fg),
        theme_button(app.theme_name),
    ]
    .spacing(6)
    .align_x(Alignment::Center)
    .width(Length::Fill);

    // ── Display ──
    let display = container(
        text(app.engine.rendered())
            .size(48)
            .font(Font::MONOSPACE)
            .color(palette.display_fg),
    )
    .width(Length::Fill)
    .height(Length::Fixed(100.0))
    .padding([24, 24])
    .align_x(Horizontal::Right)
    .align_y(Alignment::End)
    .style(move |_: &Theme| panel_style(palette.display_bg, 16.0));

    // ── Keypad ──
    let mut grid = column![].spacing(12);
    for keys in app.keypad.rows() {
        let mut line = row![].spacing(12);
        for key in keys {
            line = line.push(keypad_button(key, app.theme_name));
        }
        grid = grid.push(line);
    }

    let mut card = column![display].spacing(12);
    if let Some(status) = &app.status {
        card = card.push(
            text(status.clone())
                .font(Font::MONOSPACE)
                .size(12)
                .color(palette.muted_fg),
        );
    }
    card = card.push(grid);

    let card = container(card)
        .padding(24)
        .width(Length::Fill)
        .style(move |_: &Theme| panel_style(palette.card, 24.0));

    let page = column![header, card].spacing(24).max_width(420);

    container(page)
        .padding(16)
        .center(Length::Fill)
        .style(move |_: &Theme| panel_style(palette.background, 0.0))
        .into()
}

// ────────────────────────────────────────────────────────────────
// Widgets
// ────────────────────────────────────────────────────────────────

fn keypad_button(key: &KeypadButton, theme: ThemeName) -> Element<'static, Message> {
    let (bg, fg) = variant_colors(theme, key.variant);

    button(text(key.label).size(26).center())
        .on_press(Message::Input(key.command))
        .width(Length::FillPortion(key.span as u16))
        .height(Length::Fixed(64.0))
        .style(move |_: &Theme, status: button::Status| button_style(bg, fg, status, 32.0))
        .into()
}

fn theme_button(theme: ThemeName) -> Element<'static, Message> {
    let (bg, fg) = palette_for(theme).secondary;

    button(text(format!("🎨 {}", theme.label())).size(12))
        .on_press(Message::CycleTheme)
        .padding([4, 12])
        .style(move |_: &Theme, status: button::Status| button_style(bg, fg, status, 12.0))
        .into()
}

// ────────────────────────────────────────────────────────────────
// Styling
// ────────────────────────────────────────────────────────────────

fn button_style(bg: Color, fg: Color, status: button::Status, radius: f32) -> button::Style {
    let bg = match status {
        button::Status::Hovered => shade(bg, 0.12),
        button::Status::Pressed => shade(bg, -0.15),
        _ => bg,
    };

    button::Style {
        background: Some(Background::Color(bg)),
        text_color: fg,
        border: Border {
            radius: radius.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

fn panel_style(bg: Color, radius: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(bg)),
        border: Border {
            radius: radius.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}
