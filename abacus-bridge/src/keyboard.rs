//! Keyboard dispatch and subscription management.
//!
//! Key presses are translated to DOM-style key names and resolved through
//! `abacus_core::input::map_key`. The listener is a `Subscription`, so it
//! lives exactly as long as the application.

use crate::app::CalculatorApp;
use crate::messages::Message;

use abacus_core::input::map_key;

use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::{event, Subscription};

/// A recognised key press.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyDispatch {
    pub message: Message,
    /// Handle even when a widget already captured the event.
    pub prevent_default: bool,
}

/// DOM-style name for an iced key, if the calculator cares about it.
pub fn key_name(key: &Key) -> Option<&str> {
    match key {
        Key::Character(c) => Some(c.as_str()),
        Key::Named(Named::Enter) => Some("Enter"),
        Key::Named(Named::Escape) => Some("Escape"),
        _ => None,
    }
}

pub fn map_key_press(key: &Key, modifiers: Modifiers) -> Option<KeyDispatch> {
    // ── Ctrl+Shift combos FIRST ──
    if modifiers.control() && modifiers.shift() {
        return match key {
            Key::Character(c) if c.as_str().eq_ignore_ascii_case("c") => Some(KeyDispatch {
                message: Message::CopyToClipboard,
                prevent_default: true,
            }),
            _ => None,
        };
    }

    // Other shortcuts belong to the window manager / platform.
    if modifiers.control() || modifiers.alt() || modifiers.logo() {
        return None;
    }

    // ── Bare keys ──
    let binding = map_key(key_name(key)?)?;
    tracing::debug!(?binding, "key mapped");

    Some(KeyDispatch {
        message: Message::Input(binding.command),
        prevent_default: binding.prevent_default,
    })
}

pub fn on_event(evt: iced::Event, status: event::Status, _id: iced::window::Id) -> Option<Message> {
    let iced::Event::Keyboard(keyboard::Event::KeyPressed {
        modified_key,
        modifiers,
        ..
    }) = evt
    else {
        return None;
    };

    let dispatch = map_key_press(&modified_key, modifiers)?;
    if matches!(status, event::Status::Captured) && !dispatch.prevent_default {
        return None;
    }
    Some(dispatch.message)
}

// ────────────────────────────────────────────────────────────────
// Subscription
// ────────────────────────────────────────────────────────────────

pub fn subscription(_app: &CalculatorApp) -> Subscription<Message> {
    event::listen_with(on_event)
}
