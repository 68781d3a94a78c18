//! Message enum.
//!
//! Keypad clicks and mapped key presses both arrive as `Input`; the
//! remaining variants are window chrome.

use abacus_core::Command;

// ────────────────────────────────────────────────────────────────
// Message enum
// ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    /// A calculator action from the keypad or the keyboard.
    Input(Command),
    /// Ctrl+Shift+C
    CopyToClipboard,
    CycleTheme,
}
