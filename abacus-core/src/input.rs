//! Keyboard side of the input adapter.
//!
//! Keys are named the DOM way: printable keys by their character, the rest
//! by name (`Enter`, `Escape`). Front ends translate their native key
//! events into these names and call [`map_key`].

use crate::operator::Operator;
use crate::Command;

/// The outcome of a recognised key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyBinding {
    pub command: Command,
    /// The calculator claims this key even if something else already
    /// consumed it (`/`, `Enter` and `=`).
    pub prevent_default: bool,
}

impl KeyBinding {
    fn plain(command: Command) -> Self {
        Self {
            command,
            prevent_default: false,
        }
    }

    fn claimed(command: Command) -> Self {
        Self {
            command,
            prevent_default: true,
        }
    }
}

pub fn map_key(key: &str) -> Option<KeyBinding> {
    let binding = match key {
        "0" | "1" | "2" | "3" | "4" | "5" | "6" | "7" | "8" | "9" => {
            let digit = key.as_bytes()[0] - b'0';
            KeyBinding::plain(Command::Digit(digit))
        }
        "." => KeyBinding::plain(Command::Decimal),
        "+" => KeyBinding::plain(Command::Operator(Operator::Add)),
        "-" => KeyBinding::plain(Command::Operator(Operator::Subtract)),
        "*" => KeyBinding::plain(Command::Operator(Operator::Multiply)),
        "/" => KeyBinding::claimed(Command::Operator(Operator::Divide)),
        "Enter" | "=" => KeyBinding::claimed(Command::Equals),
        "Escape" | "c" | "C" => KeyBinding::plain(Command::Clear),
        _ => return None,
    };
    Some(binding)
}
