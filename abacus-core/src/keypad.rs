//! Pointer side of the input adapter: the labelled control grid.
//!
//! ```text
//! [ AC ] [ ± ] [ % ] [ ÷ ]
//! [ 7  ] [ 8 ] [ 9 ] [ × ]
//! [ 4  ] [ 5 ] [ 6 ] [ − ]
//! [ 1  ] [ 2 ] [ 3 ] [ + ]
//! [    0     ] [ . ] [ = ]
//! ```

use serde::{Deserialize, Serialize};

use crate::engine::CalculatorEngine;
use crate::operator::Operator;
use crate::Command;

pub const COLUMNS: usize = 4;

/// Visual role of a button; front ends pick colours per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonVariant {
    Secondary,
    Number,
    Operation,
    Equals,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeypadButton {
    pub label: &'static str,
    pub command: Command,
    pub variant: ButtonVariant,
    /// Grid columns occupied.
    pub span: usize,
}

impl KeypadButton {
    fn new(label: &'static str, command: Command, variant: ButtonVariant) -> Self {
        Self {
            label,
            command,
            variant,
            span: 1,
        }
    }

    fn digit(d: u8, label: &'static str) -> Self {
        Self::new(label, Command::Digit(d), ButtonVariant::Number)
    }

    fn operator(op: Operator) -> Self {
        Self::new(op.symbol(), Command::Operator(op), ButtonVariant::Operation)
    }

    fn wide(mut self, span: usize) -> Self {
        self.span = span;
        self
    }
}

#[derive(Debug, Clone)]
pub struct Keypad {
    rows: Vec<Vec<KeypadButton>>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::standard()
    }
}

impl Keypad {
    pub fn standard() -> Self {
        use ButtonVariant::{Equals, Number, Secondary};

        let rows = vec![
            vec![
                KeypadButton::new("AC", Command::Clear, Secondary),
                KeypadButton::new("±", Command::ToggleSign, Secondary),
                KeypadButton::new("%", Command::Percent, Secondary),
                KeypadButton::operator(Operator::Divide),
            ],
            vec![
                KeypadButton::digit(7, "7"),
                KeypadButton::digit(8, "8"),
                KeypadButton::digit(9, "9"),
                KeypadButton::operator(Operator::Multiply),
            ],
            vec![
                KeypadButton::digit(4, "4"),
                KeypadButton::digit(5, "5"),
                KeypadButton::digit(6, "6"),
                KeypadButton::operator(Operator::Subtract),
            ],
            vec![
                KeypadButton::digit(1, "1"),
                KeypadButton::digit(2, "2"),
                KeypadButton::digit(3, "3"),
                KeypadButton::operator(Operator::Add),
            ],
            vec![
                KeypadButton::digit(0, "0").wide(2),
                KeypadButton::new(".", Command::Decimal, Number),
                KeypadButton::new("=", Command::Equals, Equals),
            ],
        ];

        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<KeypadButton>] {
        &self.rows
    }

    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.rows.iter().flatten()
    }

    pub fn find(&self, label: &str) -> Option<&KeypadButton> {
        self.buttons().find(|b| b.label == label)
    }

    /// Activate the control with this label, as a click or tap would.
    pub fn press(&self, engine: &mut CalculatorEngine, label: &str) -> bool {
        match self.find(label) {
            Some(button) => {
                engine.apply(button.command);
                true
            }
            None => {
                tracing::warn!("No keypad control labelled {:?}", label);
                false
            }
        }
    }
}
