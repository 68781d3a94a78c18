//! The four arithmetic operators and the evaluation step.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn all() -> &'static [Operator] {
        &[
            Operator::Add,
            Operator::Subtract,
            Operator::Multiply,
            Operator::Divide,
        ]
    }

    /// The symbol shown on the keypad.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "−",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    /// Accepts keypad glyphs as well as their ASCII keyboard spellings.
    /// `=` and anything else is not an operator.
    pub fn from_symbol(s: &str) -> Option<Operator> {
        match s {
            "+" => Some(Operator::Add),
            "-" | "−" => Some(Operator::Subtract),
            "×" | "*" => Some(Operator::Multiply),
            "÷" | "/" => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            Operator::Add => a + b,
            Operator::Subtract => a - b,
            Operator::Multiply => a * b,
            Operator::Divide => a / b,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::from_symbol(s.trim()).ok_or_else(|| CoreError::UnknownOperator(s.to_string()))
    }
}

/// Evaluate `a op b`. Without an operator the right operand passes through
/// unchanged. No zero-divisor guard: IEEE-754 gives ±inf or NaN.
pub fn calculate(a: f64, b: f64, op: Option<Operator>) -> f64 {
    match op {
        Some(op) => op.apply(a, b),
        None => b,
    }
}

/// Symbol-level variant of [`calculate`]: unrecognised symbols (including
/// `=`) return `b`.
pub fn calculate_symbol(a: f64, b: f64, symbol: &str) -> f64 {
    calculate(a, b, Operator::from_symbol(symbol))
}
