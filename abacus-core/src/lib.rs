pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod input;
pub mod keypad;
pub mod operator;

// Re-export the main struct so users can just use `abacus_core::CalculatorEngine`
pub use engine::CalculatorEngine;

pub use config::Config;
pub use error::CoreError;
pub use operator::{calculate, Operator};

use serde::{Deserialize, Serialize};

/// One calculator action. The keypad and the keyboard both produce these,
/// and `CalculatorEngine::apply` consumes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    Digit(u8),
    Decimal,
    Operator(Operator),
    Equals,
    ToggleSign,
    Percent,
    Clear,
}
