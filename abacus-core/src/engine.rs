use serde::{Deserialize, Serialize};

use crate::config::DisplayConfig;
use crate::display::{self, format_number, parse_display, round_significant};
use crate::operator::{calculate, Operator};
use crate::Command;

/// A left operand waiting for its right-hand side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pending {
    pub operand: f64,
    pub operator: Operator,
}

/// Where the engine is in the entry cycle.
///
/// | variant           | previous value | operator | next digit      |
/// |-------------------|----------------|----------|-----------------|
/// | `EnteringOperand` | -              | -        | appends         |
/// | `OperatorPending` | set            | set      | starts new text |
/// | `EnteringSecond`  | set            | set      | appends         |
/// | `ShowingResult`   | -              | -        | starts new text |
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EntryState {
    #[default]
    EnteringOperand,
    OperatorPending(Pending),
    EnteringSecond(Pending),
    ShowingResult,
}

impl EntryState {
    pub fn pending(&self) -> Option<Pending> {
        match self {
            EntryState::OperatorPending(p) | EntryState::EnteringSecond(p) => Some(*p),
            EntryState::EnteringOperand | EntryState::ShowingResult => None,
        }
    }

    pub fn waiting_for_operand(&self) -> bool {
        matches!(
            self,
            EntryState::OperatorPending(_) | EntryState::ShowingResult
        )
    }

    /// State after typing into a fresh operand.
    fn entering(&self) -> EntryState {
        match self.pending() {
            Some(p) => EntryState::EnteringSecond(p),
            None => EntryState::EnteringOperand,
        }
    }
}

/// Serialisable view of the engine, for logging and tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub display: String,
    pub rendered: String,
    pub previous_value: Option<String>,
    pub operation: Option<Operator>,
    pub waiting_for_operand: bool,
}

/// The calculator. Owns the display text and the entry state; every
/// keypad or keyboard action lands on one of the handlers below.
#[derive(Debug, Clone)]
pub struct CalculatorEngine {
    display: String,
    state: EntryState,
    config: DisplayConfig,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    pub fn new() -> Self {
        Self::with_config(DisplayConfig::default())
    }

    pub fn with_config(config: DisplayConfig) -> Self {
        Self {
            display: "0".to_string(),
            state: EntryState::default(),
            config,
        }
    }

    // ── accessors ───────────────────────────────────────────────

    /// The raw display text, exactly as typed or computed.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// What the display area shows (exponential once too long).
    pub fn rendered(&self) -> String {
        display::render(&self.display, &self.config)
    }

    pub fn value(&self) -> f64 {
        parse_display(&self.display)
    }

    pub fn state(&self) -> EntryState {
        self.state
    }

    pub fn previous_value(&self) -> Option<String> {
        self.state.pending().map(|p| format_number(p.operand))
    }

    pub fn operation(&self) -> Option<Operator> {
        self.state.pending().map(|p| p.operator)
    }

    pub fn waiting_for_operand(&self) -> bool {
        self.state.waiting_for_operand()
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: DisplayConfig) {
        self.config = config;
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            display: self.display.clone(),
            rendered: self.rendered(),
            previous_value: self.previous_value(),
            operation: self.operation(),
            waiting_for_operand: self.waiting_for_operand(),
        }
    }

    // ── handlers ────────────────────────────────────────────────

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Digit(d) => self.input_digit(d),
            Command::Decimal => self.input_decimal(),
            Command::Operator(op) => self.perform_operation(op),
            Command::Equals => self.handle_equals(),
            Command::ToggleSign => self.toggle_sign(),
            Command::Percent => self.input_percent(),
            Command::Clear => self.clear(),
        }
        tracing::debug!(?command, display = %self.display, state = ?self.state, "applied");
    }

    pub fn input_digit(&mut self, digit: u8) {
        if digit > 9 {
            tracing::warn!("Ignoring out-of-range digit {}", digit);
            return;
        }
        let ch = char::from(b'0' + digit);

        if self.state.waiting_for_operand() {
            self.display = ch.to_string();
            self.state = self.state.entering();
        } else if self.display == "0" {
            self.display = ch.to_string();
        } else {
            self.display.push(ch);
        }
    }

    pub fn input_decimal(&mut self) {
        if self.state.waiting_for_operand() {
            self.display = "0.".to_string();
            self.state = self.state.entering();
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    pub fn clear(&mut self) {
        self.display = "0".to_string();
        self.state = EntryState::EnteringOperand;
    }

    /// Select `op`. With an operation already pending it is evaluated
    /// first, so `2 + 3 ×` shows 5 and keeps 5 as the new left operand.
    pub fn perform_operation(&mut self, op: Operator) {
        let input = self.value();

        let operand = match self.state.pending() {
            None => input,
            Some(p) => {
                let result = calculate(p.operand, input, Some(p.operator));
                self.show(result);
                self.value()
            }
        };

        self.state = EntryState::OperatorPending(Pending {
            operand,
            operator: op,
        });
    }

    pub fn handle_equals(&mut self) {
        let Some(p) = self.state.pending() else {
            return;
        };
        let result = calculate(p.operand, self.value(), Some(p.operator));
        self.show(result);
        self.state = EntryState::ShowingResult;
    }

    /// Negate the display. Not rounded: typed digits beyond the
    /// significant-digit limit survive a double toggle.
    pub fn toggle_sign(&mut self) {
        self.display = format_number(-self.value());
    }

    pub fn input_percent(&mut self) {
        let scaled = self.value() / 100.0;
        self.show(scaled);
    }

    fn show(&mut self, value: f64) {
        if !value.is_finite() {
            tracing::debug!("Non-finite result: {}", value);
        }
        let rounded = round_significant(value, self.config.significant_digits);
        self.display = format_number(rounded);
    }
}
