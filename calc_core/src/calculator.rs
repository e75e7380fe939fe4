//! Calculator facade
//!
//! Owns the active state, the memory cell and the display. Each key press is
//! classified, handed to the active state, and the resulting transition is
//! swapped in before `apply_key` returns.

use tracing::{debug, trace};

use crate::config::{CalculatorConfig, ConfigError};
use crate::display::Display;
use crate::key::InputKind;
use crate::memory::Memory;
use crate::mode::StateKind;
use crate::operation::{Operation, PendingOperation};
use crate::snapshot::{CalculatorSnapshot, PendingSnapshot};
use crate::state::{CalculatorState, DisplayEffect, PressOutcome, ZERO_TEXT};

/// Keystroke-driven calculator
pub struct Calculator {
    config: CalculatorConfig,
    state: CalculatorState,
    memory: Memory,
    display: Display,
}

impl Calculator {
    /// Calculator with the default key layout
    pub fn new() -> Self {
        Self::from_valid_config(CalculatorConfig::default())
    }

    /// Calculator with a custom configuration
    pub fn with_config(config: CalculatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: CalculatorConfig) -> Self {
        Self {
            config,
            state: CalculatorState::default(),
            memory: Memory::new(),
            display: Display::with_text(ZERO_TEXT),
        }
    }

    /// Feed one key press
    pub fn press(&mut self, key: char) {
        self.apply_key(key);
    }

    /// Feed one key press and report what it did
    pub fn apply_key(&mut self, key: char) -> PressOutcome {
        let input = InputKind::classify(key, &self.config);
        let from = self.state.kind();

        let state = std::mem::take(&mut self.state);
        let transition = state.on_input(input, &mut self.memory, &self.config);
        self.state = transition.next;

        match transition.display {
            DisplayEffect::Unchanged => {}
            DisplayEffect::Set(text) => self.display.set(&text),
            DisplayEffect::Append(text) => self.display.append(&text),
            DisplayEffect::Fresh => self.display = Display::with_text(ZERO_TEXT),
        }

        if transition.outcome == PressOutcome::Ignored {
            trace!(%key, input = input.as_str(), state = from.as_str(), "key ignored");
        } else {
            debug!(
                %key,
                input = input.as_str(),
                from = from.as_str(),
                to = self.state.kind().as_str(),
                display = self.display.as_str(),
                "transition"
            );
        }

        transition.outcome
    }

    /// Feed every character of `keys` in order
    pub fn press_all(&mut self, keys: &str) {
        for key in keys.chars() {
            self.press(key);
        }
    }

    /// What the display currently shows, verbatim
    pub fn current_display_state(&self) -> &str {
        self.display.as_str()
    }

    /// Hard reset: clear memory and start over at zero with a fresh display
    pub fn reset(&mut self) {
        self.memory.clear();
        self.state = CalculatorState::default();
        self.display = Display::with_text(ZERO_TEXT);
    }

    pub fn state_kind(&self) -> StateKind {
        self.state.kind()
    }

    pub fn pending(&self) -> Option<PendingOperation> {
        self.state.pending()
    }

    pub fn memory(&self) -> f64 {
        self.memory.recall()
    }

    /// Get a complete snapshot of calculator state (for parity testing)
    pub fn snapshot(&self) -> CalculatorSnapshot {
        let keys = &self.config.keys;
        CalculatorSnapshot {
            state: self.state.kind(),
            display: self.display.as_str().to_string(),
            accumulator: self
                .state
                .accumulator()
                .map(|buffer| buffer.as_str().to_string())
                .unwrap_or_default(),
            pending: self.state.pending().map(|pending| PendingSnapshot {
                operator: keys.key_for(Operation::Binary(pending.op)),
                first_operand: pending.first_operand,
            }),
            memory: self.memory.recall(),
            operand: self.state.holds_operand(),
        }
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::BinaryOp;

    #[test]
    fn test_new_calculator() {
        let calc = Calculator::new();
        assert_eq!(calc.current_display_state(), "0");
        assert_eq!(calc.state_kind(), StateKind::Zero);
        assert_eq!(calc.memory(), 0.0);
        assert!(calc.pending().is_none());
    }

    #[test]
    fn test_typed_digits_show_verbatim() {
        let mut calc = Calculator::new();
        calc.press_all("1234567890");
        assert_eq!(calc.current_display_state(), "1234567890");
    }

    #[test]
    fn test_simple_addition() {
        let mut calc = Calculator::new();
        calc.press_all("5+3=");
        assert_eq!(calc.current_display_state(), "8");
    }

    #[test]
    fn test_apply_key_outcomes() {
        let mut calc = Calculator::new();
        assert_eq!(calc.apply_key('0'), PressOutcome::Ignored);
        assert_eq!(calc.apply_key('4'), PressOutcome::Changed);
        assert_eq!(calc.apply_key('@'), PressOutcome::Errored);
        assert_eq!(calc.apply_key('4'), PressOutcome::Ignored);
        assert_eq!(calc.apply_key('C'), PressOutcome::Changed);
        assert_eq!(calc.apply_key('O'), PressOutcome::Reset);
    }

    #[test]
    fn test_pending_visible_after_operator() {
        let mut calc = Calculator::new();
        calc.press_all("12*");
        assert_eq!(
            calc.pending(),
            Some(PendingOperation::new(BinaryOp::Multiply, 12.0))
        );
    }

    #[test]
    fn test_reset_method() {
        let mut calc = Calculator::new();
        calc.press_all("7P+2");
        calc.reset();
        assert_eq!(calc.current_display_state(), "0");
        assert_eq!(calc.memory(), 0.0);
        assert!(calc.pending().is_none());
        assert_eq!(calc.state_kind(), StateKind::Zero);
    }

    #[test]
    fn test_with_config_validates() {
        let mut config = CalculatorConfig::default();
        config.keys.add = '=';
        assert!(matches!(
            Calculator::with_config(config),
            Err(ConfigError::DuplicateKey { key: '=', .. })
        ));
    }

    #[test]
    fn test_custom_error_marker_and_separator() {
        let config = CalculatorConfig {
            decimal_separator: '.',
            error_marker: "ERR".into(),
            ..CalculatorConfig::default()
        };
        let mut calc = Calculator::with_config(config).unwrap();

        calc.press_all("1.5*3=");
        assert_eq!(calc.current_display_state(), "4.5");

        calc.press(',');
        assert_eq!(calc.current_display_state(), "ERR");
    }

    #[test]
    fn test_snapshot() {
        let mut calc = Calculator::new();
        calc.press_all("9P6-4,2");
        let snapshot = calc.snapshot();

        assert_eq!(snapshot.state, StateKind::AccumulatorDecimal);
        assert_eq!(snapshot.display, "4,2");
        assert_eq!(snapshot.accumulator, "4,2");
        assert_eq!(
            snapshot.pending,
            Some(PendingSnapshot {
                operator: '-',
                first_operand: 96.0,
            })
        );
        assert_eq!(snapshot.memory, 9.0);
    }
}
