//! Digit accumulator
//!
//! The text of the number being typed. Appends are refused once the buffer is
//! longer than the configured maximum, so a full buffer holds one character
//! more than that maximum.

use crate::config::CalculatorConfig;

/// Digits typed so far, with at most one decimal separator
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DigitAccumulator {
    text: String,
}

impl DigitAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn has_separator(&self, separator: char) -> bool {
        self.text.contains(separator)
    }

    /// Append a non-zero digit; returns false if the buffer is full
    pub fn push_digit(&mut self, digit: char, config: &CalculatorConfig) -> bool {
        debug_assert!(digit.is_ascii_digit());
        self.append(digit, config)
    }

    /// Append a zero; returns false if the buffer is full
    pub fn push_zero(&mut self, config: &CalculatorConfig) -> bool {
        self.append('0', config)
    }

    /// Append the decimal separator, with a leading zero on an empty buffer.
    ///
    /// Returns false if the buffer is full or already holds a separator.
    pub fn push_separator(&mut self, config: &CalculatorConfig) -> bool {
        let separator = config.decimal_separator;
        if self.has_separator(separator) || self.is_full(config) {
            return false;
        }
        if self.is_empty() {
            self.text.push('0');
        }
        self.text.push(separator);
        true
    }

    /// Parse the buffer; anything unparseable (including empty) is 0.0
    pub fn to_number(&self, separator: char) -> f64 {
        let normalized: String = self
            .text
            .chars()
            .map(|ch| if ch == separator { '.' } else { ch })
            .collect();
        normalized.parse().unwrap_or(0.0)
    }

    fn is_full(&self, config: &CalculatorConfig) -> bool {
        self.len() > config.max_display_length
    }

    fn append(&mut self, ch: char, config: &CalculatorConfig) -> bool {
        if self.is_full(config) {
            return false;
        }
        self.text.push(ch);
        true
    }
}
