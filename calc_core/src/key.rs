//! Key classification

use crate::config::CalculatorConfig;
use crate::operation::{BinaryOp, MemoryOp, UnaryOp};

/// What a single key press means to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    Zero,
    NonZeroDigit(char),
    DecimalSeparator,
    BinaryOp(BinaryOp),
    UnaryOp(UnaryOp),
    MemoryOp(MemoryOp),
    Equals,
    Clear,
    Reset,
    Invalid(char),
}

impl InputKind {
    /// Classify a raw key press.
    ///
    /// Total over `char`: anything not bound to a key yields `Invalid`.
    /// Zero is checked before other digits and control keys before the
    /// operator sets.
    pub fn classify(ch: char, config: &CalculatorConfig) -> Self {
        let keys = &config.keys;

        if ch == '0' {
            return InputKind::Zero;
        }
        if ch.is_ascii_digit() {
            return InputKind::NonZeroDigit(ch);
        }
        if ch == config.decimal_separator {
            return InputKind::DecimalSeparator;
        }
        if ch == keys.equals {
            return InputKind::Equals;
        }
        if ch == keys.clear {
            return InputKind::Clear;
        }
        if ch == keys.reset {
            return InputKind::Reset;
        }

        if let Some(op) = keys.binary_op(ch) {
            InputKind::BinaryOp(op)
        } else if let Some(op) = keys.unary_op(ch) {
            InputKind::UnaryOp(op)
        } else if let Some(op) = keys.memory_op(ch) {
            InputKind::MemoryOp(op)
        } else {
            InputKind::Invalid(ch)
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Zero => "zero",
            InputKind::NonZeroDigit(_) => "digit",
            InputKind::DecimalSeparator => "separator",
            InputKind::BinaryOp(_) => "binary-op",
            InputKind::UnaryOp(_) => "unary-op",
            InputKind::MemoryOp(_) => "memory-op",
            InputKind::Equals => "equals",
            InputKind::Clear => "clear",
            InputKind::Reset => "reset",
            InputKind::Invalid(_) => "invalid",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(ch: char) -> InputKind {
        InputKind::classify(ch, &CalculatorConfig::default())
    }

    #[test]
    fn test_digits() {
        assert_eq!(classify('0'), InputKind::Zero);
        assert_eq!(classify('1'), InputKind::NonZeroDigit('1'));
        assert_eq!(classify('9'), InputKind::NonZeroDigit('9'));
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(classify(','), InputKind::DecimalSeparator);
        assert_eq!(classify('='), InputKind::Equals);
        assert_eq!(classify('C'), InputKind::Clear);
        assert_eq!(classify('O'), InputKind::Reset);
    }

    #[test]
    fn test_operator_sets() {
        assert_eq!(classify('+'), InputKind::BinaryOp(BinaryOp::Add));
        assert_eq!(classify('/'), InputKind::BinaryOp(BinaryOp::Divide));
        assert_eq!(classify('M'), InputKind::UnaryOp(UnaryOp::Negate));
        assert_eq!(classify('K'), InputKind::UnaryOp(UnaryOp::Cos));
        assert_eq!(classify('I'), InputKind::UnaryOp(UnaryOp::Reciprocal));
        assert_eq!(classify('P'), InputKind::MemoryOp(MemoryOp::Store));
        assert_eq!(classify('G'), InputKind::MemoryOp(MemoryOp::Recall));
    }

    #[test]
    fn test_unknown_keys_are_invalid() {
        assert_eq!(classify('@'), InputKind::Invalid('@'));
        assert_eq!(classify('.'), InputKind::Invalid('.'));
        assert_eq!(classify('c'), InputKind::Invalid('c'));
        assert_eq!(classify(' '), InputKind::Invalid(' '));
        // Non-ASCII digits are not accumulated
        assert_eq!(classify('٣'), InputKind::Invalid('٣'));
    }

    #[test]
    fn test_custom_separator() {
        let config = CalculatorConfig {
            decimal_separator: '.',
            ..CalculatorConfig::default()
        };
        assert_eq!(InputKind::classify('.', &config), InputKind::DecimalSeparator);
        assert_eq!(InputKind::classify(',', &config), InputKind::Invalid(','));
    }
}
