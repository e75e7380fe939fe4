//! Calculator configuration
//!
//! Everything a host may want to inject: the decimal separator, the error
//! marker, the accumulator cap and the key-to-operator mapping. Defaults
//! reproduce the classic pocket-calculator layout.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::operation::{BinaryOp, MemoryOp, Operation, UnaryOp};

/// Default decimal separator
pub const DEFAULT_DECIMAL_SEPARATOR: char = ',';

/// Default text shown while in the error state
pub const DEFAULT_ERROR_MARKER: &str = "-E-";

/// Default accumulator cap
pub const DEFAULT_MAX_DISPLAY_LENGTH: usize = 10;

/// Configuration errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Key '{key}' is bound to both {first} and {second}")]
    DuplicateKey {
        key: char,
        first: &'static str,
        second: &'static str,
    },

    #[error("Key '{key}' for {binding} collides with a digit")]
    DigitKey { key: char, binding: &'static str },

    #[error("Maximum display length must be at least 1")]
    InvalidMaxLength,
}

/// Key-to-operator mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyMap {
    pub equals: char,
    pub clear: char,
    pub reset: char,

    pub add: char,
    pub subtract: char,
    pub multiply: char,
    pub divide: char,

    pub negate: char,
    pub sin: char,
    pub cos: char,
    pub tan: char,
    pub square: char,
    pub sqrt: char,
    pub reciprocal: char,

    pub store: char,
    pub recall: char,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            equals: '=',
            clear: 'C',
            reset: 'O',
            add: '+',
            subtract: '-',
            multiply: '*',
            divide: '/',
            negate: 'M',
            sin: 'S',
            cos: 'K',
            tan: 'T',
            square: 'Q',
            sqrt: 'R',
            reciprocal: 'I',
            store: 'P',
            recall: 'G',
        }
    }
}

impl KeyMap {
    /// Look up the binary operator bound to `ch`
    pub fn binary_op(&self, ch: char) -> Option<BinaryOp> {
        BinaryOp::ALL.into_iter().find(|op| self.key_for(Operation::Binary(*op)) == ch)
    }

    /// Look up the unary operator bound to `ch`
    pub fn unary_op(&self, ch: char) -> Option<UnaryOp> {
        UnaryOp::ALL.into_iter().find(|op| self.key_for(Operation::Unary(*op)) == ch)
    }

    /// Look up the memory operation bound to `ch`
    pub fn memory_op(&self, ch: char) -> Option<MemoryOp> {
        MemoryOp::ALL.into_iter().find(|op| self.key_for(Operation::Memory(*op)) == ch)
    }

    /// Key currently bound to an operation
    pub fn key_for(&self, operation: Operation) -> char {
        match operation {
            Operation::Binary(BinaryOp::Add) => self.add,
            Operation::Binary(BinaryOp::Subtract) => self.subtract,
            Operation::Binary(BinaryOp::Multiply) => self.multiply,
            Operation::Binary(BinaryOp::Divide) => self.divide,
            Operation::Unary(UnaryOp::Negate) => self.negate,
            Operation::Unary(UnaryOp::Sin) => self.sin,
            Operation::Unary(UnaryOp::Cos) => self.cos,
            Operation::Unary(UnaryOp::Tan) => self.tan,
            Operation::Unary(UnaryOp::Square) => self.square,
            Operation::Unary(UnaryOp::Sqrt) => self.sqrt,
            Operation::Unary(UnaryOp::Reciprocal) => self.reciprocal,
            Operation::Memory(MemoryOp::Store) => self.store,
            Operation::Memory(MemoryOp::Recall) => self.recall,
        }
    }

    fn bindings(&self) -> [(&'static str, char); 16] {
        [
            ("equals", self.equals),
            ("clear", self.clear),
            ("reset", self.reset),
            ("add", self.add),
            ("subtract", self.subtract),
            ("multiply", self.multiply),
            ("divide", self.divide),
            ("negate", self.negate),
            ("sin", self.sin),
            ("cos", self.cos),
            ("tan", self.tan),
            ("square", self.square),
            ("sqrt", self.sqrt),
            ("reciprocal", self.reciprocal),
            ("store", self.store),
            ("recall", self.recall),
        ]
    }
}

/// Calculator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub decimal_separator: char,
    pub error_marker: String,
    pub max_display_length: usize,
    pub keys: KeyMap,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            decimal_separator: DEFAULT_DECIMAL_SEPARATOR,
            error_marker: DEFAULT_ERROR_MARKER.into(),
            max_display_length: DEFAULT_MAX_DISPLAY_LENGTH,
            keys: KeyMap::default(),
        }
    }
}

impl CalculatorConfig {
    /// Check that every key classifies to exactly one input kind
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_display_length == 0 {
            return Err(ConfigError::InvalidMaxLength);
        }

        let mut seen: Vec<(&'static str, char)> = Vec::with_capacity(17);
        let separator = std::iter::once(("decimal_separator", self.decimal_separator));

        for (binding, key) in separator.chain(self.keys.bindings()) {
            if key.is_ascii_digit() {
                return Err(ConfigError::DigitKey { key, binding });
            }
            if let Some(&(first, _)) = seen.iter().find(|(_, k)| *k == key) {
                return Err(ConfigError::DuplicateKey {
                    key,
                    first,
                    second: binding,
                });
            }
            seen.push((binding, key));
        }

        Ok(())
    }
}
