//! Calculator state kinds

use serde::{Deserialize, Serialize};

/// Which of the five states is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateKind {
    /// Idle at zero
    Zero,
    /// Typing an integer
    Accumulator,
    /// Typing a number that already has a separator
    AccumulatorDecimal,
    /// Showing a computed result
    Computed,
    /// Showing the error marker
    Error,
}

impl StateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StateKind::Zero => "ZERO",
            StateKind::Accumulator => "ACCUMULATOR",
            StateKind::AccumulatorDecimal => "ACCUMULATOR_DECIMAL",
            StateKind::Computed => "COMPUTED",
            StateKind::Error => "ERROR",
        }
    }
}
