//! Calculator state machine
//!
//! The five states are one enum. `on_input` consumes the active state and
//! returns a [`Transition`]: the next state plus the display change it
//! implies. Memory is the only thing a transition mutates in place.
//!
//! Numeric domain errors (division by zero, square root of a negative) are
//! not errors here: infinities and NaN are rendered like any other result.
//! Only unclassifiable keys and operand-count violations reach `Error`.

use tracing::warn;

use crate::accumulator::DigitAccumulator;
use crate::config::CalculatorConfig;
use crate::display::format_number;
use crate::key::InputKind;
use crate::memory::Memory;
use crate::mode::StateKind;
use crate::operation::{BinaryOp, MemoryOp, Operation, OperationError, PendingOperation, UnaryOp};

/// Text shown in the zero state
pub const ZERO_TEXT: &str = "0";

/// Active calculator state with the data it carries
#[derive(Debug, Clone, PartialEq)]
pub enum CalculatorState {
    Zero {
        pending: Option<PendingOperation>,
    },
    Accumulator {
        buffer: DigitAccumulator,
        pending: Option<PendingOperation>,
    },
    AccumulatorDecimal {
        buffer: DigitAccumulator,
        pending: Option<PendingOperation>,
    },
    Computed {
        value: f64,
        pending: Option<PendingOperation>,
        /// `value` came from a unary or recall key and is the second operand
        /// of `pending` rather than its seed
        operand: bool,
    },
    Error,
}

impl Default for CalculatorState {
    fn default() -> Self {
        CalculatorState::Zero { pending: None }
    }
}

/// How the display changes on a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayEffect {
    Unchanged,
    Set(String),
    Append(String),
    /// Drop the display and start a fresh one showing `0`
    Fresh,
}

/// What a key press did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// Key had no effect
    Ignored,
    /// State, display or memory changed
    Changed,
    /// Entered the error state
    Errored,
    /// Hard reset
    Reset,
}

/// Result of feeding one input to a state
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub next: CalculatorState,
    pub display: DisplayEffect,
    pub outcome: PressOutcome,
}

impl Transition {
    fn ignore(state: CalculatorState) -> Self {
        Self {
            next: state,
            display: DisplayEffect::Unchanged,
            outcome: PressOutcome::Ignored,
        }
    }

    fn to(next: CalculatorState, display: DisplayEffect) -> Self {
        Self {
            next,
            display,
            outcome: PressOutcome::Changed,
        }
    }

    fn error(config: &CalculatorConfig) -> Self {
        Self {
            next: CalculatorState::Error,
            display: DisplayEffect::Set(config.error_marker.clone()),
            outcome: PressOutcome::Errored,
        }
    }

    fn reset(memory: &mut Memory) -> Self {
        memory.clear();
        Self {
            next: CalculatorState::default(),
            display: DisplayEffect::Fresh,
            outcome: PressOutcome::Reset,
        }
    }

    fn cleared() -> Self {
        Self::to(
            CalculatorState::default(),
            DisplayEffect::Set(ZERO_TEXT.into()),
        )
    }
}

impl CalculatorState {
    pub fn kind(&self) -> StateKind {
        match self {
            CalculatorState::Zero { .. } => StateKind::Zero,
            CalculatorState::Accumulator { .. } => StateKind::Accumulator,
            CalculatorState::AccumulatorDecimal { .. } => StateKind::AccumulatorDecimal,
            CalculatorState::Computed { .. } => StateKind::Computed,
            CalculatorState::Error => StateKind::Error,
        }
    }

    /// Binary operation awaiting its second operand, if any
    pub fn pending(&self) -> Option<PendingOperation> {
        match self {
            CalculatorState::Zero { pending }
            | CalculatorState::Accumulator { pending, .. }
            | CalculatorState::AccumulatorDecimal { pending, .. }
            | CalculatorState::Computed { pending, .. } => *pending,
            CalculatorState::Error => None,
        }
    }

    /// Live digit buffer, only while accumulating
    pub fn accumulator(&self) -> Option<&DigitAccumulator> {
        match self {
            CalculatorState::Accumulator { buffer, .. }
            | CalculatorState::AccumulatorDecimal { buffer, .. } => Some(buffer),
            _ => None,
        }
    }

    /// Whether the computed value is the second operand of the pending
    /// operation, so the next operator or equals completes it
    pub fn holds_operand(&self) -> bool {
        matches!(self, CalculatorState::Computed { operand: true, .. })
    }

    /// Last computed value, only in the computed state
    pub fn value(&self) -> Option<f64> {
        match self {
            CalculatorState::Computed { value, .. } => Some(*value),
            _ => None,
        }
    }

    /// Feed one classified input to the state
    pub fn on_input(
        self,
        input: InputKind,
        memory: &mut Memory,
        config: &CalculatorConfig,
    ) -> Transition {
        match self {
            CalculatorState::Zero { pending } => on_zero(pending, input, memory, config),
            CalculatorState::Accumulator { buffer, pending } => {
                on_accumulator(buffer, pending, false, input, memory, config)
            }
            CalculatorState::AccumulatorDecimal { buffer, pending } => {
                on_accumulator(buffer, pending, true, input, memory, config)
            }
            CalculatorState::Computed {
                value,
                pending,
                operand,
            } => on_computed(value, pending, operand, input, memory, config),
            CalculatorState::Error => on_error(input),
        }
    }
}

fn on_zero(
    pending: Option<PendingOperation>,
    input: InputKind,
    memory: &mut Memory,
    config: &CalculatorConfig,
) -> Transition {
    match input {
        InputKind::Zero => Transition::ignore(CalculatorState::Zero { pending }),
        InputKind::NonZeroDigit(digit) => start_number(Some(digit), pending, config),
        InputKind::DecimalSeparator => start_number(None, pending, config),
        InputKind::BinaryOp(op) => compute(0.0, pending, Some(op), memory, config),
        InputKind::Equals => compute(0.0, pending, None, memory, config),
        InputKind::UnaryOp(op) => apply_unary(op, 0.0, pending, memory, config),
        InputKind::MemoryOp(op) => {
            apply_memory(op, 0.0, CalculatorState::Zero { pending }, memory, config)
        }
        InputKind::Clear => match pending {
            // Already at zero; clearing only drops the pending operation
            Some(_) => Transition::to(CalculatorState::default(), DisplayEffect::Unchanged),
            None => Transition::ignore(CalculatorState::default()),
        },
        InputKind::Reset => Transition::reset(memory),
        InputKind::Invalid(_) => Transition::error(config),
    }
}

fn on_accumulator(
    mut buffer: DigitAccumulator,
    pending: Option<PendingOperation>,
    decimal: bool,
    input: InputKind,
    memory: &mut Memory,
    config: &CalculatorConfig,
) -> Transition {
    match input {
        InputKind::Zero => {
            let pushed = buffer.push_zero(config);
            grow(buffer, pending, decimal, pushed, '0')
        }
        InputKind::NonZeroDigit(digit) => {
            let pushed = buffer.push_digit(digit, config);
            grow(buffer, pending, decimal, pushed, digit)
        }
        InputKind::DecimalSeparator => {
            // At most one separator per number
            if decimal || !buffer.push_separator(config) {
                return Transition::ignore(accumulating(buffer, pending, decimal));
            }
            grow(buffer, pending, true, true, config.decimal_separator)
        }
        InputKind::BinaryOp(op) => {
            let number = buffer.to_number(config.decimal_separator);
            compute(number, pending, Some(op), memory, config)
        }
        InputKind::Equals => {
            let number = buffer.to_number(config.decimal_separator);
            compute(number, pending, None, memory, config)
        }
        InputKind::UnaryOp(op) => {
            let number = buffer.to_number(config.decimal_separator);
            apply_unary(op, number, pending, memory, config)
        }
        InputKind::MemoryOp(op) => {
            let number = buffer.to_number(config.decimal_separator);
            let current = accumulating(buffer, pending, decimal);
            apply_memory(op, number, current, memory, config)
        }
        InputKind::Clear => Transition::cleared(),
        InputKind::Reset => Transition::reset(memory),
        InputKind::Invalid(_) => Transition::error(config),
    }
}

fn on_computed(
    value: f64,
    pending: Option<PendingOperation>,
    operand: bool,
    input: InputKind,
    memory: &mut Memory,
    config: &CalculatorConfig,
) -> Transition {
    match input {
        InputKind::Zero => Transition::to(
            CalculatorState::Zero { pending },
            DisplayEffect::Set(ZERO_TEXT.into()),
        ),
        InputKind::NonZeroDigit(digit) => start_number(Some(digit), pending, config),
        InputKind::DecimalSeparator => start_number(None, pending, config),
        InputKind::BinaryOp(op) if operand => compute(value, pending, Some(op), memory, config),
        InputKind::BinaryOp(op) => Transition::to(
            CalculatorState::Computed {
                value,
                pending: Some(PendingOperation::new(op, value)),
                operand: false,
            },
            DisplayEffect::Unchanged,
        ),
        InputKind::Equals if operand => compute(value, pending, None, memory, config),
        InputKind::Equals => {
            let next = CalculatorState::Computed {
                value,
                pending: None,
                operand: false,
            };
            match pending {
                Some(_) => Transition::to(next, DisplayEffect::Unchanged),
                None => Transition::ignore(next),
            }
        }
        InputKind::UnaryOp(op) => apply_unary(op, value, pending, memory, config),
        InputKind::MemoryOp(op) => apply_memory(
            op,
            value,
            CalculatorState::Computed {
                value,
                pending,
                operand,
            },
            memory,
            config,
        ),
        InputKind::Clear => Transition::cleared(),
        InputKind::Reset => Transition::reset(memory),
        InputKind::Invalid(_) => Transition::error(config),
    }
}

fn on_error(input: InputKind) -> Transition {
    match input {
        InputKind::Clear => Transition::cleared(),
        _ => Transition::ignore(CalculatorState::Error),
    }
}

fn accumulating(
    buffer: DigitAccumulator,
    pending: Option<PendingOperation>,
    decimal: bool,
) -> CalculatorState {
    if decimal {
        CalculatorState::AccumulatorDecimal { buffer, pending }
    } else {
        CalculatorState::Accumulator { buffer, pending }
    }
}

/// Buffer grew by `ch` (or stayed full); the display mirrors the buffer
fn grow(
    buffer: DigitAccumulator,
    pending: Option<PendingOperation>,
    decimal: bool,
    pushed: bool,
    ch: char,
) -> Transition {
    let next = accumulating(buffer, pending, decimal);
    if pushed {
        Transition::to(next, DisplayEffect::Append(ch.to_string()))
    } else {
        Transition::ignore(next)
    }
}

/// Begin a new buffer with a digit, or with `0` and the separator
fn start_number(
    digit: Option<char>,
    pending: Option<PendingOperation>,
    config: &CalculatorConfig,
) -> Transition {
    let mut buffer = DigitAccumulator::new();
    let decimal = match digit {
        Some(digit) => {
            buffer.push_digit(digit, config);
            false
        }
        None => {
            buffer.push_separator(config);
            true
        }
    };
    let text = buffer.as_str().to_string();
    Transition::to(
        accumulating(buffer, pending, decimal),
        DisplayEffect::Set(text),
    )
}

/// Complete any pending operation against `number` and optionally queue
/// `next` seeded with the result.
fn compute(
    number: f64,
    pending: Option<PendingOperation>,
    next: Option<BinaryOp>,
    memory: &mut Memory,
    config: &CalculatorConfig,
) -> Transition {
    let result = match pending {
        Some(pending) => match pending.complete(number, memory) {
            Ok(result) => result,
            Err(err) => return operand_fault(err, config),
        },
        None => number,
    };

    Transition::to(
        CalculatorState::Computed {
            value: result,
            pending: next.map(|op| PendingOperation::new(op, result)),
            operand: false,
        },
        DisplayEffect::Set(format_number(result, config.decimal_separator)),
    )
}

/// Unary operators act immediately; a pending binary operation survives and
/// takes the result as its second operand on the next operator or equals.
fn apply_unary(
    op: UnaryOp,
    number: f64,
    pending: Option<PendingOperation>,
    memory: &mut Memory,
    config: &CalculatorConfig,
) -> Transition {
    match Operation::Unary(op).compute(&[number], memory) {
        Ok(value) => Transition::to(
            CalculatorState::Computed {
                value,
                pending,
                operand: true,
            },
            DisplayEffect::Set(format_number(value, config.decimal_separator)),
        ),
        Err(err) => operand_fault(err, config),
    }
}

/// Store leaves the state as it is; recall shows the cell as a computed value
fn apply_memory(
    op: MemoryOp,
    number: f64,
    current: CalculatorState,
    memory: &mut Memory,
    config: &CalculatorConfig,
) -> Transition {
    let operation = Operation::Memory(op);
    match op {
        MemoryOp::Store => match operation.compute(&[number], memory) {
            Ok(_) => Transition::to(current, DisplayEffect::Unchanged),
            Err(err) => operand_fault(err, config),
        },
        MemoryOp::Recall => match operation.compute(&[], memory) {
            Ok(value) => Transition::to(
                CalculatorState::Computed {
                    value,
                    pending: current.pending(),
                    operand: true,
                },
                DisplayEffect::Set(format_number(value, config.decimal_separator)),
            ),
            Err(err) => operand_fault(err, config),
        },
    }
}

fn operand_fault(err: OperationError, config: &CalculatorConfig) -> Transition {
    warn!(error = %err, "operation rejected its operands");
    Transition::error(config)
}
