//! # Calculator Core
//!
//! Keystroke-driven calculator logic, independent of any host.
//!
//! ## Philosophy
//!
//! - **Deterministic**: Same key trace => same calculator state
//! - **Sequential**: One operation at a time, no precedence or expressions
//! - **Mechanism over policy**: Core produces display text, hosts decide rendering
//! - **No shared state**: Every calculator owns its memory cell
//!
//! ## Design
//!
//! The core provides:
//! - Calculator: Facade owning the active state, memory and display
//! - CalculatorState: Five-state machine (Zero, Accumulator,
//!   AccumulatorDecimal, Computed, Error) with a single transition function
//! - Operation: Closed set of binary, unary and memory operations
//! - CalculatorSnapshot: Deterministic state for parity testing
//! - CalculatorConfig: Injectable separator, error marker, length cap and keys

pub mod accumulator;
pub mod config;
pub mod calculator;
pub mod display;
pub mod key;
pub mod memory;
pub mod mode;
pub mod operation;
pub mod snapshot;
pub mod state;

pub use accumulator::DigitAccumulator;
pub use config::{CalculatorConfig, ConfigError, KeyMap};
pub use calculator::Calculator;
pub use display::{format_number, Display};
pub use key::InputKind;
pub use memory::Memory;
pub use mode::StateKind;
pub use operation::{BinaryOp, MemoryOp, Operation, OperationError, PendingOperation, UnaryOp};
pub use snapshot::{CalculatorSnapshot, PendingSnapshot};
pub use state::{CalculatorState, DisplayEffect, PressOutcome, Transition};
