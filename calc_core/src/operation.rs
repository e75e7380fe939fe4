//! Operation registry
//!
//! A closed set of operations dispatched by pattern matching. Every compute
//! call checks its operand count and reports a violation as a value.

use thiserror::Error;

use crate::memory::Memory;

/// Operation errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OperationError {
    #[error("Invalid operand count for {operation}: expected {expected}, got {actual}")]
    InvalidOperandCount {
        operation: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Two-operand arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 4] = [
        BinaryOp::Add,
        BinaryOp::Subtract,
        BinaryOp::Multiply,
        BinaryOp::Divide,
    ];

    /// Division by zero is not guarded; IEEE-754 infinities and NaN flow out.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            BinaryOp::Add => a + b,
            BinaryOp::Subtract => a - b,
            BinaryOp::Multiply => a * b,
            BinaryOp::Divide => a / b,
        }
    }
}

/// One-operand functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Negate,
    /// Radians
    Sin,
    /// Radians
    Cos,
    /// Radians
    Tan,
    Square,
    Sqrt,
    Reciprocal,
}

impl UnaryOp {
    pub const ALL: [UnaryOp; 7] = [
        UnaryOp::Negate,
        UnaryOp::Sin,
        UnaryOp::Cos,
        UnaryOp::Tan,
        UnaryOp::Square,
        UnaryOp::Sqrt,
        UnaryOp::Reciprocal,
    ];

    pub fn apply(self, a: f64) -> f64 {
        match self {
            UnaryOp::Negate => -a,
            UnaryOp::Sin => a.sin(),
            UnaryOp::Cos => a.cos(),
            UnaryOp::Tan => a.tan(),
            UnaryOp::Square => a * a,
            UnaryOp::Sqrt => a.sqrt(),
            UnaryOp::Reciprocal => 1.0 / a,
        }
    }
}

/// Memory cell access
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoryOp {
    Store,
    Recall,
}

impl MemoryOp {
    pub const ALL: [MemoryOp; 2] = [MemoryOp::Store, MemoryOp::Recall];
}

/// Any operation a key can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Binary(BinaryOp),
    Unary(UnaryOp),
    Memory(MemoryOp),
}

impl Operation {
    /// Number of operands `compute` expects
    pub fn arity(&self) -> usize {
        match self {
            Operation::Binary(_) => 2,
            Operation::Unary(_) => 1,
            Operation::Memory(MemoryOp::Store) => 1,
            Operation::Memory(MemoryOp::Recall) => 0,
        }
    }

    /// Display keyword under the default key layout
    pub fn keyword(&self) -> char {
        match self {
            Operation::Binary(BinaryOp::Add) => '+',
            Operation::Binary(BinaryOp::Subtract) => '-',
            Operation::Binary(BinaryOp::Multiply) => '*',
            Operation::Binary(BinaryOp::Divide) => '/',
            Operation::Unary(UnaryOp::Negate) => 'M',
            Operation::Unary(UnaryOp::Sin) => 'S',
            Operation::Unary(UnaryOp::Cos) => 'K',
            Operation::Unary(UnaryOp::Tan) => 'T',
            Operation::Unary(UnaryOp::Square) => 'Q',
            Operation::Unary(UnaryOp::Sqrt) => 'R',
            Operation::Unary(UnaryOp::Reciprocal) => 'I',
            Operation::Memory(MemoryOp::Store) => 'P',
            Operation::Memory(MemoryOp::Recall) => 'G',
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Binary(BinaryOp::Add) => "add",
            Operation::Binary(BinaryOp::Subtract) => "subtract",
            Operation::Binary(BinaryOp::Multiply) => "multiply",
            Operation::Binary(BinaryOp::Divide) => "divide",
            Operation::Unary(UnaryOp::Negate) => "negate",
            Operation::Unary(UnaryOp::Sin) => "sin",
            Operation::Unary(UnaryOp::Cos) => "cos",
            Operation::Unary(UnaryOp::Tan) => "tan",
            Operation::Unary(UnaryOp::Square) => "square",
            Operation::Unary(UnaryOp::Sqrt) => "sqrt",
            Operation::Unary(UnaryOp::Reciprocal) => "reciprocal",
            Operation::Memory(MemoryOp::Store) => "store",
            Operation::Memory(MemoryOp::Recall) => "recall",
        }
    }

    /// Run the operation over `operands`.
    ///
    /// Only memory operations touch `memory`: store overwrites the cell and
    /// returns its operand, recall returns the cell.
    pub fn compute(&self, operands: &[f64], memory: &mut Memory) -> Result<f64, OperationError> {
        match (self, operands) {
            (Operation::Binary(op), &[a, b]) => Ok(op.apply(a, b)),
            (Operation::Unary(op), &[a]) => Ok(op.apply(a)),
            (Operation::Memory(MemoryOp::Store), &[a]) => {
                memory.store(a);
                Ok(a)
            }
            (Operation::Memory(MemoryOp::Recall), &[]) => Ok(memory.recall()),
            _ => Err(OperationError::InvalidOperandCount {
                operation: self.name(),
                expected: self.arity(),
                actual: operands.len(),
            }),
        }
    }
}

/// A binary operator waiting for its second operand
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingOperation {
    pub op: BinaryOp,
    pub first_operand: f64,
}

impl PendingOperation {
    /// Seed a new pending operation; chaining seeds it with the previous result.
    pub fn new(op: BinaryOp, first_operand: f64) -> Self {
        Self { op, first_operand }
    }

    /// Complete with the second operand
    pub fn complete(
        &self,
        second_operand: f64,
        memory: &mut Memory,
    ) -> Result<f64, OperationError> {
        Operation::Binary(self.op).compute(&[self.first_operand, second_operand], memory)
    }
}
