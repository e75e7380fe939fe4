//! Single-slot memory cell
//!
//! Each calculator owns its own cell; nothing is shared between instances.

/// Memory cell holding one number
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Memory {
    value: f64,
}

impl Memory {
    pub const fn new() -> Self {
        Self { value: 0.0 }
    }

    /// Overwrite the stored value
    pub fn store(&mut self, value: f64) {
        self.value = value;
    }

    pub fn recall(&self) -> f64 {
        self.value
    }

    /// Back to 0.0
    pub fn clear(&mut self) {
        self.value = 0.0;
    }
}
