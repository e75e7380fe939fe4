//! Display rendering
//!
//! The core hands out display text verbatim; fitting it to a fixed-width
//! screen is done here. Overlong text keeps its rightmost characters.

use calc_core::Calculator;

/// Fixed-width display renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayRenderer {
    width: usize,
}

impl DisplayRenderer {
    pub fn new(width: usize) -> Self {
        Self { width: width.max(1) }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Keep the last `width` characters of `text`
    pub fn fit(&self, text: &str) -> String {
        let len = text.chars().count();
        if len <= self.width {
            return text.to_string();
        }
        text.chars().skip(len - self.width).collect()
    }

    /// Render the display right-aligned in a frame, followed by the pending
    /// operator and a memory indicator when they apply
    pub fn render(&self, calc: &Calculator) -> String {
        let snapshot = calc.snapshot();
        let mut output = format!(
            "[{:>width$}]",
            self.fit(&snapshot.display),
            width = self.width
        );

        if let Some(pending) = snapshot.pending {
            output.push(' ');
            output.push(pending.operator);
        }
        if snapshot.memory != 0.0 {
            output.push_str(" M");
        }

        output
    }
}
