//! Display text and number rendering

/// The visible calculator text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Display {
    text: String,
}

impl Display {
    /// Empty display
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Replace the whole text
    pub fn set(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }

    pub fn append(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Render a computed number for the display.
///
/// Integral values carry no fractional part, `-0` shows as `0`, and the
/// IEEE-754 specials render as `Infinity`, `-Infinity` and `NaN`.
pub fn format_number(value: f64, separator: char) -> String {
    if value.is_nan() {
        return "NaN".into();
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        return text.into();
    }
    if value == 0.0 {
        return "0".into();
    }

    let text = format!("{}", value);
    if separator == '.' {
        text
    } else {
        text.replace('.', separator.encode_utf8(&mut [0; 4]))
    }
}
