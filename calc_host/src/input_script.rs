//! # Input Script Parser
//!
//! Provides a simple scripted input format for deterministic testing and demos.
//!
//! ## Format
//!
//! Scripts are line-based, with each line representing one input action:
//! - Single keys: `5`, `+`, `,`, `=`
//! - Key strings: `"12,5*4="` (expanded to individual key presses)
//! - `show`: emit the rendered display
//! - `expect <text>`: fail unless the display shows `<text>` (quotes optional)
//! - `reset`: hard reset of the calculator
//! - Comments: `# This is a comment`
//!
//! ## Example
//!
//! ```text
//! # Chain two additions
//! "5+3+"
//! expect 8
//! 2
//! =
//! show
//! ```

use std::collections::VecDeque;
use thiserror::Error;

/// Input script error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputScriptError {
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("Empty script")]
    EmptyScript,
}

/// A single scripted input action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedInput {
    /// A single key press
    Key(char),
    /// Emit the current display
    Show,
    /// Check the current display
    Expect { line: usize, text: String },
    /// Hard reset
    Reset,
}

/// Input script
///
/// Parses and provides scripted input events for deterministic testing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputScript {
    inputs: VecDeque<ScriptedInput>,
}

impl InputScript {
    /// Script that presses every non-whitespace character of `keys`
    pub fn from_keys(keys: &str) -> Self {
        Self {
            inputs: keys
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(ScriptedInput::Key)
                .collect(),
        }
    }

    /// Parses a script from text
    pub fn from_text(text: &str) -> Result<Self, InputScriptError> {
        let mut inputs = VecDeque::new();

        for (line_num, line) in text.lines().enumerate() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            inputs.extend(Self::parse_line(line, line_num + 1)?);
        }

        if inputs.is_empty() {
            return Err(InputScriptError::EmptyScript);
        }

        Ok(Self { inputs })
    }

    /// Parses a single line of script
    fn parse_line(line: &str, line_num: usize) -> Result<Vec<ScriptedInput>, InputScriptError> {
        if let Some(text) = Self::unquote(line) {
            return Ok(text.chars().map(ScriptedInput::Key).collect());
        }

        match line {
            "show" => return Ok(vec![ScriptedInput::Show]),
            "reset" => return Ok(vec![ScriptedInput::Reset]),
            _ => {}
        }

        if let Some(rest) = line.strip_prefix("expect ") {
            let rest = rest.trim();
            let text = Self::unquote(rest).unwrap_or(rest);
            return Ok(vec![ScriptedInput::Expect {
                line: line_num,
                text: text.to_string(),
            }]);
        }

        let mut chars = line.chars();
        match (chars.next(), chars.next()) {
            (Some(key), None) => Ok(vec![ScriptedInput::Key(key)]),
            _ => Err(InputScriptError::ParseError {
                line: line_num,
                message: format!("Unknown directive: {}", line),
            }),
        }
    }

    fn unquote(text: &str) -> Option<&str> {
        text.strip_prefix('"')?.strip_suffix('"')
    }

    /// Returns the next input event, if any
    pub fn next_input(&mut self) -> Option<ScriptedInput> {
        self.inputs.pop_front()
    }

    /// Returns true if the script has more inputs
    pub fn has_more(&self) -> bool {
        !self.inputs.is_empty()
    }

    /// Returns the number of remaining inputs
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_key() {
        let mut script = InputScript::from_text("5").unwrap();
        assert_eq!(script.remaining(), 1);
        assert_eq!(script.next_input().unwrap(), ScriptedInput::Key('5'));
        assert!(!script.has_more());
    }

    #[test]
    fn test_parse_quoted_string() {
        let mut script = InputScript::from_text(r#""1+2=""#).unwrap();
        assert_eq!(script.remaining(), 4);
        assert_eq!(script.next_input().unwrap(), ScriptedInput::Key('1'));
        assert_eq!(script.next_input().unwrap(), ScriptedInput::Key('+'));
    }

    #[test]
    fn test_parse_directives() {
        let mut script = InputScript::from_text("show\nreset\nexpect 0,5\nexpect \"-E-\"").unwrap();
        assert_eq!(script.next_input().unwrap(), ScriptedInput::Show);
        assert_eq!(script.next_input().unwrap(), ScriptedInput::Reset);
        assert_eq!(
            script.next_input().unwrap(),
            ScriptedInput::Expect {
                line: 3,
                text: "0,5".into()
            }
        );
        assert_eq!(
            script.next_input().unwrap(),
            ScriptedInput::Expect {
                line: 4,
                text: "-E-".into()
            }
        );
    }

    #[test]
    fn test_parse_comments_and_blank_lines() {
        let script = InputScript::from_text("# Comment\n5\n\n# Another comment\n+").unwrap();
        assert_eq!(script.remaining(), 2);
    }

    #[test]
    fn test_empty_script_error() {
        assert_eq!(InputScript::from_text(""), Err(InputScriptError::EmptyScript));
        assert_eq!(
            InputScript::from_text("# Just comments\n# Nothing else"),
            Err(InputScriptError::EmptyScript)
        );
    }

    #[test]
    fn test_unknown_directive() {
        let result = InputScript::from_text("5\nadd 3");
        assert_eq!(
            result,
            Err(InputScriptError::ParseError {
                line: 2,
                message: "Unknown directive: add 3".into()
            })
        );
    }

    #[test]
    fn test_from_keys() {
        let mut script = InputScript::from_keys("9R");
        assert_eq!(script.remaining(), 2);
        assert_eq!(script.next_input().unwrap(), ScriptedInput::Key('9'));
        assert_eq!(script.next_input().unwrap(), ScriptedInput::Key('R'));
    }

    #[test]
    fn test_from_keys_skips_whitespace() {
        let mut script = InputScript::from_keys(" 5 +\t3 = ");
        assert_eq!(script.remaining(), 4);
        assert_eq!(script.next_input().unwrap(), ScriptedInput::Key('5'));
        assert_eq!(script.next_input().unwrap(), ScriptedInput::Key('+'));
    }
}
