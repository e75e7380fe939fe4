//! # Host Runtime
//!
//! Drives a calculator from scripted or line-based input and writes the
//! rendered display to an output sink.

use std::io::{self, BufRead, Write};

use calc_core::{Calculator, CalculatorSnapshot, ConfigError, PressOutcome};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::input_script::{InputScript, InputScriptError, ScriptedInput};
use crate::render::DisplayRenderer;
use crate::settings::{HostSettings, SettingsError};

/// Host runtime error types
#[derive(Debug, Error)]
pub enum HostRuntimeError {
    #[error("Script error: {0}")]
    Script(#[from] InputScriptError),

    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Trace serialization failed: {0}")]
    Trace(#[from] serde_json::Error),

    #[error("Expectation failed at line {line}: expected {expected:?}, display shows {actual:?}")]
    ExpectationFailed {
        line: usize,
        expected: String,
        actual: String,
    },
}

/// Host runtime configuration
#[derive(Debug, Clone, Default)]
pub struct HostRuntimeConfig {
    /// Optional input script text
    pub script: Option<String>,
    /// Optional raw key sequence, used when no script is given
    pub keys: Option<String>,
    pub settings: HostSettings,
    /// Emit a JSON snapshot after every key press
    pub trace: bool,
}

/// One line of trace output
#[derive(Debug, Serialize)]
struct TraceRecord<'a> {
    step: usize,
    key: char,
    outcome: &'a str,
    snapshot: CalculatorSnapshot,
}

/// Host runtime
pub struct HostRuntime {
    config: HostRuntimeConfig,
    calculator: Calculator,
    renderer: DisplayRenderer,
    /// Scripted input, if any
    script: Option<InputScript>,
    /// Key presses processed so far
    steps: usize,
}

impl HostRuntime {
    /// Creates a new host runtime
    pub fn new(config: HostRuntimeConfig) -> Result<Self, HostRuntimeError> {
        config.settings.validate()?;

        let calculator = Calculator::with_config(config.settings.calculator.clone())?;
        let renderer = DisplayRenderer::new(config.settings.display_width);

        let script = match (&config.script, &config.keys) {
            (Some(text), _) => Some(InputScript::from_text(text)?),
            (None, Some(keys)) => Some(InputScript::from_keys(keys)),
            (None, None) => None,
        };

        Ok(Self {
            config,
            calculator,
            renderer,
            script,
            steps: 0,
        })
    }

    /// Runs the scripted input to completion, then writes the final display
    ///
    /// Without a script this only writes the initial display.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<(), HostRuntimeError> {
        while let Some(input) = self.script.as_mut().and_then(InputScript::next_input) {
            self.step(input, out)?;
        }

        self.write_display(out)?;
        info!(steps = self.steps, "script finished");
        Ok(())
    }

    /// Reads key lines from `input`, writing the display after each line
    pub fn run_interactive<R: BufRead, W: Write>(
        &mut self,
        input: R,
        out: &mut W,
    ) -> Result<(), HostRuntimeError> {
        for line in input.lines() {
            let line = line?;
            for key in line.chars().filter(|c| !c.is_whitespace()) {
                self.press(key, out)?;
            }
            self.write_display(out)?;
        }

        info!(steps = self.steps, "input closed");
        Ok(())
    }

    /// Executes one scripted input
    pub fn step<W: Write>(
        &mut self,
        input: ScriptedInput,
        out: &mut W,
    ) -> Result<(), HostRuntimeError> {
        match input {
            ScriptedInput::Key(key) => {
                self.press(key, out)?;
            }
            ScriptedInput::Show => self.write_display(out)?,
            ScriptedInput::Expect { line, text } => {
                let actual = self.calculator.current_display_state();
                if actual != text {
                    return Err(HostRuntimeError::ExpectationFailed {
                        line,
                        expected: text,
                        actual: actual.to_string(),
                    });
                }
            }
            ScriptedInput::Reset => {
                debug!("hard reset");
                self.calculator.reset();
            }
        }

        Ok(())
    }

    fn press<W: Write>(
        &mut self,
        key: char,
        out: &mut W,
    ) -> Result<PressOutcome, HostRuntimeError> {
        let outcome = self.calculator.apply_key(key);
        self.steps += 1;

        if self.config.trace {
            let record = TraceRecord {
                step: self.steps,
                key,
                outcome: outcome_name(outcome),
                snapshot: self.calculator.snapshot(),
            };
            writeln!(out, "{}", serde_json::to_string(&record)?)?;
        }

        Ok(outcome)
    }

    fn write_display<W: Write>(&self, out: &mut W) -> Result<(), HostRuntimeError> {
        writeln!(out, "{}", self.renderer.render(&self.calculator))?;
        Ok(())
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn renderer(&self) -> &DisplayRenderer {
        &self.renderer
    }

    /// Returns the number of key presses processed
    pub fn step_count(&self) -> usize {
        self.steps
    }

    pub fn snapshot(&self) -> CalculatorSnapshot {
        self.calculator.snapshot()
    }
}

fn outcome_name(outcome: PressOutcome) -> &'static str {
    match outcome {
        PressOutcome::Ignored => "ignored",
        PressOutcome::Changed => "changed",
        PressOutcome::Errored => "errored",
        PressOutcome::Reset => "reset",
    }
}
