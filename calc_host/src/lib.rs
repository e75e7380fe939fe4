//! # keycalc Host
//!
//! Host side of the keystroke calculator.
//!
//! ## Philosophy
//!
//! - **Host owns I/O**: The core never prints
//! - **Output is display rendering**: One framed line per update
//! - **Deterministic mode is first-class**: Scripts drive tests and demos
//!
//! ## Responsibilities
//!
//! The host:
//! - Loads versioned settings and builds a calculator from them
//! - Feeds keys from a script, a key string, or line-based input
//! - Renders the display at a fixed width
//! - Optionally traces every key press as a JSON snapshot

pub mod input_script;
pub mod render;
pub mod runtime;
pub mod settings;

pub use input_script::{InputScript, InputScriptError, ScriptedInput};
pub use render::DisplayRenderer;
pub use runtime::{HostRuntime, HostRuntimeConfig, HostRuntimeError};
pub use settings::{HostSettings, SettingsError, DEFAULT_DISPLAY_WIDTH};
