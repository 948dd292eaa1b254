//! PathRunner - streaming SVG path command interpreter
//!
//! This library decodes SVG path data into validated drawing instructions:
//! tokens are classified as command letters or numbers, argument counts are
//! checked against a per-command arity table, and each command-letter run is
//! dispatched to a caller-supplied sink with its relative/absolute flag and
//! flattened argument list.
//!
//! # Quick Start
//!
//! ```
//! use pathrunner::PathCore;
//!
//! let trace = PathCore::interpret_path_data("M10 20 L30,40 Z").unwrap();
//!
//! for cmd in &trace.commands {
//!     println!("{} relative={} args={:?}", cmd.letter, cmd.relative, cmd.args);
//! }
//! ```
//!
//! # Features
//!
//! - **Streaming dispatch**: one synchronous sink call per command-letter run
//! - **Arity validation**: repeated argument groups checked per command
//! - **Lexer included**: raw path-data text to tokens, or bring your own
//!
//! Geometry evaluation (curve flattening, arc conversion) is deliberately out
//! of scope; consumers interpret the dispatched arguments themselves.

pub mod core;
pub mod parser;
pub mod runner;

// Re-export main types
pub use crate::core::{
    CollectSink, DispatchedCommand, PathCore, PathError, PathStats, PathTrace,
};
pub use crate::parser::{LexError, PathLexer, PathToken};
pub use crate::runner::{
    lookup, supported_commands, CommandSink, FnSink, PathCommand, PathRunner, RunError,
};

/// Interpret raw path data into a buffered trace (convenience wrapper).
pub fn interpret_path_data(text: &str) -> Result<PathTrace, PathError> {
    PathCore::interpret_path_data(text)
}

/// Lex raw path data into tokens (convenience wrapper).
pub fn tokenize_path_data(text: &str) -> Result<Vec<PathToken>, LexError> {
    PathLexer::new(text).tokenize()
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        CommandSink, DispatchedCommand, PathCommand, PathCore, PathError, PathRunner, PathToken,
        PathTrace, RunError,
    };
}
