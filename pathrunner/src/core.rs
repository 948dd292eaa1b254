//! High-level path interpretation shared by library callers and the CLI.
//! Glues the lexer to the runner; no knowledge of rendering or geometry.

use serde::Serialize;

use crate::parser::{LexError, PathLexer};
use crate::runner::{CommandSink, PathRunner, RunError};

#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("Lex error: {0}")]
    Lex(#[from] LexError),
    #[error("Run error: {0}")]
    Run(#[from] RunError),
}

/// One dispatched command with its flattened argument run.
///
/// `args` holds every number accumulated for the letter, so a repeated group
/// (`L 1 2 3 4`) arrives as one command with four arguments. Consumers that
/// need per-group processing chunk by the letter's arity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DispatchedCommand {
    pub letter: char,
    pub relative: bool,
    pub args: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PathStats {
    pub commands: usize,
    pub relative_commands: usize,
    pub arguments: usize,
}

/// Buffered result of a full interpretation run.
#[derive(Debug, Clone, Serialize)]
pub struct PathTrace {
    pub commands: Vec<DispatchedCommand>,
    pub stats: PathStats,
}

/// Sink that buffers every dispatch.
///
/// The runner keeps partial dispatches on failure, so callers that want an
/// all-or-nothing view collect into this and only read the trace on success.
#[derive(Debug, Default)]
pub struct CollectSink {
    commands: Vec<DispatchedCommand>,
}

impl CollectSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DispatchedCommand] {
        &self.commands
    }

    pub fn into_trace(self) -> PathTrace {
        let stats = PathStats {
            commands: self.commands.len(),
            relative_commands: self.commands.iter().filter(|c| c.relative).count(),
            arguments: self.commands.iter().map(|c| c.args.len()).sum(),
        };
        PathTrace {
            commands: self.commands,
            stats,
        }
    }
}

impl CommandSink for CollectSink {
    fn command(&mut self, letter: char, relative: bool, args: &[f64]) {
        self.commands.push(DispatchedCommand {
            letter,
            relative,
            args: args.to_vec(),
        });
    }
}

/// High-level interpretation API over raw path-data text.
pub struct PathCore;

impl PathCore {
    /// Lex `text` and stream each validated command into `sink`.
    /// Returns the number of dispatches on success.
    pub fn run_path_data<S: CommandSink>(text: &str, sink: &mut S) -> Result<usize, PathError> {
        let tokens = PathLexer::new(text).tokenize()?;
        Ok(PathRunner::run(&tokens, sink)?)
    }

    /// Lex and run `text`, buffering all dispatches into a trace.
    /// Nothing is returned unless the whole path validates.
    pub fn interpret_path_data(text: &str) -> Result<PathTrace, PathError> {
        let mut sink = CollectSink::new();
        Self::run_path_data(text, &mut sink)?;
        Ok(sink.into_trace())
    }
}
