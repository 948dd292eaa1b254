//! The streaming runner: token classification, arity validation, dispatch.

use thiserror::Error;

use super::command::{self, PathCommand};
use crate::parser::token::PathToken;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RunError {
    #[error("Unknown path command '{letter}'")]
    UnknownCommand { letter: char },
    #[error("Command '{letter}' takes argument groups of {expected}, got {got}")]
    ArgumentCountMismatch {
        letter: char,
        expected: usize,
        got: usize,
    },
    #[error("Number {value} appears before any command letter")]
    LeadingArguments { value: f64 },
}

/// Receives validated command dispatches.
///
/// Dispatches arrive synchronously on the calling thread, in stream order,
/// once per command-letter run with the full flattened argument list. Any
/// per-session context the caller wants correlated with the dispatches lives
/// in the sink value itself.
pub trait CommandSink {
    fn command(&mut self, letter: char, relative: bool, args: &[f64]);
}

/// Adapter so a plain closure can serve as a sink.
pub struct FnSink<F>(pub F);

impl<F: FnMut(char, bool, &[f64])> CommandSink for FnSink<F> {
    fn command(&mut self, letter: char, relative: bool, args: &[f64]) {
        (self.0)(letter, relative, args)
    }
}

/// Single-pass interpreter for a lexed path token stream.
///
/// Holds no state between runs; the only process-wide state is the immutable
/// command table.
pub struct PathRunner;

impl PathRunner {
    /// Run the token stream, dispatching each validated command-letter run
    /// into `sink`. Returns the number of dispatches on success.
    ///
    /// A failure aborts the run immediately. Dispatches made before the
    /// failure point stand; there is no rollback, so callers that need an
    /// all-or-nothing view should buffer (see `CollectSink`).
    pub fn run<S: CommandSink>(tokens: &[PathToken], sink: &mut S) -> Result<usize, RunError> {
        let mut current: Option<PathCommand> = None;
        let mut args: Vec<f64> = Vec::new();
        let mut dispatched = 0;

        for token in tokens {
            match *token {
                PathToken::Letter(letter) => {
                    // Unknown letters fail before the pending command is
                    // flushed, matching one dispatch per valid run only
                    let next = match command::lookup(letter) {
                        Some(cmd) => cmd,
                        None => {
                            tracing::debug!("unknown path command '{}'", letter);
                            return Err(RunError::UnknownCommand { letter });
                        }
                    };

                    if let Some(cmd) = current {
                        Self::flush(&cmd, &args, sink)?;
                        dispatched += 1;
                    }

                    args.clear();
                    current = Some(next);
                }
                PathToken::Number(value) => {
                    if current.is_none() {
                        tracing::debug!("number {} before any command letter", value);
                        return Err(RunError::LeadingArguments { value });
                    }
                    args.push(value);
                }
            }
        }

        if let Some(cmd) = current {
            Self::flush(&cmd, &args, sink)?;
            dispatched += 1;
        }

        Ok(dispatched)
    }

    fn flush<S: CommandSink>(
        cmd: &PathCommand,
        args: &[f64],
        sink: &mut S,
    ) -> Result<(), RunError> {
        let valid = if cmd.arg_count == 0 {
            args.is_empty()
        } else {
            args.len() % cmd.arg_count == 0
        };

        if !valid {
            tracing::debug!(
                "command '{}' got {} arguments, expected a multiple of {}",
                cmd.letter,
                args.len(),
                cmd.arg_count
            );
            return Err(RunError::ArgumentCountMismatch {
                letter: cmd.letter,
                expected: cmd.arg_count,
                got: args.len(),
            });
        }

        sink.command(cmd.letter, cmd.relative, args);
        Ok(())
    }
}
