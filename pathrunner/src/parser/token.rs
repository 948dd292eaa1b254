use serde::Serialize;

/// One token of a lexed path-data stream.
///
/// The lexer tags every token as either a command letter or a number; it does
/// not check letters against the command table. That validation happens in
/// the runner, so unknown letters survive lexing and fail at run time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum PathToken {
    /// A single command letter (e.g. `M`, `l`, `A`), not yet validated.
    Letter(char),
    /// A numeric argument.
    Number(f64),
}

impl PathToken {
    pub fn as_letter(&self) -> Option<char> {
        match self {
            PathToken::Letter(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            PathToken::Number(n) => Some(*n),
            _ => None,
        }
    }
}
