pub mod lexer;
pub mod token;

// Re-export for convenience
pub use lexer::{LexError, PathLexer};
pub use token::PathToken;
