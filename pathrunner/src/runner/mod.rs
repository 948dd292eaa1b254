pub mod command;
pub mod dispatch;

// Re-export for convenience
pub use command::{lookup, supported_commands, PathCommand};
pub use dispatch::{CommandSink, FnSink, PathRunner, RunError};
