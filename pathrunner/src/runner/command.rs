//! Command descriptors and the process-wide command table.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Serialize;

/// Descriptor for one SVG path command letter.
///
/// `arg_count` is the size of one argument group: a letter may be followed by
/// any whole number of groups, so the total argument count must be a multiple
/// of it. Lowercase letters are the relative variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PathCommand {
    pub letter: char,
    pub relative: bool,
    pub arg_count: usize,
}

/// Uppercase letter and group arity for every supported command. The
/// lowercase relative variant of each is derived when the table is built.
const COMMAND_ARITIES: &[(char, usize)] = &[
    ('M', 2), // move-to
    ('L', 2), // line-to
    ('H', 1), // horizontal line-to
    ('V', 1), // vertical line-to
    ('C', 6), // cubic bezier
    ('S', 4), // smooth cubic bezier
    ('Q', 4), // quadratic bezier
    ('T', 2), // smooth quadratic bezier
    ('A', 7), // elliptical arc
    ('Z', 0), // close path
];

static PATH_COMMANDS: OnceLock<HashMap<char, PathCommand>> = OnceLock::new();

fn build_table() -> HashMap<char, PathCommand> {
    let mut table = HashMap::with_capacity(COMMAND_ARITIES.len() * 2);
    for &(upper, arg_count) in COMMAND_ARITIES {
        table.insert(
            upper,
            PathCommand {
                letter: upper,
                relative: false,
                arg_count,
            },
        );
        let lower = upper.to_ascii_lowercase();
        table.insert(
            lower,
            PathCommand {
                letter: lower,
                relative: true,
                arg_count,
            },
        );
    }
    table
}

/// Look up the descriptor for a command letter.
///
/// The table is built on first use and immutable afterward; lookups after
/// initialization are lock-free.
pub fn lookup(letter: char) -> Option<PathCommand> {
    PATH_COMMANDS.get_or_init(build_table).get(&letter).copied()
}

/// Every supported descriptor, absolute form before its relative variant.
pub fn supported_commands() -> Vec<PathCommand> {
    let table = PATH_COMMANDS.get_or_init(build_table);
    let mut commands = Vec::with_capacity(table.len());
    for &(upper, _) in COMMAND_ARITIES {
        commands.push(table[&upper]);
        commands.push(table[&upper.to_ascii_lowercase()]);
    }
    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_absolute() {
        let cmd = lookup('M').unwrap();
        assert_eq!(cmd.letter, 'M');
        assert!(!cmd.relative);
        assert_eq!(cmd.arg_count, 2);
    }

    #[test]
    fn test_lookup_relative() {
        let cmd = lookup('a').unwrap();
        assert_eq!(cmd.letter, 'a');
        assert!(cmd.relative);
        assert_eq!(cmd.arg_count, 7);
    }

    #[test]
    fn test_lookup_unknown() {
        assert!(lookup('X').is_none());
        assert!(lookup('0').is_none());
    }

    #[test]
    fn test_arities() {
        let expected = [
            ('M', 2),
            ('L', 2),
            ('H', 1),
            ('V', 1),
            ('C', 6),
            ('S', 4),
            ('Q', 4),
            ('T', 2),
            ('A', 7),
            ('Z', 0),
        ];
        for (letter, arity) in expected {
            assert_eq!(lookup(letter).unwrap().arg_count, arity);
            assert_eq!(
                lookup(letter.to_ascii_lowercase()).unwrap().arg_count,
                arity
            );
        }
    }

    #[test]
    fn test_table_idempotent() {
        // Lazy init is a no-op the second time around
        let first = supported_commands();
        let second = supported_commands();
        assert_eq!(first, second);
        assert_eq!(first.len(), 20);
    }
}
