//! End-to-end tests: raw path-data text through the lexer and runner.

use pathrunner::{interpret_path_data, tokenize_path_data, PathError, RunError};

#[test]
fn test_interpret_real_world_path() {
    // Icon-style path with run-together signs and mixed separators
    let trace =
        interpret_path_data("M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2z")
            .unwrap();

    let letters: Vec<char> = trace.commands.iter().map(|c| c.letter).collect();
    assert_eq!(letters, vec!['M', 'C', 's', 'S', 'z']);

    // The 's' run carries two folded groups of four
    assert_eq!(trace.commands[2].args.len(), 8);
    assert_eq!(trace.stats.arguments, 2 + 6 + 8 + 4);
}

#[test]
fn test_interpret_arc_path() {
    let trace = interpret_path_data("M0 0 A25,25 -30 0,1 50,-25").unwrap();
    assert_eq!(trace.commands[1].letter, 'A');
    assert_eq!(
        trace.commands[1].args,
        vec![25.0, 25.0, -30.0, 0.0, 1.0, 50.0, -25.0]
    );
}

#[test]
fn test_interpret_whitespace_only() {
    let trace = interpret_path_data("   \n\t  ").unwrap();
    assert!(trace.commands.is_empty());
}

#[test]
fn test_interpret_unknown_command_letter() {
    let err = interpret_path_data("M 1 2 X 3").unwrap_err();
    assert!(matches!(
        err,
        PathError::Run(RunError::UnknownCommand { letter: 'X' })
    ));
}

#[test]
fn test_interpret_leading_numbers() {
    let err = interpret_path_data("10 20 M 1 2").unwrap_err();
    assert!(matches!(
        err,
        PathError::Run(RunError::LeadingArguments { .. })
    ));
}

#[test]
fn test_interpret_close_with_argument() {
    let err = interpret_path_data("M 1 2 Z 5").unwrap_err();
    assert!(matches!(
        err,
        PathError::Run(RunError::ArgumentCountMismatch {
            letter: 'Z',
            expected: 0,
            got: 1,
        })
    ));
}

#[test]
fn test_tokenize_matches_interpret_input() {
    let tokens = tokenize_path_data("M1.5-2.5").unwrap();
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].as_letter(), Some('M'));
    assert_eq!(tokens[1].as_number(), Some(1.5));
    assert_eq!(tokens[2].as_number(), Some(-2.5));
}

#[test]
fn test_interpret_json_shape() {
    let trace = interpret_path_data("m1,2").unwrap();
    let json = serde_json::to_value(&trace).unwrap();
    assert_eq!(json["stats"]["commands"], 1);
    assert_eq!(json["stats"]["relative_commands"], 1);
    assert_eq!(json["commands"][0]["relative"], true);
}
