//! Dump example: interpret path data from the command line and print each
//! dispatched command.

use pathrunner::prelude::*;

fn main() -> Result<(), PathError> {
    let data = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "M10 20 L30,40 l5,5 Z".to_string());

    let trace = PathCore::interpret_path_data(&data)?;

    println!("Path: {}", data);
    println!(
        "Commands: {} ({} relative), arguments: {}",
        trace.stats.commands, trace.stats.relative_commands, trace.stats.arguments
    );
    println!();

    for cmd in &trace.commands {
        let mode = if cmd.relative { "rel" } else { "abs" };
        println!("  {} [{}] {:?}", cmd.letter, mode, cmd.args);
    }

    Ok(())
}
