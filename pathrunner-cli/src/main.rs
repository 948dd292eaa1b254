//! PathRunner CLI - inspect and validate SVG path data from the command line.

use clap::{Parser, Subcommand, ValueEnum};
use pathrunner::{supported_commands, PathCore, PathTrace};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "pathrunner")]
#[command(about = "SVG path data inspection and validation tool", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate path data; exit nonzero if it is malformed
    Check {
        /// Path data string, or omit when using --file
        #[arg(value_name = "PATHDATA", required_unless_present = "file")]
        data: Option<String>,

        /// Read path data from a file instead
        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Interpret path data and print every dispatched command
    Dump {
        /// Path data string, or omit when using --file
        #[arg(value_name = "PATHDATA", required_unless_present = "file")]
        data: Option<String>,

        /// Read path data from a file instead
        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// List the supported path commands and their arities
    Commands {
        /// Show relative variants as separate rows
        #[arg(short, long)]
        verbose: bool,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output for tooling
    Json,
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Check { data, file } => handle_check(data, file),
        Commands::Dump { data, file, format } => handle_dump(data, file, format),
        Commands::Commands { verbose } => {
            handle_commands(verbose);
            0
        }
    };

    process::exit(exit_code);
}

fn read_input(data: Option<String>, file: Option<PathBuf>) -> Result<String, String> {
    match (data, file) {
        (Some(data), None) => Ok(data),
        (None, Some(path)) => std::fs::read_to_string(&path)
            .map(|s| s.trim().to_string())
            .map_err(|e| format!("cannot read {}: {}", path.display(), e)),
        (Some(_), Some(_)) => Err("give either PATHDATA or --file, not both".to_string()),
        (None, None) => Err("no path data given".to_string()),
    }
}

fn handle_check(data: Option<String>, file: Option<PathBuf>) -> i32 {
    let input = match read_input(data, file) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 2;
        }
    };

    match PathCore::interpret_path_data(&input) {
        Ok(trace) => {
            println!(
                "OK: {} commands, {} arguments",
                trace.stats.commands, trace.stats.arguments
            );
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn handle_dump(data: Option<String>, file: Option<PathBuf>, format: OutputFormat) -> i32 {
    let input = match read_input(data, file) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 2;
        }
    };

    match PathCore::interpret_path_data(&input) {
        Ok(trace) => {
            output_trace(&trace, &format);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn output_trace(trace: &PathTrace, format: &OutputFormat) {
    match format {
        OutputFormat::Human => {
            println!(
                "Commands: {} ({} relative), arguments: {}",
                trace.stats.commands, trace.stats.relative_commands, trace.stats.arguments
            );
            for cmd in &trace.commands {
                let mode = if cmd.relative { "rel" } else { "abs" };
                println!("  {} [{}] {:?}", cmd.letter, mode, cmd.args);
            }
        }
        OutputFormat::Json => match serde_json::to_string_pretty(trace) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error: {}", e),
        },
    }
}

fn handle_commands(verbose: bool) {
    println!("Supported path commands:");
    for cmd in supported_commands() {
        if cmd.relative && !verbose {
            continue;
        }
        let mode = if cmd.relative { "relative" } else { "absolute" };
        println!(
            "  {}  {}  args per group: {}",
            cmd.letter, mode, cmd.arg_count
        );
    }
    if !verbose {
        println!("\nLowercase variants take the same arguments relative to the current point.");
    }
}
