mod repl;
mod runner;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Emit {
    /// Evaluate the program and write `KEY = value` lines
    Toml,
    /// Dump the token stream
    Tokens,
    /// Re-render the parsed program
    Ast,
}

/// Translates a configuration file into flat TOML
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Configuration file to translate. Starts an interactive session when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Destination file. Defaults to stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value_t=Emit::Toml)]
    emit: Emit,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.input {
        None => match repl::start() {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("Error: {:?}", err);
                ExitCode::FAILURE
            }
        },
        Some(input) => match runner::execute(&input, cli.output.as_deref(), cli.emit) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{}", err);
                ExitCode::FAILURE
            }
        },
    }
}
