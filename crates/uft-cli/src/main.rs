use std::process::ExitCode;

use clap::{Parser, Subcommand};

use commands::{derive, schemes, validate};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "uft", about = "UFT constant derivation and validation CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Derive the constant, run the battery, and export a provenance record.
    Derive(derive::DeriveArgs),
    /// Run the validation battery and print the checklist.
    Validate(validate::ValidateArgs),
    /// List the registered scheme versions.
    Schemes,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let outcome = match cli.command {
        Command::Derive(args) => derive::run(&args),
        Command::Validate(args) => validate::run(&args),
        Command::Schemes => {
            schemes::run();
            Ok(true)
        }
    };
    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}
