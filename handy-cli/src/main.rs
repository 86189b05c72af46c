//! handy - sketchy rendering from the command line
//!
//! Usage:
//!   handy arcs [-o out.svg]          Draw the random arc test scene
//!   handy arc --start 0 --end 3.14   Draw a single arc
//!
//! Strokes go to stdout unless `-o` is given. Logs go to stderr and follow
//! `RUST_LOG` (default `info`).

use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod cli;

use cli::{cmd_arc, cmd_arcs, ArcArgs, ArcsArgs, CliError};

#[derive(Parser, Debug)]
#[command(name = "handy", version, about = "Sketchy, hand-drawn rendering of arcs", long_about = None)]
struct Arguments {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw randomly placed arcs with hachured interiors
    Arcs(ArcsArgs),
    /// Draw one arc
    Arc(ArcArgs),
}

fn run(args: Arguments) -> Result<(), CliError> {
    match &args.command {
        Command::Arcs(arcs) => cmd_arcs(arcs),
        Command::Arc(arc) => cmd_arc(arc),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Arguments::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{error}");
            ExitCode::FAILURE
        }
    }
}
