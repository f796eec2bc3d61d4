use std::io::{self, BufReader};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::error;
use tracing_subscriber::EnvFilter;

use missing_number::{ConsoleUi, Orchestrator, RangeValidator, Scanner, SumFinder, Writer};

#[derive(Parser)]
#[command(name = "missing-number")]
#[command(about = "Find the number missing from a sequence of [0, n]", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt for sequences until told to stop (the default)
    Interactive,
    /// Solve a single sequence given as arguments
    Solve {
        #[arg(allow_hyphen_values = true)]
        numbers: Vec<String>,
    },
}

fn main() -> ExitCode {
    // log records go to stderr, filtered by RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            let ui = ConsoleUi::new(
                Scanner::new(BufReader::new(io::stdin())),
                Writer::new(io::stdout()),
            );
            Orchestrator::new(RangeValidator, SumFinder, ui).run();
            ExitCode::SUCCESS
        }
        Commands::Solve { numbers } => solve(&numbers.join(" ")),
    }
}

fn solve(line: &str) -> ExitCode {
    let mut out = Writer::new(io::stdout());
    let (written, code) = match missing_number::solve(line) {
        Ok(missing) => (
            out.println(format_args!("The missing number is: {}", missing)),
            ExitCode::SUCCESS,
        ),
        Err(err) => (out.println(format_args!("Error: {}", err)), ExitCode::FAILURE),
    };

    match written {
        Ok(()) => code,
        Err(err) => {
            error!("could not write result: {}", err);
            ExitCode::FAILURE
        }
    }
}
