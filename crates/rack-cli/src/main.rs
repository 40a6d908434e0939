//! rackctl binary entrypoint.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rack_cli::cli::{Cli, Commands};
use rack_cli::client::ServiceClient;
use rack_cli::commands::{scan, InfoCommand, ReadCommand, ScanCommand, StatusCommand};
use rack_cli::error::CliError;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let client = ServiceClient::new(&cli.host)?;

    // Sort keys are registered once per process and shared by reference.
    let sort_keys = scan::sort_keys();

    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Scan(args) => {
            ScanCommand::new(&client).execute(&mut stdout, &sort_keys, cli.format, &args)
        }
        Commands::Read(args) => ReadCommand::new(&client).execute(&mut stdout, cli.format, &args),
        Commands::Info(args) => InfoCommand::new(&client).execute(&mut stdout, cli.format, &args),
        Commands::Status => StatusCommand::new(&client).execute(&mut stdout, cli.format),
    }
}
