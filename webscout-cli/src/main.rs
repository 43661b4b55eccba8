use std::process;

mod cli;
mod commands;
mod exit_codes;
mod signal_handler;

use clap::Parser;
use cli::{Cli, Commands};
use exit_codes::EXIT_ERROR;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    configure_logging(cli.verbose, cli.debug, cli.quiet);

    let exit_code = match cli.command {
        Some(Commands::Serve { subcommand }) => {
            commands::serve::handle_command(subcommand).await
        }
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            EXIT_ERROR
        }
    };

    process::exit(exit_code);
}

/// Initialize tracing to stderr
///
/// Logs always go to stderr because the stdio transport owns stdout for the
/// MCP protocol stream.
fn configure_logging(verbose: bool, debug: bool, quiet: bool) {
    use tracing::Level;
    use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

    let log_level = if quiet {
        Level::ERROR
    } else if debug {
        Level::DEBUG
    } else if verbose {
        Level::TRACE
    } else {
        Level::INFO
    };

    registry()
        .with(EnvFilter::new(format!("rmcp=warn,{log_level}")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
