//! Krystal Cloud API CLI
//!
//! Command-line entry point: parses the invocation, sets up logging and the
//! output mode, then dispatches exactly one command to completion.

use clap::Parser;
use krystal_cli::commands::{Commands, Context};
use krystal_cli::{ConfigStore, OutputFormat, Printer};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const EXAMPLES: &str = "\
Examples:
  $ krystal login <your-api-key>     Set your API key
  $ krystal chains list              List supported chains
  $ krystal protocols                List supported protocols
  $ krystal balances <wallet>        Get wallet balances
  $ krystal pools list --chain-id 1  List pools on Ethereum
  $ krystal positions list --wallet <address>

Documentation: https://cloud-api.krystal.app/swagger/index.html";

#[derive(Parser)]
#[command(name = "krystal")]
#[command(about = "CLI tool for accessing the Krystal Cloud API", version)]
#[command(after_help = EXAMPLES)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (json, pretty)
    #[arg(short, long, global = true, default_value = "pretty")]
    output: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    // Load .env file if present (ignore if not found)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logging goes to stderr so `--output json` stdout stays parseable.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let printer = Printer::new(cli.output);

    let store = match ConfigStore::open() {
        Ok(store) => store,
        Err(e) => {
            printer.print_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let ctx = Context { store, printer };

    if let Err(e) = cli.command.run(&ctx).await {
        ctx.printer.print_error(&e.to_string());
        std::process::exit(1);
    }
}
