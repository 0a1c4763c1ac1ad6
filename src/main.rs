mod categories;
mod cli;
mod config_cmd;
mod recommend;
mod report_helpers;

use std::error::Error;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

/// Log to stderr so JSON on stdout stays clean. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<(), Box<dyn Error>> = match &cli.command {
        Commands::Recommend(args) => recommend::run(args),
        Commands::Categories { json } => categories::run(*json),
        Commands::Config { path } => config_cmd::run(path.as_deref()),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
