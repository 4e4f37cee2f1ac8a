//! sitenav CLI - site navigation configuration tool.
//!
//! Provides commands for:
//! - `check`: Load and validate a configuration, optionally against content files
//! - `show`: Print the normalized configuration as TOML or JSON
//! - `routes`: List sidebar pages with their routes and public URLs

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, RoutesArgs, ShowArgs};
use output::Output;

/// sitenav - Site navigation configuration tool.
#[derive(Parser)]
#[command(name = "sitenav", version, about)]
struct Cli {
    /// Enable verbose output (info-level logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and validate the configuration.
    Check(CheckArgs),
    /// Print the normalized configuration.
    Show(ShowArgs),
    /// List sidebar pages with their routes.
    Routes(RoutesArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose))
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Show(args) => args.execute(),
        Commands::Routes(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

/// Log filter: `--verbose` enables INFO, otherwise `RUST_LOG` or WARN.
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_defaults_to_warn() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("RUST_LOG");
        }
        assert_eq!(log_filter(false).to_string(), "warn");
        assert_eq!(log_filter(true).to_string(), "info");
    }
}
