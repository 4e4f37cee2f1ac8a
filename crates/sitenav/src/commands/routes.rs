//! `sitenav routes` command implementation.

use std::path::PathBuf;

use clap::Args;
use sitenav_config::{RouteEntry, SiteConfig};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the routes command.
#[derive(Args)]
pub(crate) struct RoutesArgs {
    /// Path to configuration file (default: auto-discover sitenav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content directory used to resolve folder-backed pages.
    #[arg(short, long)]
    source_dir: Option<PathBuf>,
}

impl RoutesArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let (_, config) = super::load_config(self.config.as_deref())?;
        let entries = match &self.source_dir {
            Some(source_dir) => config.routes_in(source_dir),
            None => config.routes(),
        };
        output.payload(&route_table(&config, &entries))?;
        Ok(())
    }
}

/// One tab-separated line per sidebar page: page, route, public URL.
fn route_table(config: &SiteConfig, entries: &[RouteEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            format!(
                "{}\t{}\t{}",
                entry.page,
                entry.route,
                config.public_url(&entry.route)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
