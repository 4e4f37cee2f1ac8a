//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod routes;
pub(crate) mod show;

pub(crate) use check::CheckArgs;
pub(crate) use routes::RoutesArgs;
pub(crate) use show::ShowArgs;

use std::path::{Path, PathBuf};

use sitenav_config::SiteConfig;

use crate::error::CliError;

/// Load the explicit config file, or auto-discover `sitenav.toml`.
pub(crate) fn load_config(config_path: Option<&Path>) -> Result<(PathBuf, SiteConfig), CliError> {
    let path = SiteConfig::resolve_path(config_path)?;
    let config = SiteConfig::load(&path)?;
    tracing::info!(path = %path.display(), "Using configuration file");
    Ok((path, config))
}
