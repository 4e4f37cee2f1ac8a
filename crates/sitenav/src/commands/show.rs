//! `sitenav show` command implementation.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use sitenav_config::SiteConfig;

use crate::error::CliError;
use crate::output::Output;

/// Output format for the show command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    #[default]
    Toml,
    Json,
}

/// Arguments for the show command.
#[derive(Args)]
pub(crate) struct ShowArgs {
    /// Path to configuration file (default: auto-discover sitenav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Toml)]
    format: Format,
}

impl ShowArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let (_, config) = super::load_config(self.config.as_deref())?;
        output.payload(&render(&config, self.format)?)?;
        Ok(())
    }
}

fn render(config: &SiteConfig, format: Format) -> Result<String, CliError> {
    match format {
        Format::Toml => Ok(config.to_toml_string()?),
        Format::Json => Ok(serde_json::to_string_pretty(config)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"
base = "/blog-site/"

[themeConfig]

[[themeConfig.sidebar."/networks/"]]
text = "网络知识"
children = ["/networks/https.md"]

[[themeConfig.sidebar."/"]]
text = "sourcemap"
children = ["/sourcemap/README.md"]

[[themeConfig.navbar]]
text = "v2"
link = "/vue2/README.md"
"#;

    #[test]
    fn test_render_json_keeps_sidebar_order() {
        let config = SiteConfig::from_toml_str(CONFIG).unwrap();
        let json = render(&config, Format::Json).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["base"], "/blog-site/");
        assert_eq!(value["themeConfig"]["navbar"][0]["link"], "/vue2/README.md");
        assert_eq!(
            value["themeConfig"]["sidebar"]["/networks/"][0]["children"][0],
            "/networks/https.md"
        );
        let networks = json.find("\"/networks/\"").unwrap();
        let root = json.find("\"/\"").unwrap();
        assert!(networks < root, "sidebar order lost:\n{json}");
    }

    #[test]
    fn test_render_toml_reloads() {
        let config = SiteConfig::from_toml_str(CONFIG).unwrap();
        let toml = render(&config, Format::Toml).unwrap();
        assert_eq!(SiteConfig::from_toml_str(&toml).unwrap(), config);
    }
}
