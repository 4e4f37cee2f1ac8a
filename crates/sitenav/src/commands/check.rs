//! `sitenav check` command implementation.

use std::path::PathBuf;

use clap::Args;
use sitenav_config::{NavbarEntry, SiteConfig};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover sitenav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content directory to verify sidebar pages against.
    #[arg(short, long)]
    source_dir: Option<PathBuf>,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or, with
    /// `--source-dir`, if any sidebar page has no content file.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let (path, config) = super::load_config(self.config.as_deref())?;
        output.heading(&format!("Config: {}", path.display()));
        for line in summary_lines(&config) {
            output.info(&line);
        }

        if let Some(source_dir) = &self.source_dir {
            output.info(&format!("Source directory: {}", source_dir.display()));
            let missing = config.missing_pages(source_dir);
            if !missing.is_empty() {
                for page in &missing {
                    output.warning(&format!("  missing content for {page}"));
                }
                return Err(CliError::MissingPages(missing.len()));
            }
        }

        output.success("Configuration OK");
        Ok(())
    }
}

/// Human-readable overview of a loaded configuration.
fn summary_lines(config: &SiteConfig) -> Vec<String> {
    let mut lines = vec![
        format!("Title: {}", config.title),
        format!("Base: {}", config.base),
        format!("Sidebar ({} prefixes):", config.theme_config.sidebar.len()),
    ];

    for section in &config.theme_config.sidebar {
        let pages: usize = section.groups.iter().map(|g| g.children.len()).sum();
        lines.push(format!(
            "  {}  {} group(s), {} page(s)",
            section.prefix,
            section.groups.len(),
            pages
        ));
    }

    lines.push(format!(
        "Navbar ({} entries):",
        config.theme_config.navbar.len()
    ));
    for entry in &config.theme_config.navbar {
        match entry {
            NavbarEntry::Link(link) => lines.push(format!("  {} -> {}", link.text, link.link)),
            NavbarEntry::Dropdown(group) => {
                lines.push(format!("  {} ({} links)", group.text, group.children.len()));
            }
        }
    }

    if !config.plugins.is_empty() {
        let names: Vec<&str> = config.plugins.iter().map(|p| p.name.as_str()).collect();
        lines.push(format!("Plugins: {}", names.join(", ")));
    }

    lines
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_summary_lines() {
        let config = SiteConfig::from_toml_str(
            r#"
title = "卑鄙智"
base = "/blog-site/"

[themeConfig]

[[themeConfig.sidebar."/webpack4/"]]
text = "术语"
children = ["/webpack4/term/module.md", "/webpack4/term/chunk.md"]

[[themeConfig.sidebar."/webpack4/"]]
text = "tapable-1.1.3"
children = ["/webpack4/tapable"]

[[themeConfig.navbar]]
text = "计算机基础知识"
children = [{ text = "网络", link = "/networks/README.md" }]

[[themeConfig.navbar]]
text = "GitHub"
link = "https://github.com/theniceangel"

[[plugins]]
name = "@vuepress/plugin-shiki"
options = { theme = "github-dark" }
"#,
        )
        .unwrap();

        assert_eq!(
            summary_lines(&config),
            vec![
                "Title: 卑鄙智",
                "Base: /blog-site/",
                "Sidebar (1 prefixes):",
                "  /webpack4/  2 group(s), 3 page(s)",
                "Navbar (2 entries):",
                "  计算机基础知识 (1 links)",
                "  GitHub -> https://github.com/theniceangel",
                "Plugins: @vuepress/plugin-shiki",
            ]
        );
    }
}
