//! Page path to route mapping.
//!
//! Mirrors how the site generator turns sidebar children into routes:
//! - `"/a/README.md"` and `"/a/index.md"` -> `"/a/"`
//! - `"/a/b.md"` -> `"/a/b.html"`
//! - `"/a/b"` -> `"/a/b.html"`, or `"/a/b/"` when backed by `a/b/README.md`
//! - `"/a/"` -> `"/a/"`

use std::path::{Path, PathBuf};

use crate::SiteConfig;

/// A sidebar child together with the route it is served at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    /// Sidebar prefix the child is declared under.
    pub prefix: String,
    /// Text of the group containing the child.
    pub group: String,
    /// Absolute page path.
    pub page: String,
    /// Route relative to the site base.
    pub route: String,
}

/// Resolve a sidebar child against its prefix.
///
/// Children without a leading `/` are relative to the prefix.
pub fn resolve_child(prefix: &str, child: &str) -> String {
    if child.starts_with('/') {
        return child.to_owned();
    }
    if prefix.ends_with('/') {
        format!("{prefix}{child}")
    } else {
        format!("{prefix}/{child}")
    }
}

/// Map an absolute page path to its route.
///
/// `README` and `index` pages match case-insensitively.
pub fn page_route(page: &str) -> String {
    if page.ends_with('/') || page.ends_with(".html") {
        return page.to_owned();
    }

    let without_ext = page.strip_suffix(".md").unwrap_or(page);
    let (dir, name) = without_ext.rsplit_once('/').unwrap_or(("", without_ext));
    if name.eq_ignore_ascii_case("readme") || name.eq_ignore_ascii_case("index") {
        return format!("{dir}/");
    }

    format!("{without_ext}.html")
}

/// Map a page path to its route using the content file that backs it.
///
/// A folder-backed page (`x/README.md`) is served at `x/` rather than
/// `x.html`. Falls back to [`page_route`] when no content file exists.
pub fn page_route_in(source_dir: &Path, page: &str) -> String {
    let backing = content_candidates(source_dir, page)
        .into_iter()
        .find(|candidate| candidate.is_file());

    let Some(relative) = backing
        .as_deref()
        .and_then(|file| file.strip_prefix(source_dir).ok())
    else {
        return page_route(page);
    };

    let file_page: String = relative
        .components()
        .map(|c| format!("/{}", c.as_os_str().to_string_lossy()))
        .collect();
    page_route(&file_page)
}

/// Content files that may back a page path, in lookup order.
pub fn content_candidates(source_dir: &Path, page: &str) -> Vec<PathBuf> {
    let relative = page.trim_start_matches('/');

    if relative.is_empty() || relative.ends_with('/') {
        let dir = source_dir.join(relative);
        return vec![dir.join("README.md"), dir.join("index.md")];
    }
    if Path::new(relative).extension().is_some_and(|ext| ext == "md") {
        return vec![source_dir.join(relative)];
    }
    if let Some(stem) = relative.strip_suffix(".html") {
        return vec![source_dir.join(format!("{stem}.md"))];
    }

    let dir = source_dir.join(relative);
    vec![
        source_dir.join(format!("{relative}.md")),
        dir.join("README.md"),
        dir.join("index.md"),
    ]
}

impl SiteConfig {
    /// Every sidebar child with its route, in sidebar order.
    pub fn routes(&self) -> Vec<RouteEntry> {
        self.collect_routes(page_route)
    }

    /// Like [`SiteConfig::routes`], resolving folder-backed pages against
    /// the content files in `source_dir`.
    pub fn routes_in(&self, source_dir: &Path) -> Vec<RouteEntry> {
        self.collect_routes(|page| page_route_in(source_dir, page))
    }

    fn collect_routes(&self, route_of: impl Fn(&str) -> String) -> Vec<RouteEntry> {
        let mut entries = Vec::with_capacity(self.theme_config.sidebar.page_count());
        for section in &self.theme_config.sidebar {
            for group in &section.groups {
                for child in &group.children {
                    let page = resolve_child(&section.prefix, child);
                    entries.push(RouteEntry {
                        prefix: section.prefix.clone(),
                        group: group.text.clone(),
                        route: route_of(&page),
                        page,
                    });
                }
            }
        }
        entries
    }

    /// Public URL of a route under the site base.
    pub fn public_url(&self, route: &str) -> String {
        let base = self.base.trim_end_matches('/');
        if route.starts_with('/') {
            format!("{base}{route}")
        } else {
            format!("{base}/{route}")
        }
    }

    /// Sidebar pages with no content file under `source_dir`, in sidebar order.
    pub fn missing_pages(&self, source_dir: &Path) -> Vec<String> {
        let mut missing: Vec<String> = Vec::new();
        for entry in self.routes() {
            let found = content_candidates(source_dir, &entry.page)
                .iter()
                .any(|candidate| candidate.is_file());
            if found {
                tracing::debug!(page = %entry.page, "Found content file");
            } else if !missing.contains(&entry.page) {
                missing.push(entry.page);
            }
        }
        missing
    }
}
