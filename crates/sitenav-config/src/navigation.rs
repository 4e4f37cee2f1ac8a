//! Sidebar and navbar structures.
//!
//! The sidebar is a mapping from path prefix to an ordered list of groups.
//! Key order is significant for rendered navigation, so the mapping is kept
//! as an ordered list of [`SidebarSection`]s and converted to and from a TOML
//! table (with `preserve_order`) at the serde boundary.

use serde::{Deserialize, Serialize};
use toml::{Table, Value};

/// Named, ordered list of page paths shown in the side navigation panel.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SidebarGroup {
    /// Display label.
    pub text: String,
    /// Page paths in display order.
    pub children: Vec<String>,
}

/// Sidebar groups registered for one path prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarSection {
    /// Path prefix, e.g. `/webpack4/`.
    pub prefix: String,
    /// Groups in display order.
    pub groups: Vec<SidebarGroup>,
}

/// Ordered mapping from path prefix to sidebar groups.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(try_from = "Table", into = "Table")]
pub struct Sidebar {
    sections: Vec<SidebarSection>,
}

impl Sidebar {
    /// Create a sidebar from sections in display order.
    #[must_use]
    pub fn new(sections: Vec<SidebarSection>) -> Self {
        Self { sections }
    }

    /// Sections in the order they were declared.
    pub fn iter(&self) -> std::slice::Iter<'_, SidebarSection> {
        self.sections.iter()
    }

    /// Number of path prefixes.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Groups registered under an exact prefix.
    pub fn get(&self, prefix: &str) -> Option<&[SidebarGroup]> {
        self.sections
            .iter()
            .find(|section| section.prefix == prefix)
            .map(|section| section.groups.as_slice())
    }

    /// Section shown for a route: the one with the longest matching prefix.
    pub fn for_route(&self, route: &str) -> Option<&SidebarSection> {
        self.sections
            .iter()
            .filter(|section| route.starts_with(section.prefix.as_str()))
            .max_by_key(|section| section.prefix.len())
    }

    /// Total number of page entries across all sections.
    pub fn page_count(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|section| &section.groups)
            .map(|group| group.children.len())
            .sum()
    }
}

impl<'a> IntoIterator for &'a Sidebar {
    type Item = &'a SidebarSection;
    type IntoIter = std::slice::Iter<'a, SidebarSection>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<Table> for Sidebar {
    type Error = String;

    fn try_from(table: Table) -> Result<Self, Self::Error> {
        let sections = table
            .into_iter()
            .map(|(prefix, value)| {
                let groups = value
                    .try_into::<Vec<SidebarGroup>>()
                    .map_err(|e| format!("invalid sidebar for \"{prefix}\": {}", e.message()))?;
                Ok(SidebarSection { prefix, groups })
            })
            .collect::<Result<Vec<_>, String>>()?;
        Ok(Self { sections })
    }
}

impl From<Sidebar> for Table {
    fn from(sidebar: Sidebar) -> Self {
        sidebar
            .sections
            .into_iter()
            .map(|section| {
                let groups = section.groups.into_iter().map(group_to_value).collect();
                (section.prefix, Value::Array(groups))
            })
            .collect()
    }
}

fn group_to_value(group: SidebarGroup) -> Value {
    let mut table = Table::new();
    table.insert("text".to_owned(), Value::String(group.text));
    table.insert(
        "children".to_owned(),
        Value::Array(group.children.into_iter().map(Value::String).collect()),
    );
    Value::Table(table)
}

/// A single `{ text, link }` navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NavLink {
    pub text: String,
    pub link: String,
}

/// A dropdown in the site header.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NavGroup {
    pub text: String,
    pub children: Vec<NavLink>,
}

/// Top-level navbar entry: a direct link or a dropdown group.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum NavbarEntry {
    Link(NavLink),
    Dropdown(NavGroup),
}

impl NavbarEntry {
    /// Display label of the entry.
    pub fn text(&self) -> &str {
        match self {
            Self::Link(link) => &link.text,
            Self::Dropdown(group) => &group.text,
        }
    }

    /// Links reachable from this entry, in display order.
    pub fn links(&self) -> &[NavLink] {
        match self {
            Self::Link(link) => std::slice::from_ref(link),
            Self::Dropdown(group) => &group.children,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    struct Wrapper {
        sidebar: Sidebar,
    }

    fn section(prefix: &str, groups: &[(&str, &[&str])]) -> SidebarSection {
        SidebarSection {
            prefix: prefix.to_owned(),
            groups: groups
                .iter()
                .map(|(text, children)| SidebarGroup {
                    text: (*text).to_owned(),
                    children: children.iter().map(|c| (*c).to_owned()).collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_sidebar_preserves_declaration_order() {
        let toml = r#"
[[sidebar."/webpack4/"]]
text = "术语"
children = ["/webpack4/term/module.md"]

[[sidebar."/"]]
text = "sourcemap"
children = ["/sourcemap/base64.md"]

[[sidebar."/networks/"]]
text = "网络知识"
children = ["/networks/https.md"]
"#;
        let wrapper: Wrapper = toml::from_str(toml).unwrap();
        let prefixes: Vec<&str> = wrapper
            .sidebar
            .iter()
            .map(|s| s.prefix.as_str())
            .collect();
        assert_eq!(prefixes, vec!["/webpack4/", "/", "/networks/"]);
    }

    #[test]
    fn test_sidebar_rejects_wrong_shape() {
        let toml = r#"
[sidebar]
"/webpack4/" = "not a list"
"#;
        let err = toml::from_str::<Wrapper>(toml).unwrap_err();
        assert!(err.message().contains("/webpack4/"), "got: {err}");
    }

    #[test]
    fn test_sidebar_group_requires_children() {
        let toml = r#"
[[sidebar."/networks/"]]
text = "网络知识"
"#;
        let err = toml::from_str::<Wrapper>(toml).unwrap_err();
        assert!(err.message().contains("children"), "got: {err}");
    }

    #[test]
    fn test_sidebar_serializes_in_order() {
        let wrapper = Wrapper {
            sidebar: Sidebar::new(vec![
                section("/z/", &[("last", &["/z/a.md"])]),
                section("/a/", &[("first", &["/a/b.md", "/a/c.md"])]),
            ]),
        };
        let out = toml::to_string(&wrapper).unwrap();
        let z = out.find("/z/").unwrap();
        let a = out.find("\"/a/\"").unwrap();
        assert!(z < a, "unexpected order in:\n{out}");

        let back: Wrapper = toml::from_str(&out).unwrap();
        assert_eq!(back.sidebar, wrapper.sidebar);
    }

    #[test]
    fn test_for_route_picks_longest_prefix() {
        let sidebar = Sidebar::new(vec![
            section("/", &[("sourcemap", &["/sourcemap/README.md"])]),
            section("/webpack4/", &[("术语", &["/webpack4/term/module.md"])]),
        ]);
        assert_eq!(
            sidebar.for_route("/webpack4/term/module.html").unwrap().prefix,
            "/webpack4/"
        );
        assert_eq!(sidebar.for_route("/sourcemap/").unwrap().prefix, "/");
        assert!(Sidebar::default().for_route("/").is_none());
    }

    #[test]
    fn test_get_and_page_count() {
        let sidebar = Sidebar::new(vec![
            section("/", &[("sourcemap", &["/sourcemap/README.md", "/sourcemap/base64.md"])]),
            section(
                "/webpack4/",
                &[("术语", &["/webpack4/term/module.md"]), ("tapable-1.1.3", &["/webpack4/tapable"])],
            ),
        ]);
        assert_eq!(sidebar.len(), 2);
        assert_eq!(sidebar.page_count(), 4);
        assert_eq!(sidebar.get("/webpack4/").unwrap().len(), 2);
        assert!(sidebar.get("/networks/").is_none());
    }

    #[test]
    fn test_navbar_entry_variants() {
        #[derive(Deserialize)]
        struct Nav {
            navbar: Vec<NavbarEntry>,
        }
        let toml = r#"
[[navbar]]
text = "Home"
link = "/"

[[navbar]]
text = "webpack 源码合集"
children = [
    { text = "v4.46.0", link = "/webpack4/README.md" },
    { text = "v5", link = "/webpack5/README.md" },
]
"#;
        let nav: Nav = toml::from_str(toml).unwrap();
        assert_eq!(nav.navbar.len(), 2);
        assert!(matches!(nav.navbar[0], NavbarEntry::Link(_)));
        assert_eq!(nav.navbar[1].text(), "webpack 源码合集");
        let links: Vec<&str> = nav.navbar[1].links().iter().map(|l| l.link.as_str()).collect();
        assert_eq!(links, vec!["/webpack4/README.md", "/webpack5/README.md"]);
    }

    #[test]
    fn test_navbar_entry_without_link_or_children_fails() {
        #[derive(Debug, Deserialize)]
        #[allow(dead_code)]
        struct Nav {
            navbar: Vec<NavbarEntry>,
        }
        let toml = r#"
[[navbar]]
text = "dangling"
"#;
        assert!(toml::from_str::<Nav>(toml).is_err());
    }

    #[test]
    fn test_navbar_entry_with_link_and_children_fails() {
        #[derive(Debug, Deserialize)]
        #[allow(dead_code)]
        struct Nav {
            navbar: Vec<NavbarEntry>,
        }
        let toml = r#"
[[navbar]]
text = "Vue"
link = "/vue2/"
children = [{ text = "v2", link = "/vue2/README.md" }]
"#;
        assert!(toml::from_str::<Nav>(toml).is_err());
    }
}
