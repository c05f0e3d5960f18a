use serde::{Deserialize, Serialize};

/// Destination shown in the side panel and reachable through embedded mode.
///
/// Entries are loaded once at startup; their order defines the side panel
/// order and therefore the selection index (`position + 1`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MenuLink {
    pub label: String,
    /// Path matched against the sub path of an embedded route, e.g. `/notebooks`.
    pub route_path: String,
    /// What the embedded frame loads. Absolute external URL or internal path.
    pub embedded_target: String,
}

impl MenuLink {
    pub fn new(
        label: impl Into<String>,
        route_path: impl Into<String>,
        embedded_target: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            route_path: route_path.into(),
            embedded_target: embedded_target.into(),
        }
    }
}

/// Built-in menu used when no configuration overrides it.
pub fn default_menu_links() -> Vec<MenuLink> {
    vec![
        MenuLink::new(
            "Kubeflow docs",
            "/docs",
            "https://www.kubeflow.org/docs/about/kubeflow/",
        ),
        MenuLink::new("Notebooks", "/notebooks", "/jupyter/"),
        MenuLink::new("TFJob Dashboard", "/tjob-dashboard", "/tfjobs/ui/"),
        MenuLink::new("Katib Dashboard", "/katib-dashboard", "/katib/"),
        MenuLink::new("Pipeline Dashboard", "/pipeline-dashboard", "/pipeline/"),
    ]
}

/// First link whose `route_path` equals `sub_path`, with its position.
pub fn find_menu_link<'a>(links: &'a [MenuLink], sub_path: &str) -> Option<(usize, &'a MenuLink)> {
    links
        .iter()
        .enumerate()
        .find(|(_, link)| link.route_path == sub_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_link_by_exact_route_path() {
        let links = default_menu_links();
        let (index, link) = find_menu_link(&links, "/notebooks").unwrap();
        assert_eq!(index, 1);
        assert_eq!(link.embedded_target, "/jupyter/");
    }

    #[test]
    fn lookup_is_exact() {
        let links = default_menu_links();
        assert!(find_menu_link(&links, "/notebooks/").is_none());
        assert!(find_menu_link(&links, "notebooks").is_none());
        assert!(find_menu_link(&links, "").is_none());
    }

    #[test]
    fn first_match_wins_on_duplicates() {
        let links = vec![
            MenuLink::new("A", "/same", "/a/"),
            MenuLink::new("B", "/same", "/b/"),
        ];
        let (index, link) = find_menu_link(&links, "/same").unwrap();
        assert_eq!(index, 0);
        assert_eq!(link.label, "A");
    }
}
