use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::activity::DEFAULT_API_BASE;
use crate::menu::{MenuLink, default_menu_links};

// ===== CONFIG TYPES =====

/// Contents of `dashboard.toml`. Every section is optional.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    pub app: AppSection,
    pub feed: FeedSection,
    pub menu: Vec<MenuLink>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            app: AppSection::default(),
            feed: FeedSection::default(),
            menu: default_menu_links(),
        }
    }
}

// The version field enables config migration when the format changes
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AppSection {
    pub version: String,
    /// Platform build shown in the side panel footer next to the dashboard version.
    #[serde(default = "default_build_version")]
    pub build_version: String,
}

fn default_build_version() -> String {
    AppSection::DEFAULT_BUILD_VERSION.to_string()
}

impl AppSection {
    pub const CURRENT_VERSION: &'static str = "1.0.0";
    pub const DEFAULT_BUILD_VERSION: &'static str = "0.4.1";

    pub fn migration_strategy(&self) -> MigrationStrategy {
        match self.version.as_str() {
            "1.0.0" => MigrationStrategy::None,
            _ => MigrationStrategy::Recreate,
        }
    }
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION.to_string(),
            build_version: default_build_version(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MigrationStrategy {
    None,
    Recreate,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FeedSection {
    pub api_base: String,
}

impl Default for FeedSection {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

// ===== ERRORS =====

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse dashboard config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unsupported config version '{0}'")]
    UnsupportedVersion(String),
    #[error("menu entry {index} has an empty {field}")]
    EmptyMenuField { index: usize, field: &'static str },
    #[error("menu entry {index} has invalid route path '{route_path}'")]
    InvalidRoutePath { index: usize, route_path: String },
    #[error("menu route path '{0}' is used more than once")]
    DuplicateRoutePath(String),
    #[error("feed api_base must not be empty")]
    EmptyApiBase,
}

// ===== LOADING =====

impl DashboardConfig {
    /// Parses and validates. A config that fails validation is rejected whole.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: DashboardConfig = toml::from_str(source)?;
        if config.app.migration_strategy() == MigrationStrategy::Recreate {
            return Err(ConfigError::UnsupportedVersion(config.app.version));
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.feed.api_base.trim().is_empty() {
            return Err(ConfigError::EmptyApiBase);
        }

        let mut seen = HashSet::new();
        for (index, link) in self.menu.iter().enumerate() {
            for (field, value) in [
                ("label", &link.label),
                ("embedded_target", &link.embedded_target),
            ] {
                if value.trim().is_empty() {
                    return Err(ConfigError::EmptyMenuField { index, field });
                }
            }
            // Must survive a round trip through `Route::from_path` unchanged.
            let route_path = &link.route_path;
            let normalized = format!(
                "/{}",
                route_path.split('/').filter(|s| !s.is_empty()).collect::<Vec<_>>().join("/")
            );
            if normalized == "/" || normalized != *route_path || route_path.contains(['?', '#']) {
                return Err(ConfigError::InvalidRoutePath {
                    index,
                    route_path: route_path.clone(),
                });
            }
            if !seen.insert(route_path.as_str()) {
                return Err(ConfigError::DuplicateRoutePath(route_path.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = DashboardConfig::from_toml_str("").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.menu.len(), 5);
        assert_eq!(config.feed.api_base, "/api/activities");
    }

    #[test]
    fn shipped_config_matches_defaults() {
        let config = DashboardConfig::from_toml_str(include_str!("../../public/dashboard.toml")).unwrap();
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn menu_order_is_preserved() {
        let config = DashboardConfig::from_toml_str(
            r#"
            [app]
            version = "1.0.0"

            [feed]
            api_base = "/backend/activities"

            [[menu]]
            label = "Grafana"
            route_path = "/grafana"
            embedded_target = "https://grafana.example.com/"

            [[menu]]
            label = "Notebooks"
            route_path = "/notebooks"
            embedded_target = "/jupyter/"
            "#,
        )
        .unwrap();
        let labels: Vec<_> = config.menu.iter().map(|link| link.label.as_str()).collect();
        assert_eq!(labels, ["Grafana", "Notebooks"]);
        assert_eq!(config.feed.api_base, "/backend/activities");
    }

    #[test]
    fn rejects_unknown_version() {
        let error = DashboardConfig::from_toml_str("[app]\nversion = \"0.4.1\"\n").unwrap_err();
        assert!(matches!(error, ConfigError::UnsupportedVersion(version) if version == "0.4.1"));
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(matches!(
            DashboardConfig::from_toml_str("[[menu]\nlabel ="),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn rejects_unmatchable_route_paths() {
        for route_path in ["", "/", "docs", "/docs/", "//docs", "/docs?x"] {
            let mut config = DashboardConfig::default();
            config.menu[0].route_path = route_path.to_string();
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidRoutePath { index: 0, .. })),
                "{route_path}"
            );
        }
    }

    #[test]
    fn accepts_nested_route_paths() {
        let mut config = DashboardConfig::default();
        config.menu[0].route_path = "/tools/docs".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_duplicates_and_empty_fields() {
        let mut config = DashboardConfig::default();
        config.menu[1].route_path = config.menu[0].route_path.clone();
        assert!(matches!(config.validate(), Err(ConfigError::DuplicateRoutePath(_))));

        let mut config = DashboardConfig::default();
        config.menu[2].label = " ".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyMenuField { index: 2, field: "label" })
        ));

        let mut config = DashboardConfig::default();
        config.feed.api_base = String::new();
        assert!(matches!(config.validate(), Err(ConfigError::EmptyApiBase)));
    }

    #[test]
    fn migration_strategy_by_version() {
        assert_eq!(AppSection::default().migration_strategy(), MigrationStrategy::None);
        let old = AppSection {
            version: "0.9.0".to_string(),
            ..AppSection::default()
        };
        assert_eq!(old.migration_strategy(), MigrationStrategy::Recreate);
    }

    #[test]
    fn build_version_is_optional() {
        let config = DashboardConfig::from_toml_str("[app]\nversion = \"1.0.0\"\n").unwrap();
        assert_eq!(config.app.build_version, "0.4.1");

        let config =
            DashboardConfig::from_toml_str("[app]\nversion = \"1.0.0\"\nbuild_version = \"0.5.0\"\n").unwrap();
        assert_eq!(config.app.build_version, "0.5.0");
    }
}
