use shared::{ConfigError, DashboardConfig};

use crate::error_display::{ErrorAlert, log_error_console_only};

/// Served from the MoonZoon public folder.
pub const CONFIG_URL: &str = "/_api/public/dashboard.toml";

/// Loads the dashboard configuration once at startup.
///
/// A missing file, a transport failure or a rejected file all fall back to
/// [`DashboardConfig::default`]; the shell always starts.
pub async fn load_dashboard_config() -> DashboardConfig {
    let source = match crate::api::get_text(CONFIG_URL).await {
        Ok((200, source)) => source,
        Ok((status, _)) => {
            zoon::println!("No dashboard config at {} (status {}), using defaults", CONFIG_URL, status);
            return DashboardConfig::default();
        }
        Err(error) => {
            log_error_console_only(ErrorAlert::new_config_error(error));
            return DashboardConfig::default();
        }
    };

    match DashboardConfig::from_toml_str(&source) {
        Ok(config) => {
            zoon::println!(
                "Loaded dashboard config v{} with {} menu links",
                config.app.version,
                config.menu.len()
            );
            config
        }
        Err(ConfigError::UnsupportedVersion(version)) => {
            zoon::println!(
                "Dashboard config version '{}' is not supported, recreating from defaults",
                version
            );
            DashboardConfig::default()
        }
        Err(error) => {
            log_error_console_only(ErrorAlert::new_config_error(error.to_string()));
            DashboardConfig::default()
        }
    }
}
