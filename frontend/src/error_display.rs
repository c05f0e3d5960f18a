/// Failure record for console logging. Fetch failures reach the user through
/// the feed message instead, so these never become toasts.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorAlert {
    pub id: String,
    pub title: String,
    pub message: String,
    pub technical_error: String, // Raw technical error for console logging
}

impl ErrorAlert {
    pub fn new_activity_fetch_error(namespace: &str, error: String) -> Self {
        Self {
            id: format!("activity_error_{}_{}", namespace, js_sys::Date::now() as u64),
            title: "Activity Loading Error".to_string(),
            message: format!("{}: {}", namespace, make_error_user_friendly(&error)),
            technical_error: format!("Error fetching activities for namespace {}: {}", namespace, error),
        }
    }

    pub fn new_config_error(error: String) -> Self {
        Self {
            id: format!("config_error_{}", js_sys::Date::now() as u64),
            title: "Configuration Error".to_string(),
            message: make_error_user_friendly(&error),
            technical_error: format!("Dashboard config rejected, using defaults: {}", error),
        }
    }

    pub fn new_navigation_error(error: String) -> Self {
        Self {
            id: format!("navigation_error_{}", js_sys::Date::now() as u64),
            title: "Navigation Error".to_string(),
            message: make_error_user_friendly(&error),
            technical_error: format!("Navigation failed: {}", error),
        }
    }
}

pub fn make_error_user_friendly(error: &str) -> String {
    let error_lower = error.to_lowercase();

    if error_lower.contains("failed to parse") || error_lower.contains("expected") {
        "The configuration file is malformed.".to_string()
    } else if error_lower.contains("unsupported config version") {
        "The configuration file has an unsupported version.".to_string()
    } else if error_lower.contains("networkerror") || error_lower.contains("failed to fetch") {
        "Connection error. Please check your network connection.".to_string()
    } else if error_lower.contains("invalid link") {
        "This link cannot be opened in the dashboard.".to_string()
    } else {
        error.trim().to_string()
    }
}

/// Log error to browser console only (no toast notification)
pub fn log_error_console_only(alert: ErrorAlert) {
    zoon::println!(
        "Error [{}] {}: {} ({})",
        alert.id,
        alert.title,
        alert.message,
        alert.technical_error
    );
}
