//! Target-independent domain types for the dashboard shell.
//!
//! Everything in here is plain data plus pure reducers so the frontend
//! actors stay thin and the state machines can be tested natively.

pub mod activity;
pub mod config;
pub mod menu;
pub mod route;

// ===== RE-EXPORTS =====

pub use activity::{
    Activity, ActivityFetchState, FeedEffect, FeedEvent, FeedState, FetchResponse,
    DEFAULT_API_BASE, DEFAULT_PROMPT, activities_endpoint,
};
pub use config::{AppSection, ConfigError, DashboardConfig, FeedSection, MigrationStrategy};
pub use menu::{MenuLink, default_menu_links, find_menu_link};
pub use route::{EMBED_MARKER, Page, Route, RouteEvent, ViewState, embedded_location};
