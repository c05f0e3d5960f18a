//! DashboardApp - owns the domains and wires them to the browser.

use std::rc::Rc;

use shared::DashboardConfig;
use zoon::*;

use crate::activity_feed::ActivityFeed;
use crate::config::load_dashboard_config;
use crate::error_display::{ErrorAlert, log_error_console_only};
use crate::navigation::{BrowserNavigator, NavigationBus};
use crate::route_controller::RouteController;

pub struct DashboardApp {
    /// Loaded once; menu order drives side panel indices
    pub config: DashboardConfig,

    /// Page, side panel selection, embedded frame target, panel visibility
    pub route_controller: RouteController,

    /// Namespace-scoped activity list
    pub activity_feed: ActivityFeed,

    /// History access shared by link interception and back/forward
    pub navigation: NavigationBus,

    /// Namespace text being edited, before it is submitted to the feed
    pub namespace_draft: Mutable<String>,
}

impl DashboardApp {
    pub async fn new() -> Self {
        let config = load_dashboard_config().await;

        let route_controller = RouteController::new(config.menu.clone());
        let activity_feed = ActivityFeed::new(config.feed.api_base.clone());

        let navigation = NavigationBus::new(
            Rc::new(BrowserNavigator),
            route_controller.route_changed_relay.clone(),
        );
        if let Err(error) = navigation.listen_to_history() {
            log_error_console_only(ErrorAlert::new_navigation_error(error));
        }
        // Initial location goes through the same pathway as every later change.
        navigation.announce();

        Self {
            config,
            route_controller,
            activity_feed,
            navigation,
            namespace_draft: Mutable::new(String::new()),
        }
    }

    pub fn root(&self) -> impl Element + use<> {
        crate::views::root(self)
    }
}
