//! Central dashboard shell entry point

use std::sync::OnceLock;
use zoon::*;

/// Stores the main application task handle to prevent it from being dropped.
static MAIN_TASK: OnceLock<TaskHandle> = OnceLock::new();

mod activity_feed;
mod api;
mod app;
mod config;
mod dataflow;
mod error_display;
mod navigation;
mod route_controller;
mod test_api;
mod views;

pub fn main() {
    let handle = Task::start_droppable(async {
        let app = crate::app::DashboardApp::new().await;

        test_api::mirror_app_state(&app);
        test_api::expose_dashboard_test_api();

        let root_element = app.root();
        start_app("app", move || root_element);
    });
    let _ = MAIN_TASK.set(handle);
}
