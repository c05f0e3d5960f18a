//! `window.__dashboard_test_api` for browser end-to-end tests.
//!
//! Snapshots are mirrored from the domain signals, so the API only reads what
//! the UI itself renders.

use std::cell::RefCell;

use shared::{FeedState, ViewState};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use zoon::{SignalExt, Task};

use crate::app::DashboardApp;

#[derive(Default)]
struct TestApiState {
    view_state: ViewState,
    feed_state: FeedState,
}

thread_local! {
    static TEST_API_STATE: RefCell<TestApiState> = RefCell::new(TestApiState::default());
}

/// Keeps the snapshots current for the lifetime of the page.
pub fn mirror_app_state(app: &DashboardApp) {
    Task::start(app.route_controller.view_state.signal().for_each(|view_state| {
        TEST_API_STATE.with(|cell| cell.borrow_mut().view_state = view_state);
        async {}
    }));
    Task::start(app.activity_feed.feed_state.signal().for_each(|feed_state| {
        TEST_API_STATE.with(|cell| cell.borrow_mut().feed_state = feed_state);
        async {}
    }));
}

pub fn expose_dashboard_test_api() {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };

    let api = js_sys::Object::new();

    let get_view_state_closure =
        Closure::wrap(Box::new(get_view_state_impl) as Box<dyn Fn() -> JsValue>);
    js_sys::Reflect::set(
        &api,
        &"getViewState".into(),
        get_view_state_closure.as_ref().unchecked_ref(),
    )
    .ok();
    get_view_state_closure.forget();

    let get_feed_state_closure =
        Closure::wrap(Box::new(get_feed_state_impl) as Box<dyn Fn() -> JsValue>);
    js_sys::Reflect::set(
        &api,
        &"getFeedState".into(),
        get_feed_state_closure.as_ref().unchecked_ref(),
    )
    .ok();
    get_feed_state_closure.forget();

    js_sys::Reflect::set(&window, &"__dashboard_test_api".into(), &api).ok();

    zoon::println!("Test API exposed on window.__dashboard_test_api");
}

fn to_json_value(value: &impl serde::Serialize) -> JsValue {
    serde_json::to_string(value)
        .ok()
        .and_then(|json| js_sys::JSON::parse(&json).ok())
        .unwrap_or(JsValue::NULL)
}

fn get_view_state_impl() -> JsValue {
    TEST_API_STATE.with(|cell| to_json_value(&cell.borrow().view_state))
}

fn get_feed_state_impl() -> JsValue {
    TEST_API_STATE.with(|cell| to_json_value(&cell.borrow().feed_state))
}
