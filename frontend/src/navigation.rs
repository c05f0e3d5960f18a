//! Browser history access and the single route-observation pathway.
//!
//! Back/forward, the initial load and intercepted link clicks all end in
//! [`NavigationBus::announce`], which reads the current path and sends it to
//! the route controller. Nothing else emits route changes.

use std::rc::Rc;

use shared::{Route, embedded_location};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::dataflow::Relay;

/// Router interface the navigation layer depends on.
pub trait Navigator {
    fn current_path(&self) -> String;
    fn push_path(&self, path: &str) -> Result<(), String>;
}

/// `window.location` + `window.history`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn current_path(&self) -> String {
        web_sys::window()
            .and_then(|window| window.location().pathname().ok())
            .unwrap_or_default()
    }

    fn push_path(&self, path: &str) -> Result<(), String> {
        let window = web_sys::window().ok_or("window is not available")?;
        let history = window
            .history()
            .map_err(|error| format!("history is not available: {error:?}"))?;
        history
            .push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path))
            .map_err(|error| format!("pushState to '{path}' failed: {error:?}"))
    }
}

fn link_pathname(href: &str) -> Result<String, String> {
    web_sys::Url::new(href)
        .map(|url| url.pathname())
        .map_err(|error| format!("invalid link '{href}': {error:?}"))
}

#[derive(Clone)]
pub struct NavigationBus {
    navigator: Rc<dyn Navigator>,
    route_changed_relay: Relay<Route>,
}

impl NavigationBus {
    pub fn new(navigator: Rc<dyn Navigator>, route_changed_relay: Relay<Route>) -> Self {
        Self {
            navigator,
            route_changed_relay,
        }
    }

    /// Re-reads the current path and hands it to the route controller.
    pub fn announce(&self) {
        let route = Route::from_path(&self.navigator.current_path());
        self.route_changed_relay.send(route);
    }

    /// In-app navigation without a page load.
    pub fn navigate(&self, path: &str) -> Result<(), String> {
        self.navigator.push_path(path)?;
        self.announce();
        Ok(())
    }

    /// Follows an absolute same-origin link in place.
    pub fn follow(&self, href: &str) -> Result<(), String> {
        self.navigate(&link_pathname(href)?)
    }

    /// Opens an absolute link inside the embedded frame by moving its
    /// pathname behind the embed marker.
    pub fn open_in_embedded_frame(&self, href: &str) -> Result<(), String> {
        self.navigate(&embedded_location(&link_pathname(href)?))
    }

    /// Announces on every `popstate` for the lifetime of the page.
    pub fn listen_to_history(&self) -> Result<(), String> {
        let window = web_sys::window().ok_or("window is not available")?;
        let popstate_closure = Closure::wrap(Box::new({
            let bus = self.clone();
            move |_event: web_sys::PopStateEvent| bus.announce()
        }) as Box<dyn FnMut(web_sys::PopStateEvent)>);

        window
            .add_event_listener_with_callback("popstate", popstate_closure.as_ref().unchecked_ref())
            .map_err(|error| format!("failed to listen for popstate: {error:?}"))?;
        popstate_closure.forget();
        Ok(())
    }

    /// Replaces the default click behaviour of `anchor` with `on_click(href)`.
    pub fn intercept_clicks(
        &self,
        anchor: &web_sys::Element,
        on_click: impl Fn(&NavigationBus, &str) -> Result<(), String> + 'static,
    ) {
        let click_closure = Closure::wrap(Box::new({
            let bus = self.clone();
            move |event: web_sys::MouseEvent| {
                let Some(anchor) = event
                    .current_target()
                    .and_then(|target| target.dyn_into::<web_sys::HtmlAnchorElement>().ok())
                else {
                    return;
                };
                event.prevent_default();
                if let Err(error) = on_click(&bus, &anchor.href()) {
                    crate::error_display::log_error_console_only(
                        crate::error_display::ErrorAlert::new_navigation_error(error),
                    );
                }
            }
        }) as Box<dyn FnMut(web_sys::MouseEvent)>);

        if let Err(error) =
            anchor.add_event_listener_with_callback("click", click_closure.as_ref().unchecked_ref())
        {
            zoon::println!("Failed to intercept link clicks: {:?}", error);
        }
        click_closure.forget();
    }
}
