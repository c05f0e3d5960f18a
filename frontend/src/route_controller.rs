//! View-state domain: which page is shown, which side panel entry is
//! selected, what the embedded frame loads and whether the panel is open.

use futures::{StreamExt, select};
use shared::{MenuLink, Route, RouteEvent, ViewState};

use crate::dataflow::{Actor, Relay, relay};

#[derive(Clone)]
pub struct RouteController {
    pub view_state: Actor<ViewState>,

    /// Location changed (back/forward, initial load, intercepted link)
    pub route_changed_relay: Relay<Route>,

    /// User pressed the panel toggle
    pub panel_toggled_relay: Relay<()>,
}

impl RouteController {
    pub fn new(menu_links: Vec<MenuLink>) -> Self {
        let (route_changed_relay, route_changed_stream) = relay::<Route>();
        let (panel_toggled_relay, panel_toggled_stream) = relay::<()>();

        let view_state = Actor::new(ViewState::default(), async move |state| {
            let mut route_changed = route_changed_stream.fuse();
            let mut panel_toggled = panel_toggled_stream.fuse();

            loop {
                let event = select! {
                    route = route_changed.next() => match route {
                        Some(route) => {
                            zoon::println!("Route changed: page='{}' sub_path={:?}", route.page, route.sub_path);
                            RouteEvent::RouteChanged(route)
                        }
                        None => break,
                    },
                    toggled = panel_toggled.next() => match toggled {
                        Some(()) => RouteEvent::PanelToggled,
                        None => break,
                    },
                };

                // One event, one complete state: no partial renders.
                let next = state.lock_ref().reduce(&event, &menu_links);
                if next.panel_open != state.lock_ref().panel_open {
                    zoon::println!("Side panel {}", if next.panel_open { "opened" } else { "closed" });
                }
                state.set_neq(next);
            }
        });

        Self {
            view_state,
            route_changed_relay,
            panel_toggled_relay,
        }
    }
}
