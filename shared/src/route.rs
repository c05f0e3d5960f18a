//! Route classification and the view-state reducer.
//!
//! A [`Route`] is derived from the browser path on every navigation event and
//! folded into a fresh [`ViewState`]. Nothing here touches the browser; the
//! frontend feeds [`RouteEvent`]s in and renders whatever comes out.

use serde::{Deserialize, Serialize};

use crate::menu::{MenuLink, find_menu_link};

/// Reserved leading path segment that selects the embedded frame.
pub const EMBED_MARKER: &str = "_";

const ACTIVITY_SEGMENT: &str = "activity";

/// Logical destination shown in the main area.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    Activity,
    #[default]
    Dashboard,
    Embedded,
}

/// Parsed form of the current logical path: `/{page}{sub_path}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Route {
    pub page: String,
    pub sub_path: Option<String>,
}

impl Route {
    pub fn new(page: impl Into<String>, sub_path: Option<&str>) -> Self {
        Self {
            page: page.into(),
            sub_path: sub_path.map(str::to_string),
        }
    }

    /// Splits a location path into the page segment and the remaining tail.
    ///
    /// Query string and fragment are ignored, empty segments are dropped, and
    /// the tail keeps a leading `/` so it compares directly with
    /// [`MenuLink::route_path`].
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let mut segments = path.split('/').filter(|segment| !segment.is_empty());
        let page = segments.next().unwrap_or_default().to_string();
        let rest: Vec<&str> = segments.collect();
        let sub_path = (!rest.is_empty()).then(|| format!("/{}", rest.join("/")));
        Self { page, sub_path }
    }

    pub fn is_embedded(&self) -> bool {
        self.page == EMBED_MARKER
    }
}

/// History path for an intercepted link: its pathname behind the embed marker.
pub fn embedded_location(pathname: &str) -> String {
    if pathname.starts_with('/') {
        format!("/{EMBED_MARKER}{pathname}")
    } else {
        format!("/{EMBED_MARKER}/{pathname}")
    }
}

/// Inputs that may change the [`ViewState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteEvent {
    RouteChanged(Route),
    PanelToggled,
}

/// Everything the shell needs to render navigation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub active_page: Page,
    /// 0 is the home entry, menu link `i` is `i + 1`.
    pub side_panel_index: usize,
    pub embedded_url: Option<String>,
    pub panel_open: bool,
    /// Whether the last observed route carried the embed marker. Tracked
    /// separately from `active_page` because an unmatched embedded route
    /// renders the dashboard while still counting as embedded mode.
    pub embedded_mode: bool,
}

impl ViewState {
    pub fn reduce(&self, event: &RouteEvent, menu_links: &[MenuLink]) -> ViewState {
        match event {
            RouteEvent::RouteChanged(route) => self.apply_route(route, menu_links),
            RouteEvent::PanelToggled => ViewState {
                panel_open: !self.panel_open,
                ..self.clone()
            },
        }
    }

    fn apply_route(&self, route: &Route, menu_links: &[MenuLink]) -> ViewState {
        let embedded_link = route
            .is_embedded()
            .then(|| find_menu_link(menu_links, route.sub_path.as_deref().unwrap_or_default()))
            .flatten();

        let (active_page, side_panel_index, embedded_url) = match (route.page.as_str(), embedded_link) {
            (ACTIVITY_SEGMENT, _) => (Page::Activity, 0, None),
            (_, Some((index, link))) => (Page::Embedded, index + 1, Some(link.embedded_target.clone())),
            _ => (Page::Dashboard, 0, None),
        };

        let embedded_mode = route.is_embedded();
        // Auto-close only when crossing the embedded boundary.
        let panel_open = if embedded_mode != self.embedded_mode {
            false
        } else {
            self.panel_open
        };

        ViewState {
            active_page,
            side_panel_index,
            embedded_url,
            panel_open,
            embedded_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::default_menu_links;

    fn route(path: &str) -> RouteEvent {
        RouteEvent::RouteChanged(Route::from_path(path))
    }

    fn open_panel(state: &ViewState) -> ViewState {
        let state = state.reduce(&RouteEvent::PanelToggled, &[]);
        assert!(state.panel_open);
        state
    }

    #[test]
    fn parses_page_and_sub_path() {
        assert_eq!(Route::from_path(""), Route::new("", None));
        assert_eq!(Route::from_path("/"), Route::new("", None));
        assert_eq!(Route::from_path("/activity"), Route::new("activity", None));
        assert_eq!(Route::from_path("/activity/"), Route::new("activity", None));
        assert_eq!(Route::from_path("/_/notebooks"), Route::new("_", Some("/notebooks")));
        assert_eq!(Route::from_path("/_/jupyter/tree/"), Route::new("_", Some("/jupyter/tree")));
        assert_eq!(Route::from_path("/_/docs?x=1#top"), Route::new("_", Some("/docs")));
    }

    #[test]
    fn rewrites_intercepted_links_behind_marker() {
        assert_eq!(embedded_location("/notebooks"), "/_/notebooks");
        assert_eq!(embedded_location("docs"), "/_/docs");
        assert_eq!(Route::from_path(&embedded_location("/docs")), Route::new("_", Some("/docs")));
    }

    #[test]
    fn activity_page_ignores_sub_path() {
        let links = default_menu_links();
        for path in ["/activity", "/activity/whatever", "/activity/docs"] {
            let state = ViewState::default().reduce(&route(path), &links);
            assert_eq!(state.active_page, Page::Activity, "{path}");
            assert_eq!(state.side_panel_index, 0, "{path}");
            assert_eq!(state.embedded_url, None);
        }
    }

    #[test]
    fn embedded_route_selects_matching_menu_link() {
        let links = default_menu_links();
        for (i, link) in links.iter().enumerate() {
            let path = format!("/_{}", link.route_path);
            let state = ViewState::default().reduce(&route(&path), &links);
            assert_eq!(state.active_page, Page::Embedded);
            assert_eq!(state.embedded_url.as_deref(), Some(link.embedded_target.as_str()));
            assert_eq!(state.side_panel_index, i + 1);
        }
    }

    #[test]
    fn unmatched_embedded_route_falls_back_to_dashboard() {
        let links = default_menu_links();
        let fallback = ViewState::default().reduce(&route("/"), &links);
        for path in ["/_/unknown", "/_", "/_/docs/extra"] {
            let state = ViewState::default().reduce(&route(path), &links);
            assert_eq!(state.active_page, fallback.active_page, "{path}");
            assert_eq!(state.side_panel_index, fallback.side_panel_index);
            assert_eq!(state.embedded_url, None);
        }
    }

    #[test]
    fn unknown_pages_normalize_to_dashboard() {
        let links = default_menu_links();
        for path in ["", "/", "/dashboard", "/nope", "/docs"] {
            let state = ViewState::default().reduce(&route(path), &links);
            assert_eq!(state.active_page, Page::Dashboard, "{path}");
            assert_eq!(state.side_panel_index, 0);
        }
    }

    #[test]
    fn leaving_embedded_page_clears_frame_target() {
        let links = default_menu_links();
        let embedded = ViewState::default().reduce(&route("/_/docs"), &links);
        let state = embedded.reduce(&route("/activity"), &links);
        assert_eq!(state.embedded_url, None);
        assert_eq!(state.active_page, Page::Activity);
    }

    #[test]
    fn panel_closes_on_entering_and_leaving_embedded_mode() {
        let links = default_menu_links();
        let state = open_panel(&ViewState::default());

        let entered = state.reduce(&route("/_/notebooks"), &links);
        assert!(!entered.panel_open);

        let left = open_panel(&entered).reduce(&route("/activity"), &links);
        assert!(!left.panel_open);
    }

    #[test]
    fn panel_stays_open_within_the_same_mode() {
        let links = default_menu_links();

        let state = open_panel(&ViewState::default()).reduce(&route("/activity"), &links);
        assert!(state.panel_open);
        let state = state.reduce(&route("/"), &links);
        assert!(state.panel_open);

        let embedded = ViewState::default().reduce(&route("/_/docs"), &links);
        let state = open_panel(&embedded).reduce(&route("/_/katib-dashboard"), &links);
        assert!(state.panel_open);
        assert_eq!(state.side_panel_index, 4);
    }

    #[test]
    fn unmatched_embedded_route_still_counts_as_embedded_mode() {
        let links = default_menu_links();
        let state = open_panel(&ViewState::default()).reduce(&route("/_/unknown"), &links);
        assert!(!state.panel_open);
        assert!(state.embedded_mode);

        let state = open_panel(&state).reduce(&route("/_/docs"), &links);
        assert!(state.panel_open);
    }

    #[test]
    fn applying_same_route_twice_is_idempotent() {
        let links = default_menu_links();
        for path in ["/", "/activity", "/_/docs", "/_/unknown"] {
            let once = open_panel(&ViewState::default()).reduce(&route(path), &links);
            let once = if once.panel_open { once } else { open_panel(&once) };
            let twice = once.reduce(&route(path), &links);
            assert_eq!(once, twice, "{path}");
        }
    }

    #[test]
    fn toggling_panel_leaves_route_state_alone() {
        let links = default_menu_links();
        let state = ViewState::default().reduce(&route("/_/pipeline-dashboard"), &links);
        let toggled = state.reduce(&RouteEvent::PanelToggled, &links);
        assert_eq!(toggled.active_page, Page::Embedded);
        assert_eq!(toggled.side_panel_index, 5);
        assert_eq!(toggled.embedded_url, state.embedded_url);
        assert!(toggled.panel_open);
        assert!(!toggled.reduce(&RouteEvent::PanelToggled, &links).panel_open);
    }
}
