use zoon::*;

use shared::{Activity, MenuLink, Page, ViewState};

use crate::activity_feed::ActivityFeed;
use crate::app::DashboardApp;
use crate::dataflow::{Actor, Relay};
use crate::navigation::NavigationBus;

const SIDE_PANEL_WIDTH: u32 = 256;
const TOOLBAR_HEIGHT: u32 = 56;

const ACCENT_COLOR: &str = "#007dfc";
const PRIMARY_BACKGROUND: &str = "#003c75";
const PAGE_BACKGROUND: &str = "#f1f3f4";
const SIDEBAR_MUTED: &str = "#ffffff4f";
const CARD_BORDER: &str = "rgba(0,0,0,.12)";

pub fn root(app: &DashboardApp) -> impl Element + use<> {
    Column::new()
        .s(Width::fill())
        .s(Height::screen())
        .s(Font::new().family([
            FontFamily::new("Roboto"),
            FontFamily::new("system-ui"),
            FontFamily::SansSerif,
        ]))
        .item(toolbar(app))
        .item(
            Row::new()
                .s(Width::fill())
                .s(Height::fill())
                .item(side_panel(app))
                .item(main_area(app)),
        )
}

fn toolbar(app: &DashboardApp) -> impl Element + use<> {
    let panel_toggled_relay = app.route_controller.panel_toggled_relay.clone();

    Row::new()
        .s(Width::fill())
        .s(Height::exact(TOOLBAR_HEIGHT))
        .s(Padding::new().x(12))
        .s(Gap::new().x(16))
        .s(Background::new().color(PRIMARY_BACKGROUND))
        .s(Font::new().color("white").size(16))
        .item(
            Button::new()
                .s(Padding::all(8))
                .s(Font::new().size(20).color("white"))
                .label("☰")
                .on_press(move || panel_toggled_relay.send(())),
        )
        .item(
            El::new()
                .s(Font::new().weight(FontWeight::SemiBold))
                .child("Central Dashboard"),
        )
        .item(El::new().s(Width::fill()))
        .item(route_link(
            "Activity",
            "/activity",
            &app.navigation,
            NavigationBus::follow,
        ))
}

/// Home entry plus one entry per menu link; hidden rather than removed while
/// closed so the click interceptors are attached once.
fn side_panel(app: &DashboardApp) -> impl Element + use<> {
    let view_state = &app.route_controller.view_state;

    Column::new()
        .s(Width::exact(SIDE_PANEL_WIDTH))
        .s(Height::fill())
        .s(Background::new().color(PRIMARY_BACKGROUND))
        .update_raw_el({
            let panel_open = view_state.signal_ref(|state| state.panel_open).dedupe();
            move |raw_el| {
                raw_el.style_signal(
                    "display",
                    panel_open.map(|open| if open { "flex" } else { "none" }),
                )
            }
        })
        .item(side_panel_entry("Home", "/", 0, view_state, &app.navigation, NavigationBus::follow))
        .items(app.config.menu.iter().enumerate().map(|(index, link)| {
            menu_link_entry(link, index + 1, view_state, &app.navigation)
        }))
        .item(El::new().s(Height::fill()))
        .item(
            Column::new()
                .s(Padding::all(16))
                .s(Gap::new().y(4))
                .s(Font::new().size(12).color(SIDEBAR_MUTED))
                .item(El::new().child(format!("Build version {}", app.config.app.build_version)))
                .item(El::new().child(format!("Dashboard version {}", env!("CARGO_PKG_VERSION")))),
        )
}

fn menu_link_entry(
    link: &MenuLink,
    index: usize,
    view_state: &Actor<ViewState>,
    navigation: &NavigationBus,
) -> impl Element + use<> {
    side_panel_entry(
        &link.label,
        &link.route_path,
        index,
        view_state,
        navigation,
        NavigationBus::open_in_embedded_frame,
    )
}

fn side_panel_entry(
    label: &str,
    href: &str,
    index: usize,
    view_state: &Actor<ViewState>,
    navigation: &NavigationBus,
    on_click: fn(&NavigationBus, &str) -> Result<(), String>,
) -> impl Element + use<> {
    let navigation = navigation.clone();

    Link::new()
        .s(Width::fill())
        .s(Padding::new().x(16).y(12))
        .s(Font::new().size(14).color("white"))
        .s(Background::new().color_signal(view_state.signal_ref(move |state| {
            if state.side_panel_index == index {
                ACCENT_COLOR
            } else {
                "transparent"
            }
        })))
        .label(label.to_string())
        .to(href.to_string())
        .update_raw_el(move |raw_el| {
            navigation.intercept_clicks(&raw_el.dom_element(), on_click);
            raw_el
        })
}

fn route_link(
    label: &str,
    href: &str,
    navigation: &NavigationBus,
    on_click: fn(&NavigationBus, &str) -> Result<(), String>,
) -> impl Element + use<> {
    let navigation = navigation.clone();

    Link::new()
        .s(Font::new().color("white"))
        .label(label.to_string())
        .to(href.to_string())
        .update_raw_el(move |raw_el| {
            navigation.intercept_clicks(&raw_el.dom_element(), on_click);
            raw_el
        })
}

fn main_area(app: &DashboardApp) -> impl Element + use<> {
    let view_state = app.route_controller.view_state.clone();
    let activity_feed = app.activity_feed.clone();
    let namespace_draft = app.namespace_draft.clone();

    El::new()
        .s(Width::fill())
        .s(Height::fill())
        .child_signal(
            app.route_controller
                .view_state
                .signal_ref(|state| state.active_page)
                .dedupe()
                .map(move |page| match page {
                    Page::Dashboard => dashboard_view().unify(),
                    Page::Activity => activity_view(&activity_feed, &namespace_draft).unify(),
                    Page::Embedded => embedded_frame(&view_state).unify(),
                }),
        )
}

fn dashboard_view() -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Height::fill())
        .s(Padding::all(24))
        .s(Gap::new().y(12))
        .s(Background::new().color(PAGE_BACKGROUND))
        .item(
            El::new()
                .s(Font::new().size(22).weight(FontWeight::SemiBold))
                .child("Dashboard"),
        )
        .item(El::new().child(
            "Pick a tool in the side panel or open Activity to follow a namespace.",
        ))
}

fn embedded_frame(view_state: &Actor<ViewState>) -> impl Element + use<> {
    // Re-setting `src` reloads the frame, so only real target changes pass.
    let src = view_state
        .signal_ref(|state| state.embedded_url.clone().unwrap_or_default())
        .dedupe_cloned();

    El::new().s(Width::fill()).s(Height::fill()).child(
        RawHtmlEl::new("iframe")
            .attr_signal("src", src)
            .style("width", "100%")
            .style("height", "100%")
            .style("border", "0"),
    )
}

fn activity_view(activity_feed: &ActivityFeed, namespace_draft: &Mutable<String>) -> impl Element + use<> {
    let feed_state = &activity_feed.feed_state;

    Column::new()
        .s(Width::fill())
        .s(Height::fill())
        .s(Padding::all(16))
        .s(Gap::new().y(8))
        .s(Scrollbars::both())
        .s(Background::new().color(PAGE_BACKGROUND))
        .item(namespace_selector(&activity_feed.namespace_changed_relay, namespace_draft))
        .item_signal(
            feed_state
                .signal_ref(|state| state.fetch.is_loading())
                .dedupe()
                .map_true(progress_bar),
        )
        .item_signal(
            feed_state
                .signal_ref(|state| state.fetch.message().map(str::to_string))
                .dedupe_cloned()
                .map(|message| message.map(feed_message)),
        )
        .items_signal_vec(
            feed_state
                .signal_ref(|state| state.fetch.items().to_vec())
                .to_signal_vec()
                .map(activity_row),
        )
}

fn namespace_selector(
    namespace_changed_relay: &Relay<Option<String>>,
    namespace_draft: &Mutable<String>,
) -> impl Element + use<> {
    Row::new()
        .s(Gap::new().x(8))
        .item(
            TextInput::new()
                .s(Width::exact(240))
                .s(Padding::new().x(8).y(6))
                .s(Background::new().color("white"))
                .s(Borders::all(Border::new().width(1).color(CARD_BORDER)))
                .label_hidden("Namespace")
                .placeholder(Placeholder::new("Namespace"))
                .text_signal(namespace_draft.signal_cloned())
                .on_change({
                    let namespace_draft = namespace_draft.clone();
                    move |text| namespace_draft.set_neq(text)
                })
                .on_key_down_event({
                    let namespace_changed_relay = namespace_changed_relay.clone();
                    let namespace_draft = namespace_draft.clone();
                    move |event| {
                        event.if_key(Key::Enter, || {
                            select_namespace(&namespace_changed_relay, &namespace_draft)
                        });
                    }
                }),
        )
        .item(
            Button::new()
                .s(Padding::new().x(12).y(6))
                .s(Background::new().color(ACCENT_COLOR))
                .s(Font::new().color("white"))
                .label("Show activity")
                .on_press({
                    let namespace_changed_relay = namespace_changed_relay.clone();
                    let namespace_draft = namespace_draft.clone();
                    move || select_namespace(&namespace_changed_relay, &namespace_draft)
                }),
        )
}

fn select_namespace(namespace_changed_relay: &Relay<Option<String>>, namespace_draft: &Mutable<String>) {
    let namespace = namespace_draft.get_cloned().trim().to_string();
    namespace_changed_relay.send((!namespace.is_empty()).then_some(namespace));
}

fn progress_bar() -> impl Element {
    El::new()
        .s(Width::fill())
        .s(Height::exact(4))
        .s(Background::new().color(ACCENT_COLOR))
}

fn feed_message(message: String) -> impl Element {
    El::new()
        .s(Width::fill())
        .s(Padding::all(5))
        .s(Font::new().size(13))
        .s(Background::new().color("white"))
        .s(Borders::new().top(Border::new().width(1).color(CARD_BORDER)))
        .child(message)
}

fn activity_row(activity: Activity) -> impl Element {
    El::new()
        .s(Width::fill())
        .s(Padding::new().x(12).y(8))
        .s(Font::new().size(13))
        .s(Background::new().color("white"))
        .s(Borders::new().bottom(Border::new().width(1).color(CARD_BORDER)))
        .child(activity.summary())
}
