//! HTTP access through the browser `fetch` API.

use shared::{FetchResponse, activities_endpoint};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::error_display::{ErrorAlert, log_error_console_only};

fn js_error(error: JsValue) -> String {
    format!("{:?}", error)
}

/// `GET url`, returning the status and the body text whatever the status.
pub async fn get_text(url: &str) -> Result<(u16, String), String> {
    let window = web_sys::window().ok_or("window is not available")?;

    let init = web_sys::RequestInit::new();
    init.set_method("GET");
    let request = web_sys::Request::new_with_str_and_init(url, &init).map_err(js_error)?;
    request
        .headers()
        .set("Accept", "application/json, text/plain")
        .map_err(js_error)?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| format!("fetch of '{url}' did not yield a Response"))?;

    let status = response.status();
    let body = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    Ok((status, body.as_string().unwrap_or_default()))
}

/// Never fails: transport and decode problems come back as a non-success
/// response so the feed can show its error state.
pub async fn fetch_activities(api_base: &str, namespace: &str) -> FetchResponse {
    let encoded_namespace = String::from(js_sys::encode_uri_component(namespace));
    let url = activities_endpoint(api_base, &encoded_namespace);

    let result = get_text(&url).await.and_then(|(status, body)| {
        FetchResponse::from_json(status, &body)
            .map_err(|error| format!("invalid activity list from '{url}': {error}"))
    });

    match result {
        Ok(response) => {
            zoon::println!(
                "Activities for '{}' settled: status {} with {} items",
                namespace,
                response.status,
                response.activities.len()
            );
            response
        }
        Err(error) => {
            log_error_console_only(ErrorAlert::new_activity_fetch_error(namespace, error));
            FetchResponse::transport_failure()
        }
    }
}
