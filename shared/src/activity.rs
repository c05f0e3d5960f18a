//! Namespace-scoped activity feed state.
//!
//! [`FeedState::reduce`] is the whole lifecycle: a namespace change either
//! settles on `Idle` or moves to `Loading` and asks for a fetch, and every
//! settled response replaces the display state outright. Responses are
//! applied in the order they settle, so the last one wins.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PROMPT: &str = "Select a namespace to see recent events";
pub const DEFAULT_API_BASE: &str = "/api/activities";

const HTTP_OK: u16 = 200;

/// One backend record, passed through untouched.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct Activity(pub serde_json::Value);

impl Activity {
    /// Short line for list rendering: `message`, then `reason`, then a bare
    /// string record as is, then raw JSON.
    pub fn summary(&self) -> String {
        ["message", "reason"]
            .iter()
            .find_map(|key| self.0.get(key).and_then(|value| value.as_str()))
            .or_else(|| self.0.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| self.0.to_string())
    }
}

/// What the feed shows. Exactly one variant at a time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub enum ActivityFetchState {
    #[default]
    Idle,
    Loading,
    Error(String),
    Empty(String),
    Populated(Vec<Activity>),
}

impl ActivityFetchState {
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Idle => Some(DEFAULT_PROMPT),
            Self::Error(message) | Self::Empty(message) => Some(message),
            Self::Loading | Self::Populated(_) => None,
        }
    }

    pub fn items(&self) -> &[Activity] {
        match self {
            Self::Populated(items) => items,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Settled outcome of one `GET {api_base}/{namespace}`.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResponse {
    /// HTTP status; 0 when the request never produced one.
    pub status: u16,
    pub activities: Vec<Activity>,
}

impl FetchResponse {
    pub fn ok(activities: Vec<Activity>) -> Self {
        Self {
            status: HTTP_OK,
            activities,
        }
    }

    pub fn failed(status: u16) -> Self {
        Self {
            status,
            activities: Vec::new(),
        }
    }

    pub fn transport_failure() -> Self {
        Self::failed(0)
    }

    /// Decodes the body only for a successful status. Non-success bodies are
    /// never inspected.
    pub fn from_json(status: u16, body: &str) -> Result<Self, serde_json::Error> {
        if status != HTTP_OK {
            return Ok(Self::failed(status));
        }
        let activities = serde_json::from_str::<Vec<Activity>>(body)?;
        Ok(Self::ok(activities))
    }

    pub fn is_success(&self) -> bool {
        self.status == HTTP_OK
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FeedEvent {
    NamespaceChanged(Option<String>),
    ResponseSettled {
        namespace: String,
        response: FetchResponse,
    },
}

/// Work the caller has to start after a reduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEffect {
    Fetch { namespace: String },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct FeedState {
    pub namespace: Option<String>,
    pub fetch: ActivityFetchState,
    /// Requests issued and not yet settled. Superseded requests are not
    /// cancelled, so this can exceed one.
    pub requests_in_flight: usize,
}

impl FeedState {
    pub fn reduce(&self, event: FeedEvent) -> (FeedState, Option<FeedEffect>) {
        match event {
            FeedEvent::NamespaceChanged(namespace) => {
                let namespace = namespace.filter(|namespace| !namespace.trim().is_empty());
                match namespace {
                    None => (
                        FeedState {
                            namespace: None,
                            fetch: ActivityFetchState::Idle,
                            requests_in_flight: self.requests_in_flight,
                        },
                        None,
                    ),
                    Some(namespace) => (
                        FeedState {
                            namespace: Some(namespace.clone()),
                            fetch: ActivityFetchState::Loading,
                            requests_in_flight: self.requests_in_flight + 1,
                        },
                        Some(FeedEffect::Fetch { namespace }),
                    ),
                }
            }
            FeedEvent::ResponseSettled {
                namespace,
                response,
            } => (
                FeedState {
                    namespace: self.namespace.clone(),
                    // Named after the namespace shown now, not the one that issued the request.
                    fetch: reduce_response(self.namespace.as_deref().unwrap_or(&namespace), response),
                    requests_in_flight: self.requests_in_flight.saturating_sub(1),
                },
                None,
            ),
        }
    }
}

fn reduce_response(namespace: &str, response: FetchResponse) -> ActivityFetchState {
    if !response.is_success() {
        ActivityFetchState::Error(format!(
            "Error retrieving activities for namespace {namespace}"
        ))
    } else if response.activities.is_empty() {
        ActivityFetchState::Empty(format!("No activities for namespace {namespace}"))
    } else {
        ActivityFetchState::Populated(response.activities)
    }
}

/// `{api_base}/{namespace}`. The namespace must already be URL-safe.
pub fn activities_endpoint(api_base: &str, namespace: &str) -> String {
    format!("{}/{}", api_base.trim_end_matches('/'), namespace)
}
