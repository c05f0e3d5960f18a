//! Activity feed domain: one namespace in, one display state out.
//!
//! Every namespace change issues its own request; nothing is cancelled. The
//! settled responses come back through `response_settled_relay` into the same
//! processor loop, so whichever settles last decides what is shown.

use futures::{StreamExt, select};
use shared::{FeedEffect, FeedEvent, FeedState, FetchResponse};
use zoon::Task;

use crate::dataflow::{Actor, Relay, relay};

#[derive(Clone)]
pub struct ActivityFeed {
    pub feed_state: Actor<FeedState>,

    /// Hosting page selected a namespace (`None` when cleared)
    pub namespace_changed_relay: Relay<Option<String>>,
}

impl ActivityFeed {
    pub fn new(api_base: String) -> Self {
        let (namespace_changed_relay, namespace_changed_stream) = relay::<Option<String>>();
        let (response_settled_relay, response_settled_stream) = relay::<(String, FetchResponse)>();

        let feed_state = Actor::new(FeedState::default(), async move |state| {
            let mut namespace_changed = namespace_changed_stream.fuse();
            let mut response_settled = response_settled_stream.fuse();

            loop {
                let event = select! {
                    namespace = namespace_changed.next() => match namespace {
                        Some(namespace) => FeedEvent::NamespaceChanged(namespace),
                        None => break,
                    },
                    settled = response_settled.next() => match settled {
                        Some((namespace, response)) => FeedEvent::ResponseSettled { namespace, response },
                        None => break,
                    },
                };

                let (next, effect) = state.lock_ref().reduce(event);
                state.set(next);

                if let Some(FeedEffect::Fetch { namespace }) = effect {
                    spawn_fetch(api_base.clone(), namespace, response_settled_relay.clone());
                }
            }
        });

        Self {
            feed_state,
            namespace_changed_relay,
        }
    }
}

fn spawn_fetch(api_base: String, namespace: String, response_settled_relay: Relay<(String, FetchResponse)>) {
    zoon::println!("Fetching activities for namespace '{}'", namespace);
    Task::start(async move {
        let response = crate::api::fetch_activities(&api_base, &namespace).await;
        response_settled_relay.send((namespace, response));
    });
}
