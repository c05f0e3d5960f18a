//! Typed event channel for Actor+Relay domains.
//!
//! A relay is the sending half of an unbounded `futures` channel. The owning
//! Actor holds the receiver and processes events strictly in arrival order.

use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};
#[cfg(debug_assertions)]
use std::sync::{Arc, OnceLock};

/// Sending side of a domain event stream.
///
/// Naming follows `{source}_{event}_relay`, e.g. `route_changed_relay` or
/// `namespace_changed_relay`.
///
/// In debug builds a relay remembers the first call site that sent through
/// it and panics if a different site sends later. Funnel shared events
/// through one function (see `NavigationBus::announce`) instead of sending
/// from several places.
#[derive(Clone, Debug)]
pub struct Relay<T>
where
    T: Clone + Send + Sync + 'static,
{
    sender: UnboundedSender<T>,
    #[cfg(debug_assertions)]
    emit_location: Arc<OnceLock<&'static std::panic::Location<'static>>>,
}

#[cfg(debug_assertions)]
#[derive(Debug, Clone)]
pub enum RelayError {
    MultipleEmitters {
        previous: &'static std::panic::Location<'static>,
        current: &'static std::panic::Location<'static>,
    },
}

impl<T> Relay<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new() -> (Self, UnboundedReceiver<T>) {
        let (sender, receiver) = unbounded();
        (
            Relay {
                sender,
                #[cfg(debug_assertions)]
                emit_location: Arc::new(OnceLock::new()),
            },
            receiver,
        )
    }

    #[cfg(debug_assertions)]
    #[track_caller]
    fn check_single_source(&self) -> Result<(), RelayError> {
        let caller = std::panic::Location::caller();
        match self.emit_location.set(caller) {
            Ok(()) => Ok(()),
            Err(previous) if previous == caller => Ok(()),
            Err(previous) => Err(RelayError::MultipleEmitters {
                previous,
                current: caller,
            }),
        }
    }

    /// Sends an event. Dropped silently once the receiver is gone.
    #[track_caller]
    pub fn send(&self, value: T) {
        #[cfg(debug_assertions)]
        if let Err(error) = self.check_single_source() {
            panic!("{:?}", error);
        }

        let _ = self.sender.unbounded_send(value);
    }
}

pub fn relay<T>() -> (Relay<T>, UnboundedReceiver<T>)
where
    T: Clone + Send + Sync + 'static,
{
    Relay::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    fn emit(relay: &Relay<u32>, value: u32) {
        relay.send(value);
    }

    #[tokio::test]
    async fn delivers_events_in_order() {
        let (relay, mut stream) = relay::<u32>();

        for value in [3, 1, 2] {
            emit(&relay, value);
        }

        assert_eq!(stream.next().await, Some(3));
        assert_eq!(stream.next().await, Some(1));
        assert_eq!(stream.next().await, Some(2));
    }

    #[tokio::test]
    async fn clones_share_one_stream() {
        let (relay, mut stream) = relay::<u32>();
        let cloned = relay.clone();

        emit(&relay, 1);
        emit(&cloned, 2);

        assert_eq!(stream.next().await, Some(1));
        assert_eq!(stream.next().await, Some(2));
    }

    #[tokio::test]
    async fn send_after_receiver_dropped_is_ignored() {
        let (relay, stream) = relay::<u32>();
        drop(stream);
        emit(&relay, 1);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "MultipleEmitters")]
    fn second_emit_site_panics_in_debug() {
        let (relay, _stream) = relay::<u32>();
        relay.send(1);
        relay.send(2);
    }
}
