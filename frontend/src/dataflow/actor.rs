//! Single-value Actor.
//!
//! An Actor owns a `Mutable<T>` and the task that mutates it. The task is the
//! only writer; everyone else reads through signals.

use std::future::Future;
use std::sync::Arc;
use zoon::{Mutable, Signal, Task, TaskHandle};

/// Reactive state with exactly one writer.
///
/// The processor receives the state handle and usually loops over one or more
/// relay streams with `select!`, handling one event to completion before the
/// next. Dropping every clone of the Actor drops the processor task.
///
/// ```rust
/// let (route_changed_relay, mut route_changed_stream) = relay();
///
/// let view_state = Actor::new(ViewState::default(), async move |state| {
///     while let Some(route) = route_changed_stream.next().await {
///         let next = state.lock_ref().reduce(&RouteEvent::RouteChanged(route), &links);
///         state.set_neq(next);
///     }
/// });
/// ```
#[derive(Clone, Debug)]
pub struct Actor<T>
where
    T: Clone + Send + Sync + 'static,
{
    state: Mutable<T>,
    #[allow(dead_code)]
    task_handle: Arc<TaskHandle>,
}

impl<T> Actor<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new<F, Fut>(initial_state: T, processor: F) -> Self
    where
        F: FnOnce(Mutable<T>) -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        let state = Mutable::new(initial_state);
        let task_handle = Arc::new(Task::start_droppable(processor(state.clone())));
        Self { state, task_handle }
    }

    /// The only read access: a signal of the current value.
    pub fn signal(&self) -> impl Signal<Item = T> + use<T> {
        self.state.signal_cloned()
    }

    pub fn signal_ref<U, F>(&self, f: F) -> impl Signal<Item = U> + use<T, U, F>
    where
        F: Fn(&T) -> U + 'static,
    {
        self.state.signal_ref(f)
    }
}
