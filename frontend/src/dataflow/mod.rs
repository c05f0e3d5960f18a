//! Actor+Relay primitives.
//!
//! - **[`Relay`]** - typed event channel, one emit site per relay
//! - **[`Actor`]** - single-owner reactive state driven by a processor task
//!
//! Domains own their state in an `Actor` and expose `Relay`s named
//! `{source}_{event}_relay`. The UI and the navigation layer only ever send
//! events; they never write state directly.

pub mod actor;
pub mod relay;

pub use actor::Actor;
pub use relay::{Relay, relay};
