//! Named events, their listeners and the registry that owns them.
//!
//! - [`EventRegistry`] maps event names to their state and performs delivery.
//! - [`Listener`] is a callback with a stable identity, so it can be detached later.
//! - [`EventHandle`] is the read-only view of an event handed to every listener call.
//! - [`IntoNames`] lets operations accept one name or an ordered list of names.

mod handle;
mod listener;
mod names;
mod record;
mod registry;

use std::fmt;

pub use handle::EventHandle;
pub use listener::{Listener, ListenerId};
pub use names::IntoNames;
pub use registry::EventRegistry;

/// How an event treats its broadcast history.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// No history: subscribers only see broadcasts made after they joined.
    #[default]
    Default,
    /// Keeps the most recent arguments and replays them to every listener that joins
    /// after the first broadcast.
    Single,
}

impl EventKind {
    /// Returns `true` if events of this kind keep their last broadcast arguments.
    #[inline]
    pub const fn retains_args(self) -> bool {
        matches!(self, EventKind::Single)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Default => write!(f, "default"),
            EventKind::Single => write!(f, "single"),
        }
    }
}
