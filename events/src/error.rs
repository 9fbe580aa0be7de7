//! Errors returned by the event registry.
//!
//! The registry is deliberately permissive: broadcasting to an unknown event or
//! unsubscribing a listener that was never attached are no-ops. The only failure a
//! caller has to handle is declaring the same event name twice.

use thiserror::Error;

/// Returned by [`EventRegistry::declare`](crate::EventRegistry::declare) when an event
/// with the same name already exists.
///
/// The existing event is left untouched: its kind, listeners and broadcast history are
/// exactly what they were before the failed call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("event already exists: {name}")]
pub struct DuplicateEventError {
    /// The offending event name.
    name: String,
}

impl DuplicateEventError {
    #[inline]
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The name that was already declared.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a short stable label (snake_case) for use in logs.
    #[inline]
    pub fn as_label(&self) -> &'static str {
        "event_duplicate"
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = DuplicateEventError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_event() {
        let err = DuplicateEventError::new("player.joined");

        assert_eq!(err.to_string(), "event already exists: player.joined");
        assert_eq!(err.name(), "player.joined");
    }

    #[test]
    fn label_is_stable() {
        assert_eq!(DuplicateEventError::new("x").as_label(), "event_duplicate");
    }
}
