use std::{fmt, sync::Arc};

use crate::event::EventKind;

/// Read-only snapshot of an event, passed as the first argument to every listener call.
///
/// The snapshot is taken when delivery starts, after the broadcast has been recorded, so
/// during a broadcast [`emit_count()`](Self::emit_count) already includes it. Later
/// broadcasts do not change a handle that has already been handed out.
pub struct EventHandle<A> {
    name: Arc<str>,
    kind: EventKind,
    emit_count: u64,
    last_args: Option<Arc<[A]>>,
}

impl<A> EventHandle<A> {
    #[inline]
    pub(crate) fn new(
        name: Arc<str>,
        kind: EventKind,
        emit_count: u64,
        last_args: Option<Arc<[A]>>,
    ) -> Self {
        Self {
            name,
            kind,
            emit_count,
            last_args,
        }
    }

    /// The event name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Number of broadcasts the event had received when this snapshot was taken.
    #[inline]
    pub fn emit_count(&self) -> u64 {
        self.emit_count
    }

    /// Arguments of the most recent broadcast.
    ///
    /// Always `None` for [`EventKind::Default`] events, and for
    /// [`EventKind::Single`] events that were never broadcast.
    #[inline]
    pub fn last_args(&self) -> Option<&[A]> {
        self.last_args.as_deref()
    }
}

impl<A> Clone for EventHandle<A> {
    fn clone(&self) -> Self {
        Self {
            name: Arc::clone(&self.name),
            kind: self.kind,
            emit_count: self.emit_count,
            last_args: self.last_args.clone(),
        }
    }
}

impl<A: fmt::Debug> fmt::Debug for EventHandle<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHandle")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("emit_count", &self.emit_count)
            .field("last_args", &self.last_args())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_handle_has_not_emitted() {
        let handle = EventHandle::<u8>::new(Arc::from("ready"), EventKind::Single, 0, None);

        assert_eq!(handle.name(), "ready");
        assert_eq!(handle.kind(), EventKind::Single);
        assert_eq!(handle.emit_count(), 0);
        assert_eq!(handle.last_args(), None);
    }

    #[test]
    fn clone_shares_last_args() {
        let args: Arc<[u8]> = Arc::from(vec![1, 2]);
        let handle = EventHandle::new(Arc::from("ready"), EventKind::Single, 3, Some(args));

        let copy = handle.clone();

        assert_eq!(copy.emit_count(), 3);
        assert_eq!(copy.last_args(), Some(&[1, 2][..]));
    }
}
