use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use crate::event::EventHandle;

/// Source of listener identities. Shared by every registry in the process.
static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(0);

/// Identity of a [`Listener`].
///
/// Two listeners are the same listener exactly when their ids are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Allocate a fresh, process-unique id.
    #[inline]
    pub(crate) fn next() -> Self {
        Self(NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

type Callback<A> = dyn Fn(&EventHandle<A>, &[A]) + Send + Sync;

/// A callback that can be subscribed to one or more events.
///
/// A listener is called with a read-only [`EventHandle`] of the event being delivered
/// and the broadcast arguments. Cloning a listener is cheap and keeps its identity, so
/// a clone can be used to unsubscribe the original:
///
/// ```rust,ignore
/// let listener = Listener::new(|event, args: &[u32]| println!("{}: {args:?}", event.name()));
///
/// registry.subscribe("tick", [&listener]);
/// registry.unsubscribe("tick", [listener.clone()]);
/// ```
///
/// Two listeners built from identical closures are still distinct listeners.
pub struct Listener<A> {
    id: ListenerId,
    callback: Arc<Callback<A>>,
}

impl<A> Listener<A> {
    /// Wrap a callback into a listener with a new identity.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&EventHandle<A>, &[A]) + Send + Sync + 'static,
    {
        Self::with_id(ListenerId::next(), callback)
    }

    /// Wrap a callback under an identity allocated beforehand, so the callback can refer
    /// to its own id.
    pub(crate) fn with_id<F>(id: ListenerId, callback: F) -> Self
    where
        F: Fn(&EventHandle<A>, &[A]) + Send + Sync + 'static,
    {
        Self {
            id,
            callback: Arc::new(callback),
        }
    }

    #[inline]
    pub fn id(&self) -> ListenerId {
        self.id
    }

    #[inline]
    pub(crate) fn call(&self, event: &EventHandle<A>, args: &[A]) {
        (self.callback)(event, args);
    }
}

impl<A> Clone for Listener<A> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            callback: Arc::clone(&self.callback),
        }
    }
}

impl<A> PartialEq for Listener<A> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<A> Eq for Listener<A> {}

impl<A> fmt::Debug for Listener<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener").field("id", &self.id).finish()
    }
}
