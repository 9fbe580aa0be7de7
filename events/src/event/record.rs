use std::sync::Arc;

use crate::event::{EventHandle, EventKind, Listener, ListenerId};

/// Per-event state owned by the registry. Never handed out; callers only see
/// [`EventHandle`] snapshots.
pub(crate) struct Record<A> {
    name: Arc<str>,
    kind: EventKind,
    /// Only ever populated for [`EventKind::Single`].
    last_args: Option<Arc<[A]>>,
    /// Insertion ordered, unique by listener id.
    listeners: Vec<Listener<A>>,
    emit_count: u64,
}

impl<A> Record<A> {
    pub(crate) fn new(name: Arc<str>, kind: EventKind) -> Self {
        Self {
            name,
            kind,
            last_args: None,
            listeners: Vec::new(),
            emit_count: 0,
        }
    }

    #[inline]
    pub(crate) fn kind(&self) -> EventKind {
        self.kind
    }

    /// Snapshot of the current state.
    pub(crate) fn handle(&self) -> EventHandle<A> {
        EventHandle::new(
            Arc::clone(&self.name),
            self.kind,
            self.emit_count,
            self.last_args.clone(),
        )
    }

    /// Returns `true` if a listener joining now gets the last arguments replayed.
    #[inline]
    pub(crate) fn replays(&self) -> bool {
        self.kind.retains_args() && self.emit_count > 0
    }

    /// Add a listener. Returns `false` if it was already present.
    pub(crate) fn add(&mut self, listener: &Listener<A>) -> bool {
        if self.contains(listener.id()) {
            return false;
        }
        self.listeners.push(listener.clone());
        true
    }

    /// Remove a listener. Returns `false` if it was not present.
    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        match self.listeners.iter().position(|l| l.id() == id) {
            Some(pos) => {
                // `remove`, not `swap_remove`: delivery order is insertion order.
                self.listeners.remove(pos);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub(crate) fn contains(&self, id: ListenerId) -> bool {
        self.listeners.iter().any(|l| l.id() == id)
    }

    /// Record a broadcast: keep the arguments if this kind retains them, bump the count.
    pub(crate) fn record_emit(&mut self, args: &Arc<[A]>) {
        if self.kind.retains_args() {
            self.last_args = Some(Arc::clone(args));
        }
        self.emit_count += 1;
    }

    /// Copy of the listener set in delivery order.
    #[inline]
    pub(crate) fn listeners(&self) -> Vec<Listener<A>> {
        self.listeners.clone()
    }

    #[inline]
    pub(crate) fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
