//! Central registry of named events.
//!
//! This module provides [`EventRegistry`], which owns every event record in the process
//! scope it was created for. It handles declaration, subscription and synchronous
//! delivery of broadcasts.
//!
//! # Overview
//!
//! - **Declaration**: events may be declared up front with a kind, or are created
//!   implicitly (as [`EventKind::Default`]) by the first subscription to their name.
//! - **Delivery**: [`broadcast()`](EventRegistry::broadcast) calls every listener
//!   inline, in subscription order, before returning.
//! - **Replay**: [`EventKind::Single`] events remember their last arguments and hand them
//!   to listeners that join after the first broadcast.
//!
//! # Re-entrancy
//!
//! Every operation takes `&self` and no internal lock is held while a listener runs, so
//! a listener may itself subscribe, unsubscribe, declare or broadcast. Each broadcast
//! delivers to a snapshot of the listener set taken when it starts: listeners added or
//! removed during a delivery pass are seen by the next broadcast, not the current one.
//!
//! # Failure
//!
//! Listener panics are not caught. A panic propagates out of
//! [`broadcast()`](EventRegistry::broadcast) and the remaining listeners of that pass are
//! skipped. The broadcast was already recorded (count and retained arguments), and the
//! registry stays usable.
//!
//! # Example
//!
//! ```rust,ignore
//! use rusty_events::{EventKind, EventRegistry, Listener};
//!
//! let registry = EventRegistry::<u32>::new();
//! registry.declare_with_kind("config.loaded", EventKind::Single)?;
//!
//! registry.broadcast("config.loaded", [42]);
//!
//! // Joins late, still receives `[42]` right away.
//! let listener = Listener::new(|event, args: &[u32]| println!("{}: {args:?}", event.name()));
//! registry.subscribe("config.loaded", [&listener]);
//! ```

use std::{
    borrow::Borrow,
    fmt,
    sync::{
        Arc, Weak,
        atomic::{AtomicBool, Ordering},
    },
};

use dashmap::{DashMap, mapref::entry::Entry};
use log::{debug, trace, warn};

use crate::{
    config::RegistryConfig,
    error::{DuplicateEventError, Result},
    event::{EventHandle, EventKind, IntoNames, Listener, ListenerId, record::Record},
};

/// Registry of named events and their listeners.
///
/// `A` is the type of the values carried by a broadcast. Each broadcast carries an
/// ordered list of them, which listeners receive as a slice.
///
/// # Thread Safety
///
/// Delivery is synchronous on the calling thread. The registry is nonetheless
/// `Send + Sync`: the name map is a [`DashMap`], so the registry can be shared through
/// an `Arc` and reached from inside its own listeners. A listener that holds a strong
/// `Arc` to the registry it is subscribed to keeps that registry alive; capture a
/// [`Weak`] instead.
pub struct EventRegistry<A> {
    inner: Arc<Inner<A>>,
}

/// State shared with once-listeners, which detach themselves through a weak reference.
struct Inner<A> {
    /// Event records keyed by name.
    events: DashMap<Arc<str>, Record<A>>,
    config: RegistryConfig,
}

impl<A> Inner<A> {
    /// Create `name` with the given kind, unless it already exists.
    fn create(&self, name: Arc<str>, kind: EventKind) -> Result<()> {
        match self.events.entry(Arc::clone(&name)) {
            Entry::Occupied(_) => {
                let err = DuplicateEventError::new(&*name);
                warn!(
                    "{}: rejected duplicate declaration of event '{name}'",
                    err.as_label()
                );
                Err(err)
            }
            Entry::Vacant(slot) => {
                debug!("Declared {kind} event '{name}'");
                slot.insert(Record::new(name, kind));
                Ok(())
            }
        }
    }

    /// Make sure `name` exists, creating it as a default event if needed.
    fn ensure(&self, name: &str) {
        if self.events.contains_key(name) {
            return;
        }
        let name: Arc<str> = Arc::from(name);
        self.events.entry(Arc::clone(&name)).or_insert_with(|| {
            debug!("Auto-created default event '{name}' on subscribe");
            Record::new(name, EventKind::Default)
        });
    }

    /// Handle to replay to a joining listener, if the event replays.
    fn replay(&self, name: &str) -> Option<EventHandle<A>> {
        self.events
            .get(name)
            .filter(|record| record.replays())
            .map(|record| record.handle())
    }

    /// Replay to `listener` if due, then add it. The replay runs with no lock held.
    fn attach(&self, name: &str, listener: &Listener<A>) {
        if let Some(event) = self.replay(name) {
            listener.call(&event, event.last_args().unwrap_or_default());
        }
        if let Some(mut record) = self.events.get_mut(name) {
            record.add(listener);
        }
    }

    fn detach(&self, name: &str, id: ListenerId) -> bool {
        self.events
            .get_mut(name)
            .is_some_and(|mut record| record.remove(id))
    }
}

impl<A> EventRegistry<A>
where
    A: Send + Sync + 'static,
{
    /// Creates an empty registry with the default configuration.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Creates an empty registry with room for `capacity` events.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(RegistryConfig {
            capacity,
            ..RegistryConfig::default()
        })
    }

    /// Creates an empty registry from an explicit configuration.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                events: DashMap::with_capacity(config.capacity),
                config,
            }),
        }
    }

    /// The configuration this registry was built with.
    #[inline]
    pub fn config(&self) -> &RegistryConfig {
        &self.inner.config
    }

    /// Declares an event of the configured default kind
    /// ([`EventKind::Default`] unless [`RegistryConfig::default_kind`] says otherwise).
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateEventError`] if an event with this name already exists, whether
    /// it was declared or created by a subscription. The existing event is unchanged.
    pub fn declare(&self, name: impl Into<String>) -> Result<()> {
        self.declare_with_kind(name, self.inner.config.default_kind)
    }

    /// Declares an event of the given kind.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateEventError`] if an event with this name already exists.
    pub fn declare_with_kind(&self, name: impl Into<String>, kind: EventKind) -> Result<()> {
        self.inner.create(Arc::from(name.into()), kind)
    }

    /// Subscribes each listener to each named event.
    ///
    /// Names are visited in order; unknown names are created as [`EventKind::Default`]
    /// events, even when `listeners` is empty. For each name, listeners are attached in
    /// order. A listener joining an [`EventKind::Single`] event that has already been
    /// broadcast is first called with the retained arguments, then added.
    ///
    /// Subscribing a listener that is already attached does not add it twice.
    ///
    /// ```rust,ignore
    /// registry.subscribe(["a", "b"], [&on_change, &audit]);
    /// ```
    pub fn subscribe<L>(&self, names: impl IntoNames, listeners: impl IntoIterator<Item = L>)
    where
        L: Borrow<Listener<A>>,
    {
        let listeners: Vec<L> = listeners.into_iter().collect();
        for name in names.into_names() {
            self.inner.ensure(&name);
            for listener in &listeners {
                let listener = Borrow::<Listener<A>>::borrow(listener);
                self.inner.attach(&name, listener);
            }
        }
    }

    /// Removes each listener from each named event.
    ///
    /// Unknown events and listeners that are not attached are ignored; unknown events are
    /// not created.
    pub fn unsubscribe<L>(&self, names: impl IntoNames, listeners: impl IntoIterator<Item = L>)
    where
        L: Borrow<Listener<A>>,
    {
        let ids: Vec<ListenerId> = listeners
            .into_iter()
            .map(|l| Borrow::<Listener<A>>::borrow(&l).id())
            .collect();
        for name in names.into_names() {
            for &id in &ids {
                self.inner.detach(&name, id);
            }
        }
    }

    /// Broadcasts `args` to every listener of `name`.
    ///
    /// Does nothing if no event is called `name`. Otherwise the broadcast is recorded
    /// (arguments retained for [`EventKind::Single`], count incremented) and each listener
    /// subscribed at this moment is called in subscription order before this returns.
    ///
    /// # Panics
    ///
    /// Propagates a panic raised by a listener; listeners after it are not called.
    pub fn broadcast(&self, name: &str, args: impl IntoIterator<Item = A>) {
        let args: Arc<[A]> = args.into_iter().collect();

        let Some((event, listeners)) = self.inner.events.get_mut(name).map(|mut record| {
            record.record_emit(&args);
            (record.handle(), record.listeners())
        }) else {
            trace!("Dropped broadcast to unknown event '{name}'");
            return;
        };

        trace!(
            "Broadcasting '{name}' #{} to {} listener(s)",
            event.emit_count(),
            listeners.len()
        );
        for listener in &listeners {
            listener.call(&event, &args);
        }
    }

    /// Subscribes `listener` to `name` for a single delivery.
    ///
    /// The listener is detached right before it is called, so it fires at most once per
    /// call to this method. If `name` is an [`EventKind::Single`] event that has already
    /// been broadcast, the replay is that one delivery and nothing stays subscribed.
    pub fn subscribe_once(&self, name: &str, listener: Listener<A>) {
        self.inner.ensure(name);

        if let Some(event) = self.inner.replay(name) {
            listener.call(&event, event.last_args().unwrap_or_default());
            return;
        }

        let id = ListenerId::next();
        let inner: Weak<Inner<A>> = Arc::downgrade(&self.inner);
        let target: Arc<str> = Arc::from(name);
        let fired = AtomicBool::new(false);

        let once = Listener::with_id(id, move |event: &EventHandle<A>, args: &[A]| {
            // A stale snapshot from an outer broadcast may still hold this wrapper.
            if fired.swap(true, Ordering::AcqRel) {
                return;
            }
            if let Some(inner) = inner.upgrade() {
                inner.detach(&target, id);
                trace!("Detached once-listener from '{target}'");
            }
            listener.call(event, args);
        });

        self.inner.attach(name, &once);
    }

    /// Returns `true` if an event called `name` exists.
    #[inline]
    pub fn is_declared(&self, name: &str) -> bool {
        self.inner.events.contains_key(name)
    }

    /// Snapshot of the event called `name`.
    pub fn handle(&self, name: &str) -> Option<EventHandle<A>> {
        self.inner.events.get(name).map(|record| record.handle())
    }

    /// Kind of the event called `name`.
    pub fn kind(&self, name: &str) -> Option<EventKind> {
        self.inner.events.get(name).map(|record| record.kind())
    }

    /// Number of listeners attached to `name`; zero for unknown events.
    pub fn listener_count(&self, name: &str) -> usize {
        self.inner
            .events
            .get(name)
            .map_or(0, |record| record.listener_count())
    }

    /// Number of events.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.events.len()
    }

    /// Returns `true` if no event exists yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.events.is_empty()
    }
}

impl<A> Default for EventRegistry<A>
where
    A: Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<A> fmt::Debug for EventRegistry<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventRegistry")
            .field("events", &self.inner.events.len())
            .field("config", &self.inner.config)
            .finish()
    }
}
