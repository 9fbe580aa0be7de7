//! Registries and listeners shared by the benchmarks.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use rusty_events::{EventHandle, EventKind, EventRegistry, Listener};

/// Listener that adds every argument to a shared counter.
///
/// Cheap enough that benchmarks measure the registry, not the callback.
pub fn summing_listener(total: &Arc<AtomicU64>) -> Listener<u64> {
    let total = Arc::clone(total);
    Listener::new(move |_: &EventHandle<u64>, args: &[u64]| {
        for value in args {
            total.fetch_add(*value, Ordering::Relaxed);
        }
    })
}

/// A registry with one event of `kind` called `name`, carrying `listeners` summing
/// listeners that all feed the returned counter.
pub fn populated(
    name: &str,
    kind: EventKind,
    listeners: usize,
) -> (EventRegistry<u64>, Arc<AtomicU64>) {
    let registry = EventRegistry::with_capacity(1);
    let total = Arc::new(AtomicU64::new(0));

    registry
        .declare_with_kind(name, kind)
        .expect("fresh registry has no events");
    let listeners: Vec<_> = (0..listeners).map(|_| summing_listener(&total)).collect();
    registry.subscribe(name, &listeners);

    (registry, total)
}

/// `count` distinct event names: `event.0`, `event.1`, ...
pub fn event_names(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("event.{i}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn populated_registry_delivers_to_every_listener() {
        let (registry, total) = populated("tick", EventKind::Default, 8);

        registry.broadcast("tick", [2]);

        assert_eq!(registry.listener_count("tick"), 8);
        assert_eq!(total.load(Ordering::Relaxed), 16);
    }

    #[test]
    fn event_names_are_distinct() {
        assert_eq!(event_names(3), vec!["event.0", "event.1", "event.2"]);
    }
}
