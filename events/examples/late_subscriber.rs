use rusty_events::{EventHandle, EventKind, EventRegistry, Listener};

type Status = &'static str;

fn printer(label: &'static str) -> Listener<Status> {
    Listener::new(move |event: &EventHandle<Status>, args: &[Status]| {
        let (name, count) = (event.name(), event.emit_count());
        println!("{label} <- {name} #{count}: {args:?}");
    })
}

fn main() -> rusty_events::Result<()> {
    let registry = EventRegistry::<Status>::new();
    registry.declare_with_kind("status", EventKind::Single)?;

    let early = printer("early");
    registry.subscribe("status", [&early]);

    registry.broadcast("status", ["booting"]);
    registry.broadcast("status", ["ready", "4 workers"]);

    // Receives the last status immediately, then only new broadcasts.
    let late = printer("late");
    registry.subscribe("status", [&late]);
    registry.broadcast("status", ["draining"]);

    // Fires on the next shutdown request only.
    registry.subscribe_once("shutdown", printer("once"));
    registry.broadcast("shutdown", ["sigterm"]);
    registry.broadcast("shutdown", ["sigterm"]);

    registry.unsubscribe("status", [&early, &late]);
    let left = registry.listener_count("status");
    println!("status listeners left: {left}");

    Ok(())
}
