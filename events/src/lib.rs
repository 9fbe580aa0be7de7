//! # Rusty Events
//!
//! An in-process publish/subscribe registry. Producers broadcast values on named events;
//! listeners subscribed to those events are called synchronously, in subscription order.
//!
//! - [`EventRegistry`]: owns every event and performs delivery.
//! - [`Listener`]: a callback with a stable identity.
//! - [`EventHandle`]: read-only view of an event, passed to each listener call.
//! - [`EventKind`]: whether an event replays its last broadcast to late subscribers.
//!
//! ```rust,ignore
//! use rusty_events::{EventKind, EventRegistry, Listener};
//!
//! let registry = EventRegistry::<String>::new();
//! registry.declare_with_kind("status", EventKind::Single)?;
//!
//! let printer = Listener::new(|event, args: &[String]| {
//!     println!("[{} #{}] {}", event.name(), event.emit_count(), args.join(" "));
//! });
//! registry.subscribe("status", [&printer]);
//!
//! registry.broadcast("status", ["ready".to_string()]);
//! ```

pub mod config;
pub mod error;
pub mod event;

pub use config::RegistryConfig;
pub use error::{DuplicateEventError, Result};
pub use event::{EventHandle, EventKind, EventRegistry, IntoNames, Listener, ListenerId};
