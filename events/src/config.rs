//! Registry configuration.

use crate::event::EventKind;

/// Tunables for an [`EventRegistry`](crate::EventRegistry).
///
/// ```rust,ignore
/// // Explicitly declared events retain and replay their last arguments by default.
/// let registry = EventRegistry::<u32>::with_config(RegistryConfig {
///     default_kind: EventKind::Single,
///     ..RegistryConfig::default()
/// });
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Kind given to events created through [`declare`](crate::EventRegistry::declare).
    ///
    /// Events created implicitly by a subscription are always [`EventKind::Default`].
    pub default_kind: EventKind,

    /// Number of events to pre-allocate room for.
    pub capacity: usize,
}
