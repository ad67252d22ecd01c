//! In-memory HostGateway implementation for tests and local runs.

use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use world_core::{HostGateway, WorldHandle};

/// Handle to a world loaded in an [`InMemoryHost`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InMemoryWorld {
    name: String,
}

impl InMemoryWorld {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl WorldHandle for InMemoryWorld {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Default)]
struct HostWorlds {
    /// Worlds that exist on disk and can be loaded.
    available: Vec<String>,
    /// Loaded worlds, in load order.
    loaded: Vec<String>,
}

/// Host with a fixed set of worlds, some of them loaded.
///
/// `load_world` succeeds only for worlds registered as available.
#[derive(Default)]
pub struct InMemoryHost {
    worlds: RwLock<HostWorlds>,
    load_attempts: AtomicUsize,
}

impl InMemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register already loaded worlds.
    pub fn with_loaded<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            self.add_available(&name);
            self.mark_loaded(&name);
        }
        self
    }

    /// Register worlds that exist but are not loaded yet.
    pub fn with_available<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.add_available(&name.into());
        }
        self
    }

    pub fn add_available(&self, name: &str) {
        if let Ok(mut worlds) = self.worlds.write()
            && !worlds.available.iter().any(|w| w == name)
        {
            worlds.available.push(name.to_string());
        }
    }

    pub fn unload(&self, name: &str) {
        if let Ok(mut worlds) = self.worlds.write() {
            worlds.loaded.retain(|w| w != name);
        }
    }

    /// Number of `load_world` calls made so far.
    pub fn load_attempts(&self) -> usize {
        self.load_attempts.load(Ordering::Relaxed)
    }

    fn mark_loaded(&self, name: &str) {
        if let Ok(mut worlds) = self.worlds.write()
            && !worlds.loaded.iter().any(|w| w == name)
        {
            worlds.loaded.push(name.to_string());
        }
    }
}

impl HostGateway for InMemoryHost {
    type World = InMemoryWorld;

    fn is_world_loaded(&self, name: &str) -> bool {
        self.worlds
            .read()
            .map(|worlds| worlds.loaded.iter().any(|w| w == name))
            .unwrap_or(false)
    }

    fn load_world(&self, name: &str) -> bool {
        self.load_attempts.fetch_add(1, Ordering::Relaxed);

        let available = self
            .worlds
            .read()
            .map(|worlds| worlds.available.iter().any(|w| w == name))
            .unwrap_or(false);

        if available {
            self.mark_loaded(name);
        }
        available
    }

    fn world_by_name(&self, name: &str) -> Option<InMemoryWorld> {
        self.is_world_loaded(name).then(|| InMemoryWorld::new(name))
    }

    fn loaded_worlds(&self) -> Vec<InMemoryWorld> {
        self.worlds
            .read()
            .map(|worlds| worlds.loaded.iter().map(InMemoryWorld::new).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_available_world() {
        let host = InMemoryHost::new().with_available(["arena"]);
        assert!(!host.is_world_loaded("arena"));
        assert!(host.load_world("arena"));
        assert!(host.is_world_loaded("arena"));
        assert_eq!(host.world_by_name("arena"), Some(InMemoryWorld::new("arena")));
    }

    #[test]
    fn test_load_unknown_world_fails() {
        let host = InMemoryHost::new();
        assert!(!host.load_world("nowhere"));
        assert!(host.world_by_name("nowhere").is_none());
        assert_eq!(host.load_attempts(), 1);
    }

    #[test]
    fn test_loaded_worlds_in_load_order() {
        let host = InMemoryHost::new()
            .with_loaded(["lobby", "arena"])
            .with_available(["nether"]);
        host.load_world("nether");

        let names: Vec<String> = host
            .loaded_worlds()
            .iter()
            .map(|w| w.name().to_string())
            .collect();
        assert_eq!(names, ["lobby", "arena", "nether"]);

        host.unload("arena");
        assert_eq!(host.loaded_worlds().len(), 2);
    }
}
