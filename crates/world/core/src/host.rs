//! Contract consumed from the game server that hosts the plugin.
//!
//! The store never loads worlds itself. It asks the host through
//! [`HostGateway`]; the host may block on region I/O inside `load_world`, and
//! the store applies no timeout or retry around that call.

/// A live, loaded world owned by the host.
pub trait WorldHandle {
    /// Canonical world name. This is the key records are stored under.
    fn name(&self) -> &str;
}

/// World management exposed by the game server.
pub trait HostGateway {
    type World: WorldHandle;

    fn is_world_loaded(&self, name: &str) -> bool;

    /// Requests the world be loaded. Returns `false` if the host could not load it.
    fn load_world(&self, name: &str) -> bool;

    fn world_by_name(&self, name: &str) -> Option<Self::World>;

    /// Every currently loaded world, in the host's enumeration order.
    fn loaded_worlds(&self) -> Vec<Self::World>;
}

/// The two ways a caller can name a world when asking for its settings.
#[derive(Debug)]
pub enum WorldRef<'a, W> {
    /// A world name; the host is asked to load it if needed.
    Name(&'a str),
    /// An already loaded world.
    Handle(&'a W),
}

impl<W> Clone for WorldRef<'_, W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<W> Copy for WorldRef<'_, W> {}
