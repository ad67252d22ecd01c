//! Per-world combat settings shared by the store and the plugin around it.
//!
//! `world-core` defines the records a world-settings store keeps: one
//! [`WorldRecord`] per world, each owning a [`KnockbackSettings`] profile and
//! an optional [`PlayerPair`] scope. It also owns the two payload codecs
//! (current JSON schema and the legacy nested schema) and the
//! [`HostGateway`] contract through which the store talks to the game server.
//!
//! Nothing in this crate touches the filesystem; see `world-store` for that.
pub mod codec;
pub mod error;
pub mod host;
pub mod knockback;
pub mod player;
pub mod record;

pub use codec::{decode, decode_legacy, encode, try_decode, try_decode_legacy};
pub use error::DecodeError;
pub use host::{HostGateway, WorldHandle, WorldRef};
pub use knockback::KnockbackSettings;
pub use player::{PlayerId, PlayerPair};
pub use record::{KnockbackSource, WorldRecord};
