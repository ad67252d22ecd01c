//! Settings record for one world.

use crate::knockback::KnockbackSettings;
use crate::player::{PlayerId, PlayerPair};

/// Anything that carries a knockback profile and decides whether a pair of
/// players may use it.
pub trait KnockbackSource {
    fn knockback(&self) -> &KnockbackSettings;

    /// Whether `player`, struck by `attacker`, should receive this profile.
    fn can_use_knockback(&self, player: &PlayerId, attacker: &PlayerId) -> bool;
}

/// One world's combat settings.
///
/// `world_id` is the world's canonical name and the key under which the store
/// keeps the record.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldRecord {
    world_id: String,
    enabled: bool,
    knockback: KnockbackSettings,
    scope_players: Option<PlayerPair>,
}

impl WorldRecord {
    pub fn new(world_id: impl Into<String>, enabled: bool, knockback: KnockbackSettings) -> Self {
        Self {
            world_id: world_id.into(),
            enabled,
            knockback,
            scope_players: None,
        }
    }

    /// Record created for a world seen for the first time: enabled, default
    /// knockback, no player scope.
    pub fn with_default(world_id: impl Into<String>) -> Self {
        Self::new(world_id, true, KnockbackSettings::default())
    }

    pub fn with_scope(mut self, scope: PlayerPair) -> Self {
        self.scope_players = Some(scope);
        self
    }

    pub fn world_id(&self) -> &str {
        &self.world_id
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn knockback_mut(&mut self) -> &mut KnockbackSettings {
        &mut self.knockback
    }

    pub fn scope_players(&self) -> Option<&PlayerPair> {
        self.scope_players.as_ref()
    }

    pub fn set_scope_players(&mut self, scope: Option<PlayerPair>) {
        self.scope_players = scope;
    }

    /// True iff a scope is set and it is exactly `{a, b}`.
    pub fn matches(&self, a: &PlayerId, b: &PlayerId) -> bool {
        self.scope_players
            .as_ref()
            .is_some_and(|scope| scope.matches(a, b))
    }
}

impl KnockbackSource for WorldRecord {
    fn knockback(&self) -> &KnockbackSettings {
        &self.knockback
    }

    fn can_use_knockback(&self, player: &PlayerId, attacker: &PlayerId) -> bool {
        self.enabled && self.matches(player, attacker)
    }
}
