//! Knockback profile applied when one player hits another.

use serde::{Deserialize, Serialize};

/// Knockback tuning for a single world.
///
/// Serialized as the `kbInfo` object of the current schema:
/// `{"xz-kb": 0.4, "y-kb": 0.4, "speed": 10}`. All three keys are required.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct KnockbackSettings {
    /// Horizontal (x/z plane) knockback strength.
    #[serde(rename = "xz-kb")]
    pub horizontal: f64,

    /// Vertical (y axis) knockback strength.
    #[serde(rename = "y-kb")]
    pub vertical: f64,

    /// Ticks a player must wait between successive hits.
    #[serde(rename = "speed")]
    pub attack_delay: u32,
}

impl KnockbackSettings {
    pub const DEFAULT_HORIZONTAL: f64 = 0.4;
    pub const DEFAULT_VERTICAL: f64 = 0.4;
    pub const DEFAULT_ATTACK_DELAY: u32 = 10;

    pub const fn new(horizontal: f64, vertical: f64, attack_delay: u32) -> Self {
        Self {
            horizontal,
            vertical,
            attack_delay,
        }
    }
}

impl Default for KnockbackSettings {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_HORIZONTAL,
            Self::DEFAULT_VERTICAL,
            Self::DEFAULT_ATTACK_DELAY,
        )
    }
}
