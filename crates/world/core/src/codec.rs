//! Payload codecs for world records.
//!
//! Two schemas exist:
//!
//! ```text
//! current (worlds.json entry)          legacy (config.yml `worlds:` entry)
//! {                                    attack-delay: 10
//!   "kbEnabled": true,                 knockback-xz: 0.4
//!   "kbInfo": {                        knockback-y: 0.4
//!     "xz-kb": 0.4,                    customkb: true
//!     "y-kb": 0.4,
//!     "speed": 10
//!   },
//!   "players": ["alice", "bob"]        (optional)
//! }
//! ```
//!
//! Both decoders take a `serde_json::Value`; the legacy importer converts its
//! YAML tree before calling in.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DecodeError;
use crate::knockback::KnockbackSettings;
use crate::player::PlayerPair;
use crate::record::{KnockbackSource, WorldRecord};

#[derive(Deserialize)]
struct WorldPayload {
    #[serde(rename = "kbEnabled")]
    enabled: bool,
    #[serde(rename = "kbInfo")]
    knockback: KnockbackSettings,
    #[serde(default)]
    players: Option<PlayerPair>,
}

#[derive(Serialize)]
struct WorldPayloadRef<'a> {
    #[serde(rename = "kbEnabled")]
    enabled: bool,
    #[serde(rename = "kbInfo")]
    knockback: &'a KnockbackSettings,
    #[serde(skip_serializing_if = "Option::is_none")]
    players: Option<&'a PlayerPair>,
}

#[derive(Deserialize)]
struct LegacyWorldPayload {
    #[serde(rename = "attack-delay")]
    attack_delay: f64,
    #[serde(rename = "knockback-xz")]
    horizontal: f64,
    #[serde(rename = "knockback-y")]
    vertical: f64,
    #[serde(rename = "customkb")]
    enabled: bool,
}

/// Decodes a current-schema payload, reporting why it was rejected.
pub fn try_decode(world_name: &str, payload: &Value) -> Result<WorldRecord, DecodeError> {
    if !payload.is_object() {
        return Err(DecodeError::NotAnObject {
            world: world_name.to_string(),
        });
    }

    let decoded =
        WorldPayload::deserialize(payload).map_err(|e| DecodeError::schema(world_name, e))?;

    let mut record = WorldRecord::new(world_name, decoded.enabled, decoded.knockback);
    record.set_scope_players(decoded.players);
    Ok(record)
}

/// Decodes a current-schema payload; `None` on any schema mismatch.
pub fn decode(world_name: &str, payload: &Value) -> Option<WorldRecord> {
    try_decode(world_name, payload).ok()
}

/// Decodes a legacy-schema payload, reporting why it was rejected.
///
/// The attack delay is truncated to whole ticks. Legacy payloads never carry a
/// player scope.
pub fn try_decode_legacy(world_name: &str, payload: &Value) -> Result<WorldRecord, DecodeError> {
    if !payload.is_object() {
        return Err(DecodeError::NotAnObject {
            world: world_name.to_string(),
        });
    }

    let legacy =
        LegacyWorldPayload::deserialize(payload).map_err(|e| DecodeError::schema(world_name, e))?;

    // Float-to-int `as` saturates: negatives become 0, NaN becomes 0.
    let knockback =
        KnockbackSettings::new(legacy.horizontal, legacy.vertical, legacy.attack_delay as u32);

    Ok(WorldRecord::new(world_name, legacy.enabled, knockback))
}

/// Decodes a legacy-schema payload; `None` if a required field is missing or mistyped.
pub fn decode_legacy(world_name: &str, payload: &Value) -> Option<WorldRecord> {
    try_decode_legacy(world_name, payload).ok()
}

/// Encodes a record in the current schema. The world name is the caller's map key
/// and is not part of the payload.
pub fn encode(record: &WorldRecord) -> serde_json::Result<Value> {
    serde_json::to_value(WorldPayloadRef {
        enabled: record.is_enabled(),
        knockback: record.knockback(),
        players: record.scope_players(),
    })
}
