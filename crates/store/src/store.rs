//! The per-world settings store.

use std::collections::BTreeMap;
use std::sync::Arc;

use world_core::{
    HostGateway, KnockbackSettings, KnockbackSource, PlayerId, WorldHandle, WorldRecord, WorldRef,
    codec,
};

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::legacy::LegacyImporter;
use crate::repository::{Document, FileSettingsRepository, SettingsRepository};

/// World settings keyed by world name.
///
/// Created once when the plugin starts and handed to whatever needs world
/// settings. All methods run on the host's main thread; mutating methods take
/// `&mut self`, so sharing across threads requires an outer lock.
///
/// # Reads
///
/// - [`lookup`](Self::lookup) never mutates.
/// - [`get_or_create_default`](Self::get_or_create_default),
///   [`get_world`](Self::get_world) and [`get_all_worlds`](Self::get_all_worlds)
///   insert a default record for any world not seen before.
///
/// Records are iterated in world-name order.
pub struct WorldStore<H: HostGateway> {
    records: BTreeMap<String, WorldRecord>,
    repository: Box<dyn SettingsRepository>,
    host: Arc<H>,
}

impl<H: HostGateway> WorldStore<H> {
    /// Open the store at `config.backing_path()`, importing
    /// `config.legacy_path()` if the backing file does not exist yet.
    pub fn open(config: &StoreConfig, host: Arc<H>) -> Result<Self> {
        let repository = FileSettingsRepository::new(config.backing_path());
        let legacy = LegacyImporter::new(config.legacy_path());
        Self::with_repository(Box::new(repository), Some(legacy), host)
    }

    /// Open the store over any repository.
    pub fn with_repository(
        repository: Box<dyn SettingsRepository>,
        legacy: Option<LegacyImporter>,
        host: Arc<H>,
    ) -> Result<Self> {
        let mut store = Self {
            records: BTreeMap::new(),
            repository,
            host,
        };
        store.load(legacy.as_ref())?;
        Ok(store)
    }

    fn load(&mut self, legacy: Option<&LegacyImporter>) -> Result<()> {
        let document = self.repository.read().map_err(|source| StoreError::Load {
            location: self.repository.location(),
            source,
        })?;

        match document {
            Some(document) => {
                let mut skipped = 0;
                for (world_name, payload) in &document {
                    match codec::try_decode(world_name, payload) {
                        Ok(record) => self.insert(record),
                        Err(e) => {
                            skipped += 1;
                            tracing::warn!("Skipping world entry: {}", e);
                        }
                    }
                }

                tracing::info!(
                    "Loaded {} world records from {} ({} skipped)",
                    self.records.len(),
                    self.repository.location(),
                    skipped
                );
            }
            None => {
                if let Some(legacy) = legacy {
                    for record in legacy.import() {
                        self.insert(record);
                    }
                }

                // Write immediately so imported records survive a restart and the
                // legacy file is not consulted again.
                self.save()?;

                tracing::info!(
                    "Created {} with {} world records",
                    self.repository.location(),
                    self.records.len()
                );
            }
        }

        Ok(())
    }

    fn insert(&mut self, record: WorldRecord) {
        self.records.insert(record.world_id().to_string(), record);
    }

    /// The stored record for `world_id`, without creating one.
    pub fn lookup(&self, world_id: &str) -> Option<&WorldRecord> {
        self.records.get(world_id)
    }

    /// The stored record for `world_id`, inserting an enabled, unscoped record
    /// with default knockback if there is none.
    pub fn get_or_create_default(&mut self, world_id: &str) -> &WorldRecord {
        if !self.records.contains_key(world_id) {
            tracing::debug!("Creating default settings for world '{}'", world_id);
            self.insert(WorldRecord::with_default(world_id));
        }
        &self.records[world_id]
    }

    /// Settings for a world given by name or by live handle.
    ///
    /// A name is loaded through the host first if needed; if the host cannot
    /// load it, returns `None` and leaves the store untouched. Otherwise
    /// behaves like [`get_or_create_default`](Self::get_or_create_default)
    /// for the world's canonical name.
    pub fn get_world(&mut self, world: WorldRef<'_, H::World>) -> Option<&WorldRecord> {
        match world {
            WorldRef::Handle(handle) => Some(self.get_or_create_default(handle.name())),
            WorldRef::Name(name) => {
                if !self.host.is_world_loaded(name) && !self.host.load_world(name) {
                    tracing::debug!("World '{}' is unavailable", name);
                    return None;
                }

                let Some(handle) = self.host.world_by_name(name) else {
                    tracing::debug!("World '{}' reported loaded but has no handle", name);
                    return None;
                };
                Some(self.get_or_create_default(handle.name()))
            }
        }
    }

    /// First record whose player scope is exactly `{a, b}`.
    ///
    /// Unscoped records never match. Overlapping scopes resolve to the first
    /// record in world-name order.
    pub fn get_world_for_players(&self, a: &PlayerId, b: &PlayerId) -> Option<&WorldRecord> {
        self.records.values().find(|record| record.matches(a, b))
    }

    /// Knockback for `player` being hit by `attacker`: the profile of the first
    /// enabled record scoped to the pair.
    pub fn knockback_for(
        &self,
        player: &PlayerId,
        attacker: &PlayerId,
    ) -> Option<&KnockbackSettings> {
        self.records
            .values()
            .find(|record| record.can_use_knockback(player, attacker))
            .map(|record| record.knockback())
    }

    /// Settings for every world the host currently has loaded, in the host's
    /// order. Creates default records for loaded worlds not seen before.
    pub fn get_all_worlds(&mut self) -> Vec<&WorldRecord> {
        let names: Vec<String> = self
            .host
            .loaded_worlds()
            .iter()
            .map(|world| world.name().to_string())
            .collect();

        for name in &names {
            self.get_or_create_default(name);
        }

        names
            .iter()
            .filter_map(|name| self.records.get(name.as_str()))
            .collect()
    }

    /// Replace the stored record with the same world id.
    ///
    /// Returns `false` and stores nothing if the world is unknown. Changes stay
    /// in memory until [`save`](Self::save).
    pub fn update_world(&mut self, record: WorldRecord) -> bool {
        match self.records.get_mut(record.world_id()) {
            Some(stored) => {
                *stored = record;
                true
            }
            None => {
                tracing::debug!(
                    "Ignoring update for unknown world '{}'",
                    record.world_id()
                );
                false
            }
        }
    }

    /// Write every record to the backing repository.
    pub fn save(&self) -> Result<()> {
        let mut document = Document::new();
        for (world_name, record) in &self.records {
            let payload = codec::encode(record).map_err(|source| StoreError::Encode {
                world: world_name.clone(),
                source,
            })?;
            document.insert(world_name.clone(), payload);
        }

        self.repository
            .write(&document)
            .map_err(|source| StoreError::Save {
                location: self.repository.location(),
                source,
            })?;

        tracing::debug!(
            "Saved {} world records to {}",
            document.len(),
            self.repository.location()
        );

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Known world ids, in iteration order.
    pub fn world_ids(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn host(&self) -> &Arc<H> {
        &self.host
    }

    pub fn location(&self) -> String {
        self.repository.location()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{InMemoryHost, InMemoryWorld};
    use crate::repository::InMemorySettingsRepository;
    use serde_json::{Value, json};
    use world_core::PlayerPair;

    fn document(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    fn store_with(doc: Value, host: InMemoryHost) -> WorldStore<InMemoryHost> {
        let repo = InMemorySettingsRepository::with_document(document(doc));
        WorldStore::with_repository(Box::new(repo), None, Arc::new(host)).unwrap()
    }

    fn scoped(world: &str, a: &str, b: &str) -> WorldRecord {
        WorldRecord::with_default(world).with_scope(PlayerPair::new(a.into(), b.into()).unwrap())
    }

    #[test]
    fn test_load_decodes_entries() {
        let store = store_with(
            json!({
                "arena": {"kbEnabled": false, "kbInfo": {"xz-kb": 0.3, "y-kb": 0.5, "speed": 6}}
            }),
            InMemoryHost::new(),
        );

        let record = store.lookup("arena").unwrap();
        assert!(!record.is_enabled());
        assert_eq!(*record.knockback(), KnockbackSettings::new(0.3, 0.5, 6));
    }

    #[test]
    fn test_lookup_does_not_create() {
        let mut store = store_with(json!({}), InMemoryHost::new());
        assert!(store.lookup("lobby").is_none());
        assert!(store.is_empty());

        store.get_or_create_default("lobby");
        assert!(store.lookup("lobby").is_some());
    }

    #[test]
    fn test_handle_creates_default() {
        let mut store = store_with(json!({}), InMemoryHost::new());
        let world = InMemoryWorld::new("lobby");

        let record = store.get_world(WorldRef::Handle(&world)).unwrap();
        assert_eq!(*record, WorldRecord::with_default("lobby"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_name_loads_through_host() {
        let host = InMemoryHost::new().with_available(["nether"]);
        let mut store = store_with(json!({}), host);

        assert!(store.get_world(WorldRef::Name("nether")).is_some());
        assert!(store.host().is_world_loaded("nether"));
        assert_eq!(store.host().load_attempts(), 1);

        // Already loaded: no second load request.
        assert!(store.get_world(WorldRef::Name("nether")).is_some());
        assert_eq!(store.host().load_attempts(), 1);
    }

    #[test]
    fn test_unavailable_world_leaves_store_untouched() {
        let mut store = store_with(json!({}), InMemoryHost::new());
        assert!(store.get_world(WorldRef::Name("missing")).is_none());
        assert!(store.is_empty());
    }

    /// Host that claims every world is loaded but never hands one out.
    struct HandlelessHost;

    impl HostGateway for HandlelessHost {
        type World = InMemoryWorld;

        fn is_world_loaded(&self, _name: &str) -> bool {
            true
        }

        fn load_world(&self, _name: &str) -> bool {
            true
        }

        fn world_by_name(&self, _name: &str) -> Option<InMemoryWorld> {
            None
        }

        fn loaded_worlds(&self) -> Vec<InMemoryWorld> {
            Vec::new()
        }
    }

    #[test]
    fn test_loaded_world_without_handle_leaves_store_untouched() {
        let repo = InMemorySettingsRepository::with_document(Document::new());
        let mut store =
            WorldStore::with_repository(Box::new(repo), None, Arc::new(HandlelessHost)).unwrap();

        assert!(store.get_world(WorldRef::Name("ghost")).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_update_world_replaces_only() {
        let mut store = store_with(json!({}), InMemoryHost::new());

        let mut unknown = WorldRecord::with_default("arena");
        unknown.set_enabled(false);
        assert!(!store.update_world(unknown.clone()));
        assert!(store.lookup("arena").is_none());

        store.get_or_create_default("arena");
        assert!(store.update_world(unknown));
        assert!(!store.lookup("arena").unwrap().is_enabled());
    }

    #[test]
    fn test_knockback_for_skips_disabled() {
        let mut store = store_with(json!({}), InMemoryHost::new());
        store.get_or_create_default("a-duel");
        store.get_or_create_default("b-duel");

        let mut disabled = scoped("a-duel", "alice", "bob");
        disabled.set_enabled(false);
        store.update_world(disabled);

        let mut enabled = scoped("b-duel", "alice", "bob");
        enabled.knockback_mut().horizontal = 0.9;
        store.update_world(enabled);

        let alice = PlayerId::from("alice");
        let bob = PlayerId::from("bob");

        assert_eq!(
            store.get_world_for_players(&alice, &bob).unwrap().world_id(),
            "a-duel"
        );
        assert_eq!(store.knockback_for(&alice, &bob).unwrap().horizontal, 0.9);
        assert!(store.knockback_for(&alice, &PlayerId::from("carol")).is_none());
    }

    #[test]
    fn test_save_writes_document() {
        let repo = Arc::new(InMemorySettingsRepository::new());
        let mut store = WorldStore::with_repository(
            Box::new(repo.clone()),
            None,
            Arc::new(InMemoryHost::new()),
        )
        .unwrap();

        // Absent document is created on open.
        assert_eq!(repo.snapshot(), Some(Document::new()));

        store.get_or_create_default("lobby");
        store.save().unwrap();

        assert_eq!(
            repo.snapshot().unwrap().get("lobby"),
            Some(&json!({"kbEnabled": true, "kbInfo": {"xz-kb": 0.4, "y-kb": 0.4, "speed": 10}}))
        );
    }
}
