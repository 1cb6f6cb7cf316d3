//! Editor session - the composition root.
//!
//! Owns the five content stores, the settings, the debounce scheduling, and
//! a blob-store handle, and wires them together: store subscriptions set
//! dirty flags, and the host loop pumps [`tick`](EditorSession::tick) so
//! bursts of edits coalesce into one deferred save and one deferred export.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use card_model::{
    ActionDescriptor, CardDescriptor, ContentItem, EntityId, EventDescriptor, ImageDescriptor,
    ParameterDescriptor,
};

use crate::debounce::Debouncer;
use crate::defaults;
use crate::error::{PersistError, StoreError};
use crate::export::{export_game_world, GameWorldDocument};
use crate::io::{cards_from_rows, CardRow, ContentBundle};
use crate::persist::{keys, read_blob, write_blob, BlobStore};
use crate::settings::{EditorSettings, SettingsPatch};
use crate::store::ItemStore;

/// The whole editing state of one content project.
///
/// Stores are public: the editing surface mutates them directly, and all
/// deferred persistence reacts through subscriptions. Everything runs on the
/// single editor thread.
pub struct EditorSession<B: BlobStore> {
    pub images: ItemStore<ImageDescriptor>,
    pub actions: ItemStore<ActionDescriptor>,
    pub parameters: ItemStore<ParameterDescriptor>,
    pub cards: ItemStore<CardDescriptor>,
    pub events: ItemStore<EventDescriptor>,
    settings: EditorSettings,
    blobs: B,
    save_debounce: Debouncer,
    export_debounce: Debouncer,
    save_dirty: Rc<Cell<bool>>,
    export_dirty: Rc<Cell<bool>>,
}

impl<B: BlobStore> EditorSession<B> {
    /// Create a session over the given blob store and restore whatever it
    /// holds; collections without usable blobs start from the built-in
    /// defaults.
    pub fn open(blobs: B) -> Self {
        let settings = EditorSettings::default();
        let mut session = Self {
            images: ItemStore::new(),
            actions: ItemStore::new(),
            parameters: ItemStore::new(),
            cards: ItemStore::new(),
            events: ItemStore::new(),
            save_debounce: Debouncer::new(Duration::from_millis(settings.save_delay)),
            export_debounce: Debouncer::new(Duration::from_millis(settings.export_delay)),
            settings,
            blobs,
            save_dirty: Rc::new(Cell::new(false)),
            export_dirty: Rc::new(Cell::new(false)),
        };
        session.wire_subscriptions();
        session.restore();
        session
    }

    /// Every content store schedules a save; only the stores the export reads
    /// (cards, events, images) schedule an export.
    fn wire_subscriptions(&mut self) {
        watch(&mut self.images, &[&self.save_dirty, &self.export_dirty]);
        watch(&mut self.cards, &[&self.save_dirty, &self.export_dirty]);
        watch(&mut self.events, &[&self.save_dirty, &self.export_dirty]);
        watch(&mut self.actions, &[&self.save_dirty]);
        watch(&mut self.parameters, &[&self.save_dirty]);
    }

    /// Reload every collection from the blob store, falling back to built-in
    /// defaults where a blob is missing or malformed. Clears the dirty flags:
    /// restoring is not an edit.
    pub fn restore(&mut self) {
        self.images
            .load(read_blob(&self.blobs, keys::IMAGES).unwrap_or_default());
        self.cards
            .load(read_blob(&self.blobs, keys::CARDS).unwrap_or_default());
        self.events
            .load(read_blob(&self.blobs, keys::EVENTS).unwrap_or_default());
        self.actions.load(
            read_blob(&self.blobs, keys::ACTIONS).unwrap_or_else(defaults::default_actions),
        );
        self.parameters.load(
            read_blob(&self.blobs, keys::PARAMETERS)
                .unwrap_or_else(defaults::default_parameters),
        );
        self.settings = read_blob(&self.blobs, keys::SETTINGS).unwrap_or_default();
        self.apply_delays();

        self.save_dirty.set(false);
        self.export_dirty.set(false);
        self.save_debounce.cancel();
        self.export_debounce.cancel();
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    /// Shallow-merge a settings patch and queue a save.
    pub fn update_settings(&mut self, patch: SettingsPatch) {
        self.settings.merge(patch);
        self.apply_delays();
        self.save_dirty.set(true);
    }

    fn apply_delays(&mut self) {
        self.save_debounce
            .set_delay(Duration::from_millis(self.settings.save_delay));
        self.export_debounce
            .set_delay(Duration::from_millis(self.settings.export_delay));
    }

    /// Delete a parameter, refusing system parameters.
    pub fn delete_parameter(&mut self, id: &EntityId) -> Result<ParameterDescriptor, StoreError> {
        if let Some(parameter) = self.parameters.get(id) {
            if parameter.system_parameter {
                return Err(StoreError::SystemParameter { id: id.clone() });
            }
        }
        self.parameters.delete(id)
    }

    /// Pump deferred work. Call periodically from the host loop with the
    /// current instant; a change schedules the corresponding debouncer, and a
    /// full quiet period later the save and/or export runs. Deferred write
    /// failures are logged and dropped, never retried.
    pub fn tick(&mut self, now: Instant) {
        if self.save_dirty.take() {
            self.save_debounce.schedule(now);
        }
        if self.export_dirty.take() {
            self.export_debounce.schedule(now);
        }

        if self.save_debounce.fire(now) {
            if let Err(err) = self.save_now() {
                tracing::warn!(%err, "deferred save failed");
            }
        }
        if self.export_debounce.fire(now) {
            if let Err(err) = self.export_now() {
                tracing::warn!(%err, "deferred export failed");
            }
        }
    }

    /// Write every collection and the settings to the blob store.
    pub fn save_now(&mut self) -> Result<(), PersistError> {
        write_blob(&mut self.blobs, keys::IMAGES, &self.images.items())?;
        write_blob(&mut self.blobs, keys::ACTIONS, &self.actions.items())?;
        write_blob(&mut self.blobs, keys::PARAMETERS, &self.parameters.items())?;
        write_blob(&mut self.blobs, keys::CARDS, &self.cards.items())?;
        write_blob(&mut self.blobs, keys::EVENTS, &self.events.items())?;
        write_blob(&mut self.blobs, keys::SETTINGS, &self.settings)?;
        Ok(())
    }

    /// Export the game world and write it under the configured target key.
    pub fn export_now(&mut self) -> Result<GameWorldDocument, PersistError> {
        let document = export_game_world(
            &self.cards.items(),
            &self.images.items(),
            &self.events.items(),
        );
        write_blob(
            &mut self.blobs,
            &keys::game_world(&self.settings.export_target_id),
            &document,
        )?;
        Ok(document)
    }

    /// Snapshot the authorable content for download.
    pub fn bundle(&self) -> ContentBundle {
        ContentBundle {
            images: self.images.items(),
            parameters: self.parameters.items(),
            cards: self.cards.items(),
            events: self.events.items(),
        }
    }

    /// Replace the content set with an uploaded bundle.
    pub fn load_bundle(&mut self, bundle: ContentBundle) {
        self.images.load(bundle.images);
        self.parameters.load(bundle.parameters);
        self.cards.load(bundle.cards);
        self.events.load(bundle.events);
    }

    /// Replace the card collection with imported spreadsheet rows.
    pub fn import_rows(&mut self, rows: &[CardRow]) {
        self.cards.load(cards_from_rows(rows));
    }

    pub fn blob_store(&self) -> &B {
        &self.blobs
    }
}

fn watch<T: ContentItem>(store: &mut ItemStore<T>, flags: &[&Rc<Cell<bool>>]) {
    for &flag in flags {
        let flag = Rc::clone(flag);
        store.subscribe(move |_| flag.set(true));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::MemoryBlobStore;
    use card_model::{CardDraft, CardType, EventDraft, ImageDraft, ParameterDraft, ParameterType};

    fn new_session() -> EditorSession<MemoryBlobStore> {
        EditorSession::open(MemoryBlobStore::new())
    }

    #[test]
    fn test_open_seeds_defaults_on_empty_storage() {
        let session = new_session();
        assert_eq!(session.parameters.len(), 5);
        assert_eq!(session.actions.len(), 2);
        assert!(session.cards.is_empty());
        assert_eq!(session.settings().export_target_id, "default");
    }

    #[test]
    fn test_card_edit_exports_after_a_quiet_period() {
        let mut session = new_session();
        let start = Instant::now();
        let delay = Duration::from_millis(session.settings().export_delay);

        session.cards.create(CardDraft::new("Riot"));
        session.tick(start);
        assert!(session
            .blobs
            .read(&keys::game_world("default"))
            .unwrap()
            .is_none());

        // Another edit inside the window supersedes the pending export.
        session.cards.create(CardDraft::new("Aftermath"));
        session.tick(start + delay / 2);
        session.tick(start + delay);
        assert!(session
            .blobs
            .read(&keys::game_world("default"))
            .unwrap()
            .is_none());

        session.tick(start + delay / 2 + delay);
        let payload = session
            .blobs
            .read(&keys::game_world("default"))
            .unwrap()
            .unwrap();
        let document: GameWorldDocument = serde_json::from_str(&payload).unwrap();
        assert_eq!(document.cards.len(), 2);
    }

    #[test]
    fn test_parameter_edit_saves_but_does_not_export() {
        let mut session = new_session();
        let start = Instant::now();
        let delay = Duration::from_millis(session.settings().save_delay);

        session
            .parameters
            .create(ParameterDraft::new("Popularity", ParameterType::Value));
        session.tick(start);
        session.tick(start + delay);

        assert!(session.blobs.read(keys::PARAMETERS).unwrap().is_some());
        assert!(session
            .blobs
            .read(&keys::game_world("default"))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_restore_round_trips_content() {
        let mut session = new_session();
        session.images.create(ImageDraft::new("Skyline", "http://x"));
        session.cards.create(CardDraft::new("Riot"));
        session.save_now().unwrap();

        let mut reopened = EditorSession::open(session.blobs.clone());
        assert_eq!(reopened.images.len(), 1);
        assert_eq!(reopened.cards.len(), 1);
        // A restore is not an edit: nothing is pending.
        reopened.tick(Instant::now() + Duration::from_secs(3600));
        assert!(reopened
            .blobs
            .read(&keys::game_world("default"))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_malformed_blob_falls_back_to_defaults() {
        let mut blobs = MemoryBlobStore::new();
        blobs.write(keys::PARAMETERS, "{definitely not json").unwrap();
        blobs.write(keys::CARDS, "[]").unwrap();

        let session = EditorSession::open(blobs);
        // Malformed parameters blob -> built-in defaults.
        assert_eq!(session.parameters.len(), 5);
        // Valid-but-empty cards blob stays genuinely empty.
        assert!(session.cards.is_empty());
    }

    #[test]
    fn test_system_parameters_cannot_be_deleted() {
        let mut session = new_session();
        let money = EntityId::from("money");

        assert_eq!(
            session.delete_parameter(&money),
            Err(StoreError::SystemParameter { id: money.clone() })
        );
        assert!(session.parameters.get(&money).is_some());

        let custom = session
            .parameters
            .create(ParameterDraft::new("Popularity", ParameterType::Value));
        assert!(session.delete_parameter(&custom.id).is_ok());
    }

    #[test]
    fn test_export_target_follows_settings() {
        let mut session = new_session();
        session.update_settings(SettingsPatch {
            export_target_id: Some("beta".to_string()),
            ..SettingsPatch::default()
        });

        session.export_now().unwrap();
        assert!(session
            .blobs
            .read(&keys::game_world("beta"))
            .unwrap()
            .is_some());
    }

    #[test]
    fn test_bundle_round_trip_through_upload() {
        let mut session = new_session();
        session.cards.create(CardDraft {
            card_type: CardType::Event,
            ..CardDraft::new("Aftermath")
        });
        session.events.create(EventDraft::new("Uprising"));

        let text = session.bundle().to_download_json().unwrap();

        let mut other = new_session();
        other.load_bundle(ContentBundle::from_json(&text).unwrap());
        assert_eq!(other.bundle(), session.bundle());
    }

    #[test]
    fn test_row_import_replaces_cards() {
        let mut session = new_session();
        session.cards.create(CardDraft::new("Old"));

        session.import_rows(&[CardRow {
            id: "r1".to_string(),
            name: "Imported".to_string(),
            ..CardRow::default()
        }]);

        let cards = session.cards.items();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].name, "Imported");
    }
}
