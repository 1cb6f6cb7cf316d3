//! Content stores - one repository per entity kind, with change notification.

mod ids;

pub use ids::*;

use std::collections::HashMap;

use card_model::{ContentItem, EntityId};

use crate::error::StoreError;

/// What a mutation did, delivered to every subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreChange {
    Created(EntityId),
    Updated(EntityId),
    Deleted(EntityId),
    /// The whole collection was replaced via [`ItemStore::load`].
    Loaded,
}

/// Handle returned by [`ItemStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&StoreChange)>;

/// In-memory repository for one entity kind, keyed by id.
///
/// All operations are synchronous and run on the single editor thread.
/// Readers get fresh snapshots ([`items`](ItemStore::items) clones), so a
/// snapshot never observes later store mutations. Every mutating operation
/// notifies subscribers; subscribers are plain callbacks registered once by
/// the composition root.
pub struct ItemStore<T: ContentItem> {
    records: HashMap<EntityId, T>,
    /// Insertion order of record ids; `items()` iterates in this order.
    order: Vec<EntityId>,
    ids: IdGenerator,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl<T: ContentItem> ItemStore<T> {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
            order: Vec::new(),
            ids: IdGenerator::new(T::ID_PREFIX),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Snapshot of all records in insertion order.
    pub fn items(&self) -> Vec<T> {
        self.order
            .iter()
            .filter_map(|id| self.records.get(id))
            .cloned()
            .collect()
    }

    /// Look up a record by id. Absence is not an error.
    pub fn get(&self, id: &EntityId) -> Option<&T> {
        self.records.get(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Insert a new record built from `draft` under a freshly generated id,
    /// and return it.
    pub fn create(&mut self, draft: T::Draft) -> T {
        let id = self.ids.next_id();
        let record = T::from_draft(id.clone(), draft);
        self.records.insert(id.clone(), record.clone());
        self.order.push(id.clone());
        self.notify(StoreChange::Created(id));
        record
    }

    /// Shallow-merge `patch` into the record with the given id.
    pub fn update(&mut self, id: &EntityId, patch: T::Patch) -> Result<(), StoreError> {
        let record = self
            .records
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound { id: id.clone() })?;
        record.merge(patch);
        self.notify(StoreChange::Updated(id.clone()));
        Ok(())
    }

    /// Remove and return the record with the given id.
    pub fn delete(&mut self, id: &EntityId) -> Result<T, StoreError> {
        let record = self
            .records
            .remove(id)
            .ok_or_else(|| StoreError::NotFound { id: id.clone() })?;
        self.order.retain(|existing| existing != id);
        self.notify(StoreChange::Deleted(id.clone()));
        Ok(record)
    }

    /// Atomically replace the entire collection (import/restore).
    pub fn load(&mut self, items: Vec<T>) {
        self.records.clear();
        self.order.clear();
        for item in items {
            let id = item.id().clone();
            if self.records.insert(id.clone(), item).is_none() {
                self.order.push(id);
            }
        }
        self.notify(StoreChange::Loaded);
    }

    /// Register a listener invoked on every mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false when the subscription is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, change: StoreChange) {
        tracing::debug!(kind = T::STORAGE_KEY, ?change, "store changed");
        for (_, listener) in &mut self.listeners {
            listener(&change);
        }
    }
}

impl<T: ContentItem> Default for ItemStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
