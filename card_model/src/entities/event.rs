//! Event descriptors - triggerable narrative arcs.

use serde::{Deserialize, Serialize};

use super::CardCondition;
use crate::identity::{ContentItem, EntityId};

/// A triggerable narrative arc entry point.
///
/// When its conditions are satisfied the event is chosen with probability
/// proportional to `weight`, and play continues from `initial_card_id` (an
/// event-type card). An event without an initial card is inert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDescriptor {
    pub id: EntityId,
    pub name: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
    #[serde(default)]
    pub conditions: Vec<CardCondition>,
    /// References a [`super::CardDescriptor`] of event type; may dangle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_card_id: Option<EntityId>,
}

fn default_weight() -> f64 {
    1.0
}

/// An event record minus its id.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub name: String,
    pub weight: f64,
    pub conditions: Vec<CardCondition>,
    pub initial_card_id: Option<EntityId>,
}

impl Default for EventDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            weight: default_weight(),
            conditions: Vec::new(),
            initial_card_id: None,
        }
    }
}

impl EventDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_initial_card(mut self, card: impl Into<EntityId>) -> Self {
        self.initial_card_id = Some(card.into());
        self
    }
}

/// Partial event record for shallow-merge updates.
#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    pub name: Option<String>,
    pub weight: Option<f64>,
    pub conditions: Option<Vec<CardCondition>>,
    pub initial_card_id: Option<Option<EntityId>>,
}

impl ContentItem for EventDescriptor {
    const ID_PREFIX: &'static str = "event";
    const STORAGE_KEY: &'static str = "events";

    type Draft = EventDraft;
    type Patch = EventPatch;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn from_draft(id: EntityId, draft: EventDraft) -> Self {
        Self {
            id,
            name: draft.name,
            weight: draft.weight,
            conditions: draft.conditions,
            initial_card_id: draft.initial_card_id,
        }
    }

    fn merge(&mut self, patch: EventPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(weight) = patch.weight {
            self.weight = weight;
        }
        if let Some(conditions) = patch.conditions {
            self.conditions = conditions;
        }
        if let Some(initial_card_id) = patch.initial_card_id {
            self.initial_card_id = initial_card_id;
        }
    }
}
