//! Action descriptors and per-card action payloads.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::identity::{ContentItem, EntityId};

/// An available action slot (e.g. "Left", "Right").
///
/// A small, mostly static reference list; regular authoring flows never
/// create or remove these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionDescriptor {
    pub id: EntityId,
    pub name: String,
}

impl ActionDescriptor {
    /// Create a descriptor with a slug id derived from its name.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: EntityId::slug(&name),
            name,
        }
    }
}

/// An action record minus its id.
#[derive(Debug, Clone, Default)]
pub struct ActionDraft {
    pub name: String,
}

/// Partial action record for shallow-merge updates.
#[derive(Debug, Clone, Default)]
pub struct ActionPatch {
    pub name: Option<String>,
}

impl ContentItem for ActionDescriptor {
    const ID_PREFIX: &'static str = "action";
    const STORAGE_KEY: &'static str = "actions";

    type Draft = ActionDraft;
    type Patch = ActionPatch;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn from_draft(id: EntityId, draft: ActionDraft) -> Self {
        Self {
            id,
            name: draft.name,
        }
    }

    fn merge(&mut self, patch: ActionPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
    }
}

/// How an action's values apply to the world state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ModifierType {
    #[default]
    Add,
    Set,
    Replace,
}

/// What happens to world parameters when a card's action is chosen.
///
/// `next_card_id` is meaningful only on event-type cards, where it links to
/// the next card in the event sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionData {
    /// References an [`ActionDescriptor`]; the reference may dangle.
    pub action_id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub modifier_type: ModifierType,
    #[serde(default)]
    pub values: BTreeMap<EntityId, f64>,
    #[serde(default)]
    pub flags: BTreeMap<EntityId, bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_card_id: Option<EntityId>,
}

impl ActionData {
    /// Create an empty add-modifier payload for the given action slot.
    pub fn new(action_id: impl Into<EntityId>) -> Self {
        Self {
            action_id: action_id.into(),
            description: None,
            modifier_type: ModifierType::Add,
            values: BTreeMap::new(),
            flags: BTreeMap::new(),
            next_card_id: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_modifier_type(mut self, modifier_type: ModifierType) -> Self {
        self.modifier_type = modifier_type;
        self
    }

    pub fn with_value(mut self, parameter: impl Into<EntityId>, value: f64) -> Self {
        self.values.insert(parameter.into(), value);
        self
    }

    pub fn with_flag(mut self, parameter: impl Into<EntityId>, value: bool) -> Self {
        self.flags.insert(parameter.into(), value);
        self
    }

    pub fn with_next_card(mut self, card: impl Into<EntityId>) -> Self {
        self.next_card_id = Some(card.into());
        self
    }
}
