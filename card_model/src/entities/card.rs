//! Card descriptors - the units of narrative content.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ActionData;
use crate::identity::{ContentItem, EntityId};

/// How a card enters play.
///
/// Action cards are drawn from the general pool, filtered by their
/// conditions. Event cards are reachable only through an event's initial-card
/// pointer or another event card's `next_card_id` link, and are excluded from
/// the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    #[default]
    Action,
    Event,
}

/// An eligibility predicate over world parameters, plus a selection weight.
///
/// The content is eligible when every referenced numeric parameter's current
/// value falls inside its `[min, max]` range and every referenced flag equals
/// the given boolean. A parameter absent from both maps is unconstrained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardCondition {
    pub weight: f64,
    #[serde(default)]
    pub values: BTreeMap<EntityId, [f64; 2]>,
    #[serde(default)]
    pub flags: BTreeMap<EntityId, bool>,
}

impl Default for CardCondition {
    fn default() -> Self {
        Self {
            weight: 0.0,
            values: BTreeMap::new(),
            flags: BTreeMap::new(),
        }
    }
}

impl CardCondition {
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_range(mut self, parameter: impl Into<EntityId>, min: f64, max: f64) -> Self {
        self.values.insert(parameter.into(), [min, max]);
        self
    }

    pub fn with_flag(mut self, parameter: impl Into<EntityId>, value: bool) -> Self {
        self.flags.insert(parameter.into(), value);
        self
    }

    /// Shallow-merge a partial condition. Map fields replace wholesale.
    pub fn merge(&mut self, patch: ConditionPatch) {
        if let Some(weight) = patch.weight {
            self.weight = weight;
        }
        if let Some(values) = patch.values {
            self.values = values;
        }
        if let Some(flags) = patch.flags {
            self.flags = flags;
        }
    }
}

/// Partial condition for in-place edits.
#[derive(Debug, Clone, Default)]
pub struct ConditionPatch {
    pub weight: Option<f64>,
    pub values: Option<BTreeMap<EntityId, [f64; 2]>>,
    pub flags: Option<BTreeMap<EntityId, bool>>,
}

/// A unit of narrative content presented to the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDescriptor {
    pub id: EntityId,
    pub name: String,
    /// References an [`super::ImageDescriptor`]; the reference may dangle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_id: Option<EntityId>,
    #[serde(rename = "type", default)]
    pub card_type: CardType,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
    #[serde(default)]
    pub conditions: Vec<CardCondition>,
    /// At most one entry per distinct `action_id`.
    #[serde(default)]
    pub actions: Vec<ActionData>,
}

fn default_weight() -> f64 {
    1.0
}

/// A card record minus its id.
#[derive(Debug, Clone)]
pub struct CardDraft {
    pub name: String,
    pub image_id: Option<EntityId>,
    pub card_type: CardType,
    pub location: String,
    pub text: String,
    pub weight: f64,
    pub conditions: Vec<CardCondition>,
    pub actions: Vec<ActionData>,
}

impl Default for CardDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            image_id: None,
            card_type: CardType::Action,
            location: String::new(),
            text: String::new(),
            weight: default_weight(),
            conditions: Vec::new(),
            actions: Vec::new(),
        }
    }
}

impl CardDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Partial card record for shallow-merge updates.
///
/// `image_id` is doubly optional so a patch can distinguish "leave the image
/// alone" from "clear the image".
#[derive(Debug, Clone, Default)]
pub struct CardPatch {
    pub name: Option<String>,
    pub image_id: Option<Option<EntityId>>,
    pub card_type: Option<CardType>,
    pub location: Option<String>,
    pub text: Option<String>,
    pub weight: Option<f64>,
    pub conditions: Option<Vec<CardCondition>>,
    pub actions: Option<Vec<ActionData>>,
}

impl ContentItem for CardDescriptor {
    const ID_PREFIX: &'static str = "card";
    const STORAGE_KEY: &'static str = "cards";

    type Draft = CardDraft;
    type Patch = CardPatch;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn from_draft(id: EntityId, draft: CardDraft) -> Self {
        Self {
            id,
            name: draft.name,
            image_id: draft.image_id,
            card_type: draft.card_type,
            location: draft.location,
            text: draft.text,
            weight: draft.weight,
            conditions: draft.conditions,
            actions: draft.actions,
        }
    }

    fn merge(&mut self, patch: CardPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(image_id) = patch.image_id {
            self.image_id = image_id;
        }
        if let Some(card_type) = patch.card_type {
            self.card_type = card_type;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(text) = patch.text {
            self.text = text;
        }
        if let Some(weight) = patch.weight {
            self.weight = weight;
        }
        if let Some(conditions) = patch.conditions {
            self.conditions = conditions;
        }
        if let Some(actions) = patch.actions {
            self.actions = actions;
        }
    }
}
