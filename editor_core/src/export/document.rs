//! The game-world document - the wire format the runtime engine consumes.
//!
//! This is a fixed external contract: field names and optionality must stay
//! exactly as the runtime expects them, independent of how the editor model
//! evolves.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use card_model::ModifierType;

/// Top-level exported document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameWorldDocument {
    /// Action-pool cards, one record per condition.
    pub cards: Vec<CardData>,
    /// Triggerable event definitions.
    pub events: Vec<WorldEvent>,
    /// Event-sequence cards keyed by id.
    pub event_cards: BTreeMap<String, EventCard>,
}

/// One drawable entry in the action pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardData {
    pub id: String,
    /// Resolved image URL; empty when the card's image reference dangles.
    pub image: String,
    pub title: String,
    pub text: String,
    pub weight: f64,
    pub distance: String,
    pub is_available_when: Vec<WorldQuery>,
    pub actions: CardActions,
}

/// The two swipe directions of a pool card.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CardActions {
    pub left: CardActionData,
    pub right: CardActionData,
}

/// A card in an event sequence, reached by link rather than drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCard {
    pub id: String,
    pub image: String,
    pub title: String,
    pub text: String,
    pub weight: f64,
    pub distance: String,
    pub actions: EventCardActions,
}

/// The two swipe directions of an event card.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EventCardActions {
    pub left: EventCardActionData,
    pub right: EventCardActionData,
}

/// A triggerable narrative arc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldEvent {
    pub probability: f64,
    pub should_trigger_when: Vec<WorldQuery>,
    pub initial_event_card_id: String,
}

/// Eligibility query over world state.
///
/// Every exported query constrains the four standard parameters; additional
/// parameter ids pass through from the authored condition. `flags` is absent
/// (not empty) on synthesized default queries.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldQuery {
    pub state: BTreeMap<String, [f64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<BTreeMap<String, bool>>,
}

/// Payload of a pool-card action.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CardActionData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub modifier: ActionModifier,
}

/// Payload of an event-card action, with the optional forward link.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCardActionData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub modifier: ActionModifier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_event_card_id: Option<String>,
}

/// World-state change applied when an action is chosen.
///
/// The neutral default action serializes as `{"modifier": {}}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ActionModifier {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub modifier_type: Option<ModifierType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<BTreeMap<String, f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<BTreeMap<String, bool>>,
}
