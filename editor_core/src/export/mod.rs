//! Export pipeline - transforms the editor content graph into the game-world
//! document.
//!
//! A pure function of store snapshots:
//!
//! 1. Action-type cards fan out into one pool record per condition (or one
//!    default-filled record when unconditioned, so the card stays reachable)
//! 2. Event-type cards become event-sequence cards keyed by id
//! 3. Events with an initial card become world events; the rest are skipped
//!
//! Cross-references resolve leniently: a dangling image id exports as an
//! empty source, a missing left/right action as the neutral default.

mod document;

pub use document::*;

use std::collections::BTreeMap;

use card_model::{
    ActionData, CardCondition, CardDescriptor, CardType, EntityId, EventDescriptor,
    ImageDescriptor,
};

/// Parameter ids every exported query constrains by default.
pub const STANDARD_STATE_KEYS: [&str; 4] = ["environment", "people", "security", "money"];

/// The unconstrained range for a standard parameter.
pub const FULL_RANGE: [f64; 2] = [0.0, 100.0];

/// Build the exported document from content snapshots.
pub fn export_game_world(
    cards: &[CardDescriptor],
    images: &[ImageDescriptor],
    events: &[EventDescriptor],
) -> GameWorldDocument {
    let mut document = GameWorldDocument::default();

    for card in cards {
        match card.card_type {
            CardType::Action => document.cards.extend(export_action_card(card, images)),
            CardType::Event => {
                document
                    .event_cards
                    .insert(card.id.to_string(), export_event_card(card, images));
            }
        }
    }
    document.events = events.iter().filter_map(export_world_event).collect();

    tracing::info!(
        cards = document.cards.len(),
        events = document.events.len(),
        event_cards = document.event_cards.len(),
        "exported game world"
    );
    document
}

/// One pool record per condition; a single default-filled record when the
/// card has none.
fn export_action_card(card: &CardDescriptor, images: &[ImageDescriptor]) -> Vec<CardData> {
    let image = resolve_image(card.image_id.as_ref(), images);
    let left = export_action(find_side(&card.actions, "left"));
    let right = export_action(find_side(&card.actions, "right"));

    let record = |id: String, weight: f64, query: WorldQuery| CardData {
        id,
        image: image.clone(),
        title: card.name.clone(),
        text: card.text.clone(),
        weight,
        distance: card.location.clone(),
        is_available_when: vec![query],
        actions: CardActions {
            left: left.clone(),
            right: right.clone(),
        },
    };

    if card.conditions.is_empty() {
        return vec![record(card.id.to_string(), card.weight, default_query())];
    }

    card.conditions
        .iter()
        .enumerate()
        .map(|(index, condition)| {
            record(
                format!("{}_{index}", card.id),
                condition.weight,
                export_condition(condition),
            )
        })
        .collect()
}

fn export_event_card(card: &CardDescriptor, images: &[ImageDescriptor]) -> EventCard {
    EventCard {
        id: card.id.to_string(),
        image: resolve_image(card.image_id.as_ref(), images),
        title: card.name.clone(),
        text: card.text.clone(),
        weight: card.weight,
        distance: card.location.clone(),
        actions: EventCardActions {
            left: export_event_action(find_side(&card.actions, "left")),
            right: export_event_action(find_side(&card.actions, "right")),
        },
    }
}

/// Events without an initial card produce nothing.
fn export_world_event(event: &EventDescriptor) -> Option<WorldEvent> {
    let initial = event.initial_card_id.as_ref()?;

    let should_trigger_when = if event.conditions.is_empty() {
        vec![default_query()]
    } else {
        event.conditions.iter().map(export_condition).collect()
    };

    Some(WorldEvent {
        probability: event.weight,
        should_trigger_when,
        initial_event_card_id: initial.to_string(),
    })
}

/// Standard ranges default to [0,100], overridden per key by the authored
/// values; flags pass through as-is.
fn export_condition(condition: &CardCondition) -> WorldQuery {
    let mut state = standard_state();
    for (parameter, range) in &condition.values {
        state.insert(parameter.to_string(), *range);
    }

    WorldQuery {
        state,
        flags: Some(
            condition
                .flags
                .iter()
                .map(|(parameter, value)| (parameter.to_string(), *value))
                .collect(),
        ),
    }
}

/// The maximal query used when a card or event has no conditions at all.
fn default_query() -> WorldQuery {
    WorldQuery {
        state: standard_state(),
        flags: None,
    }
}

fn standard_state() -> BTreeMap<String, [f64; 2]> {
    STANDARD_STATE_KEYS
        .iter()
        .map(|key| (key.to_string(), FULL_RANGE))
        .collect()
}

/// Resolve an image reference to its source URL. Absent or dangling
/// references resolve to the empty string.
fn resolve_image(image_id: Option<&EntityId>, images: &[ImageDescriptor]) -> String {
    image_id
        .and_then(|id| images.iter().find(|image| &image.id == id))
        .map(|image| image.src.clone())
        .unwrap_or_default()
}

/// Match an action slot by id, case-insensitively.
fn find_side<'a>(actions: &'a [ActionData], side: &str) -> Option<&'a ActionData> {
    actions
        .iter()
        .find(|action| action.action_id.as_str().eq_ignore_ascii_case(side))
}

fn export_action(action: Option<&ActionData>) -> CardActionData {
    let Some(action) = action else {
        return CardActionData::default();
    };
    CardActionData {
        description: action.description.clone(),
        modifier: export_modifier(action),
    }
}

fn export_event_action(action: Option<&ActionData>) -> EventCardActionData {
    let Some(action) = action else {
        return EventCardActionData::default();
    };
    EventCardActionData {
        description: action.description.clone(),
        modifier: export_modifier(action),
        next_event_card_id: action.next_card_id.as_ref().map(EntityId::to_string),
    }
}

fn export_modifier(action: &ActionData) -> ActionModifier {
    ActionModifier {
        modifier_type: Some(action.modifier_type),
        state: Some(
            action
                .values
                .iter()
                .map(|(parameter, value)| (parameter.to_string(), *value))
                .collect(),
        ),
        flags: Some(
            action
                .flags
                .iter()
                .map(|(parameter, value)| (parameter.to_string(), *value))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use card_model::{CardDraft, ContentItem, EventDraft, ModifierType};

    fn card(draft: CardDraft) -> CardDescriptor {
        CardDescriptor::from_draft(EntityId::from("c1"), draft)
    }

    fn image() -> ImageDescriptor {
        ImageDescriptor {
            id: EntityId::from("img1"),
            name: "img1".to_string(),
            src: "http://x/y.png".to_string(),
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_conditionless_action_card_gets_one_default_record() {
        let card = card(CardDraft::new("Riot"));
        let document = export_game_world(&[card], &[], &[]);

        assert_eq!(document.cards.len(), 1);
        let record = &document.cards[0];
        assert_eq!(record.id, "c1");
        assert_eq!(record.is_available_when.len(), 1);

        let query = &record.is_available_when[0];
        assert!(query.flags.is_none());
        for key in STANDARD_STATE_KEYS {
            assert_eq!(query.state[key], FULL_RANGE);
        }
        assert_eq!(query.state.len(), STANDARD_STATE_KEYS.len());
    }

    #[test]
    fn test_one_record_per_condition_with_own_weight() {
        let card = card(CardDraft {
            conditions: vec![
                CardCondition::default().with_weight(0.5),
                CardCondition::default()
                    .with_weight(2.0)
                    .with_range("money", 30.0, 60.0),
            ],
            ..CardDraft::new("Riot")
        });

        let document = export_game_world(&[card], &[], &[]);
        assert_eq!(document.cards.len(), 2);

        assert_eq!(document.cards[0].id, "c1_0");
        assert_eq!(document.cards[0].weight, 0.5);
        assert_eq!(document.cards[1].id, "c1_1");
        assert_eq!(document.cards[1].weight, 2.0);
        assert_eq!(
            document.cards[1].is_available_when[0].state["money"],
            [30.0, 60.0]
        );
        // Untouched standard keys keep the full range.
        assert_eq!(
            document.cards[1].is_available_when[0].state["people"],
            FULL_RANGE
        );
    }

    #[test]
    fn test_condition_flags_pass_through_even_when_empty() {
        let card = card(CardDraft {
            conditions: vec![CardCondition::default()],
            ..CardDraft::new("Riot")
        });

        let document = export_game_world(&[card], &[], &[]);
        assert_eq!(
            document.cards[0].is_available_when[0].flags,
            Some(BTreeMap::new())
        );
    }

    #[test]
    fn test_dangling_image_exports_empty_source() {
        let card = card(CardDraft {
            image_id: Some(EntityId::from("gone")),
            ..CardDraft::new("Riot")
        });

        let document = export_game_world(&[card], &[image()], &[]);
        assert_eq!(document.cards[0].image, "");
    }

    #[test]
    fn test_image_resolves_to_source_url() {
        let card = card(CardDraft {
            image_id: Some(EntityId::from("img1")),
            ..CardDraft::new("Riot")
        });

        let document = export_game_world(&[card], &[image()], &[]);
        assert_eq!(document.cards[0].image, "http://x/y.png");
    }

    #[test]
    fn test_sides_resolve_case_insensitively_and_default_when_missing() {
        let card = card(CardDraft {
            actions: vec![ActionData::new("LEFT").with_value("money", 5.0)],
            ..CardDraft::new("Riot")
        });

        let document = export_game_world(&[card], &[], &[]);
        let actions = &document.cards[0].actions;
        assert_eq!(actions.left.modifier.modifier_type, Some(ModifierType::Add));
        assert_eq!(actions.right, CardActionData::default());
    }

    #[test]
    fn test_event_type_cards_leave_the_pool() {
        let card = card(CardDraft {
            card_type: CardType::Event,
            actions: vec![ActionData::new("left").with_next_card("c2")],
            ..CardDraft::new("Aftermath")
        });

        let document = export_game_world(&[card], &[], &[]);
        assert!(document.cards.is_empty());

        let event_card = &document.event_cards["c1"];
        assert_eq!(
            event_card.actions.left.next_event_card_id.as_deref(),
            Some("c2")
        );
        assert!(event_card.actions.right.next_event_card_id.is_none());
    }

    #[test]
    fn test_events_without_initial_card_are_skipped() {
        let inert = EventDescriptor::from_draft(EntityId::from("e1"), EventDraft::new("Inert"));
        let armed = EventDescriptor::from_draft(
            EntityId::from("e2"),
            EventDraft {
                weight: 3.0,
                ..EventDraft::new("Uprising").with_initial_card("c9")
            },
        );

        let document = export_game_world(&[], &[], &[inert, armed]);
        assert_eq!(document.events.len(), 1);

        let event = &document.events[0];
        assert_eq!(event.probability, 3.0);
        assert_eq!(event.initial_event_card_id, "c9");
        // No authored conditions, so the maximal default query applies.
        assert_eq!(event.should_trigger_when.len(), 1);
        assert!(event.should_trigger_when[0].flags.is_none());
    }

    #[test]
    fn test_end_to_end_document_shape() {
        let card = card(CardDraft {
            image_id: Some(EntityId::from("img1")),
            conditions: vec![CardCondition::default()
                .with_weight(0.5)
                .with_range("environment", 10.0, 20.0)],
            actions: vec![ActionData::new("left").with_value("money", 5.0)],
            ..CardDraft::new("Riot")
        });

        let document = export_game_world(&[card], &[image()], &[]);
        let json = serde_json::to_value(&document).unwrap();

        let record = &json["cards"][0];
        assert_eq!(record["image"], "http://x/y.png");
        assert_eq!(record["weight"], 0.5);
        assert_eq!(
            record["isAvailableWhen"],
            serde_json::json!([{
                "state": {
                    "environment": [10.0, 20.0],
                    "people": [0.0, 100.0],
                    "security": [0.0, 100.0],
                    "money": [0.0, 100.0],
                },
                "flags": {},
            }])
        );
        assert_eq!(
            record["actions"],
            serde_json::json!({
                "left": {
                    "modifier": { "type": "add", "state": { "money": 5.0 }, "flags": {} }
                },
                "right": { "modifier": {} },
            })
        );
    }
}
