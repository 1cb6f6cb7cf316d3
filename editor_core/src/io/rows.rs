//! Row import - flat spreadsheet rows mapped into card records.
//!
//! The spreadsheet adapter (outside the core) parses the workbook and hands
//! over one flat record per row; this module only does the field mapping into
//! [`CardDescriptor`]s with a left and a right action.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::Deserialize;

use card_model::{ActionData, CardDescriptor, CardType, EntityId};

/// One spreadsheet row. Every field is optional in the sheet; absent cells
/// deserialize to the defaults below.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CardRow {
    pub id: String,
    pub name: String,
    pub text: String,
    pub location: String,
    /// Left/right choice captions.
    pub left: String,
    pub right: String,
    /// Forward links; a non-empty link makes the row an event card.
    pub next_left_id: String,
    pub next_right_id: String,
    pub environment_left: f64,
    pub environment_right: f64,
    pub people_left: f64,
    pub people_right: f64,
    pub security_left: f64,
    pub security_right: f64,
    pub money_left: f64,
    pub money_right: f64,
    pub popularity_left: f64,
    pub popularity_right: f64,
}

/// Map rows into card records, synthesizing ids for rows that lack one.
pub fn cards_from_rows(rows: &[CardRow]) -> Vec<CardDescriptor> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| card_from_row(index, row))
        .collect()
}

fn card_from_row(index: usize, row: &CardRow) -> CardDescriptor {
    let id = if row.id.is_empty() {
        synthesized_row_id(index)
    } else {
        EntityId::new(&row.id)
    };

    let card_type = if row.next_left_id.is_empty() && row.next_right_id.is_empty() {
        CardType::Action
    } else {
        CardType::Event
    };

    CardDescriptor {
        id,
        name: row.name.clone(),
        image_id: None,
        card_type,
        location: row.location.clone(),
        text: row.text.clone(),
        weight: 1.0,
        conditions: Vec::new(),
        actions: vec![
            row_action(
                "left",
                &row.left,
                &row.next_left_id,
                [
                    row.environment_left,
                    row.people_left,
                    row.security_left,
                    row.money_left,
                    row.popularity_left,
                ],
            ),
            row_action(
                "right",
                &row.right,
                &row.next_right_id,
                [
                    row.environment_right,
                    row.people_right,
                    row.security_right,
                    row.money_right,
                    row.popularity_right,
                ],
            ),
        ],
    }
}

fn row_action(slot: &str, caption: &str, next_id: &str, values: [f64; 5]) -> ActionData {
    let [environment, people, security, money, popularity] = values;
    let mut action = ActionData::new(slot)
        .with_value("environment", environment)
        .with_value("people", people)
        .with_value("security", security)
        .with_value("money", money)
        .with_value("popularity", popularity);
    if !caption.is_empty() {
        action = action.with_description(caption);
    }
    if !next_id.is_empty() {
        action = action.with_next_card(next_id);
    }
    action
}

fn synthesized_row_id(index: usize) -> EntityId {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default();
    EntityId::new(format!("rowcard_{index}_{millis}"))
}
