//! Action list editing.

use crate::entities::ActionData;

/// Replace the entry whose `action_id` matches, or append the payload as a
/// new entry. Keeps the list at one entry per action slot.
pub fn upsert_action(actions: &[ActionData], action: ActionData) -> Vec<ActionData> {
    let mut next = actions.to_vec();
    match next.iter_mut().find(|a| a.action_id == action.action_id) {
        Some(slot) => *slot = action,
        None => next.push(action),
    }
    next
}
