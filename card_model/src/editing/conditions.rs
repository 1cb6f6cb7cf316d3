//! Condition list editing.

use crate::entities::{CardCondition, ConditionPatch};
use crate::error::EditError;

/// Append a new empty condition (weight 0, no constraints).
pub fn add_condition(conditions: &[CardCondition]) -> Vec<CardCondition> {
    let mut next = conditions.to_vec();
    next.push(CardCondition::default());
    next
}

/// Shallow-merge `patch` into the condition at `index`, leaving every other
/// entry untouched.
pub fn update_condition(
    conditions: &[CardCondition],
    index: usize,
    patch: ConditionPatch,
) -> Result<Vec<CardCondition>, EditError> {
    if index >= conditions.len() {
        return Err(EditError::IndexOutOfRange {
            index,
            len: conditions.len(),
        });
    }

    let mut next = conditions.to_vec();
    next[index].merge(patch);
    Ok(next)
}

/// Remove the condition at `index`, shifting later entries down by one.
pub fn remove_condition(
    conditions: &[CardCondition],
    index: usize,
) -> Result<Vec<CardCondition>, EditError> {
    if index >= conditions.len() {
        return Err(EditError::IndexOutOfRange {
            index,
            len: conditions.len(),
        });
    }

    let mut next = conditions.to_vec();
    next.remove(index);
    Ok(next)
}
