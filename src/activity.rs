//! Item-level edits inside one day's activity entry.
//!
//! Each function returns the whole replacement entry with `completed`
//! recomputed. Writing it back goes through the activity store's upsert.

use crate::errors::{Result, TrackerError};
use crate::models::{ActivityEntry, ActivityItem, new_id};

impl ActivityItem {
    /// New, not yet completed item. The name is trimmed and must not be empty.
    pub fn new(name: &str, duration: u32) -> Result<Self> {
        let name = validate(name, duration)?;
        Ok(Self {
            id: new_id(),
            name,
            duration,
            completed: false,
        })
    }

    /// Same item with a new name and duration; id and completion are kept.
    pub fn edited(&self, name: &str, duration: u32) -> Result<Self> {
        let name = validate(name, duration)?;
        Ok(Self {
            id: self.id.clone(),
            name,
            duration,
            completed: self.completed,
        })
    }
}

fn validate(name: &str, duration: u32) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(TrackerError::invalid_activity("name must not be empty"));
    }
    if duration == 0 {
        return Err(TrackerError::invalid_activity("duration must be positive"));
    }
    Ok(name.to_owned())
}

pub fn all_completed(items: &[ActivityItem]) -> bool {
    items.iter().all(|item| item.completed)
}

fn with_items(entry: ActivityEntry, activities: Vec<ActivityItem>) -> ActivityEntry {
    ActivityEntry {
        completed: all_completed(&activities),
        activities,
        ..entry
    }
}

/// Replaces the item with the same id, or appends it.
pub fn add_or_update_item(entry: ActivityEntry, item: ActivityItem) -> ActivityEntry {
    let mut activities = entry.activities.clone();
    match activities.iter().position(|existing| existing.id == item.id) {
        Some(index) => activities[index] = item,
        None => activities.push(item),
    }
    with_items(entry, activities)
}

pub fn toggle_item(entry: ActivityEntry, item_id: &str) -> Result<ActivityEntry> {
    let mut activities = entry.activities.clone();
    let item = activities
        .iter_mut()
        .find(|item| item.id == item_id)
        .ok_or_else(|| TrackerError::ActivityNotFound(item_id.to_owned()))?;
    item.completed = !item.completed;
    Ok(with_items(entry, activities))
}

/// Removing an id that is not present leaves the items as they were.
pub fn delete_item(entry: ActivityEntry, item_id: &str) -> ActivityEntry {
    let activities = entry
        .activities
        .iter()
        .filter(|item| item.id != item_id)
        .cloned()
        .collect();
    with_items(entry, activities)
}
