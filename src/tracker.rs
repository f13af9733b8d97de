//! Explicit state container. Holds the current root and its storage slot and
//! saves a full snapshot after every applied action.
//!
//! The command helpers assemble complete records for today the way a form
//! would, then hand them to [`Tracker::dispatch`].

use crate::activity;
use crate::dates::today;
use crate::errors::{Result, TrackerError};
use crate::models::{
    ActivityEntry, ActivityItem, MoodEntry, SleepEntry, SleepQuality, Tab, clean_note,
};
use crate::state::{Action, AppState};
use crate::storage::Storage;
use crate::store::find_for_day;
use tracing::debug;

#[derive(Debug)]
pub struct Tracker {
    storage: Storage,
    state: AppState,
}

impl Tracker {
    pub fn open(storage: Storage) -> Self {
        let state = storage.load_state();
        Self { storage, state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Replaces the root with the action's result and saves it. A rejected
    /// action leaves both the root and the slot untouched.
    pub fn dispatch(&mut self, action: Action) -> Result<&AppState> {
        debug!(?action, "dispatch");
        self.state = self.state.clone().apply(action)?;
        self.storage.save_state(&self.state);
        Ok(&self.state)
    }

    pub fn select_tab(&mut self, tab: Tab) -> Result<&AppState> {
        self.dispatch(Action::SetActiveTab(tab))
    }

    /// Logs today's mood, keeping the id of an existing entry. A blank mood
    /// token is rejected.
    pub fn log_mood(&mut self, mood: &str, note: Option<&str>) -> Result<&AppState> {
        let mood = mood.trim();
        if mood.is_empty() {
            return Err(TrackerError::InvalidMood);
        }
        let day = today();
        let mut entry = MoodEntry::new(day.clone(), mood, note);
        if let Some(existing) = find_for_day(&self.state.mood_entries, &day) {
            entry.id = existing.id.clone();
        }
        self.dispatch(Action::AddMoodEntry(entry))
    }

    pub fn log_sleep(
        &mut self,
        hours: f64,
        quality: SleepQuality,
        note: Option<&str>,
    ) -> Result<&AppState> {
        let entry = SleepEntry {
            hours,
            quality,
            note: clean_note(note),
            ..self.state.sleep_entry_for(&today())
        };
        self.dispatch(Action::AddSleepEntry(entry))
    }

    pub fn set_water_goal(&mut self, goal: u32) -> Result<&AppState> {
        self.dispatch(Action::UpdateWaterGoal(goal))
    }

    /// Sets today's cups, clamped to `[0, water_goal]`.
    pub fn set_cups(&mut self, cups: u32) -> Result<&AppState> {
        let day = today();
        let mut entry = self.state.water_entry_for(&day);
        entry.cups = cups.min(self.state.water_goal);
        self.dispatch(Action::AddWaterEntry(entry))
    }

    pub fn add_cup(&mut self) -> Result<&AppState> {
        let cups = self.state.water_entry_for(&today()).cups;
        self.set_cups(cups.saturating_add(1))
    }

    /// One cup less, floored at 0. Not clamped to the goal, so lowering the
    /// goal below today's count does not drop several cups at once.
    pub fn remove_cup(&mut self) -> Result<&AppState> {
        let mut entry = self.state.water_entry_for(&today());
        entry.cups = entry.cups.saturating_sub(1);
        self.dispatch(Action::AddWaterEntry(entry))
    }

    pub fn add_activity(&mut self, name: &str, duration: u32) -> Result<&AppState> {
        let item = ActivityItem::new(name, duration)?;
        self.update_activities(|entry| Ok(activity::add_or_update_item(entry, item)))
    }

    pub fn edit_activity(&mut self, item_id: &str, name: &str, duration: u32) -> Result<&AppState> {
        let day = today();
        let entry = self.state.activity_entry_for(&day);
        let existing = entry
            .activities
            .iter()
            .find(|item| item.id == item_id)
            .ok_or_else(|| TrackerError::ActivityNotFound(item_id.to_owned()))?;
        let item = existing.edited(name, duration)?;
        self.dispatch(Action::AddActivityEntry(activity::add_or_update_item(entry, item)))
    }

    pub fn toggle_activity(&mut self, item_id: &str) -> Result<&AppState> {
        self.update_activities(|entry| activity::toggle_item(entry, item_id))
    }

    pub fn delete_activity(&mut self, item_id: &str) -> Result<&AppState> {
        self.update_activities(|entry| Ok(activity::delete_item(entry, item_id)))
    }

    fn update_activities<F>(&mut self, edit: F) -> Result<&AppState>
    where
        F: FnOnce(ActivityEntry) -> Result<ActivityEntry>,
    {
        let entry = edit(self.state.activity_entry_for(&today()))?;
        self.dispatch(Action::AddActivityEntry(entry))
    }
}
