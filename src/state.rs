use crate::activity::all_completed;
use crate::config::{DEFAULT_SLEEP_HOURS, DEFAULT_WATER_GOAL, MIN_WATER_GOAL};
use crate::dates::DayKey;
use crate::errors::{Result, TrackerError};
use crate::models::{
    ActivityEntry, DayEntry, MoodEntry, SleepEntry, SleepQuality, Tab, WaterEntry,
};
use crate::store::{entry_for_day, upsert};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The single root value. Every action produces a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub mood_entries: Vec<MoodEntry>,
    pub water_entries: Vec<WaterEntry>,
    pub sleep_entries: Vec<SleepEntry>,
    pub activity_entries: Vec<ActivityEntry>,
    pub water_goal: u32,
    pub active_tab: Tab,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mood_entries: Vec::new(),
            water_entries: Vec::new(),
            sleep_entries: Vec::new(),
            activity_entries: Vec::new(),
            water_goal: DEFAULT_WATER_GOAL,
            active_tab: Tab::Mood,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddMoodEntry(MoodEntry),
    AddWaterEntry(WaterEntry),
    UpdateWaterGoal(u32),
    AddSleepEntry(SleepEntry),
    AddActivityEntry(ActivityEntry),
    SetActiveTab(Tab),
}

impl AppState {
    /// Applies one action. Only the field group the action owns changes.
    pub fn apply(self, action: Action) -> Result<Self> {
        let next = match action {
            Action::AddMoodEntry(entry) => self.add_mood_entry(entry),
            Action::AddWaterEntry(entry) => self.add_water_entry(entry),
            Action::UpdateWaterGoal(goal) => self.update_water_goal(goal)?,
            Action::AddSleepEntry(entry) => self.add_sleep_entry(entry),
            Action::AddActivityEntry(entry) => self.add_activity_entry(entry),
            Action::SetActiveTab(tab) => self.set_active_tab(tab),
        };
        Ok(next)
    }

    pub fn add_mood_entry(self, entry: MoodEntry) -> Self {
        Self {
            mood_entries: upsert(self.mood_entries, entry),
            ..self
        }
    }

    pub fn add_water_entry(self, entry: WaterEntry) -> Self {
        Self {
            water_entries: upsert(self.water_entries, entry),
            ..self
        }
    }

    /// Past water entries keep the goal they were recorded with.
    pub fn update_water_goal(self, goal: u32) -> Result<Self> {
        if goal < MIN_WATER_GOAL {
            return Err(TrackerError::InvalidGoal(goal));
        }
        Ok(Self {
            water_goal: goal,
            ..self
        })
    }

    pub fn add_sleep_entry(self, entry: SleepEntry) -> Self {
        Self {
            sleep_entries: upsert(self.sleep_entries, entry),
            ..self
        }
    }

    pub fn add_activity_entry(self, entry: ActivityEntry) -> Self {
        Self {
            activity_entries: upsert(self.activity_entries, entry),
            ..self
        }
    }

    pub fn set_active_tab(self, tab: Tab) -> Self {
        Self {
            active_tab: tab,
            ..self
        }
    }

    /// Stored entry for `day`, or an empty one carrying the current goal.
    pub fn water_entry_for(&self, day: &DayKey) -> WaterEntry {
        entry_for_day(&self.water_entries, day, || {
            WaterEntry::new(day.clone(), self.water_goal)
        })
    }

    /// What the sleep form starts from: the stored night or 7 hours, good.
    pub fn sleep_entry_for(&self, day: &DayKey) -> SleepEntry {
        entry_for_day(&self.sleep_entries, day, || {
            SleepEntry::new(day.clone(), DEFAULT_SLEEP_HOURS, SleepQuality::Good, None)
        })
    }

    pub fn activity_entry_for(&self, day: &DayKey) -> ActivityEntry {
        entry_for_day(&self.activity_entries, day, || ActivityEntry::new(day.clone()))
    }

    /// Checks a restored snapshot before it replaces the defaults.
    pub fn validate(&self) -> Result<()> {
        if self.water_goal < MIN_WATER_GOAL {
            return Err(TrackerError::invalid_state(format!(
                "water goal {} is below {MIN_WATER_GOAL}",
                self.water_goal
            )));
        }
        check_days("mood", &self.mood_entries)?;
        check_days("water", &self.water_entries)?;
        check_days("sleep", &self.sleep_entries)?;
        check_days("activity", &self.activity_entries)?;

        if let Some(entry) = self
            .activity_entries
            .iter()
            .find(|entry| entry.completed != all_completed(&entry.activities))
        {
            return Err(TrackerError::invalid_state(format!(
                "activity entry {} has a stale completed flag",
                entry.date
            )));
        }
        Ok(())
    }
}

fn check_days<E: DayEntry>(store: &str, entries: &[E]) -> Result<()> {
    let mut seen = HashSet::new();
    for entry in entries {
        let day = entry.day();
        // Keys compare as strings, so "2026-1-5" must not stand in for "2026-01-05".
        if DayKey::parse(day.as_str()).as_ref() != Some(day) {
            return Err(TrackerError::invalid_state(format!(
                "{store} entry has non-canonical day key {day:?}"
            )));
        }
        if !seen.insert(day) {
            return Err(TrackerError::invalid_state(format!(
                "{store} store has two entries for {day}"
            )));
        }
    }
    Ok(())
}
