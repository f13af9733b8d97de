use crate::dates::DayKey;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Anything stored at most once per calendar day.
pub trait DayEntry {
    fn day(&self) -> &DayKey;
}

pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Trims a free-text note; blank notes are not stored.
pub fn clean_note(note: Option<&str>) -> Option<String> {
    note.map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: String,
    pub date: DayKey,
    pub mood: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl MoodEntry {
    pub fn new(date: DayKey, mood: impl Into<String>, note: Option<&str>) -> Self {
        Self {
            id: new_id(),
            date,
            mood: mood.into(),
            note: clean_note(note),
        }
    }
}

/// `goal` is the daily goal in effect when the entry was first written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterEntry {
    pub id: String,
    pub date: DayKey,
    pub cups: u32,
    pub goal: u32,
}

impl WaterEntry {
    pub fn new(date: DayKey, goal: u32) -> Self {
        Self {
            id: new_id(),
            date,
            cups: 0,
            goal,
        }
    }

    pub fn cups_remaining(&self) -> u32 {
        self.goal.saturating_sub(self.cups)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SleepQuality {
    Poor,
    Fair,
    #[default]
    Good,
    Excellent,
}

impl SleepQuality {
    pub fn label(self) -> &'static str {
        match self {
            SleepQuality::Poor => "Poor",
            SleepQuality::Fair => "Fair",
            SleepQuality::Good => "Good",
            SleepQuality::Excellent => "Excellent",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepEntry {
    pub id: String,
    pub date: DayKey,
    pub hours: f64,
    pub quality: SleepQuality,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl SleepEntry {
    pub fn new(date: DayKey, hours: f64, quality: SleepQuality, note: Option<&str>) -> Self {
        Self {
            id: new_id(),
            date,
            hours,
            quality,
            note: clean_note(note),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityItem {
    pub id: String,
    pub name: String,
    /// Minutes.
    pub duration: u32,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: String,
    pub date: DayKey,
    pub activities: Vec<ActivityItem>,
    /// AND over `activities`; true when the list is empty.
    pub completed: bool,
}

impl ActivityEntry {
    pub fn new(date: DayKey) -> Self {
        Self {
            id: new_id(),
            date,
            activities: Vec::new(),
            completed: true,
        }
    }
}

impl DayEntry for MoodEntry {
    fn day(&self) -> &DayKey {
        &self.date
    }
}

impl DayEntry for WaterEntry {
    fn day(&self) -> &DayKey {
        &self.date
    }
}

impl DayEntry for SleepEntry {
    fn day(&self) -> &DayKey {
        &self.date
    }
}

impl DayEntry for ActivityEntry {
    fn day(&self) -> &DayKey {
        &self.date
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Mood,
    Water,
    Sleep,
    Activity,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaterDayPoint {
    pub date: DayKey,
    pub cups: u32,
    pub goal: u32,
    pub percent: f64,
    pub recorded: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SleepDayPoint {
    pub date: DayKey,
    pub hours: Option<f64>,
    pub quality: Option<SleepQuality>,
    pub percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SleepSummary {
    pub nights: usize,
    pub average: f64,
    pub most: f64,
    pub least: f64,
    pub best_quality: SleepQuality,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActivityProgress {
    pub completed: usize,
    pub total: usize,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityHistoryPoint {
    pub date: DayKey,
    pub progress: ActivityProgress,
    pub all_completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarDay<'a> {
    pub day: u32,
    pub date: DayKey,
    pub entry: Option<&'a MoodEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodCalendar<'a> {
    pub month_name: String,
    pub year: i32,
    /// Sunday-first week rows flattened; `None` cells pad the first and last row.
    pub cells: Vec<Option<CalendarDay<'a>>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary<'a> {
    pub date: DayKey,
    pub mood: Option<&'a MoodEntry>,
    pub water_cups: u32,
    pub water_goal: u32,
    pub water_percent: f64,
    pub sleep_hours: Option<f64>,
    pub activities: ActivityProgress,
    pub sleep_week: Vec<SleepDayPoint>,
}
