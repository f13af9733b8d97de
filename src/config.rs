//! Fixed values shared by the state layer and its presentation collaborators.

/// Name of the durable slot the whole state snapshot is written to.
pub const STORAGE_KEY: &str = "health-tracker-data";

/// Directory used for the slot when `HEALTH_TRACKER_DATA_DIR` is unset.
pub const DEFAULT_DATA_DIR: &str = "data";

pub const DATA_DIR_ENV: &str = "HEALTH_TRACKER_DATA_DIR";

pub const DEFAULT_WATER_GOAL: u32 = 8;
pub const MIN_WATER_GOAL: u32 = 1;

/// Hours that fill a full bar in the sleep charts.
pub const SLEEP_CHART_MAX_HOURS: f64 = 12.0;
pub const DEFAULT_SLEEP_HOURS: f64 = 7.0;

/// Past activity days listed in the history panel.
pub const ACTIVITY_HISTORY_LEN: usize = 5;

pub const WEEK_LEN: usize = 7;

/// Selectable moods as (token, label). The token is what gets stored.
pub const MOOD_OPTIONS: &[(&str, &str)] = &[
    ("😀", "Happy"),
    ("😌", "Calm"),
    ("😐", "Neutral"),
    ("😴", "Tired"),
    ("😢", "Sad"),
    ("😡", "Angry"),
    ("😰", "Anxious"),
    ("🤒", "Sick"),
];

pub fn mood_label(token: &str) -> Option<&'static str> {
    MOOD_OPTIONS
        .iter()
        .find(|(option, _)| *option == token)
        .map(|(_, label)| *label)
}
