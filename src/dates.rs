use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

const KEY_FORMAT: &str = "%Y-%m-%d";
const LABEL_FORMAT: &str = "%a, %b %-d";

/// Calendar-day key (`YYYY-MM-DD`). Lexical order is chronological order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayKey(String);

impl DayKey {
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.format(KEY_FORMAT).to_string())
    }

    /// Accepts only well-formed keys and normalizes them.
    pub fn parse(raw: &str) -> Option<Self> {
        NaiveDate::parse_from_str(raw, KEY_FORMAT)
            .ok()
            .map(Self::from_date)
    }

    pub fn to_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, KEY_FORMAT).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Truncates an instant to its calendar day in the instant's own time zone.
pub fn canonical_key<Tz: TimeZone>(instant: &DateTime<Tz>) -> DayKey {
    DayKey::from_date(instant.date_naive())
}

pub fn today_date() -> NaiveDate {
    Local::now().date_naive()
}

pub fn today() -> DayKey {
    canonical_key(&Local::now())
}

pub fn is_today(day: &DayKey) -> bool {
    *day == today()
}

pub fn last_n_days(n: usize) -> Vec<DayKey> {
    last_n_days_from(today_date(), n)
}

/// `n` contiguous keys in ascending order, the last one being `end`.
pub fn last_n_days_from(end: NaiveDate, n: usize) -> Vec<DayKey> {
    (0..n)
        .rev()
        .map(|offset| DayKey::from_date(end - Duration::days(offset as i64)))
        .collect()
}

/// "Mon, Jan 5". Presentation only; a malformed key is echoed back unchanged.
pub fn display_label(day: &DayKey) -> String {
    match day.to_date() {
        Some(date) => date.format(LABEL_FORMAT).to_string(),
        None => day.to_string(),
    }
}
