use crate::config::{ACTIVITY_HISTORY_LEN, SLEEP_CHART_MAX_HOURS, WEEK_LEN};
use crate::dates::{DayKey, last_n_days_from, today_date};
use crate::errors::{Result, TrackerError};
use crate::models::{
    ActivityEntry, ActivityHistoryPoint, ActivityProgress, CalendarDay, DashboardSummary,
    MoodCalendar, MoodEntry, SleepDayPoint, SleepEntry, SleepSummary, WaterDayPoint, WaterEntry,
};
use crate::state::AppState;
use crate::store::{entries_in_window, find_for_day};
use chrono::{Datelike, Duration, NaiveDate};

/// Mean of `values`, or 0 for an empty window. Check the window size before
/// reading 0 as a recorded average.
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn min_max<T: PartialOrd + Copy>(values: &[T]) -> Result<(T, T)> {
    let (&first, rest) = values.split_first().ok_or(TrackerError::EmptyWindow)?;
    Ok(rest.iter().fold((first, first), |(min, max), &value| {
        (
            if value < min { value } else { min },
            if value > max { value } else { max },
        )
    }))
}

/// Most frequent value. Among tied counts the one seen first wins.
pub fn modal_category<T: PartialEq + Clone>(values: &[T]) -> Option<T> {
    let mut counts: Vec<(&T, usize)> = Vec::new();
    for value in values {
        match counts.iter().position(|(seen, _)| *seen == value) {
            Some(index) => counts[index].1 += 1,
            None => counts.push((value, 1)),
        }
    }

    let mut best: Option<(&T, usize)> = None;
    for (value, count) in counts {
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value.clone())
}

/// Completed items over total items; 0 when the day has no items.
pub fn completion_ratio(entry: &ActivityEntry) -> f64 {
    let total = entry.activities.len();
    if total == 0 {
        return 0.0;
    }
    completed_count(entry) as f64 / total as f64
}

/// Not clamped; see [`clamp_percent`].
pub fn progress_percent(value: f64, goal: f64) -> f64 {
    value / goal * 100.0
}

pub fn clamp_percent(percent: f64) -> f64 {
    percent.clamp(0.0, 100.0)
}

fn completed_count(entry: &ActivityEntry) -> usize {
    entry.activities.iter().filter(|item| item.completed).count()
}

pub fn activity_progress(entry: Option<&ActivityEntry>) -> ActivityProgress {
    match entry {
        Some(entry) => ActivityProgress {
            completed: completed_count(entry),
            total: entry.activities.len(),
            percent: completion_ratio(entry) * 100.0,
        },
        None => ActivityProgress {
            completed: 0,
            total: 0,
            percent: 0.0,
        },
    }
}

/// Percent uses each entry's own goal snapshot.
pub fn water_week_at(today: NaiveDate, entries: &[WaterEntry]) -> Vec<WaterDayPoint> {
    last_n_days_from(today, WEEK_LEN)
        .into_iter()
        .map(|date| match find_for_day(entries, &date) {
            Some(entry) => WaterDayPoint {
                cups: entry.cups,
                goal: entry.goal,
                percent: progress_percent(f64::from(entry.cups), f64::from(entry.goal)),
                recorded: entry.cups > 0,
                date,
            },
            None => WaterDayPoint {
                date,
                cups: 0,
                goal: 0,
                percent: 0.0,
                recorded: false,
            },
        })
        .collect()
}

pub fn water_week(entries: &[WaterEntry]) -> Vec<WaterDayPoint> {
    water_week_at(today_date(), entries)
}

pub fn sleep_week_at(today: NaiveDate, entries: &[SleepEntry]) -> Vec<SleepDayPoint> {
    last_n_days_from(today, WEEK_LEN)
        .into_iter()
        .map(|date| {
            let entry = find_for_day(entries, &date);
            SleepDayPoint {
                hours: entry.map(|e| e.hours),
                quality: entry.map(|e| e.quality),
                percent: entry
                    .map(|e| progress_percent(e.hours, SLEEP_CHART_MAX_HOURS))
                    .unwrap_or(0.0),
                date,
            }
        })
        .collect()
}

pub fn sleep_week(entries: &[SleepEntry]) -> Vec<SleepDayPoint> {
    sleep_week_at(today_date(), entries)
}

/// `None` when no night was recorded.
pub fn sleep_summary(entries: &[&SleepEntry]) -> Option<SleepSummary> {
    let hours: Vec<f64> = entries.iter().map(|entry| entry.hours).collect();
    let (least, most) = min_max(&hours).ok()?;
    let qualities: Vec<_> = entries.iter().map(|entry| entry.quality).collect();
    let best_quality = modal_category(&qualities)?;

    Some(SleepSummary {
        nights: entries.len(),
        average: average(&hours),
        most,
        least,
        best_quality,
    })
}

pub fn weekly_sleep_summary_at(today: NaiveDate, entries: &[SleepEntry]) -> Option<SleepSummary> {
    let window = last_n_days_from(today, WEEK_LEN);
    sleep_summary(&entries_in_window(entries, &window))
}

pub fn weekly_sleep_summary(entries: &[SleepEntry]) -> Option<SleepSummary> {
    weekly_sleep_summary_at(today_date(), entries)
}

/// Past days with at least one item, newest first.
pub fn activity_history_at(today: NaiveDate, entries: &[ActivityEntry]) -> Vec<ActivityHistoryPoint> {
    let today = DayKey::from_date(today);
    let mut past: Vec<&ActivityEntry> = entries
        .iter()
        .filter(|entry| entry.date != today && !entry.activities.is_empty())
        .collect();
    past.sort_by(|a, b| b.date.cmp(&a.date));

    past.into_iter()
        .take(ACTIVITY_HISTORY_LEN)
        .map(|entry| ActivityHistoryPoint {
            date: entry.date.clone(),
            progress: activity_progress(Some(entry)),
            all_completed: entry.completed,
        })
        .collect()
}

pub fn activity_history(entries: &[ActivityEntry]) -> Vec<ActivityHistoryPoint> {
    activity_history_at(today_date(), entries)
}

pub fn mood_calendar_at(today: NaiveDate, entries: &[MoodEntry]) -> MoodCalendar<'_> {
    let first = today - Duration::days(i64::from(today.day0()));
    let mut cells: Vec<Option<CalendarDay<'_>>> =
        vec![None; first.weekday().num_days_from_sunday() as usize];

    for date in first.iter_days().take_while(|d| d.month() == first.month()) {
        let key = DayKey::from_date(date);
        cells.push(Some(CalendarDay {
            day: date.day(),
            entry: find_for_day(entries, &key),
            date: key,
        }));
    }

    let padded = cells.len().div_ceil(WEEK_LEN) * WEEK_LEN;
    cells.resize(padded, None);

    MoodCalendar {
        month_name: first.format("%B").to_string(),
        year: first.year(),
        cells,
    }
}

pub fn mood_calendar(entries: &[MoodEntry]) -> MoodCalendar<'_> {
    mood_calendar_at(today_date(), entries)
}

/// Today's water progress is measured against the live goal.
pub fn dashboard_at(today: NaiveDate, state: &AppState) -> DashboardSummary<'_> {
    let date = DayKey::from_date(today);
    let water_cups = find_for_day(&state.water_entries, &date)
        .map(|entry| entry.cups)
        .unwrap_or(0);

    DashboardSummary {
        mood: find_for_day(&state.mood_entries, &date),
        water_cups,
        water_goal: state.water_goal,
        water_percent: progress_percent(f64::from(water_cups), f64::from(state.water_goal)),
        sleep_hours: find_for_day(&state.sleep_entries, &date).map(|entry| entry.hours),
        activities: activity_progress(find_for_day(&state.activity_entries, &date)),
        sleep_week: sleep_week_at(today, &state.sleep_entries),
        date,
    }
}

pub fn dashboard(state: &AppState) -> DashboardSummary<'_> {
    dashboard_at(today_date(), state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityItem, SleepQuality};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sleep(day: NaiveDate, hours: f64, quality: SleepQuality) -> SleepEntry {
        SleepEntry::new(DayKey::from_date(day), hours, quality, None)
    }

    fn activity_entry(day: NaiveDate, done: &[bool]) -> ActivityEntry {
        let activities: Vec<ActivityItem> = done
            .iter()
            .enumerate()
            .map(|(i, &completed)| ActivityItem {
                id: format!("a{i}"),
                name: format!("Item {i}"),
                duration: 30,
                completed,
            })
            .collect();
        ActivityEntry {
            id: format!("e-{day}"),
            date: DayKey::from_date(day),
            completed: done.iter().all(|c| *c),
            activities,
        }
    }

    #[test]
    fn average_of_empty_is_zero() {
        assert_eq!(average(&[]), 0.0);
        assert_eq!(average(&[6.0, 8.0]), 7.0);
    }

    #[test]
    fn min_max_requires_values() {
        assert!(matches!(min_max::<f64>(&[]), Err(TrackerError::EmptyWindow)));
        assert_eq!(min_max(&[7.5, 4.0, 9.0, 6.0]).unwrap(), (4.0, 9.0));
        assert_eq!(min_max(&[3u32]).unwrap(), (3, 3));
    }

    #[test]
    fn modal_category_prefers_first_seen_on_ties() {
        let values = ["fair", "good", "good", "fair", "poor"];
        assert_eq!(modal_category(&values), Some("fair"));
        assert_eq!(modal_category(&["poor", "good", "good"]), Some("good"));
        assert_eq!(modal_category::<&str>(&[]), None);
    }

    #[test]
    fn empty_activity_day_ratio_is_zero_but_completed() {
        let entry = activity_entry(date(2026, 1, 5), &[]);
        assert_eq!(completion_ratio(&entry), 0.0);
        assert!(entry.completed);
    }

    #[test]
    fn completion_ratio_counts_completed_items() {
        let entry = activity_entry(date(2026, 1, 5), &[true, false, true, false]);
        assert_eq!(completion_ratio(&entry), 0.5);
        assert_eq!(activity_progress(Some(&entry)).completed, 2);
    }

    #[test]
    fn progress_percent_is_not_clamped() {
        assert_eq!(progress_percent(12.0, 8.0), 150.0);
        assert_eq!(clamp_percent(150.0), 100.0);
        assert_eq!(progress_percent(4.0, 8.0), 50.0);
    }

    #[test]
    fn weekly_sleep_summary_only_counts_the_window() {
        let today = date(2026, 1, 10);
        let entries = vec![
            sleep(date(2026, 1, 1), 12.0, SleepQuality::Excellent),
            sleep(date(2026, 1, 9), 6.0, SleepQuality::Fair),
            sleep(date(2026, 1, 10), 8.0, SleepQuality::Good),
            sleep(date(2026, 1, 5), 7.0, SleepQuality::Good),
        ];
        let summary = weekly_sleep_summary_at(today, &entries).unwrap();
        assert_eq!(summary.nights, 3);
        assert_eq!(summary.average, 7.0);
        assert_eq!(summary.most, 8.0);
        assert_eq!(summary.least, 6.0);
        assert_eq!(summary.best_quality, SleepQuality::Good);
    }

    #[test]
    fn sleep_summary_is_none_without_nights() {
        assert!(weekly_sleep_summary_at(date(2026, 1, 10), &[]).is_none());
    }

    #[test]
    fn water_week_uses_entry_goal_snapshot() {
        let today = date(2026, 1, 10);
        let entries = vec![WaterEntry {
            id: "w".into(),
            date: DayKey::from_date(date(2026, 1, 8)),
            cups: 3,
            goal: 6,
        }];
        let week = water_week_at(today, &entries);
        assert_eq!(week.len(), 7);
        assert_eq!(week[6].date, DayKey::from_date(today));
        let point = week
            .iter()
            .find(|p| p.date.as_str() == "2026-01-08")
            .expect("missing day");
        assert_eq!(point.percent, 50.0);
        assert!(point.recorded);
        assert!(week.iter().filter(|p| !p.recorded).count() == 6);
    }

    #[test]
    fn sleep_week_scales_to_chart_ceiling() {
        let today = date(2026, 1, 10);
        let week = sleep_week_at(today, &[sleep(today, 6.0, SleepQuality::Poor)]);
        assert_eq!(week[6].percent, 50.0);
        assert_eq!(week[6].quality.map(SleepQuality::label), Some("Poor"));
        assert_eq!(week[0].hours, None);
    }

    #[test]
    fn activity_history_skips_today_and_empty_days() {
        let today = date(2026, 1, 10);
        let mut entries = vec![
            activity_entry(today, &[true]),
            activity_entry(date(2026, 1, 9), &[]),
        ];
        for d in 1..=8 {
            entries.push(activity_entry(date(2026, 1, d), &[true, false]));
        }
        let history = activity_history_at(today, &entries);
        assert_eq!(history.len(), 5);
        assert_eq!(history[0].date.as_str(), "2026-01-08");
        assert_eq!(history[4].date.as_str(), "2026-01-04");
        assert_eq!(history[0].progress.percent, 50.0);
        assert!(!history[0].all_completed);
    }

    #[test]
    fn mood_calendar_pads_to_whole_weeks() {
        // February 2026 starts on a Sunday and has 28 days.
        let entries = vec![MoodEntry::new(DayKey::from_date(date(2026, 2, 14)), "😀", None)];
        let calendar = mood_calendar_at(date(2026, 2, 20), &entries);
        assert_eq!(calendar.month_name, "February");
        assert_eq!(calendar.cells.len(), 28);
        assert_eq!(calendar.cells[0].as_ref().unwrap().day, 1);
        let marked = calendar.cells[13].as_ref().unwrap();
        assert_eq!(marked.entry.map(|e| e.mood.as_str()), Some("😀"));

        // January 2026 starts on a Thursday: 4 leading blanks, 31 days, 5 rows.
        let calendar = mood_calendar_at(date(2026, 1, 5), &[]);
        assert_eq!(calendar.cells.len(), 35);
        assert!(calendar.cells[..4].iter().all(Option::is_none));
        assert_eq!(calendar.cells[4].as_ref().unwrap().day, 1);
    }

    #[test]
    fn dashboard_measures_water_against_live_goal() {
        let today = date(2026, 1, 10);
        let key = DayKey::from_date(today);
        let state = AppState::default()
            .add_water_entry(WaterEntry {
                id: "w".into(),
                date: key.clone(),
                cups: 4,
                goal: 8,
            })
            .update_water_goal(16)
            .unwrap();
        let summary = dashboard_at(today, &state);
        assert_eq!(summary.water_cups, 4);
        assert_eq!(summary.water_percent, 25.0);
        assert!(summary.mood.is_none());
        assert_eq!(summary.activities.total, 0);
        assert_eq!(summary.sleep_week.len(), 7);
    }
}
