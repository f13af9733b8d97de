//! Day-keyed entry collections.
//!
//! `upsert` is the only way an entry reaches a store. Callers build the full
//! replacement record first; stores never merge fields.

use crate::dates::DayKey;
use crate::models::DayEntry;

/// Drops any entry sharing `entry`'s day, then appends `entry`.
///
/// Untouched entries keep their relative order. Stores are not sorted by
/// date; use [`sorted_by_date`] when chronology matters.
pub fn upsert<E: DayEntry>(store: Vec<E>, entry: E) -> Vec<E> {
    let mut next: Vec<E> = store
        .into_iter()
        .filter(|existing| existing.day() != entry.day())
        .collect();
    next.push(entry);
    next
}

pub fn find_for_day<'a, E: DayEntry>(store: &'a [E], day: &DayKey) -> Option<&'a E> {
    store.iter().find(|entry| entry.day() == day)
}

/// The stored entry for `day`, or a fresh one from `default_factory`.
/// The synthesized entry is not written anywhere.
pub fn entry_for_day<E, F>(store: &[E], day: &DayKey, default_factory: F) -> E
where
    E: DayEntry + Clone,
    F: FnOnce() -> E,
{
    find_for_day(store, day)
        .cloned()
        .unwrap_or_else(default_factory)
}

/// Entries recorded on any of `days`, in the order of `days`. Days without an
/// entry are skipped.
pub fn entries_in_window<'a, E: DayEntry>(store: &'a [E], days: &[DayKey]) -> Vec<&'a E> {
    days.iter()
        .filter_map(|day| find_for_day(store, day))
        .collect()
}

pub fn sorted_by_date<E: DayEntry>(store: &[E]) -> Vec<&E> {
    let mut sorted: Vec<&E> = store.iter().collect();
    sorted.sort_by(|a, b| a.day().cmp(b.day()));
    sorted
}
