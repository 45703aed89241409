//! Read-only views over a vocabulary collection
//!
//! None of these functions look items up by id or mutate their input.

use chrono::{DateTime, LocalResult, NaiveTime, TimeZone, Utc};

use super::models::{MasteryCounts, MasteryInfo, MasteryLevel, VocabItem, VocabStats};

/// Last millisecond of the calendar day containing `now`, in `now`'s zone
pub fn end_of_day<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Utc> {
    let last_ms = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or_default();
    let naive = now.date_naive().and_time(last_ms);
    match now.timezone().from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(_, later) => later.with_timezone(&Utc),
        // Day ends inside a DST gap; fall back to the UTC reading of the wall time
        LocalResult::None => naive.and_utc(),
    }
}

/// Items whose next review is at or before `now`, in input order
pub fn get_due_items<Tz: TimeZone>(items: &[VocabItem], now: &DateTime<Tz>) -> Vec<VocabItem> {
    items.iter().filter(|item| item.next_review <= *now).cloned().collect()
}

/// Items due at any point up to the end of the current calendar day
pub fn get_due_today<Tz: TimeZone>(items: &[VocabItem], now: &DateTime<Tz>) -> Vec<VocabItem> {
    let cutoff = end_of_day(now);
    items.iter().filter(|item| item.next_review <= cutoff).cloned().collect()
}

pub fn classify_mastery(item: &VocabItem) -> MasteryInfo {
    let level = MasteryLevel::from_repetitions(item.repetitions);
    MasteryInfo {
        level,
        label: level.label(),
    }
}

/// Most practiced first: repetitions descending, then ease factor descending.
/// Ties keep their input order.
pub fn sort_by_mastery(items: &[VocabItem]) -> Vec<VocabItem> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| {
        b.repetitions
            .cmp(&a.repetitions)
            .then_with(|| b.ease_factor.total_cmp(&a.ease_factor))
    });
    sorted
}

pub fn compute_stats<Tz: TimeZone>(items: &[VocabItem], now: &DateTime<Tz>) -> VocabStats {
    let cutoff = end_of_day(now);
    let mut stats = VocabStats {
        total: items.len(),
        ..VocabStats::default()
    };
    let mut by_mastery = MasteryCounts::default();

    for item in items {
        if item.next_review <= cutoff {
            stats.due_today += 1;
        }
        if item.next_review < *now {
            stats.overdue += 1;
        }
        by_mastery.record(MasteryLevel::from_repetitions(item.repetitions));
    }

    stats.by_mastery = by_mastery;
    stats
}
