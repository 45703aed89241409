//! SM-2 Spaced Repetition Algorithm
//!
//! Implementation of the SuperMemo 2 algorithm for calculating
//! review intervals and ease factors from self-rated recall quality.
//!
//! Quality ratings (0-5):
//! - 0: Complete blackout, no recall
//! - 1: Incorrect, but upon seeing answer, remembered
//! - 2: Incorrect, but answer seemed easy to recall
//! - 3: Correct response with serious difficulty
//! - 4: Correct response after hesitation
//! - 5: Perfect response with no hesitation

use chrono::{DateTime, Days, TimeZone, Utc};

use super::error::{Result, SchedulerError};
use super::models::{ReviewButton, VocabItem};

/// Minimum ease factor allowed
pub const MIN_EASE_FACTOR: f64 = 1.3;

pub const MIN_QUALITY: i32 = 0;
pub const MAX_QUALITY: i32 = 5;

/// Lowest quality that counts as a successful recall
pub const PASSING_QUALITY: i32 = 3;

/// Reject ratings outside 0-5 instead of clamping them
pub fn validate_quality(quality: i32) -> Result<i32> {
    if (MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
        Ok(quality)
    } else {
        log::warn!("Rejected out-of-range quality rating {}", quality);
        Err(SchedulerError::InvalidQuality(quality))
    }
}

/// EF' = EF + (0.1 - (5-q) * (0.08 + (5-q) * 0.02)), floored at 1.3
pub fn next_ease_factor(ease_factor: f64, quality: i32) -> f64 {
    let miss = f64::from(MAX_QUALITY - quality);
    let updated = ease_factor + (0.1 - miss * (0.08 + miss * 0.02));
    updated.max(MIN_EASE_FACTOR)
}

/// Add calendar days in the zone of `from`, keeping its local time-of-day
pub fn add_days<Tz: TimeZone>(from: &DateTime<Tz>, days: u32) -> Result<DateTime<Utc>> {
    from.clone()
        .checked_add_days(Days::new(u64::from(days)))
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or(SchedulerError::DateOutOfRange)
}

/// Apply one review to an item and return its new state
///
/// The input item is left untouched. `now` becomes `last_review`, and
/// `next_review` is `now` plus the new interval in calendar days.
pub fn update_schedule<Tz: TimeZone>(
    item: &VocabItem,
    quality: i32,
    now: &DateTime<Tz>,
) -> Result<VocabItem> {
    let quality = validate_quality(quality)?;

    let ease_factor = item.ease_factor;
    let (interval, repetitions) = if quality < PASSING_QUALITY {
        // Forgotten: start over tomorrow
        (1, 0)
    } else {
        let interval = match item.repetitions {
            0 => 1,
            1 => 6,
            _ => (f64::from(item.interval) * ease_factor).round() as u32,
        };
        (interval, item.repetitions.saturating_add(1))
    };

    // Ease factor moves on every review, pass or fail
    let ease_factor = next_ease_factor(ease_factor, quality);

    let next_review = add_days(now, interval)?;

    log::debug!(
        "Reviewed {} with quality {}: interval {} -> {}, reps {} -> {}, ease {:.2} -> {:.2}",
        item.id,
        quality,
        item.interval,
        interval,
        item.repetitions,
        repetitions,
        item.ease_factor,
        ease_factor
    );

    Ok(VocabItem {
        ease_factor,
        interval,
        repetitions,
        last_review: now.with_timezone(&Utc),
        next_review,
        ..item.clone()
    })
}

/// Map an answer button name to its SM-2 quality
pub fn map_button_to_quality(button: &str) -> Result<i32> {
    button.parse::<ReviewButton>().map(|b| b.quality())
}

/// Interval each button would produce, in `ReviewButton::ALL` order
/// (Again, Hard, Good, Easy). Used to label the buttons before answering.
pub fn preview_intervals<Tz: TimeZone>(item: &VocabItem, now: &DateTime<Tz>) -> Result<[u32; 4]> {
    let mut intervals = [0; 4];
    for (slot, button) in intervals.iter_mut().zip(ReviewButton::ALL) {
        *slot = update_schedule(item, button.quality(), now)?.interval;
    }
    Ok(intervals)
}

/// Format an interval in days to a human-readable string
pub fn format_interval(days: u32) -> String {
    if days == 0 {
        "now".to_string()
    } else if days < 7 {
        format!("{}d", days)
    } else if days < 30 {
        format!("{}w", days / 7)
    } else if days < 365 {
        format!("{}mo", days / 30)
    } else {
        format!("{}y", days / 365)
    }
}
