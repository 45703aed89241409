//! Vocabulary spaced repetition scheduling
//!
//! This module provides:
//! - SM-2 review updates over `VocabItem`s
//! - Due-item queries, mastery tiers, sorting and statistics
//! - Answer button to quality mapping
//! - Injectable clocks
//!
//! Every function takes items by value or slice and returns new data; no
//! function resolves item ids. Id lookups belong to the caller (see
//! `crate::session`).

pub mod algorithm;
pub mod clock;
pub mod error;
pub mod models;
pub mod queries;

pub use algorithm::{
    format_interval, map_button_to_quality, preview_intervals, update_schedule, MIN_EASE_FACTOR,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::SchedulerError;
pub use models::*;
pub use queries::{
    classify_mastery, compute_stats, end_of_day, get_due_items, get_due_today, sort_by_mastery,
};
