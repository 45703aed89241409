//! SM-2 spaced repetition scheduling for vocabulary review.
//!
//! - `vocab`: the scheduler. Pure functions over `VocabItem`s plus clocks.
//! - `storage`: per-user snapshot stores.
//! - `session`: the single-writer layer that ties the two together.
//! - `config`: TOML configuration for the command line front end.

pub mod config;
pub mod session;
pub mod storage;
pub mod vocab;

pub use session::{ReviewSession, SessionError};
pub use storage::{JsonFileStore, MemoryStore, StorageError, VocabStore};
pub use vocab::{
    classify_mastery, compute_stats, create_item, get_due_items, get_due_today,
    map_button_to_quality, sort_by_mastery, update_schedule, Clock, FixedClock, MasteryInfo,
    MasteryLevel, ReviewButton, SchedulerError, SystemClock, VocabItem, VocabStats,
};
