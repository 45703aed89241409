//! Data models for vocabulary scheduling

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::SchedulerError;

/// Starting ease factor for a new item
pub const DEFAULT_EASE_FACTOR: f64 = 2.5;

/// One tracked vocabulary item and its SM-2 scheduling state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabItem {
    pub id: Uuid,
    pub word: String,
    pub translation: String,
    #[serde(default)]
    pub example: String,
    #[serde(default)]
    pub phonetic: String,
    /// SM-2 ease factor, never below 1.3
    #[serde(default = "default_ease_factor")]
    pub ease_factor: f64,
    /// Days until the next review; 0 until first reviewed
    #[serde(default)]
    pub interval: u32,
    /// Consecutive successful reviews
    #[serde(default)]
    pub repetitions: u32,
    pub next_review: DateTime<Utc>,
    pub last_review: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

fn default_ease_factor() -> f64 {
    DEFAULT_EASE_FACTOR
}

impl VocabItem {
    pub fn new(
        word: String,
        translation: String,
        example: String,
        phonetic: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            word,
            translation,
            example,
            phonetic,
            ease_factor: DEFAULT_EASE_FACTOR,
            interval: 0,
            repetitions: 0,
            next_review: created_at,
            last_review: created_at,
            created_at,
        }
    }

    /// Never reviewed at all; any review sets the interval to at least one day
    pub fn is_unreviewed(&self) -> bool {
        self.interval == 0
    }

    pub fn is_due_at<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> bool {
        self.next_review <= *now
    }

    pub fn mastery(&self) -> MasteryLevel {
        MasteryLevel::from_repetitions(self.repetitions)
    }
}

/// Create a fresh item due immediately
///
/// The id is a UUIDv7, so it combines a millisecond timestamp with random bits.
pub fn create_item<Tz: TimeZone>(
    word: impl Into<String>,
    translation: impl Into<String>,
    example: impl Into<String>,
    phonetic: impl Into<String>,
    now: &DateTime<Tz>,
) -> VocabItem {
    let item = VocabItem::new(
        word.into(),
        translation.into(),
        example.into(),
        phonetic.into(),
        now.with_timezone(&Utc),
    );
    log::info!("Created vocabulary item {} ({:?})", item.id, item.word);
    item
}

/// Coarse display bucket derived from consecutive successful reviews
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MasteryLevel {
    /// Never recalled successfully
    New,
    /// 1-2 repetitions
    Learning,
    /// 3-5 repetitions
    Familiar,
    /// 6 or more repetitions
    Mastered,
}

impl MasteryLevel {
    pub fn from_repetitions(repetitions: u32) -> Self {
        match repetitions {
            0 => Self::New,
            1..=2 => Self::Learning,
            3..=5 => Self::Familiar,
            _ => Self::Mastered,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Learning => "Learning",
            Self::Familiar => "Familiar",
            Self::Mastered => "Mastered",
        }
    }
}

impl fmt::Display for MasteryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MasteryInfo {
    pub level: MasteryLevel,
    pub label: &'static str,
}

/// Item counts per mastery tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasteryCounts {
    pub new: usize,
    pub learning: usize,
    pub familiar: usize,
    pub mastered: usize,
}

impl MasteryCounts {
    pub fn record(&mut self, level: MasteryLevel) {
        match level {
            MasteryLevel::New => self.new += 1,
            MasteryLevel::Learning => self.learning += 1,
            MasteryLevel::Familiar => self.familiar += 1,
            MasteryLevel::Mastered => self.mastered += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.new + self.learning + self.familiar + self.mastered
    }
}

/// Aggregate statistics over a collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabStats {
    pub total: usize,
    pub due_today: usize,
    pub overdue: usize,
    pub by_mastery: MasteryCounts,
}

/// The four answer buttons offered during review
///
/// Qualities 0 and 2 are valid SM-2 ratings but no button produces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewButton {
    Again,
    Hard,
    Good,
    Easy,
}

impl ReviewButton {
    pub const ALL: [ReviewButton; 4] = [Self::Again, Self::Hard, Self::Good, Self::Easy];

    pub fn quality(&self) -> i32 {
        match self {
            Self::Again => 1,
            Self::Hard => 3,
            Self::Good => 4,
            Self::Easy => 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Again => "again",
            Self::Hard => "hard",
            Self::Good => "good",
            Self::Easy => "easy",
        }
    }
}

impl fmt::Display for ReviewButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReviewButton {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "again" => Ok(Self::Again),
            "hard" => Ok(Self::Hard),
            "good" => Ok(Self::Good),
            "easy" => Ok(Self::Easy),
            _ => Err(SchedulerError::UnknownButton(s.to_string())),
        }
    }
}

/// A record of a single review event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    pub item_id: Uuid,
    /// Quality rating (0-5, SM-2 scale)
    /// 0 = complete blackout
    /// 1 = incorrect, but recognized
    /// 2 = incorrect, but easy to recall
    /// 3 = correct with difficulty
    /// 4 = correct with hesitation
    /// 5 = perfect response
    pub quality: i32,
    /// Interval assigned by this review (days)
    pub interval: u32,
    /// Ease factor after this review
    pub ease_factor: f64,
    pub reviewed_at: DateTime<Utc>,
}

impl ReviewRecord {
    pub fn from_item(item: &VocabItem, quality: i32) -> Self {
        Self {
            item_id: item.id,
            quality,
            interval: item.interval,
            ease_factor: item.ease_factor,
            reviewed_at: item.last_review,
        }
    }
}
