use chrono::{DateTime, Local};

use vocab_srs::vocab::format_interval;
use vocab_srs::{MasteryLevel, VocabItem};

/// ANSI color codes
pub struct Color;

impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
}

pub fn paint(text: &str, color: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", color, text, Color::RESET)
    } else {
        text.to_string()
    }
}

pub fn mastery_color(level: MasteryLevel) -> &'static str {
    match level {
        MasteryLevel::New => Color::BLUE,
        MasteryLevel::Learning => Color::YELLOW,
        MasteryLevel::Familiar => Color::CYAN,
        MasteryLevel::Mastered => Color::GREEN,
    }
}

/// "due now", "overdue 3d", "in 2w"
pub fn describe_due(item: &VocabItem, now: &DateTime<Local>) -> String {
    let days = item.next_review.signed_duration_since(*now).num_days();
    if item.next_review <= *now {
        if days <= -1 {
            format!("overdue {}", format_interval(days.unsigned_abs() as u32))
        } else {
            "due now".to_string()
        }
    } else if days == 0 {
        let local = item.next_review.with_timezone(&Local);
        format!("today {}", local.format("%H:%M"))
    } else {
        format!("in {}", format_interval(days as u32))
    }
}

/// One-line summary used by list, due and queue
pub fn render_item_line(item: &VocabItem, now: &DateTime<Local>, use_color: bool) -> String {
    let level = item.mastery();
    let id = item.id.to_string();
    let short_id = &id[..8];
    let mut line = format!(
        "{}  {} - {}",
        paint(short_id, Color::DIM, use_color),
        paint(&item.word, Color::BOLD, use_color),
        item.translation
    );
    if !item.phonetic.is_empty() {
        line.push_str(&format!(" /{}/", item.phonetic));
    }
    let due_color = if item.is_due_at(now) { Color::RED } else { Color::DIM };
    line.push_str(&format!(
        "  [{}] {}",
        paint(level.label(), mastery_color(level), use_color),
        paint(&describe_due(item, now), due_color, use_color)
    ));
    line
}

pub fn item_json(item: &VocabItem) -> serde_json::Value {
    let mastery = vocab_srs::classify_mastery(item);
    serde_json::json!({
        "id": item.id.to_string(),
        "word": item.word,
        "translation": item.translation,
        "example": item.example,
        "phonetic": item.phonetic,
        "easeFactor": item.ease_factor,
        "interval": item.interval,
        "repetitions": item.repetitions,
        "mastery": mastery.level,
        "masteryLabel": mastery.label,
        "nextReview": item.next_review.to_rfc3339(),
        "lastReview": item.last_review.to_rfc3339(),
        "createdAt": item.created_at.to_rfc3339(),
    })
}
