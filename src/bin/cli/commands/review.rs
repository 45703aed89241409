use anyhow::{bail, Result};

use vocab_srs::vocab::format_interval;
use vocab_srs::{Clock, ReviewButton};

use crate::app::App;
use crate::render::terminal::{self, Color};
use crate::OutputFormat;

pub fn run(
    app: &mut App,
    id: &str,
    button: Option<&str>,
    quality: Option<i32>,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let quality = match (button, quality) {
        (Some(name), None) => name.parse::<ReviewButton>()?.quality(),
        (None, Some(q)) => q,
        (Some(_), Some(_)) => bail!("Give either a button or --quality, not both"),
        (None, None) => bail!("Missing answer: one of again, hard, good, easy or --quality N"),
    };

    let item = app.find_item(id)?;
    let before = item.mastery();
    let updated = app.session.review(item.id, quality)?;
    app.commit()?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&terminal::item_json(&updated))?);
        }
        OutputFormat::Plain => {
            let now = app.session.clock().now();
            println!(
                "{} rated {}: next review in {} ({})",
                terminal::paint(&updated.word, Color::BOLD, use_color),
                quality,
                format_interval(updated.interval),
                updated.next_review.with_timezone(&now.timezone()).format("%Y-%m-%d %H:%M"),
            );
            println!(
                "  Ease {:.2}, repetitions {}",
                updated.ease_factor, updated.repetitions
            );
            let after = updated.mastery();
            if after != before {
                println!(
                    "  {} -> {}",
                    before.label(),
                    terminal::paint(after.label(), terminal::mastery_color(after), use_color)
                );
            }
        }
    }

    Ok(())
}
