use anyhow::Result;

use vocab_srs::MasteryLevel;

use crate::app::App;
use crate::render::terminal::{self, Color};
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let stats = app.session.stats();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        OutputFormat::Plain => {
            println!(
                "{} ({})",
                terminal::paint("Vocabulary", Color::BOLD, use_color),
                app.session.user()
            );
            println!("  Total:     {}", stats.total);
            println!("  Due today: {}", stats.due_today);
            println!("  Overdue:   {}", stats.overdue);
            println!();
            let tiers = [
                (MasteryLevel::New, stats.by_mastery.new),
                (MasteryLevel::Learning, stats.by_mastery.learning),
                (MasteryLevel::Familiar, stats.by_mastery.familiar),
                (MasteryLevel::Mastered, stats.by_mastery.mastered),
            ];
            for (level, count) in tiers {
                let label = format!("{:<9}", level.label());
                println!(
                    "  {} {}",
                    terminal::paint(&label, terminal::mastery_color(level), use_color),
                    count
                );
            }
        }
    }

    Ok(())
}
