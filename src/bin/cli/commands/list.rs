use anyhow::Result;

use vocab_srs::Clock;

use crate::app::App;
use crate::render::terminal;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let items = app.session.sorted_by_mastery();

    match format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = items.iter().map(terminal::item_json).collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if items.is_empty() {
                println!("No words yet. Add one with `vocab-srs add <word> <translation>`.");
                return Ok(());
            }
            let now = app.session.clock().now();
            for item in &items {
                println!("{}", terminal::render_item_line(item, &now, use_color));
            }
        }
    }

    Ok(())
}
