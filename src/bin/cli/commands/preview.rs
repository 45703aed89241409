use anyhow::Result;

use vocab_srs::vocab::{format_interval, preview_intervals};
use vocab_srs::{Clock, ReviewButton};

use crate::app::App;
use crate::render::terminal::{self, Color};
use crate::OutputFormat;

pub fn run(app: &App, id: &str, format: &OutputFormat, use_color: bool) -> Result<()> {
    let item = app.find_item(id)?;
    let intervals = preview_intervals(&item, &app.session.clock().now())?;

    match format {
        OutputFormat::Json => {
            let mut output = serde_json::Map::new();
            for (button, days) in ReviewButton::ALL.iter().zip(intervals) {
                output.insert(button.to_string(), serde_json::json!(days));
            }
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!(
                "{} - {}",
                terminal::paint(&item.word, Color::BOLD, use_color),
                item.translation
            );
            for (button, days) in ReviewButton::ALL.iter().zip(intervals) {
                println!("  {:<6} {}", button.as_str(), format_interval(days));
            }
        }
    }

    Ok(())
}
