use anyhow::Result;

use vocab_srs::{Clock, VocabItem};

use crate::app::App;
use crate::render::terminal;
use crate::OutputFormat;

pub fn run_due(app: &App, today: bool, format: &OutputFormat, use_color: bool) -> Result<()> {
    let items = if today {
        app.session.due_today()
    } else {
        app.session.due_items()
    };
    print_items(app, &items, format, use_color)
}

pub fn run_queue(
    app: &App,
    limit: Option<usize>,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let items = app.session.review_queue(limit);
    print_items(app, &items, format, use_color)
}

fn print_items(
    app: &App,
    items: &[VocabItem],
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = items.iter().map(terminal::item_json).collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if items.is_empty() {
                println!("All caught up.");
                return Ok(());
            }
            let now = app.session.clock().now();
            for item in items {
                println!("{}", terminal::render_item_line(item, &now, use_color));
            }
        }
    }

    Ok(())
}
