use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &mut App, id: &str, format: &OutputFormat) -> Result<()> {
    let item = app.find_item(id)?;
    let removed = app.session.remove(item.id)?;
    app.commit()?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "id": removed.id.to_string(),
                "word": removed.word,
                "removed": true,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("Removed \"{}\" ({})", removed.word, removed.id);
        }
    }

    Ok(())
}
