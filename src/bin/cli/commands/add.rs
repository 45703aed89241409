use anyhow::Result;

use crate::app::App;
use crate::render::terminal::{self, Color};
use crate::OutputFormat;

pub fn run(
    app: &mut App,
    word: &str,
    translation: &str,
    example: Option<&str>,
    phonetic: Option<&str>,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let item = app.session.add_word(
        word,
        translation,
        example.unwrap_or_default(),
        phonetic.unwrap_or_default(),
    );
    app.commit()?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&terminal::item_json(&item))?);
        }
        OutputFormat::Plain => {
            println!(
                "Added {} - {}",
                terminal::paint(&item.word, Color::BOLD, use_color),
                item.translation
            );
            if !item.example.is_empty() {
                println!("  Example: {}", item.example);
            }
            println!("  ID: {}", item.id);
        }
    }

    Ok(())
}
