mod app;
mod commands;
mod render;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "vocab-srs", about = "Spaced repetition vocabulary trainer", version)]
struct Cli {
    /// Config file (default: <config dir>/vocab-srs/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Store root, overriding the config file
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Whose collection to open, overriding the config file
    #[arg(long, global = true)]
    user: Option<String>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Add a word to the collection
    Add {
        word: String,
        translation: String,
        /// Example sentence
        #[arg(long)]
        example: Option<String>,
        /// Pronunciation
        #[arg(long)]
        phonetic: Option<String>,
    },

    /// Record an answer for a word
    Review {
        /// Item id (full or unambiguous prefix)
        id: String,
        /// again, hard, good or easy
        button: Option<String>,
        /// Raw SM-2 quality 0-5 instead of a button
        #[arg(long, allow_negative_numbers = true)]
        quality: Option<i32>,
    },

    /// List words due for review
    Due {
        /// Include words coming due later today
        #[arg(long)]
        today: bool,
    },

    /// Next words to review, most overdue first
    Queue {
        /// Maximum number of words
        #[arg(long)]
        limit: Option<usize>,
    },

    /// List all words, most practiced first
    List,

    /// Show collection statistics
    Stats,

    /// Show the interval each answer would give
    Preview {
        /// Item id (full or unambiguous prefix)
        id: String,
    },

    /// Delete a word
    Remove {
        /// Item id (full or unambiguous prefix)
        id: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && std::io::stdout().is_terminal();
    let mut app = app::App::new(cli.config, cli.data_dir, cli.user)?;

    match cli.command {
        Command::Add { word, translation, example, phonetic } => {
            commands::add::run(
                &mut app,
                &word,
                &translation,
                example.as_deref(),
                phonetic.as_deref(),
                &cli.format,
                use_color,
            )?;
        }
        Command::Review { id, button, quality } => {
            commands::review::run(&mut app, &id, button.as_deref(), quality, &cli.format, use_color)?;
        }
        Command::Due { today } => {
            commands::due::run_due(&app, today, &cli.format, use_color)?;
        }
        Command::Queue { limit } => {
            commands::due::run_queue(&app, limit, &cli.format, use_color)?;
        }
        Command::List => {
            commands::list::run(&app, &cli.format, use_color)?;
        }
        Command::Stats => {
            commands::stats::run(&app, &cli.format, use_color)?;
        }
        Command::Preview { id } => {
            commands::preview::run(&app, &id, &cli.format, use_color)?;
        }
        Command::Remove { id } => {
            commands::remove::run(&mut app, &id, &cli.format)?;
        }
    }

    Ok(())
}
