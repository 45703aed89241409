use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use uuid::Uuid;

use vocab_srs::config::AppConfig;
use vocab_srs::{JsonFileStore, ReviewSession, SystemClock, VocabItem};

/// Shared application state for CLI commands
pub struct App {
    pub config: AppConfig,
    pub session: ReviewSession<JsonFileStore, SystemClock>,
}

impl App {
    /// Resolve config and flags, then open the user's collection
    pub fn new(
        config_path: Option<PathBuf>,
        data_dir: Option<PathBuf>,
        user: Option<String>,
    ) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => AppConfig::load(&path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => AppConfig::load_default().context("Failed to load config")?,
        };
        if data_dir.is_some() {
            config.data_dir = data_dir;
        }
        if user.is_some() {
            config.user = user;
        }

        let data_dir = config
            .data_dir()
            .context("Failed to get data directory")?;
        let store = JsonFileStore::new(data_dir);
        store.init().context("Failed to initialize storage")?;

        let session = ReviewSession::open_default(store, config.user())
            .with_context(|| format!("Failed to load vocabulary for '{}'", config.user()))?
            .with_new_item_limit(config.new_item_limit);

        Ok(Self { config, session })
    }

    /// Find an item by full id or unambiguous id prefix
    pub fn find_item(&self, id: &str) -> Result<VocabItem> {
        let items = self.session.items();

        if let Ok(uuid) = Uuid::parse_str(id) {
            return Ok(self.session.get(uuid)?.clone());
        }

        let prefix = id.to_lowercase();
        let matches: Vec<&VocabItem> = items
            .iter()
            .filter(|item| item.id.to_string().starts_with(&prefix))
            .collect();

        match matches.len() {
            0 => bail!("No item with id '{}'", id),
            1 => Ok(matches[0].clone()),
            _ => {
                let listing = matches
                    .iter()
                    .map(|item| format!("  - {} {}", item.id, item.word))
                    .collect::<Vec<_>>()
                    .join("\n");
                bail!("Ambiguous id '{}'. Matches:\n{}", id, listing)
            }
        }
    }

    pub fn commit(&mut self) -> Result<()> {
        self.session.commit().context("Failed to save vocabulary")
    }
}
