//! JSON file store
//!
//! Directory structure:
//! ```text
//! {base}/users/
//! └── {user}/           # percent-encoded
//!     └── vocab.json    # Array of all items for the user
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use super::{Result, StorageError, VocabStore};
use crate::vocab::VocabItem;

pub struct JsonFileStore {
    base_path: PathBuf,
}

impl JsonFileStore {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Initialize storage directories
    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(self.base_path.join("users"))?;
        Ok(())
    }

    fn user_dir(&self, user: &str) -> Result<PathBuf> {
        Ok(self.base_path.join("users").join(user_key(user)?))
    }

    /// Get the vocab.json path for a user
    pub fn vocab_path(&self, user: &str) -> Result<PathBuf> {
        Ok(self.user_dir(user)?.join("vocab.json"))
    }

    /// List users that have a saved collection
    pub fn list_users(&self) -> Result<Vec<String>> {
        let users_dir = self.base_path.join("users");
        if !users_dir.exists() {
            return Ok(Vec::new());
        }

        let mut users = Vec::new();
        for entry in fs::read_dir(&users_dir)? {
            let entry = entry?;
            if !entry.path().join("vocab.json").exists() {
                continue;
            }
            let name = entry.file_name();
            match urlencoding::decode(&name.to_string_lossy()) {
                Ok(user) => users.push(user.into_owned()),
                Err(e) => log::warn!("Skipping user directory {:?}: {}", name, e),
            }
        }
        users.sort();
        Ok(users)
    }
}

impl VocabStore for JsonFileStore {
    fn load(&self, user: &str) -> Result<Vec<VocabItem>> {
        let path = self.vocab_path(user)?;
        if !path.exists() {
            log::warn!("No vocabulary file for user {:?}, starting empty", user);
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)?;
        let items: Vec<VocabItem> = serde_json::from_str(&content)?;
        log::debug!("Loaded {} items for user {:?} from {:?}", items.len(), user, path);
        Ok(items)
    }

    /// Save using atomic write (write to .tmp then rename)
    fn save(&self, user: &str, items: &[VocabItem]) -> Result<()> {
        fs::create_dir_all(self.user_dir(user)?)?;

        let path = self.vocab_path(user)?;
        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(items)?;
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &path)?;

        log::debug!("Saved {} items for user {:?} to {:?}", items.len(), user, path);
        Ok(())
    }
}

/// Map a user key to a single safe path component.
///
/// Percent-encoding keeps distinct users in distinct directories; only
/// ASCII alphanumerics and `-_.~` pass through unescaped.
fn user_key(user: &str) -> Result<String> {
    if user.trim().is_empty() || user == "." || user == ".." {
        return Err(StorageError::InvalidUser(user.to_string()));
    }
    Ok(urlencoding::encode(user).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::models::create_item;
    use crate::vocab::update_schedule;
    use chrono::{TimeZone, Utc};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use tempfile::TempDir;

    fn create_test_store() -> (JsonFileStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().to_path_buf());
        store.init().unwrap();
        (store, temp_dir)
    }

    #[test]
    fn test_load_missing_user_is_empty() {
        let (store, _temp) = create_test_store();
        assert!(store.load("nobody").unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let (store, _temp) = create_test_store();
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 7, 45, 12).unwrap()
            + chrono::Duration::nanoseconds(123_456_789);

        let first = create_item("hund", "dog", "Der Hund bellt.", "hʊnt", &now);
        let second = update_schedule(&create_item("katze", "cat", "", "", &now), 4, &now).unwrap();
        let items = vec![first, second];

        store.save("alice", &items).unwrap();
        let loaded = store.load("alice").unwrap();
        assert_eq!(loaded, items);

        // No temp file left behind
        let tmp = store.vocab_path("alice").unwrap().with_extension("json.tmp");
        assert!(!tmp.exists());
    }

    #[test]
    fn test_save_replaces_previous_snapshot() {
        let (store, _temp) = create_test_store();
        let now = Utc::now();

        store.save("bob", &[create_item("a", "a", "", "", &now)]).unwrap();
        store.save("bob", &[]).unwrap();
        assert!(store.load("bob").unwrap().is_empty());
    }

    #[test]
    fn test_users_are_isolated() {
        let (store, _temp) = create_test_store();
        let now = Utc::now();

        store.save("alice", &[create_item("uno", "one", "", "", &now)]).unwrap();
        store.save("bob", &[create_item("dos", "two", "", "", &now)]).unwrap();

        assert_eq!(store.load("alice").unwrap()[0].word, "uno");
        assert_eq!(store.load("bob").unwrap()[0].word, "dos");
        assert_eq!(store.list_users().unwrap(), vec!["alice", "bob"]);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let (store, _temp) = create_test_store();
        let path = store.vocab_path("carol").unwrap();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(store.load("carol"), Err(StorageError::Json(_))));
    }

    #[test]
    fn test_user_key_encoded() {
        assert_eq!(user_key("alice").unwrap(), "alice");
        assert_eq!(user_key("alice@example.com").unwrap(), "alice%40example.com");
        assert_eq!(user_key("../etc/passwd").unwrap(), "..%2Fetc%2Fpasswd");
        assert_eq!(user_key("50%").unwrap(), "50%25");
        assert!(matches!(user_key(""), Err(StorageError::InvalidUser(_))));
        assert!(matches!(user_key("."), Err(StorageError::InvalidUser(_))));
        assert!(matches!(user_key(".."), Err(StorageError::InvalidUser(_))));
        assert!(matches!(user_key("   "), Err(StorageError::InvalidUser(_))));
    }

    #[test]
    fn test_distinct_users_do_not_collide() {
        let (store, _temp) = create_test_store();
        let now = Utc::now();
        let users = ["a/b", "a b", "a_b", "a%2Fb", "Zoë"];

        for user in users {
            store.save(user, &[create_item(user, "", "", "", &now)]).unwrap();
        }
        for user in users {
            let loaded = store.load(user).unwrap();
            assert_eq!(loaded.len(), 1);
            assert_eq!(loaded[0].word, user);
        }

        let mut expected: Vec<String> = users.iter().map(|u| u.to_string()).collect();
        expected.sort();
        assert_eq!(store.list_users().unwrap(), expected);
    }

    #[test]
    fn test_random_review_sequences_survive_file_store() {
        let (store, _temp) = create_test_store();
        let mut rng = StdRng::seed_from_u64(42);
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 7, 45, 12).unwrap();

        let items: Vec<VocabItem> = (0..50)
            .map(|i| {
                let mut item = create_item(&format!("word{}", i), "", "", "", &start);
                for _ in 0..rng.gen_range(1..=12) {
                    let at = item.next_review;
                    item = update_schedule(&item, rng.gen_range(0..=5), &at).unwrap();
                }
                item
            })
            .collect();

        store.save("dora", &items).unwrap();
        assert_eq!(store.load("dora").unwrap(), items);
    }
}
