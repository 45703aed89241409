use std::collections::HashMap;
use std::sync::Mutex;

use super::{Result, VocabStore};
use crate::vocab::VocabItem;

/// In-process store, mainly for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: Mutex<HashMap<String, Vec<VocabItem>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a snapshot was ever saved for `user`
    pub fn contains_user(&self, user: &str) -> bool {
        self.users
            .lock()
            .map(|users| users.contains_key(user))
            .unwrap_or(false)
    }
}

impl VocabStore for MemoryStore {
    fn load(&self, user: &str) -> Result<Vec<VocabItem>> {
        let users = self.users.lock().unwrap_or_else(|e| e.into_inner());
        Ok(users.get(user).cloned().unwrap_or_default())
    }

    fn save(&self, user: &str, items: &[VocabItem]) -> Result<()> {
        let mut users = self.users.lock().unwrap_or_else(|e| e.into_inner());
        users.insert(user.to_string(), items.to_vec());
        Ok(())
    }
}
