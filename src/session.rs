//! Review session: the single writer for one user's collection
//!
//! A session loads a snapshot from a `VocabStore`, applies additions, removals
//! and reviews in memory, and writes the full collection back on `commit`.
//! This is the layer that resolves item ids; the scheduler functions it calls
//! only ever see items.

use thiserror::Error;
use uuid::Uuid;

use crate::storage::{StorageError, VocabStore};
use crate::vocab::algorithm::update_schedule;
use crate::vocab::clock::{Clock, SystemClock};
use crate::vocab::models::{create_item, ReviewButton, ReviewRecord, VocabItem, VocabStats};
use crate::vocab::queries::{compute_stats, get_due_items, get_due_today, sort_by_mastery};
use crate::vocab::SchedulerError;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Scheduler(#[from] SchedulerError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl SessionError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Scheduler(SchedulerError::NotFound(_)))
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;

pub struct ReviewSession<S: VocabStore, C: Clock = SystemClock> {
    store: S,
    clock: C,
    user: String,
    items: Vec<VocabItem>,
    history: Vec<ReviewRecord>,
    new_item_limit: Option<usize>,
    dirty: bool,
}

impl<S: VocabStore> ReviewSession<S, SystemClock> {
    /// Open a session on the system clock
    pub fn open_default(store: S, user: &str) -> Result<Self> {
        Self::open(store, SystemClock, user)
    }
}

impl<S: VocabStore, C: Clock> ReviewSession<S, C> {
    /// Load the user's snapshot and start a session over it
    pub fn open(store: S, clock: C, user: &str) -> Result<Self> {
        let items = store.load(user)?;
        log::info!("Opened review session for {:?} with {} items", user, items.len());
        Ok(Self {
            store,
            clock,
            user: user.to_string(),
            items,
            history: Vec::new(),
            new_item_limit: None,
            dirty: false,
        })
    }

    /// Cap how many never-reviewed items `review_queue` hands out
    pub fn with_new_item_limit(mut self, limit: Option<usize>) -> Self {
        self.new_item_limit = limit;
        self
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn items(&self) -> &[VocabItem] {
        &self.items
    }

    pub fn history(&self) -> &[ReviewRecord] {
        &self.history
    }

    /// Whether there are changes not yet committed to the store
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn get(&self, id: Uuid) -> Result<&VocabItem> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or_else(|| SchedulerError::NotFound(id).into())
    }

    fn position(&self, id: Uuid) -> Result<usize> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| {
                log::warn!("Item {} not found in collection of {:?}", id, self.user);
                SchedulerError::NotFound(id).into()
            })
    }

    pub fn add_word(
        &mut self,
        word: &str,
        translation: &str,
        example: &str,
        phonetic: &str,
    ) -> VocabItem {
        let item = create_item(word, translation, example, phonetic, &self.clock.now());
        self.items.push(item.clone());
        self.dirty = true;
        item
    }

    /// Remove an item from the collection; nothing else references it
    pub fn remove(&mut self, id: Uuid) -> Result<VocabItem> {
        let pos = self.position(id)?;
        let removed = self.items.remove(pos);
        self.dirty = true;
        log::info!("Removed vocabulary item {} ({:?})", removed.id, removed.word);
        Ok(removed)
    }

    /// Apply a quality rating to the item with `id`
    pub fn review(&mut self, id: Uuid, quality: i32) -> Result<VocabItem> {
        let pos = self.position(id)?;
        let updated = update_schedule(&self.items[pos], quality, &self.clock.now())?;

        self.history.push(ReviewRecord::from_item(&updated, quality));
        self.items[pos] = updated.clone();
        self.dirty = true;
        Ok(updated)
    }

    pub fn review_button(&mut self, id: Uuid, button: ReviewButton) -> Result<VocabItem> {
        self.review(id, button.quality())
    }

    pub fn due_items(&self) -> Vec<VocabItem> {
        get_due_items(&self.items, &self.clock.now())
    }

    pub fn due_today(&self) -> Vec<VocabItem> {
        get_due_today(&self.items, &self.clock.now())
    }

    pub fn stats(&self) -> VocabStats {
        compute_stats(&self.items, &self.clock.now())
    }

    pub fn sorted_by_mastery(&self) -> Vec<VocabItem> {
        sort_by_mastery(&self.items)
    }

    /// Due items to work through next, most overdue first
    ///
    /// Never-reviewed items count against the session's new item limit;
    /// `limit` caps the whole queue.
    pub fn review_queue(&self, limit: Option<usize>) -> Vec<VocabItem> {
        let mut due = self.due_items();
        due.sort_by(|a, b| a.next_review.cmp(&b.next_review));

        let mut new_taken = 0;
        let new_limit = self.new_item_limit.unwrap_or(usize::MAX);
        let queue = due.into_iter().filter(|item| {
            if !item.is_unreviewed() {
                return true;
            }
            new_taken += 1;
            new_taken <= new_limit
        });

        match limit {
            Some(n) => queue.take(n).collect(),
            None => queue.collect(),
        }
    }

    /// Write the full collection back to the store
    pub fn commit(&mut self) -> Result<()> {
        self.store.save(&self.user, &self.items)?;
        self.dirty = false;
        log::info!(
            "Committed {} items for {:?} ({} reviews this session)",
            self.items.len(),
            self.user,
            self.history.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{JsonFileStore, MemoryStore};
    use crate::vocab::clock::FixedClock;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use tempfile::TempDir;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, 1, 9, 0, 0).unwrap()
    }

    fn open_session(store: &MemoryStore) -> ReviewSession<&MemoryStore, FixedClock<Utc>> {
        ReviewSession::open(store, FixedClock::new(start()), "tester").unwrap()
    }

    #[test]
    fn test_add_and_commit() {
        let store = MemoryStore::new();
        let mut session = open_session(&store);
        assert!(!session.is_dirty());

        let item = session.add_word("libro", "book", "Leo un libro.", "ˈliβɾo");
        assert_eq!(item.created_at, start());
        assert!(session.is_dirty());
        assert!(store.load("tester").unwrap().is_empty());

        session.commit().unwrap();
        assert!(!session.is_dirty());
        assert_eq!(store.load("tester").unwrap(), vec![item]);
    }

    #[test]
    fn test_review_updates_in_place() {
        let store = MemoryStore::new();
        let mut session = open_session(&store);
        let a = session.add_word("a", "1", "", "");
        let b = session.add_word("b", "2", "", "");
        let c = session.add_word("c", "3", "", "");

        let updated = session.review_button(b.id, ReviewButton::Good).unwrap();
        assert_eq!(updated.interval, 1);
        assert_eq!(updated.next_review, start() + Duration::days(1));

        let ids: Vec<Uuid> = session.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![a.id, b.id, c.id]);
        assert_eq!(session.get(b.id).unwrap(), &updated);

        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].item_id, b.id);
        assert_eq!(session.history()[0].quality, 4);
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let store = MemoryStore::new();
        let mut session = open_session(&store);
        session.add_word("a", "1", "", "");

        let missing = Uuid::new_v4();
        let err = session.review(missing, 4).unwrap_err();
        assert!(err.is_not_found());
        assert!(session.remove(missing).unwrap_err().is_not_found());
        assert!(session.get(missing).unwrap_err().is_not_found());
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_invalid_quality_leaves_item_untouched() {
        let store = MemoryStore::new();
        let mut session = open_session(&store);
        let item = session.add_word("a", "1", "", "");

        let err = session.review(item.id, 7).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Scheduler(SchedulerError::InvalidQuality(7))
        ));
        assert_eq!(session.get(item.id).unwrap(), &item);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_remove() {
        let store = MemoryStore::new();
        let mut session = open_session(&store);
        let a = session.add_word("a", "1", "", "");
        let b = session.add_word("b", "2", "", "");
        session.commit().unwrap();

        let removed = session.remove(a.id).unwrap();
        assert_eq!(removed.id, a.id);
        assert!(session.is_dirty());
        assert_eq!(session.items(), &[b.clone()]);

        session.commit().unwrap();
        assert_eq!(store.load("tester").unwrap(), vec![b]);
    }

    #[test]
    fn test_due_queries_follow_clock() {
        let store = MemoryStore::new();
        let mut session = open_session(&store);
        let item = session.add_word("a", "1", "", "");
        session.add_word("b", "2", "", "");

        session.review_button(item.id, ReviewButton::Easy).unwrap();
        assert_eq!(session.due_items().len(), 1);
        assert_eq!(session.stats().total, 2);
        assert_eq!(session.stats().due_today, 1);

        session.clock().advance_days(1).unwrap();
        assert_eq!(session.due_items().len(), 2);
        assert_eq!(session.stats().overdue, 1);
    }

    #[test]
    fn test_review_queue_ordering_and_limits() {
        let store = MemoryStore::new();
        let mut session = open_session(&store);

        let fresh: Vec<VocabItem> = (0..3)
            .map(|i| session.add_word(&format!("new{}", i), "", "", ""))
            .collect();
        let reviewed = session.add_word("old", "", "", "");
        session.review_button(reviewed.id, ReviewButton::Again).unwrap();

        // Two days on everything is due; new items were due earliest
        session.clock().advance(Duration::days(2));
        let mut session = session.with_new_item_limit(Some(2));

        let queue = session.review_queue(None);
        let words: Vec<&str> = queue.iter().map(|i| i.word.as_str()).collect();
        assert_eq!(words, vec!["new0", "new1", "old"]);

        let queue = session.review_queue(Some(1));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue[0].id, fresh[0].id);

        session.new_item_limit = None;
        assert_eq!(session.review_queue(None).len(), 4);
    }

    #[test]
    fn test_sorted_by_mastery() {
        let store = MemoryStore::new();
        let mut session = open_session(&store);
        let a = session.add_word("a", "", "", "");
        let b = session.add_word("b", "", "", "");
        session.review(b.id, 5).unwrap();

        let sorted = session.sorted_by_mastery();
        assert_eq!(sorted[0].id, b.id);
        assert_eq!(sorted[1].id, a.id);
    }

    #[test]
    fn test_full_cycle_through_file_store() {
        let temp_dir = TempDir::new().unwrap();
        let clock = FixedClock::new(start());

        let id = {
            let store = JsonFileStore::new(temp_dir.path().to_path_buf());
            let mut session = ReviewSession::open(store, &clock, "erin").unwrap();
            let item = session.add_word("Baum", "tree", "", "baʊ̯m");
            for quality in [4, 4, 4] {
                session.review(item.id, quality).unwrap();
            }
            session.commit().unwrap();
            item.id
        };

        let store = JsonFileStore::new(temp_dir.path().to_path_buf());
        let session = ReviewSession::open(store, &clock, "erin").unwrap();
        let item = session.get(id).unwrap();
        assert_eq!(item.repetitions, 3);
        assert_eq!(item.interval, 15);
        assert_eq!(item.next_review, start() + Duration::days(15));
        assert!(session.history().is_empty());
    }
}
