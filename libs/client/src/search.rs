//! Shared search term state.
//!
//! The search box, the suggestion dropdown and the item grid all read the
//! same term. [`SearchState`] holds it in a watch channel so every consumer
//! sees updates, persists it so a restart keeps the last search, and
//! [`Debouncer`] turns raw keystrokes into a calmer stream for anything
//! expensive downstream.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::warn;

use crate::error::{ClientError, ClientResult};

/// Persistence hook for the search term.
pub trait SearchStore: Send + Sync {
    /// Last persisted term, if any.
    fn load(&self) -> Option<String>;
    /// Persist the current term.
    fn save(&self, term: &str) -> ClientResult<()>;
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedSearch {
    search_term: String,
}

/// Stores the search term as a small JSON file.
#[derive(Debug, Clone)]
pub struct FileSearchStore {
    path: PathBuf,
}

impl FileSearchStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SearchStore for FileSearchStore {
    fn load(&self) -> Option<String> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let persisted: PersistedSearch = serde_json::from_str(&raw).ok()?;
        Some(persisted.search_term)
    }

    fn save(&self, term: &str) -> ClientResult<()> {
        let raw = serde_json::to_string(&PersistedSearch {
            search_term: term.to_string(),
        })
        .map_err(|e| ClientError::Storage(e.to_string()))?;
        fs::write(&self.path, raw).map_err(|e| ClientError::Storage(e.to_string()))
    }
}

/// The current search term, shared between every part of the UI.
#[derive(Clone)]
pub struct SearchState {
    tx: Arc<watch::Sender<String>>,
    store: Arc<dyn SearchStore>,
}

impl SearchState {
    /// Create the state, seeding the term from the store.
    pub fn new(store: impl SearchStore + 'static) -> Self {
        let initial = store.load().unwrap_or_default();
        let (tx, _rx) = watch::channel(initial);
        Self {
            tx: Arc::new(tx),
            store: Arc::new(store),
        }
    }

    /// Current term.
    pub fn term(&self) -> String {
        self.tx.borrow().clone()
    }

    /// Replace the term, notifying subscribers and persisting it.
    ///
    /// Persistence failures are logged but do not block the update; losing
    /// the saved term across restarts is better than a dead search box.
    pub fn set_term(&self, term: impl Into<String>) {
        let term = term.into();
        if let Err(error) = self.store.save(&term) {
            warn!(%error, "failed to persist search term");
        }
        self.tx.send_replace(term);
    }

    /// Subscribe to term changes.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.tx.subscribe()
    }
}

/// Trailing-edge debouncer over a watch channel.
///
/// Emits the latest value once the input has been quiet for the configured
/// delay, coalescing rapid keystrokes into a single downstream update.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    delay: Duration,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(400),
        }
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Spawn the debouncing task and return the calmed-down receiver.
    ///
    /// The task stops when either side of the pipeline is dropped.
    pub fn debounce(&self, mut input: watch::Receiver<String>) -> watch::Receiver<String> {
        let (tx, rx) = watch::channel(input.borrow().clone());
        let delay = self.delay;

        tokio::spawn(async move {
            loop {
                if input.changed().await.is_err() {
                    break;
                }
                // restart the quiet period on every further edit
                loop {
                    let sleep = tokio::time::sleep(delay);
                    tokio::pin!(sleep);
                    tokio::select! {
                        _ = &mut sleep => break,
                        changed = input.changed() => {
                            if changed.is_err() {
                                let _ = tx.send(input.borrow().clone());
                                return;
                            }
                        }
                    }
                }
                let latest = input.borrow_and_update().clone();
                if tx.send(latest).is_err() {
                    break;
                }
            }
        });

        rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullStore;

    impl SearchStore for NullStore {
        fn load(&self) -> Option<String> {
            None
        }
        fn save(&self, _term: &str) -> ClientResult<()> {
            Ok(())
        }
    }

    #[test]
    fn file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSearchStore::new(dir.path().join("search.json"));

        assert!(store.load().is_none());
        store.save("backpack").unwrap();
        assert_eq!(store.load().as_deref(), Some("backpack"));
    }

    #[test]
    fn state_seeds_from_store_and_persists_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("search.json");

        let state = SearchState::new(FileSearchStore::new(path.clone()));
        assert_eq!(state.term(), "");

        state.set_term("keys");
        assert_eq!(state.term(), "keys");

        // a fresh state sees the persisted term, like a page reload
        let reloaded = SearchState::new(FileSearchStore::new(path));
        assert_eq!(reloaded.term(), "keys");
    }

    #[tokio::test]
    async fn subscribers_see_updates() {
        let state = SearchState::new(NullStore);
        let mut rx = state.subscribe();

        state.set_term("water bottle");
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), "water bottle");
    }

    #[tokio::test(start_paused = true)]
    async fn debouncer_coalesces_rapid_keystrokes() {
        let (tx, rx) = watch::channel(String::new());
        let mut out = Debouncer::default().debounce(rx);

        tx.send("b".to_string()).unwrap();
        tx.send("ba".to_string()).unwrap();
        tx.send("backpack".to_string()).unwrap();

        out.changed().await.unwrap();
        assert_eq!(*out.borrow(), "backpack");
    }

    #[tokio::test(start_paused = true)]
    async fn debouncer_emits_again_after_a_pause() {
        let (tx, rx) = watch::channel(String::new());
        let mut out = Debouncer::new(Duration::from_millis(100)).debounce(rx);

        tx.send("first".to_string()).unwrap();
        out.changed().await.unwrap();
        assert_eq!(*out.borrow(), "first");

        tx.send("second".to_string()).unwrap();
        out.changed().await.unwrap();
        assert_eq!(*out.borrow(), "second");
    }
}
