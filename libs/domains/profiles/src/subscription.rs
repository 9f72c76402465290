use crate::models::Profile;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// A live view of one profile.
///
/// Holds the latest known state (`None` while the document does not exist)
/// and updates whenever the backing listener observes a change. Dropping the
/// subscription stops the listener, mirroring an explicit [`unsubscribe`].
///
/// [`unsubscribe`]: ProfileSubscription::unsubscribe
#[derive(Debug)]
pub struct ProfileSubscription {
    receiver: watch::Receiver<Option<Profile>>,
    listener: JoinHandle<()>,
}

impl ProfileSubscription {
    pub(crate) fn new(receiver: watch::Receiver<Option<Profile>>, listener: JoinHandle<()>) -> Self {
        Self { receiver, listener }
    }

    /// Current snapshot of the profile.
    pub fn current(&self) -> Option<Profile> {
        self.receiver.borrow().clone()
    }

    /// Wait for the next change and return the new snapshot.
    ///
    /// Returns `None` once the listener has stopped and no further updates
    /// will arrive.
    pub async fn changed(&mut self) -> Option<Option<Profile>> {
        match self.receiver.changed().await {
            Ok(()) => Some(self.receiver.borrow_and_update().clone()),
            Err(_) => None,
        }
    }

    /// Stop listening for changes.
    pub fn unsubscribe(self) {
        self.listener.abort();
    }
}

impl Drop for ProfileSubscription {
    fn drop(&mut self) {
        self.listener.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample(display_name: &str) -> Profile {
        Profile {
            id: "uid-1".to_string(),
            first_name: Some("John".to_string()),
            last_name: Some("Doe".to_string()),
            display_name: Some(display_name.to_string()),
            email: "jd@fullsail.edu".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn delivers_updates_in_order() {
        let (tx, rx) = watch::channel(Some(sample("John Doe")));
        let handle = tokio::spawn(async move {
            tx.send(Some(sample("Johnny"))).ok();
            // keep the sender alive until aborted
            std::future::pending::<()>().await;
        });
        let mut sub = ProfileSubscription::new(rx, handle);

        let next = sub.changed().await.flatten().unwrap();
        assert_eq!(next.display_name.as_deref(), Some("Johnny"));
    }

    #[tokio::test]
    async fn unsubscribe_stops_the_listener() {
        let (tx, rx) = watch::channel::<Option<Profile>>(None);
        let handle = tokio::spawn(async move {
            let _tx = tx;
            std::future::pending::<()>().await;
        });
        let sub = ProfileSubscription::new(rx, handle);

        let mut observer = sub.receiver.clone();
        sub.unsubscribe();

        // aborting the listener drops the sender, which closes the channel
        assert!(observer.changed().await.is_err());
    }

    #[tokio::test]
    async fn changed_returns_none_once_listener_is_gone() {
        let (tx, rx) = watch::channel::<Option<Profile>>(None);
        drop(tx);
        let mut sub = ProfileSubscription::new(rx, tokio::spawn(async {}));
        assert!(sub.changed().await.is_none());
    }
}
