use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::StreamExt;
use mongodb::{
    Collection, Database,
    bson::doc,
    change_stream::event::OperationType,
    options::FullDocumentType,
};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, instrument, warn};

use crate::error::ProfileResult;
use crate::models::Profile;
use crate::repository::ProfileRepository;
use crate::subscription::ProfileSubscription;

/// Storage representation of a profile. The auth uid is the `_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileDocument {
    #[serde(rename = "_id")]
    id: String,
    first_name: Option<String>,
    last_name: Option<String>,
    display_name: Option<String>,
    email: String,
    created_at: DateTime<Utc>,
}

impl From<Profile> for ProfileDocument {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id,
            first_name: profile.first_name,
            last_name: profile.last_name,
            display_name: profile.display_name,
            email: profile.email,
            created_at: profile.created_at,
        }
    }
}

impl From<ProfileDocument> for Profile {
    fn from(doc: ProfileDocument) -> Self {
        Self {
            id: doc.id,
            first_name: doc.first_name,
            last_name: doc.last_name,
            display_name: doc.display_name,
            email: doc.email,
            created_at: doc.created_at,
        }
    }
}

/// MongoDB-backed profile repository.
#[derive(Clone)]
pub struct MongoProfileRepository {
    collection: Collection<ProfileDocument>,
}

impl MongoProfileRepository {
    pub fn new(database: Database) -> Self {
        Self {
            collection: database.collection("profiles"),
        }
    }

    /// Subscribe to live changes of a single profile.
    ///
    /// Seeds the channel with the current document, then forwards change
    /// stream events until the subscription is dropped or the stream ends.
    /// Requires the server to run as a replica set.
    #[instrument(skip(self))]
    pub async fn watch_profile(&self, id: &str) -> ProfileResult<ProfileSubscription> {
        let initial = self.get_by_id(id).await?;
        let (tx, rx) = watch::channel(initial);

        let pipeline = vec![doc! { "$match": { "documentKey._id": id } }];
        let mut stream = self
            .collection
            .watch()
            .pipeline(pipeline)
            .full_document(FullDocumentType::UpdateLookup)
            .await?;

        let uid = id.to_string();
        let listener = tokio::spawn(async move {
            while let Some(event) = stream.next().await {
                match event {
                    Ok(change) => {
                        let snapshot = match change.operation_type {
                            OperationType::Delete => None,
                            _ => change.full_document.map(Profile::from),
                        };
                        if tx.send(snapshot).is_err() {
                            debug!(%uid, "profile subscription dropped, stopping listener");
                            break;
                        }
                    }
                    Err(error) => {
                        warn!(%uid, %error, "profile change stream failed");
                        break;
                    }
                }
            }
        });

        Ok(ProfileSubscription::new(rx, listener))
    }
}

#[async_trait]
impl ProfileRepository for MongoProfileRepository {
    async fn get_by_id(&self, id: &str) -> ProfileResult<Option<Profile>> {
        let found = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(found.map(Profile::from))
    }

    async fn upsert(&self, profile: Profile) -> ProfileResult<Profile> {
        let document = ProfileDocument::from(profile.clone());
        self.collection
            .replace_one(doc! { "_id": &document.id }, &document)
            .upsert(true)
            .await?;
        Ok(profile)
    }
}
