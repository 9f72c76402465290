//! The report-an-item submission flow.
//!
//! Submitting a report is a two-step dance: when a photo is attached it is
//! uploaded first, then the item is created carrying the returned URL.
//! [`SubmissionFlow`] drives that sequence as a small state machine so the
//! UI can render exactly one of editing / submitting / succeeded / failed.

use async_trait::async_trait;
use bytes::Bytes;
use domain_items::{CreateItem, Item, ItemStatus, Location};
use std::str::FromStr;
use tracing::info;

use crate::api::LostFoundApi;
use crate::error::{ClientError, ClientResult};

/// Category choices offered by the report form.
pub const CATEGORIES: [&str; 7] = [
    "Electronics",
    "Clothing",
    "Books",
    "Accessories",
    "Keys",
    "ID/Cards",
    "Other",
];

/// Maximum attachment size accepted client-side (5 MiB).
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Whether the reporter lost the item or found someone else's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportKind {
    #[default]
    Lost,
    Found,
}

impl FromStr for ReportKind {
    type Err = ClientError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "lost" => Ok(ReportKind::Lost),
            "found" => Ok(ReportKind::Found),
            other => Err(ClientError::Invalid(format!("Unknown report kind: {other}"))),
        }
    }
}

impl From<ReportKind> for ItemStatus {
    fn from(kind: ReportKind) -> Self {
        match kind {
            ReportKind::Lost => ItemStatus::Lost,
            ReportKind::Found => ItemStatus::Found,
        }
    }
}

/// A photo picked in the form, validated before any byte leaves the device.
#[derive(Debug, Clone)]
pub struct ImageAttachment {
    pub filename: String,
    pub content_type: String,
    pub data: Bytes,
}

impl ImageAttachment {
    pub fn validate(&self) -> ClientResult<()> {
        if self.data.len() > MAX_IMAGE_BYTES {
            return Err(ClientError::Invalid(
                "Image must be less than 5MB".to_string(),
            ));
        }
        if !self.content_type.starts_with("image/") {
            return Err(ClientError::Invalid(
                "Only image files are allowed".to_string(),
            ));
        }
        Ok(())
    }
}

/// Everything the reporter typed into the form.
#[derive(Debug, Clone)]
pub struct ReportForm {
    pub name: String,
    pub description: String,
    pub kind: ReportKind,
    pub category: String,
    pub location: Option<Location>,
    pub image: Option<ImageAttachment>,
}

impl Default for ReportForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            kind: ReportKind::Lost,
            category: "Other".to_string(),
            location: None,
            image: None,
        }
    }
}

/// Where the flow currently stands.
#[derive(Debug, Clone)]
pub enum SubmissionState {
    Editing,
    Submitting,
    Succeeded(Item),
    Failed(String),
}

/// The slice of the API the flow needs; mocked in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitBackend: Send + Sync {
    /// Upload a photo, returning its public URL.
    async fn upload_image(
        &self,
        filename: &str,
        content_type: &str,
        data: Bytes,
    ) -> ClientResult<String>;

    /// Create the item report.
    async fn create_item(&self, input: CreateItem) -> ClientResult<Item>;
}

#[async_trait]
impl SubmitBackend for LostFoundApi {
    async fn upload_image(
        &self,
        filename: &str,
        content_type: &str,
        data: Bytes,
    ) -> ClientResult<String> {
        let uploaded = LostFoundApi::upload_image(self, filename, content_type, data).await?;
        Ok(uploaded.image_url)
    }

    async fn create_item(&self, input: CreateItem) -> ClientResult<Item> {
        LostFoundApi::create_item(self, &input).await
    }
}

/// Drives one report from editing through submission.
pub struct SubmissionFlow<B: SubmitBackend> {
    backend: B,
    pub form: ReportForm,
    state: SubmissionState,
}

impl<B: SubmitBackend> SubmissionFlow<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            form: ReportForm::default(),
            state: SubmissionState::Editing,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Submit the current form.
    ///
    /// On success the form resets to its defaults for the next report; on
    /// failure it is preserved so the reporter can fix and retry. A second
    /// call while a submission is in flight is a no-op.
    pub async fn submit(&mut self) -> &SubmissionState {
        if matches!(self.state, SubmissionState::Submitting) {
            return &self.state;
        }

        if let Some(image) = &self.form.image {
            if let Err(error) = image.validate() {
                self.state = SubmissionState::Failed(error.to_string());
                return &self.state;
            }
        }

        self.state = SubmissionState::Submitting;

        let image_url = match &self.form.image {
            Some(image) => {
                match self
                    .backend
                    .upload_image(&image.filename, &image.content_type, image.data.clone())
                    .await
                {
                    Ok(url) => Some(url),
                    Err(error) => {
                        self.state = SubmissionState::Failed(error.to_string());
                        return &self.state;
                    }
                }
            }
            None => None,
        };

        let input = CreateItem {
            name: self.form.name.clone(),
            description: self.form.description.clone(),
            status: self.form.kind.into(),
            category: Some(self.form.category.clone()),
            location: self.form.location,
            image_url,
        };

        match self.backend.create_item(input).await {
            Ok(item) => {
                info!(id = %item.id, "item report submitted");
                self.form = ReportForm::default();
                self.state = SubmissionState::Succeeded(item);
            }
            Err(error) => {
                self.state = SubmissionState::Failed(error.to_string());
            }
        }

        &self.state
    }

    /// Back to editing, keeping whatever is in the form.
    pub fn reset_state(&mut self) {
        self.state = SubmissionState::Editing;
    }
}
