//! JSON extractor with automatic validation using the validator crate.

use crate::errors::ErrorBody;
use axum::{
    extract::{FromRequest, Json, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Validates the request body using the `validator` crate's `Validate` trait.
/// Both deserialization failures and validation failures reject with the
/// `{success: false, error}` envelope and a 400 status.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateItem {
///     #[validate(length(min = 1))]
///     name: String,
/// }
///
/// async fn create_item(ValidatedJson(payload): ValidatedJson<CreateItem>) -> String {
///     format!("Creating item: {}", payload.name)
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await.map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                axum::Json(ErrorBody::new(e.body_text())),
            )
                .into_response()
        })?;

        data.validate().map_err(|e| {
            // Flatten validator errors to a single human-readable message
            let message = e
                .field_errors()
                .iter()
                .flat_map(|(field, errors)| {
                    errors.iter().map(move |err| match &err.message {
                        Some(msg) => format!("{}: {}", field, msg),
                        None => format!("{}: {}", field, err.code),
                    })
                })
                .collect::<Vec<_>>()
                .join("; ");

            (StatusCode::BAD_REQUEST, axum::Json(ErrorBody::new(message))).into_response()
        })?;

        Ok(ValidatedJson(data))
    }
}
