use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use rentcar_core::ApplicationError;
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON body extractor that runs `validator` rules and reports every failure
/// through [`ApplicationError`].
///
/// Malformed bodies become `400 BadRequest`; rule violations become
/// `422 Validation` with per-field messages in `details`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

fn rejection_to_error(rejection: JsonRejection) -> ApplicationError {
    if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
        return ApplicationError::bad_request("Missing 'Content-Type: application/json' header");
    }

    let error_msg = rejection.body_text();

    if error_msg.contains("missing field") {
        let field = error_msg
            .split("missing field `")
            .nth(1)
            .and_then(|s| s.split('`').next())
            .unwrap_or("unknown");
        return ApplicationError::bad_request(format!("{} is required", field));
    }

    if error_msg.contains("invalid type") {
        return ApplicationError::bad_request("Invalid field type in request");
    }

    ApplicationError::bad_request("Invalid request body")
}

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApplicationError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}
