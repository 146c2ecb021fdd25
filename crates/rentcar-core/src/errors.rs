//! Application error taxonomy.
//!
//! Every failure that reaches the HTTP boundary is an [`ApplicationError`].
//! Handlers and middleware propagate it with `?`; the single
//! [`IntoResponse`] implementation below maps the kind to a status code and
//! writes the uniform body:
//!
//! ```json
//! { "error": { "name": "Error", "message": "Car not found!", "details": null } }
//! ```
//!
//! Authorization failures are `401` (never `403`) and missing records are
//! `422` (never `404`).

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Map, Value, json};
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

use crate::roles::RoleName;

/// Wire name shared by every error kind.
pub const ERROR_NAME: &str = "Error";

const INTERNAL_MESSAGE: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Email already taken!")]
    EmailAlreadyTaken,

    #[error("{email} is not registered!")]
    EmailNotRegistered { email: String },

    #[error("Password is not correct!")]
    WrongPassword,

    #[error("{resource} not found!")]
    RecordNotFound { resource: &'static str },

    #[error("Access forbidden! Only {required} is allowed to perform this operation.")]
    InsufficientAccess {
        required: RoleName,
        actual: RoleName,
    },

    /// Missing or malformed `Authorization` header.
    #[error("{0}")]
    Unauthenticated(String),

    /// Bearer token failed signature or payload checks.
    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("{message}")]
    Validation { message: String, fields: Value },

    #[error("{0}")]
    BadRequest(String),

    #[error("Route not found!")]
    RouteNotFound,

    #[error("Method {0} is not allowed!")]
    MethodNotAllowed(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// `{ name, message, details }` as serialized under the `error` key.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ErrorPayload {
    pub name: String,
    pub message: String,
    #[schema(value_type = Object)]
    pub details: Value,
}

/// Response envelope for every failed request.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorPayload,
}

impl ApplicationError {
    pub fn record_not_found(resource: &'static str) -> Self {
        Self::RecordNotFound { resource }
    }

    pub fn email_not_registered(email: impl Into<String>) -> Self {
        Self::EmailNotRegistered {
            email: email.into(),
        }
    }

    pub fn insufficient_access(required: RoleName, actual: RoleName) -> Self {
        Self::InsufficientAccess { required, actual }
    }

    pub fn unauthenticated(reason: impl Into<String>) -> Self {
        Self::Unauthenticated(reason.into())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(anyhow::anyhow!(message.into()))
    }

    /// Stable kind name, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmailAlreadyTaken => "EmailAlreadyTakenError",
            Self::EmailNotRegistered { .. } => "EmailNotRegisteredError",
            Self::WrongPassword => "WrongPasswordError",
            Self::RecordNotFound { .. } => "RecordNotFoundError",
            Self::InsufficientAccess { .. } => "InsufficientAccessError",
            Self::Unauthenticated(_) => "UnauthenticatedError",
            Self::InvalidToken => "InvalidTokenError",
            Self::Validation { .. } => "ValidationError",
            Self::BadRequest(_) => "BadRequestError",
            Self::RouteNotFound => "RouteNotFoundError",
            Self::MethodNotAllowed(_) => "MethodNotAllowedError",
            Self::Database(_) => "DatabaseError",
            Self::Internal(_) => "InternalError",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::EmailAlreadyTaken => StatusCode::UNPROCESSABLE_ENTITY,
            Self::EmailNotRegistered { .. } => StatusCode::NOT_FOUND,
            Self::WrongPassword => StatusCode::UNAUTHORIZED,
            Self::RecordNotFound { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InsufficientAccess { .. } => StatusCode::UNAUTHORIZED,
            Self::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Database(_) | Self::Internal(_) => INTERNAL_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    pub fn details(&self) -> Value {
        match self {
            Self::EmailNotRegistered { email } => json!({ "email": email }),
            Self::InsufficientAccess { actual, .. } => json!({
                "role": actual,
                "reason": format!("{} is not allowed to perform this operation.", actual),
            }),
            Self::Validation { fields, .. } => fields.clone(),
            _ => Value::Null,
        }
    }

    pub fn payload(&self) -> ErrorPayload {
        ErrorPayload {
            name: ERROR_NAME.to_string(),
            message: self.message(),
            details: self.details(),
        }
    }
}

impl From<ValidationErrors> for ApplicationError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = Map::new();
        let mut messages = Vec::new();

        for (field, errors) in errors.field_errors() {
            let field_messages: Vec<Value> = errors
                .iter()
                .map(|error| {
                    let message = error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field));
                    messages.push(message.clone());
                    Value::String(message)
                })
                .collect();
            fields.insert(field.to_string(), Value::Array(field_messages));
        }

        messages.sort();

        Self::Validation {
            message: messages.join(", "),
            fields: Value::Object(fields),
        }
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(kind = self.kind(), error = %self, "Request failed");
        } else {
            tracing::debug!(kind = self.kind(), error = %self, "Request rejected");
        }

        let body = ErrorBody {
            error: self.payload(),
        };

        (status, Json(body)).into_response()
    }
}
