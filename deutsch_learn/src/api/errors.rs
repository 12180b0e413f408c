//! Provides ways of handling errors in API endpoint functions
//! and ways to have those errors automatically turned into correct
//! HTTP error responses when returned as `Err(error)` from those functions.

use std::borrow::Cow;
use std::num::ParseIntError;

use actix_web::body::{BoxBody, MessageBody};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use deutsch_learn_core::api_models::{
    ErrorReason,
    InvalidJsonBodyReason,
    ResponseWithErrorReason,
    WordErrorReason,
};
use deutsch_learn_core::validation::WordValidationError;
use deutsch_learn_database::QueryError;
use mime::Mime;
use serde::Serialize;
use thiserror::Error;
use tracing::error;



/// General-purpose endpoint error type.
///
/// Client errors are turned into `400 Bad Request` responses carrying an [`ErrorReason`].
/// Internal errors are logged and turned into `500 Internal Server Error` responses
/// without a body, so their details never leak through the API.
#[derive(Debug, Error)]
pub enum EndpointError {
    #[error("expected a JSON body")]
    MissingJsonBody,

    #[error("invalid JSON body: {reason:?}")]
    InvalidJsonBody { reason: InvalidJsonBodyReason },

    #[error("invalid word ID format")]
    InvalidWordIdFormat {
        #[source]
        error: ParseIntError,
    },

    #[error("invalid word fields")]
    InvalidWordFields {
        #[from]
        #[source]
        error: WordValidationError,
    },

    #[error("internal server error (generic)")]
    InternalGenericError {
        #[source]
        error: Box<dyn std::error::Error>,
    },

    #[error("internal server error (database error)")]
    InternalDatabaseError {
        #[source]
        error: sqlx::Error,
    },

    #[error("inconsistent internal database state: {problem}")]
    InvalidDatabaseState { problem: Cow<'static, str> },
}

impl EndpointError {
    pub const fn missing_json_body() -> Self {
        Self::MissingJsonBody
    }

    pub const fn invalid_json_body(reason: InvalidJsonBodyReason) -> Self {
        Self::InvalidJsonBody { reason }
    }

    pub fn internal_error<E>(error: E) -> Self
    where
        E: std::error::Error + 'static,
    {
        Self::InternalGenericError {
            error: Box::new(error),
        }
    }

    fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::InternalGenericError { .. }
                | Self::InternalDatabaseError { .. }
                | Self::InvalidDatabaseState { .. }
        )
    }
}


impl ResponseError for EndpointError {
    fn status_code(&self) -> StatusCode {
        if self.is_internal() {
            StatusCode::INTERNAL_SERVER_ERROR
        } else {
            StatusCode::BAD_REQUEST
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        let fallibly_built_response = match self {
            Self::MissingJsonBody => EndpointResponseBuilder::bad_request()
                .with_error_reason(ErrorReason::missing_json_body())
                .build(),
            Self::InvalidJsonBody { reason } => EndpointResponseBuilder::bad_request()
                .with_error_reason(ErrorReason::invalid_json_body(*reason))
                .build(),
            Self::InvalidWordIdFormat { .. } => EndpointResponseBuilder::bad_request()
                .with_error_reason(ErrorReason::invalid_word_id_format())
                .build(),
            Self::InvalidWordFields { error } => EndpointResponseBuilder::bad_request()
                .with_error_reason(WordErrorReason::invalid_word_fields(
                    error.field().as_str(),
                    error.to_string(),
                ))
                .build(),
            Self::InternalGenericError { .. }
            | Self::InternalDatabaseError { .. }
            | Self::InvalidDatabaseState { .. } => {
                error!(error = ?self, "Internal error while handling request: {self}");

                EndpointResponseBuilder::internal_server_error().build()
            }
        };


        fallibly_built_response.unwrap_or_else(|_| HttpResponse::InternalServerError().finish())
    }
}


impl From<QueryError> for EndpointError {
    fn from(value: QueryError) -> Self {
        match value {
            QueryError::SqlxError { error } => Self::InternalDatabaseError { error },
            QueryError::DatabaseInconsistencyError { problem } => {
                Self::InvalidDatabaseState { problem }
            }
        }
    }
}



pub struct EndpointResponseBuilder {
    status_code: StatusCode,

    body: Option<Result<Vec<u8>, serde_json::Error>>,

    content_type: Option<Mime>,
}

impl EndpointResponseBuilder {
    pub fn new(status_code: StatusCode) -> Self {
        Self {
            status_code,
            body: None,
            content_type: None,
        }
    }

    #[inline]
    pub fn ok() -> Self {
        Self::new(StatusCode::OK)
    }

    #[inline]
    pub fn created() -> Self {
        Self::new(StatusCode::CREATED)
    }

    #[inline]
    pub fn no_content() -> Self {
        Self::new(StatusCode::NO_CONTENT)
    }

    #[inline]
    pub fn bad_request() -> Self {
        Self::new(StatusCode::BAD_REQUEST)
    }

    #[inline]
    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND)
    }

    #[inline]
    pub fn internal_server_error() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn with_json_body<S>(self, data: S) -> Self
    where
        S: Serialize,
    {
        let body = serde_json::to_vec(&data);

        Self {
            status_code: self.status_code,
            body: Some(body),
            content_type: Some(mime::APPLICATION_JSON),
        }
    }

    /// Sets the body to `{ "reason": ... }`.
    pub fn with_error_reason<R>(self, reason: R) -> Self
    where
        R: Into<ErrorReason>,
    {
        self.with_json_body(ResponseWithErrorReason::new(reason.into()))
    }

    pub fn build(self) -> Result<HttpResponse<BoxBody>, EndpointError> {
        let optional_body = match self.body {
            Some(body_or_error) => match body_or_error {
                Ok(body) => Some(body),
                Err(serialization_error) => {
                    return Err(EndpointError::internal_error(serialization_error))
                }
            },
            None => None,
        };


        let mut response_builder = HttpResponse::build(self.status_code);

        if let Some(content_type) = self.content_type {
            response_builder.content_type(content_type);
        }


        match optional_body {
            Some(body) => response_builder
                .message_body(body.boxed())
                // Never errors, `Vec<u8>` has `type Error = Infallible`.
                .map_err(EndpointError::internal_error),
            None => response_builder
                .message_body(().boxed())
                .map_err(EndpointError::internal_error),
        }
    }
}



/// Short for [`Result`]`<`[`HttpResponse`]`, `[`EndpointError`]`>`, intended to be used
/// as the return type of most endpoint functions.
pub type EndpointResult<Body = BoxBody> = Result<HttpResponse<Body>, EndpointError>;
