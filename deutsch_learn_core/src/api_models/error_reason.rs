use serde::{Deserialize, Serialize};
use utoipa::ToSchema;



/// Pertains to all endpoints under `/words`.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, ToSchema)]
#[serde(tag = "word-error-type")]
#[non_exhaustive]
pub enum WordErrorReason {
    #[serde(rename = "word-not-found")]
    WordNotFound,

    /// Encountered when:
    /// - creating a word whose translation is already used by another word,
    /// - updating a word's translation to one used by another word.
    #[serde(rename = "translation-already-exists")]
    TranslationAlreadyExists,

    /// The database refused to store the word because it violates a
    /// consistency constraint that validation did not catch.
    #[serde(rename = "word-violates-constraints")]
    WordViolatesConstraints,

    /// The request body was well-formed JSON, but some word field
    /// violates its bounds or the verb / plural form rules.
    #[serde(rename = "invalid-word-fields")]
    InvalidWordFields {
        /// Name of the offending field, e.g. `second_verb`.
        field: String,

        /// Human-readable description of the problem.
        description: String,
    },
}

impl WordErrorReason {
    pub const fn word_not_found() -> Self {
        Self::WordNotFound
    }

    pub const fn translation_already_exists() -> Self {
        Self::TranslationAlreadyExists
    }

    pub const fn word_violates_constraints() -> Self {
        Self::WordViolatesConstraints
    }

    pub fn invalid_word_fields<F, D>(field: F, description: D) -> Self
    where
        F: Into<String>,
        D: Into<String>,
    {
        Self::InvalidWordFields {
            field: field.into(),
            description: description.into(),
        }
    }
}



/// Reasons for a JSON body to not be accepted by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvalidJsonBodyReason {
    /// Indicates that the provided JSON data was invalid,
    /// possibly due to an IO / syntax / EOF error while parsing.
    #[serde(rename = "not-json")]
    NotJson,

    /// Indicates that the provided JSON data was valid,
    /// but its data did not match the expected scheme / format
    /// (deserialization error).
    #[serde(rename = "invalid-data")]
    InvalidData,

    /// Indicates that the provided JSON data was too large.
    #[serde(rename = "too-large")]
    TooLarge,
}



#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, ToSchema)]
#[serde(tag = "type", content = "data")]
#[non_exhaustive]
pub enum ErrorReason {
    /// Indicates that the request is missing a JSON body.
    #[serde(rename = "missing-json-body")]
    MissingJsonBody,

    /// Indicates that the request has an invalid JSON body (see [`InvalidJsonBodyReason`]).
    #[serde(rename = "invalid-json-body")]
    InvalidJsonBody {
        /// Describes why the JSON body is invalid.
        #[schema(value_type = String)]
        reason: InvalidJsonBodyReason,
    },

    /// Indicates that the word ID in the URL is not an integer.
    #[serde(rename = "invalid-word-id-format")]
    InvalidWordIdFormat,

    /// Pertains to all endpoints under `/words`.
    #[serde(rename = "word")]
    Word(WordErrorReason),
}

impl ErrorReason {
    pub const fn missing_json_body() -> Self {
        Self::MissingJsonBody
    }

    pub const fn invalid_json_body(reason: InvalidJsonBodyReason) -> Self {
        Self::InvalidJsonBody { reason }
    }

    pub const fn invalid_word_id_format() -> Self {
        Self::InvalidWordIdFormat
    }
}

impl From<WordErrorReason> for ErrorReason {
    fn from(value: WordErrorReason) -> Self {
        Self::Word(value)
    }
}




/// A JSON-serializable model containing a single field named `reason` ([`ErrorReason`]).
///
/// This type is used when responding with strongly-typed error reasons.
/// Endpoints shouldn't construct it directly, but should go through
/// the response builder's `with_error_reason` method instead.
#[derive(Serialize, PartialEq, Eq, Clone, Debug, ToSchema)]
#[cfg_attr(
    feature = "serde_impls_for_client_on_models",
    derive(serde::Deserialize)
)]
pub struct ResponseWithErrorReason {
    pub reason: ErrorReason,
}

impl ResponseWithErrorReason {
    #[inline]
    pub fn new(reason: ErrorReason) -> Self {
        Self { reason }
    }
}
