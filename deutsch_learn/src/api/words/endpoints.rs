use actix_web::{delete, get, post, put, web};
use deutsch_learn_core::api_models::{
    ResponseWithErrorReason,
    Word,
    WordCreationRequest,
    WordErrorReason,
    WordUpdateRequest,
};
use deutsch_learn_core::id::WordId;
use deutsch_learn_database::store::{WordCreationOutcome, WordStore, WordUpdateOutcome};
use tracing::info;

use crate::{
    api::{
        errors::{EndpointError, EndpointResponseBuilder, EndpointResult},
        traits::IntoApiModel,
    },
    state::ApplicationState,
};



pub(crate) fn parse_word_id(word_id: &str) -> Result<WordId, EndpointError> {
    word_id
        .parse::<WordId>()
        .map_err(|error| EndpointError::InvalidWordIdFormat { error })
}



/// List all words
///
/// Returns every word, ordered by ascending ID.
#[utoipa::path(
    get,
    path = "/words/all",
    tag = "words",
    responses(
        (
            status = 200,
            description = "All words, ordered by ID.",
            body = [Word]
        ),
        (status = 500, description = "Internal server error.")
    )
)]
#[get("/all")]
pub async fn get_all_words(state: ApplicationState) -> EndpointResult {
    let words = WordStore::list_all(&state.database_pool).await?;

    let words = words
        .into_iter()
        .map(IntoApiModel::into_api_model)
        .collect::<Vec<Word>>();

    EndpointResponseBuilder::ok().with_json_body(words).build()
}



/// List all words in random order
///
/// Returns every word exactly once, in an order that is random on each request.
#[utoipa::path(
    get,
    path = "/words/all-mixed",
    tag = "words",
    responses(
        (
            status = 200,
            description = "All words, shuffled.",
            body = [Word]
        ),
        (status = 500, description = "Internal server error.")
    )
)]
#[get("/all-mixed")]
pub async fn get_all_words_shuffled(state: ApplicationState) -> EndpointResult {
    let words = WordStore::list_shuffled(&state.database_pool).await?;

    let words = words
        .into_iter()
        .map(IntoApiModel::into_api_model)
        .collect::<Vec<Word>>();

    EndpointResponseBuilder::ok().with_json_body(words).build()
}



/// Get a specific word
#[utoipa::path(
    get,
    path = "/words/{word_id}",
    tag = "words",
    params(
        ("word_id" = i64, Path, description = "ID of the word to get.")
    ),
    responses(
        (
            status = 200,
            description = "The requested word.",
            body = Word
        ),
        (
            status = 400,
            description = "The word ID is not an integer.",
            body = ResponseWithErrorReason,
            example = json!({ "reason": { "type": "invalid-word-id-format" } })
        ),
        (
            status = 404,
            description = "No word with the given ID exists.",
            body = ResponseWithErrorReason,
            example = json!({
                "reason": { "type": "word", "data": { "word-error-type": "word-not-found" } }
            })
        ),
        (status = 500, description = "Internal server error.")
    )
)]
#[get("/{word_id}")]
pub async fn get_specific_word(
    state: ApplicationState,
    parameters: web::Path<(String,)>,
) -> EndpointResult {
    let word_id = parse_word_id(&parameters.into_inner().0)?;

    let Some(word) = WordStore::get_by_id(&state.database_pool, word_id).await? else {
        return EndpointResponseBuilder::not_found()
            .with_error_reason(WordErrorReason::word_not_found())
            .build();
    };

    EndpointResponseBuilder::ok()
        .with_json_body(word.into_api_model())
        .build()
}



/// Create a new word
///
/// Verb forms are stored only when `is_verb` is set, the plural form only when
/// `is_plural` is set. A word can not be both: if both flags are set,
/// the word is stored as a verb.
#[utoipa::path(
    post,
    path = "/words",
    tag = "words",
    request_body(
        content = WordCreationRequest
    ),
    responses(
        (
            status = 201,
            description = "The word has been created.",
            body = Word
        ),
        (
            status = 400,
            description = "The JSON body is missing or malformed, a field is out of bounds, \
                           or another word already uses the given translation.",
            body = ResponseWithErrorReason,
            example = json!({
                "reason": {
                    "type": "word",
                    "data": { "word-error-type": "translation-already-exists" }
                }
            })
        ),
        (status = 500, description = "Internal server error.")
    )
)]
#[post("")]
pub async fn create_word(
    state: ApplicationState,
    request_body: web::Json<WordCreationRequest>,
) -> EndpointResult {
    let new_word = request_body.into_inner().validate()?;

    let creation_outcome = WordStore::create(&state.database_pool, new_word).await?;

    match creation_outcome {
        WordCreationOutcome::Created { word } => {
            info!(
                word_id = %word.id,
                german_word = word.german_word.as_str(),
                "Created new word."
            );

            EndpointResponseBuilder::created()
                .with_json_body(word.into_api_model())
                .build()
        }
        WordCreationOutcome::TranslationConflict => EndpointResponseBuilder::bad_request()
            .with_error_reason(WordErrorReason::translation_already_exists())
            .build(),
        WordCreationOutcome::ConstraintViolation => EndpointResponseBuilder::bad_request()
            .with_error_reason(WordErrorReason::word_violates_constraints())
            .build(),
    }
}



/// Update a word
///
/// Only the provided fields are changed. Providing `is_verb` or `is_plural`
/// replaces the verb and plural forms as a whole.
#[utoipa::path(
    put,
    path = "/words/{word_id}",
    tag = "words",
    params(
        ("word_id" = i64, Path, description = "ID of the word to update.")
    ),
    request_body(
        content = WordUpdateRequest
    ),
    responses(
        (
            status = 200,
            description = "The word after the update.",
            body = Word
        ),
        (
            status = 400,
            description = "The word ID or the JSON body is invalid, or a field is out of bounds.",
            body = ResponseWithErrorReason,
            example = json!({
                "reason": {
                    "type": "word",
                    "data": {
                        "word-error-type": "invalid-word-fields",
                        "field": "hard_level",
                        "description": "field \"hard_level\" must be between 0 and 100, got 150"
                    }
                }
            })
        ),
        (
            status = 404,
            description = "No word with the given ID exists, \
                           or another word already uses the requested translation.",
            body = ResponseWithErrorReason,
            example = json!({
                "reason": { "type": "word", "data": { "word-error-type": "word-not-found" } }
            })
        ),
        (status = 500, description = "Internal server error.")
    )
)]
#[put("/{word_id}")]
pub async fn update_specific_word(
    state: ApplicationState,
    parameters: web::Path<(String,)>,
    request_body: web::Json<WordUpdateRequest>,
) -> EndpointResult {
    let word_id = parse_word_id(&parameters.into_inner().0)?;
    let word_changes = request_body.into_inner().validate()?;

    let update_outcome = WordStore::update(&state.database_pool, word_id, word_changes).await?;

    match update_outcome {
        WordUpdateOutcome::Updated { word } => {
            info!(word_id = %word.id, "Updated word.");

            EndpointResponseBuilder::ok()
                .with_json_body(word.into_api_model())
                .build()
        }
        WordUpdateOutcome::NotFound => EndpointResponseBuilder::not_found()
            .with_error_reason(WordErrorReason::word_not_found())
            .build(),
        WordUpdateOutcome::TranslationConflict => EndpointResponseBuilder::not_found()
            .with_error_reason(WordErrorReason::translation_already_exists())
            .build(),
        WordUpdateOutcome::ConstraintViolation => EndpointResponseBuilder::bad_request()
            .with_error_reason(WordErrorReason::word_violates_constraints())
            .build(),
    }
}



/// Delete words
///
/// Deletes every word whose ID is in the provided list.
/// IDs that do not exist are ignored.
#[utoipa::path(
    delete,
    path = "/words",
    tag = "words",
    request_body(
        content = Vec<i64>,
        description = "IDs of the words to delete.",
        example = json!([1, 4, 9])
    ),
    responses(
        (status = 204, description = "The words have been deleted."),
        (
            status = 400,
            description = "The JSON body is missing or is not an array of integers.",
            body = ResponseWithErrorReason,
            example = json!({
                "reason": { "type": "invalid-json-body", "data": { "reason": "invalid-data" } }
            })
        ),
        (status = 500, description = "Internal server error.")
    )
)]
#[delete("")]
pub async fn delete_words(
    state: ApplicationState,
    request_body: web::Json<Vec<WordId>>,
) -> EndpointResult {
    let word_ids = request_body.into_inner();

    let deleted_words = WordStore::delete_by_ids(&state.database_pool, &word_ids).await?;

    info!(
        requested_words = word_ids.len(),
        deleted_words,
        "Deleted words."
    );

    EndpointResponseBuilder::no_content().build()
}
