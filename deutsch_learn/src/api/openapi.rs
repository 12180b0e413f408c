//! OpenAPI document describing the HTTP API.

use deutsch_learn_core::api_models::{
    ErrorReason,
    ResponseWithErrorReason,
    Word,
    WordCreationRequest,
    WordErrorReason,
    WordUpdateRequest,
};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

use super::words;


/// URL the generated OpenAPI document is served at.
pub const OPENAPI_DOCUMENT_URL: &str = "/api/openapi.json";

/// URL the interactive API documentation (RapiDoc) is served at.
pub const API_DOCUMENTATION_URL: &str = "/api/docs";


#[derive(OpenApi)]
#[openapi(
    info(
        title = "Deutsch Learn API",
        description = "Backend API for the Deutsch Learn vocabulary trainer.",
    ),
    servers(
        (url = "/api", description = "This server")
    ),
    paths(
        words::get_all_words,
        words::get_all_words_shuffled,
        words::get_specific_word,
        words::create_word,
        words::update_specific_word,
        words::delete_words,
    ),
    components(
        schemas(
            Word,
            WordCreationRequest,
            WordUpdateRequest,
            ErrorReason,
            WordErrorReason,
            ResponseWithErrorReason,
        )
    ),
    tags(
        (name = "words", description = "Vocabulary (word) management.")
    )
)]
pub struct ApiDocumentation;


/// Serves both the OpenAPI document and the RapiDoc UI.
///
/// Must be registered before [`api_router`][super::api_router], whose `/api` scope
/// would otherwise capture these paths.
pub fn openapi_documentation_service() -> RapiDoc<'static, 'static, 'static> {
    RapiDoc::with_openapi(OPENAPI_DOCUMENT_URL, ApiDocumentation::openapi())
        .path(API_DOCUMENTATION_URL)
}
