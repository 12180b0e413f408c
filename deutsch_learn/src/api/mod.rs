//! API definitions for Deutsch Learn.

use actix_web::error::JsonPayloadError;
use actix_web::web::{self, JsonConfig};
use actix_web::Scope;
use deutsch_learn_core::api_models::InvalidJsonBodyReason;
use tracing::debug;

use self::errors::EndpointError;
use self::words::words_router;

pub mod errors;
pub mod openapi;
pub mod traits;
pub mod words;



/// Maps JSON extractor failures to our own error reasons.
fn json_payload_error_to_endpoint_error(error: &JsonPayloadError) -> EndpointError {
    match error {
        JsonPayloadError::ContentType => EndpointError::missing_json_body(),
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            EndpointError::invalid_json_body(InvalidJsonBodyReason::TooLarge)
        }
        JsonPayloadError::Deserialize(deserialization_error)
            if deserialization_error.is_data() =>
        {
            EndpointError::invalid_json_body(InvalidJsonBodyReason::InvalidData)
        }
        _ => EndpointError::invalid_json_body(InvalidJsonBodyReason::NotJson),
    }
}

/// JSON extractor configuration: rejected bodies are answered
/// with the same error reasons our endpoints use.
pub fn json_extractor_configuration() -> JsonConfig {
    JsonConfig::default().error_handler(|error, _request| {
        debug!(error = %error, "Rejected JSON request body.");

        json_payload_error_to_endpoint_error(&error).into()
    })
}



/// Router for the entire public API.
///
/// Lives under the `/api` path and is made up of the `/words` router.
#[rustfmt::skip]
pub fn api_router() -> Scope {
    web::scope("/api")
        .service(words_router())
}



#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn maps_json_payload_errors_to_reasons() {
        assert!(matches!(
            json_payload_error_to_endpoint_error(&JsonPayloadError::ContentType),
            EndpointError::MissingJsonBody
        ));

        assert!(matches!(
            json_payload_error_to_endpoint_error(&JsonPayloadError::Overflow { limit: 10 }),
            EndpointError::InvalidJsonBody {
                reason: InvalidJsonBodyReason::TooLarge
            }
        ));

        let syntax_error = serde_json::from_str::<Vec<i64>>("[1, ").unwrap_err();
        assert!(matches!(
            json_payload_error_to_endpoint_error(&JsonPayloadError::Deserialize(syntax_error)),
            EndpointError::InvalidJsonBody {
                reason: InvalidJsonBodyReason::NotJson
            }
        ));

        let data_error = serde_json::from_str::<Vec<i64>>(r#"["one"]"#).unwrap_err();
        assert!(matches!(
            json_payload_error_to_endpoint_error(&JsonPayloadError::Deserialize(data_error)),
            EndpointError::InvalidJsonBody {
                reason: InvalidJsonBodyReason::InvalidData
            }
        ));
    }
}
