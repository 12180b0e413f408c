use std::fmt::Debug;

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::{HeaderMap, HeaderName};
use actix_web::http::StatusCode;
use actix_web::test;
use actix_web::web::Bytes;
use deutsch_learn_core::api_models::{ErrorReason, ResponseWithErrorReason};
use serde::Deserialize;


pub struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body_bytes: Bytes,
}

impl TestResponse {
    pub(crate) async fn from_service_response(response: ServiceResponse<BoxBody>) -> Self {
        let status = response.status();
        let headers = response.headers().to_owned();
        let body_bytes = test::read_body(response).await;

        Self {
            status,
            headers,
            body_bytes,
        }
    }

    #[track_caller]
    pub fn assert_status_equals(&self, status_code: StatusCode) {
        assert_eq!(
            self.status,
            status_code,
            "unexpected status, body: {}",
            String::from_utf8_lossy(&self.body_bytes)
        );
    }

    pub fn header(&self, header_name: &str) -> Option<&str> {
        self.headers
            .get(HeaderName::from_bytes(header_name.as_bytes()).ok()?)
            .and_then(|value| value.to_str().ok())
    }

    #[track_caller]
    pub fn assert_header_equals(&self, header_name: &str, expected_header_value: &str) {
        let actual_header_value = self.header(header_name).unwrap_or_else(|| {
            panic!("header {} does not exist on response", header_name)
        });

        assert_eq!(expected_header_value, actual_header_value);
    }

    #[track_caller]
    pub fn assert_header_missing(&self, header_name: &str) {
        assert!(
            self.header(header_name).is_none(),
            "header {} should not be present on response",
            header_name
        );
    }

    #[track_caller]
    pub fn assert_body_is_empty(&self) {
        assert!(
            self.body_bytes.is_empty(),
            "expected an empty body, got: {}",
            String::from_utf8_lossy(&self.body_bytes)
        );
    }

    pub fn json_body<'de, D>(&'de self) -> D
    where
        D: Deserialize<'de>,
    {
        serde_json::from_slice::<D>(&self.body_bytes).expect("failed to deserialize body as JSON")
    }

    #[track_caller]
    pub fn assert_json_body_matches<'de, D>(&'de self, expected_content: D)
    where
        D: Deserialize<'de> + PartialEq + Debug,
    {
        let data = self.json_body::<D>();

        assert_eq!(data, expected_content);
    }

    #[track_caller]
    pub fn assert_error_reason_equals<R>(&self, expected_reason: R)
    where
        R: Into<ErrorReason>,
    {
        let response = self.json_body::<ResponseWithErrorReason>();

        assert_eq!(response.reason, expected_reason.into());
    }
}
