use std::collections::HashMap;
use std::env::VarError;

use actix_http::Request;
use actix_service::boxed::{self, BoxService};
use actix_service::ServiceExt;
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::http::Method;
use actix_web::test::{self, TestRequest};
use actix_web::web::Data;
use deutsch_learn::build_application;
use deutsch_learn::state::{ApplicationState, ApplicationStateInner};
use deutsch_learn_configuration::Configuration;
use serde::Serialize;
use sqlx::SqlitePool;

use crate::TestResponse;


type BoxedTestService = BoxService<Request, ServiceResponse<BoxBody>, actix_web::Error>;


fn test_configuration(allowed_origins: &str) -> Configuration {
    let environment = HashMap::from([
        ("DATABASE_URL", "sqlite::memory:"),
        ("API_HOST", "127.0.0.1"),
        ("API_PORT", "8080"),
        ("ALLOWED_ORIGINS", allowed_origins),
    ]);

    Configuration::load_from_environment_with(|key| {
        environment
            .get(key)
            .map(|value| value.to_string())
            .ok_or(VarError::NotPresent)
    })
    .expect("failed to load test configuration")
}


/// Starts a fresh application instance that accepts requests from any origin.
pub async fn initialize_test_server() -> TestServer {
    initialize_test_server_with_allowed_origins("*").await
}

/// Starts a fresh application instance.
/// `allowed_origins` uses the same comma-separated format as `ALLOWED_ORIGINS`.
pub async fn initialize_test_server_with_allowed_origins(allowed_origins: &str) -> TestServer {
    let configuration = test_configuration(allowed_origins);

    let state: ApplicationState = Data::new(
        ApplicationStateInner::new(configuration)
            .await
            .expect("failed to initialize application state"),
    );

    let service = test::init_service(build_application(state.clone())).await;
    let service = boxed::service(service.map(ServiceResponse::map_into_boxed_body));

    TestServer { state, service }
}



pub struct TestServer {
    state: ApplicationState,
    service: BoxedTestService,
}

impl TestServer {
    /// Direct access to the database, for setting up states the API can't produce.
    pub fn database_pool(&self) -> &SqlitePool {
        &self.state.database_pool
    }

    pub fn request<P>(&self, method: Method, path: P) -> TestRequestBuilder<'_>
    where
        P: AsRef<str>,
    {
        TestRequestBuilder {
            server: self,
            request: TestRequest::default().method(method).uri(path.as_ref()),
        }
    }
}



pub struct TestRequestBuilder<'s> {
    server: &'s TestServer,
    request: TestRequest,
}

impl<'s> TestRequestBuilder<'s> {
    pub fn with_json_body<S>(self, body: S) -> Self
    where
        S: Serialize,
    {
        Self {
            server: self.server,
            request: self.request.set_json(body),
        }
    }

    /// Sends `body` as-is, with the given `Content-Type` (if any).
    pub fn with_raw_body(self, content_type: Option<&'static str>, body: &'static str) -> Self {
        let request = match content_type {
            Some(content_type) => self
                .request
                .insert_header(("content-type", content_type)),
            None => self.request,
        };

        Self {
            server: self.server,
            request: request.set_payload(body),
        }
    }

    pub fn with_header(self, name: &'static str, value: &'static str) -> Self {
        Self {
            server: self.server,
            request: self.request.insert_header((
                HeaderName::from_static(name),
                HeaderValue::from_static(value),
            )),
        }
    }

    pub async fn send(self) -> TestResponse {
        let response = test::call_service(&self.server.service, self.request.to_request()).await;

        TestResponse::from_service_response(response).await
    }
}
