use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::NormalizePath;
use actix_web::App;
use deutsch_learn_configuration::HttpConfiguration;
use tracing_actix_web::TracingLogger;

use crate::api::openapi::openapi_documentation_service;
use crate::api::{api_router, json_extractor_configuration};
use crate::state::ApplicationState;

pub mod api;
pub mod cli;
pub mod logging;
pub mod state;



/// Builds the CORS middleware from the configured allowed origins.
///
/// A single `*` entry allows any origin.
pub fn cors_middleware(http_configuration: &HttpConfiguration) -> Cors {
    let mut cors = Cors::default();

    if http_configuration.allows_any_origin() {
        cors = cors.allow_any_origin();
    } else {
        for allowed_origin in &http_configuration.allowed_origins {
            cors = cors.allowed_origin(allowed_origin);
        }
    }

    cors.allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .expose_headers(vec!["Date", "Content-Type", "Content-Length"])
}


/// Assembles the actix application: middleware, shared state and all routes.
///
/// Used both by the server binary and by the integration tests.
pub fn build_application(
    state: ApplicationState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let cors = cors_middleware(&state.configuration.http);

    App::new()
        .wrap(NormalizePath::trim())
        .wrap(cors)
        .wrap(TracingLogger::default())
        .app_data(json_extractor_configuration())
        .app_data(state)
        .service(openapi_documentation_service())
        .service(api_router())
}
