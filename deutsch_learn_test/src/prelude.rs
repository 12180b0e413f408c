pub use actix_web::http::{header, Method, StatusCode};
pub use deutsch_learn_core::api_models::*;
pub use deutsch_learn_core::id::WordId;
pub use serde_json::json;

pub use super::sample_words::*;
pub use super::server::{
    initialize_test_server,
    initialize_test_server_with_allowed_origins,
    TestServer,
};
pub use super::TestResponse;
