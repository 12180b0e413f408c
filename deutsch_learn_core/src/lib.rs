//! Types shared between the Deutsch Learn server, its database layer and API clients.
//!
//! This includes the vocabulary domain types ([`words`]), the validation rules
//! that incoming word payloads must pass ([`validation`]) and the
//! JSON models exchanged over the HTTP API ([`api_models`]).

pub mod api_models;
pub mod id;
pub mod validation;
pub mod words;
