//! In-process test harness for the Deutsch Learn API.
//!
//! Every [`TestServer`] runs the full application (middleware included)
//! on top of its own fresh in-memory SQLite database.

pub mod prelude;
mod response;
pub mod sample_words;
mod server;
pub use response::*;
pub use server::*;
