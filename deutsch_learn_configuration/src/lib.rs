//! This crate contains all configuration-relevant code, including
//! the full configuration structure as well as methods needed to load
//! and validate it.
//!
//! Your starting point should probably be [`Configuration::load_from_environment`]
//! or, when running with a configuration file, [`Configuration::load_from_path`].
//!
//! # Internals
//! The entire configuration structure is based on the concept of
//! unvalidated ("unresolved") and validated configuration structures.
//!
//! Both configuration sources (environment variables and TOML files)
//! first produce the same `UnresolvedConfiguration` structure.
//! It is then resolved, which recursively turns it (and its fields)
//! into validated ("resolved") versions, e.g. by checking that logging
//! filters parse and that at least one allowed CORS origin was given.
//!
//! The output is the [`Configuration`].

#![allow(rustdoc::private_intra_doc_links)]

mod environment;
mod error;
mod structure;
mod traits;

pub use error::*;
pub use structure::*;
