use std::{borrow::Cow, ffi::OsString, io, path::PathBuf};

use thiserror::Error;


#[derive(Debug, Error)]
pub enum EnvironmentVariableError {
    #[error("missing environment variable {}", .key)]
    Missing { key: Cow<'static, str> },

    #[error("environment variable {} is not valid unicode: {:?}", .key, .value)]
    NotUnicode {
        key: Cow<'static, str>,
        value: OsString,
    },

    #[error("environment variable {} has a malformed value: {:?}", .key, .value)]
    Malformed {
        key: Cow<'static, str>,

        value: String,

        #[source]
        error: Box<dyn std::error::Error + Send + Sync>,
    },
}


#[derive(Debug, Error)]
pub enum LoggingConfigurationError {
    #[error(
        "invalid tracing filter of type {} (doesn't parse with EnvFilter): {}",
        .kind,
        .invalid_filter
    )]
    InvalidTracingFilter {
        invalid_filter: String,

        kind: Cow<'static, str>,

        #[source]
        error: tracing_subscriber::filter::ParseError,
    },
}


#[derive(Debug, Error)]
pub enum HttpConfigurationError {
    #[error("no allowed CORS origins were provided (expected at least one, or \"*\")")]
    NoAllowedOrigins,
}


#[derive(Debug, Error)]
pub enum ConfigurationResolutionError {
    #[error("error while resolving \"logging\" table")]
    LoggingConfigurationError {
        #[from]
        #[source]
        error: LoggingConfigurationError,
    },

    #[error("error while resolving \"http\" table")]
    HttpConfigurationError {
        #[from]
        #[source]
        error: HttpConfigurationError,
    },
}


#[derive(Debug, Error)]
pub enum ConfigurationLoadingError {
    #[error("unable to read configuration file at {}", .path.display())]
    UnableToReadConfigurationFile {
        path: PathBuf,

        #[source]
        error: io::Error,
    },

    #[error("failed to parse the contents of the configuration file as TOML")]
    ParsingError {
        #[from]
        #[source]
        error: toml::de::Error,
    },

    #[error("failed to read configuration from the environment")]
    EnvironmentError {
        #[from]
        #[source]
        error: EnvironmentVariableError,
    },

    #[error("failed to resolve and validate the contents of the configuration")]
    ResolutionError {
        #[from]
        #[source]
        error: ConfigurationResolutionError,
    },
}
