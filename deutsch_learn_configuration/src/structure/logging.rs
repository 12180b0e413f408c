use std::borrow::Cow;
use std::env::VarError;
use std::path::PathBuf;

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use crate::environment::EnvironmentReader;
use crate::traits::TryResolve;
use crate::{EnvironmentVariableError, LoggingConfigurationError};


fn default_level_filter() -> String {
    "info".to_string()
}


#[derive(Deserialize, Clone, Debug)]
pub(crate) struct UnresolvedLoggingConfiguration {
    #[serde(default = "default_level_filter")]
    console_output_level_filter: String,

    #[serde(default = "default_level_filter")]
    log_file_output_level_filter: String,

    #[serde(default)]
    log_file_output_directory: Option<String>,
}

impl Default for UnresolvedLoggingConfiguration {
    fn default() -> Self {
        Self {
            console_output_level_filter: default_level_filter(),
            log_file_output_level_filter: default_level_filter(),
            log_file_output_directory: None,
        }
    }
}

impl UnresolvedLoggingConfiguration {
    pub(crate) fn from_environment<F>(
        environment: &EnvironmentReader<F>,
    ) -> Result<Self, EnvironmentVariableError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        Ok(Self {
            console_output_level_filter: environment
                .read_optional("LOG_CONSOLE_LEVEL_FILTER")?
                .unwrap_or_else(default_level_filter),
            log_file_output_level_filter: environment
                .read_optional("LOG_FILE_LEVEL_FILTER")?
                .unwrap_or_else(default_level_filter),
            log_file_output_directory: environment.read_optional("LOG_FILE_DIRECTORY")?,
        })
    }
}


/// Logging-related configuration.
#[derive(Clone, Debug)]
pub struct LoggingConfiguration {
    /// Tracing filter for the console (stdout) output, e.g. `info` or `deutsch_learn=debug`.
    pub console_output_level_filter: String,

    /// Tracing filter for the log file output.
    pub log_file_output_level_filter: String,

    /// Directory to write daily-rotated log files into.
    /// If `None`, logging to files is disabled.
    pub log_file_output_directory: Option<PathBuf>,
}

impl TryResolve for UnresolvedLoggingConfiguration {
    type Resolved = LoggingConfiguration;
    type Error = LoggingConfigurationError;

    fn try_resolve(self) -> Result<Self::Resolved, Self::Error> {
        // Validate the file and console level filters.
        if let Err(error) = EnvFilter::try_new(&self.console_output_level_filter) {
            return Err(LoggingConfigurationError::InvalidTracingFilter {
                invalid_filter: self.console_output_level_filter,
                kind: Cow::from("console_output_level_filter"),
                error,
            });
        }

        if let Err(error) = EnvFilter::try_new(&self.log_file_output_level_filter) {
            return Err(LoggingConfigurationError::InvalidTracingFilter {
                invalid_filter: self.log_file_output_level_filter,
                kind: Cow::from("log_file_output_level_filter"),
                error,
            });
        }


        let log_file_output_directory = self
            .log_file_output_directory
            .filter(|directory| !directory.trim().is_empty())
            .map(PathBuf::from);


        Ok(Self::Resolved {
            console_output_level_filter: self.console_output_level_filter,
            log_file_output_level_filter: self.log_file_output_level_filter,
            log_file_output_directory,
        })
    }
}

impl LoggingConfiguration {
    pub fn console_output_level_filter(&self) -> EnvFilter {
        // PANIC SAFETY: This is safe because we checked that the input is valid in `try_resolve`.
        EnvFilter::try_new(&self.console_output_level_filter).unwrap()
    }

    pub fn log_file_output_level_filter(&self) -> EnvFilter {
        // PANIC SAFETY: This is safe because we checked that the input is valid in `try_resolve`.
        EnvFilter::try_new(&self.log_file_output_level_filter).unwrap()
    }
}
