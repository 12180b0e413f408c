use std::env::VarError;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

mod database;
mod http;
mod logging;

pub use database::*;
pub use http::*;
pub use logging::*;

use crate::environment::EnvironmentReader;
use crate::traits::{Resolve, TryResolve, TryResolveWithContext};
use crate::{ConfigurationLoadingError, ConfigurationResolutionError, EnvironmentVariableError};



#[derive(Deserialize, Debug)]
pub(crate) struct UnresolvedConfiguration {
    /// Logging-related configuration.
    #[serde(default)]
    logging: UnresolvedLoggingConfiguration,

    /// Configuration related to the HTTP server.
    http: UnresolvedHttpConfiguration,

    /// Configuration related to the database.
    database: UnresolvedDatabaseConfiguration,
}

impl UnresolvedConfiguration {
    fn from_environment<F>(
        environment: &EnvironmentReader<F>,
    ) -> Result<Self, EnvironmentVariableError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        Ok(Self {
            logging: UnresolvedLoggingConfiguration::from_environment(environment)?,
            http: UnresolvedHttpConfiguration::from_environment(environment)?,
            database: UnresolvedDatabaseConfiguration::from_environment(environment)?,
        })
    }
}


/// Where a [`Configuration`] was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationSource {
    /// Loaded from environment variables (and, optionally, a `.env` file).
    Environment,

    /// Loaded from a TOML configuration file.
    File { path: PathBuf },
}


/// The entire Deutsch Learn backend configuration.
#[derive(Debug, Clone)]
pub struct Configuration {
    /// Where this [`Configuration`] instance was loaded from.
    pub source: ConfigurationSource,

    /// Logging-related configuration.
    pub logging: LoggingConfiguration,

    /// Configuration related to the HTTP server.
    pub http: HttpConfiguration,

    /// Configuration related to the database.
    pub database: DatabaseConfiguration,
}



pub(crate) struct ConfigurationResolutionContext {
    source: ConfigurationSource,
}


impl TryResolveWithContext for UnresolvedConfiguration {
    type Resolved = Configuration;
    type Context = ConfigurationResolutionContext;
    type Error = ConfigurationResolutionError;

    fn try_resolve_with_context(
        self,
        context: Self::Context,
    ) -> Result<Self::Resolved, Self::Error> {
        let logging = self.logging.try_resolve()?;
        let http = self.http.try_resolve()?;
        let database = self.database.resolve();

        Ok(Configuration {
            source: context.source,
            logging,
            http,
            database,
        })
    }
}


impl Configuration {
    /// Load the configuration from a specific TOML file path.
    pub fn load_from_path<S: AsRef<Path>>(
        configuration_file_path: S,
    ) -> Result<Self, ConfigurationLoadingError> {
        let configuration_file_path = configuration_file_path.as_ref();

        // Read the configuration file into memory as a string.
        let configuration_string = fs::read_to_string(configuration_file_path).map_err(|error| {
            ConfigurationLoadingError::UnableToReadConfigurationFile {
                path: configuration_file_path.to_path_buf(),
                error,
            }
        })?;

        // Falls back to the path as given if it can't be canonicalized.
        let configuration_file_path = dunce::canonicalize(configuration_file_path)
            .unwrap_or_else(|_| configuration_file_path.to_path_buf());

        // Parse the string into the [`UnresolvedConfiguration`] structure and then resolve it.
        let unresolved_configuration =
            toml::from_str::<UnresolvedConfiguration>(&configuration_string)
                .map_err(|error| ConfigurationLoadingError::ParsingError { error })?;

        let resolved_configuration =
            unresolved_configuration.try_resolve_with_context(ConfigurationResolutionContext {
                source: ConfigurationSource::File {
                    path: configuration_file_path,
                },
            })?;

        Ok(resolved_configuration)
    }

    /// Load the configuration from the process environment.
    ///
    /// Expects `DATABASE_URL`, `API_HOST`, `API_PORT` and `ALLOWED_ORIGINS` (comma-separated)
    /// to be set. `DATABASE_MAX_CONNECTIONS`, `LOG_CONSOLE_LEVEL_FILTER`,
    /// `LOG_FILE_LEVEL_FILTER` and `LOG_FILE_DIRECTORY` are optional.
    pub fn load_from_environment() -> Result<Self, ConfigurationLoadingError> {
        Self::load_from_environment_with(|key| std::env::var(key))
    }

    /// Load the configuration using `lookup` to read environment variables.
    pub fn load_from_environment_with<F>(lookup: F) -> Result<Self, ConfigurationLoadingError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let environment = EnvironmentReader::new(lookup);

        let unresolved_configuration = UnresolvedConfiguration::from_environment(&environment)?;

        let resolved_configuration =
            unresolved_configuration.try_resolve_with_context(ConfigurationResolutionContext {
                source: ConfigurationSource::Environment,
            })?;

        Ok(resolved_configuration)
    }
}
