use std::env::VarError;

use serde::Deserialize;

use crate::environment::EnvironmentReader;
use crate::traits::Resolve;
use crate::EnvironmentVariableError;


const DEFAULT_MAX_CONNECTIONS: u32 = 10;


#[derive(Deserialize, Debug, Clone)]
pub(crate) struct UnresolvedDatabaseConfiguration {
    url: String,

    #[serde(default)]
    max_connections: Option<u32>,
}

impl UnresolvedDatabaseConfiguration {
    pub(crate) fn from_environment<F>(
        environment: &EnvironmentReader<F>,
    ) -> Result<Self, EnvironmentVariableError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        Ok(Self {
            url: environment.read("DATABASE_URL")?,
            max_connections: environment.read_optional_as_type("DATABASE_MAX_CONNECTIONS")?,
        })
    }
}


/// Database-related configuration.
#[derive(Debug, Clone)]
pub struct DatabaseConfiguration {
    /// SQLite connection URL, e.g. `sqlite://data/words.db` or `sqlite::memory:`.
    pub url: String,

    /// Maximum number of pooled connections.
    pub max_connections: u32,
}

impl Resolve for UnresolvedDatabaseConfiguration {
    type Resolved = DatabaseConfiguration;

    fn resolve(self) -> Self::Resolved {
        DatabaseConfiguration {
            url: self.url,
            max_connections: self
                .max_connections
                .filter(|max_connections| *max_connections > 0)
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
        }
    }
}
