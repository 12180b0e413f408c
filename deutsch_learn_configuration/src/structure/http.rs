use std::env::VarError;

use serde::Deserialize;

use crate::environment::EnvironmentReader;
use crate::traits::TryResolve;
use crate::{EnvironmentVariableError, HttpConfigurationError};


#[derive(Deserialize, Debug, Clone)]
pub(crate) struct UnresolvedHttpConfiguration {
    host: String,

    port: u16,

    allowed_origins: Vec<String>,
}

impl UnresolvedHttpConfiguration {
    pub(crate) fn from_environment<F>(
        environment: &EnvironmentReader<F>,
    ) -> Result<Self, EnvironmentVariableError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let allowed_origins = environment
            .read("ALLOWED_ORIGINS")?
            .split(',')
            .map(str::to_string)
            .collect();

        Ok(Self {
            host: environment.read("API_HOST")?,
            port: environment.read_as_type("API_PORT")?,
            allowed_origins,
        })
    }
}


/// Actix HTTP server-related configuration.
#[derive(Debug, Clone)]
pub struct HttpConfiguration {
    /// Host to bind the HTTP server to.
    pub host: String,

    /// Port to bind the HTTP server to.
    pub port: u16,

    /// Origins allowed to make cross-origin requests.
    /// Trimmed and never empty; a `*` entry allows any origin.
    pub allowed_origins: Vec<String>,
}

impl HttpConfiguration {
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }
}

impl TryResolve for UnresolvedHttpConfiguration {
    type Resolved = HttpConfiguration;
    type Error = HttpConfigurationError;

    fn try_resolve(self) -> Result<Self::Resolved, Self::Error> {
        let allowed_origins: Vec<String> = self
            .allowed_origins
            .into_iter()
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        if allowed_origins.is_empty() {
            return Err(HttpConfigurationError::NoAllowedOrigins);
        }

        Ok(HttpConfiguration {
            host: self.host,
            port: self.port,
            allowed_origins,
        })
    }
}
