//! Helpers for reading typed values out of environment variables.

use std::{borrow::Cow, env::VarError, str::FromStr};

use crate::EnvironmentVariableError;


/// Reads environment variables through a lookup function.
///
/// The server uses [`std::env::var`] as the lookup, while tests can
/// provide their own set of variables.
pub(crate) struct EnvironmentReader<F>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    lookup: F,
}

impl<F> EnvironmentReader<F>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    pub(crate) fn new(lookup: F) -> Self {
        Self { lookup }
    }

    pub(crate) fn read_optional(
        &self,
        key: &'static str,
    ) -> Result<Option<String>, EnvironmentVariableError> {
        match (self.lookup)(key) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(value)) => Err(EnvironmentVariableError::NotUnicode {
                key: Cow::Borrowed(key),
                value,
            }),
        }
    }

    pub(crate) fn read(&self, key: &'static str) -> Result<String, EnvironmentVariableError> {
        self.read_optional(key)?
            .ok_or(EnvironmentVariableError::Missing {
                key: Cow::Borrowed(key),
            })
    }

    pub(crate) fn read_optional_as_type<T>(
        &self,
        key: &'static str,
    ) -> Result<Option<T>, EnvironmentVariableError>
    where
        T: FromStr,
        <T as FromStr>::Err: std::error::Error + Send + Sync + 'static,
    {
        let Some(value) = self.read_optional(key)? else {
            return Ok(None);
        };

        value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|error| EnvironmentVariableError::Malformed {
                key: Cow::Borrowed(key),
                value,
                error: Box::new(error),
            })
    }

    pub(crate) fn read_as_type<T>(&self, key: &'static str) -> Result<T, EnvironmentVariableError>
    where
        T: FromStr,
        <T as FromStr>::Err: std::error::Error + Send + Sync + 'static,
    {
        self.read_optional_as_type(key)?
            .ok_or(EnvironmentVariableError::Missing {
                key: Cow::Borrowed(key),
            })
    }
}
