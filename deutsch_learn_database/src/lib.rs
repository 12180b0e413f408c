use std::borrow::Cow;

use sqlx::error::ErrorKind;
use thiserror::Error;

pub mod connection;
pub mod entities;
pub mod store;



#[derive(Debug, Error)]
pub enum QueryError {
    #[error("sqlx error")]
    SqlxError {
        #[from]
        #[source]
        error: sqlx::Error,
    },

    #[error("database inconsistency: {}", .problem)]
    DatabaseInconsistencyError { problem: Cow<'static, str> },
}

impl QueryError {
    pub fn database_inconsistency<R>(problem: R) -> Self
    where
        R: Into<Cow<'static, str>>,
    {
        Self::DatabaseInconsistencyError {
            problem: problem.into(),
        }
    }

    fn database_error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::SqlxError {
                error: sqlx::Error::Database(database_error),
            } => Some(database_error.kind()),
            _ => None,
        }
    }

    /// Returns `true` if the database rejected a write because it would
    /// violate a unique constraint.
    pub fn is_unique_violation(&self) -> bool {
        matches!(self.database_error_kind(), Some(ErrorKind::UniqueViolation))
    }

    /// Returns `true` if the database rejected a write because it would
    /// violate any constraint (unique, check, not-null or foreign key).
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self.database_error_kind(),
            Some(kind) if !matches!(kind, ErrorKind::Other)
        )
    }
}



pub type QueryResult<R, E = QueryError> = Result<R, E>;



pub trait TryIntoExternalModel {
    type ExternalModel;
    type Error;

    fn try_into_external_model(self) -> Result<Self::ExternalModel, Self::Error>;
}
