//! Application-wide state (shared between endpoint functions).

use actix_web::web::Data;
use deutsch_learn_configuration::Configuration;
use deutsch_learn_database::connection::{establish_connection_pool, run_pending_migrations};
use sqlx::migrate::MigrateError;
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::info;


#[derive(Debug, Error)]
pub enum ApplicationStateError {
    #[error("unable to connect to database")]
    UnableToConnectToDatabase {
        #[from]
        #[source]
        error: sqlx::Error,
    },

    #[error("unable to apply database migrations")]
    UnableToApplyMigrations {
        #[from]
        #[source]
        error: MigrateError,
    },
}



/// Central application state.
///
/// Use [`ApplicationState`] instead as it already wraps this struct
/// in [`actix_web::web::Data`]!
pub struct ApplicationStateInner {
    /// The configuration that this server was loaded with.
    pub configuration: Configuration,

    /// SQLite database connection pool.
    pub database_pool: SqlitePool,
}

impl ApplicationStateInner {
    /// Connects to the database and brings its schema up to date.
    pub async fn new(configuration: Configuration) -> Result<Self, ApplicationStateError> {
        let database_pool = establish_connection_pool(
            &configuration.database.url,
            configuration.database.max_connections,
        )
        .await?;

        info!("Connected to database, applying pending migrations.");

        run_pending_migrations(&database_pool).await?;

        Ok(Self {
            configuration,
            database_pool,
        })
    }
}


/// Central application state, wrapped in an actix [`Data`] wrapper.
///
/// This enables usage in endpoint functions.
/// See <https://actix.rs/docs/application#state> for more information.
pub type ApplicationState = Data<ApplicationStateInner>;
