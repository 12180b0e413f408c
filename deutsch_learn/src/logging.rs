//! Tracing (logging) setup.

use std::path::Path;

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, Layer};


#[derive(Debug, Error)]
pub enum TracingInitializationError {
    #[error("unable to set up rolling log file appender")]
    UnableToInitializeFileAppender {
        #[from]
        #[source]
        error: InitError,
    },

    #[error("unable to set global tracing subscriber")]
    UnableToSetGlobalSubscriber {
        #[from]
        #[source]
        error: TryInitError,
    },
}


/// Initializes the global tracing subscriber.
///
/// Events are always written to stdout. If `log_file_output_directory` is set, they are also
/// written to daily-rotated files named `{log_file_name_prefix}.{date}.log` in that directory.
///
/// The returned guard (if any) must be held until shutdown, otherwise
/// buffered file output may be lost.
pub fn initialize_tracing(
    console_level_filter: EnvFilter,
    log_file_level_filter: EnvFilter,
    log_file_output_directory: Option<&Path>,
    log_file_name_prefix: &str,
) -> Result<Option<WorkerGuard>, TracingInitializationError> {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_filter(console_level_filter);


    let (file_layer, guard) = match log_file_output_directory {
        Some(log_file_output_directory) => {
            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix(log_file_name_prefix)
                .filename_suffix("log")
                .build(log_file_output_directory)?;

            let (non_blocking_file_writer, guard) = tracing_appender::non_blocking(file_appender);

            let file_layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking_file_writer)
                .with_filter(log_file_level_filter);

            (Some(file_layer), Some(guard))
        }
        None => (None, None),
    };


    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}
