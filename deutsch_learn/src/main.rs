use actix_web::{web, HttpServer};
use clap::Parser;
use deutsch_learn::build_application;
use deutsch_learn::cli::CLIArgs;
use deutsch_learn::logging::initialize_tracing;
use deutsch_learn::state::ApplicationStateInner;
use deutsch_learn_configuration::Configuration;
use miette::{Context, IntoDiagnostic, Result};
use tracing::{debug, info};



#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments.
    let arguments = CLIArgs::parse();

    // A missing `.env` file is fine, the variables may already be set.
    let dotenv_file_path = dotenvy::dotenv().ok();

    // Load configuration.
    let configuration = match arguments.configuration_file_path.as_ref() {
        Some(path) => {
            println!("Loading configuration: {}", path.display());
            Configuration::load_from_path(path)
        }
        None => {
            println!("Loading configuration from environment variables.");
            Configuration::load_from_environment()
        }
    }
    .into_diagnostic()
    .wrap_err("Failed to load configuration.")?;


    let guard = initialize_tracing(
        configuration.logging.console_output_level_filter(),
        configuration.logging.log_file_output_level_filter(),
        configuration.logging.log_file_output_directory.as_deref(),
        "deutsch_learn",
    )
    .into_diagnostic()
    .wrap_err("Failed to initialize tracing.")?;

    info!(source = ?configuration.source, "Configuration loaded.");

    if let Some(dotenv_file_path) = dotenv_file_path {
        debug!(
            file_path = %dotenv_file_path.display(),
            "Loaded environment variables from .env file."
        );
    }


    // Connect to the database and apply pending migrations.
    let state = web::Data::new(
        ApplicationStateInner::new(configuration.clone())
            .await
            .into_diagnostic()
            .wrap_err("Failed to set up the database.")?,
    );


    // Initialize and start the actix HTTP server.
    let server = HttpServer::new(move || build_application(state.clone()))
        .bind((configuration.http.host.as_str(), configuration.http.port))
        .into_diagnostic()
        .wrap_err("Failed to set up actix HTTP server.")?;

    info!(
        host = configuration.http.host.as_str(),
        port = configuration.http.port,
        "HTTP server initialized and running."
    );

    // Run HTTP server until stopped.
    server
        .run()
        .await
        .into_diagnostic()
        .wrap_err("Errored while running actix HTTP server.")?;


    drop(guard);
    Ok(())
}
