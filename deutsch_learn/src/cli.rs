//! Command-line interface definitions for the server binary.

use std::path::PathBuf;

use clap::Parser;


/// Server command-line arguments.
#[derive(Parser)]
#[command(
    name = "deutsch-learn-backend",
    author,
    about = "API server for the Deutsch Learn vocabulary trainer.",
    version
)]
pub struct CLIArgs {
    /// Path to a TOML configuration file to use.
    /// If unspecified, the configuration is read from environment variables
    /// (and a `.env` file in the working directory, if present).
    #[arg(
        short = 'c',
        long = "configuration-file-path",
        help = "Path to the TOML configuration file to use. \
                Defaults to reading the configuration from environment variables."
    )]
    pub configuration_file_path: Option<PathBuf>,
}
