use std::path::PathBuf;

use clap::Parser;
use miette::{Context, IntoDiagnostic, Result};
use serde_yaml::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

use confloader::{
    configuration::{resolve_base_directory, Configuration},
    logging::initialize_tracing,
};

use crate::cli::CLIArgs;

mod cli;


fn main() -> Result<()> {
    let cli_args = CLIArgs::parse();

    // Load configuration.
    let configuration = match cli_args.configuration_file_path.as_ref() {
        Some(path) => {
            println!("Loading configuration: {}", path.display());

            let base_directory =
                resolve_base_directory().wrap_err("Could not resolve the base directory.")?;

            Configuration::load_from_path(path, base_directory)
        }
        None => Configuration::load_from_default_path(),
    }
    .wrap_err("Failed to load configuration file.")?;

    // A `log_path` key, when present, has already been resolved against
    // the base directory by the accessor rule; it selects the log
    // output directory.
    let log_file_output_directory = match configuration.get("log_path") {
        Some(Value::String(directory)) => Some(PathBuf::from(directory)),
        _ => None,
    };

    let logging_raii_guard = initialize_tracing(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        log_file_output_directory.as_deref(),
        "confloader.log",
    )
    .wrap_err("Failed to initialize tracing.")?;

    info!(
        "Configuration loaded: {}.",
        configuration.file_path.display()
    );


    if cli_args.keys.is_empty() {
        for key in configuration.accessor().keys() {
            println!("{}", key);
        }
    } else {
        for key in &cli_args.keys {
            match configuration.get(key) {
                Some(value) => {
                    let rendered = serde_yaml::to_string(&value).into_diagnostic()?;
                    println!("{}: {}", key, rendered.trim_end());
                }
                None => println!("{}: (not set)", key),
            }
        }
    }


    drop(logging_raii_guard);
    Ok(())
}
