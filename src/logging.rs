//! Tracing initialization for the binary.

use std::fs;
use std::io::stderr;
use std::path::Path;

use miette::{IntoDiagnostic, Result};
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;


#[derive(Error, Debug)]
pub enum LoggingInitializationError {
    #[error("could not create log output directory at {directory_path}")]
    UnableToCreateLogDirectory {
        directory_path: String,

        #[source]
        error: std::io::Error,
    },
}


/// Initializes the global tracing subscriber with a console (stderr)
/// output layer filtered by `output_level_filter`.
///
/// When `log_file_output_directory` is provided, a non-blocking daily
/// rolling file layer is added as well, with `log_file_name_prefix` as
/// the file name prefix. The returned [`WorkerGuard`] must be kept
/// alive for the lifetime of the process, otherwise buffered log lines
/// can be lost on exit.
///
/// Console output goes to standard error so the loader's standard
/// output stays machine-readable.
pub fn initialize_tracing(
    output_level_filter: EnvFilter,
    log_file_output_directory: Option<&Path>,
    log_file_name_prefix: &str,
) -> Result<Option<WorkerGuard>> {
    let console_layer = tracing_subscriber::fmt::layer().with_writer(stderr);

    let registry = tracing_subscriber::registry()
        .with(output_level_filter)
        .with(console_layer);

    match log_file_output_directory {
        Some(directory_path) => {
            fs::create_dir_all(directory_path)
                .map_err(
                    |error| LoggingInitializationError::UnableToCreateLogDirectory {
                        directory_path: directory_path.display().to_string(),
                        error,
                    },
                )
                .into_diagnostic()?;

            let rolling_file_appender =
                tracing_appender::rolling::daily(directory_path, log_file_name_prefix);
            let (non_blocking_writer, worker_guard) =
                tracing_appender::non_blocking(rolling_file_appender);

            let file_layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking_writer);

            registry.with(file_layer).try_init().into_diagnostic()?;

            Ok(Some(worker_guard))
        }
        None => {
            registry.try_init().into_diagnostic()?;

            Ok(None)
        }
    }
}
