//! Command-line interface definitions for the inspection binary.

use std::path::PathBuf;

use clap::Parser;



/// Command-line arguments.
#[derive(Parser)]
#[command(
    name = "confloader",
    author,
    about = "Loads the YAML configuration and prints the requested values.",
    version
)]
pub struct CLIArgs {
    /// This is the path to the configuration file to use.
    /// If unspecified, this defaults to `{base directory}config/config.yml`.
    #[arg(
        short = 'c',
        long = "configuration-file-path",
        help = "Path to the configuration file to use. Defaults to \
                config/config.yml under the base directory (the parent \
                of the directory containing this executable)."
    )]
    pub configuration_file_path: Option<PathBuf>,

    #[arg(
        help = "Configuration keys to look up and print. If no key is \
                given, all top-level keys are listed instead."
    )]
    pub keys: Vec<String>,
}
