//! This module contains all configuration-relevant code: base-directory
//! resolution, YAML loading, and the read-only accessor exposing the
//! parsed values.
//!
//! Your starting point should probably be
//! [`Configuration::load_from_default_path`], or
//! [`Configuration::global`] when a process-wide handle is wanted.
//!
//! # Internals
//! The configuration file is schemaless: the document is parsed into a
//! plain YAML mapping and every top-level key is exposed through
//! [`ConfigAccessor::get`]. The single transformation rule lives there
//! as well: any key whose name contains `"path"` has its string value
//! prefixed with the resolved base directory, turning relative
//! path-like values into absolute ones.

mod accessor;
mod base_directory;
mod utilities;

use std::fs;
use std::path::{Path, PathBuf};

use miette::{miette, Context, IntoDiagnostic, Result};
use once_cell::sync::OnceCell;
use serde_yaml::Value;

pub use self::accessor::ConfigAccessor;
pub use self::base_directory::resolve_base_directory;
pub use self::utilities::configuration_file_path;


/// Process-wide configuration handle, see [`Configuration::global`].
static GLOBAL_CONFIGURATION: OnceCell<Configuration> = OnceCell::new();


/// The loaded configuration.
#[derive(Debug, Clone)]
pub struct Configuration {
    /// This is the file path this `Configuration` instance was loaded from.
    pub file_path: PathBuf,

    /// Accessor over the parsed top-level mapping.
    accessor: ConfigAccessor,
}


impl Configuration {
    /// Load the configuration from a specific file path, anchoring
    /// path-like values to `base_directory`.
    ///
    /// The file must contain a YAML document whose top level is a
    /// mapping; a missing file or invalid YAML is an error here, before
    /// any value can be observed.
    pub fn load_from_path<S: AsRef<Path>>(
        configuration_file_path: S,
        base_directory: String,
    ) -> Result<Self> {
        // Read the configuration file into memory. The handle is scoped
        // to this read and released on every exit path.
        let configuration_string = fs::read_to_string(configuration_file_path.as_ref())
            .into_diagnostic()
            .wrap_err_with(|| {
                miette!(
                    "Could not read configuration file at {}.",
                    configuration_file_path.as_ref().display()
                )
            })?;

        // serde_yaml only constructs plain scalars, sequences and
        // mappings, so untrusted documents cannot instantiate
        // arbitrary types through YAML tags.
        let document = serde_yaml::from_str::<Value>(&configuration_string)
            .into_diagnostic()
            .wrap_err("Could not parse configuration file as YAML.")?;

        let Value::Mapping(values) = document else {
            return Err(miette!(
                "Expected the top level of the configuration document to be a mapping."
            ));
        };

        Ok(Self {
            file_path: configuration_file_path.as_ref().to_path_buf(),
            accessor: ConfigAccessor::new(values, base_directory),
        })
    }

    /// Load the configuration from the default path
    /// (`{base directory}config/config.yml`, where the base directory
    /// is the parent of the directory containing the running
    /// executable).
    ///
    /// The resolved base directory and configuration file path are
    /// printed to standard output as a diagnostic trace.
    pub fn load_from_default_path() -> Result<Configuration> {
        let base_directory =
            resolve_base_directory().wrap_err("Could not resolve the base directory.")?;
        println!("{}", base_directory);

        let configuration_file_path = configuration_file_path(&base_directory);
        println!("{}", configuration_file_path);

        Configuration::load_from_path(PathBuf::from(&configuration_file_path), base_directory)
            .wrap_err("Could not load configuration file at default path.")
    }

    /// Returns the process-wide configuration, loading it from the
    /// default path on first use.
    ///
    /// The underlying cell performs the initialization at most once; a
    /// load failure is reported to the caller that triggered it and the
    /// cell stays empty, so a later call retries the load.
    pub fn global() -> Result<&'static Configuration> {
        GLOBAL_CONFIGURATION.get_or_try_init(Configuration::load_from_default_path)
    }

    /// Looks up a top-level configuration key.
    /// See [`ConfigAccessor::get`] for the path-prefix rule.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.accessor.get(key)
    }

    /// The accessor over the parsed mapping.
    pub fn accessor(&self) -> &ConfigAccessor {
        &self.accessor
    }
}
