//! A single-purpose YAML configuration loader.
//!
//! On load, a base directory is resolved (the parent of the directory
//! containing the running executable), `config/config.yml` beneath it
//! is parsed into a mapping, and the values are exposed through
//! [`Configuration::get`][configuration::Configuration::get]. Any key
//! whose name contains `"path"` has its string value rewritten into an
//! absolute path by prefixing the base directory.

pub mod configuration;
pub mod logging;
