use std::env::current_exe;
use std::path::MAIN_SEPARATOR;

use miette::{miette, Context, IntoDiagnostic, Result};


/// Resolves the base directory that relative configuration values are
/// anchored to.
///
/// The base directory is the parent of the directory containing the
/// running executable, returned as an absolute path that always ends
/// with a trailing path separator (path-like configuration values are
/// prefixed with this string verbatim, see
/// [`ConfigAccessor::get`][crate::configuration::ConfigAccessor::get]).
///
/// Given a fixed filesystem layout, repeated calls within a process
/// return the same string.
pub fn resolve_base_directory() -> Result<String> {
    let executable_path = current_exe()
        .into_diagnostic()
        .wrap_err("Could not resolve the current executable path.")?;

    let executable_path = dunce::canonicalize(executable_path)
        .into_diagnostic()
        .wrap_err("Could not canonicalize the current executable path.")?;

    let executable_directory = executable_path
        .parent()
        .ok_or_else(|| miette!("Executable path has no containing directory."))?;

    parent_with_trailing_separator(&executable_directory.to_string_lossy())
}


/// Truncates `directory` at its last path separator and re-appends
/// a single trailing separator, yielding the parent directory.
fn parent_with_trailing_separator(directory: &str) -> Result<String> {
    let last_separator_index = directory.rfind(MAIN_SEPARATOR).ok_or_else(|| {
        miette!(
            "Directory {} does not contain a path separator.",
            directory
        )
    })?;

    let mut base_directory = directory[..last_separator_index].to_string();
    base_directory.push(MAIN_SEPARATOR);

    Ok(base_directory)
}
