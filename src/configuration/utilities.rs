/// Location of the configuration file, relative to the base directory.
const CONFIGURATION_FILE_FRAGMENT: &str = "config/config.yml";


/// Returns the configuration file path for `base_directory`, which is
/// at `{base directory}config/config.yml`.
///
/// The base directory is expected to carry a trailing separator
/// (see [`resolve_base_directory`][super::resolve_base_directory]);
/// the fragment is appended verbatim.
pub fn configuration_file_path(base_directory: &str) -> String {
    format!("{}{}", base_directory, CONFIGURATION_FILE_FRAGMENT)
}
