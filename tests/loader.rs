//! End-to-end loading tests against temporary directories.

use std::fs;
use std::path::{Path, PathBuf};

use confloader::configuration::{configuration_file_path, Configuration};
use serde_yaml::Value;
use tempfile::TempDir;


/// Writes `contents` to `config/config.yml` under a fresh temporary
/// directory and returns the directory together with the file path.
fn write_config_file(contents: &str) -> (TempDir, PathBuf) {
    let base = TempDir::new().expect("failed to create temporary directory");

    let config_directory = base.path().join("config");
    fs::create_dir_all(&config_directory).expect("failed to create config directory");

    let config_file = config_directory.join("config.yml");
    fs::write(&config_file, contents).expect("failed to write config file");

    (base, config_file)
}

fn base_directory_of(base: &TempDir) -> String {
    let mut directory = base.path().to_string_lossy().to_string();
    directory.push(std::path::MAIN_SEPARATOR);
    directory
}


#[test]
fn loads_a_document_and_resolves_path_keys() {
    let (base, config_file) = write_config_file(
        "name: svc\n\
         log_path: logs/out.log\n\
         retries: 3\n",
    );
    let base_directory = base_directory_of(&base);

    let configuration =
        Configuration::load_from_path(&config_file, base_directory.clone()).unwrap();

    assert_eq!(configuration.get("name"), Some(Value::from("svc")));
    assert_eq!(
        configuration.get("log_path"),
        Some(Value::from(format!("{}logs/out.log", base_directory)))
    );
    assert_eq!(configuration.get("retries"), Some(Value::from(3)));
    assert_eq!(configuration.get("missing"), None);
}

#[test]
fn records_the_file_path_it_was_loaded_from() {
    let (base, config_file) = write_config_file("name: svc\n");

    let configuration =
        Configuration::load_from_path(&config_file, base_directory_of(&base)).unwrap();

    assert_eq!(configuration.file_path, config_file);
}

#[test]
fn missing_file_is_a_load_error() {
    let base = TempDir::new().unwrap();
    let nonexistent = base.path().join("config").join("config.yml");

    let result = Configuration::load_from_path(&nonexistent, base_directory_of(&base));

    assert!(result.is_err());
}

#[test]
fn malformed_yaml_is_a_load_error() {
    let (base, config_file) = write_config_file("name: {unbalanced\n");

    let result = Configuration::load_from_path(&config_file, base_directory_of(&base));

    assert!(result.is_err());
}

#[test]
fn non_mapping_top_level_is_a_load_error() {
    let (base, config_file) = write_config_file("- just\n- a\n- sequence\n");

    let result = Configuration::load_from_path(&config_file, base_directory_of(&base));

    assert!(result.is_err());
}

#[test]
fn repeated_lookups_return_equal_values() {
    let (base, config_file) = write_config_file("log_path: logs/out.log\nretries: 3\n");

    let configuration =
        Configuration::load_from_path(&config_file, base_directory_of(&base)).unwrap();

    assert_eq!(
        configuration.get("log_path"),
        configuration.get("log_path")
    );
    assert_eq!(configuration.get("retries"), configuration.get("retries"));
}

#[test]
fn default_path_is_the_config_fragment_under_the_base_directory() {
    let (base, config_file) = write_config_file("name: svc\n");
    let base_directory = base_directory_of(&base);

    let resolved = configuration_file_path(&base_directory);

    assert_eq!(Path::new(&resolved), config_file.as_path());
}
