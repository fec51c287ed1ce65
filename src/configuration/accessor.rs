use serde_yaml::{Mapping, Value};


/// A read-only view over the parsed configuration mapping.
///
/// Keys are looked up with [`get`][Self::get]; there is no way to add,
/// remove or mutate a value after construction.
#[derive(Debug, Clone)]
pub struct ConfigAccessor {
    /// Base directory all path-like values are anchored to.
    /// Always ends with a trailing path separator.
    base_directory: String,

    /// The parsed top-level YAML mapping.
    values: Mapping,
}


impl ConfigAccessor {
    pub(crate) fn new(values: Mapping, base_directory: String) -> Self {
        Self {
            base_directory,
            values,
        }
    }

    /// Looks up a top-level configuration key.
    ///
    /// Returns `None` when the key is absent; a missing key is never an
    /// error. When the key name contains the substring `"path"`
    /// (case-sensitive, anywhere in the name) and the stored value is a
    /// string, the returned value is the base directory concatenated
    /// with the stored string. The concatenation is plain string
    /// concatenation with no separator normalization, and it is redone
    /// on every call rather than cached.
    ///
    /// Note that the substring match is deliberate: `database_path`,
    /// `path_to_log` and even `pathology` all receive the prefix.
    pub fn get(&self, key: &str) -> Option<Value> {
        let value = self.values.get(key)?;

        if key.contains("path") {
            if let Value::String(relative_path) = value {
                return Some(Value::String(format!(
                    "{}{}",
                    self.base_directory, relative_path
                )));
            }
        }

        Some(value.clone())
    }

    /// The base directory path-like values are resolved against.
    pub fn base_directory(&self) -> &str {
        &self.base_directory
    }

    /// Iterates over all top-level keys with string names,
    /// in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().filter_map(Value::as_str)
    }
}
