//! Variable lookup with `{VAR}_FILE` fallback

use std::collections::HashMap;
use std::env;
use std::fs;
use std::hash::BuildHasher;

/// A provider of raw variables.
///
/// [`resolve_in`] applies the `{VAR}_FILE` fallback on top of any source, so
/// implementations only answer direct lookups.
pub trait Source {
    /// Return the raw value of `name`, or `None` if it is not set.
    fn var(&self, name: &str) -> Option<String>;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Source for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        let value = env::var_os(name)?;
        match value.into_string() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(var = name, "ignoring environment variable with non-unicode value");
                None
            }
        }
    }
}

impl<S: BuildHasher> Source for HashMap<String, String, S> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<T: Source + ?Sized> Source for &T {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

/// Resolve `name` from the process environment.
///
/// See [`resolve_in`].
pub fn resolve(name: &str) -> Option<String> {
    resolve_in(&ProcessEnv, name)
}

/// Resolve `name` from `source`, falling back to the file named by `{name}_FILE`.
///
/// Priority order:
/// 1. `name` itself, even when set to an empty string
/// 2. The contents of the file at the path held by `{name}_FILE`, verbatim
///
/// A `{name}_FILE` that cannot be read (missing, unreadable, a directory, not
/// UTF-8, or an empty path) resolves to `None`, same as an unset variable. The
/// failure is logged at `warn`.
pub fn resolve_in<S: Source + ?Sized>(source: &S, name: &str) -> Option<String> {
    if let Some(value) = source.var(name) {
        return Some(value);
    }

    let file_var = format!("{name}_FILE");
    let path = source.var(&file_var)?;

    match fs::read_to_string(&path) {
        Ok(contents) => {
            tracing::debug!(var = name, path = %path, "read value from file");
            Some(contents)
        }
        Err(err) => {
            tracing::warn!(var = %file_var, path = %path, error = %err, "failed to read file");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_resolve_direct_value() {
        let source = map(&[("SIMPLE_KEY", "some value")]);
        assert_eq!(resolve_in(&source, "SIMPLE_KEY"), Some("some value".to_string()));
    }

    #[test]
    fn test_resolve_empty_direct_value_is_found() {
        let source = map(&[("SIMPLE_KEY", "")]);
        assert_eq!(resolve_in(&source, "SIMPLE_KEY"), Some(String::new()));
    }

    #[test]
    fn test_resolve_unset() {
        let source = map(&[]);
        assert_eq!(resolve_in(&source, "SIMPLE_KEY"), None);
    }

    #[test]
    fn test_resolve_file_contents_verbatim() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"  some content\n").unwrap();
        let path = file.path().to_str().unwrap();

        let source = map(&[("SIMPLE_KEY_FILE", path)]);
        assert_eq!(
            resolve_in(&source, "SIMPLE_KEY"),
            Some("  some content\n".to_string())
        );
    }

    #[test]
    fn test_resolve_prefers_direct_over_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "file_value").unwrap();
        let path = file.path().to_str().unwrap();

        let source = map(&[("SIMPLE_KEY", "direct_value"), ("SIMPLE_KEY_FILE", path)]);
        assert_eq!(resolve_in(&source, "SIMPLE_KEY"), Some("direct_value".to_string()));
    }

    #[test]
    fn test_resolve_empty_file_path() {
        let source = map(&[("SIMPLE_KEY_FILE", "")]);
        assert_eq!(resolve_in(&source, "SIMPLE_KEY"), None);
    }

    #[test]
    fn test_resolve_file_not_found() {
        let source = map(&[("SIMPLE_KEY_FILE", "/wrong/path")]);
        assert_eq!(resolve_in(&source, "SIMPLE_KEY"), None);
    }

    #[test]
    fn test_resolve_file_is_directory() {
        let dir = tempfile::tempdir().unwrap();
        let source = map(&[("SIMPLE_KEY_FILE", dir.path().to_str().unwrap())]);
        assert_eq!(resolve_in(&source, "SIMPLE_KEY"), None);
    }

    #[test]
    #[serial]
    fn test_resolve_process_env() {
        env::set_var("ENVBIND_SOURCE_DIRECT", "direct");
        assert_eq!(resolve("ENVBIND_SOURCE_DIRECT"), Some("direct".to_string()));
        env::remove_var("ENVBIND_SOURCE_DIRECT");
        assert_eq!(resolve("ENVBIND_SOURCE_DIRECT"), None);
    }

    #[test]
    #[serial]
    fn test_resolve_process_env_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "secret_value").unwrap();

        env::remove_var("ENVBIND_SOURCE_SECRET");
        env::set_var("ENVBIND_SOURCE_SECRET_FILE", file.path());

        assert_eq!(resolve("ENVBIND_SOURCE_SECRET"), Some("secret_value".to_string()));

        env::remove_var("ENVBIND_SOURCE_SECRET_FILE");
    }
}
