use std::{collections::HashMap, env, ffi::OsString};

/// Access to a set of environment variables.
///
/// [`ProcessEnvironment`] is the real thing; [`MemoryEnvironment`] stands in
/// for it wherever the process environment must not be touched.
pub trait Environment {
    /// Read a variable
    fn var(&self, key: &str) -> Option<OsString>;

    /// Set a variable, replacing any previous value
    fn set_var(&mut self, key: &str, value: &str);

    /// Whether a variable is set to a non-empty value
    fn is_set(&self, key: &str) -> bool {
        self.var(key).map(|value| !value.is_empty()).unwrap_or(false)
    }
}

impl<E: Environment + ?Sized> Environment for &mut E {
    fn var(&self, key: &str) -> Option<OsString> {
        (**self).var(key)
    }

    fn set_var(&mut self, key: &str, value: &str) {
        (**self).set_var(key, value)
    }
}

/// The environment of the running process.
///
/// Writes are visible to anything started afterwards in this process, which
/// is how Qt picks up `QT_SCALE_FACTOR`. They are never persisted.
#[derive(Copy, Clone, Debug, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, key: &str) -> Option<OsString> {
        env::var_os(key)
    }

    fn set_var(&mut self, key: &str, value: &str) {
        env::set_var(key, value)
    }
}

/// An environment held in memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryEnvironment {
    vars: HashMap<String, OsString>,
}

impl MemoryEnvironment {
    /// An empty environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a variable as UTF-8
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).and_then(|value| value.to_str())
    }

    /// Number of variables set
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether no variables are set
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl Environment for MemoryEnvironment {
    fn var(&self, key: &str) -> Option<OsString> {
        self.vars.get(key).cloned()
    }

    fn set_var(&mut self, key: &str, value: &str) {
        self.vars.insert(key.into(), value.into());
    }
}

impl<K: Into<String>, V: Into<OsString>> FromIterator<(K, V)> for MemoryEnvironment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_are_unset() {
        let env: MemoryEnvironment = [("QT_SCALE_FACTOR", "")].into_iter().collect();
        assert!(env.var("QT_SCALE_FACTOR").is_some());
        assert!(!env.is_set("QT_SCALE_FACTOR"));
        assert!(!env.is_set("QT_AUTO_SCREEN_SCALE_FACTOR"));
    }

    #[test]
    fn memory_set_replaces() {
        let mut env = MemoryEnvironment::new();
        env.set_var("QT_SCALE_FACTOR", "1.25");
        env.set_var("QT_SCALE_FACTOR", "1.5");
        assert_eq!(env.get("QT_SCALE_FACTOR"), Some("1.5"));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn process_environment_roundtrip() {
        const KEY: &str = "HIDPI_WINAPI_TEST_PROCESS_ENVIRONMENT";
        let mut env = ProcessEnvironment;
        assert!(!env.is_set(KEY));
        env.set_var(KEY, "2");
        assert!(env.is_set(KEY));
        assert_eq!(std::env::var(KEY).as_deref(), Ok("2"));
        std::env::remove_var(KEY);
        assert!(!env.is_set(KEY));
    }
}
