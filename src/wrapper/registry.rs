//! Scheme-keyed wrapper registry, built once before resolution starts.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::StreamWrapper;

/// Maps scheme names to their wrapper.
///
/// Schemes are stored lowercase and looked up case-insensitively.
/// Registration needs `&mut`, so a registry handed to the generator is
/// immutable from then on and safe to share across threads.
#[derive(Clone, Default)]
pub struct WrapperRegistry {
    wrappers: FxHashMap<String, Arc<dyn StreamWrapper>>,
}

impl WrapperRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a wrapper for `scheme`, replacing any previous one.
    pub fn register(&mut self, scheme: &str, wrapper: impl StreamWrapper + 'static) {
        self.wrappers
            .insert(scheme.to_ascii_lowercase(), Arc::new(wrapper));
    }

    /// Handler registered for `scheme`, if any.
    pub fn lookup(&self, scheme: &str) -> Option<&Arc<dyn StreamWrapper>> {
        if scheme.bytes().any(|b| b.is_ascii_uppercase()) {
            self.wrappers.get(&scheme.to_ascii_lowercase())
        } else {
            self.wrappers.get(scheme)
        }
    }

    /// Registered scheme names, sorted.
    pub fn schemes(&self) -> Vec<&str> {
        let mut schemes: Vec<&str> = self.wrappers.keys().map(String::as_str).collect();
        schemes.sort_unstable();
        schemes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.wrappers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.wrappers.is_empty()
    }
}

impl fmt::Debug for WrapperRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WrapperRegistry")
            .field("schemes", &self.schemes())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wrapper::LocalFilesWrapper;

    #[test]
    fn test_register_and_lookup() {
        let mut registry = WrapperRegistry::new();
        registry.register("public", LocalFilesWrapper::new("/files"));

        let wrapper = registry.lookup("public").unwrap();
        assert_eq!(wrapper.external_url("x.png"), "/files/x.png");
        assert!(registry.lookup("private").is_none());
    }

    #[test]
    fn test_lookup_case_insensitive() {
        let mut registry = WrapperRegistry::new();
        registry.register("Public", LocalFilesWrapper::new("/files"));

        assert!(registry.lookup("public").is_some());
        assert!(registry.lookup("PUBLIC").is_some());
        assert!(registry.lookup("Public").is_some());
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = WrapperRegistry::new();
        registry.register("public", LocalFilesWrapper::new("/old"));
        registry.register("public", LocalFilesWrapper::new("/new"));

        assert_eq!(registry.len(), 1);
        let wrapper = registry.lookup("public").unwrap();
        assert_eq!(wrapper.external_url("x"), "/new/x");
    }

    #[test]
    fn test_schemes_sorted() {
        let mut registry = WrapperRegistry::new();
        registry.register("temporary", LocalFilesWrapper::new("/tmp"));
        registry.register("public", LocalFilesWrapper::new("/files"));
        registry.register("private", LocalFilesWrapper::new("/private"));

        assert_eq!(registry.schemes(), vec!["private", "public", "temporary"]);
    }
}
