//! Local managed-file storage: targets live under a directory served by
//! the site itself.

use super::{StreamWrapper, encode_target};

/// Resolves targets under a root-relative directory of the local site
/// (`public://cat.jpg` -> `/files/cat.jpg`).
#[derive(Debug, Clone)]
pub struct LocalFilesWrapper {
    directory: String,
}

impl LocalFilesWrapper {
    /// `directory` is the root-relative mount, e.g. `/sites/default/files`.
    /// A missing leading slash is added, a trailing one removed.
    pub fn new(directory: &str) -> Self {
        Self {
            directory: normalize_directory(directory),
        }
    }

    #[inline]
    pub fn directory(&self) -> &str {
        &self.directory
    }
}

impl StreamWrapper for LocalFilesWrapper {
    fn external_url(&self, target: &str) -> String {
        format!("{}/{}", self.directory, encode_target(target))
    }
}

fn normalize_directory(directory: &str) -> String {
    let trimmed = directory.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_url() {
        let wrapper = LocalFilesWrapper::new("/sites/default/files");
        assert_eq!(
            wrapper.external_url("cat.jpg"),
            "/sites/default/files/cat.jpg"
        );
        assert_eq!(
            wrapper.external_url("2024/cat.jpg"),
            "/sites/default/files/2024/cat.jpg"
        );
    }

    #[test]
    fn test_external_url_encodes_target() {
        let wrapper = LocalFilesWrapper::new("/files");
        assert_eq!(wrapper.external_url("my cat.jpg"), "/files/my%20cat.jpg");
    }

    #[test]
    fn test_empty_target_keeps_directory() {
        let wrapper = LocalFilesWrapper::new("/files");
        assert_eq!(wrapper.external_url(""), "/files/");
    }

    #[test]
    fn test_directory_normalization() {
        assert_eq!(LocalFilesWrapper::new("files/").directory(), "/files");
        assert_eq!(LocalFilesWrapper::new("/files").directory(), "/files");
        // A root mount keeps targets rooted without doubling the slash
        assert_eq!(LocalFilesWrapper::new("/").external_url("x.png"), "/x.png");
    }
}
