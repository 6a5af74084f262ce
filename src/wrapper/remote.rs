//! Remote storage: targets resolve to absolute URLs on a foreign host
//! (CDN, object store).

use super::{StreamWrapper, encode_target};

/// Joins targets onto an absolute base URL such as
/// `https://cdn.example.com/media`.
#[derive(Debug, Clone)]
pub struct CdnWrapper {
    base: String,
}

impl CdnWrapper {
    /// `base` must be an absolute http(s) URL; a trailing slash is removed.
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim().trim_end_matches('/').to_string(),
        }
    }

    #[inline]
    pub fn base(&self) -> &str {
        &self.base
    }
}

impl StreamWrapper for CdnWrapper {
    fn external_url(&self, target: &str) -> String {
        format!("{}/{}", self.base, encode_target(target))
    }
}
