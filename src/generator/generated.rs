//! Immutable URL descriptor: one resolution, two renderings.

use std::fmt;

use crate::core::BaseUrl;

/// Result of resolving a file URI.
///
/// Local results carry a root-relative path and derive their absolute
/// form from the base origin. External results render identically in
/// both forms. Nothing mutates after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUrl {
    relative: String,
    absolute: String,
    local: bool,
}

impl GeneratedUrl {
    /// Local URL under the base host. `root_relative` starts with `/`.
    pub(crate) fn local(root_relative: String, base: &BaseUrl) -> Self {
        let absolute = format!("{}{}", base.origin(), root_relative);
        Self {
            relative: root_relative,
            absolute,
            local: true,
        }
    }

    /// URL outside the base host, rendered as-is in both forms.
    pub(crate) fn external(url: String) -> Self {
        Self {
            relative: url.clone(),
            absolute: url,
            local: false,
        }
    }

    /// Default rendering: root-relative for local URLs, unchanged for
    /// external ones.
    #[inline]
    pub fn relative(&self) -> &str {
        &self.relative
    }

    /// Absolute rendering: origin-prefixed for local URLs, unchanged
    /// for external ones.
    #[inline]
    pub fn absolute(&self) -> &str {
        &self.absolute
    }

    /// Whether the URL points at the base host rather than a foreign one.
    #[inline]
    pub fn is_local(&self) -> bool {
        self.local
    }

    /// Consume into the relative rendering.
    #[inline]
    pub fn into_relative(self) -> String {
        self.relative
    }

    /// Consume into the absolute rendering.
    #[inline]
    pub fn into_absolute(self) -> String {
        self.absolute
    }
}

impl fmt::Display for GeneratedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.relative)
    }
}
