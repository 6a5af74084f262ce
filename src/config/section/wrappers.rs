//! `[wrappers]` section configuration.
//!
//! Each sub-table declares one stream wrapper, keyed by its scheme:
//!
//! ```toml
//! [wrappers.public]
//! kind = "local"
//! directory = "/sites/default/files"
//!
//! [wrappers.assets]
//! kind = "cdn"
//! base = "https://cdn.example.com/media"
//! ```

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::is_valid_scheme;
use crate::wrapper::{CdnWrapper, LocalFilesWrapper, WrapperRegistry};

/// Scheme name -> wrapper declaration, straight from the TOML table.
pub type WrappersConfig = FxHashMap<String, WrapperConfig>;

/// One `[wrappers.<scheme>]` entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WrapperConfig {
    /// Wrapper flavor; decides which of the other fields apply.
    pub kind: WrapperKind,

    /// Root-relative directory managed files are served from
    /// (`kind = "local"` only; defaults to `/files`).
    pub directory: Option<String>,

    /// Absolute URL targets are joined onto (`kind = "cdn"` only).
    pub base: Option<String>,
}

/// Wrapper flavor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WrapperKind {
    /// Files served by the site itself from a root-relative directory.
    #[default]
    Local,
    /// Files served from a foreign host.
    Cdn,
}

impl fmt::Display for WrapperKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("local"),
            Self::Cdn => f.write_str("cdn"),
        }
    }
}

impl WrapperConfig {
    /// Default mount for local wrappers without an explicit directory.
    pub const DEFAULT_DIRECTORY: &'static str = "/files";

    pub(crate) const FIELD: FieldPath = FieldPath::new("wrappers");

    /// Effective directory for a local wrapper.
    pub fn mount(&self) -> &str {
        self.directory.as_deref().unwrap_or(Self::DEFAULT_DIRECTORY)
    }

    /// Validate one wrapper declaration.
    ///
    /// # Checks
    /// - scheme name is lexically valid and not reserved (http/https/data)
    /// - `directory` is root-relative; set only for `kind = "local"`
    /// - `base` is an absolute http(s) URL; required for `kind = "cdn"`
    pub fn validate(&self, scheme: &str, diag: &mut ConfigDiagnostics) {
        if !is_valid_scheme(scheme) {
            diag.error_with_hint(
                Self::FIELD,
                format!("invalid scheme name `{scheme}`"),
                "schemes start with a letter, then letters, digits, `+`, `-` or `.`",
            );
        } else if scheme.eq_ignore_ascii_case("http")
            || scheme.eq_ignore_ascii_case("https")
            || scheme.eq_ignore_ascii_case("data")
        {
            diag.error(
                Self::FIELD,
                format!("[{scheme}] scheme is reserved for direct URLs"),
            );
        }

        match self.kind {
            WrapperKind::Local => {
                if let Some(directory) = &self.directory
                    && !directory.starts_with('/')
                {
                    diag.error_with_hint(
                        Self::FIELD,
                        format!("[{scheme}] directory `{directory}` must be root-relative"),
                        "start it with `/`, e.g. \"/sites/default/files\"",
                    );
                }
                if self.base.is_some() {
                    diag.error(
                        Self::FIELD,
                        format!("[{scheme}] `base` only applies to kind = \"cdn\""),
                    );
                }
            }
            WrapperKind::Cdn => {
                match &self.base {
                    Some(base) => Self::validate_cdn_base(scheme, base, diag),
                    None => diag.error_with_hint(
                        Self::FIELD,
                        format!("[{scheme}] `base` is required for kind = \"cdn\""),
                        "set base = \"https://cdn.example.com\"",
                    ),
                }
                if self.directory.is_some() {
                    diag.error(
                        Self::FIELD,
                        format!("[{scheme}] `directory` only applies to kind = \"local\""),
                    );
                }
            }
        }
    }

    fn validate_cdn_base(scheme: &str, base: &str, diag: &mut ConfigDiagnostics) {
        match url::Url::parse(base) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error(
                        Self::FIELD,
                        format!(
                            "[{scheme}] base scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                    );
                } else if parsed.host_str().is_none() {
                    diag.error(
                        Self::FIELD,
                        format!("[{scheme}] base must have a valid host"),
                    );
                }
            }
            Err(e) => diag.error(
                Self::FIELD,
                format!("[{scheme}] invalid base URL: {e}"),
            ),
        }
    }
}

/// Validate the whole `[wrappers]` section.
///
/// Scheme matching is case-insensitive at lookup time, so two spellings
/// of one scheme would shadow each other in the registry; they are
/// rejected here on top of the per-entry checks.
pub fn validate_wrappers(wrappers: &WrappersConfig, diag: &mut ConfigDiagnostics) {
    // Sorted so diagnostics come out in a stable order
    let mut entries: Vec<(&str, &WrapperConfig)> = wrappers
        .iter()
        .map(|(scheme, entry)| (scheme.as_str(), entry))
        .collect();
    entries.sort_unstable_by_key(|(scheme, _)| *scheme);

    let mut seen: FxHashMap<String, &str> = FxHashMap::default();
    for (scheme, entry) in entries {
        if let Some(first) = seen.insert(scheme.to_ascii_lowercase(), scheme) {
            diag.error_with_hint(
                WrapperConfig::FIELD,
                format!("[{scheme}] and [{first}] name the same scheme"),
                "scheme matching is case-insensitive; keep one declaration",
            );
        }
        entry.validate(scheme, diag);
    }
}

/// Build the runtime registry from validated wrapper declarations.
pub fn build_registry(wrappers: &WrappersConfig) -> WrapperRegistry {
    let mut registry = WrapperRegistry::new();
    for (scheme, entry) in wrappers {
        match entry.kind {
            WrapperKind::Local => {
                registry.register(scheme, LocalFilesWrapper::new(entry.mount()));
            }
            WrapperKind::Cdn => {
                // cdn entries without a base are rejected by validate()
                if let Some(base) = &entry.base {
                    registry.register(scheme, CdnWrapper::new(base));
                }
            }
        }
    }
    registry
}
