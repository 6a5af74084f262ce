//! Platform configuration management for `fileurl.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   └── wrappers   # [wrappers]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # PlatformConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section               | Purpose                                      |
//! |-----------------------|----------------------------------------------|
//! | `[site]`              | Canonical base URL of the platform           |
//! | `[wrappers.<scheme>]` | One stream wrapper per storage scheme        |

pub mod section;
pub mod types;
mod util;

pub use util::find_config_file;

// Re-export from section/
pub use section::{
    SiteConfig, WrapperConfig, WrapperKind, WrappersConfig, build_registry, validate_wrappers,
};

// Re-export from types/
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::core::BaseUrl;
use crate::log;
use crate::wrapper::WrapperRegistry;

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing fileurl.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Canonical base URL
    #[serde(default)]
    pub site: SiteConfig,

    /// Stream wrapper declarations, keyed by scheme
    #[serde(default)]
    pub wrappers: WrappersConfig,
}

impl PlatformConfig {
    /// Load and validate configuration from a file.
    ///
    /// Unknown fields are reported on stderr but do not fail the load;
    /// validation errors do.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.config_path = path.to_path_buf();
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string, without validation.
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
        eprintln!();
    }

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        section::validate_wrappers(&self.wrappers, &mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Base URL from `site.url`.
    ///
    /// Fails if `site.url` is not configured.
    pub fn base_url(&self) -> Result<BaseUrl> {
        self.site.base_url()
    }

    /// Build the wrapper registry from the `[wrappers]` section.
    pub fn build_registry(&self) -> WrapperRegistry {
        section::build_registry(&self.wrappers)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with a minimal `[site]` section.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> PlatformConfig {
    let config = format!("[site]\nurl = \"https://example.com\"\n{extra}");
    let (parsed, ignored) = PlatformConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        assert!(PlatformConfig::from_str("[site\nurl = \"https://a.com\"").is_err());
    }

    #[test]
    fn test_platform_config_default() {
        let config = PlatformConfig::default();

        assert_eq!(config.config_path, PathBuf::new());
        assert!(config.site.url.is_none());
        assert!(config.wrappers.is_empty());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\nurl = \"https://example.com\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = PlatformConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.site.url.as_deref(), Some("https://example.com"));
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site]\nurl = \"https://example.com\"\n[wrappers.public]\n";
        let (_, ignored) = PlatformConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fileurl.toml");
        std::fs::write(
            &path,
            "[site]\nurl = \"https://example.com\"\n\n\
             [wrappers.public]\ndirectory = \"/sites/default/files\"\n",
        )
        .unwrap();

        let config = PlatformConfig::load(&path).unwrap();
        assert_eq!(config.config_path, path);
        assert_eq!(config.base_url().unwrap().to_string(), "https://example.com");
        assert_eq!(config.build_registry().schemes(), vec!["public"]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(PlatformConfig::load(&dir.path().join("fileurl.toml")).is_err());
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = PlatformConfig::from_str(
            "[site]\nurl = \"ftp://example.com\"\n\n\
             [wrappers.assets]\nkind = \"cdn\"\n",
        )
        .unwrap();

        let err = config.validate().unwrap_err();
        match err.downcast_ref::<ConfigError>() {
            Some(ConfigError::Diagnostics(diag)) => assert_eq!(diag.len(), 2),
            other => panic!("expected diagnostics, got {other:?}"),
        }
    }
}
