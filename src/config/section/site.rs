//! `[site]` section configuration.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::BaseUrl;

/// Where the platform is publicly reachable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Base URL of the site; the path component becomes the application
    /// base path (e.g., "https://example.com/app").
    pub url: Option<String>,
}

impl SiteConfig {
    pub(crate) const URL: FieldPath = FieldPath::new("site.url");

    /// Validate `[site]` fields.
    ///
    /// # Checks
    /// - `url`, when set, must parse with an http/https scheme and a host
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let Some(url_str) = &self.url else { return };

        match url::Url::parse(url_str) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::URL,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::URL,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::URL,
                    format!("invalid URL: {e}"),
                    "use format like https://example.com",
                );
            }
        }
    }

    /// Base URL context derived from `url`.
    pub fn base_url(&self) -> Result<BaseUrl> {
        let Some(url) = &self.url else {
            bail!("site.url is not configured (set it in fileurl.toml or pass --site-url)");
        };
        BaseUrl::parse(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_parse_site_url() {
        let config = test_parse_config("");
        assert_eq!(config.site.url.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_validate_accepts_http_and_https() {
        for url in ["https://example.com/app", "http://localhost:8080"] {
            let site = SiteConfig {
                url: Some(url.to_string()),
            };
            let mut diag = ConfigDiagnostics::new();
            site.validate(&mut diag);
            assert!(!diag.has_errors(), "{url} should validate");
        }
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        for url in ["ftp://example.com", "not a url", "https://"] {
            let site = SiteConfig {
                url: Some(url.to_string()),
            };
            let mut diag = ConfigDiagnostics::new();
            site.validate(&mut diag);
            assert!(diag.has_errors(), "{url} should be rejected");
        }
    }

    #[test]
    fn test_validate_allows_missing_url() {
        let site = SiteConfig::default();
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_base_url_extracts_base_path() {
        let site = SiteConfig {
            url: Some("https://example.com/app/".to_string()),
        };
        let base = site.base_url().unwrap();
        assert_eq!(base.host(), "example.com");
        assert_eq!(base.base_path(), "/app");
    }

    #[test]
    fn test_base_url_requires_url() {
        assert!(SiteConfig::default().base_url().is_err());
    }
}
