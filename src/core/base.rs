//! Base URL context: the scheme/host/port/base-path quadruple every
//! generated URL is anchored to.
//!
//! Invariants:
//! - scheme is `http` or `https` (lowercase)
//! - host is lowercase
//! - port is `None` when it equals the scheme default (80/443)
//! - base path is `""` for a root mount, otherwise `/app`-style with a
//!   leading slash and no trailing slash

use std::fmt;

use anyhow::{Context, Result, bail};
use url::Url;

/// Where the platform is reachable: origin plus application mount point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl {
    scheme: String,
    host: String,
    port: Option<u16>,
    base_path: String,
}

impl BaseUrl {
    /// Base at the host root with the scheme's default port.
    pub fn new(scheme: &str, host: &str) -> Self {
        Self {
            scheme: scheme.to_ascii_lowercase(),
            host: host.to_ascii_lowercase(),
            port: None,
            base_path: String::new(),
        }
    }

    /// Set an explicit port. Scheme-default ports normalize to `None`.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = (port != default_port(&self.scheme)).then_some(port);
        self
    }

    /// Set the application mount point (`/app`, `app/`, `/` all accepted).
    pub fn with_base_path(mut self, base_path: &str) -> Self {
        self.base_path = normalize_base_path(base_path);
        self
    }

    /// Parse a full base URL, e.g. `https://example.com:8080/app`.
    pub fn parse(url: &str) -> Result<Self> {
        let parsed = Url::parse(url.trim())
            .with_context(|| format!("invalid base URL `{url}`"))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            bail!("base URL `{url}` must use http or https");
        }
        let Some(host) = parsed.host_str() else {
            bail!("base URL `{url}` has no host");
        };
        Ok(Self {
            scheme: parsed.scheme().to_string(),
            host: host.to_ascii_lowercase(),
            // the url crate already drops scheme-default ports
            port: parsed.port(),
            base_path: normalize_base_path(parsed.path()),
        })
    }

    #[inline]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    #[inline]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Explicit non-default port, if any.
    #[inline]
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// The port clients actually connect to.
    #[inline]
    pub fn effective_port(&self) -> u16 {
        self.port.unwrap_or_else(|| default_port(&self.scheme))
    }

    /// `""` for a root mount, otherwise `/app` (no trailing slash).
    #[inline]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// `scheme://host[:port]`, default ports omitted.
    pub fn origin(&self) -> String {
        match self.port {
            Some(port) => format!("{}://{}:{}", self.scheme, self.host, port),
            None => format!("{}://{}", self.scheme, self.host),
        }
    }

    /// Prefix a bare asset path with the base path, inserting the slash.
    pub fn join_base(&self, path: &str) -> String {
        format!("{}/{}", self.base_path, path)
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.origin(), self.base_path)
    }
}

#[inline]
fn default_port(scheme: &str) -> u16 {
    if scheme == "https" { 443 } else { 80 }
}

/// Normalize a mount path: `""`/`/` become `""`, everything else gets a
/// leading slash and loses the trailing one.
fn normalize_base_path(base_path: &str) -> String {
    let trimmed = base_path.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
