//! Check command implementation.
//!
//! Validation happens at load time; this prints the effective setup
//! for a config that passed.

use anyhow::Result;

use crate::config::{PlatformConfig, WrapperKind};
use crate::log;

/// Execute check command
pub fn run_check(config: &PlatformConfig) -> Result<()> {
    log!("check"; "config {}", config.config_path.display());

    match config.base_url() {
        Ok(base) => log!("check"; "base URL {}", base),
        Err(_) => log!("check"; "base URL not set (set [site] url or pass --site-url)"),
    }

    if config.wrappers.is_empty() {
        log!("check"; "no wrappers configured");
        return Ok(());
    }

    log!("check"; "{} wrapper(s):", config.wrappers.len());
    let mut schemes: Vec<&str> = config.wrappers.keys().map(String::as_str).collect();
    schemes.sort_unstable();
    for scheme in schemes {
        let entry = &config.wrappers[scheme];
        match entry.kind {
            WrapperKind::Local => {
                log!("check"; "  {}:// -> {} ({})", scheme, entry.mount(), entry.kind);
            }
            WrapperKind::Cdn => {
                log!(
                    "check";
                    "  {}:// -> {} ({})",
                    scheme,
                    entry.base.as_deref().unwrap_or("?"),
                    entry.kind
                );
            }
        }
    }
    Ok(())
}
