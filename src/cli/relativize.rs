//! Relativize command implementation.
//!
//! Inverse of `resolve` for local URLs: absolute URLs pointing at this
//! platform lose their origin, everything else passes through unchanged.

use anyhow::Result;

use super::common::gather_inputs;
use crate::cli::args::RelativizeArgs;
use crate::config::PlatformConfig;
use crate::debug;
use crate::generator::transform_relative;

/// Execute relativize command
pub fn run_relativize(args: &RelativizeArgs, mut config: PlatformConfig) -> Result<()> {
    if let Some(url) = &args.site_url {
        config.site.url = Some(url.clone());
    }
    let base = config.base_url()?;

    debug!("relativize"; "base {}", base);

    for url in gather_inputs(&args.urls)? {
        println!("{}", transform_relative(&base, &url, !args.base_relative));
    }
    Ok(())
}
