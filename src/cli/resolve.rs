//! Resolve command implementation.
//!
//! Resolves storage URIs to web URLs in batch. Plain output prints one
//! URL per line in input order; `--json` emits an array of descriptors.

use anyhow::{Context, Result};
use serde::Serialize;

use super::common::gather_inputs;
use crate::cli::args::ResolveArgs;
use crate::config::PlatformConfig;
use crate::core::BaseUrl;
use crate::debug;
use crate::generator::FileUrlGenerator;

/// Resolution of a single URI, as emitted by `--json`.
#[derive(Debug, Serialize)]
pub struct ResolvedUri {
    pub uri: String,
    pub relative: String,
    pub absolute: String,
    pub local: bool,
}

/// Execute resolve command
pub fn run_resolve(args: &ResolveArgs, mut config: PlatformConfig) -> Result<()> {
    if let Some(url) = &args.site_url {
        config.site.url = Some(url.clone());
    }
    let base = config.base_url()?;
    let generator = FileUrlGenerator::new(config.build_registry());

    debug!("resolve"; "base {}", base);
    debug!("resolve"; "wrappers {:?}", generator.registry().schemes());

    let uris = gather_inputs(&args.uris)?;
    if uris.is_empty() {
        return Ok(());
    }

    let results = resolve_uris(&generator, &base, &uris)?;
    println!("{}", render(&results, args)?);
    Ok(())
}

/// Resolve each URI, failing fast on the first unknown scheme.
fn resolve_uris(
    generator: &FileUrlGenerator,
    base: &BaseUrl,
    uris: &[String],
) -> Result<Vec<ResolvedUri>> {
    let mut results = Vec::with_capacity(uris.len());
    for uri in uris {
        let url = generator
            .generate(base, uri)
            .with_context(|| format!("failed to resolve `{uri}`"))?;
        results.push(ResolvedUri {
            uri: uri.clone(),
            relative: url.relative().to_string(),
            absolute: url.absolute().to_string(),
            local: url.is_local(),
        });
    }
    Ok(results)
}

// ============================================================================
// Output Formatting
// ============================================================================

fn render(results: &[ResolvedUri], args: &ResolveArgs) -> Result<String> {
    if args.json || args.pretty {
        let formatted = if args.pretty {
            serde_json::to_string_pretty(results)?
        } else {
            serde_json::to_string(results)?
        };
        return Ok(formatted);
    }

    let lines: Vec<&str> = results
        .iter()
        .map(|r| {
            if args.absolute {
                r.absolute.as_str()
            } else {
                r.relative.as_str()
            }
        })
        .collect();
    Ok(lines.join("\n"))
}

// ============================================================================
// tests
// ============================================================================
