//! fileurl - storage URI to web URL resolver.

use anyhow::{Result, bail};
use clap::{ColorChoice, Parser};

use fileurl::cli::{self, Cli, Commands};
use fileurl::config::{PlatformConfig, find_config_file};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    fileurl::logger::set_verbose(cli.verbose);

    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Resolve { args } => cli::run_resolve(args, config),
        Commands::Relativize { args } => cli::run_relativize(args, config),
        Commands::Check => cli::run_check(&config),
    }
}

/// Locate and load fileurl.toml.
///
/// resolve/relativize fall back to an empty config when none is found,
/// so --site-url alone is enough for shipped paths; check requires one.
fn load_config(cli: &Cli) -> Result<PlatformConfig> {
    match find_config_file(&cli.config) {
        Some(path) => PlatformConfig::load(&path),
        None if matches!(cli.command, Commands::Check) => {
            bail!("config file '{}' not found", cli.config.display())
        }
        None => Ok(PlatformConfig::default()),
    }
}
