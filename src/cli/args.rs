//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Storage URI to web URL resolver
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: fileurl.toml)
    #[arg(short = 'C', long, default_value = "fileurl.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    // `-V` is taken by clap's auto version flag at this level
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Resolve storage URIs to web URLs
    #[command(visible_alias = "r")]
    Resolve {
        #[command(flatten)]
        args: ResolveArgs,
    },

    /// Rewrite absolute URLs on this platform into relative ones
    #[command(visible_alias = "rel")]
    Relativize {
        #[command(flatten)]
        args: RelativizeArgs,
    },

    /// Validate the config and print the wrapper table
    #[command(visible_alias = "c")]
    Check,
}

/// Resolve command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ResolveArgs {
    /// URIs to resolve. Use `-` to read URIs from stdin (one per line).
    #[arg(value_name = "URI", required = true)]
    pub uris: Vec<String>,

    /// Print absolute URLs instead of root-relative ones
    #[arg(short, long)]
    pub absolute: bool,

    /// Output JSON objects instead of plain URLs
    #[arg(short, long)]
    pub json: bool,

    /// Pretty-print JSON output (implies --json)
    #[arg(short, long)]
    pub pretty: bool,

    /// Override site URL from config.
    ///
    /// Useful for resolving against a different deployment without
    /// modifying fileurl.toml, e.g. a staging host or a local port.
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,
}

/// Relativize command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RelativizeArgs {
    /// URLs to transform. Use `-` to read URLs from stdin (one per line).
    #[arg(value_name = "URL", required = true)]
    pub urls: Vec<String>,

    /// Also strip the configured base path from local results
    #[arg(short, long)]
    pub base_relative: bool,

    /// Override site URL from config.
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,
}
