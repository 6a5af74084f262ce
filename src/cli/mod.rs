//! Command-line interface module.

mod args;
mod check;
mod common;
mod relativize;
mod resolve;

pub use args::{Cli, Commands, RelativizeArgs, ResolveArgs};
pub use check::run_check;
pub use relativize::run_relativize;
pub use resolve::run_resolve;
