//! Configuration section definitions.
//!
//! Each module corresponds to a section in `fileurl.toml`:
//!
//! | Module     | TOML Section   | Purpose                           |
//! |------------|----------------|-----------------------------------|
//! | `site`     | `[site]`       | Canonical base URL                |
//! | `wrappers` | `[wrappers]`   | Stream wrapper declarations       |

mod site;
mod wrappers;

// Re-export section configs
pub use site::SiteConfig;
pub use wrappers::{WrapperConfig, WrapperKind, WrappersConfig, build_registry, validate_wrappers};
