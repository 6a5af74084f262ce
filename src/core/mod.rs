//! Core types - pure abstractions shared across the codebase.

mod base;
mod uri;

pub use base::BaseUrl;
pub use uri::{FileUri, is_valid_scheme};
