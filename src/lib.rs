//! Storage URI to web URL resolution for content platforms.
//!
//! Content records store file locations as compact URIs like
//! `public://photos/cat.jpg`. Rendering needs browser-usable URLs. This
//! crate maps between the two: a [`WrapperRegistry`] of per-scheme
//! [`StreamWrapper`] handlers turns URIs into URLs, a [`BaseUrl`]
//! decides how local URLs render, and [`transform_relative`] rewrites
//! absolute local URLs back to relative form.
//!
//! ```
//! use fileurl::{BaseUrl, FileUrlGenerator, LocalFilesWrapper, WrapperRegistry};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut registry = WrapperRegistry::new();
//! registry.register("public", LocalFilesWrapper::new("/sites/default/files"));
//! let generator = FileUrlGenerator::new(registry);
//!
//! let base = BaseUrl::parse("https://example.com")?;
//! let url = generator.generate(&base, "public://photos/cat.jpg")?;
//! assert_eq!(url.relative(), "/sites/default/files/photos/cat.jpg");
//! assert_eq!(url.absolute(), "https://example.com/sites/default/files/photos/cat.jpg");
//! # Ok(())
//! # }
//! ```
//!
//! The `fileurl` binary wraps the same API for shell use, configured
//! through `fileurl.toml`.

pub mod cli;
pub mod config;
pub mod core;
pub mod generator;
pub mod logger;
pub mod wrapper;

pub use config::PlatformConfig;
pub use core::{BaseUrl, FileUri};
pub use generator::{FileUrlGenerator, GeneratedUrl, InvalidStreamWrapper, transform_relative};
pub use wrapper::{CdnWrapper, LocalFilesWrapper, StreamWrapper, WrapperRegistry};
