//! Stream wrappers - pluggable resolvers from storage targets to
//! externally reachable URLs.

mod local;
mod registry;
mod remote;

pub use local::LocalFilesWrapper;
pub use registry::WrapperRegistry;
pub use remote::CdnWrapper;

/// Capability of one storage scheme: map a URI target to the URL
/// clients fetch it from.
///
/// Results may be host-relative (`/files/cat.jpg`) or absolute
/// (`https://cdn.example.com/cat.jpg`). Implementations must be pure
/// and non-blocking; resolution happens on arbitrary caller threads.
pub trait StreamWrapper: Send + Sync {
    /// Externally reachable URL for a target within this wrapper's storage.
    fn external_url(&self, target: &str) -> String;
}

/// Percent-encode a storage target for use in a URL path.
///
/// Slashes stay separators; backslashes from Windows-style storage
/// paths normalize to slashes first. Unreserved characters pass through.
pub(crate) fn encode_target(target: &str) -> String {
    use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

    const TARGET: &AsciiSet = &NON_ALPHANUMERIC
        .remove(b'-')
        .remove(b'_')
        .remove(b'.')
        .remove(b'~');

    target
        .replace('\\', "/")
        .split('/')
        .map(|segment| utf8_percent_encode(segment, TARGET).to_string())
        .collect::<Vec<_>>()
        .join("/")
}
