//! File URL generation - scheme dispatch, locality normalization, and
//! relativization.
//!
//! Resolution pipeline:
//!
//! | URI shape                  | Result                                     |
//! |----------------------------|--------------------------------------------|
//! | `scheme://target`          | wrapper lookup, result localized           |
//! | `http(s)://`, `data:` URIs | passed through as external                 |
//! | `//host/...`               | passed through (browser picks the scheme)  |
//! | `mailto:`, `tel:`, ...     | passed through as external                 |
//! | `/rooted/path`             | local, served as-is                        |
//! | `bare/path`                | local, mounted under the base path         |

mod generated;
mod relative;

pub use generated::GeneratedUrl;
pub use relative::transform_relative;

use thiserror::Error;
use url::Url;

use crate::core::{BaseUrl, FileUri};
use crate::wrapper::WrapperRegistry;

/// A scheme-qualified URI named a scheme nothing is registered for.
///
/// Deterministic configuration error; retrying cannot succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no stream wrapper registered for scheme `{scheme}`")]
pub struct InvalidStreamWrapper {
    /// The scheme that failed to resolve, as written in the URI.
    pub scheme: String,
}

/// Resolves file URIs against a fixed wrapper registry.
///
/// The registry is taken at construction and immutable afterwards; the
/// base URL context arrives per call. Every operation is a pure
/// function of its inputs, so one generator serves any number of
/// threads without locking.
#[derive(Debug, Clone)]
pub struct FileUrlGenerator {
    registry: WrapperRegistry,
}

impl FileUrlGenerator {
    pub fn new(registry: WrapperRegistry) -> Self {
        Self { registry }
    }

    #[inline]
    pub fn registry(&self) -> &WrapperRegistry {
        &self.registry
    }

    /// URL in its default rendering: root-relative when local to the
    /// base, absolute when external.
    pub fn generate_string(
        &self,
        base: &BaseUrl,
        uri: &str,
    ) -> Result<String, InvalidStreamWrapper> {
        self.generate(base, uri).map(GeneratedUrl::into_relative)
    }

    /// URL forced absolute: local results gain the base origin.
    pub fn generate_absolute_string(
        &self,
        base: &BaseUrl,
        uri: &str,
    ) -> Result<String, InvalidStreamWrapper> {
        self.generate(base, uri).map(GeneratedUrl::into_absolute)
    }

    /// Structured descriptor exposing both renderings.
    pub fn generate(
        &self,
        base: &BaseUrl,
        uri: &str,
    ) -> Result<GeneratedUrl, InvalidStreamWrapper> {
        match FileUri::parse(uri) {
            FileUri::Wrapped { scheme, target } => self.resolve_wrapped(base, uri, scheme, target),
            FileUri::ProtocolRelative(url) | FileUri::External(url) => {
                Ok(GeneratedUrl::external(url.to_string()))
            }
            FileUri::Shipped(path) => Ok(resolve_shipped(base, path)),
        }
    }

    /// Relativize a previously generated URL. See [`transform_relative`].
    pub fn transform_relative(&self, base: &BaseUrl, url: &str, root_relative: bool) -> String {
        transform_relative(base, url, root_relative)
    }

    fn resolve_wrapped(
        &self,
        base: &BaseUrl,
        uri: &str,
        scheme: &str,
        target: &str,
    ) -> Result<GeneratedUrl, InvalidStreamWrapper> {
        // http/https/data URIs are already reachable URLs, not storage
        // references; they never touch the registry
        if scheme.eq_ignore_ascii_case("http")
            || scheme.eq_ignore_ascii_case("https")
            || scheme.eq_ignore_ascii_case("data")
        {
            return Ok(GeneratedUrl::external(uri.to_string()));
        }
        match self.registry.lookup(scheme) {
            Some(wrapper) => Ok(localize(base, wrapper.external_url(target))),
            None => Err(InvalidStreamWrapper {
                scheme: scheme.to_string(),
            }),
        }
    }
}

/// Normalize a wrapper's URL against the base.
///
/// Absolute URLs on the base authority become root-relative local
/// results; foreign ones stay external. Host-relative results are local
/// already and only need rooting.
fn localize(base: &BaseUrl, external: String) -> GeneratedUrl {
    match Url::parse(&external) {
        Ok(parsed) if relative::is_local_url(base, &parsed) => {
            GeneratedUrl::local(relative::relative_form(&parsed, base, true), base)
        }
        Ok(_) => GeneratedUrl::external(external),
        Err(_) if external.starts_with("//") => GeneratedUrl::external(external),
        Err(_) if external.starts_with('/') => GeneratedUrl::local(external, base),
        Err(_) => GeneratedUrl::local(format!("/{external}"), base),
    }
}

fn resolve_shipped(base: &BaseUrl, path: &str) -> GeneratedUrl {
    // rooted paths are served as-is; bare paths mount under the base path
    if path.starts_with('/') {
        GeneratedUrl::local(path.to_string(), base)
    } else {
        GeneratedUrl::local(base.join_base(path), base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wrapper::{CdnWrapper, LocalFilesWrapper, StreamWrapper};

    /// Wrapper producing absolute URLs on its own fixed origin.
    struct AbsoluteWrapper(&'static str);

    impl StreamWrapper for AbsoluteWrapper {
        fn external_url(&self, target: &str) -> String {
            format!("{}/{target}", self.0)
        }
    }

    fn base() -> BaseUrl {
        BaseUrl::new("https", "example.com")
    }

    fn generator() -> FileUrlGenerator {
        let mut registry = WrapperRegistry::new();
        registry.register("public", LocalFilesWrapper::new("/sites/default/files"));
        registry.register("assets", CdnWrapper::new("https://cdn.example.com/media"));
        registry.register("mirror", AbsoluteWrapper("https://example.com/mirror"));
        FileUrlGenerator::new(registry)
    }

    #[test]
    fn test_wrapped_local() {
        let url = generator().generate(&base(), "public://cat.jpg").unwrap();
        assert!(url.is_local());
        assert_eq!(url.relative(), "/sites/default/files/cat.jpg");
        assert_eq!(
            url.absolute(),
            "https://example.com/sites/default/files/cat.jpg"
        );
    }

    #[test]
    fn test_wrapped_scheme_case_insensitive() {
        let url = generator()
            .generate_string(&base(), "PUBLIC://cat.jpg")
            .unwrap();
        assert_eq!(url, "/sites/default/files/cat.jpg");
    }

    #[test]
    fn test_wrapped_cdn_stays_external() {
        let url = generator().generate(&base(), "assets://logo.svg").unwrap();
        assert!(!url.is_local());
        assert_eq!(url.relative(), "https://cdn.example.com/media/logo.svg");
        assert_eq!(url.absolute(), url.relative());
    }

    #[test]
    fn test_wrapped_absolute_on_base_host_localizes() {
        let url = generator().generate(&base(), "mirror://x.png").unwrap();
        assert!(url.is_local());
        assert_eq!(url.relative(), "/mirror/x.png");
        assert_eq!(url.absolute(), "https://example.com/mirror/x.png");
    }

    #[test]
    fn test_unregistered_scheme_fails() {
        let err = generator()
            .generate_string(&base(), "foo://bar.txt")
            .unwrap_err();
        assert_eq!(err.scheme, "foo");
        assert_eq!(
            err.to_string(),
            "no stream wrapper registered for scheme `foo`"
        );
    }

    #[test]
    fn test_empty_registry_still_serves_shipped() {
        let generator = FileUrlGenerator::new(WrapperRegistry::new());
        assert_eq!(
            generator.generate_string(&base(), "misc/logo.png").unwrap(),
            "/misc/logo.png"
        );
    }

    #[test]
    fn test_http_uris_pass_through() {
        let generator = generator();
        for uri in [
            "http://other.org/x.png",
            "https://other.org/x.png",
            "data://text/plain;base64,aGk=",
        ] {
            let url = generator.generate(&base(), uri).unwrap();
            assert!(!url.is_local());
            assert_eq!(url.relative(), uri);
        }
    }

    #[test]
    fn test_opaque_references_pass_through() {
        let generator = generator();
        for uri in [
            "mailto:user@example.com",
            "tel:+15551234567",
            "data:image/png;base64,iVBOR",
        ] {
            assert_eq!(generator.generate_string(&base(), uri).unwrap(), uri);
        }
    }

    #[test]
    fn test_protocol_relative_passes_through() {
        let url = generator()
            .generate(&base(), "//cdn.example.com/x.png")
            .unwrap();
        assert!(!url.is_local());
        assert_eq!(url.relative(), "//cdn.example.com/x.png");
        assert_eq!(url.absolute(), "//cdn.example.com/x.png");
    }

    #[test]
    fn test_shipped_mounts_under_base_path() {
        let generator = generator();
        assert_eq!(
            generator
                .generate_string(&base(), "modules/mymod/icon.png")
                .unwrap(),
            "/modules/mymod/icon.png"
        );

        let mounted = BaseUrl::new("https", "example.com").with_base_path("/app");
        assert_eq!(
            generator
                .generate_string(&mounted, "modules/mymod/icon.png")
                .unwrap(),
            "/app/modules/mymod/icon.png"
        );
    }

    #[test]
    fn test_shipped_content_unchanged() {
        // no encoding, no splitting; the path is the caller's business
        assert_eq!(
            generator()
                .generate_string(&base(), "misc/logo v2.png?x=1")
                .unwrap(),
            "/misc/logo v2.png?x=1"
        );
    }

    #[test]
    fn test_shipped_rooted_path_served_as_is() {
        let mounted = BaseUrl::new("https", "example.com").with_base_path("/app");
        let url = generator().generate(&mounted, "/misc/logo.svg").unwrap();
        assert_eq!(url.relative(), "/misc/logo.svg");
        assert_eq!(url.absolute(), "https://example.com/misc/logo.svg");
    }

    #[test]
    fn test_absolute_string_is_absolute_for_registered_schemes() {
        let generator = generator();
        for uri in ["public://cat.jpg", "assets://logo.svg", "mirror://x.png"] {
            let absolute = generator.generate_absolute_string(&base(), uri).unwrap();
            assert!(
                absolute.starts_with("https://"),
                "{uri} resolved to {absolute}"
            );
        }
    }

    #[test]
    fn test_round_trip_law() {
        let generator = generator();
        let base = base();
        for uri in [
            "public://cat.jpg",
            "public://2024/cat photo.jpg",
            "mirror://x.png",
        ] {
            let absolute = generator.generate_absolute_string(&base, uri).unwrap();
            let relative = generator.generate_string(&base, uri).unwrap();
            assert_eq!(
                generator.transform_relative(&base, &absolute, true),
                relative
            );
        }
    }

    #[test]
    fn test_round_trip_law_with_ported_base() {
        let base = BaseUrl::new("http", "localhost").with_port(8080);
        let generator = generator();
        let absolute = generator
            .generate_absolute_string(&base, "public://cat.jpg")
            .unwrap();
        assert_eq!(
            absolute,
            "http://localhost:8080/sites/default/files/cat.jpg"
        );
        assert_eq!(
            generator.transform_relative(&base, &absolute, true),
            generator.generate_string(&base, "public://cat.jpg").unwrap()
        );
    }

    #[test]
    fn test_target_percent_encoded_by_local_wrapper() {
        assert_eq!(
            generator()
                .generate_string(&base(), "public://my cat.jpg")
                .unwrap(),
            "/sites/default/files/my%20cat.jpg"
        );
    }
}
