//! Host-aware URL relativization.
//!
//! Turns absolute URLs that point at the base host back into relative
//! form, leaving everything else untouched. This is what keeps stored
//! `http://...` references from becoming mixed content on an https
//! site.

use url::Url;

use crate::core::BaseUrl;

/// Strip the scheme/host prefix from a URL local to the base.
///
/// Foreign-host, unparseable, and already-relative input comes back
/// unchanged; the operation never fails. With `root_relative` false the
/// base path is stripped too, yielding a base-path-relative form.
/// Idempotent: relative output no longer parses as absolute, so a
/// second pass returns it unchanged.
pub fn transform_relative(base: &BaseUrl, url: &str, root_relative: bool) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return url.to_string();
    };
    if !is_local_url(base, &parsed) {
        return url.to_string();
    }
    relative_form(&parsed, base, root_relative)
}

/// Whether a parsed URL points at the base authority.
///
/// Both http and https count as matching schemes regardless of which
/// one the base uses; a stored `http://host/x` on an https site must
/// still relativize. Ports compare after default-port normalization,
/// so an explicit base port must appear in the URL to match.
pub(crate) fn is_local_url(base: &BaseUrl, url: &Url) -> bool {
    if !matches!(url.scheme(), "http" | "https") {
        return false;
    }
    let Some(host) = url.host_str() else {
        return false;
    };
    host.eq_ignore_ascii_case(base.host()) && url.port() == base.port()
}

/// Reassemble path + query + fragment from parsed components.
///
/// Rebuilding from the parse avoids the textual-prefix pitfalls of
/// stripping with string surgery (explicitly written default ports,
/// userinfo, odd capitalization).
pub(crate) fn relative_form(parsed: &Url, base: &BaseUrl, root_relative: bool) -> String {
    let path = if root_relative {
        parsed.path()
    } else {
        strip_base_path(base.base_path(), parsed.path())
    };

    let mut relative = String::from(path);
    if let Some(query) = parsed.query() {
        relative.push('?');
        relative.push_str(query);
    }
    if let Some(fragment) = parsed.fragment() {
        relative.push('#');
        relative.push_str(fragment);
    }
    relative
}

/// Strip `base_path` only when it matches on a segment boundary, so a
/// `/app` base leaves `/application/x` alone.
fn strip_base_path<'a>(base_path: &str, path: &'a str) -> &'a str {
    if base_path.is_empty() {
        return path;
    }
    match path.strip_prefix(base_path) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => path,
    }
}
