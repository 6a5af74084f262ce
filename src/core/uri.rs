//! File URI classification.
//!
//! - `Wrapped`: `<scheme>://<target>` with a syntactically valid scheme
//! - `ProtocolRelative`: `//host/...`, expanded by the browser
//! - `External`: opaque reference (`mailto:`, `tel:`, `data:`)
//! - `Shipped`: literal path to an asset bundled with the platform

/// Syntactic classification of file URIs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileUri<'a> {
    /// Stream-qualified URI (public://cat.jpg). Scheme excludes `://`.
    Wrapped { scheme: &'a str, target: &'a str },
    /// Protocol-relative URL (//cdn.example.com/logo.png).
    ProtocolRelative(&'a str),
    /// Opaque scheme reference without `//` (mailto:user@host, data:image/png;...).
    External(&'a str),
    /// Path to a shipped asset (modules/icon.png, /misc/logo.svg).
    Shipped(&'a str),
}

impl<'a> FileUri<'a> {
    /// Parse a URI string into its syntactic kind.
    #[inline]
    pub fn parse(uri: &'a str) -> Self {
        if let Some((scheme, target)) = split_scheme(uri) {
            Self::Wrapped { scheme, target }
        } else if uri.starts_with("//") {
            Self::ProtocolRelative(uri)
        } else if is_opaque_reference(uri) {
            Self::External(uri)
        } else {
            Self::Shipped(uri)
        }
    }

    /// Scheme name when the URI is stream-qualified.
    #[inline]
    pub fn scheme(&self) -> Option<&'a str> {
        match self {
            Self::Wrapped { scheme, .. } => Some(scheme),
            _ => None,
        }
    }
}

/// Split `<scheme>://<target>`, validating the scheme shape.
///
/// The full `://` separator is required, so Windows drive letters
/// (`C:/x`, `C:\x`) and opaque references (`mailto:x`) never match.
pub fn split_scheme(uri: &str) -> Option<(&str, &str)> {
    let (scheme, target) = uri.split_once("://")?;
    is_valid_scheme(scheme).then_some((scheme, target))
}

/// Scheme names: ALPHA followed by ALPHA / DIGIT / `+` / `-` / `.`.
pub fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Opaque reference: scheme-shaped prefix before a single `:` (mailto:,
/// tel:, data:, and by extension drive-letter paths like `C:\x`).
fn is_opaque_reference(uri: &str) -> bool {
    uri.find(':')
        .is_some_and(|pos| pos > 0 && is_valid_scheme(&uri[..pos]))
}
