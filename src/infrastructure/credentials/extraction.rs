//! Text extraction for the key bootstrap pipeline.
//!
//! Two independent stages:
//! 1. [`locate_bundle_reference`] finds the Next.js `_app-<hash>.js` script
//!    in the website root document.
//! 2. [`BundleKeyPattern::locate`] finds the string literal assigned to the
//!    public API key constant inside that bundle.

use std::sync::LazyLock;

use regex::Regex;
use reqwest::Url;

use crate::domain::errors::CredentialError;

/// `<script ... src="/_next/static/chunks/pages/_app-<hash>.js">`
static BUNDLE_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<script\b[^>]*?\bsrc\s*=\s*["']([^"']*_app-[^"']*\.js)["']"#)
        .expect("bundle reference pattern is valid")
});

/// Return the `src` of the first application bundle script in `html`.
pub fn locate_bundle_reference(html: &str) -> Option<&str> {
    BUNDLE_REFERENCE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Resolve a bundle reference against the website origin.
///
/// Absolute and protocol-relative references are kept as-is by `Url::join`.
pub fn resolve_bundle_url(website: &Url, reference: &str) -> Result<Url, CredentialError> {
    website
        .join(reference)
        .map_err(|e| CredentialError::InvalidBundleUrl {
            reference: reference.to_string(),
            reason: e.to_string(),
        })
}

/// Matcher for `<CONSTANT>:"<key>"` assignments in minified JavaScript.
#[derive(Debug, Clone)]
pub struct BundleKeyPattern {
    regex: Regex,
}

impl BundleKeyPattern {
    /// Build a matcher for the given constant name.
    pub fn new(constant: &str) -> Result<Self, regex::Error> {
        let pattern = format!(
            r#"\b{}\s*:\s*(?:"([^"]+)"|'([^']+)')"#,
            regex::escape(constant)
        );
        Ok(Self {
            regex: Regex::new(&pattern)?,
        })
    }

    /// Return the first non-empty literal assigned to the constant.
    pub fn locate<'a>(&self, bundle: &'a str) -> Option<&'a str> {
        self.regex
            .captures(bundle)
            .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
            .map(|m| m.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOT_HTML: &str = r#"<!DOCTYPE html><html><head>
<script src="/_next/static/chunks/webpack-1a2b3c.js" defer=""></script>
<script src="/_next/static/chunks/framework-9f8e7d.js" defer=""></script>
<script src="/_next/static/chunks/pages/_app-0c4e1f2a9b.js" defer=""></script>
</head><body></body></html>"#;

    #[test]
    fn test_locate_bundle_reference() {
        assert_eq!(
            locate_bundle_reference(ROOT_HTML),
            Some("/_next/static/chunks/pages/_app-0c4e1f2a9b.js")
        );
    }

    #[test]
    fn test_locate_bundle_reference_with_attributes_before_src() {
        let html = r#"<script defer nomodule='' src='https://cdn.example.se/_app-77.js'></script>"#;
        assert_eq!(
            locate_bundle_reference(html),
            Some("https://cdn.example.se/_app-77.js")
        );
    }

    #[test]
    fn test_locate_bundle_reference_missing() {
        let html = r#"<script src="/_next/static/chunks/main-abc.js"></script>"#;
        assert_eq!(locate_bundle_reference(html), None);
        assert_eq!(locate_bundle_reference(""), None);
    }

    #[test]
    fn test_resolve_relative_and_absolute() {
        let site = Url::parse("https://www.systembolaget.se").unwrap();

        let url = resolve_bundle_url(&site, "/_next/static/chunks/pages/_app-1.js").unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.systembolaget.se/_next/static/chunks/pages/_app-1.js"
        );

        let url = resolve_bundle_url(&site, "https://cdn.example.se/_app-2.js").unwrap();
        assert_eq!(url.as_str(), "https://cdn.example.se/_app-2.js");

        let url = resolve_bundle_url(&site, "//cdn.example.se/_app-3.js").unwrap();
        assert_eq!(url.as_str(), "https://cdn.example.se/_app-3.js");
    }

    #[test]
    fn test_locate_key_double_quoted() {
        let pattern = BundleKeyPattern::new("NEXT_PUBLIC_API_KEY_APIM").unwrap();
        let bundle = r#"var e={NEXT_PUBLIC_ENV:"prod",NEXT_PUBLIC_API_KEY_APIM:"cfc702aed3094c86b92d6d4ff7a54c84",NEXT_PUBLIC_X:"y"}"#;
        assert_eq!(
            pattern.locate(bundle),
            Some("cfc702aed3094c86b92d6d4ff7a54c84")
        );
    }

    #[test]
    fn test_locate_key_single_quoted_with_spaces() {
        let pattern = BundleKeyPattern::new("NEXT_PUBLIC_API_KEY_APIM").unwrap();
        let bundle = "config = { NEXT_PUBLIC_API_KEY_APIM : 'abc123' }";
        assert_eq!(pattern.locate(bundle), Some("abc123"));
    }

    #[test]
    fn test_locate_key_ignores_longer_constant_names() {
        let pattern = BundleKeyPattern::new("API_KEY").unwrap();
        assert_eq!(pattern.locate(r#"{NEXT_PUBLIC_API_KEY:"nope"}"#), None);
        assert_eq!(pattern.locate(r#"{API_KEY:"yes"}"#), Some("yes"));
    }

    #[test]
    fn test_locate_key_missing() {
        let pattern = BundleKeyPattern::new("NEXT_PUBLIC_API_KEY_APIM").unwrap();
        assert_eq!(pattern.locate(r#"{NEXT_PUBLIC_OTHER:"x"}"#), None);
        assert_eq!(pattern.locate(r#"{NEXT_PUBLIC_API_KEY_APIM:""}"#), None);
    }

    #[test]
    fn test_constant_is_escaped() {
        let pattern = BundleKeyPattern::new("KEY.V2").unwrap();
        assert_eq!(pattern.locate(r#"{KEYXV2:"a"}"#), None);
        assert_eq!(pattern.locate(r#"{KEY.V2:"b"}"#), Some("b"));
    }
}
