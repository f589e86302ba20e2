// src/links/scope.rs
// =============================================================================
// This module decides which links the crawler is allowed to follow.
//
// A crawl of https://waterservices.usgs.gov/docs/ should visit
// https://waterservices.usgs.gov/docs/site/ but not
// https://waterservices.usgs.gov/rest/ and certainly not https://other.org/.
// So the scope of a crawl is:
// - the origin (scheme + host + port) of the base URL, and
// - the base URL's path, used as a prefix.
//
// Resolution uses Url::join, the same algorithm a browser uses for relative
// links ("../x", "/x", "x", "//host/x" all work).
// =============================================================================

use url::{Origin, Url};

use crate::error::InvalidUrlError;
use crate::validate::{forbidden_char, ValidUrl};

/// Why a discovered link was dropped.
///
/// Rejections are reported to observers and logged; they never fail a crawl.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinkRejection {
    /// Empty, or couldn't be joined onto the page URL
    #[error("link could not be resolved")]
    Unresolvable,

    /// Points at an anchor; anchors within a page are not distinct pages
    #[error("link carries a fragment")]
    Fragment,

    /// Resolves to another site, another scheme or outside the base path
    #[error("link is outside the crawl scope")]
    OutOfScope,

    /// Resolved, but failed URL validation
    #[error("link failed validation: {0}")]
    Invalid(#[from] InvalidUrlError),
}

/// The same-site boundary of one crawl.
#[derive(Debug, Clone)]
pub struct LinkScope {
    origin: Origin,
    path_prefix: String,
}

impl LinkScope {
    /// Builds the scope from a crawl's base URL
    pub fn new(base: &ValidUrl) -> Self {
        // A base with a query ("/docs?v=1/") gets its slash after the query,
        // so the path itself may still lack one
        let mut path_prefix = base.url().path().to_string();
        if !path_prefix.ends_with('/') {
            path_prefix.push('/');
        }

        Self {
            origin: base.url().origin(),
            path_prefix,
        }
    }

    /// True if `url` is on the base origin and under the base path
    pub fn contains(&self, url: &Url) -> bool {
        if url.origin() != self.origin {
            return false;
        }

        // The validator will add a trailing slash, so "/docs" counts as "/docs/"
        let mut path = url.path().to_string();
        if !path.ends_with('/') {
            path.push('/');
        }
        path.starts_with(&self.path_prefix)
    }

    /// Resolves `href`, found on `page`, to an absolute in-scope URL string.
    ///
    /// The result still has to go through `validate_url` before it is
    /// enqueued.
    pub fn resolve(&self, page: &Url, href: &str) -> Result<String, LinkRejection> {
        let href = href.trim();
        if href.is_empty() {
            return Err(LinkRejection::Unresolvable);
        }

        if href.contains('#') {
            return Err(LinkRejection::Fragment);
        }

        // Checked on the raw text: Url serialization would percent-encode
        // some of these characters and hide them from the validator.
        if let Some(ch) = forbidden_char(href) {
            return Err(LinkRejection::Invalid(InvalidUrlError::ForbiddenCharacter {
                url: href.to_string(),
                ch,
            }));
        }

        let joined = page.join(href).map_err(|_| LinkRejection::Unresolvable)?;

        if !self.contains(&joined) {
            return Err(LinkRejection::OutOfScope);
        }

        Ok(joined.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate_url;

    fn scope_and_page(base: &str) -> (LinkScope, Url) {
        let base = validate_url(Some(base)).unwrap();
        (LinkScope::new(&base), base.url().clone())
    }

    #[test]
    fn test_root_relative_link() {
        let (scope, page) = scope_and_page("https://waterservices.usgs.gov/docs/");
        assert_eq!(
            scope.resolve(&page, "/docs/site/"),
            Ok("https://waterservices.usgs.gov/docs/site/".to_string())
        );
    }

    #[test]
    fn test_path_relative_link() {
        let (scope, page) = scope_and_page("https://waterservices.usgs.gov/docs/");
        assert_eq!(
            scope.resolve(&page, "dv/"),
            Ok("https://waterservices.usgs.gov/docs/dv/".to_string())
        );
    }

    #[test]
    fn test_absolute_same_site_link() {
        let (scope, page) = scope_and_page("https://waterservices.usgs.gov/docs/");
        assert_eq!(
            scope.resolve(&page, "https://waterservices.usgs.gov/docs/iv/"),
            Ok("https://waterservices.usgs.gov/docs/iv/".to_string())
        );
    }

    #[test]
    fn test_link_without_trailing_slash_is_in_scope() {
        let (scope, page) = scope_and_page("https://waterservices.usgs.gov/docs/site/");
        assert_eq!(
            scope.resolve(&page, "/docs"),
            Err(LinkRejection::OutOfScope)
        );
        assert_eq!(
            scope.resolve(&page, "/docs/site"),
            Ok("https://waterservices.usgs.gov/docs/site".to_string())
        );
    }

    #[test]
    fn test_base_with_query_scopes_on_whole_path_segment() {
        let (scope, page) = scope_and_page("https://docs.example.com/docs?v=1");
        assert_eq!(
            scope.resolve(&page, "/docsecret/"),
            Err(LinkRejection::OutOfScope)
        );
        assert_eq!(
            scope.resolve(&page, "/docs/site/"),
            Ok("https://docs.example.com/docs/site/".to_string())
        );
    }

    #[test]
    fn test_cross_site_link_is_out_of_scope() {
        let (scope, page) = scope_and_page("https://waterservices.usgs.gov/docs/");
        assert_eq!(
            scope.resolve(&page, "https://www.usgs.gov/docs/"),
            Err(LinkRejection::OutOfScope)
        );
    }

    #[test]
    fn test_sibling_path_is_out_of_scope() {
        let (scope, page) = scope_and_page("https://waterservices.usgs.gov/docs/");
        assert_eq!(
            scope.resolve(&page, "/rest/"),
            Err(LinkRejection::OutOfScope)
        );
        assert_eq!(
            scope.resolve(&page, "../rest/"),
            Err(LinkRejection::OutOfScope)
        );
    }

    #[test]
    fn test_other_schemes_are_out_of_scope() {
        let (scope, page) = scope_and_page("https://waterservices.usgs.gov/docs/");
        assert_eq!(
            scope.resolve(&page, "mailto:gs-w_waterdata_support@usgs.gov"),
            Err(LinkRejection::OutOfScope)
        );
        assert_eq!(
            scope.resolve(&page, "http://waterservices.usgs.gov/docs/dv/"),
            Err(LinkRejection::OutOfScope)
        );
    }

    #[test]
    fn test_fragment_links_are_rejected() {
        let (scope, page) = scope_and_page("https://waterservices.usgs.gov/docs/");
        assert_eq!(scope.resolve(&page, "#section2"), Err(LinkRejection::Fragment));
        assert_eq!(
            scope.resolve(&page, "/docs/site/#formats"),
            Err(LinkRejection::Fragment)
        );
    }

    #[test]
    fn test_forbidden_characters_are_rejected_before_encoding() {
        let (scope, page) = scope_and_page("https://waterservices.usgs.gov/docs/");
        let rejection = scope.resolve(&page, "/docs/<script>/").unwrap_err();
        assert!(matches!(
            rejection,
            LinkRejection::Invalid(InvalidUrlError::ForbiddenCharacter { ch: '<', .. })
        ));
    }

    #[test]
    fn test_empty_href_is_unresolvable() {
        let (scope, page) = scope_and_page("https://waterservices.usgs.gov/docs/");
        assert_eq!(scope.resolve(&page, "   "), Err(LinkRejection::Unresolvable));
    }
}
