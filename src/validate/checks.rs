// src/validate/checks.rs
// =============================================================================
// This module decides whether a string is safe to crawl.
//
// A candidate URL is rejected when:
// 1. there is no candidate at all (None)
// 2. it doesn't start with "https://"
// 3. it contains a character often found in injected markup, shell or SQL
//    payloads: < > " ' ; ( ) & | `
// 4. it can't be parsed into an absolute URL with a host
//
// Anything that survives gets a trailing "/" if it lacks one, and is wrapped
// in a ValidUrl. The crawler only ever stores ValidUrl values, so the type
// system guarantees nothing unchecked reaches the frontier.
//
// Validation is pure: no network, no shared state.
// =============================================================================

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Serialize, Serializer};
use url::Url;

use crate::error::InvalidUrlError;

/// Characters that are never allowed anywhere in a crawlable URL
pub const FORBIDDEN_CHARS: [char; 10] = ['<', '>', '"', '\'', ';', '(', ')', '&', '|', '`'];

const REQUIRED_PREFIX: &str = "https://";

/// A URL that passed [`validate_url`].
///
/// Holds the `url` crate's serialization of the input, so equivalent
/// spellings of one address (host case, explicit `:443`) compare equal.
/// Always starts with `https://`, always ends with `/` and never contains a
/// character from [`FORBIDDEN_CHARS`]. Equality, hashing and ordering use the
/// string form, so two values are equal exactly when their text is.
#[derive(Debug, Clone)]
pub struct ValidUrl {
    raw: String,
    parsed: Url,
}

impl ValidUrl {
    /// The normalized URL text
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed form, for joining relative links against this page
    pub fn url(&self) -> &Url {
        &self.parsed
    }

    pub fn into_string(self) -> String {
        self.raw
    }
}

impl PartialEq for ValidUrl {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for ValidUrl {}

impl Hash for ValidUrl {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl PartialOrd for ValidUrl {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ValidUrl {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.raw.cmp(&other.raw)
    }
}

// Lets a HashSet<ValidUrl> be queried with a plain &str.
// Sound because Hash and Eq above both go through `raw`.
impl Borrow<str> for ValidUrl {
    fn borrow(&self) -> &str {
        &self.raw
    }
}

impl AsRef<str> for ValidUrl {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for ValidUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.raw)
    }
}

impl Serialize for ValidUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

/// Returns the first forbidden character in `text`, if any.
pub fn forbidden_char(text: &str) -> Option<char> {
    text.chars().find(|c| FORBIDDEN_CHARS.contains(c))
}

/// Validates and normalizes a candidate URL.
///
/// Checks run in order: missing, scheme, forbidden characters, then
/// parseability. A URL without a trailing `/` gets one appended.
///
/// ```
/// use docs_crawler::validate_url;
///
/// let url = validate_url(Some("https://waterservices.usgs.gov/docs")).unwrap();
/// assert_eq!(url.as_str(), "https://waterservices.usgs.gov/docs/");
/// ```
pub fn validate_url(candidate: Option<&str>) -> Result<ValidUrl, InvalidUrlError> {
    let candidate = candidate.ok_or(InvalidUrlError::Missing)?;

    if !candidate.starts_with(REQUIRED_PREFIX) {
        return Err(InvalidUrlError::NotHttps {
            url: candidate.to_string(),
        });
    }

    if let Some(ch) = forbidden_char(candidate) {
        return Err(InvalidUrlError::ForbiddenCharacter {
            url: candidate.to_string(),
            ch,
        });
    }

    let mut text = candidate.to_string();
    if !text.ends_with('/') {
        text.push('/');
    }

    let parsed = Url::parse(&text).map_err(|e| InvalidUrlError::Malformed {
        url: text.clone(),
        reason: e.to_string(),
    })?;

    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(InvalidUrlError::Malformed {
            url: text,
            reason: "URL has no host".to_string(),
        });
    }

    // Identity is the serialized form: lowercase host, no default port.
    // Links resolved with Url::join serialize the same way, so one page
    // always maps to one string.
    let raw = parsed.as_str().to_string();
    Ok(ValidUrl { raw, parsed })
}
