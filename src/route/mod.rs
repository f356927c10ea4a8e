//! Canonical paths and legacy redirects.
//!
//! Maps a content record to the single authoritative output path plus the
//! legacy paths that must forward to it.
//!
//! ```text
//! ContentRecord                   Path Space
//! =============                  ===========
//! slug: "chesterfield-va"   ->   chesterfield-va
//! slug: (none)              ->   en/VA/Chesterfield/7204 Hancock Village Drive-42
//! id: "42"                  ->   index-old/42   (redirect)
//! ```
//!
//! # Module Structure
//!
//! - [`resolve`]: path and redirect resolution from one record
//! - [`conflict`]: batch uniqueness validation (multiple records -> same path)
//!
//! Paths are stored verbatim: segments built from address fields are not
//! slugified or escaped, the upstream feed is trusted. The compensating
//! control is [`conflict`] - colliding paths fail the build instead of
//! silently overwriting output.

pub mod conflict;
mod resolve;

pub use conflict::{PathClaimMap, PathCollision, collect_path_claims, detect_collisions};
pub use resolve::{RouteError, resolve_path, resolve_redirects};

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::sync::Arc;

/// Relative output path for a generated page.
///
/// Invariants:
/// - Stored verbatim, exactly as resolved (decoded, human-readable)
/// - No leading slash, no extension
/// - Percent-encoding happens only at the browser boundary via
///   [`PagePath::to_encoded`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PagePath(Arc<str>);

impl PagePath {
    /// Wrap a resolved path. The value is kept verbatim.
    pub fn new(path: impl AsRef<str>) -> Self {
        Self(Arc::from(path.as_ref()))
    }

    /// Get the decoded path as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Encode for browser (percent-encode non-ASCII and special characters).
    ///
    /// Unreserved characters (alphanumeric, `-`, `_`, `.`, `~`) pass through
    /// so slugs keep their readable form.
    pub fn to_encoded(&self) -> String {
        use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

        // Everything a URL path segment cannot carry raw
        const SEGMENT: &AsciiSet = &CONTROLS
            .add(b' ')
            .add(b'"')
            .add(b'#')
            .add(b'%')
            .add(b'<')
            .add(b'>')
            .add(b'?')
            .add(b'`')
            .add(b'{')
            .add(b'}');

        self.0
            .split('/')
            .map(|segment| utf8_percent_encode(segment, SEGMENT).to_string())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Full URL under the given site base (`https://example.com`).
    pub fn full_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.to_encoded())
    }
}

impl std::fmt::Display for PagePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PagePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PagePath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PagePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PagePath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl PartialEq<str> for PagePath {
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other
    }
}

impl PartialEq<&str> for PagePath {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

impl Serialize for PagePath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PagePath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::new(s))
    }
}
