//! Kit locator parsing and validation
//!
//! A locator names a remote kit in `owner/name` form. It is validated once,
//! before any network or filesystem work, and is immutable afterwards. The
//! character policy is deliberately strict: the locator ends up in a clone
//! URL and in the staging directory name, so nothing outside
//! `[A-Za-z0-9_.-]` is allowed in either segment.

use std::fmt;
use std::str::FromStr;

use crate::error::AgentkitError;

/// Environment variable overriding the clone URL base. Tests point this at a
/// `file://` directory of fixture repositories.
pub const BASE_URL_ENV: &str = "AGENTKIT_BASE_URL";

const DEFAULT_BASE_URL: &str = "https://github.com";

/// A validated `owner/name` kit source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KitLocator {
    owner: String,
    name: String,
}

impl KitLocator {
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Clone URL for the kit repository.
    pub fn url(&self) -> String {
        let base =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        format!("{}/{}/{}", base.trim_end_matches('/'), self.owner, self.name)
    }

    /// Filesystem-safe token used in staging directory names. The validated
    /// charset contains no path separators, so joining with '-' is enough.
    pub fn slug(&self) -> String {
        format!("{}-{}", self.owner, self.name)
    }
}

impl fmt::Display for KitLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for KitLocator {
    type Err = AgentkitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AgentkitError::InvalidLocator {
            locator: s.to_string(),
        };

        let (owner, name) = s.split_once('/').ok_or_else(invalid)?;
        if name.contains('/') {
            return Err(invalid());
        }
        if !segment_is_safe(owner) || !segment_is_safe(name) {
            return Err(invalid());
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

/// Non-empty, `[A-Za-z0-9_.-]` only, and not a dot-only traversal segment.
fn segment_is_safe(segment: &str) -> bool {
    if segment.is_empty() || segment == "." || segment == ".." {
        return false;
    }
    segment
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
}
