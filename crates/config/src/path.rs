//! Dot-delimited key paths.
//!
//! Responsibilities:
//! - Parse keys such as `"database.connections.primary"` into segments.
//! - Classify segments that can address an element of a sequence.
//!
//! Does NOT handle:
//! - Walking or mutating the tree (see `store.rs`).
//!
//! Invariants:
//! - A parsed path has at least one segment and no segment is empty.
//! - An index segment is all ASCII digits with no leading zero (`"0"` itself
//!   is allowed). It indexes a sequence only where one already exists.

use std::fmt;
use std::str::FromStr;

use crate::constants::PATH_SEPARATOR;
use crate::error::ConfigError;

/// A validated dot-delimited key path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Parse a dot-delimited key.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidKey` if the key is empty or contains an
    /// empty segment (`"a..b"`, `".a"`, `"a."`).
    pub fn parse(key: &str) -> Result<Self, ConfigError> {
        if key.is_empty() {
            return Err(ConfigError::invalid_key(key, "key is empty"));
        }

        let segments: Vec<String> = key.split(PATH_SEPARATOR).map(str::to_string).collect();
        if let Some(position) = segments.iter().position(String::is_empty) {
            return Err(ConfigError::invalid_key(
                key,
                format!("segment {} is empty", position + 1),
            ));
        }

        Ok(Self { segments })
    }

    /// All segments in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The first segment, which always addresses the root mapping.
    pub fn head(&self) -> &str {
        &self.segments[0]
    }

    /// Every segment after the first.
    pub fn tail(&self) -> &[String] {
        &self.segments[1..]
    }

    /// Number of segments.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}

impl FromStr for KeyPath {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{PATH_SEPARATOR}")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

/// Interpret a segment as a sequence index.
pub fn as_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if segment.len() > 1 && segment.starts_with('0') {
        return None;
    }
    segment.parse().ok()
}

/// Join a parent key and a child segment, treating an empty parent as the root.
pub(crate) fn join(parent: &str, child: &str) -> String {
    if parent.is_empty() {
        child.to_string()
    } else {
        format!("{parent}{PATH_SEPARATOR}{child}")
    }
}
