//! Package identifiers
//!
//! A package name is used both as a path segment under the cache root and
//! as part of the AUR clone URL, so it is validated once when arguments are
//! resolved and carried around as a [`PackageName`] afterwards.

use crate::error::{CaurError, CaurResult};
use std::fmt;
use std::str::FromStr;

/// A validated AUR package name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageName(String);

impl PackageName {
    /// Validate a raw identifier
    ///
    /// Accepts ASCII letters, digits and `@ . _ + -`. The name must not be
    /// empty and must not start with `-` or `.`.
    pub fn parse(raw: &str) -> CaurResult<Self> {
        let valid_char =
            |c: char| c.is_ascii_alphanumeric() || matches!(c, '@' | '.' | '_' | '+' | '-');

        let valid = !raw.is_empty()
            && !raw.starts_with('-')
            && !raw.starts_with('.')
            && raw.chars().all(valid_char);

        if valid {
            Ok(Self(raw.to_string()))
        } else {
            Err(CaurError::InvalidPackageName(raw.to_string()))
        }
    }

    /// Parse a list of identifiers, failing on the first invalid one
    pub fn parse_all<S: AsRef<str>>(raw: &[S]) -> CaurResult<Vec<Self>> {
        raw.iter().map(|s| Self::parse(s.as_ref())).collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PackageName {
    type Err = CaurError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
