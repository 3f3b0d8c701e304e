//! Match patterns used to locate email addresses in text

use crate::error::Result;
use regex::Regex;
use std::borrow::Cow;
use std::fmt;

/// Built-in RFC 5322 approximation.
///
/// Accepts a dotted-atom or quoted local part, followed by a domain made of
/// dot-separated labels or a bracketed IPv4 / general address literal.
/// Matching is ASCII case-insensitive.
pub const DEFAULT_PATTERN: &str = r##"(?i-u)(?:[a-z0-9!#$%&'*+?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+?^_`{|}~-]+)*|"(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21\x23-\x5b\x5d-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])*")@(?:(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?|\[(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?|[a-z0-9-]*[a-z0-9]:(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21-\x5a\x53-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])+)\])"##;

static DEFAULT_REGEX: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(DEFAULT_PATTERN).expect("built-in email pattern compiles")
});

/// The pattern an extractor matches email addresses with
#[derive(Debug, Clone, Default)]
pub enum MatchPattern {
    /// The built-in [`DEFAULT_PATTERN`]
    #[default]
    Builtin,

    /// A caller-supplied pattern, compiled when first used
    Source(String),

    /// A caller-supplied, already compiled pattern
    Compiled(Regex),
}

impl MatchPattern {
    /// Resolve to a compiled regex.
    ///
    /// Custom sources are compiled here, so a malformed pattern surfaces as
    /// [`crate::ExtractError::InvalidPattern`] on first use.
    pub fn compile(&self) -> Result<Cow<'_, Regex>> {
        match self {
            Self::Builtin => Ok(Cow::Borrowed(&*DEFAULT_REGEX)),
            Self::Compiled(regex) => Ok(Cow::Borrowed(regex)),
            Self::Source(source) => Ok(Cow::Owned(Regex::new(source)?)),
        }
    }

    /// The textual form of the pattern
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Builtin => DEFAULT_PATTERN,
            Self::Source(source) => source,
            Self::Compiled(regex) => regex.as_str(),
        }
    }

    /// Whether this is the built-in pattern
    #[must_use]
    pub const fn is_builtin(&self) -> bool {
        matches!(self, Self::Builtin)
    }
}

impl From<Regex> for MatchPattern {
    fn from(regex: Regex) -> Self {
        Self::Compiled(regex)
    }
}

impl From<&str> for MatchPattern {
    fn from(source: &str) -> Self {
        Self::Source(source.to_string())
    }
}

impl From<String> for MatchPattern {
    fn from(source: String) -> Self {
        Self::Source(source)
    }
}

impl fmt::Display for MatchPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Collect every non-overlapping match of `regex` in `text`, left to right
pub fn find_all(regex: &Regex, text: &str) -> Vec<String> {
    regex
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
