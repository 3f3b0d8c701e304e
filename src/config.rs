//! Serializable extractor configuration

use crate::error::{ExtractError, Result};
use crate::pattern::MatchPattern;
use serde::{Deserialize, Serialize};

/// Construction settings for an [`crate::EmailExtractor`]
///
/// ```rust
/// use email_extractor::ExtractorConfig;
///
/// let config = ExtractorConfig::from_json(r#"{"filter": ["spam"]}"#).unwrap();
/// assert_eq!(config.filter, vec!["spam"]);
/// assert!(config.pattern.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Default words for `filter_exclude` / `filter_include`
    pub filter: Vec<String>,

    /// Custom match pattern; the built-in pattern is used when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl ExtractorConfig {
    /// Decode a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ExtractError::Config(e.to_string()))
    }

    /// Encode this configuration as JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| ExtractError::Serialize(e.to_string()))
    }

    pub(crate) fn match_pattern(&self) -> MatchPattern {
        self.pattern
            .as_ref()
            .map_or(MatchPattern::Builtin, |p| MatchPattern::Source(p.clone()))
    }
}
