//! The chainable extraction pipeline

use crate::config::ExtractorConfig;
use crate::error::{ExtractError, Result};
use crate::message::message_texts;
use crate::pattern::{MatchPattern, find_all};
use crate::report::ExtractionReport;
use std::collections::HashSet;
use tracing::{debug, trace};

/// Lifecycle of the result collection
#[derive(Debug, Clone, Default)]
enum Results {
    #[default]
    Uninitialized,
    Populated(Vec<String>),
}

/// How a filter word list decides which emails survive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FilterMode {
    /// Drop emails containing any word; keep everything else
    Exclude,
    /// Keep emails containing any word; drop everything else
    Include,
}

impl FilterMode {
    fn keeps(self, email: &str, words: &[&str]) -> bool {
        let matched = words.iter().any(|word| email.contains(*word));
        match self {
            Self::Exclude => !matched,
            Self::Include => matched,
        }
    }
}

/// Extracts email addresses from text and post-processes them.
///
/// An extractor ingests its source text exactly once, through [`extract`],
/// [`extract_all`] or [`extract_message`]. Every other operation works on
/// the extracted list and fails with [`ExtractError::NotExtracted`] before
/// that. All operations except [`export`] return the extractor for chaining.
///
/// [`extract`]: Self::extract
/// [`extract_all`]: Self::extract_all
/// [`extract_message`]: Self::extract_message
/// [`export`]: Self::export
#[derive(Debug, Clone, Default)]
pub struct EmailExtractor {
    filter: Vec<String>,
    pattern: MatchPattern,
    results: Results,
    sources: usize,
}

impl EmailExtractor {
    /// Extractor with the built-in pattern and no default filter words
    #[must_use]
    pub const fn new() -> Self {
        Self {
            filter: Vec::new(),
            pattern: MatchPattern::Builtin,
            results: Results::Uninitialized,
            sources: 0,
        }
    }

    /// Build an extractor from decoded configuration
    #[must_use]
    pub fn from_config(config: &ExtractorConfig) -> Self {
        Self::new()
            .with_filter(config.filter.iter().cloned())
            .with_pattern(config.match_pattern())
    }

    /// Set the default words used when a filter is called without its own list
    #[must_use]
    pub fn with_filter<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter = words.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the built-in match pattern.
    ///
    /// Pattern sources are not compiled until the first extraction.
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<MatchPattern>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Default filter words
    #[must_use]
    pub fn filter(&self) -> &[String] {
        &self.filter
    }

    /// The configured match pattern
    #[must_use]
    pub const fn pattern(&self) -> &MatchPattern {
        &self.pattern
    }

    /// Whether an extraction has populated the result list
    #[must_use]
    pub const fn is_extracted(&self) -> bool {
        matches!(self.results, Results::Populated(_))
    }

    /// Extract every match from a single text, in order of appearance
    pub fn extract(&mut self, content: &str) -> Result<&mut Self> {
        self.extract_all([content])
    }

    /// Extract matches from each text in turn into one combined list
    pub fn extract_all<I, S>(&mut self, contents: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.ensure_uninitialized()?;

        let (emails, sources) = {
            let regex = self.pattern.compile()?;
            let mut emails = Vec::new();
            let mut sources = 0;
            for content in contents {
                emails.extend(find_all(&regex, content.as_ref()));
                sources += 1;
            }
            (emails, sources)
        };

        debug!("Extracted {} emails from {sources} texts", emails.len());

        self.results = Results::Populated(emails);
        self.sources = sources;
        Ok(self)
    }

    /// Extract from the address headers and text parts of a raw MIME message
    pub fn extract_message(&mut self, raw: &[u8]) -> Result<&mut Self> {
        self.ensure_uninitialized()?;
        let texts = message_texts(raw)?;
        self.extract_all(texts)
    }

    /// Drop repeated entries, keeping the first occurrence of each
    pub fn unique(&mut self) -> Result<&mut Self> {
        let emails = self.emails_mut()?;
        let before = emails.len();

        let mut seen = HashSet::new();
        emails.retain(|email| seen.insert(email.clone()));

        trace!("unique: {before} -> {}", emails.len());
        Ok(self)
    }

    /// Lowercase every entry, Unicode-aware
    pub fn lowercase(&mut self) -> Result<&mut Self> {
        for email in self.emails_mut()? {
            *email = email.to_lowercase();
        }
        trace!("lowercase applied");
        Ok(self)
    }

    /// Uppercase every entry, Unicode-aware
    pub fn uppercase(&mut self) -> Result<&mut Self> {
        for email in self.emails_mut()? {
            *email = email.to_uppercase();
        }
        trace!("uppercase applied");
        Ok(self)
    }

    /// Drop every email containing one of the filter words.
    ///
    /// Falls back to the configured default words when `filter` is `None`.
    /// An empty word list keeps everything.
    pub fn filter_exclude(&mut self, filter: Option<&[&str]>) -> Result<&mut Self> {
        self.apply_filter(FilterMode::Exclude, filter)
    }

    /// Keep only emails containing one of the filter words.
    ///
    /// Falls back to the configured default words when `filter` is `None`.
    /// An empty word list drops everything.
    pub fn filter_include(&mut self, filter: Option<&[&str]>) -> Result<&mut Self> {
        self.apply_filter(FilterMode::Include, filter)
    }

    /// Sort entries in ascending ordinal order
    pub fn sort_asc(&mut self) -> Result<&mut Self> {
        self.emails_mut()?.sort_unstable();
        Ok(self)
    }

    /// Sort entries in descending ordinal order
    pub fn sort_desc(&mut self) -> Result<&mut Self> {
        self.emails_mut()?.sort_unstable_by(|a, b| b.cmp(a));
        Ok(self)
    }

    /// Borrow the current list without copying it
    pub fn emails(&self) -> Result<&[String]> {
        match &self.results {
            Results::Populated(emails) => Ok(emails),
            Results::Uninitialized => Err(ExtractError::NotExtracted),
        }
    }

    /// Copy out the current list
    pub fn export(&self) -> Result<Vec<String>> {
        self.emails().map(<[String]>::to_vec)
    }

    /// Consume the extractor, returning its list
    pub fn into_emails(self) -> Result<Vec<String>> {
        match self.results {
            Results::Populated(emails) => Ok(emails),
            Results::Uninitialized => Err(ExtractError::NotExtracted),
        }
    }

    /// Snapshot the current list together with summary counts
    pub fn report(&self) -> Result<ExtractionReport> {
        Ok(ExtractionReport::new(self.export()?, self.sources))
    }

    const fn ensure_uninitialized(&self) -> Result<()> {
        match self.results {
            Results::Uninitialized => Ok(()),
            Results::Populated(_) => Err(ExtractError::AlreadyExtracted),
        }
    }

    fn emails_mut(&mut self) -> Result<&mut Vec<String>> {
        match &mut self.results {
            Results::Populated(emails) => Ok(emails),
            Results::Uninitialized => Err(ExtractError::NotExtracted),
        }
    }

    fn apply_filter(&mut self, mode: FilterMode, filter: Option<&[&str]>) -> Result<&mut Self> {
        let Results::Populated(emails) = &mut self.results else {
            return Err(ExtractError::NotExtracted);
        };

        let words: Vec<&str> = filter.map_or_else(
            || self.filter.iter().map(String::as_str).collect(),
            <[&str]>::to_vec,
        );

        let before = emails.len();
        emails.retain(|email| mode.keeps(email, &words));

        trace!("{mode:?} filter: {before} -> {}", emails.len());
        Ok(self)
    }
}
