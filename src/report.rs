//! Serializable snapshot of an extraction

use crate::error::{ExtractError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Summary of the emails an extractor currently holds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionReport {
    /// Emails in their current pipeline order
    pub emails: Vec<String>,

    /// Number of entries, duplicates included
    pub total: usize,

    /// Number of distinct entries
    pub distinct: usize,

    /// Number of texts scanned by the extraction
    pub sources: usize,

    /// When the report was taken
    pub generated_at: DateTime<Utc>,
}

impl ExtractionReport {
    pub(crate) fn new(emails: Vec<String>, sources: usize) -> Self {
        let distinct = emails.iter().collect::<HashSet<_>>().len();

        Self {
            total: emails.len(),
            distinct,
            sources,
            emails,
            generated_at: Utc::now(),
        }
    }

    /// Encode the report as JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| ExtractError::Serialize(e.to_string()))
    }

    /// Whether any email appears more than once
    #[must_use]
    pub const fn has_duplicates(&self) -> bool {
        self.distinct < self.total
    }
}
