use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Aggregate statistics produced by one cleaning run.
///
/// Phone counts are taken over the input rows (valid means the row was
/// retained, invalid means it was dropped). Email counts and the frequency
/// maps are taken over the retained rows only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanSummary {
    /// Rows loaded from the source file.
    pub input_rows: usize,
    /// Rows kept after the phone filter.
    pub retained_rows: usize,
    /// Rows whose phone normalized to a valid E.164 number.
    pub valid_phones: usize,
    /// Rows dropped because the phone failed validation.
    pub invalid_phones: usize,
    /// Retained rows with a valid normalized email.
    pub valid_emails: usize,
    /// Retained rows whose email was missing or failed validation.
    pub invalid_emails: usize,
    /// Dialing-code frequencies over retained rows, keyed by two-digit DDD.
    pub ddd_counts: BTreeMap<String, usize>,
    /// Lead-source frequencies over retained rows.
    pub source_counts: BTreeMap<String, usize>,
}

impl CleanSummary {
    /// Rows removed by the phone filter.
    pub fn dropped_rows(&self) -> usize {
        self.input_rows.saturating_sub(self.retained_rows)
    }

    /// Dialing codes ordered by descending frequency, then by code.
    ///
    /// `limit` bounds the result; pass `usize::MAX` for the full list.
    pub fn top_ddds(&self, limit: usize) -> Vec<(&str, usize)> {
        let mut ordered: Vec<(&str, usize)> = self
            .ddd_counts
            .iter()
            .map(|(code, count)| (code.as_str(), *count))
            .collect();
        ordered.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        ordered.truncate(limit);
        ordered
    }

    /// Lead sources ordered by descending frequency, then by name.
    pub fn sources_by_count(&self) -> Vec<(&str, usize)> {
        let mut ordered: Vec<(&str, usize)> = self
            .source_counts
            .iter()
            .map(|(source, count)| (source.as_str(), *count))
            .collect();
        ordered.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        ordered
    }
}
