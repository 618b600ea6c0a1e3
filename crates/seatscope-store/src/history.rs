//! Session activity log
//!
//! Records what the session did (queries, comparisons, calculations,
//! analyses) so the caller can render a history view. In-memory only;
//! the log dies with the session.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// What kind of operation an entry records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Query,
    Compare,
    Calculation,
    Analysis,
}

impl ActivityKind {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Query => "query",
            ActivityKind::Compare => "compare",
            ActivityKind::Calculation => "calculation",
            ActivityKind::Analysis => "analysis",
        }
    }
}

/// One recorded operation
#[derive(Debug, Clone, Serialize)]
pub struct ActivityEntry {
    pub id: String,
    pub kind: ActivityKind,
    pub title: String,
    /// Free-text detail, e.g. the filter summary or analysis mode
    pub detail: String,
    /// How many records the operation produced
    pub result_count: usize,
    pub created_at: DateTime<Utc>,
}

/// Append-only in-memory log of session activity
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    entries: Vec<ActivityEntry>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an operation; returns the new entry's id.
    pub fn record(
        &mut self,
        kind: ActivityKind,
        title: impl Into<String>,
        detail: impl Into<String>,
        result_count: usize,
    ) -> String {
        let entry = ActivityEntry {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            title: title.into(),
            detail: detail.into(),
            result_count,
            created_at: Utc::now(),
        };
        let id = entry.id.clone();
        self.entries.push(entry);
        id
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[ActivityEntry] {
        &self.entries
    }

    /// Most recent entries first, at most `limit`
    pub fn recent(&self, limit: usize) -> Vec<&ActivityEntry> {
        self.entries.iter().rev().take(limit).collect()
    }

    pub fn by_kind(&self, kind: ActivityKind) -> Vec<&ActivityEntry> {
        self.entries.iter().filter(|e| e.kind == kind).collect()
    }

    /// Case-insensitive keyword match on title and detail
    pub fn search(&self, keyword: &str) -> Vec<&ActivityEntry> {
        let needle = keyword.to_lowercase();
        self.entries
            .iter()
            .filter(|e| {
                e.title.to_lowercase().contains(&needle)
                    || e.detail.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Delete an entry by id; returns whether it existed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_filter_by_kind() {
        let mut log = ActivityLog::new();
        log.record(ActivityKind::Query, "Catalog query", "brand=BYD", 4);
        log.record(ActivityKind::Analysis, "Competitor analysis", "comprehensive", 8);
        log.record(ActivityKind::Query, "Catalog query", "year=2024", 7);

        assert_eq!(log.len(), 3);
        assert_eq!(log.by_kind(ActivityKind::Query).len(), 2);
        assert_eq!(log.by_kind(ActivityKind::Compare).len(), 0);
    }

    #[test]
    fn test_recent_returns_newest_first() {
        let mut log = ActivityLog::new();
        log.record(ActivityKind::Query, "first", "", 1);
        log.record(ActivityKind::Query, "second", "", 2);
        log.record(ActivityKind::Query, "third", "", 3);

        let recent = log.recent(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].title, "third");
        assert_eq!(recent[1].title, "second");
    }

    #[test]
    fn test_search_matches_title_and_detail() {
        let mut log = ActivityLog::new();
        log.record(ActivityKind::Calculation, "Freight estimate", "part=Seat frame", 3);
        log.record(ActivityKind::Query, "Catalog query", "brand=Tesla", 2);

        assert_eq!(log.search("freight").len(), 1);
        assert_eq!(log.search("TESLA").len(), 1);
        assert!(log.search("missing").is_empty());
    }

    #[test]
    fn test_remove_by_id() {
        let mut log = ActivityLog::new();
        let id = log.record(ActivityKind::Query, "q", "", 0);
        assert!(log.remove(&id));
        assert!(!log.remove(&id));
        assert!(log.is_empty());
    }
}
