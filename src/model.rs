//! Conversation data model.
//!
//! CHANGELOG:
//! - 10/12/2026 - ConversationList keeps one entry per thread on insert
//! - 10/09/2026 - Initial model

use serde::Serialize;

/// Previews longer than this are cut.
pub const PREVIEW_MAX_CHARS: usize = 45;

/// Characters of body kept ahead of the ellipsis when cutting.
pub const PREVIEW_KEEP_CHARS: usize = 42;

pub const ELLIPSIS: &str = "...";

/// One row of the message store projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRow {
    pub thread_id: String,
    pub address: String,
    pub body: String,
    /// Epoch milliseconds.
    pub timestamp: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriorityLevel {
    #[default]
    Normal,
    Priority,
}

/// One entry of the conversation list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationSummary {
    pub address: String,
    pub thread_id: String,
    pub body_preview: String,
    pub timestamp: i64,
    /// Empty when the directory had no name; callers show the address instead.
    pub display_name: String,
    pub priority_level: PriorityLevel,
}

impl ConversationSummary {
    /// Build a summary with the preview already truncated.
    pub fn new(address: &str, thread_id: &str, body: &str, timestamp: i64) -> Self {
        Self {
            address: address.to_string(),
            thread_id: thread_id.to_string(),
            body_preview: truncate_preview(body),
            timestamp,
            display_name: String::new(),
            priority_level: PriorityLevel::Normal,
        }
    }

    /// Display name if known, otherwise the raw address.
    pub fn label(&self) -> &str {
        if self.display_name.is_empty() {
            &self.address
        } else {
            &self.display_name
        }
    }
}

/// Cut `body` to 42 chars plus "..." when it exceeds 45 chars.
pub fn truncate_preview(body: &str) -> String {
    if body.chars().count() > PREVIEW_MAX_CHARS {
        let kept: String = body.chars().take(PREVIEW_KEEP_CHARS).collect();
        format!("{}{}", kept, ELLIPSIS)
    } else {
        body.to_string()
    }
}

/// Ordered, session-scoped list of conversations owned by whoever drives the UI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConversationList {
    entries: Vec<ConversationSummary>,
}

impl ConversationList {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_entries(entries: Vec<ConversationSummary>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConversationSummary> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[ConversationSummary] {
        &self.entries
    }

    pub fn find_by_thread(&self, thread_id: &str) -> Option<&ConversationSummary> {
        self.entries.iter().find(|c| c.thread_id == thread_id)
    }

    pub fn find_by_address(&self, address: &str) -> Option<&ConversationSummary> {
        self.entries.iter().find(|c| c.address == address)
    }

    /// Put `summary` first, dropping any older entry for the same thread.
    pub fn record(&mut self, summary: ConversationSummary) {
        self.entries.retain(|c| c.thread_id != summary.thread_id);
        self.entries.insert(0, summary);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_body_untouched() {
        assert_eq!(truncate_preview("See you at 6"), "See you at 6");
        assert_eq!(truncate_preview(""), "");
    }

    #[test]
    fn test_body_at_limit_untouched() {
        let body = "a".repeat(45);
        assert_eq!(truncate_preview(&body), body);
    }

    #[test]
    fn test_long_body_cut_to_45() {
        let body = "b".repeat(46);
        let preview = truncate_preview(&body);
        assert_eq!(preview.chars().count(), 45);
        assert!(preview.ends_with("..."));
        assert_eq!(&preview[..42], &body[..42]);
    }

    #[test]
    fn test_multibyte_body_cut_on_char_boundary() {
        let body = "é".repeat(60);
        let preview = truncate_preview(&body);
        assert_eq!(preview.chars().count(), 45);
        assert!(preview.starts_with(&"é".repeat(42)));
    }

    #[test]
    fn test_label_falls_back_to_address() {
        let mut summary = ConversationSummary::new("5551234567", "7", "hi", 1);
        assert_eq!(summary.label(), "5551234567");
        summary.display_name = "Ada".to_string();
        assert_eq!(summary.label(), "Ada");
    }

    #[test]
    fn test_record_moves_thread_to_front() {
        let mut list = ConversationList::from_entries(vec![
            ConversationSummary::new("111", "t1", "old", 1),
            ConversationSummary::new("222", "t2", "other", 2),
        ]);

        list.record(ConversationSummary::new("111", "t1", "new", 3));

        assert_eq!(list.len(), 2);
        assert_eq!(list.as_slice()[0].thread_id, "t1");
        assert_eq!(list.as_slice()[0].body_preview, "new");
        assert_eq!(list.as_slice()[1].thread_id, "t2");
    }

    #[test]
    fn test_priority_serializes_uppercase() {
        let json = serde_json::to_string(&PriorityLevel::Priority).unwrap();
        assert_eq!(json, "\"PRIORITY\"");
    }
}
