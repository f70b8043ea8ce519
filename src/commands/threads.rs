//! Conversation list command.

use crate::aggregate::{ThreadAggregator, ThreadSelection};
use crate::config::Config;
use crate::contacts::ContactsDirectory;
use crate::model::{ConversationList, ConversationSummary};
use crate::output::OutputControls;
use crate::store::SqliteMessageStore;
use anyhow::{Context, Result};
use chrono::{TimeZone, Utc};

/// Scan the configured SMS database into a conversation list.
pub fn load_conversations(
    config: &Config,
    contacts: &ContactsDirectory,
    selection: ThreadSelection,
) -> Result<(SqliteMessageStore, ConversationList)> {
    let store = SqliteMessageStore::open(&config.db_path).context("Failed to open SMS database")?;
    let conversations = ThreadAggregator::new(&store, contacts)
        .with_selection(selection)
        .aggregate()
        .context("Failed to read conversation threads")?;
    Ok((store, conversations))
}

/// List one line per conversation thread.
pub fn list(config: &Config, selection: ThreadSelection, output: &OutputControls) -> Result<()> {
    let contacts = ContactsDirectory::load_or_empty(&config.contacts_path);
    let (_store, conversations) = load_conversations(config, &contacts, selection)?;

    if output.json {
        output.print(&conversations);
        return Ok(());
    }

    if conversations.is_empty() {
        println!("No conversations found.");
        return Ok(());
    }

    println!("Conversations ({}):", conversations.len());
    println!("{}", "-".repeat(60));
    for summary in conversations.iter() {
        println!("{}", format_line(summary));
    }
    Ok(())
}

/// `[date] label: preview`
pub fn format_line(summary: &ConversationSummary) -> String {
    format!(
        "[{}] {}: {}",
        format_timestamp(summary.timestamp),
        summary.label(),
        summary.body_preview
    )
}

fn format_timestamp(millis: i64) -> String {
    Utc.timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_uses_label() {
        let mut summary = ConversationSummary::new("5551234567", "1", "hello", 0);
        assert_eq!(format_line(&summary), "[1970-01-01 00:00] 5551234567: hello");

        summary.display_name = "Ada".to_string();
        assert_eq!(format_line(&summary), "[1970-01-01 00:00] Ada: hello");
    }
}
