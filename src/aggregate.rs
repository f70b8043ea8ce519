//! Collapse the message store into one summary per conversation thread.
//!
//! CHANGELOG:
//! - 10/13/2026 - Added MostRecent selection
//! - 10/10/2026 - Initial first-seen aggregation

use crate::contacts::Directory;
use crate::error::StoreError;
use crate::model::{ConversationList, ConversationSummary, MessageRow, PriorityLevel};
use crate::store::MessageStore;
use std::collections::HashMap;
use tracing::{debug, info};

/// Which row represents a thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ThreadSelection {
    /// First row met in store order.
    #[default]
    FirstSeen,
    /// Row with the greatest timestamp; earlier rows win ties.
    MostRecent,
}

pub struct ThreadAggregator<'a> {
    store: &'a dyn MessageStore,
    directory: &'a dyn Directory,
    selection: ThreadSelection,
}

impl<'a> ThreadAggregator<'a> {
    pub fn new(store: &'a dyn MessageStore, directory: &'a dyn Directory) -> Self {
        Self {
            store,
            directory,
            selection: ThreadSelection::default(),
        }
    }

    pub fn with_selection(mut self, selection: ThreadSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Scan the store once and build the conversation list.
    ///
    /// Store failures abort the whole scan; no partial list is returned.
    /// Directory failures only blank the display name of that thread.
    pub fn aggregate(&self) -> Result<ConversationList, StoreError> {
        let mut picked: Vec<MessageRow> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut scanned = 0usize;

        self.store.scan(&mut |row: MessageRow| {
            scanned += 1;
            match index.get(&row.thread_id).copied() {
                None => {
                    index.insert(row.thread_id.clone(), picked.len());
                    picked.push(row);
                }
                Some(slot) => {
                    if self.selection == ThreadSelection::MostRecent
                        && row.timestamp > picked[slot].timestamp
                    {
                        picked[slot] = row;
                    }
                }
            }
        })?;

        let summaries: Vec<ConversationSummary> =
            picked.into_iter().map(|row| self.summarize(row)).collect();

        info!(
            rows = scanned,
            threads = summaries.len(),
            selection = ?self.selection,
            "aggregated conversation threads"
        );
        Ok(ConversationList::from_entries(summaries))
    }

    fn summarize(&self, row: MessageRow) -> ConversationSummary {
        let mut summary =
            ConversationSummary::new(&row.address, &row.thread_id, &row.body, row.timestamp);
        summary.display_name = self.lookup_name(&row.address);
        // Every thread is PRIORITY until priority scoring exists.
        summary.priority_level = PriorityLevel::Priority;
        summary
    }

    fn lookup_name(&self, address: &str) -> String {
        match self.directory.display_name(address) {
            Ok(Some(name)) => name,
            Ok(None) => String::new(),
            Err(e) => {
                debug!(error = %e, "directory lookup failed");
                String::new()
            }
        }
    }
}
