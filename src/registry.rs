//! Numbers the user has sent messages to, and numbers marked as spam.
//!
//! Both sets only grow. Numbers are compared exactly as given; callers
//! trim and format them consistently before calling in.
//!
//! CHANGELOG:
//! - 10/16/2026 - Spam list and sender status
//! - 10/10/2026 - Initial trusted list

use crate::error::PreferencesError;
use crate::prefs::KeyValueStore;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use tracing::debug;

/// Preference key holding the trusted set.
pub const TRUSTED_LIST_KEY: &str = "trustedList";

/// Preference key holding the spam set.
pub const SPAM_LIST_KEY: &str = "spamList";

/// Classification of a number. Trusted wins over spam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SenderStatus {
    Trusted,
    Spam,
    Unknown,
}

impl fmt::Display for SenderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SenderStatus::Trusted => "TRUSTED",
            SenderStatus::Spam => "SPAM",
            SenderStatus::Unknown => "UNKNOWN",
        };
        f.write_str(label)
    }
}

pub struct TrustedSenderRegistry<K: KeyValueStore> {
    prefs: K,
}

impl<K: KeyValueStore> TrustedSenderRegistry<K> {
    pub fn new(prefs: K) -> Self {
        Self { prefs }
    }

    pub fn contains(&self, number: &str) -> Result<bool, PreferencesError> {
        Ok(self.prefs.get_set(TRUSTED_LIST_KEY)?.contains(number))
    }

    /// Insert `number`. Reads the whole set and writes it back, so two
    /// writers racing on the same store can lose an insert.
    pub fn add(&self, number: &str) -> Result<(), PreferencesError> {
        self.insert(TRUSTED_LIST_KEY, number)
    }

    pub fn members(&self) -> Result<BTreeSet<String>, PreferencesError> {
        self.prefs.get_set(TRUSTED_LIST_KEY)
    }

    /// Insert `number` into the spam set. The trusted set is not touched.
    pub fn mark_spam(&self, number: &str) -> Result<(), PreferencesError> {
        self.insert(SPAM_LIST_KEY, number)
    }

    pub fn spam_members(&self) -> Result<BTreeSet<String>, PreferencesError> {
        self.prefs.get_set(SPAM_LIST_KEY)
    }

    /// TRUSTED if in the trusted set, else SPAM if in the spam set, else UNKNOWN.
    pub fn status(&self, number: &str) -> Result<SenderStatus, PreferencesError> {
        if self.contains(number)? {
            return Ok(SenderStatus::Trusted);
        }
        if self.prefs.get_set(SPAM_LIST_KEY)?.contains(number) {
            return Ok(SenderStatus::Spam);
        }
        Ok(SenderStatus::Unknown)
    }

    fn insert(&self, key: &str, number: &str) -> Result<(), PreferencesError> {
        let mut members = self.prefs.get_set(key)?;
        let inserted = members.insert(number.to_string());
        self.prefs.put_set(key, &members)?;
        debug!(key, number, inserted, total = members.len(), "updated sender list");
        Ok(())
    }
}
