//! Contacts directory loaded from a JSON file.
//!
//! CHANGELOG:
//! - 10/10/2026 - Implements Directory for display-name lookup
//! - 10/09/2026 - Initial loader

use super::{fuzzy, Directory};
use crate::error::LookupError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A contact from the contacts file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
}

/// Wrapped file format (`{"contacts": [...]}`).
#[derive(Debug, Deserialize)]
struct ContactsFile {
    contacts: Vec<Contact>,
}

/// In-memory address book.
#[derive(Debug, Default)]
pub struct ContactsDirectory {
    contacts: Vec<Contact>,
}

impl ContactsDirectory {
    /// Load contacts from a JSON file.
    ///
    /// Accepts `{"contacts": [...]}` or a flat `[...]` array.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read contacts file: {:?}", path.as_ref()))?;

        if let Ok(wrapper) = serde_json::from_str::<ContactsFile>(&content) {
            return Ok(Self::from_contacts(wrapper.contacts));
        }

        let contacts: Vec<Contact> =
            serde_json::from_str(&content).context("Failed to parse contacts JSON")?;
        Ok(Self::from_contacts(contacts))
    }

    /// Load, or fall back to an empty directory when the file is missing or bad.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(dir) => dir,
            Err(e) => {
                tracing::debug!(error = %e, "contacts unavailable, names will not resolve");
                Self::empty()
            }
        }
    }

    pub fn from_contacts(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn all(&self) -> &[Contact] {
        &self.contacts
    }

    /// Find a contact by phone, comparing digits only.
    pub fn find_by_phone(&self, phone: &str) -> Option<&Contact> {
        let wanted = digits_only(phone);
        if wanted.is_empty() {
            return None;
        }
        self.contacts.iter().find(|c| digits_only(&c.phone) == wanted)
    }

    /// Find a contact by name: exact, then substring, then best fuzzy match.
    pub fn find_by_name(&self, name: &str) -> Option<&Contact> {
        let wanted = name.to_lowercase();

        if let Some(contact) = self.contacts.iter().find(|c| c.name.to_lowercase() == wanted) {
            return Some(contact);
        }

        if let Some(contact) = self
            .contacts
            .iter()
            .find(|c| c.name.to_lowercase().contains(&wanted))
        {
            return Some(contact);
        }

        self.contacts
            .iter()
            .map(|c| (c, fuzzy::name_score(name, &c.name)))
            .filter(|(_, score)| *score >= fuzzy::DEFAULT_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(c, _)| c)
    }

    /// Turn a recipient typed by the user into an address.
    ///
    /// Input that already contains a digit is taken as a number and only
    /// trimmed. Anything else is looked up by name; the contact's phone is
    /// returned as stored, minus whitespace.
    pub fn resolve_recipient(&self, input: &str) -> String {
        let trimmed = input.trim();
        if trimmed.chars().any(|c| c.is_ascii_digit()) {
            return trimmed.to_string();
        }
        match self.find_by_name(trimmed) {
            Some(contact) => contact.phone.trim().to_string(),
            None => trimmed.to_string(),
        }
    }
}

impl Directory for ContactsDirectory {
    fn display_name(&self, address: &str) -> Result<Option<String>, LookupError> {
        Ok(self.find_by_phone(address).map(|c| c.name.clone()))
    }
}

/// Digits of `phone`, used for comparison only.
fn digits_only(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}
