//! Contact directory: address to display name, name to address.
//!
//! CHANGELOG:
//! - 10/10/2026 - Directory trait for display-name lookup
//! - 10/09/2026 - Initial module structure

pub mod fuzzy;
pub mod manager;

use crate::error::LookupError;

pub use manager::{Contact, ContactsDirectory};

/// Resolves an address to a human-readable name.
///
/// `Ok(None)` is a miss. Errors are recovered by callers as a miss too.
pub trait Directory {
    fn display_name(&self, address: &str) -> Result<Option<String>, LookupError>;
}
