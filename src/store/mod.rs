//! Message store access.
//!
//! The store is read-only from this crate. Implementations must release any
//! cursor they open before `scan` returns, whether it succeeds or fails.
//!
//! CHANGELOG:
//! - 10/11/2026 - Added thread lookup by address
//! - 10/09/2026 - Initial module structure

pub mod queries;
pub mod sqlite;

use crate::error::StoreError;
use crate::model::MessageRow;

pub use sqlite::SqliteMessageStore;

/// Read access to the platform message store.
pub trait MessageStore {
    /// Visit every row in the store's native order.
    fn scan(&self, visit: &mut dyn FnMut(MessageRow)) -> Result<(), StoreError>;

    /// Thread already associated with `address`, if any.
    fn thread_for_address(&self, address: &str) -> Result<Option<String>, StoreError>;
}
