//! trustsms library
//!
//! Conversation-thread aggregation over an SMS store and a trusted-sender
//! gated compose flow. Platform pieces (message store, contact directory,
//! transport, preference storage) sit behind small traits.
//!
//! CHANGELOG:
//! - 10/14/2026 - Config, output and command modules for the CLI
//! - 10/09/2026 - Initial library structure

pub mod aggregate;
pub mod commands;
pub mod compose;
pub mod config;
pub mod contacts;
pub mod error;
pub mod model;
pub mod output;
pub mod prefs;
pub mod registry;
pub mod store;
pub mod transport;

pub use aggregate::{ThreadAggregator, ThreadSelection};
pub use compose::{ComposeFlow, Rejection, SendOutcome, TrustGate};
pub use contacts::{Contact, ContactsDirectory, Directory};
pub use model::{ConversationList, ConversationSummary, MessageRow, PriorityLevel};
pub use prefs::{JsonFilePreferences, KeyValueStore};
pub use registry::{SenderStatus, TrustedSenderRegistry};
pub use store::{MessageStore, SqliteMessageStore};
pub use transport::{CommandTransport, Transport};
