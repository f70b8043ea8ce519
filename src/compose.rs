//! Compose flow: validate input, apply the trust gate, send, record.
//!
//! CHANGELOG:
//! - 10/16/2026 - Registry write failures after a send are reported, not raised
//! - 10/14/2026 - Trust gate made an explicit policy
//! - 10/12/2026 - Validation reports the specific problem
//! - 10/10/2026 - Initial send flow

use crate::error::{PreferencesError, ValidationError};
use crate::model::{ConversationList, ConversationSummary, PriorityLevel};
use crate::prefs::KeyValueStore;
use crate::registry::TrustedSenderRegistry;
use crate::store::MessageStore;
use crate::transport::Transport;
use std::fmt;
use tracing::{info, warn};

/// Exact number of characters in a valid address.
pub const PHONE_NUMBER_LENGTH: usize = 10;

/// Notice shown when the trust gate refuses a number.
pub const NOT_TRUSTED_NOTICE: &str = "Contact already exists.";

/// Check a trimmed address, reporting length problems before bad characters.
pub fn validate_address(address: &str) -> Result<(), ValidationError> {
    let len = address.chars().count();
    if len < PHONE_NUMBER_LENGTH {
        Err(ValidationError::TooShort)
    } else if len > PHONE_NUMBER_LENGTH {
        Err(ValidationError::TooLong)
    } else if !address.chars().all(|c| c.is_ascii_digit()) {
        Err(ValidationError::NonDigit)
    } else {
        Ok(())
    }
}

pub fn validate(address: &str, body: &str) -> Result<(), ValidationError> {
    if body.is_empty() {
        return Err(ValidationError::EmptyBody);
    }
    validate_address(address)
}

/// How the registry gates outbound sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum TrustGate {
    /// Refuse numbers that are not yet in the registry. This is how the
    /// compose screen has always behaved, even though the registry is only
    /// filled by successful sends.
    #[default]
    RequireKnown,
    /// No registry check; every valid number may be sent to.
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Invalid(ValidationError),
    NotTrusted,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Invalid(e) => write!(f, "{}", e),
            Rejection::NotTrusted => f.write_str(NOT_TRUSTED_NOTICE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Handed to the transport and recorded. `transport_error` is a notice
    /// for the user only; the conversation and registry are updated anyway.
    /// `registry_error` is set when the number could not be saved to the
    /// trusted list after the message went out.
    Sent {
        summary: ConversationSummary,
        transport_error: Option<String>,
        registry_error: Option<String>,
    },
    /// Nothing was sent and nothing was recorded.
    Rejected(Rejection),
}

pub struct ComposeFlow<'a, K: KeyValueStore> {
    transport: &'a dyn Transport,
    store: &'a dyn MessageStore,
    registry: &'a TrustedSenderRegistry<K>,
    gate: TrustGate,
    clock: fn() -> i64,
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

impl<'a, K: KeyValueStore> ComposeFlow<'a, K> {
    pub fn new(
        transport: &'a dyn Transport,
        store: &'a dyn MessageStore,
        registry: &'a TrustedSenderRegistry<K>,
    ) -> Self {
        Self {
            transport,
            store,
            registry,
            gate: TrustGate::default(),
            clock: now_millis,
        }
    }

    pub fn with_gate(mut self, gate: TrustGate) -> Self {
        self.gate = gate;
        self
    }

    /// Override the epoch-millisecond clock used for sent summaries.
    pub fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = clock;
        self
    }

    /// Handle a press of "send".
    ///
    /// `address` is expected trimmed. On success the sent message is put at
    /// the front of `conversations` and `address` joins the registry.
    ///
    /// `Err` only comes from reading the registry for the gate, before
    /// anything is sent.
    pub fn send(
        &self,
        address: &str,
        body: &str,
        conversations: &mut ConversationList,
    ) -> Result<SendOutcome, PreferencesError> {
        if let Err(e) = validate(address, body) {
            info!(address, reason = %e, "compose input rejected");
            return Ok(SendOutcome::Rejected(Rejection::Invalid(e)));
        }

        if self.gate == TrustGate::RequireKnown && !self.registry.contains(address)? {
            info!(address, "number not in trusted list, send refused");
            return Ok(SendOutcome::Rejected(Rejection::NotTrusted));
        }

        let transport_error = match self.transport.send(address, body) {
            Ok(()) => None,
            Err(e) => {
                warn!(address, error = %e, "transport failed to send message");
                Some(e.to_string())
            }
        };

        let mut summary = ConversationSummary::new(
            address,
            &self.thread_id_for(address, conversations),
            body,
            (self.clock)(),
        );
        summary.priority_level = PriorityLevel::Priority;
        if let Some(existing) = conversations.find_by_thread(&summary.thread_id) {
            summary.display_name = existing.display_name.clone();
        }
        conversations.record(summary.clone());

        let registry_error = match self.registry.add(address) {
            Ok(()) => None,
            Err(e) => {
                warn!(address, error = %e, "could not save number to trusted list");
                Some(e.to_string())
            }
        };

        info!(address, thread_id = %summary.thread_id, "message sent");
        Ok(SendOutcome::Sent {
            summary,
            transport_error,
            registry_error,
        })
    }

    /// Store thread for the address, else one already on screen, else a
    /// local id.
    fn thread_id_for(&self, address: &str, conversations: &ConversationList) -> String {
        match self.store.thread_for_address(address) {
            Ok(Some(thread)) => return thread,
            Ok(None) => {}
            Err(e) => warn!(address, error = %e, "thread lookup failed"),
        }

        conversations
            .find_by_address(address)
            .map(|c| c.thread_id.clone())
            .unwrap_or_else(|| format!("local:{}", address))
    }
}
