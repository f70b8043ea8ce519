//! Send command.
//!
//! CHANGELOG:
//! - 10/16/2026 - Refusals reported once, through the returned error
//! - 10/14/2026 - Runs the compose flow over the configured store and prefs

use super::threads::{format_line, load_conversations};
use crate::aggregate::ThreadSelection;
use crate::compose::{ComposeFlow, SendOutcome, TrustGate};
use crate::config::Config;
use crate::contacts::ContactsDirectory;
use crate::output::OutputControls;
use crate::prefs::JsonFilePreferences;
use crate::registry::TrustedSenderRegistry;
use crate::transport::CommandTransport;
use anyhow::{anyhow, Context, Result};
use serde_json::json;

/// Send `message` to `recipient` (number or contact name).
pub fn send(
    config: &Config,
    recipient: &str,
    message: &str,
    gate: TrustGate,
    selection: ThreadSelection,
    output: &OutputControls,
) -> Result<()> {
    let contacts = ContactsDirectory::load_or_empty(&config.contacts_path);
    let address = contacts.resolve_recipient(recipient);

    let (store, mut conversations) = load_conversations(config, &contacts, selection)?;
    let transport = CommandTransport::from_template(&config.send_command)
        .context("Invalid send command")?;
    let registry = TrustedSenderRegistry::new(JsonFilePreferences::new(&config.prefs_path));

    let outcome = ComposeFlow::new(&transport, &store, &registry)
        .with_gate(gate)
        .send(&address, message, &mut conversations)
        .context("Failed to update trusted list")?;

    match outcome {
        SendOutcome::Sent {
            summary,
            transport_error,
            registry_error,
        } => {
            if output.json {
                output.print(&json!({
                    "success": true,
                    "phone": address,
                    "conversation": summary,
                    "transport_error": transport_error,
                    "registry_error": registry_error,
                }));
            } else {
                if let Some(err) = &transport_error {
                    eprintln!("Warning: {}", err);
                }
                if let Some(err) = &registry_error {
                    eprintln!("Warning: {}", err);
                }
                println!("SMS sent.");
                println!("{}", format_line(&summary));
            }
            Ok(())
        }
        // main reports the error, as text or as one JSON object
        SendOutcome::Rejected(rejection) => Err(anyhow!("{}: {}", address, rejection)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::queries::CREATE_SMS_TABLE;
    use rusqlite::Connection;
    use tempfile::TempDir;

    /// Empty SMS database and a send command that always succeeds.
    fn config(dir: &TempDir) -> Config {
        let db_path = dir.path().join("mmssms.db");
        Connection::open(&db_path)
            .unwrap()
            .execute(CREATE_SMS_TABLE, [])
            .unwrap();
        Config {
            db_path,
            contacts_path: dir.path().join("contacts.json"),
            prefs_path: dir.path().join("SharedPreferences.json"),
            send_command: "true".to_string(),
        }
    }

    #[test]
    fn test_require_known_refuses_with_empty_registry() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);

        let err = send(
            &config,
            "5551234567",
            "hello",
            TrustGate::RequireKnown,
            ThreadSelection::FirstSeen,
            &OutputControls::default(),
        )
        .unwrap_err();

        assert_eq!(err.to_string(), "5551234567: Contact already exists.");
        assert!(!config.prefs_path.exists());
    }

    #[test]
    fn test_invalid_number_is_an_error() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);

        let err = send(
            &config,
            "555123456x",
            "hello",
            TrustGate::Off,
            ThreadSelection::FirstSeen,
            &OutputControls::default(),
        )
        .unwrap_err();

        assert!(err.to_string().contains("Please only enter numerical digits"));
        assert!(!config.prefs_path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_gate_off_sends_and_trusts_number() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);

        send(
            &config,
            " 5551234567 ",
            "hello",
            TrustGate::Off,
            ThreadSelection::FirstSeen,
            &OutputControls::default(),
        )
        .unwrap();

        let registry = TrustedSenderRegistry::new(JsonFilePreferences::new(&config.prefs_path));
        assert!(registry.contains("5551234567").unwrap());
    }
}
