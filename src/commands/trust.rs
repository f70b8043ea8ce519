//! Sender list commands: trust, trusted, spam, status.
//!
//! CHANGELOG:
//! - 10/16/2026 - spam and status
//! - 10/14/2026 - trust and trusted

use crate::compose::validate_address;
use crate::config::Config;
use crate::output::OutputControls;
use crate::prefs::JsonFilePreferences;
use crate::registry::TrustedSenderRegistry;
use anyhow::{anyhow, Context, Result};
use serde_json::json;

fn open_registry(config: &Config) -> TrustedSenderRegistry<JsonFilePreferences> {
    TrustedSenderRegistry::new(JsonFilePreferences::new(&config.prefs_path))
}

/// Trim `number` and check it the way the compose screen does.
fn checked_number(number: &str) -> Result<&str> {
    let number = number.trim();
    validate_address(number).map_err(|e| anyhow!("{}: {}", number, e))?;
    Ok(number)
}

/// Add a number to the trusted list by hand.
pub fn add(config: &Config, number: &str, output: &OutputControls) -> Result<()> {
    let number = checked_number(number)?;

    let registry = open_registry(config);
    let already = registry.contains(number).context("Failed to read trusted list")?;
    registry.add(number).context("Failed to update trusted list")?;

    if output.json {
        output.print(&json!({
            "success": true,
            "phone": number,
            "already_trusted": already,
        }));
    } else if already {
        println!("{} is already trusted", number);
    } else {
        println!("Marked {} as trusted", number);
    }
    Ok(())
}

/// Print the trusted list.
pub fn list(config: &Config, output: &OutputControls) -> Result<()> {
    let members = open_registry(config)
        .members()
        .context("Failed to read trusted list")?;

    if output.json {
        output.print(&members);
        return Ok(());
    }

    if members.is_empty() {
        println!("No trusted numbers.");
        return Ok(());
    }

    println!("Trusted numbers ({}):", members.len());
    for number in &members {
        println!("{}", number);
    }
    Ok(())
}

/// Mark a number as spam. It stays trusted if it already was.
pub fn spam(config: &Config, number: &str, output: &OutputControls) -> Result<()> {
    let number = checked_number(number)?;

    let registry = open_registry(config);
    registry.mark_spam(number).context("Failed to update spam list")?;
    let status = registry.status(number).context("Failed to read sender lists")?;

    if output.json {
        output.print(&json!({
            "success": true,
            "phone": number,
            "status": status,
        }));
    } else {
        println!("Marked {} as spam (status: {})", number, status);
    }
    Ok(())
}

/// Print TRUSTED, SPAM or UNKNOWN for a number.
pub fn status(config: &Config, number: &str, output: &OutputControls) -> Result<()> {
    let number = checked_number(number)?;
    let status = open_registry(config)
        .status(number)
        .context("Failed to read sender lists")?;

    if output.json {
        output.print(&json!({
            "phone": number,
            "status": status,
        }));
    } else {
        println!("{}: {}", number, status);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::SenderStatus;
    use tempfile::TempDir;

    fn config(dir: &TempDir) -> Config {
        Config {
            db_path: dir.path().join("mmssms.db"),
            contacts_path: dir.path().join("contacts.json"),
            prefs_path: dir.path().join("prefs").join("SharedPreferences.json"),
            send_command: "true".to_string(),
        }
    }

    #[test]
    fn test_add_rejects_short_number_without_writing() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);

        let err = add(&config, "12345", &OutputControls::default()).unwrap_err();

        assert!(err.to_string().contains("Phone number too short"));
        assert!(!config.prefs_path.exists());
    }

    #[test]
    fn test_add_trims_and_persists() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);

        add(&config, " 5551234567 ", &OutputControls::default()).unwrap();

        let members = open_registry(&config).members().unwrap();
        assert_eq!(members.into_iter().collect::<Vec<_>>(), ["5551234567"]);
    }

    #[test]
    fn test_spam_keeps_trusted_number_trusted() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);
        let output = OutputControls::default();

        add(&config, "5551234567", &output).unwrap();
        spam(&config, "5551234567", &output).unwrap();
        spam(&config, "5550000000", &output).unwrap();

        let registry = open_registry(&config);
        assert!(registry.contains("5551234567").unwrap());
        assert_eq!(registry.status("5551234567").unwrap(), SenderStatus::Trusted);
        assert_eq!(registry.status("5550000000").unwrap(), SenderStatus::Spam);
    }

    #[test]
    fn test_status_validates_and_reads_without_writing() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);

        assert!(status(&config, "555", &OutputControls::default()).is_err());
        status(&config, "5551234567", &OutputControls::default()).unwrap();

        assert!(!config.prefs_path.exists());
    }
}
