//! Runtime configuration.
//!
//! Each setting comes from, in order: a CLI flag, an environment variable,
//! a default under the platform data/config directories. Paths may start
//! with `~`.
//!
//! CHANGELOG:
//! - 10/14/2026 - CLI overrides
//! - 10/11/2026 - Initial env-based configuration

use std::path::PathBuf;

pub const DB_PATH_VAR: &str = "TRUSTSMS_DB_PATH";
pub const CONTACTS_PATH_VAR: &str = "TRUSTSMS_CONTACTS_PATH";
pub const PREFS_PATH_VAR: &str = "TRUSTSMS_PREFS_PATH";
pub const SEND_COMMAND_VAR: &str = "TRUSTSMS_SEND_COMMAND";

pub const DEFAULT_SEND_COMMAND: &str = "termux-sms-send -n {address} {body}";

const APP_DIR: &str = "trustsms";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// SMS database (`sms` table).
    pub db_path: PathBuf,
    /// Contacts JSON used as the directory.
    pub contacts_path: PathBuf,
    /// Preference file holding the trusted list.
    pub prefs_path: PathBuf,
    /// Send command template, see `CommandTransport::from_template`.
    pub send_command: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            db_path: var(DB_PATH_VAR)
                .map(|p| expand(&p))
                .unwrap_or_else(|| data_dir().join("mmssms.db")),
            contacts_path: var(CONTACTS_PATH_VAR)
                .map(|p| expand(&p))
                .unwrap_or_else(|| config_dir().join("contacts.json")),
            prefs_path: var(PREFS_PATH_VAR)
                .map(|p| expand(&p))
                .unwrap_or_else(|| config_dir().join("SharedPreferences.json")),
            send_command: var(SEND_COMMAND_VAR)
                .unwrap_or_else(|| DEFAULT_SEND_COMMAND.to_string()),
        }
    }

    /// Apply values given on the command line.
    pub fn with_overrides(
        mut self,
        db: Option<&str>,
        contacts: Option<&str>,
        prefs: Option<&str>,
        send_command: Option<&str>,
    ) -> Self {
        if let Some(p) = db {
            self.db_path = expand(p);
        }
        if let Some(p) = contacts {
            self.contacts_path = expand(p);
        }
        if let Some(p) = prefs {
            self.prefs_path = expand(p);
        }
        if let Some(cmd) = send_command {
            self.send_command = cmd.to_string();
        }
        self
    }
}

fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[]));
        assert!(config.db_path.ends_with("trustsms/mmssms.db"));
        assert!(config.contacts_path.ends_with("trustsms/contacts.json"));
        assert!(config.prefs_path.ends_with("trustsms/SharedPreferences.json"));
        assert_eq!(config.send_command, DEFAULT_SEND_COMMAND);
    }

    #[test]
    fn test_env_values() {
        let config = Config::from_lookup(lookup(&[
            (DB_PATH_VAR, "/tmp/sms.db"),
            (SEND_COMMAND_VAR, "my-sender {address} {body}"),
        ]));
        assert_eq!(config.db_path, PathBuf::from("/tmp/sms.db"));
        assert_eq!(config.send_command, "my-sender {address} {body}");
    }

    #[test]
    fn test_blank_env_value_ignored() {
        let config = Config::from_lookup(lookup(&[(PREFS_PATH_VAR, "  ")]));
        assert!(config.prefs_path.ends_with("trustsms/SharedPreferences.json"));
    }

    #[test]
    fn test_tilde_expanded() {
        let config = Config::from_lookup(lookup(&[(CONTACTS_PATH_VAR, "~/contacts.json")]));
        assert!(!config.contacts_path.to_string_lossy().starts_with('~'));
        assert!(config.contacts_path.ends_with("contacts.json"));
    }

    #[test]
    fn test_overrides_win() {
        let config = Config::from_lookup(lookup(&[(DB_PATH_VAR, "/tmp/env.db")]))
            .with_overrides(Some("/tmp/flag.db"), None, None, Some("sender {body}"));
        assert_eq!(config.db_path, PathBuf::from("/tmp/flag.db"));
        assert_eq!(config.send_command, "sender {body}");
    }
}
