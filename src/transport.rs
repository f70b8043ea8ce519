//! Outbound SMS transport.
//!
//! The default transport runs an external command (e.g. `termux-sms-send`)
//! with the address and body substituted into its arguments.
//!
//! CHANGELOG:
//! - 10/11/2026 - Command template parsing
//! - 10/10/2026 - Initial implementation

use crate::error::TransportError;
use std::process::Command;
use tracing::debug;

pub const ADDRESS_PLACEHOLDER: &str = "{address}";
pub const BODY_PLACEHOLDER: &str = "{body}";

/// Hands a message to whatever actually delivers it. No delivery receipt.
pub trait Transport {
    fn send(&self, address: &str, body: &str) -> Result<(), TransportError>;
}

/// Runs `program args...` once per message.
///
/// Arguments are passed straight to the process, never through a shell, so
/// the body needs no escaping. Every `{address}` and `{body}` inside an
/// argument is replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTransport {
    program: String,
    args: Vec<String>,
}

impl CommandTransport {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Parse a whitespace-separated template such as
    /// `termux-sms-send -n {address} {body}`.
    pub fn from_template(template: &str) -> Result<Self, TransportError> {
        let mut parts = template.split_whitespace().map(String::from);
        let program = parts.next().ok_or(TransportError::EmptyCommand)?;
        Ok(Self::new(program, parts.collect()))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments with placeholders filled in.
    pub fn render_args(&self, address: &str, body: &str) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| {
                arg.replace(ADDRESS_PLACEHOLDER, address)
                    .replace(BODY_PLACEHOLDER, body)
            })
            .collect()
    }
}

impl Transport for CommandTransport {
    fn send(&self, address: &str, body: &str) -> Result<(), TransportError> {
        let args = self.render_args(address, body);
        debug!(program = %self.program, address, "running send command");

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|source| TransportError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(TransportError::Failed(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_template() {
        let transport = CommandTransport::from_template("termux-sms-send -n {address} {body}").unwrap();
        assert_eq!(transport.program(), "termux-sms-send");
        assert_eq!(
            transport.render_args("5551234567", "hi there"),
            ["-n", "5551234567", "hi there"]
        );
    }

    #[test]
    fn test_empty_template_rejected() {
        assert!(matches!(
            CommandTransport::from_template("   "),
            Err(TransportError::EmptyCommand)
        ));
    }

    #[test]
    fn test_body_is_not_reinterpreted() {
        let transport = CommandTransport::from_template("send --to={address} {body}").unwrap();
        assert_eq!(
            transport.render_args("5551234567", r#"say "hi" $HOME; rm -rf"#),
            ["--to=5551234567", r#"say "hi" $HOME; rm -rf"#]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_command() {
        let transport = CommandTransport::new("true", vec![]);
        assert!(transport.send("5551234567", "hi").is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_command() {
        let transport = CommandTransport::new("false", vec![]);
        assert!(matches!(
            transport.send("5551234567", "hi"),
            Err(TransportError::Failed(_))
        ));
    }

    #[test]
    fn test_missing_program() {
        let transport = CommandTransport::new("trustsms-no-such-program", vec![]);
        assert!(matches!(
            transport.send("5551234567", "hi"),
            Err(TransportError::Spawn { .. })
        ));
    }
}
