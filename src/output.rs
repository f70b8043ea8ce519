//! Output formatting for CLI commands.
//!
//! CHANGELOG:
//! - 10/16/2026 - Errors reported through OutputControls, one line per failure
//! - 10/14/2026 - Field allowlist and compact mode for JSON output

use serde::Serialize;
use serde_json::{json, Value};

/// Output settings from global CLI flags.
#[derive(Debug, Clone, Default)]
pub struct OutputControls {
    pub json: bool,
    pub compact: bool,
    /// Comma-separated field allowlist applied to JSON objects.
    pub fields: Option<String>,
}

impl OutputControls {
    /// Render `data` as JSON honoring the field allowlist and compact flag.
    pub fn render<T: Serialize>(&self, data: &T) -> String {
        let value = serde_json::to_value(data).unwrap_or(Value::Null);
        let value = match self.fields.as_deref() {
            Some(fields) => {
                let keep: Vec<&str> = fields
                    .split(',')
                    .map(str::trim)
                    .filter(|f| !f.is_empty())
                    .collect();
                keep_fields(value, &keep)
            }
            None => value,
        };

        let rendered = if self.compact {
            serde_json::to_string(&value)
        } else {
            serde_json::to_string_pretty(&value)
        };
        rendered.unwrap_or_else(|_| "null".to_string())
    }

    pub fn print<T: Serialize>(&self, data: &T) {
        println!("{}", self.render(data));
    }

    /// Text reported for a failed command: a JSON error object with
    /// `--json`, otherwise `Error: ` and the context chain.
    pub fn error_text(&self, error: &anyhow::Error) -> String {
        let message = format!("{:#}", error);
        if self.json {
            format_error(&message)
        } else {
            format!("Error: {}", message)
        }
    }

    /// Report a failed command exactly once. JSON callers read it from
    /// stdout like any other result; text goes to stderr.
    pub fn report_error(&self, error: &anyhow::Error) {
        if self.json {
            println!("{}", self.error_text(error));
        } else {
            eprintln!("{}", self.error_text(error));
        }
    }
}

/// Keep only `keep` keys in every object, descending through arrays.
fn keep_fields(value: Value, keep: &[&str]) -> Value {
    match value {
        Value::Array(items) => {
            Value::Array(items.into_iter().map(|v| keep_fields(v, keep)).collect())
        }
        Value::Object(mut map) => {
            let mut filtered = serde_json::Map::new();
            for field in keep {
                if let Some(v) = map.remove(*field) {
                    filtered.insert(field.to_string(), v);
                }
            }
            Value::Object(filtered)
        }
        other => other,
    }
}

/// JSON error line for `--json` callers.
pub fn format_error(error: &str) -> String {
    json!({ "success": false, "error": error }).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_allowlist_on_array() {
        let controls = OutputControls {
            json: true,
            compact: true,
            fields: Some("address, thread_id".to_string()),
        };
        let data = json!([
            {"address": "5551234567", "thread_id": "1", "body_preview": "hi"},
            {"address": "5557654321", "thread_id": "2", "body_preview": "yo"}
        ]);

        assert_eq!(
            controls.render(&data),
            r#"[{"address":"5551234567","thread_id":"1"},{"address":"5557654321","thread_id":"2"}]"#
        );
    }

    #[test]
    fn test_pretty_by_default() {
        let controls = OutputControls::default();
        assert!(controls.render(&json!({"a": 1})).contains('\n'));
    }

    #[test]
    fn test_error_text_json_is_one_object() {
        let controls = OutputControls {
            json: true,
            ..Default::default()
        };
        let error = anyhow::anyhow!("5551234567: Contact already exists.");

        let text = controls.error_text(&error);

        assert_eq!(text.lines().count(), 1);
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["success"], false);
        assert_eq!(parsed["error"], "5551234567: Contact already exists.");
    }

    #[test]
    fn test_error_text_plain_includes_context() {
        let error = anyhow::anyhow!("disk full").context("Failed to update trusted list");
        assert_eq!(
            OutputControls::default().error_text(&error),
            "Error: Failed to update trusted list: disk full"
        );
    }

    #[test]
    fn test_format_error() {
        let parsed: Value = serde_json::from_str(&format_error("boom")).unwrap();
        assert_eq!(parsed["success"], false);
        assert_eq!(parsed["error"], "boom");
    }
}
