//! SQL queries for the SMS database.
//!
//! The `sms` table follows the telephony provider layout: `thread_id`,
//! `address`, `body` and `date` (epoch milliseconds).

/// Projection used by the thread scan. No ORDER BY: rows come back in
/// storage order.
pub const SCAN_MESSAGES: &str = r#"
SELECT
    CAST(thread_id AS TEXT),
    COALESCE(address, ''),
    COALESCE(body, ''),
    COALESCE(date, 0)
FROM sms
WHERE thread_id IS NOT NULL
"#;

/// Thread id for an address.
pub const THREAD_FOR_ADDRESS: &str = r#"
SELECT CAST(thread_id AS TEXT)
FROM sms
WHERE address = ?1
  AND thread_id IS NOT NULL
LIMIT 1
"#;

/// Schema used when creating a fresh store (tests, local fixtures).
pub const CREATE_SMS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS sms (
    _id INTEGER PRIMARY KEY AUTOINCREMENT,
    thread_id INTEGER,
    address TEXT,
    body TEXT,
    date INTEGER
)
"#;
