//! Database utility functions.

use chrono::Utc;

/// Current UTC time as an RFC 3339 string, stored in `created_at`.
pub fn current_timestamp() -> String {
    Utc::now().to_rfc3339()
}
