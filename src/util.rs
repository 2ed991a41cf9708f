use chrono::Local;
use uuid::Uuid;

/// Fresh entity id.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Current local time as an RFC 3339 string (`created_at`/`deleted_at`).
pub fn now_ts() -> String {
    Local::now().to_rfc3339()
}

/// Today's local calendar date as `YYYY-MM-DD`.
pub fn today_str() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}
