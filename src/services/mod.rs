//! Canned-reply catalog, selection strategy, and timestamp formatting.

pub mod catalog;
pub mod picker;

use chrono::Local;

/// Current local time as `YYYY-MM-DDTHH:MM:SS.ffffff`, no timezone offset.
pub fn now_timestamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}
