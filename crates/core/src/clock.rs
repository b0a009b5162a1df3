//! Game countdown.

use chrono::{DateTime, Utc};

/// Seconds left until the game ends, rounded up, clamped at zero.
pub fn remaining_seconds(ends_at: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    let ms = (ends_at - now).num_milliseconds().max(0) as u64;
    ms.div_ceil(1000)
}

/// `HH:MM:SS` display for the in-game timer.
pub fn format_remaining(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
