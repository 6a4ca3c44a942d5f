//! crates/logging/src/format.rs
//! Rendering of a record into a single line of text.

use std::fmt::Write as _;

use time::OffsetDateTime;
use time::macros::format_description;

use crate::levels::{ANSI_RESET, Level};

/// Formats `at` as `YYYY/MM/DD HH:MM:SS`.
#[must_use]
pub fn format_timestamp(at: OffsetDateTime) -> String {
    let format = format_description!(
        "[year]/[month padding:zero]/[day padding:zero] [hour padding:zero]:[minute padding:zero]:[second padding:zero]"
    );
    at.format(format)
        .unwrap_or_else(|_| "1970/01/01 00:00:00".to_string())
}

/// Current local time, or UTC when the local offset cannot be determined.
///
/// On Unix the `time` crate refuses to read the local offset while more than
/// one thread is alive, since querying it is not thread-safe there. A
/// multi-threaded process therefore logs UTC timestamps.
#[must_use]
pub fn timestamp_now() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    format_timestamp(now)
}

/// Renders `[timestamp] [caller] [LEVEL]: message`.
///
/// An unresolved caller leaves the brackets empty. Only the level tag is
/// colored.
#[must_use]
pub fn render_line(
    timestamp: &str,
    caller: Option<&str>,
    level: Level,
    colored: bool,
    message: &str,
) -> String {
    let caller = caller.unwrap_or_default();
    let mut line = String::with_capacity(
        timestamp.len() + caller.len() + message.len() + 24,
    );
    let _ = write!(line, "[{timestamp}] [{caller}] [");
    if colored {
        line.push_str(level.ansi_color());
        line.push_str(level.tag());
        line.push_str(ANSI_RESET);
    } else {
        line.push_str(level.tag());
    }
    line.push_str("]: ");
    line.push_str(message);
    line
}
