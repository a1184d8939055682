//! The response payload returned for every GET request.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::config::GREETING_MESSAGE;

/// JSON body served for every GET request.
///
/// Field declaration order fixes the serialized key order: `message`,
/// `time_utc`, `container`. The timestamp is captured fresh per request.
#[derive(Debug, Clone, Serialize)]
pub struct GreetingPayload {
    pub message: &'static str,
    pub time_utc: String,
    pub container: bool,
}

impl GreetingPayload {
    /// Builds a payload stamped with the current UTC time.
    ///
    /// The timestamp is ISO-8601 with microsecond precision and a `Z`
    /// designator, e.g. `2026-08-30T12:34:56.123456Z`.
    pub fn now() -> Self {
        Self {
            message: GREETING_MESSAGE,
            time_utc: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            container: true,
        }
    }
}
