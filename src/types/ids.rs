//! Notification identifiers.
//!
//! The native notification service keys notifications by integer, while the
//! bridge hands over opaque identifier text. [`NotificationId::from_identifier`]
//! is the one mapping between the two and is used for both publishing and
//! cancelling.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer notification identifier as understood by the native service.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NotificationId(i64);

impl NotificationId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Map bridge identifier text to an integer id.
    ///
    /// Canonical positive decimals (`"42"`) map to their value. Everything
    /// else (`"abc"`, `"-5"`, `"007"`) maps to UTF-16 length plus the first
    /// and last UTF-16 code units. The fallback is stable per input but
    /// distinct identifiers may collide.
    pub fn from_identifier(text: &str) -> Self {
        Self(parse_positive_integer(text))
    }

    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl From<i64> for NotificationId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// See [`NotificationId::from_identifier`]. The empty string maps to 0.
pub fn parse_positive_integer(text: &str) -> i64 {
    if let Ok(n) = text.parse::<i64>() {
        // Rejects "+5", "007" and friends: only the canonical rendering counts.
        if n > 0 && n.to_string() == text {
            return n;
        }
    }

    let units: Vec<u16> = text.encode_utf16().collect();
    match (units.first(), units.last()) {
        (Some(&first), Some(&last)) => units.len() as i64 + i64::from(first) + i64::from(last),
        _ => 0,
    }
}
