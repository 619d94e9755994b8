use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A booking starts out pending and can be flipped to confirmed once.
/// Cancellation deletes the row outright rather than transitioning state.
#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
}

impl Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
        };
        write!(f, "{}", status)
    }
}

impl BookingStatus {
    pub fn from_str(value: &str) -> Self {
        match value {
            "confirmed" => BookingStatus::Confirmed,
            _ => BookingStatus::Pending,
        }
    }
}
