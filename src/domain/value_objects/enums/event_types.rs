use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    #[default]
    Public,
    Private,
}

impl Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let event_type = match self {
            EventType::Public => "public",
            EventType::Private => "private",
        };
        write!(f, "{}", event_type)
    }
}

impl EventType {
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "public" => Some(EventType::Public),
            "private" => Some(EventType::Private),
            _ => None,
        }
    }
}
