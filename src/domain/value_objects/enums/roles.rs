use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Member,
    Trainer,
    Admin,
}

impl Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let role = match self {
            UserRole::Member => "member",
            UserRole::Trainer => "trainer",
            UserRole::Admin => "admin",
        };
        write!(f, "{}", role)
    }
}

impl UserRole {
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "member" => Some(UserRole::Member),
            "trainer" => Some(UserRole::Trainer),
            "admin" => Some(UserRole::Admin),
            _ => None,
        }
    }
}
