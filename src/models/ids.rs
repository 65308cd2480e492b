//! Strongly-typed entry IDs
//!
//! Income and expense IDs live in separate namespaces, so each gets its own
//! newtype and the two can never be passed in place of each other.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Short display form, e.g. `inc-1a2b3c4d`
            pub fn short(&self) -> String {
                format!("{}{}", $display_prefix, &self.0.simple().to_string()[..8])
            }

            /// Whether `query` names this ID, either in full or by its short form
            ///
            /// The prefix is optional; a bare hex prefix of at least four
            /// characters also matches.
            pub fn matches(&self, query: &str) -> bool {
                let query = query.trim();
                if let Ok(uuid) = Uuid::parse_str(query) {
                    return uuid == self.0;
                }
                let hex = query.strip_prefix($display_prefix).unwrap_or(query);
                hex.len() >= 4 && self.0.simple().to_string().starts_with(&hex.to_lowercase())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.short())
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(IncomeId, "inc-");
define_id!(ExpenseId, "exp-");
